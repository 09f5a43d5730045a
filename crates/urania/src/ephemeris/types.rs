use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use swisseph::swe::{julday, revjul};
use thiserror::Error;

/// Julian day of the J2000.0 epoch (2000-01-01 12:00)
pub const J2000: f64 = 2451545.0;
/// Swiss Ephemeris calendar flag for the Gregorian calendar
const GREG_CAL: i32 = 1;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("{datetime} is outside the supported ephemeris range ({min} to {max})")]
    OutOfRange {
        datetime: DateTime<Utc>,
        min: DateTime<Utc>,
        max: DateTime<Utc>,
    },
    #[error("Failed to calculate {object} at {datetime}: {message}")]
    CalculationFailed {
        object: String,
        datetime: DateTime<Utc>,
        message: String,
    },
}

/// The ten bodies placed on a natal chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// Chart order
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Body::Sun => "☉",
            Body::Moon => "☽",
            Body::Mercury => "☿",
            Body::Venus => "♀",
            Body::Mars => "♂",
            Body::Jupiter => "♃",
            Body::Saturn => "♄",
            Body::Uranus => "⛢",
            Body::Neptune => "♆",
            Body::Pluto => "⯓",
        }
    }

    /// Mercury through Pluto: bodies resolved through a geocentric vector
    pub fn is_planet(&self) -> bool {
        !matches!(self, Body::Sun | Body::Moon)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An instant as a Julian day on the UT scale. The ephemeris library
/// applies ΔT itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstroTime {
    pub ut: f64,
}

impl AstroTime {
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::from_julian_ut(datetime_to_julian_day(dt))
    }

    pub fn from_julian_ut(ut: f64) -> Self {
        Self { ut }
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self { ut: self.ut + days }
    }

    pub fn to_datetime(&self) -> DateTime<Utc> {
        julian_day_to_datetime(self.ut)
    }
}

impl From<DateTime<Utc>> for AstroTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

/// Convert UTC datetime to Julian Day
pub fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let seconds = f64::from(dt.second()) + f64::from(dt.nanosecond()) * 1e-9;
    let hour_decimal = f64::from(dt.hour()) + f64::from(dt.minute()) / 60.0 + seconds / 3600.0;
    julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, GREG_CAL as u32)
}

/// Convert Julian Day to UTC datetime, to the millisecond
pub fn julian_day_to_datetime(jd: f64) -> DateTime<Utc> {
    let (year, month, day, hour_decimal) = revjul(jd, GREG_CAL);
    let millis = (hour_decimal * 3_600_000.0).round() as i64;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight) + Duration::milliseconds(millis))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Cartesian position in astronomical units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
