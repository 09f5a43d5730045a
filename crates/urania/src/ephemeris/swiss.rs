//! Swiss Ephemeris backend.
//!
//! Runs on the library's built-in Moshier model, so no ephemeris data files
//! have to be installed. Precision is well under an arc-second for the Sun
//! and planets and a few arc-seconds for the Moon.

use chrono::{DateTime, Utc};
use std::sync::Mutex;
use swisseph::swe::{calc_ut, houses_ex};

use crate::ephemeris::adapter::Ephemeris;
use crate::ephemeris::types::{julian_day_to_datetime, AstroTime, Body, EphemerisError, Vector3};
use crate::zodiac::normalize_degrees;

// Swiss Ephemeris object ids
const SE_ECL_NUT: i32 = -1;

// Calculation flags
const FLG_MOSEPH: u32 = 4;
const FLG_TRUEPOS: u32 = 16;
const FLG_SPEED: u32 = 256;
const FLG_XYZ: u32 = 4096;

/// Start of the Moshier planetary and lunar theories (3000 BC)
pub const MIN_JULIAN_DAY_UT: f64 = 625000.5;
/// End of the Moshier theories (AD 3000), exclusive
pub const MAX_JULIAN_DAY_UT: f64 = 2818000.5;

// The C library keeps per-process caches; calls are serialised.
static SWE_LOCK: Mutex<()> = Mutex::new(());

fn swe_id(body: Body) -> i32 {
    match body {
        Body::Sun => 0,
        Body::Moon => 1,
        Body::Mercury => 2,
        Body::Venus => 3,
        Body::Mars => 4,
        Body::Jupiter => 5,
        Body::Saturn => 6,
        Body::Uranus => 7,
        Body::Neptune => 8,
        Body::Pluto => 9,
    }
}

/// Ephemeris backed by the `swisseph` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwissEphemeris;

impl SwissEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Earliest and latest supported UT instants
    pub fn supported_range() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            julian_day_to_datetime(MIN_JULIAN_DAY_UT),
            julian_day_to_datetime(MAX_JULIAN_DAY_UT),
        )
    }

    fn check_range(&self, time: &AstroTime) -> Result<(), EphemerisError> {
        if (MIN_JULIAN_DAY_UT..MAX_JULIAN_DAY_UT).contains(&time.ut) {
            return Ok(());
        }
        let (min, max) = Self::supported_range();
        Err(EphemerisError::OutOfRange {
            datetime: time.to_datetime(),
            min,
            max,
        })
    }

    /// First three slots of `swe_calc_ut` for one object
    fn calc(&self, object: &str, code: i32, time: &AstroTime, flags: u32) -> Result<[f64; 3], EphemerisError> {
        self.check_range(time)?;
        let failed = |message: String| EphemerisError::CalculationFailed {
            object: object.to_string(),
            datetime: time.to_datetime(),
            message,
        };

        let result = {
            let _guard = SWE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            calc_ut(time.ut, code as u32, flags).map_err(|e| failed(format!("Swiss Ephemeris error: {}", e)))?
        };

        let out = result.out;
        let values = [out[0], out[1], out[2]];
        if values.iter().all(|v| v.is_finite()) {
            Ok(values)
        } else {
            Err(failed("non-finite result".to_string()))
        }
    }

    fn body_longitude(&self, body: Body, time: &AstroTime) -> Result<f64, EphemerisError> {
        let [lon, _, _] = self.calc(body.name(), swe_id(body), time, FLG_MOSEPH | FLG_SPEED)?;
        Ok(normalize_degrees(lon))
    }
}

impl Ephemeris for SwissEphemeris {
    fn sun_apparent_longitude(&self, time: &AstroTime) -> Result<f64, EphemerisError> {
        self.body_longitude(Body::Sun, time)
    }

    fn moon_ecliptic_longitude(&self, time: &AstroTime) -> Result<f64, EphemerisError> {
        self.body_longitude(Body::Moon, time)
    }

    fn geo_vector(&self, body: Body, time: &AstroTime, aberration: bool) -> Result<Vector3, EphemerisError> {
        let mut flags = FLG_MOSEPH | FLG_XYZ;
        if !aberration {
            flags |= FLG_TRUEPOS;
        }
        let [x, y, z] = self.calc(body.name(), swe_id(body), time, flags)?;
        Ok(Vector3::new(x, y, z))
    }

    fn sidereal_time(&self, time: &AstroTime) -> Result<f64, EphemerisError> {
        self.check_range(time)?;
        // ARMC on the Greenwich meridian is the apparent sidereal time
        let armc = {
            let _guard = SWE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let (_cusps, ascmc) = houses_ex(time.ut, 0, 0.0, 0.0, b'P' as i32);
            ascmc[2]
        };
        if !armc.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                object: "sidereal time".to_string(),
                datetime: time.to_datetime(),
                message: "non-finite ARMC".to_string(),
            });
        }
        Ok(normalize_degrees(armc) / 15.0)
    }

    fn true_obliquity(&self, time: &AstroTime) -> Result<f64, EphemerisError> {
        let [true_obliquity, _mean, _nutation] = self.calc("obliquity", SE_ECL_NUT, time, FLG_MOSEPH)?;
        Ok(true_obliquity)
    }
}
