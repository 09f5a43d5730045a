//! Current-sky helpers for the journal: moon phase, retrograde motion and
//! the prompt/horoscope text built on them.

pub mod prompts;

pub use prompts::{daily_horoscope, journaling_prompt, JournalPrompt};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ephemeris::{daily_motion, geocentric_ecliptic_longitude, AstroTime, Body, Ephemeris, EphemerisError};
use crate::zodiac::normalize_degrees;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhaseName {
    /// Name for a phase in `[0, 1)`, 0 being new moon and 0.5 full moon.
    pub fn from_phase(phase: f64) -> Self {
        match phase {
            p if !(0.03..0.97).contains(&p) => MoonPhaseName::NewMoon,
            p if p < 0.22 => MoonPhaseName::WaxingCrescent,
            p if p < 0.28 => MoonPhaseName::FirstQuarter,
            p if p < 0.47 => MoonPhaseName::WaxingGibbous,
            p if p < 0.53 => MoonPhaseName::FullMoon,
            p if p < 0.72 => MoonPhaseName::WaningGibbous,
            p if p < 0.78 => MoonPhaseName::LastQuarter,
            _ => MoonPhaseName::WaningCrescent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoonPhaseName::NewMoon => "New Moon",
            MoonPhaseName::WaxingCrescent => "Waxing Crescent",
            MoonPhaseName::FirstQuarter => "First Quarter",
            MoonPhaseName::WaxingGibbous => "Waxing Gibbous",
            MoonPhaseName::FullMoon => "Full Moon",
            MoonPhaseName::WaningGibbous => "Waning Gibbous",
            MoonPhaseName::LastQuarter => "Last Quarter",
            MoonPhaseName::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoonPhaseName::NewMoon => "●",
            MoonPhaseName::WaxingCrescent | MoonPhaseName::FirstQuarter => "◑",
            MoonPhaseName::WaxingGibbous => "◕",
            MoonPhaseName::FullMoon => "○",
            MoonPhaseName::WaningGibbous => "◔",
            MoonPhaseName::LastQuarter | MoonPhaseName::WaningCrescent => "◐",
        }
    }
}

impl fmt::Display for MoonPhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonPhaseInfo {
    pub name: MoonPhaseName,
    pub emoji: String,
    /// Illuminated fraction of the disc, `[0, 1]`
    pub fraction: f64,
    /// Position in the synodic cycle, `[0, 1)`
    pub phase: f64,
}

/// Moon phase from the Sun–Moon elongation in ecliptic longitude.
pub fn moon_phase<E: Ephemeris + ?Sized>(ephemeris: &E, time: &AstroTime) -> Result<MoonPhaseInfo, EphemerisError> {
    let sun = geocentric_ecliptic_longitude(ephemeris, Body::Sun, time)?;
    let moon = geocentric_ecliptic_longitude(ephemeris, Body::Moon, time)?;
    let elongation = normalize_degrees(moon - sun);

    let phase = elongation / 360.0;
    let name = MoonPhaseName::from_phase(phase);
    Ok(MoonPhaseInfo {
        name,
        emoji: name.emoji().to_string(),
        fraction: (1.0 - elongation.to_radians().cos()) / 2.0,
        phase,
    })
}

/// Whether `body`'s geocentric longitude is decreasing at `time`.
pub fn is_retrograde<E: Ephemeris + ?Sized>(ephemeris: &E, body: Body, time: &AstroTime) -> Result<bool, EphemerisError> {
    Ok(daily_motion(ephemeris, body, time)? < 0.0)
}

pub fn is_mercury_retrograde<E: Ephemeris + ?Sized>(ephemeris: &E, time: &AstroTime) -> Result<bool, EphemerisError> {
    is_retrograde(ephemeris, Body::Mercury, time)
}

/// The sky at one instant, as far as the journal cares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkySnapshot {
    pub time: DateTime<Utc>,
    pub moon: MoonPhaseInfo,
    pub mercury_retrograde: bool,
}

impl SkySnapshot {
    pub fn at<E: Ephemeris + ?Sized>(ephemeris: &E, time: DateTime<Utc>) -> Result<Self, EphemerisError> {
        let astro = AstroTime::from_datetime(time);
        Ok(Self {
            time,
            moon: moon_phase(ephemeris, &astro)?,
            mercury_retrograde: is_mercury_retrograde(ephemeris, &astro)?,
        })
    }

    pub fn now<E: Ephemeris + ?Sized>(ephemeris: &E) -> Result<Self, EphemerisError> {
        Self::at(ephemeris, Utc::now())
    }
}
