use crate::chart::ascendant::ascendant;
use crate::chart::data::{ChartData, PlanetPosition};
use crate::ephemeris::{AstroTime, Body, Ephemeris, EphemerisAdapter, EphemerisError, SwissEphemeris};
use crate::time::{ResolveError, ResolvedInstant, ResolverSettings};
use crate::zodiac::{lon_to_sign, parse_birth_date};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that end a chart calculation. Incomplete birth data is not an
/// error; it only removes what cannot be computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Could not calculate chart: {0}")]
    Ephemeris(#[from] EphemerisError),
    #[error("Invalid birth time: {0:?}")]
    InvalidBirthTime(String),
    #[error(transparent)]
    Resolve(ResolveError),
}

impl From<ResolveError> for ChartError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::InvalidTime(time) => ChartError::InvalidBirthTime(time),
            other => ChartError::Resolve(other),
        }
    }
}

/// A stored birth profile. Only the date is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub birth_date: String,
    #[serde(default)]
    pub birth_time: Option<String>,
    #[serde(default, rename = "birth_lat")]
    pub latitude: Option<f64>,
    #[serde(default, rename = "birth_lng")]
    pub longitude: Option<f64>,
    #[serde(default, rename = "birth_timezone")]
    pub timezone: Option<String>,
}

impl BirthInput {
    pub fn new(birth_date: impl Into<String>) -> Self {
        Self {
            birth_date: birth_date.into(),
            ..Default::default()
        }
    }

    pub fn with_time(mut self, birth_time: impl Into<String>) -> Self {
        self.birth_time = Some(birth_time.into());
        self
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Latitude and longitude when both are present and on the globe.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let (lat, lng) = (self.latitude?, self.longitude?);
        if !lat.is_finite() || !lng.is_finite() || lat.abs() > 90.0 || lng.abs() > 180.0 {
            log::warn!("Ignoring out-of-range coordinates ({lat}, {lng})");
            return None;
        }
        Some((lat, lng))
    }
}

/// Builds [`ChartData`] from birth profiles.
#[derive(Debug, Clone, Default)]
pub struct ChartCalculator<E = SwissEphemeris> {
    adapter: EphemerisAdapter<E>,
    settings: ResolverSettings,
}

impl ChartCalculator<SwissEphemeris> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Ephemeris> ChartCalculator<E> {
    pub fn with_ephemeris(ephemeris: E) -> Self {
        Self {
            adapter: EphemerisAdapter::new(ephemeris),
            settings: ResolverSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ResolverSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    pub fn ephemeris(&self) -> &E {
        self.adapter.ephemeris()
    }

    /// Resolve the birth instant without computing positions. `Ok(None)` when
    /// the birth date is blank or does not parse.
    pub fn resolve_instant(&self, input: &BirthInput) -> Result<Option<ResolvedInstant>, ChartError> {
        let Some(date) = parse_birth_date(&input.birth_date) else {
            log::debug!("No usable birth date in {:?}", input.birth_date);
            return Ok(None);
        };
        let resolved = self
            .settings
            .resolve(date, input.birth_time.as_deref(), input.timezone.as_deref())?;
        Ok(Some(resolved))
    }

    /// Compute the chart. `Ok(None)` when there is no usable birth date.
    pub fn calculate(&self, input: &BirthInput) -> Result<Option<ChartData>, ChartError> {
        let Some(resolved) = self.resolve_instant(input)? else {
            return Ok(None);
        };
        let time = AstroTime::from_datetime(resolved.utc);
        log::debug!("Birth instant {} ({:?})", resolved.utc, resolved.basis);

        let longitudes = self.adapter.calc_longitudes(&time, &Body::ALL)?;
        let mut planets: Vec<PlanetPosition> = longitudes
            .longitudes
            .iter()
            .map(|&(body, lon)| PlanetPosition::for_body(body, lon))
            .collect();

        let sun_lon = self.adapter.longitude(Body::Sun, &time)?;
        let moon_lon = self.adapter.longitude(Body::Moon, &time)?;

        let rising_sign = match input.coordinates() {
            Some((lat, lng)) if resolved.basis.has_clock_time() => {
                let asc = ascendant(self.adapter.ephemeris(), &time, lat, lng)?;
                let entry = PlanetPosition::ascendant(asc);
                let sign = entry.sign;
                planets.push(entry);
                Some(sign)
            }
            _ => None,
        };

        Ok(Some(ChartData {
            sun_sign: lon_to_sign(sun_lon),
            moon_sign: lon_to_sign(moon_lon),
            rising_sign,
            planets,
        }))
    }
}

/// One-shot chart calculation with the bundled ephemeris and default
/// settings. Returns `Ok(None)` when `birth_date` is absent or unparseable.
pub fn calculate_chart(
    birth_date: Option<&str>,
    birth_time: Option<&str>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    timezone: Option<&str>,
) -> Result<Option<ChartData>, ChartError> {
    let Some(birth_date) = birth_date else {
        return Ok(None);
    };
    let input = BirthInput {
        birth_date: birth_date.to_string(),
        birth_time: birth_time.map(str::to_string),
        latitude,
        longitude,
        timezone: timezone.map(str::to_string),
    };
    ChartCalculator::new().calculate(&input)
}
