use crate::ephemeris::types::{AstroTime, Body, EphemerisError, Vector3};
use crate::zodiac::normalize_degrees;

/// Source of geocentric positions and Earth-orientation quantities.
///
/// Every method may fail with [`EphemerisError::OutOfRange`] when the instant
/// is outside what the backend models, and with
/// [`EphemerisError::CalculationFailed`] when the backend itself reports an
/// error.
pub trait Ephemeris: Send + Sync {
    /// Apparent geocentric ecliptic longitude of the Sun, degrees, true
    /// equinox of date.
    fn sun_apparent_longitude(&self, time: &AstroTime) -> Result<f64, EphemerisError>;

    /// Geocentric ecliptic longitude of the Moon, degrees, true equinox of date.
    fn moon_ecliptic_longitude(&self, time: &AstroTime) -> Result<f64, EphemerisError>;

    /// Geocentric position of `body` in AU on the true ecliptic and equinox
    /// of date. With `aberration` the position is apparent (light-time and
    /// annual aberration applied), otherwise geometric.
    fn geo_vector(&self, body: Body, time: &AstroTime, aberration: bool) -> Result<Vector3, EphemerisError>;

    /// Longitude of a vector from [`Ephemeris::geo_vector`], degrees in `[0, 360)`.
    fn ecliptic_longitude(&self, vector: &Vector3) -> f64 {
        normalize_degrees(vector.y.atan2(vector.x).to_degrees())
    }

    /// Greenwich apparent sidereal time, hours in `[0, 24)`.
    fn sidereal_time(&self, time: &AstroTime) -> Result<f64, EphemerisError>;

    /// True obliquity of the ecliptic (nutation included), degrees.
    fn true_obliquity(&self, time: &AstroTime) -> Result<f64, EphemerisError>;
}

/// Geocentric ecliptic longitude of a chart body in `[0, 360)`.
///
/// The Sun and the Moon go through their dedicated longitude routines;
/// Mercury through Pluto go through an aberration-corrected geocentric
/// vector.
pub fn geocentric_ecliptic_longitude<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    body: Body,
    time: &AstroTime,
) -> Result<f64, EphemerisError> {
    let lon = match body {
        Body::Sun => ephemeris.sun_apparent_longitude(time)?,
        Body::Moon => ephemeris.moon_ecliptic_longitude(time)?,
        planet => {
            let geo = ephemeris.geo_vector(planet, time, true)?;
            ephemeris.ecliptic_longitude(&geo)
        }
    };
    Ok(normalize_degrees(lon))
}

/// Body longitudes for one instant, in chart order
#[derive(Debug, Clone, PartialEq)]
pub struct BodyLongitudes {
    pub time: AstroTime,
    pub longitudes: Vec<(Body, f64)>,
}

impl BodyLongitudes {
    pub fn get(&self, body: Body) -> Option<f64> {
        self.longitudes
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, lon)| *lon)
    }
}

/// Wraps an [`Ephemeris`] backend with the calls the chart needs.
#[derive(Debug, Clone, Default)]
pub struct EphemerisAdapter<E> {
    ephemeris: E,
}

impl<E: Ephemeris> EphemerisAdapter<E> {
    pub fn new(ephemeris: E) -> Self {
        Self { ephemeris }
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    pub fn longitude(&self, body: Body, time: &AstroTime) -> Result<f64, EphemerisError> {
        geocentric_ecliptic_longitude(&self.ephemeris, body, time)
    }

    /// Calculate longitudes for the requested bodies
    pub fn calc_longitudes(&self, time: &AstroTime, bodies: &[Body]) -> Result<BodyLongitudes, EphemerisError> {
        let longitudes = bodies
            .iter()
            .map(|&body| self.longitude(body, time).map(|lon| (body, lon)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BodyLongitudes {
            time: *time,
            longitudes,
        })
    }

    /// Daily motion in longitude, degrees per day. See [`daily_motion`].
    pub fn daily_motion(&self, body: Body, time: &AstroTime) -> Result<f64, EphemerisError> {
        daily_motion(&self.ephemeris, body, time)
    }
}

/// Daily motion in longitude from a central difference over one day,
/// degrees per day. Negative means retrograde.
pub fn daily_motion<E: Ephemeris + ?Sized>(ephemeris: &E, body: Body, time: &AstroTime) -> Result<f64, EphemerisError> {
    let before = geocentric_ecliptic_longitude(ephemeris, body, &time.add_days(-0.5))?;
    let after = geocentric_ecliptic_longitude(ephemeris, body, &time.add_days(0.5))?;
    let mut delta = after - before;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    Ok(delta)
}
