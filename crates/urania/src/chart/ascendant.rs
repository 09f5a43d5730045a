use crate::ephemeris::{AstroTime, Ephemeris, EphemerisError};
use crate::zodiac::normalize_degrees;

/// Local sidereal time in hours `[0, 24)` for an east-positive longitude.
pub fn local_sidereal_time(gast_hours: f64, longitude: f64) -> f64 {
    (gast_hours + longitude / 15.0).rem_euclid(24.0)
}

/// Ascendant from the right ascension of the midheaven, the obliquity and the
/// geographic latitude, all in degrees.
///
/// The argument order of `atan2` fixes the quadrant: swapping or negating
/// either side puts the ascendant in the wrong half of the zodiac.
pub fn ascendant_from_ramc(ramc: f64, obliquity: f64, latitude: f64) -> f64 {
    let ramc = ramc.to_radians();
    let obl = obliquity.to_radians();
    let lat = latitude.to_radians();

    let y = ramc.cos();
    let x = -(obl.sin() * lat.tan() + obl.cos() * ramc.sin());
    normalize_degrees(y.atan2(x).to_degrees())
}

/// Ecliptic longitude of the ascendant, degrees `[0, 360)`.
///
/// `latitude` is north-positive and `longitude` east-positive. Callers must
/// only use this with a real clock time; the noon default gives a
/// meaningless rising sign.
pub fn ascendant<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    time: &AstroTime,
    latitude: f64,
    longitude: f64,
) -> Result<f64, EphemerisError> {
    let gast = ephemeris.sidereal_time(time)?;
    let ramc = local_sidereal_time(gast, longitude) * 15.0;
    let obliquity = ephemeris.true_obliquity(time)?;
    Ok(ascendant_from_ramc(ramc, obliquity, latitude))
}
