pub mod adapter;
pub mod swiss;
pub mod types;

pub use adapter::{daily_motion, geocentric_ecliptic_longitude, BodyLongitudes, Ephemeris, EphemerisAdapter};
pub use swiss::SwissEphemeris;
pub use types::{
    datetime_to_julian_day, julian_day_to_datetime, AstroTime, Body, EphemerisError, Vector3,
};
