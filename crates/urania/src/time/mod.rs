pub mod resolver;

pub use resolver::{
    local_datetime, normalize_time, parse_timezone, resolve_in_local, resolve_in_zone, resolve_utc, ResolveError,
    ResolvedInstant, ResolverSettings, TimeBasis,
};
