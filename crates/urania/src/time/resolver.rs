use crate::zodiac::parse_birth_date;
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while turning a birth profile into an instant
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("Invalid birth date: {0:?}")]
    InvalidDate(String),
    #[error("Invalid birth time: {0:?} (expected HH:MM or HH:MM:SS)")]
    InvalidTime(String),
    #[error("Unknown IANA timezone: {0:?}")]
    UnknownTimezone(String),
}

lazy_static::lazy_static! {
    // HH:MM, HH:MM:SS, HH:MM:SS.fff; extra fields after seconds are ignored
    static ref CLOCK_TIME: Regex =
        Regex::new(r"^(\d{1,2}):(\d{1,2})(?::(\d{1,2})(?:[.,]\d*)?)?(?::.*)?$").expect("clock time regex");
}

/// Parse a wall clock, flagging the end-of-day `24:MM` form.
fn parse_clock(time_str: &str) -> Result<(NaiveTime, bool), ResolveError> {
    let invalid = || ResolveError::InvalidTime(time_str.to_string());
    let caps = CLOCK_TIME.captures(time_str.trim()).ok_or_else(invalid)?;

    let field = |i: usize| -> Result<u32, ResolveError> {
        caps.get(i)
            .map_or(Ok(0), |m| m.as_str().parse::<u32>())
            .map_err(|_| invalid())
    };

    let hour = field(1)?;
    let minute = field(2)?;
    let second = field(3)?;
    let end_of_day = hour == 24;
    let hour = if end_of_day { 0 } else { hour };

    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(invalid)?;
    Ok((time, end_of_day))
}

/// Normalise a wall-clock string to `HH:MM:SS`.
///
/// Missing seconds become `:00` and sub-second digits are dropped. An hour of
/// `24` gives `00`; [`local_datetime`] moves such a time onto the next date.
pub fn normalize_time(time_str: &str) -> Result<NaiveTime, ResolveError> {
    parse_clock(time_str).map(|(time, _)| time)
}

/// Combine a date with a wall clock. `24:MM` is `00:MM` of the following day.
pub fn local_datetime(date: NaiveDate, time_str: &str) -> Result<NaiveDateTime, ResolveError> {
    let (time, end_of_day) = parse_clock(time_str)?;
    let date = if end_of_day {
        date.succ_opt().ok_or_else(|| ResolveError::InvalidDate(date.to_string()))?
    } else {
        date
    };
    Ok(date.and_time(time))
}

pub fn parse_timezone(name: &str) -> Result<Tz, ResolveError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ResolveError::UnknownTimezone(name.to_string()))
}

/// Convert a birth date + local clock time in a named zone to UTC.
pub fn resolve_utc(date_str: &str, time_str: &str, timezone: &str) -> Result<DateTime<Utc>, ResolveError> {
    let date = parse_birth_date(date_str).ok_or_else(|| ResolveError::InvalidDate(date_str.to_string()))?;
    let local = local_datetime(date, time_str)?;
    let tz = parse_timezone(timezone)?;
    Ok(resolve_in_zone(local, tz))
}

/// Guess-and-correct conversion of a zone's civil time to UTC.
///
/// The civil time is first read as if it were UTC. That guess is rendered as
/// a wall clock in `tz`, using the offset in force at that instant, and the
/// rendering is read back as UTC. The difference between the two is the zone
/// offset, applied once to the guess.
pub fn resolve_in_zone(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    let guess = Utc.from_utc_datetime(&local);
    let rendered = guess.with_timezone(&tz).naive_local();
    let reinterpreted = Utc.from_utc_datetime(&rendered);
    let offset = guess - reinterpreted;
    guess + offset
}

/// Read a civil time in the process' local zone.
///
/// Ambiguous times (DST fall-back) take the earlier instant; times inside a
/// spring-forward gap are pushed forward by an hour.
pub fn resolve_in_local(local: NaiveDateTime) -> DateTime<Utc> {
    Local
        .from_local_datetime(&local)
        .earliest()
        .or_else(|| Local.from_local_datetime(&(local + Duration::hours(1))).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&local))
}

/// How a birth instant was obtained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "zone")]
pub enum TimeBasis {
    /// Birth time read in the birth place's own zone
    BirthZone(String),
    /// Birth time known but zone missing or unknown; read in a fallback zone
    Fallback(String),
    /// Birth time known but zone missing or unknown; read in the process' local zone
    ProcessLocal,
    /// No birth time: 12:00 UTC on the birth date
    NoonUtc,
}

impl TimeBasis {
    /// Whether a real clock time went into the instant. The noon default
    /// cannot support an ascendant.
    pub fn has_clock_time(&self) -> bool {
        !matches!(self, TimeBasis::NoonUtc)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInstant {
    pub utc: DateTime<Utc>,
    pub basis: TimeBasis,
}

/// Fallback policy for profiles with incomplete time data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// IANA zone used when a birth time has no usable zone. `None` means the
    /// zone of the running process.
    pub fallback_timezone: Option<String>,
}

impl ResolverSettings {
    pub fn validate(&self) -> Result<(), ResolveError> {
        match &self.fallback_timezone {
            Some(name) => parse_timezone(name).map(|_| ()),
            None => Ok(()),
        }
    }

    /// Apply the fallback policy: zone + time is precise, time alone uses
    /// the fallback zone, no time at all gives noon UTC.
    pub fn resolve(
        &self,
        date: NaiveDate,
        birth_time: Option<&str>,
        timezone: Option<&str>,
    ) -> Result<ResolvedInstant, ResolveError> {
        let Some(time_str) = birth_time.filter(|t| !t.trim().is_empty()) else {
            log::debug!("No birth time for {date}; using 12:00 UTC");
            let noon = date
                .and_hms_opt(12, 0, 0)
                .ok_or_else(|| ResolveError::InvalidDate(date.to_string()))?;
            return Ok(ResolvedInstant {
                utc: Utc.from_utc_datetime(&noon),
                basis: TimeBasis::NoonUtc,
            });
        };

        let local = local_datetime(date, time_str)?;

        if let Some(name) = timezone.filter(|z| !z.trim().is_empty()) {
            match parse_timezone(name) {
                Ok(tz) => {
                    return Ok(ResolvedInstant {
                        utc: resolve_in_zone(local, tz),
                        basis: TimeBasis::BirthZone(tz.name().to_string()),
                    });
                }
                Err(e) => log::warn!("{e}; falling back to local time"),
            }
        }

        match &self.fallback_timezone {
            Some(name) => {
                let tz = parse_timezone(name)?;
                log::debug!("Reading birth time {local} in fallback zone {name}");
                Ok(ResolvedInstant {
                    utc: resolve_in_zone(local, tz),
                    basis: TimeBasis::Fallback(tz.name().to_string()),
                })
            }
            None => {
                log::debug!("Reading birth time {local} in the process' local zone");
                Ok(ResolvedInstant {
                    utc: resolve_in_local(local),
                    basis: TimeBasis::ProcessLocal,
                })
            }
        }
    }
}
