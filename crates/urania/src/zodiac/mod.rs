//! Zodiac signs, their calendar ranges and elements.
//!
//! Two independent ways of naming a sign live here: [`lon_to_sign`] maps an
//! ecliptic longitude (30° per sign, Aries at 0°), and [`get_sun_sign`] is the
//! calendar shortcut used when only a birth date is known. The two can disagree
//! by a day around the cusps because the calendar ranges are fixed while the
//! equinox drifts from year to year.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Static reference data for one sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignInfo {
    pub sign: ZodiacSign,
    pub name: &'static str,
    pub symbol: &'static str,
    /// Inclusive `(month, day)` start of the calendar range.
    pub start: (u32, u32),
    /// Inclusive `(month, day)` end of the calendar range.
    pub end: (u32, u32),
    pub element: Element,
}

const fn info(
    sign: ZodiacSign,
    name: &'static str,
    symbol: &'static str,
    start: (u32, u32),
    end: (u32, u32),
    element: Element,
) -> SignInfo {
    SignInfo { sign, name, symbol, start, end, element }
}

/// Ordered by ecliptic longitude: index `i` covers `[i*30, i*30 + 30)`.
pub const SIGNS: [SignInfo; 12] = [
    info(ZodiacSign::Aries, "Aries", "♈", (3, 21), (4, 19), Element::Fire),
    info(ZodiacSign::Taurus, "Taurus", "♉", (4, 20), (5, 20), Element::Earth),
    info(ZodiacSign::Gemini, "Gemini", "♊", (5, 21), (6, 20), Element::Air),
    info(ZodiacSign::Cancer, "Cancer", "♋", (6, 21), (7, 22), Element::Water),
    info(ZodiacSign::Leo, "Leo", "♌", (7, 23), (8, 22), Element::Fire),
    info(ZodiacSign::Virgo, "Virgo", "♍", (8, 23), (9, 22), Element::Earth),
    info(ZodiacSign::Libra, "Libra", "♎", (9, 23), (10, 22), Element::Air),
    info(ZodiacSign::Scorpio, "Scorpio", "♏", (10, 23), (11, 21), Element::Water),
    info(ZodiacSign::Sagittarius, "Sagittarius", "♐", (11, 22), (12, 21), Element::Fire),
    info(ZodiacSign::Capricorn, "Capricorn", "♑", (12, 22), (1, 19), Element::Earth),
    info(ZodiacSign::Aquarius, "Aquarius", "♒", (1, 20), (2, 18), Element::Air),
    info(ZodiacSign::Pisces, "Pisces", "♓", (2, 19), (3, 20), Element::Water),
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Position in ecliptic order, 0 = Aries.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> ZodiacSign {
        Self::ALL[index % 12]
    }

    pub fn info(self) -> &'static SignInfo {
        &SIGNS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    pub fn element(self) -> Element {
        self.info().element
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown zodiac sign: {0}")]
pub struct UnknownSign(pub String);

impl FromStr for ZodiacSign {
    type Err = UnknownSign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SIGNS
            .iter()
            .find(|info| info.name.eq_ignore_ascii_case(wanted))
            .map(|info| info.sign)
            .ok_or_else(|| UnknownSign(s.to_string()))
    }
}

/// `((x mod 360) + 360) mod 360`
pub fn normalize_degrees(x: f64) -> f64 {
    ((x % 360.0) + 360.0) % 360.0
}

/// Sign containing an ecliptic longitude. Accepts any real input, including
/// negative values and values past 360°.
pub fn lon_to_sign(longitude: f64) -> ZodiacSign {
    let normalized = normalize_degrees(longitude);
    ZodiacSign::from_index((normalized / 30.0).floor() as usize % 12)
}

/// Table lookup by sign name, case-insensitive.
pub fn get_sign_info(name: &str) -> Option<&'static SignInfo> {
    name.parse::<ZodiacSign>().ok().map(ZodiacSign::info)
}

/// Parse a calendar date: `YYYY-MM-DD`, an RFC 3339 timestamp (date part
/// only) or the basic `YYYYMMDD` form.
pub fn parse_birth_date(date_str: &str) -> Option<NaiveDate> {
    let s = date_str.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            // 2024-03-21T09:00 without seconds or offset
            s.split_once('T')
                .and_then(|(date, _)| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        })
        .or_else(|| NaiveDate::parse_from_str(s, "%Y%m%d").ok())
}

/// Sun sign from the calendar ranges alone, without any solar position.
///
/// Returns `None` only when the date does not parse.
pub fn get_sun_sign(date_str: &str) -> Option<ZodiacSign> {
    parse_birth_date(date_str).and_then(sun_sign_for_date)
}

pub fn sun_sign_for_date(date: NaiveDate) -> Option<ZodiacSign> {
    let (month, day) = (date.month(), date.day());

    SIGNS.iter().find_map(|sign| {
        let (sm, sd) = sign.start;
        let (em, ed) = sign.end;
        let hit = if sign.sign == ZodiacSign::Capricorn {
            (month == 12 && day >= 22) || (month == 1 && day <= 19)
        } else {
            (month == sm && day >= sd) || (month == em && day <= ed)
        };
        hit.then_some(sign.sign)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements_cycle_fire_earth_air_water() {
        let order = [Element::Fire, Element::Earth, Element::Air, Element::Water];
        for (i, sign) in ZodiacSign::ALL.iter().enumerate() {
            assert_eq!(sign.element(), order[i % 4], "{sign}");
        }
    }

    #[test]
    fn test_table_is_in_ecliptic_order() {
        for (i, info) in SIGNS.iter().enumerate() {
            assert_eq!(info.sign.index(), i);
        }
    }

    #[test]
    fn test_lon_to_sign_wraps() {
        assert_eq!(lon_to_sign(0.0), ZodiacSign::Aries);
        assert_eq!(lon_to_sign(359.999), ZodiacSign::Pisces);
        assert_eq!(lon_to_sign(360.0), ZodiacSign::Aries);
        assert_eq!(lon_to_sign(-10.0), lon_to_sign(350.0));
        assert_eq!(lon_to_sign(725.0), ZodiacSign::Aries);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("sagittarius".parse::<ZodiacSign>().unwrap(), ZodiacSign::Sagittarius);
        assert_eq!(" Leo ".parse::<ZodiacSign>().unwrap(), ZodiacSign::Leo);
        assert!("Ophiuchus".parse::<ZodiacSign>().is_err());
    }

    #[test]
    fn test_parse_birth_date_forms() {
        let expected = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        assert_eq!(parse_birth_date("1990-06-15"), Some(expected));
        assert_eq!(parse_birth_date("1990-06-15T23:30:00+02:00"), Some(expected));
        assert_eq!(parse_birth_date("1990-06-15T23:30"), Some(expected));
        assert_eq!(parse_birth_date("19900615"), Some(expected));
        assert_eq!(parse_birth_date(""), None);
        assert_eq!(parse_birth_date("June 15th"), None);
    }
}
