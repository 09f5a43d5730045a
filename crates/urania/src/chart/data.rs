use crate::ephemeris::Body;
use crate::zodiac::{lon_to_sign, normalize_degrees, ZodiacSign};
use serde::{Deserialize, Serialize};

pub const ASCENDANT_NAME: &str = "Ascendant";
pub const ASCENDANT_SYMBOL: &str = "AC";

/// One placed point on the wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub name: String,
    pub symbol: String,
    pub sign: ZodiacSign,
    /// Ecliptic longitude, `[0, 360)`
    pub degree: f64,
}

impl PlanetPosition {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, longitude: f64) -> Self {
        let degree = normalize_degrees(longitude);
        Self {
            name: name.into(),
            symbol: symbol.into(),
            sign: lon_to_sign(degree),
            degree,
        }
    }

    pub fn for_body(body: Body, longitude: f64) -> Self {
        Self::new(body.name(), body.symbol(), longitude)
    }

    pub fn ascendant(longitude: f64) -> Self {
        Self::new(ASCENDANT_NAME, ASCENDANT_SYMBOL, longitude)
    }

    pub fn is_ascendant(&self) -> bool {
        self.name == ASCENDANT_NAME
    }

    /// Degrees past the start of the sign, `[0, 30)`
    pub fn degree_in_sign(&self) -> f64 {
        self.degree % 30.0
    }
}

/// A computed natal chart. `planets` holds the ten bodies in fixed order,
/// followed by the ascendant when it could be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub rising_sign: Option<ZodiacSign>,
    pub planets: Vec<PlanetPosition>,
}

impl ChartData {
    pub fn planet(&self, name: &str) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.name == name)
    }

    pub fn body(&self, body: Body) -> Option<&PlanetPosition> {
        self.planet(body.name())
    }

    pub fn ascendant(&self) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.is_ascendant())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ChartData {
        ChartData {
            sun_sign: ZodiacSign::Gemini,
            moon_sign: ZodiacSign::Aries,
            rising_sign: None,
            planets: vec![
                PlanetPosition::for_body(Body::Sun, 84.2),
                PlanetPosition::for_body(Body::Moon, 12.0),
            ],
        }
    }

    #[test]
    fn test_position_normalizes_degree() {
        let p = PlanetPosition::for_body(Body::Mars, -15.0);
        assert_eq!(p.degree, 345.0);
        assert_eq!(p.sign, ZodiacSign::Pisces);
        assert_eq!(p.symbol, "♂");
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["sunSign"], "Gemini");
        assert_eq!(json["moonSign"], "Aries");
        assert!(json["risingSign"].is_null());
        assert_eq!(json["planets"][0]["name"], "Sun");
        assert_eq!(json["planets"][0]["sign"], "Gemini");
        assert_eq!(json["planets"][1]["degree"], 12.0);
    }

    #[test]
    fn test_lookup_helpers() {
        let chart = sample();
        assert_eq!(chart.body(Body::Moon).map(|p| p.sign), Some(ZodiacSign::Aries));
        assert!(chart.ascendant().is_none());
        assert!((chart.planets[0].degree_in_sign() - 24.2).abs() < 1e-9);
    }
}
