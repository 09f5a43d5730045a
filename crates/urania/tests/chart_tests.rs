use urania::chart::{ascendant, ASCENDANT_NAME, ASCENDANT_SYMBOL};
use urania::ephemeris::{AstroTime, Body, SwissEphemeris};
use urania::time::ResolverSettings;
use urania::{calculate_chart, lon_to_sign, BirthInput, ChartCalculator, ChartData, ChartError, ZodiacSign};

use chrono::{TimeZone, Utc};

fn new_york_1990() -> ChartData {
    calculate_chart(
        Some("1990-06-15"),
        Some("14:30"),
        Some(40.7128),
        Some(-74.0060),
        Some("America/New_York"),
    )
    .expect("chart")
    .expect("birth date present")
}

#[test]
fn test_full_profile_new_york_1990() {
    let chart = new_york_1990();

    assert_eq!(chart.sun_sign, ZodiacSign::Gemini);
    assert_eq!(chart.rising_sign, Some(ZodiacSign::Libra));
    assert_eq!(chart.planets.len(), 11);
    assert!(chart.planets.iter().all(|p| (0.0..360.0).contains(&p.degree)));

    let last = chart.planets.last().unwrap();
    assert_eq!(last.name, ASCENDANT_NAME);
    assert_eq!(last.symbol, ASCENDANT_SYMBOL);
    assert_eq!(Some(last.sign), chart.rising_sign);
}

#[test]
fn test_new_york_1990_ascendant_degree() {
    // 18:30 UTC; RAMC is about 107.3°
    let chart = new_york_1990();
    let asc = chart.ascendant().unwrap().degree;
    assert!((asc - 193.7).abs() < 0.2, "asc = {asc}");
}

#[test]
fn test_new_york_1990_planet_signs() {
    let chart = new_york_1990();
    let expected = [
        (Body::Sun, ZodiacSign::Gemini),
        (Body::Venus, ZodiacSign::Taurus),
        (Body::Mars, ZodiacSign::Aries),
        (Body::Jupiter, ZodiacSign::Cancer),
        (Body::Saturn, ZodiacSign::Capricorn),
        (Body::Uranus, ZodiacSign::Capricorn),
        (Body::Neptune, ZodiacSign::Capricorn),
        (Body::Pluto, ZodiacSign::Scorpio),
    ];
    for (body, sign) in expected {
        assert_eq!(chart.body(body).map(|p| p.sign), Some(sign), "{body}");
    }
}

#[test]
fn test_planet_order_is_fixed() {
    let chart = new_york_1990();
    let names: Vec<&str> = chart.planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
            "Ascendant"
        ]
    );
    let symbols: Vec<&str> = chart.planets.iter().map(|p| p.symbol.as_str()).collect();
    assert_eq!(symbols, ["☉", "☽", "☿", "♀", "♂", "♃", "♄", "⛢", "♆", "⯓", "AC"]);
}

#[test]
fn test_moon_sign_matches_moon_entry() {
    for date in ["1990-06-15", "1984-02-29", "2003-11-08", "2024-07-01"] {
        let chart = calculate_chart(Some(date), Some("06:15"), None, None, Some("Europe/Paris"))
            .unwrap()
            .unwrap();
        let moon = chart.body(Body::Moon).unwrap();
        assert_eq!(chart.moon_sign, lon_to_sign(moon.degree), "{date}");
    }
}

#[test]
fn test_sun_sign_matches_sun_entry() {
    let chart = new_york_1990();
    assert_eq!(chart.sun_sign, chart.body(Body::Sun).unwrap().sign);
}

#[test]
fn test_no_birth_time_means_no_rising_sign() {
    let chart = calculate_chart(Some("1990-06-15"), None, Some(40.7128), Some(-74.006), Some("America/New_York"))
        .unwrap()
        .unwrap();
    assert_eq!(chart.rising_sign, None);
    assert_eq!(chart.planets.len(), 10);
    assert!(chart.ascendant().is_none());
}

#[test]
fn test_missing_coordinates_means_no_rising_sign() {
    let chart = calculate_chart(Some("1990-06-15"), Some("14:30"), Some(40.7128), None, Some("America/New_York"))
        .unwrap()
        .unwrap();
    assert_eq!(chart.rising_sign, None);
    assert_eq!(chart.planets.len(), 10);
}

#[test]
fn test_missing_date_returns_none() {
    assert_eq!(calculate_chart(None, None, None, None, None), Ok(None));
    assert_eq!(calculate_chart(Some(""), Some("14:30"), Some(1.0), Some(2.0), Some("UTC")), Ok(None));
    assert_eq!(calculate_chart(Some("   "), None, None, None, None), Ok(None));
}

#[test]
fn test_ascendant_depends_on_latitude_sign() {
    let time = AstroTime::from_datetime(Utc.with_ymd_and_hms(1990, 6, 15, 18, 30, 0).unwrap());
    let north = ascendant(&SwissEphemeris, &time, 40.7128, -74.006).unwrap();
    let south = ascendant(&SwissEphemeris, &time, -40.7128, -74.006).unwrap();
    assert!((north - south).abs() > 1.0, "north {north}, south {south}");
    assert!((south - 209.1).abs() < 0.2, "south = {south}");
}

#[test]
fn test_unknown_timezone_still_computes_with_fallback_zone() {
    let settings = ResolverSettings {
        fallback_timezone: Some("America/New_York".to_string()),
    };
    let calc = ChartCalculator::new().with_settings(settings);
    let input = BirthInput::new("1990-06-15")
        .with_time("14:30")
        .with_location(40.7128, -74.006)
        .with_timezone("Atlantis/Capital");

    let fallback = calc.calculate(&input).unwrap().unwrap();
    assert_eq!(fallback, new_york_1990());
}

#[test]
fn test_time_without_zone_still_yields_ascendant() {
    let settings = ResolverSettings {
        fallback_timezone: Some("UTC".to_string()),
    };
    let input = BirthInput::new("1990-06-15").with_time("18:30").with_location(40.7128, -74.006);
    let chart = ChartCalculator::new().with_settings(settings).calculate(&input).unwrap().unwrap();
    assert_eq!(chart.rising_sign, Some(ZodiacSign::Libra));
    assert_eq!(chart.planets.len(), 11);
}

#[test]
fn test_malformed_time_is_reported() {
    let result = calculate_chart(Some("1990-06-15"), Some("25:99"), None, None, Some("UTC"));
    assert!(matches!(result, Err(ChartError::InvalidBirthTime(_))));
}

#[test]
fn test_dates_outside_the_ephemeris_fail() {
    for date in ["3500-01-01", "9999-12-31"] {
        let result = calculate_chart(Some(date), None, None, None, None);
        assert!(matches!(result, Err(ChartError::Ephemeris(_))), "{date}");
    }
}

#[test]
fn test_chart_json_contract() {
    let json = serde_json::to_value(new_york_1990()).unwrap();
    assert_eq!(json["sunSign"], "Gemini");
    assert_eq!(json["risingSign"], "Libra");
    assert!(json["moonSign"].is_string());
    let planets = json["planets"].as_array().unwrap();
    assert_eq!(planets.len(), 11);
    for p in planets {
        assert!(p["name"].is_string());
        assert!(p["symbol"].is_string());
        assert!(p["sign"].is_string());
        let degree = p["degree"].as_f64().unwrap();
        assert!((0.0..360.0).contains(&degree));
    }
}
