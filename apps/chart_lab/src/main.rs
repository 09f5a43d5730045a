use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::path::PathBuf;

use urania::rendering::render_svg;
use urania::sky::{daily_horoscope, journaling_prompt, SkySnapshot};
use urania::{get_sun_sign, BirthInput, ChartCalculator, SwissEphemeris};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute a natal chart and print it as JSON")]
struct Args {
    /// Birth date, e.g. 1990-06-15.
    #[arg(long)]
    date: String,

    /// Local birth time, HH:MM or HH:MM:SS. Without it the chart uses 12:00 UTC and has no ascendant.
    #[arg(long)]
    time: Option<String>,

    /// Birth latitude in degrees, north positive.
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Birth longitude in degrees, east positive.
    #[arg(long, allow_hyphen_values = true)]
    lng: Option<f64>,

    /// IANA timezone of the birth place, e.g. America/New_York.
    #[arg(long)]
    tz: Option<String>,

    /// Write the chart wheel as SVG to this path.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Also print today's moon phase, Mercury retrograde flag, horoscope and a journaling prompt.
    #[arg(long)]
    sky: bool,

    /// Seed for the journaling prompt (default: random).
    #[arg(long)]
    seed: Option<u64>,

    /// Config file (default: configs/chart.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => urania_config::load_from_path(path)?,
        None => urania_config::load_chart_config()?,
    };

    let input = BirthInput {
        birth_date: args.date.clone(),
        birth_time: args.time.clone(),
        latitude: args.lat,
        longitude: args.lng,
        timezone: args.tz.clone(),
    };

    let calculator = ChartCalculator::new().with_settings(config.resolver.clone());
    let chart = calculator
        .calculate(&input)?
        .with_context(|| format!("No usable birth date in {:?}", args.date))?;
    log::info!(
        "{} sun, {} moon, rising {}",
        chart.sun_sign,
        chart.moon_sign,
        chart.rising_sign.map_or("unknown".to_string(), |s| s.to_string())
    );

    if let Some(path) = &args.svg {
        let svg = render_svg(&chart, &config.wheel);
        std::fs::write(path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Wrote {}", path.display());
    }

    let mut output = json!({ "chart": chart });

    if args.sky {
        let now = Utc::now();
        let sky = SkySnapshot::at(&SwissEphemeris, now)?;
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        // the horoscope card only ever has the calendar sign to go on
        let calendar_sign = get_sun_sign(&args.date);
        let prompt = journaling_prompt(calendar_sign, &sky, &mut rng);
        output["sky"] = json!({
            "snapshot": sky,
            "calendarSunSign": calendar_sign,
            "horoscope": calendar_sign.map(|sign| daily_horoscope(sign, now.date_naive())),
            "prompt": prompt,
        });
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
