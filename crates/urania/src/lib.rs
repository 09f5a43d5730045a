//! Natal chart engine: zodiac tables, local-time resolution, a low-precision
//! geocentric ephemeris, the ascendant, and an SVG wheel renderer.

pub mod chart;
pub mod ephemeris;
pub mod rendering;
pub mod sky;
pub mod time;
pub mod zodiac;

pub use chart::{calculate_chart, BirthInput, ChartCalculator, ChartData, ChartError, PlanetPosition};
pub use ephemeris::{AstroTime, Body, Ephemeris, EphemerisError, SwissEphemeris};
pub use rendering::{render_svg, ChartSpec, SvgWriter, WheelRenderer, WheelStyle};
pub use sky::{moon_phase, MoonPhaseInfo, MoonPhaseName, SkySnapshot};
pub use time::{resolve_utc, ResolveError, ResolverSettings};
pub use zodiac::{get_sign_info, get_sun_sign, lon_to_sign, Element, SignInfo, ZodiacSign};
