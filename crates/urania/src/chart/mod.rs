pub mod ascendant;
pub mod assembler;
pub mod data;

pub use ascendant::ascendant;
pub use assembler::{calculate_chart, BirthInput, ChartCalculator, ChartError};
pub use data::{ChartData, PlanetPosition, ASCENDANT_NAME, ASCENDANT_SYMBOL};

/// Point on a circle for an angle in degrees, measured clockwise from the
/// positive x axis in screen coordinates (y grows downwards).
pub fn get_point_position(cx: f64, cy: f64, radius: f64, angle_degrees: f64) -> (f64, f64) {
    let angle = angle_degrees.to_radians();
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}
