//! Natal wheel rendering: [`ChartData`](crate::ChartData) to a declarative
//! [`ChartSpec`], then to SVG.

pub mod generator;
pub mod primitives;
pub mod spec;
pub mod visual_config;
pub mod writer;

pub use generator::{wheel_angle, WheelRenderer};
pub use primitives::{Color, InvalidPaint, Paint, Point, Shape, Stroke, TextAnchor};
pub use spec::ChartSpec;
pub use visual_config::{InvalidWheelStyle, WheelStyle};
pub use writer::SvgWriter;

use crate::chart::ChartData;

/// Render a chart to an SVG document with the given style.
pub fn render_svg(chart: &ChartData, style: &WheelStyle) -> String {
    let spec = WheelRenderer::with_style(style.clone()).render(chart);
    SvgWriter::new().write(&spec)
}
