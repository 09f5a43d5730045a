use svg::node::element::path::Data;
use svg::node::element::{Circle, Line, Path, Rectangle, Text};
use svg::Document;

use crate::rendering::primitives::{Point, Shape, Stroke};
use crate::rendering::spec::ChartSpec;

/// Serialises a [`ChartSpec`] as a standalone SVG document.
#[derive(Debug, Clone, Copy)]
pub struct SvgWriter {
    /// Decimal places kept for coordinates
    pub precision: usize,
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

trait Stroked: Sized {
    fn stroked(self, stroke: Option<&Stroke>, writer: &SvgWriter) -> Self;
}

macro_rules! impl_stroked {
    ($($element:ty),*) => {$(
        impl Stroked for $element {
            fn stroked(self, stroke: Option<&Stroke>, writer: &SvgWriter) -> Self {
                let Some(stroke) = stroke else {
                    return self.set("stroke", "none");
                };
                let element = self
                    .set("stroke", stroke.paint.to_css_string())
                    .set("stroke-width", writer.num(stroke.width));
                match &stroke.dash_array {
                    Some(dash) => {
                        let dash: Vec<String> = dash.iter().map(|d| writer.num(*d).to_string()).collect();
                        element.set("stroke-dasharray", dash.join(","))
                    }
                    None => element,
                }
            }
        }
    )*};
}

impl_stroked!(Circle, Line);

impl SvgWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds to `precision` places; negative zero becomes zero.
    fn num(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.precision as i32);
        (value * scale).round() / scale + 0.0
    }

    fn at(&self, center: Point, radius: f64, angle: f64) -> (f32, f32) {
        let rad = angle.to_radians();
        (
            self.num(center.x + radius * rad.cos()) as f32,
            self.num(center.y + radius * rad.sin()) as f32,
        )
    }

    /// Path data for an annular sector: outer edge clockwise, inner edge back.
    pub fn arc_path(&self, center: Point, radius_inner: f64, radius_outer: f64, start: f64, end: f64) -> Data {
        let large = if (end - start).abs() > 180.0 { 1 } else { 0 };
        let ro = self.num(radius_outer) as f32;
        let ri = self.num(radius_inner) as f32;
        let (x1, y1) = self.at(center, radius_outer, start);
        let (x2, y2) = self.at(center, radius_outer, end);
        let (x3, y3) = self.at(center, radius_inner, end);
        let (x4, y4) = self.at(center, radius_inner, start);
        Data::new()
            .move_to((x1, y1))
            .elliptical_arc_to((ro, ro, 0, large, 1, x2, y2))
            .line_to((x3, y3))
            .elliptical_arc_to((ri, ri, 0, large, 0, x4, y4))
            .close()
    }

    fn add_shape(&self, document: Document, shape: &Shape) -> Document {
        match shape {
            Shape::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                let fill = fill.as_ref().map_or_else(|| "none".to_string(), |p| p.to_css_string());
                let circle = Circle::new()
                    .set("cx", self.num(center.x))
                    .set("cy", self.num(center.y))
                    .set("r", self.num(*radius))
                    .set("fill", fill)
                    .stroked(stroke.as_ref(), self);
                document.add(circle)
            }
            Shape::Arc {
                center,
                radius_inner,
                radius_outer,
                start_angle,
                end_angle,
                fill,
                opacity,
            } => document.add(
                Path::new()
                    .set("d", self.arc_path(*center, *radius_inner, *radius_outer, *start_angle, *end_angle))
                    .set("fill", fill.to_css_string())
                    .set("opacity", self.num(*opacity)),
            ),
            Shape::Line { from, to, stroke } => document.add(
                Line::new()
                    .set("x1", self.num(from.x))
                    .set("y1", self.num(from.y))
                    .set("x2", self.num(to.x))
                    .set("y2", self.num(to.y))
                    .stroked(Some(stroke), self),
            ),
            Shape::Text {
                position,
                content,
                size,
                fill,
                anchor,
                bold,
                font_family,
            } => {
                let mut text = Text::new(content.as_str())
                    .set("x", self.num(position.x))
                    .set("y", self.num(position.y))
                    .set("text-anchor", anchor.as_svg())
                    .set("dominant-baseline", "central")
                    .set("font-size", self.num(*size))
                    .set("fill", fill.to_css_string());
                if *bold {
                    text = text.set("font-weight", "bold");
                }
                if let Some(family) = font_family {
                    text = text.set("font-family", family.as_str()).set("letter-spacing", "0.05em");
                }
                document.add(text)
            }
        }
    }

    pub fn document(&self, spec: &ChartSpec) -> Document {
        let (w, h) = (self.num(spec.width), self.num(spec.height));
        let mut document = Document::new()
            .set("viewBox", (0, 0, w, h))
            .set("width", w)
            .set("height", h);
        if let Some(background) = &spec.background {
            document = document.add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", background.to_css_string()),
            );
        }
        spec.shapes.iter().fold(document, |document, shape| self.add_shape(document, shape))
    }

    pub fn write(&self, spec: &ChartSpec) -> String {
        self.document(spec).to_string()
    }
}
