use crate::chart::{get_point_position, ChartData, PlanetPosition};
use crate::rendering::primitives::{Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::ChartSpec;
use crate::rendering::visual_config::WheelStyle;
use crate::zodiac::ZodiacSign;

/// Screen angle for an ecliptic longitude: 0° Aries at the top of the
/// wheel, longitude increasing clockwise.
pub fn wheel_angle(longitude: f64) -> f64 {
    longitude - 90.0
}

/// Turns a [`ChartData`] into a flat list of wheel shapes.
#[derive(Debug, Clone, Default)]
pub struct WheelRenderer {
    style: WheelStyle,
}

impl WheelRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: WheelStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &WheelStyle {
        &self.style
    }

    pub fn render(&self, chart: &ChartData) -> ChartSpec {
        let mut spec = ChartSpec::new(self.style.size, self.style.size);
        let center = spec.center;

        self.push_rings(&mut spec, center);
        self.push_signs(&mut spec, center, chart.sun_sign);
        for planet in &chart.planets {
            self.push_planet(&mut spec, center, planet);
        }
        self.push_center(&mut spec, center, chart.sun_sign);

        spec
    }

    fn polar(&self, center: Point, radius: f64, angle: f64) -> Point {
        let (x, y) = get_point_position(center.x, center.y, radius, angle);
        Point::new(x, y)
    }

    fn push_rings(&self, spec: &mut ChartSpec, center: Point) {
        let s = &self.style;
        for radius in [s.outer_radius, s.inner_radius] {
            spec.push(Shape::Circle {
                center,
                radius,
                fill: None,
                stroke: Some(Stroke::solid(s.border.clone(), 1.0)),
            });
        }
        spec.push(Shape::Circle {
            center,
            radius: s.planet_radius - s.guide_inset,
            fill: None,
            stroke: Some(Stroke::dashed(s.border.clone(), 0.5, vec![2.0, 4.0])),
        });
    }

    fn push_signs(&self, spec: &mut ChartSpec, center: Point, sun_sign: ZodiacSign) {
        let s = &self.style;
        for sign in ZodiacSign::ALL {
            let start = wheel_angle(sign.index() as f64 * 30.0);
            let highlighted = sign == sun_sign;

            spec.push(Shape::Line {
                from: self.polar(center, s.outer_radius, start),
                to: self.polar(center, s.inner_radius, start),
                stroke: Stroke::solid(s.border.clone(), 0.5),
            });

            if highlighted {
                spec.push(Shape::Arc {
                    center,
                    radius_inner: s.inner_radius,
                    radius_outer: s.outer_radius,
                    start_angle: start,
                    end_angle: start + 30.0,
                    fill: s.accent.clone(),
                    opacity: s.highlight_opacity,
                });
            }

            spec.push(Shape::Text {
                position: self.polar(center, s.label_radius(), start + 15.0),
                content: sign.symbol().to_string(),
                size: s.sign_font_size,
                fill: if highlighted { s.accent.clone() } else { s.muted.clone() },
                anchor: TextAnchor::Middle,
                bold: false,
                font_family: None,
            });
        }
    }

    fn push_planet(&self, spec: &mut ChartSpec, center: Point, planet: &PlanetPosition) {
        let s = &self.style;
        let radius = if planet.is_ascendant() {
            s.inner_radius - 5.0
        } else {
            s.planet_radius
        };
        let position = self.polar(center, radius, wheel_angle(planet.degree));

        spec.push(Shape::Circle {
            center: position,
            radius: s.planet_marker_radius,
            fill: Some(s.background.clone()),
            stroke: Some(Stroke::solid(s.accent.clone(), 1.0)),
        });
        spec.push(Shape::Text {
            position,
            content: planet.symbol.clone(),
            size: if planet.symbol.chars().count() > 1 { 8.0 } else { 12.0 },
            fill: s.accent.clone(),
            anchor: TextAnchor::Middle,
            bold: true,
            font_family: None,
        });
    }

    fn push_center(&self, spec: &mut ChartSpec, center: Point, sun_sign: ZodiacSign) {
        let s = &self.style;
        spec.push(Shape::Circle {
            center,
            radius: s.center_radius,
            fill: Some(s.background.clone()),
            stroke: Some(Stroke::solid(s.border.clone(), 1.0)),
        });
        spec.push(Shape::Text {
            position: Point::new(center.x, center.y - 6.0),
            content: sun_sign.symbol().to_string(),
            size: 16.0,
            fill: s.accent.clone(),
            anchor: TextAnchor::Middle,
            bold: false,
            font_family: None,
        });
        spec.push(Shape::Text {
            position: Point::new(center.x, center.y + 10.0),
            content: sun_sign.name().to_uppercase(),
            size: 6.0,
            fill: s.muted.clone(),
            anchor: TextAnchor::Middle,
            bold: false,
            font_family: Some(s.label_font.clone()),
        });
    }
}
