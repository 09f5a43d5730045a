use crate::rendering::primitives::Paint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid wheel style: {0}")]
pub struct InvalidWheelStyle(pub String);

/// Geometry and theme colours of the natal wheel.
///
/// Colours default to the host page's theme variables so the SVG follows
/// light and dark themes without re-rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelStyle {
    /// Width and height of the square canvas
    pub size: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub planet_radius: f64,
    /// Distance of the dashed guide circle inside the planet ring
    pub guide_inset: f64,
    pub planet_marker_radius: f64,
    pub center_radius: f64,
    pub sign_font_size: f64,
    pub highlight_opacity: f64,
    pub accent: Paint,
    pub border: Paint,
    pub muted: Paint,
    pub background: Paint,
    pub label_font: String,
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self {
            size: 400.0,
            outer_radius: 180.0,
            inner_radius: 140.0,
            planet_radius: 110.0,
            guide_inset: 20.0,
            planet_marker_radius: 12.0,
            center_radius: 30.0,
            sign_font_size: 14.0,
            highlight_opacity: 0.15,
            accent: Paint::var("th-accent"),
            border: Paint::var("th-border"),
            muted: Paint::var("th-muted"),
            background: Paint::var("th-bg"),
            label_font: "var(--font-mono-editorial, monospace)".to_string(),
        }
    }
}

impl WheelStyle {
    /// Radii must nest: centre disc < guide < planets < inner < outer, and
    /// the outer ring must fit on the canvas.
    pub fn validate(&self) -> Result<(), InvalidWheelStyle> {
        let guide = self.planet_radius - self.guide_inset;
        let nested = [self.center_radius, guide, self.planet_radius, self.inner_radius, self.outer_radius];
        if nested.iter().any(|r| !r.is_finite() || *r <= 0.0) {
            return Err(InvalidWheelStyle("radii must be positive".to_string()));
        }
        if nested.windows(2).any(|w| w[0] >= w[1]) {
            return Err(InvalidWheelStyle(format!(
                "radii must increase outwards, got centre {} guide {} planets {} inner {} outer {}",
                nested[0], nested[1], nested[2], nested[3], nested[4]
            )));
        }
        if self.outer_radius * 2.0 > self.size {
            return Err(InvalidWheelStyle(format!(
                "outer radius {} does not fit a {} canvas",
                self.outer_radius, self.size
            )));
        }
        if !(0.0..=1.0).contains(&self.highlight_opacity) {
            return Err(InvalidWheelStyle("highlight_opacity must be within 0..=1".to_string()));
        }
        Ok(())
    }

    pub fn center(&self) -> f64 {
        self.size / 2.0
    }

    /// Radius of the sign symbols, midway through the sign band
    pub fn label_radius(&self) -> f64 {
        (self.outer_radius + self.inner_radius) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_valid() {
        assert_eq!(WheelStyle::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_style_keeps_defaults() {
        let style: WheelStyle = serde_json::from_str(r##"{"size": 600.0, "accent": "#ff8800"}"##).unwrap();
        assert_eq!(style.size, 600.0);
        assert_eq!(style.outer_radius, 180.0);
        assert_eq!(style.accent.to_css_string(), "rgb(255, 136, 0)");
    }

    #[test]
    fn test_swapped_radii_are_rejected() {
        let style = WheelStyle {
            inner_radius: 190.0,
            ..Default::default()
        };
        assert!(style.validate().is_err());
    }

    #[test]
    fn test_oversized_wheel_is_rejected() {
        let style = WheelStyle {
            size: 300.0,
            ..Default::default()
        };
        assert!(style.validate().is_err());
    }
}
