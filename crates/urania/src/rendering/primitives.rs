use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Point in SVG user space (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Color in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Create color from hex string (e.g., "#FF0000" or "#FF0000FF")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Color {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: 255,
            }),
            8 => Some(Color {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => None,
        }
    }

    /// Convert to CSS string
    pub fn to_css_string(&self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                f32::from(self.a) / 255.0
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognised paint {0:?} (expected #RRGGBB, #RRGGBBAA or var(--name))")]
pub struct InvalidPaint(pub String);

/// A fill or stroke: either a concrete colour or a CSS custom property
/// resolved by the host page's theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Paint {
    Rgba(Color),
    /// Custom property name without the leading `--`
    Var(String),
}

impl Paint {
    pub fn var(name: &str) -> Self {
        Paint::Var(name.trim_start_matches("--").to_string())
    }

    pub fn to_css_string(&self) -> String {
        match self {
            Paint::Rgba(color) => color.to_css_string(),
            Paint::Var(name) => format!("var(--{name})"),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Rgba(color)
    }
}

impl FromStr for Paint {
    type Err = InvalidPaint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(inner) = s.strip_prefix("var(").and_then(|rest| rest.strip_suffix(')')) {
            let name = inner.trim().trim_start_matches("--");
            if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
                return Ok(Paint::Var(name.to_string()));
            }
        } else if s.starts_with('#') {
            if let Some(color) = Color::from_hex(s) {
                return Ok(Paint::Rgba(color));
            }
        }
        Err(InvalidPaint(s.to_string()))
    }
}

impl TryFrom<String> for Paint {
    type Error = InvalidPaint;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Paint> for String {
    fn from(paint: Paint) -> String {
        match paint {
            Paint::Rgba(c) if c.a == 255 => format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b),
            Paint::Rgba(c) => format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a),
            Paint::Var(name) => format!("var(--{name})"),
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}

/// Stroke style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
    pub dash_array: Option<Vec<f64>>,
}

impl Stroke {
    pub fn solid(paint: Paint, width: f64) -> Self {
        Self {
            paint,
            width,
            dash_array: None,
        }
    }

    pub fn dashed(paint: Paint, width: f64, dash_array: Vec<f64>) -> Self {
        Self {
            paint,
            width,
            dash_array: Some(dash_array),
        }
    }
}

/// Text anchor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Shape primitives for chart rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Circle {
        center: Point,
        radius: f64,
        fill: Option<Paint>,
        stroke: Option<Stroke>,
    },
    /// Annular sector between two radii. Angles in SVG degrees: 0 along +x,
    /// increasing clockwise on screen.
    Arc {
        center: Point,
        radius_inner: f64,
        radius_outer: f64,
        start_angle: f64,
        end_angle: f64,
        fill: Paint,
        opacity: f64,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        position: Point,
        content: String,
        size: f64,
        fill: Paint,
        anchor: TextAnchor,
        bold: bool,
        font_family: Option<String>,
    },
}
