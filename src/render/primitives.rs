use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{LayoutError, LayoutResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// `#808080`
    pub const GRAY: Self = Self::rgb8(0x80, 0x80, 0x80);
    /// `#A9A9A9`
    pub const DARK_GRAY: Self = Self::rgb8(0xA9, 0xA9, 0xA9);
    /// `#D3D3D3`
    pub const LIGHT_GRAY: Self = Self::rgb8(0xD3, 0xD3, 0xD3);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    pub fn validate(self) -> LayoutResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(LayoutError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Pen used for outlines and lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    pub fn validate(self) -> LayoutResult<()> {
        validate_stroke_width(self.width)?;
        self.color.validate()
    }
}

/// Font request forwarded to the text backend. Measurement happens there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSettings {
    pub family: String,
    pub size: f64,
    pub color: Color,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            family: "Calibri".to_owned(),
            size: 8.0,
            color: Color::BLACK,
        }
    }
}

impl FontSettings {
    #[must_use]
    pub fn with_size(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> LayoutResult<()> {
        if self.family.trim().is_empty() {
            return Err(LayoutError::InvalidData(
                "font family must not be empty".to_owned(),
            ));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(LayoutError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

fn validate_stroke_width(width: f64) -> LayoutResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(LayoutError::InvalidData(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

/// One straight segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Stroke,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(from: Point, to: Point, stroke: Stroke) -> Self {
        Self {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            stroke,
        }
    }

    pub fn validate(self) -> LayoutResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(LayoutError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        self.stroke.validate()
    }
}

/// Connected path through `points` in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylinePrimitive {
    pub points: Vec<Point>,
    pub stroke: Stroke,
}

impl PolylinePrimitive {
    pub fn validate(&self) -> LayoutResult<()> {
        if self.points.iter().any(|point| !point.is_finite()) {
            return Err(LayoutError::InvalidData(
                "polyline points must be finite".to_owned(),
            ));
        }
        self.stroke.validate()
    }
}

/// Filled circular marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub center: Point,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Stroke,
}

impl MarkerPrimitive {
    pub fn validate(self) -> LayoutResult<()> {
        if !self.center.is_finite() {
            return Err(LayoutError::InvalidData(
                "marker center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(LayoutError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill.validate()?;
        self.stroke.validate()
    }
}

/// Rectangle with optional fill and outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl RectPrimitive {
    #[must_use]
    pub fn filled(rect: crate::core::Rect, fill: Color) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            fill: Some(fill),
            stroke: None,
        }
    }

    #[must_use]
    pub fn outlined(rect: crate::core::Rect, stroke: Stroke) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            fill: None,
            stroke: Some(stroke),
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn validate(self) -> LayoutResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(LayoutError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(LayoutError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if self.fill.is_none() && self.stroke.is_none() {
            return Err(LayoutError::InvalidData(
                "rect must have a fill or a stroke".to_owned(),
            ));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

/// One label anchored at `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: FontSettings,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        anchor: Point,
        font: FontSettings,
        h_align: TextHAlign,
        v_align: TextVAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x: anchor.x,
            y: anchor.y,
            font,
            h_align,
            v_align,
        }
    }

    pub fn validate(&self) -> LayoutResult<()> {
        if self.text.is_empty() {
            return Err(LayoutError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(LayoutError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        self.font.validate()
    }
}
