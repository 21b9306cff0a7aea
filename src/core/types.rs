use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_oadate, decimal_to_f64};
use crate::error::{LayoutError, LayoutResult};

/// Extent in layout units (1 unit = 1/96 inch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> LayoutResult<Self> {
        if !self.is_valid() {
            return Err(LayoutError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Position in layout space. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn top_left(self) -> Point {
        Point::new(self.left(), self.top())
    }

    #[must_use]
    pub fn top_right(self) -> Point {
        Point::new(self.right(), self.top())
    }

    #[must_use]
    pub fn bottom_left(self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    #[must_use]
    pub fn bottom_right(self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    #[must_use]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Shrinks the rectangle by `margins` on each side.
    ///
    /// Fails when the remaining area is empty.
    pub fn inset(self, margins: Thickness) -> LayoutResult<Self> {
        let inner = Self::new(
            self.x + margins.left,
            self.y + margins.top,
            self.width - margins.horizontal(),
            self.height - margins.vertical(),
        );
        inner.size().validate()?;
        Ok(inner)
    }
}

/// Per-side spacing, ordered like a CSS/XAML thickness: left, top, right, bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thickness {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Thickness {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }

    pub fn validate(self) -> LayoutResult<Self> {
        for (side, value) in [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// One data-space sample of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_decimal(x: Decimal, y: Decimal) -> LayoutResult<Self> {
        Ok(Self {
            x: decimal_to_f64(x, "x")?,
            y: decimal_to_f64(y, "y")?,
        })
    }

    /// Encodes `time` as an OLE Automation date on the X axis, for use with
    /// `OaDate`/`OaDateRelative` axes.
    pub fn from_datetime(time: NaiveDateTime, value: Decimal) -> LayoutResult<Self> {
        Ok(Self {
            x: datetime_to_oadate(time)?,
            y: decimal_to_f64(value, "value")?,
        })
    }
}

/// Zips parallel X and Y slices into samples.
pub fn package_data(xs: &[f64], ys: &[f64]) -> LayoutResult<Vec<DataPoint>> {
    if xs.len() != ys.len() {
        return Err(LayoutError::InvalidData(format!(
            "x/y sample counts differ: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    Ok(xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| DataPoint::new(x, y))
        .collect())
}
