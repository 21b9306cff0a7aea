use serde::{Deserialize, Serialize};

use crate::core::Thickness;
use crate::core::units::mm_to_units;
use crate::error::{LayoutError, LayoutResult};
use crate::render::{Color, Stroke};

/// Plot layout configuration.
///
/// Serializable so report templates can persist plot framing next to their
/// own page setup. Every field has a serde default, so partial documents load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLayoutConfig {
    /// Space between the content edge and the plot rectangle. Left, top and
    /// right hold tick labels; bottom only needs room for the X labels.
    #[serde(default = "default_margins")]
    pub margins: Thickness,
    /// Distance from the top edge to the top of the title.
    #[serde(default = "default_title_top")]
    pub title_top: f64,
    /// Gap between an axis line and its labels, as a multiple of the axis
    /// font size.
    #[serde(default = "default_label_gap_ratio")]
    pub label_gap_ratio: f64,
    #[serde(default = "default_dot_radius")]
    pub dot_radius: f64,
    /// Bar width relative to the narrowest gap between bar centres.
    #[serde(default = "default_bar_width_ratio")]
    pub bar_width_ratio: f64,
    #[serde(default = "default_background")]
    pub background: Option<Color>,
    #[serde(default = "default_border")]
    pub border: Option<Stroke>,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            margins: default_margins(),
            title_top: default_title_top(),
            label_gap_ratio: default_label_gap_ratio(),
            dot_radius: default_dot_radius(),
            bar_width_ratio: default_bar_width_ratio(),
            background: default_background(),
            border: default_border(),
        }
    }
}

impl PlotLayoutConfig {
    #[must_use]
    pub fn with_margins(mut self, margins: Thickness) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_title_top(mut self, title_top: f64) -> Self {
        self.title_top = title_top;
        self
    }

    #[must_use]
    pub fn with_dot_radius(mut self, dot_radius: f64) -> Self {
        self.dot_radius = dot_radius;
        self
    }

    #[must_use]
    pub fn with_bar_width_ratio(mut self, ratio: f64) -> Self {
        self.bar_width_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub fn with_border(mut self, border: Option<Stroke>) -> Self {
        self.border = border;
        self
    }

    pub fn validate(self) -> LayoutResult<Self> {
        self.margins.validate()?;
        for (field, value) in [
            ("title_top", self.title_top),
            ("label_gap_ratio", self.label_gap_ratio),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidData(format!(
                    "`{field}` must be finite and >= 0"
                )));
            }
        }
        if !self.dot_radius.is_finite() || self.dot_radius <= 0.0 {
            return Err(LayoutError::InvalidData(
                "`dot_radius` must be finite and > 0".to_owned(),
            ));
        }
        if !self.bar_width_ratio.is_finite()
            || self.bar_width_ratio <= 0.0
            || self.bar_width_ratio > 1.0
        {
            return Err(LayoutError::InvalidData(
                "`bar_width_ratio` must be finite and in (0, 1]".to_owned(),
            ));
        }
        if let Some(background) = self.background {
            background.validate()?;
        }
        if let Some(border) = self.border {
            border.validate()?;
        }
        Ok(self)
    }

    pub fn to_json_pretty(self) -> LayoutResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            LayoutError::InvalidData(format!("failed to serialize layout config: {e}"))
        })
    }

    /// Parses and validates a config document.
    pub fn from_json_str(input: &str) -> LayoutResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            LayoutError::InvalidData(format!("failed to parse layout config json: {e}"))
        })?;
        config.validate()
    }
}

fn default_margins() -> Thickness {
    Thickness::new(
        mm_to_units(15.0),
        mm_to_units(15.0),
        mm_to_units(15.0),
        mm_to_units(7.5),
    )
}

fn default_title_top() -> f64 {
    mm_to_units(3.0)
}

fn default_label_gap_ratio() -> f64 {
    0.5
}

fn default_dot_radius() -> f64 {
    1.0
}

fn default_bar_width_ratio() -> f64 {
    0.8
}

fn default_background() -> Option<Color> {
    Some(Color::WHITE)
}

fn default_border() -> Option<Stroke> {
    Some(Stroke::new(Color::DARK_GRAY, mm_to_units(0.25)))
}
