use serde::{Deserialize, Serialize};

use crate::core::units::mm_to_units;
use crate::core::{AxisId, DataPoint};
use crate::render::Color;

/// Drawing style of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PlotType {
    /// One marker per sample.
    Dots,
    /// Samples joined in sequence order.
    #[default]
    Line,
    /// `x` is the bar centre, `y` its height above the Y-axis minimum.
    Bar,
}

/// One series bound to an X and a Y axis of the same `PlotSettings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub plot_type: PlotType,
    pub points: Vec<DataPoint>,
    pub x_axis: AxisId,
    pub y_axis: AxisId,
    pub color: Color,
    pub thickness: f64,
}

impl PlotData {
    #[must_use]
    pub fn new(x_axis: AxisId, y_axis: AxisId, points: Vec<DataPoint>) -> Self {
        Self {
            plot_type: PlotType::default(),
            points,
            x_axis,
            y_axis,
            color: Color::BLACK,
            thickness: mm_to_units(0.25),
        }
    }

    #[must_use]
    pub fn with_plot_type(mut self, plot_type: PlotType) -> Self {
        self.plot_type = plot_type;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    #[must_use]
    pub fn x_values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.x).collect()
    }

    #[must_use]
    pub fn y_values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.y).collect()
    }
}
