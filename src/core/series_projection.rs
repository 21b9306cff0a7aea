#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LinearScale, Point, Size};
use crate::error::{LayoutError, LayoutResult};

/// Bar rectangle in plot-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x_center: f64,
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

/// Maps samples into plot-local coordinates (origin top-left of the plot
/// rectangle).
///
/// `y_scale` is expected to be reversed (max to 0), as produced by
/// `DataInfo::scale` for Y axes.
pub fn project_points(
    points: &[DataPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
    plot_size: Size,
) -> LayoutResult<Vec<Point>> {
    plot_size.validate()?;

    // Large series are split across the rayon pool; output order matches input.
    #[cfg(feature = "parallel-projection")]
    {
        points
            .par_iter()
            .map(|point| project_single_point(*point, x_scale, y_scale, plot_size))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points
            .iter()
            .map(|point| project_single_point(*point, x_scale, y_scale, plot_size))
            .collect()
    }
}

fn project_single_point(
    point: DataPoint,
    x_scale: LinearScale,
    y_scale: LinearScale,
    plot_size: Size,
) -> LayoutResult<Point> {
    Ok(Point::new(
        x_scale.domain_to_extent(point.x, plot_size.width)?,
        y_scale.domain_to_extent(point.y, plot_size.height)?,
    ))
}

/// Projects bar samples. Bars grow up from the bottom edge; their width is
/// `width_ratio` times the narrowest gap between neighbouring centres, and
/// the result is clamped to the plot rectangle.
pub fn project_bars(
    points: &[DataPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
    plot_size: Size,
    width_ratio: f64,
) -> LayoutResult<Vec<BarGeometry>> {
    if !width_ratio.is_finite() || width_ratio <= 0.0 || width_ratio > 1.0 {
        return Err(LayoutError::InvalidData(
            "bar width ratio must be finite and in (0, 1]".to_owned(),
        ));
    }

    let centers = project_points(points, x_scale, y_scale, plot_size)?;
    if centers.is_empty() {
        return Ok(Vec::new());
    }

    let mut xs: Vec<f64> = centers.iter().map(|center| center.x).collect();
    xs.sort_by(f64::total_cmp);
    let narrowest_gap = xs
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .filter(|gap| *gap > 0.0)
        .fold(f64::INFINITY, f64::min);
    let slot = if narrowest_gap.is_finite() {
        narrowest_gap
    } else {
        plot_size.width
    };
    let half_width = slot * width_ratio * 0.5;
    let baseline = plot_size.height;

    Ok(centers
        .into_iter()
        .map(|center| BarGeometry {
            x_center: center.x,
            x_left: (center.x - half_width).clamp(0.0, plot_size.width),
            x_right: (center.x + half_width).clamp(0.0, plot_size.width),
            y_top: center.y.clamp(0.0, baseline),
            y_bottom: baseline,
        })
        .collect())
}
