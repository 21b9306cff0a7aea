use tracing::trace;

use crate::core::{AxisKind, DataInfo, PlotData, PlotType, Point, Rect, project_bars, project_points};
use crate::error::{LayoutError, LayoutResult};
use crate::render::{MarkerPrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, Stroke};

use super::PlotLayoutConfig;

/// Appends the primitives of one series, translated into the plot rectangle.
pub(super) fn append_series(
    frame: &mut RenderFrame,
    series: &PlotData,
    infos: &[DataInfo],
    plot_rect: Rect,
    config: &PlotLayoutConfig,
) -> LayoutResult<()> {
    let info_for = |index: usize| {
        infos
            .get(index)
            .copied()
            .ok_or(LayoutError::UnknownAxis(index))
    };
    let x_index = series.x_axis.index();
    let y_index = series.y_axis.index();
    let x_scale = info_for(x_index)?.scale(AxisKind::X, x_index)?;
    let y_scale = info_for(y_index)?.scale(AxisKind::Y, y_index)?;

    let stroke = Stroke::new(series.color, series.thickness);
    let plot_size = plot_rect.size();
    let origin = plot_rect.top_left();

    match series.plot_type {
        PlotType::Line => {
            let points = project_points(&series.points, x_scale, y_scale, plot_size)?;
            if points.len() < 2 {
                trace!(samples = points.len(), "line series too short to draw");
                return Ok(());
            }
            frame.polylines.push(PolylinePrimitive {
                points: translate(points, origin),
                stroke,
            });
        }
        PlotType::Dots => {
            let points = project_points(&series.points, x_scale, y_scale, plot_size)?;
            frame
                .markers
                .extend(translate(points, origin).into_iter().map(|center| MarkerPrimitive {
                    center,
                    radius: config.dot_radius,
                    fill: series.color,
                    stroke,
                }));
        }
        PlotType::Bar => {
            let bars = project_bars(
                &series.points,
                x_scale,
                y_scale,
                plot_size,
                config.bar_width_ratio,
            )?;
            frame.rects.extend(bars.into_iter().map(|bar| {
                RectPrimitive::filled(
                    Rect::new(
                        origin.x + bar.x_left,
                        origin.y + bar.y_top,
                        bar.x_right - bar.x_left,
                        bar.y_bottom - bar.y_top,
                    ),
                    series.color,
                )
                .with_stroke(stroke)
            }));
        }
    }
    Ok(())
}

fn translate(points: Vec<Point>, origin: Point) -> Vec<Point> {
    points
        .into_iter()
        .map(|point| point.offset(origin.x, origin.y))
        .collect()
}
