use tracing::{debug, trace};

use crate::core::{AxisKind, PlotSettings, Point, Rect, Size};
use crate::error::{LayoutError, LayoutResult};
use crate::render::{RectPrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign};

use super::PlotLayoutConfig;
use super::axis_frame_builder::{AxisFrameInput, AxisPlacement, append_axis};
use super::series_frame_builder::append_series;

/// Inner rectangle that series are mapped into.
pub fn plot_rect(size: Size, config: &PlotLayoutConfig) -> LayoutResult<Rect> {
    Rect::from_size(size.validate()?).inset(config.margins.validate()?)
}

/// Lays out a complete plot of `size` layout units.
///
/// Draw order: background, series, axes (primary X, primary Y, secondary X,
/// secondary Y), title, border. Every axis that is drawn or referenced by a
/// series must carry a non-zero data range, and every sample must be finite:
/// a NaN or infinite coordinate fails the whole layout with
/// `LayoutError::InvalidData` rather than being skipped.
pub fn build_plot_frame(
    settings: &PlotSettings,
    size: Size,
    config: &PlotLayoutConfig,
) -> LayoutResult<RenderFrame> {
    let config = config.validate()?;
    settings.title_font.validate()?;
    settings.axis_font.validate()?;
    let plot_rect = plot_rect(size, &config)?;
    let infos = settings.axis_infos();

    let mut frame = RenderFrame::new(size);
    if let Some(background) = config.background {
        frame.rects.push(RectPrimitive::filled(Rect::from_size(size), background));
    }

    for series in settings.series() {
        append_series(&mut frame, series, &infos, plot_rect, &config)?;
    }

    let label_gap = settings.axis_font.size * config.label_gap_ratio;
    let placements = [
        (settings.first(AxisKind::X), AxisPlacement::Primary),
        (settings.first(AxisKind::Y), AxisPlacement::Primary),
        (settings.second(AxisKind::X), AxisPlacement::Secondary),
        (settings.second(AxisKind::Y), AxisPlacement::Secondary),
    ];
    for (id, placement) in placements {
        let Some(id) = id else {
            continue;
        };
        let Some(axis) = settings.axis(id) else {
            continue;
        };
        let info = infos
            .get(id.index())
            .copied()
            .ok_or(LayoutError::UnknownAxis(id.index()))?;
        append_axis(
            &mut frame,
            AxisFrameInput {
                axis,
                id,
                info,
                placement,
                plot_rect,
                content: size,
                font: &settings.axis_font,
                label_gap,
            },
        )?;
    }

    if !settings.title.is_empty() {
        frame.texts.push(TextPrimitive::new(
            settings.title.clone(),
            Point::new(size.width * 0.5, config.title_top),
            settings.title_font.clone(),
            TextHAlign::Center,
            TextVAlign::Top,
        ));
    }

    if let Some(border) = config.border {
        frame.rects.push(RectPrimitive::outlined(Rect::from_size(size), border));
    }

    debug!(
        width = size.width,
        height = size.height,
        axes = settings.axes().len(),
        series = settings.series().len(),
        "built plot frame"
    );
    trace!(
        plot_x = plot_rect.x,
        plot_y = plot_rect.y,
        plot_width = plot_rect.width,
        plot_height = plot_rect.height,
        lines = frame.lines.len(),
        polylines = frame.polylines.len(),
        markers = frame.markers.len(),
        rects = frame.rects.len(),
        texts = frame.texts.len(),
        "plot frame primitives"
    );

    frame.validate()?;
    Ok(frame)
}
