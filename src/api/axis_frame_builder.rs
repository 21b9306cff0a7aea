use serde::{Deserialize, Serialize};

use crate::core::{AxisId, AxisKind, AxisSettings, DataInfo, Point, Rect, Size};
use crate::error::{LayoutError, LayoutResult};
use crate::render::{FontSettings, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign};

use super::axis_label_format::format_axis_label;
use super::axis_ticks::{axis_tick_value, axis_ticks};

/// Which edge of the plot rectangle an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisPlacement {
    /// Bottom edge for X, left edge for Y.
    Primary,
    /// Top edge for X, right edge for Y.
    Secondary,
}

pub(super) struct AxisFrameInput<'a> {
    pub axis: &'a AxisSettings,
    pub id: AxisId,
    pub info: DataInfo,
    pub placement: AxisPlacement,
    pub plot_rect: Rect,
    pub content: Size,
    pub font: &'a FontSettings,
    pub label_gap: f64,
}

/// Appends tick marks, major-tick labels and the axis line.
pub(super) fn append_axis(frame: &mut RenderFrame, input: AxisFrameInput<'_>) -> LayoutResult<()> {
    let AxisFrameInput {
        axis,
        id,
        info,
        placement,
        plot_rect,
        content,
        font,
        label_gap,
    } = input;

    axis.validate()?;
    info.scale(axis.kind, id.index())?;

    let (edge_start, edge_length) = match axis.kind {
        AxisKind::X => (plot_rect.left(), plot_rect.width),
        AxisKind::Y => (plot_rect.top(), plot_rect.height),
    };
    let cross = edge_coordinate(axis.kind, placement, plot_rect);
    let intervals = axis.interval_count().ok_or_else(|| LayoutError::InvalidAxis {
        kind: axis.kind,
        reason: "axis divisions out of range".to_owned(),
    })?;

    for tick in axis_ticks(edge_start, edge_length, axis.divider, axis.subdivider) {
        let style = if tick.is_major {
            axis.major_tick
        } else {
            axis.minor_tick
        };
        let (from, to) = match axis.kind {
            AxisKind::X => (
                Point::new(tick.position, cross - style.half_length),
                Point::new(tick.position, cross + style.half_length),
            ),
            AxisKind::Y => (
                Point::new(cross - style.half_length, tick.position),
                Point::new(cross + style.half_length, tick.position),
            ),
        };
        frame.lines.push(LinePrimitive::new(from, to, style.stroke));

        if !tick.is_major {
            continue;
        }
        let value = axis_tick_value(info, axis.kind, tick.index, intervals);
        let text = format_axis_label(axis, info, tick.index, value)?;
        if text.is_empty() {
            continue;
        }
        let (anchor, v_align) =
            label_anchor(axis.kind, placement, tick.position, plot_rect, content, label_gap);
        frame.texts.push(TextPrimitive::new(
            text,
            anchor,
            font.clone(),
            TextHAlign::Center,
            v_align,
        ));
    }

    let (from, to) = axis_line(axis.kind, placement, plot_rect);
    frame.lines.push(LinePrimitive::new(from, to, axis.line));
    Ok(())
}

fn edge_coordinate(kind: AxisKind, placement: AxisPlacement, plot_rect: Rect) -> f64 {
    match (kind, placement) {
        (AxisKind::X, AxisPlacement::Primary) => plot_rect.bottom(),
        (AxisKind::X, AxisPlacement::Secondary) => plot_rect.top(),
        (AxisKind::Y, AxisPlacement::Primary) => plot_rect.left(),
        (AxisKind::Y, AxisPlacement::Secondary) => plot_rect.right(),
    }
}

/// X labels sit `label_gap` outside their edge; Y labels are centred in the
/// margin beside their edge.
fn label_anchor(
    kind: AxisKind,
    placement: AxisPlacement,
    position: f64,
    plot_rect: Rect,
    content: Size,
    label_gap: f64,
) -> (Point, TextVAlign) {
    match (kind, placement) {
        (AxisKind::X, AxisPlacement::Primary) => (
            Point::new(position, plot_rect.bottom() + label_gap),
            TextVAlign::Top,
        ),
        (AxisKind::X, AxisPlacement::Secondary) => (
            Point::new(position, plot_rect.top() - label_gap),
            TextVAlign::Bottom,
        ),
        (AxisKind::Y, AxisPlacement::Primary) => (
            Point::new(plot_rect.left() * 0.5, position),
            TextVAlign::Middle,
        ),
        (AxisKind::Y, AxisPlacement::Secondary) => (
            Point::new(
                plot_rect.right() + (content.width - plot_rect.right()) * 0.5,
                position,
            ),
            TextVAlign::Middle,
        ),
    }
}

fn axis_line(kind: AxisKind, placement: AxisPlacement, plot_rect: Rect) -> (Point, Point) {
    match (kind, placement) {
        (AxisKind::X, AxisPlacement::Primary) => (plot_rect.bottom_left(), plot_rect.bottom_right()),
        (AxisKind::X, AxisPlacement::Secondary) => (plot_rect.top_left(), plot_rect.top_right()),
        (AxisKind::Y, AxisPlacement::Primary) => (plot_rect.bottom_left(), plot_rect.top_left()),
        (AxisKind::Y, AxisPlacement::Secondary) => (plot_rect.top_right(), plot_rect.bottom_right()),
    }
}
