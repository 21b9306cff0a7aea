use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{FillMode, GridCell, GridLayout, Point, Rect, fill_order};
use crate::error::LayoutResult;
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, Stroke};

/// Which grid lines are drawn.
///
/// Header flags separate the first row / first column: the regular line at
/// that offset is replaced by a header-styled one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridLineVisibility {
    pub border: bool,
    pub horizontal: bool,
    pub vertical: bool,
    pub horizontal_header: bool,
    pub vertical_header: bool,
}

impl GridLineVisibility {
    pub const NONE: Self = Self {
        border: false,
        horizontal: false,
        vertical: false,
        horizontal_header: false,
        vertical_header: false,
    };
    pub const BOTH: Self = Self {
        horizontal: true,
        vertical: true,
        ..Self::NONE
    };
    pub const ALL: Self = Self {
        border: true,
        ..Self::BOTH
    };
    pub const ALL_WITH_HEADER: Self = Self {
        horizontal_header: true,
        vertical_header: true,
        ..Self::ALL
    };
}

impl Default for GridLineVisibility {
    fn default() -> Self {
        Self::BOTH
    }
}

/// Strokes for grid lines. `None` overrides fall back to `lines`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLineOptions {
    #[serde(default)]
    pub visibility: GridLineVisibility,
    pub lines: Stroke,
    #[serde(default)]
    pub vertical: Option<Stroke>,
    #[serde(default)]
    pub horizontal: Option<Stroke>,
    #[serde(default)]
    pub header: Option<Stroke>,
}

impl Default for GridLineOptions {
    fn default() -> Self {
        Self {
            visibility: GridLineVisibility::default(),
            lines: Stroke::new(Color::BLACK, 1.0),
            vertical: None,
            horizontal: None,
            header: None,
        }
    }
}

/// Content placed into one grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPlacement<T> {
    pub index: usize,
    pub cell: GridCell,
    pub bounds: Rect,
    pub content: T,
}

/// Visits every cell of `layout` in `mode` order, asking `factory` for the
/// content of step `n` (called once per step, in increasing order).
pub fn fill_grid<T, F>(layout: &GridLayout, mode: FillMode, mut factory: F) -> Vec<GridPlacement<T>>
where
    F: FnMut(usize) -> T,
{
    let placements: Vec<GridPlacement<T>> = fill_order(layout.rows(), layout.columns(), mode)
        .enumerate()
        .filter_map(|(index, cell)| {
            let bounds = layout.cell_rect(cell)?;
            Some(GridPlacement {
                index,
                cell,
                bounds,
                content: factory(index),
            })
        })
        .collect();
    debug!(
        rows = layout.rows(),
        columns = layout.columns(),
        ?mode,
        cells = placements.len(),
        "filled grid"
    );
    placements
}

/// Grid line overlay for `layout`.
pub fn build_grid_lines(layout: &GridLayout, options: &GridLineOptions) -> LayoutResult<RenderFrame> {
    let size = layout.size().validate()?;
    let visibility = options.visibility;
    let horizontal = options.horizontal.unwrap_or(options.lines);
    let vertical = options.vertical.unwrap_or(options.lines);
    let header = options.header.unwrap_or(options.lines);
    let mut frame = RenderFrame::new(size);

    if visibility.horizontal {
        for row in 1..layout.rows() {
            if row == 1 && visibility.horizontal_header {
                continue;
            }
            if let Some(y) = layout.row_offset(row) {
                frame.lines.push(LinePrimitive::new(
                    Point::new(0.0, y),
                    Point::new(size.width, y),
                    horizontal,
                ));
            }
        }
    }

    if visibility.vertical {
        for column in 1..layout.columns() {
            if column == 1 && visibility.vertical_header {
                continue;
            }
            if let Some(x) = layout.column_offset(column) {
                frame.lines.push(LinePrimitive::new(
                    Point::new(x, 0.0),
                    Point::new(x, size.height),
                    vertical,
                ));
            }
        }
    }

    if visibility.vertical_header {
        if let Some(x) = layout.column_offset(1) {
            frame.lines.push(LinePrimitive::new(
                Point::new(x, 0.0),
                Point::new(x, size.height),
                header,
            ));
        }
    }

    if visibility.horizontal_header {
        if let Some(y) = layout.row_offset(1) {
            frame.lines.push(LinePrimitive::new(
                Point::new(0.0, y),
                Point::new(size.width, y),
                header,
            ));
        }
    }

    if visibility.border {
        frame
            .rects
            .push(RectPrimitive::outlined(Rect::from_size(size), options.lines));
    }

    frame.validate()?;
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::{GridLineOptions, GridLineVisibility, build_grid_lines};
    use crate::core::{GridLayout, Size};
    use crate::render::{Color, Stroke};

    #[test]
    fn header_line_replaces_first_regular_line() {
        let layout = GridLayout::equi_sized(Size::new(90.0, 60.0), 3, 3).expect("grid");
        let header = Stroke::new(Color::GRAY, 2.0);
        let options = GridLineOptions {
            visibility: GridLineVisibility {
                horizontal_header: true,
                ..GridLineVisibility::ALL
            },
            header: Some(header),
            ..GridLineOptions::default()
        };

        let frame = build_grid_lines(&layout, &options).expect("lines");
        let horizontal: Vec<_> = frame.lines.iter().filter(|line| line.y1 == line.y2).collect();
        assert_eq!(horizontal.len(), 2);
        assert!(horizontal.iter().any(|line| line.y1 == 20.0 && line.stroke == header));
        assert_eq!(frame.lines.iter().filter(|line| line.x1 == line.x2).count(), 2);
        assert_eq!(frame.rects.len(), 1);
    }

    #[test]
    fn hidden_lines_produce_an_empty_frame() {
        let layout = GridLayout::equi_sized(Size::new(10.0, 10.0), 2, 2).expect("grid");
        let options = GridLineOptions {
            visibility: GridLineVisibility::NONE,
            ..GridLineOptions::default()
        };
        assert!(build_grid_lines(&layout, &options).expect("frame").is_empty());
    }
}
