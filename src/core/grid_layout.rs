use serde::{Deserialize, Serialize};

use crate::core::{GridCell, Rect, Size};
use crate::error::{LayoutError, LayoutResult};

/// Column and row tracks of a fixed-size grid.
///
/// Tracks are laid out from the top-left corner; their sums need not match
/// the grid size (overflowing tracks are not clipped).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    size: Size,
    column_widths: Vec<f64>,
    row_heights: Vec<f64>,
}

impl GridLayout {
    pub fn new(size: Size, column_widths: Vec<f64>, row_heights: Vec<f64>) -> LayoutResult<Self> {
        size.validate()?;
        for (track, values) in [("column width", &column_widths), ("row height", &row_heights)] {
            if let Some(bad) = values.iter().find(|value| !value.is_finite() || **value < 0.0) {
                return Err(LayoutError::InvalidData(format!(
                    "{track} must be finite and >= 0, got {bad}"
                )));
            }
        }

        Ok(Self {
            size,
            column_widths,
            row_heights,
        })
    }

    /// `columns` x `rows` cells of identical size filling `size`.
    pub fn equi_sized(size: Size, columns: usize, rows: usize) -> LayoutResult<Self> {
        if columns == 0 || rows == 0 {
            return Err(LayoutError::InvalidData(format!(
                "grid needs at least one column and one row, got {columns} x {rows}"
            )));
        }
        let cell_width = size.width / columns as f64;
        let cell_height = size.height / rows as f64;
        Self::new(size, vec![cell_width; columns], vec![cell_height; rows])
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.column_widths.len()
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.row_heights.len()
    }

    /// Distance from the left edge to the start of column `index`.
    #[must_use]
    pub fn column_offset(&self, index: usize) -> Option<f64> {
        track_offset(&self.column_widths, index)
    }

    /// Distance from the top edge to the start of row `index`.
    #[must_use]
    pub fn row_offset(&self, index: usize) -> Option<f64> {
        track_offset(&self.row_heights, index)
    }

    #[must_use]
    pub fn cell_rect(&self, cell: GridCell) -> Option<Rect> {
        Some(Rect::new(
            self.column_offset(cell.column)?,
            self.row_offset(cell.row)?,
            *self.column_widths.get(cell.column)?,
            *self.row_heights.get(cell.row)?,
        ))
    }
}

fn track_offset(tracks: &[f64], index: usize) -> Option<f64> {
    if index >= tracks.len() {
        return None;
    }
    Some(tracks[..index].iter().sum())
}
