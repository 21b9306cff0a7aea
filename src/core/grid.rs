//! Cell visitation order for filling a rows x columns grid.

use serde::{Deserialize, Serialize};

/// Order in which cells are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FillMode {
    /// Serpentine from the bottom row upwards, e.g. for 2 x 5:
    ///
    /// ```text
    /// 5 6 7 8 9
    /// 4 3 2 1 0
    /// ```
    ///
    /// Direction depends on row parity: even row indices run left to right,
    /// odd ones right to left.
    MeanderBottomLeft,
    /// Row-major from the top-left cell.
    #[default]
    Linear,
}

/// Zero-based cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub column: usize,
    pub row: usize,
}

impl GridCell {
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// Cell visited at step `index`, or `None` when `index` is outside the grid.
#[must_use]
pub fn cell_for_index(index: usize, rows: usize, columns: usize, mode: FillMode) -> Option<GridCell> {
    if columns == 0 || index >= rows.saturating_mul(columns) {
        return None;
    }

    let band = index / columns;
    let offset = index % columns;
    let cell = match mode {
        FillMode::Linear => GridCell::new(offset, band),
        FillMode::MeanderBottomLeft => {
            let row = rows - band - 1;
            let column = if row % 2 == 0 {
                offset
            } else {
                columns - offset - 1
            };
            GridCell::new(column, row)
        }
    };
    Some(cell)
}

/// Iterator over the cells of a grid in fill order.
#[derive(Debug, Clone)]
pub struct FillOrder {
    rows: usize,
    columns: usize,
    mode: FillMode,
    next: usize,
}

impl Iterator for FillOrder {
    type Item = GridCell;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = cell_for_index(self.next, self.rows, self.columns, self.mode)?;
        self.next += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .rows
            .saturating_mul(self.columns)
            .saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FillOrder {}

#[must_use]
pub fn fill_order(rows: usize, columns: usize, mode: FillMode) -> FillOrder {
    FillOrder {
        rows,
        columns,
        mode,
        next: 0,
    }
}

/// Content produced for one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCell<T> {
    pub index: usize,
    pub cell: GridCell,
    pub content: T,
}

/// Calls `factory` once per index `0..rows * columns`, in increasing order,
/// and pairs each result with the cell visited at that step.
pub fn fill_cells<T, F>(rows: usize, columns: usize, mode: FillMode, mut factory: F) -> Vec<PlacedCell<T>>
where
    F: FnMut(usize) -> T,
{
    fill_order(rows, columns, mode)
        .enumerate()
        .map(|(index, cell)| PlacedCell {
            index,
            cell,
            content: factory(index),
        })
        .collect()
}
