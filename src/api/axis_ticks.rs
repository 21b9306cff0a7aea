use serde::{Deserialize, Serialize};

use crate::core::{AxisKind, DataInfo, interval_count};

/// One tick mark along an axis edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub index: usize,
    /// Absolute coordinate along the edge (x for X axes, y for Y axes).
    pub position: f64,
    pub is_major: bool,
}

/// Evenly spaced ticks over `[start, start + length]`.
///
/// Produces `divider * subdivider + 1` ticks; every `subdivider`-th tick,
/// starting with the first, is major. Empty when the interval count is zero
/// or above `MAX_AXIS_INTERVALS`.
#[must_use]
pub fn axis_ticks(start: f64, length: f64, divider: u32, subdivider: u32) -> Vec<AxisTick> {
    let Some(intervals) = interval_count(divider, subdivider) else {
        return Vec::new();
    };

    let intervals = intervals as usize;
    let step = length / intervals as f64;
    (0..=intervals)
        .map(|index| AxisTick {
            index,
            position: start + index as f64 * step,
            is_major: index % subdivider as usize == 0,
        })
        .collect()
}

/// Data value shown at tick `index`.
///
/// X ticks run min to max left-to-right; Y ticks run max to min top-down,
/// matching screen orientation.
#[must_use]
pub fn axis_tick_value(info: DataInfo, kind: AxisKind, index: usize, intervals: u32) -> f64 {
    if intervals == 0 {
        return match kind {
            AxisKind::X => info.min(),
            AxisKind::Y => info.max(),
        };
    }

    let offset = index as f64 * (info.range() / f64::from(intervals));
    match kind {
        AxisKind::X => info.min() + offset,
        AxisKind::Y => info.max() - offset,
    }
}
