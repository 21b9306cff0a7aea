use thiserror::Error;

use crate::core::AxisKind;

pub type LayoutResult<T> = Result<T, LayoutError>;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid size: width={width}, height={height}")]
    InvalidSize { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("{kind:?} axis #{index} has no usable range (min={min}, max={max}, samples={count})")]
    DegenerateAxisRange {
        kind: AxisKind,
        index: usize,
        min: f64,
        max: f64,
        count: usize,
    },

    #[error("invalid {kind:?} axis configuration: {reason}")]
    InvalidAxis { kind: AxisKind, reason: String },

    #[error("unknown axis #{0}")]
    UnknownAxis(usize),

    #[error("value {0} is not a valid OLE Automation date")]
    InvalidOaDate(f64),
}
