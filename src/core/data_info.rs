use serde::{Deserialize, Serialize};

use crate::core::{AxisKind, LinearScale};
use crate::error::{LayoutError, LayoutResult};

/// Running extrema and sample count over batches of scalar samples.
///
/// `count` is the largest batch length seen, not the total: for a shared X
/// axis it approximates the number of data points per series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DataInfo {
    max: f64,
    min: f64,
    count: usize,
    initialized: bool,
}

impl DataInfo {
    /// Summarizes one batch. Non-finite samples are counted but never
    /// become an extremum; projection still rejects them, so a plot holding
    /// one fails to lay out.
    #[must_use]
    pub fn from_samples(samples: &[f64]) -> Self {
        let mut finite = samples.iter().copied().filter(|value| value.is_finite());
        let Some(first) = finite.next() else {
            return Self {
                count: samples.len(),
                ..Self::default()
            };
        };
        let (min, max) = finite.fold((first, first), |(min, max), value| {
            (min.min(value), max.max(value))
        });

        Self {
            max,
            min,
            count: samples.len(),
            initialized: true,
        }
    }

    pub fn merge(&mut self, samples: &[f64]) {
        *self = self.merged(Self::from_samples(samples));
    }

    /// Combines two summaries. Associative and commutative, with the empty
    /// summary as identity element.
    #[must_use]
    pub fn merged(self, other: Self) -> Self {
        let count = self.count.max(other.count);
        match (self.initialized, other.initialized) {
            (false, false) => Self {
                count,
                ..Self::default()
            },
            (true, false) => Self { count, ..self },
            (false, true) => Self { count, ..other },
            (true, true) => Self {
                max: self.max.max(other.max),
                min: self.min.min(other.min),
                count,
                initialized: true,
            },
        }
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn range(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_initialized(self) -> bool {
        self.initialized
    }

    /// Scale mapping `min..max` onto an extent. Y axes run top-down, so the
    /// domain is reversed for them.
    pub fn scale(self, kind: AxisKind, index: usize) -> LayoutResult<LinearScale> {
        if !self.initialized || self.range() <= 0.0 || !self.range().is_finite() {
            return Err(LayoutError::DegenerateAxisRange {
                kind,
                index,
                min: self.min,
                max: self.max,
                count: self.count,
            });
        }
        match kind {
            AxisKind::X => LinearScale::new(self.min, self.max),
            AxisKind::Y => LinearScale::new(self.max, self.min),
        }
    }
}
