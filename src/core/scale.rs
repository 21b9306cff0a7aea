use crate::error::{LayoutError, LayoutResult};

/// Min–max normalization from a data domain onto `[0, extent]`.
///
/// The domain may be reversed (`domain_start > domain_end`); Y axes use that
/// to map the maximum to the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> LayoutResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(LayoutError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_extent(self, value: f64, extent: f64) -> LayoutResult<f64> {
        validate_extent(extent)?;
        if !value.is_finite() {
            return Err(LayoutError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * extent)
    }

    pub fn extent_to_domain(self, position: f64, extent: f64) -> LayoutResult<f64> {
        validate_extent(extent)?;
        if !position.is_finite() {
            return Err(LayoutError::InvalidData("position must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        Ok(self.domain_start + position / extent * span)
    }
}

fn validate_extent(extent: f64) -> LayoutResult<()> {
    if !extent.is_finite() || extent <= 0.0 {
        return Err(LayoutError::InvalidData(
            "scale extent must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
