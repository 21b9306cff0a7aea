use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};

use crate::core::{
    AxisKind, AxisLabelLocale, AxisSettings, AxisValueType, DataInfo, oadate_to_datetime,
};
use crate::error::{LayoutError, LayoutResult};

/// Text for the major tick `tick_index` of `axis`, whose data value is
/// `value`.
///
/// An empty string means "no label": `DataPointNumber` is only defined on X
/// axes and degrades to nothing elsewhere.
pub fn format_axis_label(
    axis: &AxisSettings,
    info: DataInfo,
    tick_index: usize,
    value: f64,
) -> LayoutResult<String> {
    let format = &axis.label_format;
    match axis.value_type {
        AxisValueType::Raw => Ok(format_axis_decimal(
            value,
            usize::from(format.precision),
            format.locale,
        )),
        AxisValueType::DataPointNumber => Ok(match axis.kind {
            AxisKind::X => data_point_number(
                tick_index,
                info.count(),
                axis.interval_count().unwrap_or(0),
            )
            .to_string(),
            AxisKind::Y => String::new(),
        }),
        AxisValueType::OaDate => format_oadate(value, &format.date_pattern),
        AxisValueType::OaDateRelative => format_oadate(value - info.min(), &format.date_pattern),
    }
}

/// Approximate sample index at a tick, `tick_index * samples / intervals`
/// truncated.
#[must_use]
pub fn data_point_number(tick_index: usize, samples: usize, intervals: u32) -> usize {
    if intervals == 0 {
        return 0;
    }
    tick_index.saturating_mul(samples) / intervals as usize
}

fn format_axis_decimal(value: f64, precision: usize, locale: AxisLabelLocale) -> String {
    let text = format!("{value:.precision$}");
    match locale {
        AxisLabelLocale::EnUs => text,
        AxisLabelLocale::DeDe => text.replace('.', ","),
    }
}

/// Rejects patterns chrono cannot format instead of panicking at render time.
pub fn validate_date_pattern(pattern: &str) -> LayoutResult<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(LayoutError::InvalidData(format!(
            "invalid date pattern `{pattern}`"
        )));
    }
    Ok(())
}

fn format_oadate(value: f64, pattern: &str) -> LayoutResult<String> {
    validate_date_pattern(pattern)?;
    let time = oadate_to_datetime(value)?;

    let mut text = String::new();
    write!(text, "{}", time.format(pattern)).map_err(|_| {
        LayoutError::InvalidData(format!(
            "date pattern `{pattern}` needs fields a local timestamp does not have"
        ))
    })?;
    Ok(text)
}
