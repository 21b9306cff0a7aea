use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{LayoutError, LayoutResult};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Exclusive bounds of the OLE Automation date range (years 100..=9999).
pub const OADATE_MIN: f64 = -657_435.0;
pub const OADATE_MAX: f64 = 2_958_466.0;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> LayoutResult<f64> {
    value.to_f64().ok_or_else(|| {
        LayoutError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

fn oadate_epoch() -> LayoutResult<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| LayoutError::InvalidData("OLE Automation epoch is unrepresentable".to_owned()))
}

/// Converts an OLE Automation date (days since 1899-12-30, fraction = time of
/// day) to a calendar timestamp, rounded to the millisecond.
///
/// For negative values the fractional part still counts forward from
/// midnight: `-1.25` is 1899-12-29 06:00.
pub fn oadate_to_datetime(value: f64) -> LayoutResult<NaiveDateTime> {
    if !(value > OADATE_MIN && value < OADATE_MAX) {
        return Err(LayoutError::InvalidOaDate(value));
    }

    let rounding = if value >= 0.0 { 0.5 } else { -0.5 };
    let mut millis = (value * MILLIS_PER_DAY as f64 + rounding) as i64;
    if millis < 0 {
        millis -= (millis % MILLIS_PER_DAY) * 2;
    }

    oadate_epoch()?
        .checked_add_signed(TimeDelta::milliseconds(millis))
        .ok_or(LayoutError::InvalidOaDate(value))
}

/// Inverse of [`oadate_to_datetime`].
pub fn datetime_to_oadate(time: NaiveDateTime) -> LayoutResult<f64> {
    let mut millis = time
        .signed_duration_since(oadate_epoch()?)
        .num_milliseconds();
    if millis < 0 {
        let frac = millis % MILLIS_PER_DAY;
        if frac != 0 {
            millis -= (MILLIS_PER_DAY + frac) * 2;
        }
    }

    let value = millis as f64 / MILLIS_PER_DAY as f64;
    if !(value > OADATE_MIN && value < OADATE_MAX) {
        return Err(LayoutError::InvalidOaDate(value));
    }
    Ok(value)
}
