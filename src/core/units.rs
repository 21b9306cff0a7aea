//! Length conversions for the layout unit (1/96 inch, device-independent).

pub const UNITS_PER_INCH: f64 = 96.0;
pub const MM_PER_INCH: f64 = 25.4;

#[must_use]
pub fn mm_to_units(mm: f64) -> f64 {
    mm / MM_PER_INCH * UNITS_PER_INCH
}

#[must_use]
pub fn units_to_mm(units: f64) -> f64 {
    units / UNITS_PER_INCH * MM_PER_INCH
}

#[must_use]
pub fn inches_to_units(inches: f64) -> f64 {
    inches * UNITS_PER_INCH
}
