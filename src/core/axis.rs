use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::units::mm_to_units;
use crate::error::{LayoutError, LayoutResult};
use crate::render::{Color, Stroke};

/// Axis orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisKind {
    X,
    Y,
}

/// How major-tick values are turned into label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisValueType {
    /// Fixed-precision decimal of the tick value.
    Raw,
    /// Tick value read as an OLE Automation date.
    OaDate,
    /// `value - axis minimum` read as an OLE Automation date, i.e. elapsed time.
    OaDateRelative,
    /// Approximate sample index at the tick. X axes only.
    #[default]
    DataPointNumber,
}

/// Decimal separator preset for `Raw` labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisLabelLocale {
    #[default]
    EnUs,
    DeDe,
}

/// Text formatting for axis labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisLabelFormat {
    /// Decimals for `Raw` labels.
    pub precision: u8,
    /// `chrono` strftime pattern for `OaDate`/`OaDateRelative` labels.
    pub date_pattern: String,
    pub locale: AxisLabelLocale,
}

impl Default for AxisLabelFormat {
    fn default() -> Self {
        Self {
            precision: 2,
            date_pattern: "%d.%m.%Y %H:%M".to_owned(),
            locale: AxisLabelLocale::EnUs,
        }
    }
}

/// Stroke plus the distance a tick mark reaches to each side of the axis line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickStyle {
    pub stroke: Stroke,
    pub half_length: f64,
}

impl TickStyle {
    pub fn validate(self) -> LayoutResult<()> {
        if !self.half_length.is_finite() || self.half_length < 0.0 {
            return Err(LayoutError::InvalidData(
                "tick half length must be finite and >= 0".to_owned(),
            ));
        }
        self.stroke.validate()
    }
}

/// Upper bound on `divider * subdivider` for one axis.
pub const MAX_AXIS_INTERVALS: u32 = 10_000;

/// `divider * subdivider` when it lies in `1..=MAX_AXIS_INTERVALS`.
#[must_use]
pub fn interval_count(divider: u32, subdivider: u32) -> Option<u32> {
    divider
        .checked_mul(subdivider)
        .filter(|intervals| (1..=MAX_AXIS_INTERVALS).contains(intervals))
}

/// Owner token carried by handles that no `PlotSettings` issued.
const DETACHED_OWNER: u64 = 0;

/// Handle returned by `PlotSettings::add_axis`.
///
/// Carries the owner token of the issuing `PlotSettings`, so a handle is
/// rejected by every other instance even when its index is in range. Only
/// the index is serialized; deserialized handles are detached until a
/// `PlotSettings` rebinds them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisId {
    owner: u64,
    index: usize,
}

impl AxisId {
    pub(crate) const fn new(owner: u64, index: usize) -> Self {
        Self { owner, index }
    }

    /// Handle bound to no `PlotSettings`, as found in persisted documents.
    #[must_use]
    pub const fn detached(index: usize) -> Self {
        Self::new(DETACHED_OWNER, index)
    }

    /// Registration position within the owning `PlotSettings`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    pub(crate) const fn owner(self) -> u64 {
        self.owner
    }
}

impl Serialize for AxisId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.index.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AxisId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        usize::deserialize(deserializer).map(Self::detached)
    }
}

/// Per-axis configuration.
///
/// `divider` major intervals are each split into `subdivider` minor
/// intervals, giving `divider * subdivider + 1` ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSettings {
    pub kind: AxisKind,
    pub divider: u32,
    pub subdivider: u32,
    #[serde(default)]
    pub value_type: AxisValueType,
    #[serde(default)]
    pub label_format: AxisLabelFormat,
    pub line: Stroke,
    pub major_tick: TickStyle,
    pub minor_tick: TickStyle,
}

impl AxisSettings {
    #[must_use]
    pub fn new(kind: AxisKind) -> Self {
        Self {
            kind,
            divider: 10,
            subdivider: 10,
            value_type: AxisValueType::default(),
            label_format: AxisLabelFormat::default(),
            line: Stroke::new(Color::LIGHT_GRAY, mm_to_units(0.2)),
            major_tick: TickStyle {
                stroke: Stroke::new(Color::GRAY, mm_to_units(0.2)),
                half_length: mm_to_units(0.5),
            },
            minor_tick: TickStyle {
                stroke: Stroke::new(Color::LIGHT_GRAY, mm_to_units(0.2)),
                half_length: mm_to_units(0.25),
            },
        }
    }

    #[must_use]
    pub fn x() -> Self {
        Self::new(AxisKind::X)
    }

    #[must_use]
    pub fn y() -> Self {
        Self::new(AxisKind::Y)
    }

    #[must_use]
    pub fn with_divisions(mut self, divider: u32, subdivider: u32) -> Self {
        self.divider = divider;
        self.subdivider = subdivider;
        self
    }

    #[must_use]
    pub fn with_value_type(mut self, value_type: AxisValueType) -> Self {
        self.value_type = value_type;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.label_format.precision = precision;
        self
    }

    #[must_use]
    pub fn with_date_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.label_format.date_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: AxisLabelLocale) -> Self {
        self.label_format.locale = locale;
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: Stroke) -> Self {
        self.line = line;
        self
    }

    #[must_use]
    pub fn with_tick_styles(mut self, major: TickStyle, minor: TickStyle) -> Self {
        self.major_tick = major;
        self.minor_tick = minor;
        self
    }

    /// Number of tick intervals along the axis, `None` when the divisions
    /// are zero or exceed [`MAX_AXIS_INTERVALS`].
    #[must_use]
    pub fn interval_count(&self) -> Option<u32> {
        interval_count(self.divider, self.subdivider)
    }

    /// Number of tick marks, both ends included.
    #[must_use]
    pub fn tick_count(&self) -> Option<usize> {
        self.interval_count().map(|intervals| intervals as usize + 1)
    }

    pub fn validate(&self) -> LayoutResult<()> {
        if self.interval_count().is_none() {
            return Err(LayoutError::InvalidAxis {
                kind: self.kind,
                reason: format!(
                    "divider x subdivider must be in 1..={MAX_AXIS_INTERVALS} (got {} x {})",
                    self.divider, self.subdivider
                ),
            });
        }
        self.line.validate()?;
        self.major_tick.validate()?;
        self.minor_tick.validate()
    }
}
