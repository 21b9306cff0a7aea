use serde::{Deserialize, Serialize};

use crate::core::{AxisId, AxisSettings, PlotData, PlotSettings};
use crate::error::{LayoutError, LayoutResult};
use crate::render::FontSettings;

pub const PLOT_SETTINGS_JSON_SCHEMA_V1: u32 = 1;

/// Persisted form of `PlotSettings`.
///
/// Axis handles inside `series` are detached registration indices into
/// `axes`; loading rebinds them to the new settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSettingsJsonContractV1 {
    pub schema_version: u32,
    #[serde(default)]
    pub title: String,
    pub title_font: FontSettings,
    pub axis_font: FontSettings,
    pub axes: Vec<AxisSettings>,
    pub series: Vec<PlotData>,
}

impl PlotSettings {
    #[must_use]
    pub fn to_json_contract_v1(&self) -> PlotSettingsJsonContractV1 {
        PlotSettingsJsonContractV1 {
            schema_version: PLOT_SETTINGS_JSON_SCHEMA_V1,
            title: self.title.clone(),
            title_font: self.title_font.clone(),
            axis_font: self.axis_font.clone(),
            axes: self.axes().to_vec(),
            series: self
                .series()
                .iter()
                .map(|series| PlotData {
                    x_axis: AxisId::detached(series.x_axis.index()),
                    y_axis: AxisId::detached(series.y_axis.index()),
                    ..series.clone()
                })
                .collect(),
        }
    }

    pub fn to_json_contract_v1_pretty(&self) -> LayoutResult<String> {
        serde_json::to_string_pretty(&self.to_json_contract_v1()).map_err(|e| {
            LayoutError::InvalidData(format!("failed to serialize plot settings contract v1: {e}"))
        })
    }

    /// Rebuilds settings by replaying registration, so capacity and axis
    /// membership rules hold for loaded documents too.
    pub fn from_json_contract_v1(contract: PlotSettingsJsonContractV1) -> LayoutResult<Self> {
        if contract.schema_version != PLOT_SETTINGS_JSON_SCHEMA_V1 {
            return Err(LayoutError::InvalidData(format!(
                "unsupported plot settings schema version: {}",
                contract.schema_version
            )));
        }

        let mut settings = PlotSettings::new().with_title(contract.title);
        settings.title_font = contract.title_font;
        settings.axis_font = contract.axis_font;

        for (position, axis) in contract.axes.into_iter().enumerate() {
            let kind = axis.kind;
            if settings.add_axis(axis).is_none() {
                return Err(LayoutError::InvalidAxis {
                    kind,
                    reason: format!("axis #{position} exceeds the axis capacity"),
                });
            }
        }
        for (position, series) in contract.series.into_iter().enumerate() {
            let bound = settings
                .bind(series.x_axis)
                .zip(settings.bind(series.y_axis))
                .map(|(x_axis, y_axis)| PlotData {
                    x_axis,
                    y_axis,
                    ..series
                });
            if !bound.is_some_and(|series| settings.add_data(series)) {
                return Err(LayoutError::InvalidData(format!(
                    "series #{position} references an unknown axis"
                )));
            }
        }
        Ok(settings)
    }

    pub fn from_json_str(input: &str) -> LayoutResult<Self> {
        let contract: PlotSettingsJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            LayoutError::InvalidData(format!("failed to parse plot settings json payload: {e}"))
        })?;
        Self::from_json_contract_v1(contract)
    }
}
