mod axis_frame_builder;
mod axis_label_format;
mod axis_ticks;
mod engine;
mod grid_frame_builder;
mod json_contract;
mod layout_config;
mod plot_frame_builder;
mod series_frame_builder;

pub use axis_frame_builder::AxisPlacement;
pub use axis_label_format::{data_point_number, format_axis_label, validate_date_pattern};
pub use axis_ticks::{AxisTick, axis_tick_value, axis_ticks};
pub use engine::PlotEngine;
pub use grid_frame_builder::{
    GridLineOptions, GridLineVisibility, GridPlacement, build_grid_lines, fill_grid,
};
pub use json_contract::{PLOT_SETTINGS_JSON_SCHEMA_V1, PlotSettingsJsonContractV1};
pub use layout_config::PlotLayoutConfig;
pub use plot_frame_builder::{build_plot_frame, plot_rect};
