pub mod axis;
pub mod data_info;
pub mod grid;
pub mod grid_layout;
pub mod plot_settings;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod series_projection;
pub mod types;
pub mod units;

pub use axis::{
    AxisId, AxisKind, AxisLabelFormat, AxisLabelLocale, AxisSettings, AxisValueType,
    MAX_AXIS_INTERVALS, TickStyle, interval_count,
};
pub use data_info::DataInfo;
pub use grid::{FillMode, FillOrder, GridCell, PlacedCell, cell_for_index, fill_cells, fill_order};
pub use grid_layout::GridLayout;
pub use plot_settings::{MAX_AXES, MAX_AXES_PER_KIND, PlotSettings};
pub use primitives::{datetime_to_oadate, oadate_to_datetime};
pub use scale::LinearScale;
pub use series::{PlotData, PlotType};
pub use series_projection::{BarGeometry, project_bars, project_points};
pub use types::{DataPoint, Point, Rect, Size, Thickness, package_data};
pub use units::{inches_to_units, mm_to_units, units_to_mm};
