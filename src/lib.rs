//! report-layout: headless plot and grid layout for printable reports.
//!
//! `core` holds the data model (axes, series, range aggregation, grid fill
//! order), `api` turns it into backend-agnostic `render::RenderFrame`s.
//! Lengths are in layout units of 1/96 inch.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{PlotEngine, PlotLayoutConfig, build_plot_frame, fill_grid};
pub use error::{LayoutError, LayoutResult};
