mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, FontSettings, LinePrimitive, MarkerPrimitive, PolylinePrimitive, RectPrimitive, Stroke,
    TextHAlign, TextPrimitive, TextVAlign,
};

use crate::error::LayoutResult;

/// Contract implemented by any drawing, printing or document backend.
///
/// Backends receive a fully materialized `RenderFrame`, so they never see
/// plot settings, axes or grid fill modes.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> LayoutResult<()>;
}
