use crate::core::Size;
use crate::error::LayoutResult;
use crate::render::{
    LinePrimitive, MarkerPrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive,
};

/// Backend-agnostic scene for one layout pass.
///
/// Backends draw rects first, then polylines, markers, lines and texts, each
/// list in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub size: Size,
    pub rects: Vec<RectPrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            rects: Vec::new(),
            polylines: Vec::new(),
            markers: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> LayoutResult<()> {
        self.size.validate()?;

        for rect in &self.rects {
            rect.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.rects.len()
            + self.polylines.len()
            + self.markers.len()
            + self.lines.len()
            + self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}
