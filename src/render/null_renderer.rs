use crate::error::LayoutResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer for tests and dry runs.
///
/// Frames are still validated, so non-finite geometry is caught without a
/// drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_primitive_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> LayoutResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.last_primitive_count = frame.primitive_count();
        Ok(())
    }
}
