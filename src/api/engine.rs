use crate::core::{GridLayout, PlotSettings, Size};
use crate::error::LayoutResult;
use crate::render::{RenderFrame, Renderer};

use super::{GridLineOptions, PlotLayoutConfig, build_grid_lines, build_plot_frame};

/// Facade pairing a layout configuration with a rendering backend.
///
/// Layout stays pure; the engine only forwards finished frames to `R`.
pub struct PlotEngine<R: Renderer> {
    renderer: R,
    config: PlotLayoutConfig,
}

impl<R: Renderer> PlotEngine<R> {
    pub fn new(renderer: R, config: PlotLayoutConfig) -> LayoutResult<Self> {
        Ok(Self {
            renderer,
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> PlotLayoutConfig {
        self.config
    }

    pub fn set_config(&mut self, config: PlotLayoutConfig) -> LayoutResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    pub fn build_frame(&self, settings: &PlotSettings, size: Size) -> LayoutResult<RenderFrame> {
        build_plot_frame(settings, size, &self.config)
    }

    /// Lays out `settings` and hands the frame to the renderer.
    pub fn render(&mut self, settings: &PlotSettings, size: Size) -> LayoutResult<RenderFrame> {
        let frame = self.build_frame(settings, size)?;
        self.renderer.render(&frame)?;
        Ok(frame)
    }

    /// Renders the grid line overlay of `layout`.
    pub fn render_grid_lines(
        &mut self,
        layout: &GridLayout,
        options: &GridLineOptions,
    ) -> LayoutResult<RenderFrame> {
        let frame = build_grid_lines(layout, options)?;
        self.renderer.render(&frame)?;
        Ok(frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
