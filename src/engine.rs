//! Core rendering engine.
//!
//! The [`Engine`] struct is the main entry point for the renderer. It runs the
//! pipeline for one still frame: project the figure, sort it back to front,
//! paint it onto a canvas, and optionally encode the canvas as a bitmap.

use crate::error::Result;
use crate::projection::WorldView;
use crate::render::{encode_bmp, Canvas, RasterizerDispatcher, RasterizerType};
use crate::scene::{Figure, Scene};
use crate::settings::{Background, RenderSettings};

pub struct Engine {
    settings: RenderSettings,
    rasterizer: RasterizerDispatcher,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(RenderSettings::default())
    }
}

impl Engine {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            rasterizer: RasterizerDispatcher::new(settings.rasterizer, settings.cone_threshold),
            settings,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn set_rasterizer(&mut self, rasterizer_type: RasterizerType) {
        self.settings.rasterizer = rasterizer_type;
        self.rasterizer.set_type(rasterizer_type);
    }

    pub fn rasterizer(&self) -> RasterizerType {
        self.rasterizer.active_type()
    }

    /// A fresh canvas of the configured size, filled with the background.
    pub fn canvas(&self) -> Canvas {
        let size = self.settings.canvas_size();
        match self.settings.background {
            Background::Plain(color) => Canvas::plain(size, color),
            Background::VerticalGradient { top, bottom } => {
                Canvas::vertical_gradient(size, top, bottom)
            }
        }
    }

    /// Projects, sorts and paints `figure` onto `canvas`.
    ///
    /// The figure's member order and its bones' endpoint order are left
    /// sorted for `view` afterwards.
    pub fn render(
        &self,
        scene: &mut Scene,
        figure: &mut Figure,
        view: &WorldView,
        canvas: &mut Canvas,
    ) -> Result<()> {
        log::debug!(
            "rendering {} members onto {}px canvas ({} fill)",
            figure.len(),
            canvas.size(),
            self.rasterizer.active_type()
        );
        figure.project(scene, view);
        figure.sort(scene, view)?;
        figure.draw(scene, canvas, view, &self.rasterizer)
    }

    /// Renders onto a fresh canvas and returns it as BMP file bytes.
    pub fn render_bitmap(
        &self,
        scene: &mut Scene,
        figure: &mut Figure,
        view: &WorldView,
    ) -> Result<Vec<u8>> {
        let mut canvas = self.canvas();
        self.render(scene, figure, view, &mut canvas)?;
        let bytes = encode_bmp(&canvas);
        log::debug!("encoded {} bitmap bytes", bytes.len());
        Ok(bytes)
    }
}
