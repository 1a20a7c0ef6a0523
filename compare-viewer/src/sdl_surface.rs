//! SDL2 window implementing [`DisplaySurface`].

use image::RgbImage;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};

use compare_viewer::{DisplaySurface, ViewerError};
use viz::ComparisonFrame;

/// Window canvas plus the most recently rendered frame.
pub struct SdlSurface {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    width: u32,
    height: u32,
    last: Option<RgbImage>,
}

impl SdlSurface {
    /// Frames are rendered at `width × height` and scaled to the window.
    pub fn new(canvas: Canvas<Window>, width: u32, height: u32) -> Self {
        let texture_creator = canvas.texture_creator();
        Self {
            canvas,
            texture_creator,
            width,
            height,
            last: None,
        }
    }

    fn blit(&mut self) -> Result<(), ViewerError> {
        let Some(image) = &self.last else {
            return Ok(());
        };

        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::RGB24, image.width(), image.height())
            .map_err(|e| ViewerError::Surface(format!("Failed to create texture: {e}")))?;
        texture
            .update(None, image.as_raw(), image.width() as usize * 3)
            .map_err(|e| ViewerError::Surface(format!("Failed to update texture: {e}")))?;

        let (window_width, window_height) = self
            .canvas
            .output_size()
            .map_err(|e| ViewerError::Surface(format!("Failed to query window size: {e}")))?;
        let dst_rect = fit_rect(
            (window_width, window_height),
            (image.width(), image.height()),
        );

        self.canvas.set_draw_color(Color::RGB(255, 255, 255));
        self.canvas.clear();
        self.canvas
            .copy(&texture, None, Some(dst_rect))
            .map_err(|e| ViewerError::Surface(format!("Failed to copy texture: {e}")))?;
        self.canvas.present();
        Ok(())
    }
}

impl DisplaySurface for SdlSurface {
    fn present(&mut self, frame: &ComparisonFrame) -> Result<(), ViewerError> {
        let image = viz::render_to_image(frame, self.width, self.height)?;
        self.canvas
            .window_mut()
            .set_title(&frame.caption)
            .map_err(|e| ViewerError::Surface(format!("Failed to set window title: {e}")))?;
        self.last = Some(image);
        self.blit()
    }

    fn refresh(&mut self) -> Result<(), ViewerError> {
        self.blit()
    }
}

/// Largest rectangle with the image's aspect ratio centred in the window.
fn fit_rect(window: (u32, u32), image: (u32, u32)) -> Rect {
    let scale_x = window.0 as f32 / image.0 as f32;
    let scale_y = window.1 as f32 / image.1 as f32;
    let scale = scale_x.min(scale_y);

    let scaled_width = ((image.0 as f32 * scale) as u32).max(1);
    let scaled_height = ((image.1 as f32 * scale) as u32).max(1);

    let x = window.0.saturating_sub(scaled_width) / 2;
    let y = window.1.saturating_sub(scaled_height) / 2;
    Rect::new(x as i32, y as i32, scaled_width, scaled_height)
}
