//! Owned textures with cached dimensions

use std::path::Path;

use sdl2::image::LoadSurface;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, TextureCreator, WindowCanvas};
use sdl2::surface::Surface;
use sdl2::ttf::Font;
use sdl2::video::WindowContext;

use crate::error::{Error, Result};
use crate::palette;

/// A renderer-resident image and its size in pixels
pub struct Texture<'a> {
    raw: sdl2::render::Texture<'a>,
    width: u32,
    height: u32,
}

impl<'a> Texture<'a> {
    /// Load an image file, keying out pure white
    pub fn load(creator: &'a TextureCreator<WindowContext>, path: &Path) -> Result<Self> {
        let mut surface = Surface::from_file(path).map_err(|e| Error::surface(path, e))?;
        surface
            .set_color_key(true, palette::WHITE)
            .map_err(|e| Error::surface(path, e))?;

        let texture = Self::from_surface(creator, &surface).map_err(|e| Error::texture(path, e))?;
        log::debug!(
            "Loaded {} ({}x{})",
            path.display(),
            texture.width,
            texture.height
        );
        Ok(texture)
    }

    /// Render `text` in solid mode with `font`
    pub fn from_text(
        creator: &'a TextureCreator<WindowContext>,
        font: &Font<'_, '_>,
        text: &str,
        color: Color,
    ) -> Result<Self> {
        let surface = font.render(text).solid(color).map_err(|e| Error::Text {
            text: text.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_surface(creator, &surface).map_err(|reason| Error::Text {
            text: text.to_string(),
            reason,
        })
    }

    fn from_surface(
        creator: &'a TextureCreator<WindowContext>,
        surface: &Surface<'_>,
    ) -> std::result::Result<Self, String> {
        let raw = creator
            .create_texture_from_surface(surface)
            .map_err(|e| e.to_string())?;
        Ok(Self {
            raw,
            width: surface.width(),
            height: surface.height(),
        })
    }

    pub fn raw(&self) -> &sdl2::render::Texture<'a> {
        &self.raw
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.raw.set_blend_mode(mode);
    }

    pub fn set_color_mod(&mut self, r: u8, g: u8, b: u8) {
        self.raw.set_color_mod(r, g, b);
    }

    pub fn set_alpha_mod(&mut self, alpha: u8) {
        self.raw.set_alpha_mod(alpha);
    }

    /// Copy at natural size with the top-left corner at `(x, y)`
    pub fn render_at(&self, canvas: &mut WindowCanvas, x: i32, y: i32) -> Result<()> {
        canvas
            .copy(&self.raw, None, Rect::new(x, y, self.width, self.height))
            .map_err(Error::Draw)
    }

    /// Copy at natural size centered in a `width` x `height` area
    pub fn render_centered(&self, canvas: &mut WindowCanvas, width: u32, height: u32) -> Result<()> {
        let (x, y) = centered_origin(width, height, self.width, self.height);
        self.render_at(canvas, x, y)
    }
}

/// Top-left corner that centers an `inner` box in an `outer` box
pub fn centered_origin(outer_w: u32, outer_h: u32, inner_w: u32, inner_h: u32) -> (i32, i32) {
    (
        (outer_w as i32 - inner_w as i32) / 2,
        (outer_h as i32 - inner_h as i32) / 2,
    )
}
