//! Asset bundle for the final lesson

use sdl2::pixels::Color;
use sdl2::render::TextureCreator;
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::WindowContext;

use crate::audio::SoundBank;
use crate::error::Result;
use crate::palette;
use crate::renderer::{Texture, load_font};
use crate::settings::Settings;
use crate::ui::ButtonLabels;

/// Renders strings to textures with one font and color
pub struct TextMaker<'ttf> {
    font: Font<'ttf, 'static>,
    color: Color,
}

impl<'ttf> TextMaker<'ttf> {
    pub fn new(font: Font<'ttf, 'static>) -> Self {
        Self {
            font,
            color: palette::BLACK,
        }
    }

    /// Open the configured font
    pub fn load(ttf: &'ttf Sdl2TtfContext, settings: &Settings) -> Result<Self> {
        Ok(Self::new(load_font(ttf, &settings.font_path(), settings.font_size)?))
    }

    pub fn render<'tc>(
        &self,
        creator: &'tc TextureCreator<WindowContext>,
        text: &str,
    ) -> Result<Texture<'tc>> {
        Texture::from_text(creator, &self.font, text, self.color)
    }

    /// The four button captions
    pub fn button_labels<'tc>(
        &self,
        creator: &'tc TextureCreator<WindowContext>,
    ) -> Result<ButtonLabels<'tc>> {
        Ok(ButtonLabels {
            out: self.render(creator, "Mouse Out")?,
            motion: self.render(creator, "Mouse Motion")?,
            down: self.render(creator, "Mouse Down")?,
            up: self.render(creator, "Mouse Up")?,
        })
    }
}

/// Textures, sounds and the info line used by the final lesson
pub struct Media<'tc, 'ttf> {
    creator: &'tc TextureCreator<WindowContext>,
    text: TextMaker<'ttf>,
    pub labels: ButtonLabels<'tc>,
    pub arrow: Texture<'tc>,
    pub default_arrow: Texture<'tc>,
    pub sounds: SoundBank,
    info: Texture<'tc>,
}

impl<'tc, 'ttf> Media<'tc, 'ttf> {
    /// Load every asset; the first failure aborts
    pub fn load(
        settings: &Settings,
        creator: &'tc TextureCreator<WindowContext>,
        ttf: &'ttf Sdl2TtfContext,
    ) -> Result<Self> {
        let text = TextMaker::load(ttf, settings)?;
        let labels = text.button_labels(creator)?;
        let arrow = Texture::load(creator, &settings.media("up.png"))?;
        let default_arrow = Texture::load(creator, &settings.media("default.png"))?;
        let sounds = SoundBank::load(settings)?;
        let info = text.render(creator, " ")?;

        log::info!("Media loaded from {}", settings.media_dir.display());
        Ok(Self {
            creator,
            text,
            labels,
            arrow,
            default_arrow,
            sounds,
            info,
        })
    }

    pub fn info(&self) -> &Texture<'tc> {
        &self.info
    }

    /// Replace the info line
    pub fn set_info(&mut self, line: &str) -> Result<()> {
        self.info = self.text.render(self.creator, line)?;
        Ok(())
    }

    /// Replace the info line, keeping the old one if rendering fails
    pub fn refresh_info(&mut self, line: &str) {
        if let Err(e) = self.set_info(line) {
            log::warn!("Keeping previous info line: {}", e);
        }
    }
}
