//! Window, canvas and event pump ownership

use sdl2::event::Event;
use sdl2::image::{InitFlag, Sdl2ImageContext};
use sdl2::keyboard::Keycode;
use sdl2::render::{TextureCreator, WindowCanvas};
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, Sdl, VideoSubsystem};

use crate::error::{Error, Result};
use crate::palette;
use crate::settings::Settings;
use crate::ui::ArrowState;

/// Initialize SDL video and open a shown, centered window
pub fn init_window(settings: &Settings) -> Result<(Sdl, VideoSubsystem, Window)> {
    let sdl = sdl2::init().map_err(Error::Init)?;
    let video = sdl.video().map_err(Error::Init)?;
    let window = video
        .window(&settings.title, settings.width, settings.height)
        .position_centered()
        .build()
        .map_err(|e| Error::Window(e.to_string()))?;

    log::info!(
        "Window {}x{} \"{}\" created",
        settings.width,
        settings.height,
        settings.title
    );
    Ok((sdl, video, window))
}

/// Window close or the `Q` key
pub fn is_quit(event: &Event) -> bool {
    matches!(
        event,
        Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Q),
                ..
            }
    )
}

/// Everything a rendering lesson needs from SDL.
///
/// Fields drop in declaration order, so the canvas (and its window) go away
/// before SDL_image and SDL itself.
pub struct Context {
    canvas: WindowCanvas,
    event_pump: EventPump,
    _image: Sdl2ImageContext,
    _video: VideoSubsystem,
    sdl: Sdl,
    width: u32,
    height: u32,
}

impl Context {
    /// Open the window, an accelerated renderer and PNG loading
    pub fn new(settings: &Settings) -> Result<Self> {
        let (sdl, video, window) = init_window(settings)?;

        let builder = window.into_canvas().accelerated();
        let builder = if settings.vsync {
            builder.present_vsync()
        } else {
            builder
        };
        let mut canvas = builder
            .build()
            .map_err(|e| Error::Renderer(e.to_string()))?;
        canvas.set_draw_color(palette::WHITE);

        let image = sdl2::image::init(InitFlag::PNG).map_err(Error::Image)?;
        let event_pump = sdl.event_pump().map_err(Error::Init)?;

        log::info!("Renderer ready (vsync: {})", settings.vsync);
        Ok(Self {
            canvas,
            event_pump,
            _image: image,
            _video: video,
            sdl,
            width: settings.width,
            height: settings.height,
        })
    }

    pub fn sdl(&self) -> &Sdl {
        &self.sdl
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn canvas(&mut self) -> &mut WindowCanvas {
        &mut self.canvas
    }

    /// Creator for textures owned by the caller
    pub fn texture_creator(&self) -> TextureCreator<WindowContext> {
        self.canvas.texture_creator()
    }

    /// Drain pending events
    pub fn poll_events(&mut self) -> Vec<Event> {
        self.event_pump.poll_iter().collect()
    }

    /// Arrow direction from the keys held right now
    pub fn arrow_state(&self) -> ArrowState {
        ArrowState::from_keyboard(&self.event_pump.keyboard_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_events() {
        assert!(is_quit(&Event::Quit { timestamp: 0 }));
        assert!(!is_quit(&Event::AppTerminating { timestamp: 0 }));
    }
}
