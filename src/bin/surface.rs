//! Lesson 2: an image stretched over the window surface

use std::process::ExitCode;

use sdl2::rect::Rect;

use sdl_lessons::renderer::{init_window, is_quit, load_optimized_surface};
use sdl_lessons::{Error, Result, Settings};

fn run() -> Result<()> {
    let settings = Settings::load()?;
    let (sdl, _video, window) = init_window(&settings)?;
    let mut event_pump = sdl.event_pump().map_err(Error::Init)?;

    let format = window
        .surface(&event_pump)
        .map_err(Error::Window)?
        .pixel_format();
    let stretched = load_optimized_surface(&settings.media("peace.png"), &format)?;
    let target = Rect::new(0, 0, settings.width, settings.height);

    'running: loop {
        for event in event_pump.poll_iter() {
            if is_quit(&event) {
                break 'running;
            }
        }

        let mut surface = window.surface(&event_pump).map_err(Error::Window)?;
        stretched
            .blit_scaled(None, &mut surface, target)
            .map_err(Error::Draw)?;
        surface.update_window().map_err(Error::Window)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
