//! Lesson 1: a white window that stays up until closed

use std::process::ExitCode;

use sdl_lessons::consts::{BLANK_WINDOW_HEIGHT, BLANK_WINDOW_WIDTH};
use sdl_lessons::renderer::{init_window, is_quit};
use sdl_lessons::{Error, Result, Settings, palette};

fn run() -> Result<()> {
    let settings = Settings::load()?.with_size(BLANK_WINDOW_WIDTH, BLANK_WINDOW_HEIGHT);
    let (sdl, _video, window) = init_window(&settings)?;
    let mut event_pump = sdl.event_pump().map_err(Error::Init)?;

    {
        let mut surface = window.surface(&event_pump).map_err(Error::Window)?;
        surface.fill_rect(None, palette::WHITE).map_err(Error::Draw)?;
        surface.update_window().map_err(Error::Window)?;
    }

    // Nothing changes after the first fill, so block instead of polling
    loop {
        let event = event_pump.wait_event();
        if is_quit(&event) {
            break;
        }
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
