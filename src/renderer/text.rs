//! SDL_ttf setup and font loading

use std::path::Path;

use sdl2::ttf::{Font, Sdl2TtfContext};

use crate::error::{Error, Result};

/// Initialize SDL_ttf; fonts borrow the returned context
pub fn init_ttf() -> Result<Sdl2TtfContext> {
    sdl2::ttf::init().map_err(|e| Error::Ttf(e.to_string()))
}

/// Open a TrueType font at `point_size`
pub fn load_font<'ttf>(
    ttf: &'ttf Sdl2TtfContext,
    path: &Path,
    point_size: u16,
) -> Result<Font<'ttf, 'static>> {
    let font = ttf.load_font(path, point_size).map_err(|reason| Error::Font {
        path: path.to_path_buf(),
        reason,
    })?;
    log::debug!("Opened font {} at {}pt", path.display(), point_size);
    Ok(font)
}
