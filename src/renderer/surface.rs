//! Software surfaces for the window-surface lessons

use std::path::Path;

use sdl2::image::LoadSurface;
use sdl2::pixels::PixelFormat;
use sdl2::surface::Surface;

use crate::error::{Error, Result};

/// Load an image and convert it to `format` so blits need no conversion.
///
/// The intermediate surface is freed on return.
pub fn load_optimized_surface(path: &Path, format: &PixelFormat) -> Result<Surface<'static>> {
    let loaded: Surface<'static> = Surface::from_file(path).map_err(|e| Error::surface(path, e))?;
    let optimized = loaded
        .convert(format)
        .map_err(|e| Error::surface(path, format!("unable to optimize image: {e}")))?;

    log::debug!(
        "Loaded {} as {:?}",
        path.display(),
        optimized.pixel_format_enum()
    );
    Ok(optimized)
}
