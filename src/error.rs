//! Error types for lesson start-up and rendering.
//!
//! SDL2 reports most failures as plain strings; each variant records which
//! subsystem or asset failed so the binaries can log one useful line and exit.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while bringing up SDL, loading media or drawing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("SDL could not initialize: {0}")]
    Init(String),

    #[error("window could not be created: {0}")]
    Window(String),

    #[error("renderer could not be created: {0}")]
    Renderer(String),

    #[error("SDL_image could not be initialized: {0}")]
    Image(String),

    #[error("SDL_ttf could not be initialized: {0}")]
    Ttf(String),

    #[error("SDL_mixer could not be initialized: {0}")]
    Mixer(String),

    #[error("unable to load surface from {path}: {reason}")]
    Surface { path: PathBuf, reason: String },

    #[error("unable to create texture from {path}: {reason}")]
    Texture { path: PathBuf, reason: String },

    #[error("unable to render text {text:?}: {reason}")]
    Text { text: String, reason: String },

    #[error("failed to load font {path}: {reason}")]
    Font { path: PathBuf, reason: String },

    #[error("failed to load music from {path}: {reason}")]
    Music { path: PathBuf, reason: String },

    #[error("failed to load chunk from {path}: {reason}")]
    Chunk { path: PathBuf, reason: String },

    #[error("draw call failed: {0}")]
    Draw(String),

    #[error("failed to read settings at {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings at {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn surface(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::Surface {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn texture(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::Texture {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_asset() {
        let err = Error::surface("media/tree.png", "no such file");
        assert_eq!(
            err.to_string(),
            "unable to load surface from media/tree.png: no such file"
        );

        let err = Error::Text {
            text: "fps : 60.0".into(),
            reason: "font closed".into(),
        };
        assert!(err.to_string().contains("\"fps : 60.0\""));
    }
}
