//! Lesson settings
//!
//! Read from a JSON file at start-up. Every field has a default so a partial
//! (or missing) file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::Bounds;

/// Environment variable overriding the settings file location
pub const SETTINGS_ENV: &str = "SDL_LESSONS_SETTINGS";
/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Runtime settings shared by all lessons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Present synchronized with the display refresh
    pub vsync: bool,

    // === Media ===
    /// Directory holding images, fonts and sounds
    pub media_dir: PathBuf,
    /// Font file name inside `media_dir`
    pub font_file: String,
    /// Font point size
    pub font_size: u16,

    // === Scene ===
    /// Number of balls in the scene
    pub ball_count: usize,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "SDL Tutorial".to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            vsync: true,

            media_dir: PathBuf::from("media"),
            font_file: "lazy.ttf".to_string(),
            font_size: FONT_POINT_SIZE,

            ball_count: BALL_COUNT,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| Error::Settings {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load settings from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json, path)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(Error::SettingsIo {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load settings from `$SDL_LESSONS_SETTINGS` or `./settings.json`
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
        Self::load_from(&path)
    }

    /// Same settings with a different window size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Path of a media file
    pub fn media(&self, name: &str) -> PathBuf {
        self.media_dir.join(name)
    }

    /// Path of the configured font
    pub fn font_path(&self) -> PathBuf {
        self.media(&self.font_file)
    }

    /// Window size as scene bounds
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width as f32, self.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let settings = Settings::from_json("{}", Path::new("inline")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.width, 1280);
        assert_eq!(settings.height, 960);
    }

    #[test]
    fn test_partial_json_overrides() {
        let json = r#"{ "width": 800, "ball_count": 3, "seed": 42 }"#;
        let settings = Settings::from_json(json, Path::new("inline")).unwrap();
        assert_eq!(settings.width, 800);
        assert_eq!(settings.height, SCREEN_HEIGHT);
        assert_eq!(settings.ball_count, 3);
        assert_eq!(settings.seed, Some(42));
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let err = Settings::from_json("{ width: ", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, Error::Settings { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("sdl-lessons-definitely-missing.json");
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_media_paths_and_bounds() {
        let settings = Settings::default().with_size(640, 480);
        assert_eq!(settings.font_path(), PathBuf::from("media").join("lazy.ttf"));
        assert_eq!(settings.media("up.png"), PathBuf::from("media/up.png"));
        let bounds = settings.bounds();
        assert_eq!(bounds.width, 640.0);
        assert_eq!(bounds.height, 480.0);
    }
}
