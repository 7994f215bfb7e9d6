//! SDL Lessons - progressive SDL2 exercises ending in a bouncing ball scene
//!
//! Core modules:
//! - `sim`: Scene simulation (balls, boundary reflection, FPS counting)
//! - `ui`: Widget state (buttons, arrow indicator, color tint)
//! - `renderer`: SDL2 window/canvas context, textures, draw helpers
//! - `audio`: SDL2_mixer music and sound effects
//! - `media`: Asset bundle for the final lesson
//! - `settings`: JSON-backed runtime configuration

pub mod audio;
pub mod error;
pub mod media;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{Error, Result};
pub use settings::Settings;

/// Lesson configuration constants
pub mod consts {
    /// Default screen dimensions
    pub const SCREEN_WIDTH: u32 = 1280;
    pub const SCREEN_HEIGHT: u32 = 960;

    /// Dimensions used by the first lesson
    pub const BLANK_WINDOW_WIDTH: u32 = 640;
    pub const BLANK_WINDOW_HEIGHT: u32 = 480;

    /// Balls spawned by the scene
    pub const BALL_COUNT: usize = 10;
    /// Ball radius sampling range (pixels)
    pub const BALL_MIN_RADIUS: f32 = 5.0;
    pub const BALL_MAX_RADIUS: f32 = 50.0;
    /// Per-axis speed sampling range (pixels/s)
    pub const BALL_MIN_SPEED: f32 = 100.0;
    pub const BALL_MAX_SPEED: f32 = 500.0;

    /// Frames per FPS measurement window
    pub const FPS_WINDOW_FRAMES: u32 = 100;

    /// Font point size for all rendered text
    pub const FONT_POINT_SIZE: u16 = 28;

    /// Step applied to a tint component per key press
    pub const TINT_STEP: u8 = 32;

    /// Arrow indicator edge length (pixels)
    pub const ARROW_SIZE: u32 = 200;
}

/// RGBA colors shared by lessons
pub mod palette {
    use sdl2::pixels::Color;

    pub const WHITE: Color = Color::RGBA(0xFF, 0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::RGBA(0x00, 0x00, 0x00, 0xFF);
    pub const RED: Color = Color::RGBA(0xFF, 0x00, 0x00, 0xFF);
    pub const GREEN: Color = Color::RGBA(0x00, 0xFF, 0x00, 0xFF);
    pub const YELLOW: Color = Color::RGBA(0xFF, 0xFF, 0x00, 0xFF);
    pub const BUTTON: Color = Color::RGBA(0xFF, 0xFF, 0x11, 0xFF);
}
