//! SDL2 rendering module
//!
//! Thin owning wrappers over window, canvas, textures and surfaces, plus the
//! draw helpers shared by the lessons.

pub mod context;
pub mod shapes;
pub mod sprite;
pub mod surface;
pub mod text;
pub mod texture;
pub mod viewport;

pub use context::{Context, init_window, is_quit};
pub use shapes::{circle_spans, draw_geometry, draw_scene};
pub use sprite::SpriteSheet;
pub use surface::load_optimized_surface;
pub use text::{init_ttf, load_font};
pub use texture::Texture;
pub use viewport::ViewportLayout;
