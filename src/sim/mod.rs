//! Scene simulation module
//!
//! Everything here is pure and display-free:
//! - Variable timestep driven by the caller
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod fps;
pub mod state;
pub mod tick;

pub use fps::FpsCounter;
pub use state::{Ball, Bounds, Scene};
pub use tick::reflect_axis;
