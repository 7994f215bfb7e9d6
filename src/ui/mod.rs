//! Widget state and drawing for the later lessons

pub mod arrow;
pub mod button;
pub mod tint;

pub use arrow::{Arrow, ArrowState};
pub use button::{Button, ButtonLabels, MouseEventType, pointer_event, quadrant_buttons};
pub use tint::ColorTint;
