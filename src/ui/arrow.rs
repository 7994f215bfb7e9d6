//! Keyboard-driven arrow indicator

use sdl2::keyboard::{KeyboardState, Keycode, Scancode};
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;

use crate::consts::ARROW_SIZE;
use crate::error::{Error, Result};
use crate::renderer::Texture;

/// Direction the arrow points, or the neutral image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrowState {
    Left,
    Up,
    Right,
    Down,
    #[default]
    Default,
}

impl ArrowState {
    /// First pressed direction in order Up, Down, Left, Right
    pub fn from_pressed(up: bool, down: bool, left: bool, right: bool) -> Self {
        if up {
            ArrowState::Up
        } else if down {
            ArrowState::Down
        } else if left {
            ArrowState::Left
        } else if right {
            ArrowState::Right
        } else {
            ArrowState::Default
        }
    }

    /// Read the arrow keys from the current keyboard snapshot
    pub fn from_keyboard(keys: &KeyboardState<'_>) -> Self {
        Self::from_pressed(
            keys.is_scancode_pressed(Scancode::Up),
            keys.is_scancode_pressed(Scancode::Down),
            keys.is_scancode_pressed(Scancode::Left),
            keys.is_scancode_pressed(Scancode::Right),
        )
    }

    /// Direction for a pressed arrow key; any other key resets to `Default`
    pub fn from_keycode(key: Keycode) -> Self {
        match key {
            Keycode::Up => ArrowState::Up,
            Keycode::Down => ArrowState::Down,
            Keycode::Left => ArrowState::Left,
            Keycode::Right => ArrowState::Right,
            _ => ArrowState::Default,
        }
    }

    /// Clockwise rotation of the "up" image in degrees; `None` draws the default image
    pub fn rotation(self) -> Option<f64> {
        match self {
            ArrowState::Up => Some(0.0),
            ArrowState::Right => Some(90.0),
            ArrowState::Down => Some(180.0),
            ArrowState::Left => Some(270.0),
            ArrowState::Default => None,
        }
    }
}

/// Arrow indicator drawn in a fixed square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    bounds: Rect,
    state: ArrowState,
}

impl Arrow {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            state: ArrowState::Default,
        }
    }

    /// Arrow square centered on `(cx, cy)`
    pub fn centered(cx: i32, cy: i32) -> Self {
        let half = ARROW_SIZE as i32 / 2;
        Self::new(Rect::new(cx - half, cy - half, ARROW_SIZE, ARROW_SIZE))
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn state(&self) -> ArrowState {
        self.state
    }

    pub fn set_state(&mut self, state: ArrowState) {
        self.state = state;
    }

    pub fn render(
        &self,
        canvas: &mut WindowCanvas,
        arrow: &Texture<'_>,
        default: &Texture<'_>,
    ) -> Result<()> {
        match self.state.rotation() {
            Some(angle) => canvas
                .copy_ex(arrow.raw(), None, self.bounds, angle, None, false, false)
                .map_err(Error::Draw),
            None => canvas.copy(default.raw(), None, self.bounds).map_err(Error::Draw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(ArrowState::from_pressed(true, true, true, true), ArrowState::Up);
        assert_eq!(ArrowState::from_pressed(false, true, true, true), ArrowState::Down);
        assert_eq!(ArrowState::from_pressed(false, false, true, true), ArrowState::Left);
        assert_eq!(ArrowState::from_pressed(false, false, false, true), ArrowState::Right);
        assert_eq!(
            ArrowState::from_pressed(false, false, false, false),
            ArrowState::Default
        );
    }

    #[test]
    fn test_from_keycode() {
        assert_eq!(ArrowState::from_keycode(Keycode::Left), ArrowState::Left);
        assert_eq!(ArrowState::from_keycode(Keycode::Down), ArrowState::Down);
        assert_eq!(ArrowState::from_keycode(Keycode::W), ArrowState::Default);
    }

    #[test]
    fn test_rotation_table() {
        assert_eq!(ArrowState::Up.rotation(), Some(0.0));
        assert_eq!(ArrowState::Right.rotation(), Some(90.0));
        assert_eq!(ArrowState::Down.rotation(), Some(180.0));
        assert_eq!(ArrowState::Left.rotation(), Some(270.0));
        assert_eq!(ArrowState::Default.rotation(), None);
    }

    #[test]
    fn test_centered_square() {
        let arrow = Arrow::centered(640, 480);
        assert_eq!(arrow.bounds(), Rect::new(540, 380, 200, 200));
        assert_eq!(arrow.state(), ArrowState::Default);
    }
}
