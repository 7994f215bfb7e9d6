//! Key-driven color and alpha modulation

use sdl2::keyboard::Keycode;

use crate::consts::TINT_STEP;

/// RGBA modulation applied to textures in the viewports lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for ColorTint {
    fn default() -> Self {
        Self {
            r: 0xFF,
            g: 0xFF,
            b: 0xFF,
            a: 0xFF,
        }
    }
}

impl ColorTint {
    /// Apply a key press. W/E/R/T raise r/g/b/a, S/D/F/G lower them.
    ///
    /// Components wrap around. Returns `false` for keys without a mapping.
    pub fn apply_key(&mut self, key: Keycode) -> bool {
        let (component, raise) = match key {
            Keycode::W => (&mut self.r, true),
            Keycode::E => (&mut self.g, true),
            Keycode::R => (&mut self.b, true),
            Keycode::T => (&mut self.a, true),
            Keycode::S => (&mut self.r, false),
            Keycode::D => (&mut self.g, false),
            Keycode::F => (&mut self.b, false),
            Keycode::G => (&mut self.a, false),
            _ => return false,
        };

        *component = if raise {
            component.wrapping_add(TINT_STEP)
        } else {
            component.wrapping_sub(TINT_STEP)
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_wraps() {
        let mut tint = ColorTint::default();
        assert!(tint.apply_key(Keycode::W));
        assert_eq!(tint.r, 0x1F);
    }

    #[test]
    fn test_lower_each_component() {
        let mut tint = ColorTint::default();
        for key in [Keycode::S, Keycode::D, Keycode::F, Keycode::G] {
            assert!(tint.apply_key(key));
        }
        assert_eq!(tint, ColorTint { r: 0xDF, g: 0xDF, b: 0xDF, a: 0xDF });
    }

    #[test]
    fn test_round_trip_and_unmapped() {
        let mut tint = ColorTint::default();
        tint.apply_key(Keycode::T);
        tint.apply_key(Keycode::G);
        assert_eq!(tint, ColorTint::default());

        assert!(!tint.apply_key(Keycode::Q));
        assert_eq!(tint, ColorTint::default());
    }
}
