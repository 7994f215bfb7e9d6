//! Split-screen viewport layout

use sdl2::rect::Rect;

/// The three viewports of the viewports lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportLayout {
    /// Entire render target
    pub whole: Rect,
    /// Top-left quarter
    pub top_left: Rect,
    /// Bottom half
    pub bottom: Rect,
}

impl ViewportLayout {
    pub fn split(whole: Rect) -> Self {
        let (w, h) = (whole.width(), whole.height());
        Self {
            whole,
            top_left: Rect::new(0, 0, w / 2, h / 2),
            bottom: Rect::new(0, (h / 2) as i32, w, h / 2),
        }
    }

    pub fn for_size(width: u32, height: u32) -> Self {
        Self::split(Rect::new(0, 0, width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        let layout = ViewportLayout::for_size(1280, 960);
        assert_eq!(layout.whole, Rect::new(0, 0, 1280, 960));
        assert_eq!(layout.top_left, Rect::new(0, 0, 640, 480));
        assert_eq!(layout.bottom, Rect::new(0, 480, 1280, 480));
    }
}
