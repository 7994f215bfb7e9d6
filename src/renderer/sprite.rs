//! Sprite-sheet clipping and frame selection

use sdl2::rect::Rect;

/// Iterations each animation frame stays on screen
pub const TICKS_PER_FRAME: u32 = 4;

/// Clip rectangles into a sprite sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    clips: Vec<Rect>,
}

impl SpriteSheet {
    pub fn new(clips: Vec<Rect>) -> Self {
        Self { clips }
    }

    /// `cols` x `rows` square cells, ordered column by column
    pub fn grid(cell: u32, cols: u32, rows: u32) -> Self {
        let clips = (0..cols)
            .flat_map(|i| {
                (0..rows).map(move |j| Rect::new((i * cell) as i32, (j * cell) as i32, cell, cell))
            })
            .collect();
        Self::new(clips)
    }

    /// A single row of `count` frames, `stride` apart, starting at `x_offset`
    pub fn strip(count: u32, x_offset: i32, stride: i32, width: u32, height: u32) -> Self {
        let clips = (0..count as i32)
            .map(|i| Rect::new(x_offset + i * stride, 0, width, height))
            .collect();
        Self::new(clips)
    }

    /// The 2x2 circles sheet
    pub fn circles() -> Self {
        Self::grid(128, 2, 2)
    }

    /// The four-frame walking animation
    pub fn walking() -> Self {
        Self::strip(4, 10, 128, 108, 128)
    }

    pub fn clips(&self) -> &[Rect] {
        &self.clips
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Clip shown at animation iteration `tick`; `None` for an empty sheet
    pub fn frame(&self, tick: u32) -> Option<Rect> {
        let index = (tick / TICKS_PER_FRAME) as usize % self.clips.len().max(1);
        self.clips.get(index).copied()
    }
}

/// `count` squares of `size` in a row at height `y`, `stride` apart from `x`
pub fn slots(count: u32, x: i32, y: i32, stride: i32, size: u32) -> Vec<Rect> {
    (0..count as i32)
        .map(|i| Rect::new(x + i * stride, y, size, size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_column_major() {
        let sheet = SpriteSheet::circles();
        assert_eq!(
            sheet.clips(),
            &[
                Rect::new(0, 0, 128, 128),
                Rect::new(0, 128, 128, 128),
                Rect::new(128, 0, 128, 128),
                Rect::new(128, 128, 128, 128),
            ]
        );
    }

    #[test]
    fn test_walking_frames() {
        let sheet = SpriteSheet::walking();
        assert_eq!(sheet.len(), 4);
        assert_eq!(sheet.frame(0), Some(Rect::new(10, 0, 108, 128)));
        assert_eq!(sheet.frame(3), Some(Rect::new(10, 0, 108, 128)));
        assert_eq!(sheet.frame(4), Some(Rect::new(138, 0, 108, 128)));
        assert_eq!(sheet.frame(15), Some(Rect::new(394, 0, 108, 128)));
        // Wraps after four frames
        assert_eq!(sheet.frame(16), sheet.frame(0));
        assert_eq!(SpriteSheet::new(Vec::new()).frame(7), None);
    }

    #[test]
    fn test_slots() {
        let rects = slots(4, 160, 820, 320, 128);
        assert_eq!(rects[0], Rect::new(160, 820, 128, 128));
        assert_eq!(rects[3], Rect::new(1120, 820, 128, 128));
    }
}
