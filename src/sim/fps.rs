//! Frame rate measurement over fixed-size frame windows

use std::time::Instant;

use crate::consts::FPS_WINDOW_FRAMES;

/// Counts presented frames and measures FPS every `FPS_WINDOW_FRAMES` frames.
///
/// The value is kept in tenths of a frame per second so that changes can be
/// detected with integer comparison.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame: u32,
    window_start: Instant,
    fps10: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            frame: 0,
            window_start: start,
            fps10: 0,
        }
    }

    /// Count one frame presented now
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Count one frame presented at `now`
    pub fn tick_at(&mut self, now: Instant) {
        self.frame = self.frame.wrapping_add(1);
        if self.frame % FPS_WINDOW_FRAMES != 0 {
            return;
        }

        let elapsed = now.saturating_duration_since(self.window_start).as_secs_f64();
        if elapsed > 0.0 {
            self.fps10 = (10.0 * FPS_WINDOW_FRAMES as f64 / elapsed).round() as u32;
        }
        self.window_start = now;
    }

    /// Last measured frames per second, times ten
    pub fn fps10(&self) -> u32 {
        self.fps10
    }

    /// Text shown in the info line
    pub fn label(&self) -> String {
        format!("fps : {:.1}", self.fps10 as f32 / 10.0)
    }
}
