//! Scene state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Viewport extent the balls bounce inside
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether `pos` lies in `[0, width] x [0, height]`
    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32)
    }
}

/// A ball entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, vel: Vec2) -> Self {
        Self { pos, radius, vel }
    }

    /// Sample a ball somewhere inside `bounds`
    pub fn random<R: Rng>(rng: &mut R, bounds: Bounds) -> Self {
        let pos = Vec2::new(
            rng.random_range(0.0..=bounds.width),
            rng.random_range(0.0..=bounds.height),
        );
        let radius = rng.random_range(BALL_MIN_RADIUS..=BALL_MAX_RADIUS);
        let vel = Vec2::new(
            rng.random_range(BALL_MIN_SPEED..=BALL_MAX_SPEED),
            rng.random_range(BALL_MIN_SPEED..=BALL_MAX_SPEED),
        );
        Self::new(pos, radius, vel)
    }
}

/// The bouncing-ball scene
#[derive(Debug, Clone)]
pub struct Scene {
    pub bounds: Bounds,
    /// Balls in spawn order
    pub balls: Vec<Ball>,
}

impl Scene {
    /// Spawn `count` random balls inside `bounds`
    pub fn new<R: Rng>(bounds: Bounds, count: usize, rng: &mut R) -> Self {
        let balls = (0..count).map(|_| Ball::random(rng, bounds)).collect();
        Self { bounds, balls }
    }

    /// Spawn from a seed (reproducible)
    pub fn seeded(bounds: Bounds, count: usize, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::new(bounds, count, &mut rng)
    }

    /// Build a scene from known balls
    pub fn from_balls(bounds: Bounds, balls: Vec<Ball>) -> Self {
        Self { bounds, balls }
    }
}
