//! Variable timestep scene update
//!
//! Semi-implicit Euler integration with reflective clamping at the viewport
//! edges. Balls never interact with each other.

use std::time::Duration;

use super::state::{Ball, Bounds, Scene};

/// Clamp one axis to `[0, max]`, flipping `vel` when the position left it.
///
/// Returns `true` if the axis reflected.
#[inline]
pub fn reflect_axis(pos: &mut f32, vel: &mut f32, max: f32) -> bool {
    if *pos > max {
        *pos = max;
        *vel = -*vel;
        true
    } else if *pos < 0.0 {
        *pos = 0.0;
        *vel = -*vel;
        true
    } else {
        false
    }
}

impl Ball {
    /// Advance by `dt` seconds and reflect off the bounds
    pub fn step(&mut self, dt: f32, bounds: Bounds) {
        self.pos += self.vel * dt;

        reflect_axis(&mut self.pos.x, &mut self.vel.x, bounds.width);
        reflect_axis(&mut self.pos.y, &mut self.vel.y, bounds.height);
    }
}

impl Scene {
    /// Advance every ball by the wall time elapsed since the last update
    pub fn update(&mut self, elapsed: Duration) {
        self.step(elapsed.as_secs_f32());
    }

    /// Advance every ball by `dt` seconds (zero or negative is allowed)
    pub fn step(&mut self, dt: f32) {
        let bounds = self.bounds;
        for ball in &mut self.balls {
            ball.step(dt, bounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn viewport() -> Bounds {
        Bounds::new(1280.0, 960.0)
    }

    fn single(pos: Vec2, vel: Vec2) -> Scene {
        Scene::from_balls(viewport(), vec![Ball::new(pos, 10.0, vel)])
    }

    #[test]
    fn test_left_edge_reflects() {
        let mut scene = single(Vec2::new(0.0, 100.0), Vec2::new(-50.0, 0.0));
        scene.update(Duration::from_secs(1));

        let ball = scene.balls[0];
        assert_eq!(ball.pos, Vec2::new(0.0, 100.0));
        assert_eq!(ball.vel, Vec2::new(50.0, 0.0));
    }

    #[test]
    fn test_free_flight_keeps_velocity() {
        let mut scene = single(Vec2::new(500.0, 100.0), Vec2::new(100.0, 0.0));
        scene.update(Duration::from_secs(1));

        let ball = scene.balls[0];
        assert_eq!(ball.pos, Vec2::new(600.0, 100.0));
        assert_eq!(ball.vel, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_far_edge_clamps_both_axes() {
        let mut scene = single(Vec2::new(1270.0, 950.0), Vec2::new(100.0, 200.0));
        scene.step(0.5);

        let ball = scene.balls[0];
        assert_eq!(ball.pos, Vec2::new(1280.0, 960.0));
        assert_eq!(ball.vel, Vec2::new(-100.0, -200.0));
    }

    #[test]
    fn test_zero_duration_is_identity() {
        let mut scene = Scene::seeded(viewport(), 10, 7);
        let before = scene.balls.clone();
        scene.update(Duration::ZERO);
        assert_eq!(scene.balls, before);
    }

    #[test]
    fn test_negative_dt_reverses_motion() {
        let mut scene = single(Vec2::new(500.0, 500.0), Vec2::new(100.0, -100.0));
        scene.step(-1.0);

        let ball = scene.balls[0];
        assert_eq!(ball.pos, Vec2::new(400.0, 600.0));
        assert_eq!(ball.vel, Vec2::new(100.0, -100.0));
    }

    #[test]
    fn test_reflect_axis_only_when_leaving() {
        let (mut pos, mut vel) = (10.0, 5.0);
        assert!(!reflect_axis(&mut pos, &mut vel, 20.0));
        assert_eq!((pos, vel), (10.0, 5.0));

        let (mut pos, mut vel) = (20.0, 5.0);
        assert!(!reflect_axis(&mut pos, &mut vel, 20.0));

        let (mut pos, mut vel) = (-3.0, -5.0);
        assert!(reflect_axis(&mut pos, &mut vel, 20.0));
        assert_eq!((pos, vel), (0.0, 5.0));
    }

    #[test]
    fn test_many_frames_stay_inside() {
        let bounds = viewport();
        let mut scene = Scene::seeded(bounds, 10, 12345);
        for _ in 0..1000 {
            scene.update(Duration::from_millis(16));
            assert!(scene.balls.iter().all(|b| bounds.contains(b.pos)));
        }
    }

    proptest! {
        #[test]
        fn prop_positions_stay_in_bounds(
            x in 0.0f32..=1280.0,
            y in 0.0f32..=960.0,
            vx in -1000.0f32..=1000.0,
            vy in -1000.0f32..=1000.0,
            dt in 0.0f32..=0.5,
        ) {
            let bounds = viewport();
            let mut ball = Ball::new(Vec2::new(x, y), 10.0, Vec2::new(vx, vy));
            ball.step(dt, bounds);
            prop_assert!(bounds.contains(ball.pos));
        }

        #[test]
        fn prop_velocity_flips_exactly_on_exit(
            x in 0.0f32..=1280.0,
            y in 0.0f32..=960.0,
            vx in -1000.0f32..=1000.0,
            vy in -1000.0f32..=1000.0,
            dt in 0.0f32..=0.5,
        ) {
            let bounds = viewport();
            let start = Ball::new(Vec2::new(x, y), 10.0, Vec2::new(vx, vy));
            let unclamped = start.pos + start.vel * dt;

            let mut ball = start;
            ball.step(dt, bounds);

            let exit_x = unclamped.x > bounds.width || unclamped.x < 0.0;
            let exit_y = unclamped.y > bounds.height || unclamped.y < 0.0;
            prop_assert_eq!(ball.vel.x, if exit_x { -vx } else { vx });
            prop_assert_eq!(ball.vel.y, if exit_y { -vy } else { vy });
            if !exit_x {
                prop_assert_eq!(ball.pos.x, unclamped.x);
            }
            if !exit_y {
                prop_assert_eq!(ball.pos.y, unclamped.y);
            }
        }
    }
}
