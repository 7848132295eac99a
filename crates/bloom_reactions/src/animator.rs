//! Travel path and timing generation
//!
//! [`FloatPathAnimator`] turns a spawn point, an icon size and the container
//! bounds into a [`TravelPlan`]: a randomized cubic Bezier that drifts
//! upward, the travel duration derived from the path's height, and the
//! slight tilt applied while the icon floats.
//!
//! The path always ends in the band `[H/8, 3H/8)` of the container (with
//! `H` the container height), at most two icon widths left or right of the
//! spawn point. The control points swing the curve sideways in a random
//! direction, which gives each icon its own wobble.
//!
//! Draw order for [`FloatPathAnimator::plan`]:
//!
//! 1. rotation direction (`U(2)`)
//! 2. tilt fraction (`U(10)`)
//! 3. end direction (`U(2)`)
//! 4. end x offset (`U(2*size)`)
//! 5. end y offset (`U(H/4)`)
//! 6. travel direction (`U(2)`)
//! 7. control x swing (`U(2*size)`)
//! 8. control y lift (`U(8*size)`)

use std::f32::consts::PI;

use bloom_animation::{Easing, PathMotion};
use bloom_core::{Point, RandomSource, Rect, Size};
use serde::Serialize;

use crate::config::TimingConfig;

/// The four points of a travel curve
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TravelPath {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl TravelPath {
    /// Bounds of the path including its control points
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
            .expand_to_include(self.control1)
            .expand_to_include(self.control2)
    }

    /// Signed horizontal swing of the first control point
    pub fn x_delta(&self) -> f32 {
        self.control1.x - self.start.x
    }

    /// Height of the second control point (mirrored for the first)
    pub fn y_delta(&self) -> f32 {
        self.control2.y
    }

    /// Linear-timed motion along this path
    pub fn motion(&self, duration_ms: f32) -> PathMotion {
        PathMotion::new(
            self.start,
            self.control1,
            self.control2,
            self.end,
            duration_ms,
        )
        .easing(Easing::Linear)
    }
}

/// Durations for one icon, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AnimationTiming {
    /// Scale/fade-in duration
    pub bloom_ms: f32,
    /// Base travel duration
    pub base_travel_ms: f32,
    /// Extra travel time for taller paths
    pub adjustment_ms: f32,
}

impl AnimationTiming {
    /// Travel duration: base plus adjustment
    pub fn total_ms(&self) -> f32 {
        self.base_travel_ms + self.adjustment_ms
    }

    pub fn total_secs(&self) -> f32 {
        self.total_ms() / 1000.0
    }
}

/// Everything random about one icon's animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TravelPlan {
    pub path: TravelPath,
    pub timing: AnimationTiming,
    /// `+1.0` tilts clockwise, `-1.0` counter-clockwise
    pub rotation_direction: f32,
    /// Final tilt angle in radians
    pub tilt_angle: f32,
}

/// Generates travel plans from injected randomness
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatPathAnimator {
    timing: TimingConfig,
}

impl FloatPathAnimator {
    pub fn new(timing: TimingConfig) -> Self {
        Self { timing }
    }

    pub fn timing_config(&self) -> &TimingConfig {
        &self.timing
    }

    /// Random curve from `origin` toward the upper part of the container
    ///
    /// Consumes six draws from `rng`.
    ///
    /// # Panics
    ///
    /// Panics if the container height is not positive and finite.
    pub fn travel_path<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        origin: Point,
        size: f32,
        container: Size,
    ) -> TravelPath {
        let height = container.height;
        assert_container_height(height);

        let end_direction = rng.sign();
        let end_x = origin.x + end_direction * rng.uniform(2.0 * size);
        let end_y = height / 8.0 + rng.uniform(height / 4.0);
        let end = Point::new(end_x, end_y);

        let travel_direction = rng.sign();
        let x_delta = (size / 2.0 + rng.uniform(2.0 * size)) * travel_direction;
        let y_delta = end.y.max(rng.uniform(8.0 * size).max(size));

        TravelPath {
            start: origin,
            control1: Point::new(origin.x + x_delta, height - y_delta),
            control2: Point::new(origin.x - 2.0 * x_delta, y_delta),
            end,
        }
    }

    /// Timing for a path: taller paths (relative to the container) travel longer
    ///
    /// # Panics
    ///
    /// Panics if the container height is not positive and finite.
    pub fn duration_for(&self, path: &TravelPath, container: Size) -> AnimationTiming {
        assert_container_height(container.height);

        let relative_height = path.bounds().height() / container.height;
        AnimationTiming {
            bloom_ms: self.timing.bloom_ms,
            base_travel_ms: self.timing.travel_ms,
            adjustment_ms: self.timing.adjustment_ms * relative_height,
        }
    }

    /// Slight tilt: `direction * π / (16 + V * 0.2)` with `V = U(10)`
    ///
    /// Consumes one draw from `rng`.
    pub fn tilt_angle<R: RandomSource + ?Sized>(&self, rng: &mut R, direction: f32) -> f32 {
        let fraction = rng.uniform(10.0);
        direction * PI / (16.0 + fraction * 0.2)
    }

    /// Full plan for one icon (eight draws, see the module docs for order)
    ///
    /// # Panics
    ///
    /// Panics if the container height is not positive and finite.
    pub fn plan<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        origin: Point,
        size: f32,
        container: Size,
    ) -> TravelPlan {
        assert_container_height(container.height);

        let rotation_direction = rng.sign();
        let tilt_angle = self.tilt_angle(rng, rotation_direction);
        let path = self.travel_path(rng, origin, size, container);
        let timing = self.duration_for(&path, container);

        TravelPlan {
            path,
            timing,
            rotation_direction,
            tilt_angle,
        }
    }
}

fn assert_container_height(height: f32) {
    assert!(
        height > 0.0 && height.is_finite(),
        "container height must be positive and finite, got {}",
        height
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_core::{ScriptedRandom, SeededRandom};

    const ORIGIN: Point = Point::new(18.0, 550.0);
    const SIZE: f32 = 36.0;
    const CONTAINER: Size = Size::new(390.0, 800.0);

    #[test]
    fn test_scripted_path_exact_points() {
        // end +1, U(72)=10, U(200)=50, travel -1, U(72)=14, U(288)=40
        let mut rng = ScriptedRandom::new([0, 10, 50, 1, 14, 40]);
        let path = FloatPathAnimator::default().travel_path(&mut rng, ORIGIN, SIZE, CONTAINER);

        assert_eq!(path.start, ORIGIN);
        assert_eq!(path.end, Point::new(28.0, 150.0));
        assert_eq!(path.x_delta(), -32.0);
        assert_eq!(path.y_delta(), 150.0);
        assert_eq!(path.control1, Point::new(-14.0, 650.0));
        assert_eq!(path.control2, Point::new(82.0, 150.0));
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_scripted_path_wider_swing() {
        // Same draws but U(72)=20: xDelta = -(18 + 20) = -38
        let mut rng = ScriptedRandom::new([0, 10, 50, 1, 20, 40]);
        let path = FloatPathAnimator::default().travel_path(&mut rng, ORIGIN, SIZE, CONTAINER);

        assert_eq!(path.end, Point::new(28.0, 150.0));
        assert_eq!(path.x_delta(), -38.0);
        assert_eq!(path.control1, Point::new(-20.0, 650.0));
        assert_eq!(path.control2, Point::new(94.0, 150.0));
    }

    #[test]
    fn test_y_delta_lower_bounds() {
        // U(200)=0 puts end.y at 100; U(288)=3 is below size, so yDelta = max(100, 36)
        let mut rng = ScriptedRandom::new([1, 5, 0, 0, 0, 3]);
        let path = FloatPathAnimator::default().travel_path(&mut rng, ORIGIN, SIZE, CONTAINER);

        assert_eq!(path.end, Point::new(13.0, 100.0));
        assert_eq!(path.y_delta(), 100.0);
        assert_eq!(path.control1, Point::new(36.0, 700.0));
        assert_eq!(path.control2, Point::new(-18.0, 100.0));

        // A large lift wins over end.y
        let mut rng = ScriptedRandom::new([0, 0, 0, 0, 0, 250]);
        let path = FloatPathAnimator::default().travel_path(&mut rng, ORIGIN, SIZE, CONTAINER);
        assert_eq!(path.y_delta(), 250.0);
        assert_eq!(path.control1.y, 550.0);
    }

    #[test]
    fn test_duration_uses_control_point_bounds() {
        let mut rng = ScriptedRandom::new([0, 10, 50, 1, 14, 40]);
        let animator = FloatPathAnimator::default();
        let path = animator.travel_path(&mut rng, ORIGIN, SIZE, CONTAINER);
        let timing = animator.duration_for(&path, CONTAINER);

        // Bounds span y 150..650 -> 500 / 800 of the container
        assert_eq!(path.bounds().height(), 500.0);
        assert_eq!(timing.bloom_ms, 500.0);
        assert_eq!(timing.base_travel_ms, 4000.0);
        assert!((timing.adjustment_ms - 2500.0).abs() < 1e-3);
        assert!((timing.total_secs() - 6.5).abs() < 1e-5);
    }

    #[test]
    fn test_tilt_angle() {
        let animator = FloatPathAnimator::default();
        let mut rng = ScriptedRandom::new([0, 9]);
        assert!((animator.tilt_angle(&mut rng, 1.0) - PI / 16.0).abs() < 1e-6);
        assert!((animator.tilt_angle(&mut rng, -1.0) + PI / 17.8).abs() < 1e-6);
    }

    #[test]
    fn test_plan_draw_order() {
        // rotation -1, tilt V=5, then the path draws
        let mut rng = ScriptedRandom::new([1, 5, 0, 10, 50, 1, 14, 40]);
        let plan = FloatPathAnimator::default().plan(&mut rng, ORIGIN, SIZE, CONTAINER);

        assert_eq!(plan.rotation_direction, -1.0);
        assert!((plan.tilt_angle + PI / 17.0).abs() < 1e-6);
        assert_eq!(plan.path.control1, Point::new(-14.0, 650.0));
        assert_eq!(rng.consumed(), 8);
    }

    #[test]
    fn test_random_plans_hold_invariants() {
        let animator = FloatPathAnimator::default();
        let mut rng = SeededRandom::new(99);

        for i in 0..2_000 {
            let height = 200.0 + (i % 13) as f32 * 61.5;
            let container = Size::new(390.0, height);
            let origin = Point::new(38.0, height - 28.0);
            let plan = animator.plan(&mut rng, origin, SIZE, container);

            let end = plan.path.end;
            assert!(end.y >= height / 8.0, "end {:?} height {}", end, height);
            assert!(end.y < height * 3.0 / 8.0, "end {:?} height {}", end, height);
            assert!((end.x - origin.x).abs() < 2.0 * SIZE);
            assert!(plan.timing.total_secs() >= 4.0);
            assert!(plan.timing.adjustment_ms >= 0.0);
            assert!(plan.tilt_angle.abs() <= PI / 16.0 + 1e-6);
            assert!(plan.tilt_angle.abs() > PI / 18.0 - 1e-6);
        }
    }

    #[test]
    fn test_end_direction_is_symmetric() {
        let animator = FloatPathAnimator::default();
        let mut rng = SeededRandom::new(2024);
        let (mut left, mut right) = (0, 0);
        for _ in 0..10_000 {
            let path = animator.travel_path(&mut rng, ORIGIN, SIZE, CONTAINER);
            if path.end.x < ORIGIN.x {
                left += 1;
            } else if path.end.x > ORIGIN.x {
                right += 1;
            }
        }
        let ratio = left as f32 / right as f32;
        assert!((0.9..1.1).contains(&ratio), "left {} right {}", left, right);
    }

    #[test]
    fn test_motion_follows_path() {
        let mut rng = ScriptedRandom::new([0, 10, 50, 1, 14, 40]);
        let path = FloatPathAnimator::default().travel_path(&mut rng, ORIGIN, SIZE, CONTAINER);
        let motion = path.motion(6500.0);

        assert_eq!(motion.control_points(), [path.start, path.control1, path.control2, path.end]);
        assert_eq!(motion.control_bounds(), path.bounds());
        assert_eq!(motion.duration_ms(), 6500.0);
    }

    #[test]
    #[should_panic(expected = "container height must be positive")]
    fn test_zero_height_container_panics() {
        let mut rng = SeededRandom::new(1);
        FloatPathAnimator::default().plan(&mut rng, ORIGIN, SIZE, Size::new(390.0, 0.0));
    }
}
