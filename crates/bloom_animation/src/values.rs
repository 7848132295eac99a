//! Animatable value types
//!
//! Provides the [`Interpolate`] trait and [`Tween`], a single from/to track
//! over any interpolatable value.

use bloom_core::{Color, Point};

use crate::easing::Easing;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t.
    ///
    /// `t` is not clamped, so spring easing can overshoot the target.
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

// ============================================================================
// f32 Implementation
// ============================================================================

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

// ============================================================================
// Point Implementation
// ============================================================================

impl Interpolate for Point {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

// ============================================================================
// Color Implementation
// ============================================================================

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        // Colors never overshoot
        Color::lerp(self, other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

// ============================================================================
// Tween
// ============================================================================

/// A timed transition from one value to another
///
/// ```rust
/// use bloom_animation::{Easing, Tween};
///
/// let mut alpha = Tween::new(0.9_f32, 0.0, 4000.0).easing(Easing::Linear);
/// alpha.start();
/// alpha.tick(2000.0);
/// assert!((alpha.value() - 0.45).abs() < 1e-5);
/// ```
#[derive(Clone, Debug)]
pub struct Tween<T: Interpolate> {
    from: T,
    to: T,
    /// Duration in milliseconds
    duration_ms: f32,
    /// Delay before the transition starts, in milliseconds
    delay_ms: f32,
    easing: Easing,
    /// Time since `start()`, including the delay
    elapsed_ms: f32,
    playing: bool,
}

impl<T: Interpolate> Tween<T> {
    /// Create a linear tween. Negative durations are treated as zero.
    pub fn new(from: T, to: T, duration_ms: f32) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            delay_ms: 0.0,
            easing: Easing::Linear,
            elapsed_ms: 0.0,
            playing: false,
        }
    }

    /// Set the easing curve (builder pattern)
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set a start delay (builder pattern)
    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    /// Start (or restart) from the beginning
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    /// Freeze at the current value
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the full delay and duration have elapsed
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.delay_ms + self.duration_ms
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Linear progress (0.0 to 1.0), before easing
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return if self.is_finished() { 1.0 } else { 0.0 };
        }
        let active = self.elapsed_ms - self.delay_ms;
        (active / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Current eased value
    pub fn value(&self) -> T {
        self.sample_at(self.progress())
    }

    /// Eased value at a given linear progress (0.0 to 1.0)
    pub fn sample_at(&self, progress: f32) -> T {
        let eased = self.easing.apply(progress);
        self.from.lerp(&self.to, eased)
    }

    /// Advance by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.elapsed_ms += dt_ms.max(0.0);

        if self.is_finished() {
            self.elapsed_ms = self.delay_ms + self.duration_ms;
            self.playing = false;
            tracing::trace!(duration_ms = self.duration_ms, "tween finished");
        }
    }
}
