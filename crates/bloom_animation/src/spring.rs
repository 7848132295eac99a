//! Damped spring curves
//!
//! Spring-eased tweens run for a fixed duration. The spring's natural
//! frequency is derived from its damping ratio so that the oscillation
//! envelope has decayed below [`SETTLE_EPSILON`] by the end of the tween.
//! The response is evaluated in closed form on normalized time, so sampling
//! any frame is O(1) and independent of frame rate.

/// Residual displacement allowed at the end of a spring-eased tween
pub const SETTLE_EPSILON: f32 = 1e-3;

/// Physical description of a spring (unit-less, normalized time)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Unit-mass spring with the given damping ratio and natural frequency (rad per unit time)
    pub fn from_damping_ratio(damping_ratio: f32, natural_frequency: f32) -> Self {
        Self {
            stiffness: natural_frequency * natural_frequency,
            damping: 2.0 * damping_ratio * natural_frequency,
            mass: 1.0,
        }
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Undamped angular frequency
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Ratio of actual to critical damping
    pub fn damping_ratio(&self) -> f32 {
        self.damping / self.critical_damping()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Check if the spring is critically damped (no oscillation, fastest settling)
    pub fn is_critically_damped(&self) -> bool {
        (self.damping - self.critical_damping()).abs() < 0.01
    }

    /// Check if the spring is overdamped (slow settling, no oscillation)
    pub fn is_overdamped(&self) -> bool {
        self.damping > self.critical_damping()
    }
}

/// Bloom-in damping ratio: noticeably bouncy
pub const BLOOM_DAMPING_RATIO: f32 = 0.6;

/// Bloom-in initial velocity, in total distances per second
pub const BLOOM_VELOCITY_PER_SEC: f32 = 0.8;

/// Normalized spring response from 0 to 1 over one unit of time
///
/// `initial_velocity` is expressed in total distances per tween duration:
/// `1.0` means the value would cover the whole distance in one duration at
/// its starting speed. Platform spring velocities are given per second; use
/// [`SpringCurve::with_velocity_per_sec`] to convert them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringCurve {
    pub damping_ratio: f32,
    pub initial_velocity: f32,
}

impl SpringCurve {
    pub fn new(damping_ratio: f32, initial_velocity: f32) -> Self {
        Self {
            damping_ratio: damping_ratio.max(f32::EPSILON),
            initial_velocity,
        }
    }

    /// Curve for a tween of `duration_ms` with the velocity given per second
    pub fn with_velocity_per_sec(
        damping_ratio: f32,
        velocity_per_sec: f32,
        duration_ms: f32,
    ) -> Self {
        Self::new(damping_ratio, velocity_per_sec * duration_ms.max(0.0) / 1000.0)
    }

    /// Bloom-in curve for a bloom of `duration_ms`
    pub fn bloom(duration_ms: f32) -> Self {
        Self::with_velocity_per_sec(BLOOM_DAMPING_RATIO, BLOOM_VELOCITY_PER_SEC, duration_ms)
    }

    /// Equivalent unit-mass spring on normalized time
    pub fn config(&self) -> SpringConfig {
        let zeta = self.damping_ratio.max(f32::EPSILON);
        // Envelope e^(-zeta * w0 * t) reaches SETTLE_EPSILON at t = 1;
        // at or above critical damping the envelope rate is w0 itself
        let natural_frequency = -SETTLE_EPSILON.ln() / zeta.min(1.0);
        SpringConfig::from_damping_ratio(zeta, natural_frequency)
    }

    /// Displacement toward the target at normalized time `t`
    ///
    /// Returns exactly 0.0 at `t <= 0` and 1.0 at `t >= 1`.
    pub fn value_at(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        let config = self.config();
        let w0 = config.natural_frequency();
        let zeta = config.damping_ratio();
        let v0 = self.initial_velocity;

        // Remaining error e(t) = 1 - x(t), with e(0) = 1 and e'(0) = -v0
        let error = if config.is_underdamped() && !config.is_critically_damped() {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * t).exp();
            envelope * ((wd * t).cos() + ((zeta * w0 - v0) / wd) * (wd * t).sin())
        } else {
            // Critically damped response (overdamped springs are treated the same)
            (-w0 * t).exp() * (1.0 + (w0 - v0) * t)
        };

        1.0 - error
    }
}
