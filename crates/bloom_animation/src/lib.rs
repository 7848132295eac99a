//! Bloom Animation System
//!
//! Timed animation primitives used by the floating reaction icons.
//!
//! # Features
//!
//! - **Easing**: named curves (linear, platform ease curves, cubic-bezier, damped spring)
//! - **Springs**: closed-form damped spring response for spring-eased tweens
//! - **Tweens**: from/to tracks over any `Interpolate` value with delay and easing
//! - **Path Motion**: traversal of a cubic Bezier path over a fixed duration
//!
//! All durations are in milliseconds and all tracks advance through `tick(dt_ms)`.

pub mod easing;
pub mod path;
pub mod spring;
pub mod values;

pub use easing::Easing;
pub use path::PathMotion;
pub use spring::{SpringConfig, SpringCurve, BLOOM_DAMPING_RATIO, BLOOM_VELOCITY_PER_SEC};
pub use values::{Interpolate, Tween};
