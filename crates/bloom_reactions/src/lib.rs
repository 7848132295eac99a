//! Bloom Reactions
//!
//! Floating heart and emoji icons that bloom in, tilt, drift upward along a
//! randomized cubic Bezier and fade away.
//!
//! # Features
//!
//! - **Travel plans**: [`FloatPathAnimator`] turns a spawn point and container
//!   bounds into a path, a duration and a tilt
//! - **Icon lifecycle**: [`FloatingIcon`] runs bloom, tilt, travel and fade
//!   tracks and reports per-frame [`IconFrame`]s
//! - **Stage**: [`Stage`] holds live icons and detaches them when done
//! - **Gestures**: [`GestureRecognizer`] and [`BurstTimer`] turn taps and long
//!   presses into spawns, wired together by [`Fountain`]
//! - **Configuration**: [`BloomConfig`] loads palettes, art, timing and
//!   gesture thresholds from TOML
//!
//! # Example
//!
//! ```rust
//! use bloom_core::{SeededRandom, Size};
//! use bloom_reactions::{BloomConfig, Fountain};
//!
//! let mut fountain = Fountain::new(Size::new(390.0, 844.0), &BloomConfig::hearts())
//!     .unwrap()
//!     .with_random(SeededRandom::new(1));
//!
//! fountain.spawn();
//! assert_eq!(fountain.stage().child_count(), 1);
//!
//! // Every icon is gone once its travel duration (at most 8s) has elapsed
//! for _ in 0..500 {
//!     fountain.tick(16.0);
//! }
//! assert_eq!(fountain.stage().child_count(), 0);
//! ```

pub mod animator;
pub mod burst;
pub mod config;
pub mod error;
pub mod fountain;
pub mod gesture;
pub mod icon;
pub mod stage;
pub mod theme;

pub use animator::{AnimationTiming, FloatPathAnimator, TravelPath, TravelPlan};
pub use burst::BurstTimer;
pub use config::{BloomConfig, FountainConfig, GestureConfig, IconConfig, ThemeEntry, TimingConfig};
pub use error::{ConfigError, Result};
pub use fountain::Fountain;
pub use gesture::{GestureEvent, GestureRecognizer, PointerInput};
pub use icon::{FloatingIcon, IconFrame, IconPhase, ANCHOR, BLOOM_ALPHA};
pub use stage::{IconId, Stage, StageSnapshot};
pub use theme::{IconArt, IconTheme, Palette};
