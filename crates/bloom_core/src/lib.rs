//! Bloom Core
//!
//! Foundational types shared by the Bloom crates:
//!
//! - **Geometry**: `Point`, `Size`, `Rect` in container coordinates (y grows downward)
//! - **Color**: RGBA colors with hex parsing for palettes
//! - **Randomness**: the `RandomSource` abstraction every randomized decision goes through
//!
//! # Example
//!
//! ```rust
//! use bloom_core::{Color, Point, RandomSource, ScriptedRandom};
//!
//! let fill = Color::parse_hex("#e66f5e").unwrap();
//! assert!((fill.r - 230.0 / 255.0).abs() < 1e-6);
//!
//! let mut rng = ScriptedRandom::new([0, 7]);
//! assert_eq!(rng.sign(), 1.0);
//! assert_eq!(rng.uniform(72.0), 7.0);
//! let _ = Point::new(18.0, 550.0);
//! ```

pub mod color;
pub mod geometry;
pub mod random;

pub use color::{Color, ColorParseError};
pub use geometry::{Point, Rect, Size};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
