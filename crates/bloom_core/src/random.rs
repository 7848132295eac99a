//! Injectable randomness
//!
//! Every randomized decision in Bloom goes through [`RandomSource`], so tests
//! can script exact draws and demos can replay a seed.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform integer draws
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. A `bound` of zero yields zero.
    fn uniform_int(&mut self, bound: u32) -> u32;

    /// Uniform integer draw for a fractional bound, returned as `f32`.
    ///
    /// The bound is truncated toward zero first, so `uniform(200.9)` draws
    /// from `[0, 200)`. Negative and NaN bounds behave like zero.
    fn uniform(&mut self, bound: f32) -> f32 {
        // `as` saturates: negatives and NaN become 0
        self.uniform_int(bound as u32) as f32
    }

    /// Either `+1.0` or `-1.0` with equal probability (a draw of 0 is `+1`)
    fn sign(&mut self) -> f32 {
        1.0 - 2.0 * self.uniform_int(2) as f32
    }

    /// Uniform index into a collection of `len` items
    fn index(&mut self, len: usize) -> usize {
        self.uniform_int(len.min(u32::MAX as usize) as u32) as usize
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform_int(&mut self, bound: u32) -> u32 {
        (**self).uniform_int(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn uniform_int(&mut self, bound: u32) -> u32 {
        (**self).uniform_int(bound)
    }
}

/// Pseudo-random source backed by `rand`'s `StdRng`
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Reproducible source for a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for SeededRandom {
    fn uniform_int(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed queue of draws
///
/// Draws are consumed in order, one per call with a non-zero bound. Calls
/// with a zero bound return zero and leave the queue untouched.
///
/// # Panics
///
/// `uniform_int` panics when the queue is exhausted or when the next draw is
/// not below the requested bound. Both mean the script does not match the
/// code under test.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<u32>,
    consumed: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Append more draws to the end of the script
    pub fn extend(&mut self, draws: impl IntoIterator<Item = u32>) {
        self.draws.extend(draws);
    }

    /// Draws not yet consumed
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }

    /// Draws consumed so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let draw = self.draws.pop_front().unwrap_or_else(|| {
            panic!(
                "scripted random source exhausted after {} draws (bound {})",
                self.consumed, bound
            )
        });
        assert!(
            draw < bound,
            "scripted draw #{} is {} but the bound is {}",
            self.consumed,
            draw,
            bound
        );
        self.consumed += 1;
        draw
    }
}
