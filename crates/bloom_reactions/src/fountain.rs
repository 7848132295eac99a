//! Gesture-driven spawning from a fixed fountain point
//!
//! A [`Fountain`] wires a [`GestureRecognizer`], a [`BurstTimer`] and a
//! [`Stage`] together: a tap spawns one icon, a long press spawns one icon
//! per burst interval until the press ends.

use bloom_core::{Point, RandomSource, Size};

use crate::burst::BurstTimer;
use crate::config::{BloomConfig, FountainConfig};
use crate::error::Result;
use crate::gesture::{GestureEvent, GestureRecognizer, PointerInput};
use crate::stage::{IconId, Stage};

/// Spawn controller for one host surface
pub struct Fountain {
    stage: Stage,
    recognizer: GestureRecognizer,
    burst: BurstTimer,
    placement: FountainConfig,
}

impl Fountain {
    pub fn new(bounds: Size, config: &BloomConfig) -> Result<Self> {
        Ok(Self {
            stage: Stage::from_config(bounds, config)?,
            recognizer: GestureRecognizer::new(config.gesture),
            burst: BurstTimer::new(config.gesture.burst_interval_ms),
            placement: config.fountain.clone(),
        })
    }

    /// Replace the stage's random source (builder pattern)
    pub fn with_random(mut self, rng: impl RandomSource + 'static) -> Self {
        self.stage = self.stage.with_random(rng);
        self
    }

    /// Spawn origin: the icon's center sitting at the bottom-left margins
    pub fn fountain_point(&self) -> Point {
        let size = self.stage.icon_size();
        let height = self.stage.bounds().height;
        Point::new(
            size / 2.0 + self.placement.margin_x,
            height - size / 2.0 - self.placement.margin_bottom,
        )
    }

    /// Spawn one icon at the fountain point
    pub fn spawn(&mut self) -> IconId {
        let origin = self.fountain_point();
        self.stage.spawn_and_animate(origin)
    }

    /// Feed pointer input; returns the recognized gesture, if any
    pub fn handle_input(&mut self, input: PointerInput) -> Option<GestureEvent> {
        let event = self.recognizer.handle(input)?;
        self.apply(event);
        Some(event)
    }

    /// Advance icons, the burst timer and the press timer
    ///
    /// Returns true if icons are still animating or a burst is running.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.stage.tick(dt_ms);

        for _ in 0..self.burst.tick(dt_ms) {
            self.spawn();
        }

        if let Some(event) = self.recognizer.tick(dt_ms) {
            self.apply(event);
        }

        self.burst.is_running() || !self.stage.is_empty()
    }

    fn apply(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Tap { .. } => {
                self.spawn();
            }
            GestureEvent::LongPressBegan { .. } => {
                tracing::info!(
                    interval_ms = self.burst.interval_ms(),
                    "long press began, starting burst"
                );
                self.burst.start();
            }
            GestureEvent::LongPressEnded { .. } | GestureEvent::LongPressCancelled => {
                tracing::info!(spawned = self.burst.fired(), "long press ended, burst cancelled");
                self.burst.cancel();
            }
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    pub fn burst(&self) -> &BurstTimer {
        &self.burst
    }

    pub fn recognizer(&self) -> &GestureRecognizer {
        &self.recognizer
    }
}
