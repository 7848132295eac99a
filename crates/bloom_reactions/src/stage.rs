//! In-memory host container for floating icons
//!
//! The stage owns every live icon, ticks them from the frame loop and
//! detaches each one as soon as its total duration has elapsed. Icons are
//! independent; spawning is unbounded.

use std::time::Instant;

use bloom_core::{Point, RandomSource, SeededRandom, Size};
use serde::Serialize;
use slotmap::{new_key_type, SlotMap};

use crate::animator::FloatPathAnimator;
use crate::config::BloomConfig;
use crate::error::Result;
use crate::icon::{FloatingIcon, IconFrame, IconPhase};
use crate::theme::{IconArt, Palette};

new_key_type! {
    /// Handle to an icon on a [`Stage`]
    pub struct IconId;
}

/// Everything a renderer needs for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StageSnapshot {
    pub bounds: Size,
    pub art: IconArt,
    pub icons: Vec<IconFrame>,
}

/// Container of floating icons
pub struct Stage {
    bounds: Size,
    palette: Palette,
    art: IconArt,
    icon_size: f32,
    animator: FloatPathAnimator,
    rng: Box<dyn RandomSource>,
    icons: SlotMap<IconId, FloatingIcon>,
    removed: Vec<IconId>,
    needs_redraw: bool,
    spawned_total: u64,
    last_frame: Instant,
}

impl Stage {
    /// Create an empty stage drawing from OS entropy
    pub fn new(
        bounds: Size,
        palette: Palette,
        art: IconArt,
        icon_size: f32,
        animator: FloatPathAnimator,
    ) -> Self {
        Self {
            bounds,
            palette,
            art,
            icon_size,
            animator,
            rng: Box::new(SeededRandom::from_entropy()),
            icons: SlotMap::with_key(),
            removed: Vec::new(),
            needs_redraw: false,
            spawned_total: 0,
            last_frame: Instant::now(),
        }
    }

    /// Create a stage from a validated config
    pub fn from_config(bounds: Size, config: &BloomConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            bounds,
            config.build_palette()?,
            config.icon.art(),
            config.icon.size,
            FloatPathAnimator::new(config.timing),
        ))
    }

    /// Replace the random source (builder pattern)
    pub fn with_random(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Spawn an icon at `origin` and start its animation
    ///
    /// Draws the theme first, then the travel plan.
    ///
    /// # Panics
    ///
    /// Panics if the stage height is not positive and finite.
    pub fn spawn_and_animate(&mut self, origin: Point) -> IconId {
        let (theme_index, theme) = self.palette.pick(self.rng.as_mut());
        let plan = self
            .animator
            .plan(self.rng.as_mut(), origin, self.icon_size, self.bounds);

        let mut icon = FloatingIcon::new(plan, theme_index, theme, self.icon_size);
        icon.start();
        let id = self.icons.insert(icon);

        self.spawned_total += 1;
        self.needs_redraw = true;
        tracing::debug!(
            ?id,
            theme_index,
            duration_ms = plan.timing.total_ms(),
            "spawned icon"
        );
        id
    }

    /// Advance every icon and detach the finished ones
    ///
    /// Returns true if any icon is still animating (needs another tick).
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if self.icons.is_empty() {
            return false;
        }

        let mut finished = Vec::new();
        for (id, icon) in self.icons.iter_mut() {
            if icon.tick(dt_ms) == IconPhase::Removed {
                finished.push(id);
            }
        }

        for id in finished {
            if let Some(icon) = self.icons.remove(id) {
                tracing::debug!(?id, elapsed_ms = icon.elapsed_ms(), "removed icon");
                self.removed.push(id);
            }
        }

        self.needs_redraw = true;
        tracing::trace!(live = self.icons.len(), "stage tick");
        !self.icons.is_empty()
    }

    /// Tick with the wall-clock time since the previous call
    pub fn tick_now(&mut self) -> bool {
        let now = Instant::now();
        let dt_ms = (now - self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;
        self.tick(dt_ms)
    }

    /// Number of attached icons
    pub fn child_count(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn icon(&self, id: IconId) -> Option<&FloatingIcon> {
        self.icons.get(id)
    }

    pub fn contains(&self, id: IconId) -> bool {
        self.icons.contains_key(id)
    }

    /// Frame of every attached icon
    pub fn frames(&self) -> Vec<(IconId, IconFrame)> {
        self.icons
            .iter()
            .map(|(id, icon)| (id, icon.frame()))
            .collect()
    }

    pub fn snapshot(&self) -> StageSnapshot {
        StageSnapshot {
            bounds: self.bounds,
            art: self.art.clone(),
            icons: self.icons.values().map(FloatingIcon::frame).collect(),
        }
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Resize the container; only icons spawned afterwards see the new bounds
    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    pub fn icon_size(&self) -> f32 {
        self.icon_size
    }

    pub fn art(&self) -> &IconArt {
        &self.art
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn animator(&self) -> &FloatPathAnimator {
        &self.animator
    }

    /// Icons detached since the previous call
    pub fn take_removed(&mut self) -> Vec<IconId> {
        std::mem::take(&mut self.removed)
    }

    /// Check and clear the redraw flag
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }

    /// Icons spawned over the stage's lifetime
    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }
}
