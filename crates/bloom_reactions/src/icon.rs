//! Lifecycle of a single floating icon
//!
//! A [`FloatingIcon`] runs five overlapping tracks built from its
//! [`TravelPlan`]:
//!
//! | track    | values            | duration | easing      |
//! |----------|-------------------|----------|-------------|
//! | scale    | 0 → 1             | bloom    | spring      |
//! | alpha    | 0 → 0.9           | bloom    | spring      |
//! | tilt     | 0 → tilt angle    | total    | linear      |
//! | position | along the path    | total    | linear      |
//! | fade     | 1 → 0             | total    | ease-in-out |
//!
//! The rendered alpha is the bloom alpha multiplied by the fade factor.
//! Once the total duration has elapsed the icon is [`IconPhase::Removed`]
//! and its container detaches it.

use bloom_animation::{Easing, PathMotion, SpringCurve, Tween};
use bloom_core::{Point, Rect, Size};
use serde::Serialize;

use crate::animator::TravelPlan;
use crate::theme::IconTheme;

/// Peak opacity reached at the end of the bloom
pub const BLOOM_ALPHA: f32 = 0.9;

/// Transform anchor in unit coordinates: bottom center
pub const ANCHOR: Point = Point::new(0.5, 1.0);

/// Where an icon is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum IconPhase {
    /// Built but not started
    Created,
    /// Scale and fade-in running
    Blooming,
    /// Travelling and fading out
    Drifting,
    /// Total duration elapsed, ready to be detached
    Removed,
}

impl IconPhase {
    pub fn is_animating(&self) -> bool {
        matches!(self, IconPhase::Blooming | IconPhase::Drifting)
    }
}

/// Visual state of an icon for one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IconFrame {
    /// Container position of the anchor point
    pub position: Point,
    /// Unscaled side length
    pub size: f32,
    pub scale: f32,
    /// Rotation in radians, positive is clockwise
    pub rotation: f32,
    pub alpha: f32,
    pub anchor: Point,
    pub theme_index: usize,
    pub theme: IconTheme,
    pub phase: IconPhase,
}

impl IconFrame {
    /// Unscaled, unrotated frame of the icon in container coordinates
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x - self.size * self.anchor.x,
            self.position.y - self.size * self.anchor.y,
            self.size,
            self.size,
        )
    }
}

/// One icon and its animation tracks
#[derive(Clone, Debug)]
pub struct FloatingIcon {
    plan: TravelPlan,
    theme_index: usize,
    theme: IconTheme,
    size: f32,
    scale: Tween<f32>,
    bloom_alpha: Tween<f32>,
    tilt: Tween<f32>,
    travel: PathMotion,
    fade: Tween<f32>,
    elapsed_ms: f32,
    phase: IconPhase,
}

impl FloatingIcon {
    /// Build the tracks for a plan. Nothing moves until [`start`](Self::start).
    pub fn new(plan: TravelPlan, theme_index: usize, theme: IconTheme, size: f32) -> Self {
        let bloom_ms = plan.timing.bloom_ms;
        let total_ms = plan.timing.total_ms();
        let spring = Easing::Spring(SpringCurve::bloom(bloom_ms));

        Self {
            plan,
            theme_index,
            theme,
            size,
            scale: Tween::new(0.0, 1.0, bloom_ms).easing(spring),
            bloom_alpha: Tween::new(0.0, BLOOM_ALPHA, bloom_ms).easing(spring),
            tilt: Tween::new(0.0, plan.tilt_angle, total_ms),
            travel: plan.path.motion(total_ms),
            fade: Tween::new(1.0, 0.0, total_ms).easing(Easing::EaseInOut),
            elapsed_ms: 0.0,
            phase: IconPhase::Created,
        }
    }

    /// Start every track at once
    pub fn start(&mut self) {
        self.scale.start();
        self.bloom_alpha.start();
        self.tilt.start();
        self.travel.start();
        self.fade.start();
        self.elapsed_ms = 0.0;
        self.phase = IconPhase::Blooming;
    }

    /// Advance all tracks. Returns the phase after the step.
    pub fn tick(&mut self, dt_ms: f32) -> IconPhase {
        if !self.phase.is_animating() {
            return self.phase;
        }

        self.elapsed_ms += dt_ms.max(0.0);
        self.scale.tick(dt_ms);
        self.bloom_alpha.tick(dt_ms);
        self.tilt.tick(dt_ms);
        self.travel.tick(dt_ms);
        self.fade.tick(dt_ms);

        self.phase = if self.elapsed_ms >= self.plan.timing.total_ms() {
            IconPhase::Removed
        } else if self.scale.is_finished() {
            IconPhase::Drifting
        } else {
            IconPhase::Blooming
        };
        self.phase
    }

    /// Snapshot for rendering
    pub fn frame(&self) -> IconFrame {
        let alpha = (self.bloom_alpha.value() * self.fade.value()).clamp(0.0, BLOOM_ALPHA);
        IconFrame {
            position: self.travel.position(),
            size: self.size,
            scale: self.scale.value().max(0.0),
            rotation: self.tilt.value(),
            alpha,
            anchor: ANCHOR,
            theme_index: self.theme_index,
            theme: self.theme,
            phase: self.phase,
        }
    }

    pub fn phase(&self) -> IconPhase {
        self.phase
    }

    pub fn plan(&self) -> &TravelPlan {
        &self.plan
    }

    pub fn theme(&self) -> IconTheme {
        self.theme
    }

    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    pub fn icon_size(&self) -> Size {
        Size::square(self.size)
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Time left before removal
    pub fn remaining_ms(&self) -> f32 {
        (self.plan.timing.total_ms() - self.elapsed_ms).max(0.0)
    }
}
