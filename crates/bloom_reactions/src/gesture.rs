//! Tap and long-press recognition
//!
//! [`GestureRecognizer`] consumes raw pointer input and frame time and
//! reports taps and long presses. Only the first pointer down is tracked;
//! other pointers are ignored until it lifts.

use bloom_core::Point;

use crate::config::GestureConfig;

/// Raw pointer input from the host
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    /// A pointer went down
    Down {
        /// Unique identifier for this pointer
        id: u64,
        /// X position in container coordinates
        x: f32,
        /// Y position in container coordinates
        y: f32,
    },
    /// A pointer moved
    Moved { id: u64, x: f32, y: f32 },
    /// A pointer lifted
    Up { id: u64, x: f32, y: f32 },
    /// The system took the pointer away
    Cancelled { id: u64 },
}

impl PointerInput {
    pub fn id(&self) -> u64 {
        match self {
            PointerInput::Down { id, .. } => *id,
            PointerInput::Moved { id, .. } => *id,
            PointerInput::Up { id, .. } => *id,
            PointerInput::Cancelled { id } => *id,
        }
    }

    /// Get the position (returns None for Cancelled)
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerInput::Down { x, y, .. } => Some(Point::new(*x, *y)),
            PointerInput::Moved { x, y, .. } => Some(Point::new(*x, *y)),
            PointerInput::Up { x, y, .. } => Some(Point::new(*x, *y)),
            PointerInput::Cancelled { .. } => None,
        }
    }
}

/// Recognized gestures
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Short press released in place
    Tap { position: Point },
    /// Press held past the minimum duration
    LongPressBegan { position: Point },
    /// Long press released
    LongPressEnded { position: Point },
    /// Long press taken away by the system
    LongPressCancelled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum TouchState {
    Idle,
    Pressed {
        id: u64,
        origin: Point,
        position: Point,
        held_ms: f32,
    },
    LongPressing {
        id: u64,
        position: Point,
    },
    /// Moved too far; ignored until the pointer lifts
    Failed {
        id: u64,
    },
}

/// Tap and long-press state machine for a single pointer
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    state: TouchState,
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: TouchState::Idle,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Whether a pointer is currently tracked
    pub fn is_tracking(&self) -> bool {
        self.state != TouchState::Idle
    }

    pub fn is_long_pressing(&self) -> bool {
        matches!(self.state, TouchState::LongPressing { .. })
    }

    /// Feed one pointer input
    pub fn handle(&mut self, input: PointerInput) -> Option<GestureEvent> {
        match (self.state, input) {
            (TouchState::Idle, PointerInput::Down { id, x, y }) => {
                let origin = Point::new(x, y);
                self.state = TouchState::Pressed {
                    id,
                    origin,
                    position: origin,
                    held_ms: 0.0,
                };
                None
            }

            (
                TouchState::Pressed {
                    id,
                    origin,
                    held_ms,
                    ..
                },
                PointerInput::Moved { id: moved, x, y },
            ) if id == moved => {
                let position = Point::new(x, y);
                self.state = if origin.distance_to(position) > self.config.allowable_movement {
                    tracing::trace!(id, "pointer moved too far, gesture failed");
                    TouchState::Failed { id }
                } else {
                    TouchState::Pressed {
                        id,
                        origin,
                        position,
                        held_ms,
                    }
                };
                None
            }

            (TouchState::LongPressing { id, .. }, PointerInput::Moved { id: moved, x, y })
                if id == moved =>
            {
                self.state = TouchState::LongPressing {
                    id,
                    position: Point::new(x, y),
                };
                None
            }

            (
                TouchState::Pressed {
                    id,
                    origin,
                    held_ms,
                    ..
                },
                PointerInput::Up { id: lifted, x, y },
            ) if id == lifted => {
                self.state = TouchState::Idle;
                let position = Point::new(x, y);
                let in_place = origin.distance_to(position) <= self.config.allowable_movement;
                (held_ms < self.config.min_press_ms && in_place)
                    .then_some(GestureEvent::Tap { position })
            }

            (TouchState::LongPressing { id, .. }, PointerInput::Up { id: lifted, x, y })
                if id == lifted =>
            {
                self.state = TouchState::Idle;
                Some(GestureEvent::LongPressEnded {
                    position: Point::new(x, y),
                })
            }

            (TouchState::LongPressing { id, .. }, PointerInput::Cancelled { id: lost })
                if id == lost =>
            {
                self.state = TouchState::Idle;
                Some(GestureEvent::LongPressCancelled)
            }

            (
                TouchState::Pressed { id, .. } | TouchState::Failed { id },
                PointerInput::Up { id: lifted, .. } | PointerInput::Cancelled { id: lifted },
            ) if id == lifted => {
                self.state = TouchState::Idle;
                None
            }

            _ => None,
        }
    }

    /// Advance the press timer; reports `LongPressBegan` once the hold is long enough
    pub fn tick(&mut self, dt_ms: f32) -> Option<GestureEvent> {
        let TouchState::Pressed {
            id,
            origin,
            position,
            held_ms,
        } = self.state
        else {
            return None;
        };

        let held_ms = held_ms + dt_ms.max(0.0);
        if held_ms >= self.config.min_press_ms {
            self.state = TouchState::LongPressing { id, position };
            Some(GestureEvent::LongPressBegan { position })
        } else {
            self.state = TouchState::Pressed {
                id,
                origin,
                position,
                held_ms,
            };
            None
        }
    }
}
