//! Headless gesture simulation
//!
//! Drives a [`Fountain`] with scripted taps and one long press at a fixed
//! frame rate, then runs frames until every icon has detached.

use bloom_reactions::{Fountain, PointerInput};
use serde::Serialize;
use tracing::{debug, info};

/// Touch point used for every simulated gesture
const TOUCH: (f32, f32) = (195.0, 400.0);

/// Upper bound on simulated time after the gestures end
const DRAIN_LIMIT_MS: f32 = 60_000.0;

/// What to simulate
#[derive(Clone, Copy, Debug)]
pub struct Script {
    pub taps: u32,
    /// Long-press hold after the press is recognized; zero skips the long press
    pub hold_ms: f32,
    pub fps: u32,
}

/// Result of a simulation run
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Summary {
    pub taps: u32,
    pub hold_ms: f32,
    pub frames: u64,
    pub simulated_ms: f32,
    pub spawned: u64,
    pub removed: usize,
    pub peak_children: usize,
    pub remaining: usize,
}

struct Runner<'a> {
    fountain: &'a mut Fountain,
    frame_ms: f32,
    summary: Summary,
}

impl Runner<'_> {
    fn frame(&mut self) {
        self.fountain.tick(self.frame_ms);
        self.summary.frames += 1;
        self.summary.simulated_ms += self.frame_ms;

        let removed = self.fountain.stage_mut().take_removed();
        if !removed.is_empty() {
            debug!(count = removed.len(), "icons detached");
        }
        self.summary.removed += removed.len();
        self.summary.peak_children = self
            .summary
            .peak_children
            .max(self.fountain.stage().child_count());
    }

    fn input(&mut self, input: PointerInput) {
        if let Some(event) = self.fountain.handle_input(input) {
            debug!(?event, "gesture");
        }
    }

    fn down(&mut self) {
        self.input(PointerInput::Down {
            id: 1,
            x: TOUCH.0,
            y: TOUCH.1,
        });
    }

    fn up(&mut self) {
        self.input(PointerInput::Up {
            id: 1,
            x: TOUCH.0,
            y: TOUCH.1,
        });
    }
}

/// Run the script to completion
pub fn run(fountain: &mut Fountain, script: Script) -> Summary {
    let frame_ms = 1000.0 / script.fps.max(1) as f32;
    let mut runner = Runner {
        fountain,
        frame_ms,
        summary: Summary {
            taps: script.taps,
            hold_ms: script.hold_ms,
            ..Summary::default()
        },
    };

    // A frame between press and release only fits while it is shorter than
    // the long-press threshold; otherwise the tap is released within the frame
    let min_press_ms = runner.fountain.recognizer().config().min_press_ms;
    for tap in 0..script.taps {
        runner.down();
        if frame_ms < min_press_ms {
            runner.frame();
        }
        runner.up();
        runner.frame();
        debug!(tap, "tap sent");
    }

    if script.hold_ms > 0.0 {
        runner.down();
        while !runner.fountain.recognizer().is_long_pressing() {
            runner.frame();
        }

        let mut held = 0.0;
        while held + frame_ms <= script.hold_ms {
            runner.frame();
            held += frame_ms;
        }
        runner.up();
        info!(
            held_ms = held,
            bursts = runner.fountain.burst().fired(),
            "long press released"
        );
    }

    let drain_start = runner.summary.simulated_ms;
    while !runner.fountain.stage().is_empty()
        && runner.summary.simulated_ms - drain_start < DRAIN_LIMIT_MS
    {
        runner.frame();
    }

    runner.summary.spawned = runner.fountain.stage().spawned_total();
    runner.summary.remaining = runner.fountain.stage().child_count();
    runner.summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_core::{SeededRandom, Size};
    use bloom_reactions::BloomConfig;

    fn fountain() -> Fountain {
        Fountain::new(Size::new(390.0, 844.0), &BloomConfig::hearts())
            .unwrap()
            .with_random(SeededRandom::new(11))
    }

    #[test]
    fn test_taps_and_long_press() {
        let mut fountain = fountain();
        let summary = run(
            &mut fountain,
            Script {
                taps: 2,
                hold_ms: 350.0,
                fps: 100,
            },
        );

        assert_eq!(summary.spawned, 5);
        assert_eq!(summary.removed, 5);
        assert_eq!(summary.remaining, 0);
        assert!(summary.peak_children >= 3);
    }

    #[test]
    fn test_taps_spawn_at_low_frame_rates() {
        for fps in [1, 4, 5, 6, 10, 60] {
            let mut fountain = fountain();
            let summary = run(
                &mut fountain,
                Script {
                    taps: 3,
                    hold_ms: 0.0,
                    fps,
                },
            );
            assert_eq!(summary.spawned, 3, "fps {}", fps);
            assert_eq!(summary.remaining, 0, "fps {}", fps);
        }
    }

    #[test]
    fn test_long_press_at_low_frame_rate() {
        let mut fountain = fountain();
        let summary = run(
            &mut fountain,
            Script {
                taps: 1,
                hold_ms: 1000.0,
                fps: 4,
            },
        );

        // The tap spawns, then the burst fires on the held frames
        assert!(summary.spawned >= 2, "spawned {}", summary.spawned);
        assert_eq!(summary.remaining, 0);
    }

    #[test]
    fn test_no_gestures_spawns_nothing() {
        let mut fountain = fountain();
        let summary = run(
            &mut fountain,
            Script {
                taps: 0,
                hold_ms: 0.0,
                fps: 60,
            },
        );
        assert_eq!(summary.spawned, 0);
        assert_eq!(summary.frames, 0);
    }
}
