//! Repeating spawn timer for long presses
//!
//! The timer is an explicit handle owned by whoever drives the frame loop.
//! It fires once per interval while running. Fires that a long frame would
//! skip over are coalesced into one, like a platform repeating timer.

/// Repeating timer with start/cancel
#[derive(Clone, Debug, PartialEq)]
pub struct BurstTimer {
    interval_ms: f32,
    elapsed_ms: f32,
    next_fire_ms: f32,
    running: bool,
    fired: u32,
}

impl BurstTimer {
    /// Create a stopped timer. Non-positive intervals are clamped to 1ms.
    pub fn new(interval_ms: f32) -> Self {
        let interval_ms = if interval_ms > 0.0 { interval_ms } else { 1.0 };
        Self {
            interval_ms,
            elapsed_ms: 0.0,
            next_fire_ms: interval_ms,
            running: false,
            fired: 0,
        }
    }

    pub fn interval_ms(&self) -> f32 {
        self.interval_ms
    }

    /// Start from zero. The first fire is one interval away.
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.next_fire_ms = self.interval_ms;
        self.fired = 0;
        self.running = true;
    }

    /// Stop future fires
    pub fn cancel(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Fires since the last `start`
    pub fn fired(&self) -> u32 {
        self.fired
    }

    /// Advance and return how many times the timer fired in this step (0 or 1)
    pub fn tick(&mut self, dt_ms: f32) -> u32 {
        if !self.running {
            return 0;
        }

        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms < self.next_fire_ms {
            return 0;
        }

        let periods = (self.elapsed_ms / self.interval_ms).floor();
        self.next_fire_ms = (periods + 1.0) * self.interval_ms;
        self.fired += 1;
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_fire_after_one_interval() {
        let mut timer = BurstTimer::new(100.0);
        assert_eq!(timer.tick(100.0), 0);

        timer.start();
        assert_eq!(timer.tick(99.0), 0);
        assert_eq!(timer.tick(1.0), 1);
        assert_eq!(timer.tick(50.0), 0);
        assert_eq!(timer.tick(50.0), 1);
    }

    #[test]
    fn test_hold_350ms_fires_three_times() {
        let mut timer = BurstTimer::new(100.0);
        timer.start();

        let mut fires = 0;
        for _ in 0..35 {
            fires += timer.tick(10.0);
        }
        assert_eq!(fires, 3);
        assert_eq!(timer.fired(), 3);
    }

    #[test]
    fn test_long_frame_coalesces() {
        let mut timer = BurstTimer::new(100.0);
        timer.start();
        assert_eq!(timer.tick(350.0), 1);
        // Next fire is at 400, not 200
        assert_eq!(timer.tick(40.0), 0);
        assert_eq!(timer.tick(10.0), 1);
    }

    #[test]
    fn test_cancel_and_restart() {
        let mut timer = BurstTimer::new(100.0);
        timer.start();
        assert_eq!(timer.tick(100.0), 1);

        timer.cancel();
        assert!(!timer.is_running());
        assert_eq!(timer.tick(500.0), 0);
        assert_eq!(timer.fired(), 1);

        timer.start();
        assert_eq!(timer.fired(), 0);
        assert_eq!(timer.tick(50.0), 0);
        assert_eq!(timer.tick(50.0), 1);
    }

    #[test]
    fn test_invalid_interval_is_clamped() {
        assert_eq!(BurstTimer::new(0.0).interval_ms(), 1.0);
        assert_eq!(BurstTimer::new(-5.0).interval_ms(), 1.0);
    }
}
