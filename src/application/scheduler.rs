use std::time::Duration;

/// Repeating timer driven by frame time.
/// At most one tick fires per `advance`, and the accumulator restarts
/// after each one, so ticks never pile up behind a slow frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TickScheduler {
    interval: f32,
    elapsed: f32,
    active: bool,
}

impl TickScheduler {
    /// Create a stopped scheduler
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f32(),
            elapsed: 0.0,
            active: false,
        }
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    /// Stop firing and drop any partially elapsed interval
    pub fn cancel(&mut self) {
        self.active = false;
        self.elapsed = 0.0;
    }

    /// Cancel then start again, so the next tick is a full interval away
    pub fn restart(&mut self) {
        self.cancel();
        self.start();
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Feed frame time in seconds; returns true when a tick is due
    pub fn advance(&mut self, delta_time: f32) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed += delta_time.max(0.0);
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> TickScheduler {
        TickScheduler::new(Duration::from_millis(100))
    }

    #[test]
    fn test_inactive_never_fires() {
        let mut s = scheduler();
        assert!(!s.advance(1.0));
    }

    #[test]
    fn test_fires_after_interval() {
        let mut s = scheduler();
        s.start();
        assert!(!s.advance(0.06));
        assert!(s.advance(0.06));
        assert!(!s.advance(0.01));
    }

    #[test]
    fn test_long_frame_fires_once() {
        let mut s = scheduler();
        s.start();
        assert!(s.advance(5.0));
        assert!(!s.advance(0.0));
    }

    #[test]
    fn test_restart_drops_partial_interval() {
        let mut s = scheduler();
        s.start();
        assert!(!s.advance(0.09));
        s.restart();
        assert!(s.is_active());
        assert!(!s.advance(0.05));
    }

    #[test]
    fn test_cancel_stops() {
        let mut s = scheduler();
        s.start();
        s.cancel();
        assert!(!s.is_active());
        assert!(!s.advance(1.0));
    }
}
