//! Miscellaneous helper types around controlling the timing of the main loop.

use std::time::Duration;

#[cfg(test)]
use mock_instant::Instant;
#[cfg(not(test))]
use std::time::Instant;

/// Keeps track of time between relatively steady pulses.
///
/// Ticks try to stay lined up with the original tick, but if [`Self::tick`] is called more than half a period
/// delayed, the next tick will be reset relative to the current time instead. If called early it will always advance
/// by exactly one tick.
pub struct Timer {
    next: Instant,
    period: Duration,
}

impl Timer {
    /// Create a new timer with the given period, in seconds. The first tick is right now.
    pub fn new(period: f32) -> Self {
        Self {
            next: Instant::now(),
            period: Duration::from_secs_f32(period),
        }
    }

    /// How much time is left before the timer ticks over. Minimum 0.0.
    pub fn remaining(&self) -> Duration {
        self.next
            .checked_duration_since(Instant::now())
            .unwrap_or(Duration::ZERO)
    }

    /// Reset the timer
    pub fn tick(&mut self) {
        let now = Instant::now();
        if now < self.next + self.period / 2 {
            self.next += self.period;
        } else {
            self.next = now + self.period;
        }
    }

}

#[cfg(test)]
mod timer_test {
    use std::time::Duration;

    use mock_instant::MockClock;

    use super::Timer;

    #[test]
    fn starts_with_nothing_remaining() {
        let timer = Timer::new(1.0);
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn tick_pushes_the_next_pulse_out() {
        let mut timer = Timer::new(1.0);
        timer.tick();
        assert_eq!(timer.remaining(), Duration::from_secs(1));
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let mut timer = Timer::new(1.0);
        timer.tick();
        MockClock::advance(Duration::from_millis(600));
        assert_eq!(timer.remaining(), Duration::from_millis(400));
        MockClock::advance(Duration::from_millis(600));
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn late_ticks_resync_to_now() {
        let mut timer = Timer::new(1.0);
        timer.tick();
        // miss the pulse by well over half a period
        MockClock::advance(Duration::from_secs(5));
        timer.tick();
        assert_eq!(timer.remaining(), Duration::from_secs(1));
    }
}
