//! Frame-driven repeating timer for autoplay.

/// Repeating interval driven by frame deltas.
///
/// A timer exists only while autoplay is armed; pausing drops it and
/// resuming creates a fresh one, so a resumed carousel always waits a full
/// interval before the next tick.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTimer {
    interval_ms: f32,
    elapsed_ms: f32,
}

impl IntervalTimer {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Advance time and return how many intervals elapsed, saturating at
    /// `u32::MAX`.
    pub fn advance(&mut self, delta_ms: f32) -> u32 {
        if self.interval_ms <= 0.0 || !delta_ms.is_finite() || delta_ms <= 0.0 {
            return 0;
        }
        let total = self.elapsed_ms + delta_ms;
        if total < self.interval_ms {
            self.elapsed_ms = total;
            return 0;
        }
        // Float-to-int casts saturate.
        let fired = (total / self.interval_ms).floor() as u32;
        self.elapsed_ms = total % self.interval_ms;
        fired.max(1)
    }

    pub fn interval_ms(&self) -> f32 {
        self.interval_ms
    }

    /// Time left until the next tick.
    pub fn remaining_ms(&self) -> f32 {
        (self.interval_ms - self.elapsed_ms).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_interval() {
        let mut timer = IntervalTimer::new(3000.0);
        assert_eq!(timer.advance(2999.0), 0);
        assert_eq!(timer.advance(1.0), 1);
        assert_eq!(timer.remaining_ms(), 3000.0);
    }

    #[test]
    fn test_large_delta_fires_multiple() {
        let mut timer = IntervalTimer::new(1000.0);
        assert_eq!(timer.advance(3500.0), 3);
        assert_eq!(timer.remaining_ms(), 500.0);
    }

    #[test]
    fn test_huge_delta_returns_promptly() {
        let mut timer = IntervalTimer::new(1.0);
        assert_eq!(timer.advance(1.0e9), 1_000_000_000);
        assert!(timer.remaining_ms() > 0.0 && timer.remaining_ms() <= 1.0);

        let mut timer = IntervalTimer::new(1.0e-6);
        assert_eq!(timer.advance(f32::MAX), u32::MAX);
    }

    #[test]
    fn test_ignores_bad_deltas() {
        let mut timer = IntervalTimer::new(1000.0);
        assert_eq!(timer.advance(-5.0), 0);
        assert_eq!(timer.advance(f32::NAN), 0);
        assert_eq!(timer.remaining_ms(), 1000.0);
    }
}
