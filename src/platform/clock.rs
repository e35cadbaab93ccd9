//! Frame timing
//!
//! Frames are not paced: each frame's `dt` is whatever wall-clock time passed
//! since the previous one.

use std::time::Instant;

/// Measures elapsed time between frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or since construction)
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Like [`FrameClock::tick`] with an explicit timestamp. A timestamp
    /// earlier than the previous one yields zero.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed.as_secs_f32()
    }

    /// Start measuring from now, discarding time spent elsewhere
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_tick_at_measures_gap() {
        let start = Instant::now();
        let mut clock = FrameClock { last: start };

        let dt = clock.tick_at(start + Duration::from_millis(25));
        assert!((dt - 0.025).abs() < 1e-6);

        let dt = clock.tick_at(start + Duration::from_millis(125));
        assert!((dt - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_tick_at_never_negative() {
        let start = Instant::now();
        let mut clock = FrameClock {
            last: start + Duration::from_millis(10),
        };
        assert_eq!(clock.tick_at(start), 0.0);
    }

    #[test]
    fn test_tick_is_non_negative() {
        let mut clock = FrameClock::new();
        assert!(clock.tick() >= 0.0);
    }
}
