//! Elapsed-time display.

use std::time::Duration;

/// Stopwatch shown in the header.
///
/// Runs from the first card flip until the game is won.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameClock {
    elapsed: Duration,
    running: bool,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Back to zero, stopped.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add time if running. Saturates instead of wrapping.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.running {
            self.elapsed = self.elapsed.saturating_add(elapsed);
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// `HH:MM:SS`. Hours keep counting past 99.
    #[must_use]
    pub fn display(&self) -> String {
        let secs = self.elapsed.as_secs();
        format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_ticks_while_running() {
        let mut clock = GameClock::new();
        clock.tick(Duration::from_secs(5));
        assert_eq!(clock.elapsed(), Duration::ZERO);

        clock.start();
        clock.tick(Duration::from_secs(5));
        clock.stop();
        clock.tick(Duration::from_secs(5));
        assert_eq!(clock.elapsed(), Duration::from_secs(5));
    }

    #[test]
    fn test_display() {
        let mut clock = GameClock::new();
        assert_eq!(clock.display(), "00:00:00");

        clock.start();
        clock.tick(Duration::from_millis(3_723_900));
        assert_eq!(clock.display(), "01:02:03");
    }

    #[test]
    fn test_tick_saturates() {
        let mut clock = GameClock::new();
        clock.start();
        clock.tick(Duration::MAX);
        clock.tick(Duration::from_secs(1));
        assert_eq!(clock.elapsed(), Duration::MAX);
    }

    #[test]
    fn test_reset() {
        let mut clock = GameClock::new();
        clock.start();
        clock.tick(Duration::from_secs(42));
        clock.reset();

        assert!(!clock.is_running());
        assert_eq!(clock.display(), "00:00:00");
    }
}
