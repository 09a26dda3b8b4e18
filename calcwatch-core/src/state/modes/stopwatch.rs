//! Stopwatch mode
//!
//! Times are tick counter snapshots. Resuming moves the start snapshot
//! forward so elapsed time continues where it stopped; a held split
//! moves with it.

use crate::time::{duration_breakdown, Duration};

/// Stopwatch mode state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StopwatchState {
    pub running: bool,
    /// A split time is frozen on the display
    pub split_held: bool,
    pub start: u32,
    pub stop: u32,
    pub split: u32,
}

impl StopwatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split/reset button
    ///
    /// Returns whether the press deserves a click.
    pub fn split_pressed(&mut self, ticks: u32) -> bool {
        if self.split_held {
            self.split_held = false;
            return false;
        }
        if self.running {
            self.split = ticks;
            self.split_held = true;
        } else {
            self.start = 0;
            self.stop = 0;
        }
        true
    }

    /// Start/stop button
    pub fn start_stop_pressed(&mut self, ticks: u32) {
        if self.running {
            self.stop = ticks;
            self.running = false;
            return;
        }

        let elapsed = self.stop.wrapping_sub(self.start);
        let split_offset = self.split.wrapping_sub(self.start);
        self.start = ticks.wrapping_sub(elapsed);
        self.running = true;
        if self.split_held {
            self.split = self.start.wrapping_add(split_offset);
        }
    }

    /// Ticks on the clock, ignoring any held split
    pub fn elapsed(&self, ticks: u32) -> u32 {
        if self.running {
            ticks.wrapping_sub(self.start)
        } else {
            self.stop.wrapping_sub(self.start)
        }
    }

    /// Ticks to show: the held split, else the running time
    pub fn shown(&self, ticks: u32) -> u32 {
        if self.split_held {
            self.split.wrapping_sub(self.start)
        } else {
            self.elapsed(ticks)
        }
    }

    pub fn shown_duration(&self, ticks: u32) -> Duration {
        duration_breakdown(self.shown(ticks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario() {
        let mut sw = StopwatchState::new();

        sw.start_stop_pressed(0);
        assert!(sw.running);
        assert_eq!(sw.start, 0);

        assert!(sw.split_pressed(550));
        assert_eq!(sw.split, 550);
        assert!(sw.split_held);

        sw.start_stop_pressed(1000);
        assert!(!sw.running);
        assert_eq!(sw.stop, 1000);

        let elapsed = duration_breakdown(sw.elapsed(5000));
        assert_eq!((elapsed.seconds, elapsed.hundredths), (10, 0));
        assert_eq!(sw.shown(5000), 550);
    }

    #[test]
    fn test_resume_is_continuous() {
        let mut sw = StopwatchState::new();
        sw.start_stop_pressed(100);
        sw.start_stop_pressed(400);
        assert_eq!(sw.elapsed(10_000), 300);

        sw.start_stop_pressed(1000);
        assert_eq!(sw.start, 700);
        assert_eq!(sw.elapsed(1000), 300);
        assert_eq!(sw.elapsed(1250), 550);
    }

    #[test]
    fn test_held_split_shifts_on_resume() {
        let mut sw = StopwatchState::new();
        sw.start_stop_pressed(0);
        sw.split_pressed(200);
        sw.start_stop_pressed(500);
        sw.start_stop_pressed(2000);

        assert_eq!(sw.start, 1500);
        assert_eq!(sw.split, 1700);
        assert_eq!(sw.shown(3000), 200);
    }

    #[test]
    fn test_split_release_is_silent() {
        let mut sw = StopwatchState::new();
        sw.start_stop_pressed(0);
        assert!(sw.split_pressed(10));
        assert!(!sw.split_pressed(20));
        assert!(!sw.split_held);
        assert_eq!(sw.shown(30), 30);
    }

    #[test]
    fn test_split_while_stopped_resets() {
        let mut sw = StopwatchState::new();
        sw.start_stop_pressed(50);
        sw.start_stop_pressed(80);
        assert!(sw.split_pressed(90));
        assert_eq!((sw.start, sw.stop), (0, 0));
        assert_eq!(sw.elapsed(100), 0);
    }

    #[test]
    fn test_tick_counter_wrap() {
        let mut sw = StopwatchState::new();
        sw.start_stop_pressed(u32::MAX - 9);
        assert_eq!(sw.elapsed(20), 30);
    }
}
