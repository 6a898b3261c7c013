//! Per-cycle frame timing.

use std::time::{Duration, Instant};

/// Timing of the most recent draw cycle.
///
/// Overwritten once per cycle; no history is retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerStats {
    /// Wall-clock time of the engine/buffer-acquisition step.
    pub engine: Duration,
    /// Wall-clock time of the entire draw cycle.
    pub draw: Duration,
}

/// Records per-cycle timing and a measured frame rate.
///
/// Timing is best-effort diagnostic data: the harness records the last
/// cycle's engine and draw durations and samples the achieved frame rate
/// once per second.
#[derive(Debug)]
pub struct FrameTimer {
    stats: TimerStats,
    frame_count: u64,
    sample_start: Instant,
    current_fps: f32,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Creates a timer with zeroed stats.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stats: TimerStats::default(),
            frame_count: 0,
            sample_start: Instant::now(),
            current_fps: 0.0,
        }
    }

    /// Returns a snapshot of the most recent cycle's timings.
    #[inline]
    pub fn stats(&self) -> TimerStats {
        self.stats
    }

    /// Returns the measured frame rate over the last sample window.
    ///
    /// Zero until the first one-second window completes.
    #[inline]
    pub fn frame_rate(&self) -> f32 {
        self.current_fps
    }

    /// Counts one completed frame toward the rate sample.
    pub fn tick(&mut self) {
        self.frame_count += 1;

        let sample_elapsed = self.sample_start.elapsed();
        if sample_elapsed >= Duration::from_secs(1) {
            self.current_fps = self.frame_count as f32 / sample_elapsed.as_secs_f32();
            self.frame_count = 0;
            self.sample_start = Instant::now();
        }
    }

    /// Overwrites the previous cycle's timings.
    pub fn record(&mut self, engine: Duration, draw: Duration) {
        self.stats = TimerStats { engine, draw };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_overwrites() {
        let mut timer = FrameTimer::new();
        timer.record(Duration::from_millis(2), Duration::from_millis(5));
        timer.record(Duration::from_millis(3), Duration::from_millis(7));

        let stats = timer.stats();
        assert_eq!(stats.engine, Duration::from_millis(3));
        assert_eq!(stats.draw, Duration::from_millis(7));
    }

    #[test]
    fn test_frame_rate_starts_at_zero() {
        let timer = FrameTimer::new();
        assert_eq!(timer.frame_rate(), 0.0);
    }

    #[test]
    fn test_tick_before_sample_window_keeps_zero() {
        let mut timer = FrameTimer::new();
        timer.tick();
        timer.tick();
        // Sample window is one second; a few immediate ticks don't close it.
        assert_eq!(timer.frame_rate(), 0.0);
    }
}
