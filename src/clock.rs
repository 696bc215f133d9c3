//! Fixed-timestep game clock.
//!
//! The host calls in at whatever cadence it likes (a browser frame callback,
//! a timer, a test loop) with wall-clock millisecond timestamps. The clock
//! converts those into a whole number of discrete ticks, carrying sub-tick
//! remainders forward by advancing its reference time in whole-tick steps
//! rather than snapping to `now` — snapping would silently drop the
//! fractional leftover every frame and under-count ticks over a session.

/// Game ticks per real-time second.
pub const TICKS_PER_SECOND: u32 = 10;

/// Ticks in one minute, the base unit for throughput display.
pub const TICKS_PER_MINUTE: u32 = 60 * TICKS_PER_SECOND;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ClockState {
    Stopped,
    Running { last_tick_ms: f64 },
}

/// Stopped/running tick scheduler over host-supplied timestamps.
#[derive(Clone, Debug)]
pub struct GameClock {
    /// Milliseconds per tick (e.g. 100ms = 10 ticks/sec).
    tick_ms: f64,
    state: ClockState,
}

impl GameClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            tick_ms: 1000.0 / f64::from(ticks_per_sec),
            state: ClockState::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ClockState::Running { .. })
    }

    /// Begin (or resume) ticking from `now_ms`. Elapsed time while stopped
    /// is discarded: there is no offline accrual. No-op if already running.
    pub fn start(&mut self, now_ms: f64) {
        if !self.is_running() {
            self.state = ClockState::Running { last_tick_ms: now_ms };
        }
    }

    /// Stop ticking. Frames arriving while stopped yield zero ticks.
    pub fn stop(&mut self) {
        self.state = ClockState::Stopped;
    }

    /// Feed a wall-clock timestamp; returns the number of whole ticks to
    /// process. Timestamps that run backwards (clock regression) and frames
    /// shorter than one tick both return 0 without mutating the reference.
    pub fn on_frame(&mut self, now_ms: f64) -> u64 {
        let last = match self.state {
            ClockState::Running { last_tick_ms } => last_tick_ms,
            ClockState::Stopped => return 0,
        };
        let elapsed = now_ms - last;
        if elapsed < self.tick_ms {
            return 0;
        }
        let ticks = (elapsed / self.tick_ms).floor() as u64;
        self.state = ClockState::Running {
            last_tick_ms: last + ticks as f64 * self.tick_ms,
        };
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_clock_yields_no_ticks() {
        let mut clock = GameClock::new(10);
        assert_eq!(clock.on_frame(1000.0), 0);
        assert!(!clock.is_running());
    }

    #[test]
    fn one_tick_at_100ms() {
        let mut clock = GameClock::new(10); // 100ms per tick
        clock.start(0.0);
        assert_eq!(clock.on_frame(100.0), 1);
    }

    #[test]
    fn multiple_ticks_in_one_frame() {
        let mut clock = GameClock::new(10);
        clock.start(0.0);
        assert_eq!(clock.on_frame(350.0), 3); // 3 ticks + 50ms remainder
    }

    #[test]
    fn remainder_carried_over() {
        let mut clock = GameClock::new(10);
        clock.start(0.0);
        assert_eq!(clock.on_frame(150.0), 1); // 50ms left over
        assert_eq!(clock.on_frame(200.0), 1); // 50ms + 50ms = 1 more tick
    }

    #[test]
    fn sub_tick_frames_accumulate() {
        let mut clock = GameClock::new(10); // 100ms/tick
        clock.start(0.0);
        for ms in [16.0, 32.0, 48.0, 64.0, 80.0, 96.0] {
            assert_eq!(clock.on_frame(ms), 0);
        }
        assert_eq!(clock.on_frame(112.0), 1);
    }

    #[test]
    fn clock_regression_is_a_noop() {
        let mut clock = GameClock::new(10);
        clock.start(1000.0);
        assert_eq!(clock.on_frame(500.0), 0);
        // Reference time unchanged: the next forward frame still measures
        // from 1000.
        assert_eq!(clock.on_frame(1100.0), 1);
    }

    #[test]
    fn stop_and_resume_discards_offline_time() {
        let mut clock = GameClock::new(10);
        clock.start(0.0);
        clock.on_frame(500.0);
        clock.stop();
        assert_eq!(clock.on_frame(5000.0), 0);
        // Resuming ten minutes later grants nothing for the gap.
        clock.start(600_000.0);
        assert_eq!(clock.on_frame(600_050.0), 0);
        assert_eq!(clock.on_frame(600_100.0), 1);
    }

    #[test]
    fn start_while_running_keeps_reference() {
        let mut clock = GameClock::new(10);
        clock.start(0.0);
        clock.start(5000.0); // ignored
        assert_eq!(clock.on_frame(100.0), 1);
    }

    #[test]
    fn steady_60fps_yields_ten_ticks_per_second() {
        let mut clock = GameClock::new(10);
        clock.start(0.0);
        let mut total = 0u64;
        for i in 1..=60 {
            total += clock.on_frame(f64::from(i) * 16.667);
        }
        assert!((9..=11).contains(&total), "expected ~10 ticks, got {total}");
    }
}
