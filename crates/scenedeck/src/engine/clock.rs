use std::time::{Duration, Instant};

/// Refresh rate that one frame-equivalent unit of delta corresponds to.
pub const REFERENCE_FPS: f32 = 60.0;

pub const DEFAULT_SPEED: f32 = 1.0;
/// Largest delta a single tick may report, i.e. a 10 fps floor.
pub const DEFAULT_MAX_DELTA: f32 = 6.0;

/// One invocation of the shared clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Time since the previous tick in frame-equivalent units (1.0 == one frame at 60 fps).
    pub delta: f32,
    /// Wall time since the previous tick. Only used for chrome timers, never for fades.
    pub elapsed: Duration,
}

impl Tick {
    /// A tick of `frames` frame-equivalents with the matching wall time.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn frames(frames: f32) -> Self {
        let frames = frames.max(0.0);
        Self {
            delta: frames,
            elapsed: Duration::from_secs_f32(frames / REFERENCE_FPS),
        }
    }
}

/// Frame-based ticking source shared by the whole presentation.
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Option<Instant>,
    speed: f32,
    max_delta: f32,
}

impl FrameClock {
    /// A zero, negative or non-finite `speed` or `max_delta` would stop every
    /// fade short of its budget, so those fall back to the defaults.
    pub fn new(speed: f32, max_delta: f32) -> Self {
        let positive_or = |v: f32, default: f32| {
            if v.is_finite() && v > 0.0 { v } else { default }
        };
        Self {
            last_tick: None,
            speed: positive_or(speed, DEFAULT_SPEED),
            max_delta: positive_or(max_delta, DEFAULT_MAX_DELTA),
        }
    }

    /// Sample the clock. The first sample yields a zero delta.
    pub fn tick(&mut self, now: Instant) -> Tick {
        let elapsed = match self.last_tick {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last_tick = Some(now);

        let delta = (elapsed.as_secs_f32() * REFERENCE_FPS * self.speed).min(self.max_delta);
        Tick { delta, elapsed }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED, DEFAULT_MAX_DELTA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_has_zero_delta() {
        let mut clock = FrameClock::default();
        let tick = clock.tick(Instant::now());
        assert_eq!(tick.delta, 0.0);
    }

    #[test]
    fn delta_is_measured_in_reference_frames() {
        let start = Instant::now();
        let mut clock = FrameClock::default();
        clock.tick(start);
        let tick = clock.tick(start + Duration::from_millis(50));
        assert!((tick.delta - 3.0).abs() < 1e-3);
        assert_eq!(tick.elapsed, Duration::from_millis(50));
    }

    #[test]
    fn delta_is_capped() {
        let start = Instant::now();
        let mut clock = FrameClock::new(1.0, 6.0);
        clock.tick(start);
        let tick = clock.tick(start + Duration::from_secs(2));
        assert_eq!(tick.delta, 6.0);
    }

    #[test]
    fn speed_scales_delta() {
        let start = Instant::now();
        let mut clock = FrameClock::new(0.5, 6.0);
        clock.tick(start);
        let tick = clock.tick(start + Duration::from_millis(100));
        assert!((tick.delta - 3.0).abs() < 1e-3);
    }

    #[test]
    fn stalling_settings_fall_back_to_defaults() {
        let start = Instant::now();
        for (speed, max_delta) in [(0.0, 0.0), (-1.0, -3.0), (f32::NAN, f32::INFINITY)] {
            let mut clock = FrameClock::new(speed, max_delta);
            clock.tick(start);
            let tick = clock.tick(start + Duration::from_secs(1));
            assert_eq!(tick.delta, DEFAULT_MAX_DELTA, "{speed} / {max_delta}");
        }
    }

    #[test]
    fn synthetic_tick_matches_wall_time() {
        let tick = Tick::frames(6.0);
        assert_eq!(tick.delta, 6.0);
        assert!((tick.elapsed.as_secs_f32() - 0.1).abs() < 1e-4);
    }
}
