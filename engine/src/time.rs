use std::time::{Duration, Instant};

/// Frame delta and best-effort frame pacing.
///
/// There is no catch-up: a slow frame simply yields a larger delta on the next one.
#[derive(Debug)]
pub struct FrameClock {
    target_frame_time: Duration,
    frame_start: Instant,
    delta: f32,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            target_frame_time: Duration::from_secs_f32(1.0 / target_fps.max(1) as f32),
            frame_start: Instant::now(),
            delta: 0.0,
        }
    }

    /// Restarts timing from now, so the next frame's delta does not include setup work.
    pub fn reset(&mut self) {
        self.frame_start = Instant::now();
        self.delta = 0.0;
    }

    /// Starts a new frame at `now`, returning the seconds elapsed since the previous one began.
    pub fn begin_frame_at(&mut self, now: Instant) -> f32 {
        self.delta = now.saturating_duration_since(self.frame_start).as_secs_f32();
        self.frame_start = now;
        self.delta
    }

    pub fn begin_frame(&mut self) -> f32 {
        self.begin_frame_at(Instant::now())
    }

    /// Seconds between the start of the previous frame and the start of this one.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn target_frame_time(&self) -> Duration {
        self.target_frame_time
    }

    /// How long to sleep at `now` to fill the current frame up to the target, if at all.
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(self.frame_start);
        self.target_frame_time.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Sleeps away whatever is left of the current frame.
    pub fn pace(&self) {
        if let Some(remaining) = self.remaining_at(Instant::now()) {
            std::thread::sleep(remaining);
        }
    }
}

#[cfg(test)]
mod test {
    use super::FrameClock;
    use std::time::{Duration, Instant};

    #[test]
    fn test_delta_is_time_between_frame_starts() {
        let mut clock = FrameClock::new(60);
        let start = Instant::now();
        clock.begin_frame_at(start);

        let delta = clock.begin_frame_at(start + Duration::from_millis(250));
        assert!((delta - 0.25).abs() < 1e-6);
        assert_eq!(clock.delta(), delta);
    }

    #[test]
    fn test_reset_excludes_setup_time() {
        let mut clock = FrameClock::new(60);
        std::thread::sleep(Duration::from_millis(200));

        clock.reset();
        assert_eq!(clock.delta(), 0.0);
        assert!(clock.begin_frame() < 0.1);
    }

    #[test]
    fn test_fast_frame_sleeps_for_the_remainder() {
        let mut clock = FrameClock::new(50);
        let start = Instant::now();
        clock.begin_frame_at(start);

        let remaining = clock.remaining_at(start + Duration::from_millis(5)).unwrap();
        let expected = clock.target_frame_time() - Duration::from_millis(5);
        assert_eq!(remaining, expected);
    }

    #[test]
    fn test_slow_frame_does_not_sleep() {
        let mut clock = FrameClock::new(60);
        let start = Instant::now();
        clock.begin_frame_at(start);

        assert_eq!(clock.remaining_at(start + Duration::from_millis(40)), None);
    }
}
