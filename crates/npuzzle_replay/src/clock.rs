use web_time::{Duration, Instant};

const ASSUMED_FPS: f32 = 60.0;

/// Measures the time between frames.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    /// Time of last frame, or `None` if the previous frame did not animate.
    last_frame_time: Option<Instant>,
}
impl FrameClock {
    /// Constructs a clock with no previous frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the time since the last call to `tick()`, or a nominal frame
    /// duration on the first call after [`FrameClock::pause()`].
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let delta = match self.last_frame_time {
            Some(then) => now - then,
            None => Duration::from_secs_f32(1.0 / ASSUMED_FPS),
        };
        self.last_frame_time = Some(now);
        delta
    }

    /// Forgets the last frame time, so that idle time is not counted.
    pub fn pause(&mut self) {
        self.last_frame_time = None;
    }
}
