//! Frame pacing and the per-frame simulation step.

use web_time::{Duration, Instant};

/// Longest frame delta handed to the simulation, in seconds.
///
/// A stalled event loop (window drag, debugger pause) would otherwise feed
/// one huge step into the collision world.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Frame timing with FPS calculation and optional frame limiting.
///
/// Also the source of the simulation `dt`: [`end_frame`](Self::end_frame)
/// returns the seconds elapsed since the previous frame.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    // 5% new value, 95% old value
        }
    }

    /// Call at the start of each frame. Returns true if enough time has passed
    /// to render.
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Call once per frame. Updates the FPS estimate and returns the
    /// simulation step in seconds, capped at [`MAX_FRAME_DT`].
    pub fn end_frame(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed.as_secs_f32())
    }

    fn record(&mut self, frame_time: f32) -> f32 {
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time.clamp(0.0, MAX_FRAME_DT)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
