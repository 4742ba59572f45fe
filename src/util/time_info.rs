use std::time::Instant;

/// Per-frame timing: the elapsed time handed to the camera and a smoothed FPS
/// for display.
pub struct TimeInfo {
    time: Instant,
    dt: f32,
    display_update_interval: f32, // in seconds
    accumulator: f32,
    frame_count: u32,
    display_fps_value: f32,
}

impl Default for TimeInfo {
    fn default() -> Self {
        Self::new(500)
    }
}

impl TimeInfo {
    /// Creates a new TimeInfo with a specified display FPS update interval in milliseconds.
    pub fn new(display_interval_ms: u64) -> Self {
        Self {
            time: Instant::now(),
            dt: 0.0,
            display_update_interval: display_interval_ms as f32 / 1000.0,
            accumulator: 0.0,
            frame_count: 0,
            display_fps_value: 0.0,
        }
    }

    /// Measures the time since the previous call and records it as this
    /// frame's delta time.
    pub fn update(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.time).as_secs_f32();
        self.time = now;
        self.advance(dt);
    }

    /// Records a frame that took `dt` seconds.
    ///
    /// Frames are accumulated until the display interval is reached, then the
    /// display FPS is refreshed with the average over that interval.
    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.accumulator += dt;
        self.frame_count += 1;

        if self.accumulator >= self.display_update_interval {
            self.display_fps_value = self.frame_count as f32 / self.accumulator;
            self.accumulator = 0.0;
            self.frame_count = 0;
        }
    }

    /// Returns the delta time (dt) of the last frame.
    pub fn delta_time(&self) -> f32 {
        self.dt
    }

    /// Returns the FPS calculated for display, which is updated
    /// every x milliseconds (as set in the constructor).
    pub fn display_fps(&self) -> f32 {
        self.display_fps_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_fps_refreshes_after_interval() {
        let mut time_info = TimeInfo::new(500);
        for _ in 0..4 {
            time_info.advance(0.1);
        }
        assert_eq!(time_info.display_fps(), 0.0);
        assert_eq!(time_info.delta_time(), 0.1);

        time_info.advance(0.1);
        assert!((time_info.display_fps() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_update_measures_non_negative_dt() {
        let mut time_info = TimeInfo::default();
        time_info.update();
        assert!(time_info.delta_time() >= 0.0);
    }
}
