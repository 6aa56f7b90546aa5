//! Frame rate sampling
//!
//! Diagnostic only; nothing here feeds back into the simulation.

use crate::consts::FPS_WINDOW;

/// Tracks frame timestamps (milliseconds) and derives FPS from them
#[derive(Debug, Clone)]
pub struct FpsCounter {
    last_time: Option<f64>,
    fps: f64,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    recorded: usize,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            last_time: None,
            fps: 0.0,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            recorded: 0,
        }
    }

    /// Record a frame at `now_ms` and return the instantaneous FPS
    ///
    /// The first sample only records the time and reports 0.
    pub fn sample(&mut self, now_ms: f64) -> f64 {
        if let Some(last) = self.last_time {
            let delta_secs = (now_ms - last) / 1000.0;
            if delta_secs > 0.0 {
                self.fps = 1.0 / delta_secs;
            }
        } else {
            self.fps = 0.0;
        }
        self.last_time = Some(now_ms);

        self.frame_times[self.frame_index] = now_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.recorded = (self.recorded + 1).min(FPS_WINDOW);

        self.fps
    }

    /// Last instantaneous FPS
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Instantaneous FPS rounded down for the HUD
    pub fn display(&self) -> u32 {
        self.fps.floor() as u32
    }

    /// Value for the HUD: the smoothed average once the window is full,
    /// the instantaneous reading before that, rounded down
    pub fn hud_value(&self) -> u32 {
        self.smoothed().unwrap_or(self.fps).floor() as u32
    }

    /// Average FPS over the last `FPS_WINDOW` frames, once the window is full
    pub fn smoothed(&self) -> Option<f64> {
        if self.recorded < FPS_WINDOW {
            return None;
        }
        // frame_index now points at the oldest entry
        let oldest = self.frame_times[self.frame_index];
        let newest = self.frame_times[(self.frame_index + FPS_WINDOW - 1) % FPS_WINDOW];
        let elapsed = newest - oldest;
        (elapsed > 0.0).then(|| (FPS_WINDOW - 1) as f64 * 1000.0 / elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_reports_zero() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.sample(1234.0), 0.0);
        assert_eq!(fps.display(), 0);
    }

    #[test]
    fn test_instantaneous_fps() {
        let mut fps = FpsCounter::new();
        fps.sample(1000.0);
        let value = fps.sample(1020.0);
        assert!((value - 50.0).abs() < 1e-9);

        fps.sample(1036.0);
        assert!((fps.fps() - 62.5).abs() < 1e-9);
        assert_eq!(fps.display(), 62);
    }

    #[test]
    fn test_duplicate_timestamp_keeps_previous_value() {
        let mut fps = FpsCounter::new();
        fps.sample(0.0);
        fps.sample(10.0);
        assert!((fps.sample(10.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_smoothed_needs_full_window() {
        let mut fps = FpsCounter::new();
        for i in 0..FPS_WINDOW - 1 {
            fps.sample(i as f64 * 20.0);
        }
        assert_eq!(fps.smoothed(), None);

        fps.sample((FPS_WINDOW - 1) as f64 * 20.0);
        let smoothed = fps.smoothed().expect("window full");
        assert!((smoothed - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_hud_value_switches_to_smoothed() {
        let mut fps = FpsCounter::new();
        fps.sample(0.0);
        fps.sample(25.0);
        // Window not full yet: instantaneous 40
        assert_eq!(fps.hud_value(), 40);

        // Fill the window at 100 Hz, then one slow frame
        let mut t = 25.0;
        for _ in 0..FPS_WINDOW - 2 {
            t += 10.0;
            fps.sample(t);
        }
        t += 50.0;
        fps.sample(t);
        assert!((fps.fps() - 20.0).abs() < 1e-9);
        let smoothed = fps.smoothed().expect("window full");
        assert_eq!(fps.hud_value(), smoothed.floor() as u32);
        assert!(fps.hud_value() > 20);
    }

    #[test]
    fn test_smoothed_rolls_forward() {
        let mut fps = FpsCounter::new();
        // A slow start, then steady 100 Hz frames
        fps.sample(0.0);
        fps.sample(500.0);
        let mut t = 500.0;
        for _ in 0..FPS_WINDOW {
            t += 10.0;
            fps.sample(t);
        }
        let smoothed = fps.smoothed().expect("window full");
        assert!((smoothed - 100.0).abs() < 1e-9);
    }
}
