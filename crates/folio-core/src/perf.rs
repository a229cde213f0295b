//! Frame-rate sampling for the reduce-motion fallback.

/// Length of one sampling window.
pub const SAMPLE_WINDOW_MS: f64 = 1000.0;
/// Below this frame rate, decorative motion is switched off.
pub const LOW_FPS_THRESHOLD: f64 = 30.0;

/// Result of a completed sampling window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FpsSample {
    pub fps: f64,
    /// Set when this sample is the one that turned reduce-motion on.
    pub reduce_motion_engaged: bool,
}

/// Counts animation frames and flags sustained low frame rates.
///
/// Reduce-motion is sticky: once engaged it stays on for the session.
#[derive(Clone, Debug)]
pub struct FrameSampler {
    window_start: Option<f64>,
    frames: u32,
    reduce_motion: bool,
    threshold: f64,
}

impl FrameSampler {
    pub fn new(threshold: f64) -> Self {
        Self {
            window_start: None,
            frames: 0,
            reduce_motion: false,
            threshold,
        }
    }

    pub fn reduce_motion(&self) -> bool {
        self.reduce_motion
    }

    /// Forces reduce-motion on, e.g. when the OS asks for it.
    pub fn force_reduce_motion(&mut self) {
        self.reduce_motion = true;
    }

    /// Records one animation frame at `now_ms`.
    ///
    /// Returns a sample each time a full window has elapsed.
    pub fn record_frame(&mut self, now_ms: f64) -> Option<FpsSample> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now_ms);
            self.frames = 0;
            return None;
        };

        self.frames += 1;
        let elapsed = now_ms - start;
        if elapsed < SAMPLE_WINDOW_MS {
            return None;
        }

        let fps = f64::from(self.frames) * 1000.0 / elapsed;
        self.window_start = Some(now_ms);
        self.frames = 0;

        let engaged = !self.reduce_motion && fps < self.threshold;
        if engaged {
            self.reduce_motion = true;
        }

        Some(FpsSample {
            fps,
            reduce_motion_engaged: engaged,
        })
    }
}

impl Default for FrameSampler {
    fn default() -> Self {
        Self::new(LOW_FPS_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(sampler: &mut FrameSampler, frame_ms: f64, frames: usize) -> Vec<FpsSample> {
        (0..=frames)
            .filter_map(|i| sampler.record_frame(i as f64 * frame_ms))
            .collect()
    }

    #[test]
    fn test_smooth_frames_keep_motion() {
        let mut sampler = FrameSampler::default();
        let samples = run(&mut sampler, 16.0, 200);
        assert!(!samples.is_empty());
        assert!(samples.iter().all(|s| s.fps > 55.0));
        assert!(!sampler.reduce_motion());
    }

    #[test]
    fn test_slow_frames_engage_once() {
        let mut sampler = FrameSampler::default();
        let samples = run(&mut sampler, 50.0, 60);
        assert_eq!(samples.iter().filter(|s| s.reduce_motion_engaged).count(), 1);
        assert!(sampler.reduce_motion());
    }

    #[test]
    fn test_forced_reduce_motion_is_sticky() {
        let mut sampler = FrameSampler::default();
        sampler.force_reduce_motion();
        assert!(sampler.reduce_motion());

        // Slow frames afterwards never count as newly engaging it.
        let samples = run(&mut sampler, 50.0, 60);
        assert!(!samples.is_empty());
        assert!(samples.iter().all(|s| !s.reduce_motion_engaged));
        assert!(sampler.reduce_motion());
    }

    #[test]
    fn test_no_sample_before_full_window() {
        let mut sampler = FrameSampler::default();
        assert!(run(&mut sampler, 100.0, 5).is_empty());
        assert!(!sampler.reduce_motion());
    }
}
