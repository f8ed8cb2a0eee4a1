use super::constants::{FPS_SAMPLE_FRAMES, SIM_STEP};

/// Result of a callback that passed the throttle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AcceptedFrame {
    pub index: u64,
    pub elapsed_ms: f64,
}

/// Target-interval throttle layered over a display-rate callback.
///
/// The marker only moves forward in whole intervals, so the fractional
/// remainder of each accepted delta carries into the next frame and the
/// long-run accepted rate converges on the target.
#[derive(Clone, Debug)]
pub struct FrameScheduler {
    interval_ms: f64,
    marker_ms: Option<f64>,
    frame_count: u64,
    observed_fps: f64,
}

impl FrameScheduler {
    pub fn new(target_fps: u32) -> Self {
        Self {
            interval_ms: 1000.0 / target_fps.max(1) as f64,
            marker_ms: None,
            frame_count: 0,
            observed_fps: target_fps as f64,
        }
    }

    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn observed_fps(&self) -> f64 {
        self.observed_fps
    }

    /// Returns `true` when the accepted frame just refreshed the fps diagnostic.
    #[inline]
    pub fn fps_sample_due(&self) -> bool {
        self.frame_count > 0 && self.frame_count % FPS_SAMPLE_FRAMES == 0
    }

    /// Feed one platform callback. The first call only establishes the baseline.
    pub fn on_callback(&mut self, now_ms: f64) -> Option<AcceptedFrame> {
        let marker = match self.marker_ms {
            Some(m) => m,
            None => {
                self.marker_ms = Some(now_ms);
                return None;
            }
        };
        let elapsed = now_ms - marker;
        if elapsed.is_nan() || elapsed < self.interval_ms {
            return None;
        }
        self.marker_ms = Some(now_ms - (elapsed % self.interval_ms));
        self.frame_count += 1;
        if self.frame_count % FPS_SAMPLE_FRAMES == 0 && elapsed > 0.0 {
            self.observed_fps = 1000.0 / elapsed;
        }
        Some(AcceptedFrame {
            index: self.frame_count,
            elapsed_ms: elapsed,
        })
    }
}

/// Constant-increment simulation clock, decoupled from wall time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimClock {
    time: f64,
}

impl SimClock {
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[inline]
    pub fn advance(&mut self) -> f64 {
        self.time += SIM_STEP;
        self.time
    }
}
