use super::constants::{
    AUTO_ROTATE_AMPLITUDE, AUTO_ROTATE_CENTER, AUTO_ROTATE_FREQ_X, AUTO_ROTATE_FREQ_Y,
    AUTO_ROTATE_IDLE_MS,
};
use glam::Vec2;

/// Normalized pointer position plus the wall time of the last real interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub last_interaction_ms: Option<f64>,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vec2::splat(0.5),
            last_interaction_ms: None,
        }
    }
}

impl PointerState {
    /// Record a pointer/touch position given in canvas CSS pixels.
    pub fn record(&mut self, x: f32, y: f32, width: f32, height: f32, at_ms: f64) {
        self.position = normalize_to_canvas(x, y, width, height);
        self.last_interaction_ms = Some(at_ms);
    }

    /// A gesture ended; the idle countdown restarts from here.
    pub fn release(&mut self, at_ms: f64) {
        if self.last_interaction_ms.is_some() {
            self.last_interaction_ms = Some(at_ms);
        }
    }

    #[inline]
    pub fn auto_rotate_armed(&self, now_ms: f64) -> bool {
        match self.last_interaction_ms {
            None => true,
            Some(t) => now_ms - t > AUTO_ROTATE_IDLE_MS,
        }
    }

    /// Replace the position with the auto-rotate path when no one is steering.
    pub fn update_auto_rotate(&mut self, sim_time: f64, now_ms: f64) {
        if self.auto_rotate_armed(now_ms) {
            self.position = auto_rotate_position(sim_time);
        }
    }
}

#[inline]
pub fn auto_rotate_position(sim_time: f64) -> Vec2 {
    Vec2::new(
        AUTO_ROTATE_CENTER + AUTO_ROTATE_AMPLITUDE * (AUTO_ROTATE_FREQ_X * sim_time).sin() as f32,
        AUTO_ROTATE_CENTER + AUTO_ROTATE_AMPLITUDE * (AUTO_ROTATE_FREQ_Y * sim_time).cos() as f32,
    )
}

/// Map canvas pixels to [0, 1]; degenerate or non-finite input falls back to the centre.
#[inline]
pub fn normalize_to_canvas(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width > 0.0 && height > 0.0 && x.is_finite() && y.is_finite() {
        Vec2::new((x / width).clamp(0.0, 1.0), (y / height).clamp(0.0, 1.0))
    } else {
        Vec2::splat(0.5)
    }
}
