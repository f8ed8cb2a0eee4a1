use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// CSS colour string.
#[inline]
pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> String {
    format!(
        "hsla({:.1}, {:.1}%, {:.1}%, {:.3})",
        hue.rem_euclid(360.0),
        saturation.clamp(0.0, 100.0),
        lightness.clamp(0.0, 100.0),
        alpha.clamp(0.0, 1.0)
    )
}

/// One fill style per escape count `0..max_iter`, for a single frame.
pub fn escape_palette(max_iter: u32, time: f32, alpha: f32) -> Vec<String> {
    (0..max_iter)
        .map(|n| hsla(n as f32 * 12.0 + time * 30.0, 100.0, 50.0, alpha))
        .collect()
}

/// Vertices of a regular polygon; fewer than three sides is treated as a triangle.
pub fn polygon_vertices(
    center: Vec2,
    radius: f32,
    sides: u32,
    rotation: f32,
) -> impl Iterator<Item = Vec2> {
    let n = sides.max(3);
    (0..n).map(move |k| center + Vec2::from_angle(rotation + TAU * k as f32 / n as f32) * radius)
}

/// Direction of the flow field at a normalized point. The pointer acts as a vortex.
#[inline]
pub fn flow_angle(p: Vec2, time: f32, pointer: Vec2) -> f32 {
    let base = (p.x * 6.0 + time).sin() * (p.y * 4.0 - time * 0.7).cos() * std::f32::consts::PI;
    let to_pointer = pointer - p;
    let d = to_pointer.length();
    let swirl = (-d * 6.0).exp();
    let tangent = to_pointer.y.atan2(to_pointer.x) + std::f32::consts::FRAC_PI_2;
    base * (1.0 - swirl) + tangent * swirl
}

/// Julia set constant steered by the pointer around the main cardioid rim.
#[inline]
pub fn julia_constant(pointer: Vec2, time: f32) -> Vec2 {
    let a = pointer.x * TAU + time * 0.1;
    let r = 0.6 + 0.25 * pointer.y;
    Vec2::from_angle(a) * r
}

/// Iterations before |z| exceeds 2, capped at `max_iter`.
pub fn julia_escape(mut z: Vec2, c: Vec2, max_iter: u32) -> u32 {
    for i in 0..max_iter {
        if z.length_squared() > 4.0 {
            return i;
        }
        z = Vec2::new(z.x * z.x - z.y * z.y, 2.0 * z.x * z.y) + c;
    }
    max_iter
}

/// Cell edge in pixels for the fractal grid: larger blocks at lower complexity.
#[inline]
pub fn fractal_block_size(complexity: f32) -> f64 {
    (16.0 - 12.0 * complexity.clamp(0.0, 1.0) as f64).round().max(2.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlitchSlice {
    pub y: f64,
    pub height: f64,
    pub shift: f64,
}

/// Random horizontal bands that stay inside `[0, canvas_height)`.
pub fn glitch_slices<R: Rng + ?Sized>(
    rng: &mut R,
    canvas_height: f64,
    count: usize,
    max_shift: f64,
) -> Vec<GlitchSlice> {
    if canvas_height < 2.0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let height = (rng.gen::<f64>() * canvas_height * 0.08).max(1.0).floor();
            let y = (rng.gen::<f64>() * (canvas_height - height)).floor();
            let shift = ((rng.gen::<f64>() * 2.0 - 1.0) * max_shift).round();
            GlitchSlice { y, height, shift }
        })
        .collect()
}
