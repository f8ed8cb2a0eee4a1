use crate::constants::{GLITCH_BAR_ALPHA, GLITCH_SHIFT_FRACTION, GLITCH_SLICES_MAX};
use crate::core::patterns::{glitch_slices, hsla};
use crate::core::FramePlan;
use rand::Rng;
use web_sys as web;

/// Shift random horizontal bands of what is already on screen, then add colour bars.
pub fn draw<R: Rng + ?Sized>(ctx: &web::CanvasRenderingContext2d, plan: &FramePlan, rng: &mut R) {
    let w = plan.size.x as f64;
    let h = plan.size.y as f64;
    let count = ((GLITCH_SLICES_MAX as f32 * plan.profile.complexity).ceil() as usize).max(1);

    for s in glitch_slices(rng, h, count, w * GLITCH_SHIFT_FRACTION) {
        if let Ok(img) = ctx.get_image_data(0.0, s.y, w, s.height) {
            _ = ctx.put_image_data(&img, s.shift, s.y);
        }
    }

    _ = ctx.set_global_composite_operation("lighter");
    for hue in [0.0_f32, 120.0, 240.0] {
        let y = rng.gen::<f64>() * h;
        let bar_h = (rng.gen::<f64>() * 4.0 + 1.0) * plan.profile.pixel_ratio;
        ctx.set_fill_style_str(&hsla(hue, 100.0, 50.0, GLITCH_BAR_ALPHA));
        ctx.fill_rect(0.0, y, w, bar_h);
    }
    _ = ctx.set_global_composite_operation("source-over");
}
