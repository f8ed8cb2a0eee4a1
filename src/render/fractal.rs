use crate::constants::{FRACTAL_ALPHA, FRACTAL_MAX_ITER_MIN, FRACTAL_MAX_ITER_SPAN, FRACTAL_ZOOM};
use crate::core::patterns::{escape_palette, fractal_block_size, julia_constant, julia_escape};
use crate::core::FramePlan;
use glam::Vec2;
use web_sys as web;

// Cap on blocks per row regardless of screen size
const MAX_COLUMNS: f64 = 160.0;

/// Coarse Julia set; the pointer picks the constant.
pub fn draw(ctx: &web::CanvasRenderingContext2d, plan: &FramePlan) {
    let w = plan.size.x as f64;
    let h = plan.size.y as f64;
    let block = (fractal_block_size(plan.profile.complexity) * plan.profile.pixel_ratio)
        .max(w / MAX_COLUMNS);
    let t = plan.time as f32;
    let c = julia_constant(plan.pointer, t);
    let max_iter =
        FRACTAL_MAX_ITER_MIN + (FRACTAL_MAX_ITER_SPAN as f32 * plan.profile.complexity) as u32;
    let aspect = (w / h) as f32;
    let palette = escape_palette(max_iter, t, FRACTAL_ALPHA);

    let mut y = 0.0;
    while y < h {
        let mut x = 0.0;
        while x < w {
            let z = Vec2::new(
                ((x / w) as f32 - 0.5) * 2.0 * FRACTAL_ZOOM * aspect,
                ((y / h) as f32 - 0.5) * 2.0 * FRACTAL_ZOOM,
            );
            let n = julia_escape(z, c, max_iter);
            if let Some(style) = palette.get(n as usize) {
                ctx.set_fill_style_str(style);
                ctx.fill_rect(x, y, block, block);
            }
            x += block;
        }
        y += block;
    }
}
