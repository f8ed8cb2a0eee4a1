use super::helpers;
use crate::constants::{
    POLYGON_LINE_WIDTH, POLYGON_SIDES_MIN, POLYGON_SIDES_SPAN, POLYGON_SPIN_RATE,
};
use crate::core::patterns::{hsla, polygon_vertices};
use crate::core::FramePlan;
use web_sys as web;

/// Nested counter-rotating polygons centred on the pointer.
pub fn draw(ctx: &web::CanvasRenderingContext2d, plan: &FramePlan) {
    let n = plan.profile.shape_budget();
    let t = plan.time as f32;
    let center = plan.pointer * plan.size;
    let max_r = plan.size.min_element() * 0.5;
    ctx.set_line_width(POLYGON_LINE_WIDTH * plan.profile.pixel_ratio);

    for k in 0..n {
        let f = (k + 1) as f32 / n as f32;
        let sides = POLYGON_SIDES_MIN + (k as u32 % POLYGON_SIDES_SPAN);
        let dir = if k % 2 == 0 { 1.0 } else { -1.0 };
        let rotation = dir * t * POLYGON_SPIN_RATE * (1.0 + k as f32 * 0.1);
        let radius = max_r * f * (1.0 + 0.08 * (t * 2.0 + k as f32).sin());
        let hue = t * 40.0 + k as f32 * 360.0 / n as f32;

        ctx.set_stroke_style_str(&hsla(hue, 90.0, 60.0, 0.7));
        helpers::trace_closed(ctx, polygon_vertices(center, radius, sides, rotation));
        ctx.stroke();
    }
}
