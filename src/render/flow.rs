use super::helpers;
use crate::constants::{FLOW_CELL_MAX_PX, FLOW_CELL_MIN_PX, FLOW_STROKE_FRACTION};
use crate::core::patterns::{flow_angle, hsla};
use crate::core::FramePlan;
use glam::Vec2;
use web_sys as web;

pub fn draw(ctx: &web::CanvasRenderingContext2d, plan: &FramePlan) {
    let complexity = plan.profile.complexity as f64;
    let cell = (FLOW_CELL_MAX_PX - (FLOW_CELL_MAX_PX - FLOW_CELL_MIN_PX) * complexity)
        * plan.profile.pixel_ratio;
    let cols = (plan.size.x as f64 / cell).ceil() as usize;
    let rows = (plan.size.y as f64 / cell).ceil() as usize;
    let t = plan.time as f32;
    let len = (cell * FLOW_STROKE_FRACTION) as f32;

    ctx.set_line_width(plan.profile.pixel_ratio);
    // One path per row keeps stroke calls proportional to rows, not cells
    for r in 0..rows {
        let y = (r as f64 + 0.5) * cell;
        let hue = t * 25.0 + r as f32 * 360.0 / rows.max(1) as f32;
        ctx.set_stroke_style_str(&hsla(hue, 85.0, 55.0, 0.5));
        ctx.begin_path();
        for c in 0..cols {
            let x = (c as f64 + 0.5) * cell;
            let p = Vec2::new(x as f32, y as f32);
            let uv = p / plan.size;
            let a = flow_angle(uv, t, plan.pointer);
            let d = Vec2::from_angle(a) * (len * 0.5);
            helpers::line(ctx, p - d, p + d);
        }
        ctx.stroke();
    }
}
