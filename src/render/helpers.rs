use glam::Vec2;
use web_sys as web;

/// Begin a new path through `points` and close it. The caller strokes or fills.
pub fn trace_closed(ctx: &web::CanvasRenderingContext2d, points: impl IntoIterator<Item = Vec2>) {
    ctx.begin_path();
    let mut first = true;
    for p in points {
        if first {
            ctx.move_to(p.x as f64, p.y as f64);
            first = false;
        } else {
            ctx.line_to(p.x as f64, p.y as f64);
        }
    }
    ctx.close_path();
}

#[inline]
pub fn line(ctx: &web::CanvasRenderingContext2d, a: Vec2, b: Vec2) {
    ctx.move_to(a.x as f64, a.y as f64);
    ctx.line_to(b.x as f64, b.y as f64);
}

#[inline]
pub fn dot(ctx: &web::CanvasRenderingContext2d, center: Vec2, radius: f32) {
    ctx.begin_path();
    _ = ctx.arc(
        center.x as f64,
        center.y as f64,
        radius.max(0.0) as f64,
        0.0,
        std::f64::consts::TAU,
    );
    ctx.fill();
}
