use crate::constants::{FADE_ALPHA, FADE_RGB};
use crate::core::{FramePlan, SceneId, Session};
use web_sys as web;

mod flow;
mod fractal;
mod glitch;
mod helpers;
mod polygons;
mod swarm;

/// Draw one accepted frame: fade-trail first, then every scene in the layer.
pub fn draw_plan(ctx: &web::CanvasRenderingContext2d, plan: &FramePlan, session: &mut Session) {
    let w = plan.size.x as f64;
    let h = plan.size.y as f64;
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    ctx.set_fill_style_str(&format!("rgba({}, {})", FADE_RGB, FADE_ALPHA));
    ctx.fill_rect(0.0, 0.0, w, h);

    for scene in &plan.layer {
        match scene {
            SceneId::Polygons => polygons::draw(ctx, plan),
            SceneId::FlowField => flow::draw(ctx, plan),
            SceneId::Swarm => swarm::draw(ctx, plan, session.particles()),
            SceneId::Fractal => fractal::draw(ctx, plan),
            SceneId::Glitch => glitch::draw(ctx, plan, session.rng_mut()),
        }
    }
}
