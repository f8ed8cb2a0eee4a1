use super::helpers;
use crate::constants::SWARM_LINK_WIDTH;
use crate::core::constants::PARTICLE_LINK_DISTANCE;
use crate::core::particles::ParticlePool;
use crate::core::patterns::hsla;
use crate::core::FramePlan;
use web_sys as web;

pub fn draw(ctx: &web::CanvasRenderingContext2d, plan: &FramePlan, pool: &ParticlePool) {
    let dpr = plan.profile.pixel_ratio as f32;
    let t = plan.time as f32;
    let ps = pool.particles();

    let threshold = PARTICLE_LINK_DISTANCE * dpr;
    ctx.set_line_width(SWARM_LINK_WIDTH * plan.profile.pixel_ratio);
    for (i, j, alpha) in pool.links(threshold) {
        ctx.set_stroke_style_str(&hsla(ps[i].hue + t * 20.0, 100.0, 70.0, alpha * 0.6));
        ctx.begin_path();
        helpers::line(ctx, ps[i].pos, ps[j].pos);
        ctx.stroke();
    }

    for p in ps {
        ctx.set_fill_style_str(&hsla(p.hue + t * 20.0, 100.0, 60.0, p.life));
        helpers::dot(ctx, p.pos, p.size * dpr);
    }
}
