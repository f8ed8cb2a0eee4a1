use super::constants::{
    PARTICLE_DECAY_MAX, PARTICLE_DECAY_MIN, PARTICLE_SIZE_MAX, PARTICLE_SIZE_MIN,
    PARTICLE_SPEED_MAX, PARTICLE_SPEED_MIN, PARTICLE_STEER,
};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub angle: f32,
    pub speed: f32,
    pub life: f32,
    pub decay: f32,
    pub size: f32,
    pub hue: f32,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, speed_scale: f32) -> Self {
        let mut p = Particle {
            pos: Vec2::ZERO,
            angle: 0.0,
            speed: 0.0,
            life: 0.0,
            decay: 0.0,
            size: 0.0,
            hue: 0.0,
        };
        p.reset(rng, bounds, speed_scale);
        p
    }

    /// Re-randomize in place. `speed_scale` converts CSS-pixel speeds to backing-store pixels.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Vec2, speed_scale: f32) {
        self.pos = Vec2::new(
            rng.gen::<f32>() * bounds.x.max(0.0),
            rng.gen::<f32>() * bounds.y.max(0.0),
        );
        self.angle = rng.gen::<f32>() * TAU;
        self.speed = rng.gen_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX) * speed_scale;
        self.life = 1.0;
        self.decay = rng.gen_range(PARTICLE_DECAY_MIN..PARTICLE_DECAY_MAX);
        self.size = rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX);
        self.hue = rng.gen::<f32>() * 360.0;
    }

    #[inline]
    pub fn in_bounds(&self, bounds: Vec2) -> bool {
        self.pos.x >= 0.0 && self.pos.y >= 0.0 && self.pos.x <= bounds.x && self.pos.y <= bounds.y
    }
}

/// Pool size for a given tier limit and vertical pointer position.
#[inline]
pub fn target_count(max_particles: usize, pointer_y: f32) -> usize {
    let y = if pointer_y.is_finite() {
        pointer_y.clamp(0.0, 1.0)
    } else {
        0.0
    };
    (max_particles as f32 * y).floor() as usize
}

/// Index-addressed particle arena. Expired particles are reset in place.
#[derive(Clone, Debug)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    speed_scale: f32,
}

#[cfg(test)]
impl Default for ParticlePool {
    fn default() -> Self {
        Self::with_speed_scale(1.0)
    }
}

#[cfg(test)]
impl From<Vec<Particle>> for ParticlePool {
    fn from(particles: Vec<Particle>) -> Self {
        Self {
            particles,
            speed_scale: 1.0,
        }
    }
}

impl ParticlePool {
    /// Non-finite or non-positive scales fall back to 1.
    pub fn with_speed_scale(speed_scale: f32) -> Self {
        Self {
            particles: Vec::new(),
            speed_scale: if speed_scale.is_finite() && speed_scale > 0.0 {
                speed_scale
            } else {
                1.0
            },
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Grow with fresh particles or truncate to exactly `target`.
    pub fn resize_to<R: Rng + ?Sized>(&mut self, target: usize, rng: &mut R, bounds: Vec2) {
        if target < self.particles.len() {
            self.particles.truncate(target);
        } else {
            self.particles.reserve(target - self.particles.len());
            while self.particles.len() < target {
                self.particles
                    .push(Particle::spawn(rng, bounds, self.speed_scale));
            }
        }
    }

    /// Advance every particle one tick, steering by horizontal pointer deviation.
    pub fn step<R: Rng + ?Sized>(&mut self, pointer_x: f32, rng: &mut R, bounds: Vec2) {
        let steer = (pointer_x - 0.5) * PARTICLE_STEER;
        for p in &mut self.particles {
            p.angle += steer;
            p.pos += Vec2::from_angle(p.angle) * p.speed;
            p.life -= p.decay;
            if p.life <= 0.0 || !p.in_bounds(bounds) {
                p.reset(rng, bounds, self.speed_scale);
            }
        }
    }

    /// Pairs closer than `threshold`, with alpha falling linearly to zero at the threshold.
    pub fn links(&self, threshold: f32) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |i| {
            ((i + 1)..ps.len()).filter_map(move |j| {
                let d = ps[i].pos.distance(ps[j].pos);
                (d < threshold).then(|| (i, j, 1.0 - d / threshold))
            })
        })
    }
}
