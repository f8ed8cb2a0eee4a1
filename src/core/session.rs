use super::config::{SessionConfig, Variant};
use super::particles::{target_count, ParticlePool};
use super::pointer::PointerState;
use super::profile::CapabilityProfile;
use super::scenes::{SceneId, SceneLayer, SceneRegistry, SceneSelector};
use super::scheduler::{FrameScheduler, SimClock};
use glam::Vec2;
use rand::rngs::StdRng;

/// Messages produced by the browser listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer or touch position in canvas CSS pixels.
    PointerMoved {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        at_ms: f64,
    },
    TouchEnded {
        at_ms: f64,
    },
    Clicked,
    SelectScene(usize),
    PreviousScene,
    /// Backing-store size in device pixels.
    Resized {
        width: u32,
        height: u32,
    },
}

/// Everything the draw routines may read for one accepted frame.
#[derive(Clone, Debug)]
pub struct FramePlan {
    pub frame_index: u64,
    pub time: f64,
    pub pointer: Vec2,
    pub layer: SceneLayer,
    pub profile: CapabilityProfile,
    pub size: Vec2,
    pub scene_changed: bool,
    pub fps_sampled: bool,
}

impl FramePlan {
    #[inline]
    pub fn contains(&self, scene: SceneId) -> bool {
        self.layer.contains(&scene)
    }
}

/// Whole per-page state. Listeners send `InputEvent`s; the frame loop calls
/// `on_callback` and draws the returned plan.
pub struct Session {
    profile: CapabilityProfile,
    variant: Variant,
    scheduler: FrameScheduler,
    clock: SimClock,
    pointer: PointerState,
    registry: SceneRegistry,
    selector: SceneSelector,
    particles: ParticlePool,
    rng: StdRng,
    size: Vec2,
    scene_dirty: bool,
}

impl Session {
    pub fn new(profile: CapabilityProfile, config: &SessionConfig, rng: StdRng) -> Self {
        let registry = if config.variant.layered() {
            SceneRegistry::layered()
        } else {
            SceneRegistry::single()
        };
        let selector =
            SceneSelector::new(registry.len(), config.initial_scene, config.variant.layered());
        Self {
            profile,
            variant: config.variant,
            scheduler: FrameScheduler::new(profile.target_fps),
            clock: SimClock::default(),
            pointer: PointerState::default(),
            registry,
            selector,
            particles: ParticlePool::with_speed_scale(profile.pixel_ratio as f32),
            rng,
            size: Vec2::ZERO,
            scene_dirty: true,
        }
    }

    #[inline]
    pub fn profile(&self) -> &CapabilityProfile {
        &self.profile
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    #[inline]
    pub fn scene_index(&self) -> usize {
        self.selector.index()
    }

    #[inline]
    pub fn scene_label(&self) -> String {
        self.registry.label(self.selector.index())
    }

    #[inline]
    pub fn observed_fps(&self) -> f64 {
        self.scheduler.observed_fps()
    }

    #[inline]
    pub fn particles(&self) -> &ParticlePool {
        &self.particles
    }

    #[inline]
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved {
                x,
                y,
                width,
                height,
                at_ms,
            } => {
                self.pointer.record(x, y, width, height, at_ms);
                self.selector.note_pointer_movement(at_ms);
            }
            InputEvent::TouchEnded { at_ms } => self.pointer.release(at_ms),
            InputEvent::Clicked => {
                self.selector.advance();
                self.manual_switch();
            }
            InputEvent::SelectScene(i) => {
                self.selector.select(i);
                self.manual_switch();
            }
            InputEvent::PreviousScene => {
                self.selector.retreat();
                self.manual_switch();
            }
            InputEvent::Resized { width, height } => {
                self.size = Vec2::new(width as f32, height as f32);
            }
        }
    }

    fn manual_switch(&mut self) {
        self.selector.note_manual_switch(self.time());
        self.scene_dirty = true;
    }

    /// One platform animation callback. Returns a plan only for accepted frames.
    pub fn on_callback(&mut self, now_ms: f64) -> Option<FramePlan> {
        let accepted = self.scheduler.on_callback(now_ms)?;
        let time = self.clock.advance();
        self.pointer.update_auto_rotate(time, now_ms);

        if self.selector.tick(time, now_ms) {
            self.scene_dirty = true;
        }
        let layer = self
            .registry
            .entry(self.selector.index())
            .cloned()
            .unwrap_or_default();

        let scene_changed = std::mem::take(&mut self.scene_dirty);
        if scene_changed {
            log::info!("[scenes] now showing {}", self.scene_label());
        }
        let plan = FramePlan {
            frame_index: accepted.index,
            time,
            pointer: self.pointer.position,
            layer,
            profile: self.profile,
            size: self.size,
            scene_changed,
            fps_sampled: self.scheduler.fps_sample_due(),
        };

        if plan.contains(SceneId::Swarm) {
            let target = target_count(self.profile.max_particles, plan.pointer.y);
            self.particles.resize_to(target, &mut self.rng, self.size);
            self.particles.step(plan.pointer.x, &mut self.rng, self.size);
        }
        Some(plan)
    }
}
