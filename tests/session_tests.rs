// Host-side tests for the session step: throttle, clock, pointer, scenes, particles together.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}
mod pointer {
    include!("../src/core/pointer.rs");
}
mod profile {
    include!("../src/core/profile.rs");
}
mod scenes {
    include!("../src/core/scenes.rs");
}
mod scheduler {
    include!("../src/core/scheduler.rs");
}
mod session {
    include!("../src/core/session.rs");
}

use config::{SessionConfig, Variant};
use constants::{AUTO_CYCLE_SIM_SECS, PARTICLE_SPEED_MAX, PARTICLE_SPEED_MIN, SIM_STEP};
use glam::Vec2;
use particles::target_count;
use pointer::auto_rotate_position;
use profile::{CapabilityProfile, Tier};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scenes::SceneId;
use session::*;

const DISPLAY_MS: f64 = 1000.0 / 60.0;

fn make_session(variant: Variant, tier: Tier, scene: usize) -> Session {
    let cfg = SessionConfig {
        variant,
        initial_scene: scene,
        ..SessionConfig::default()
    };
    let mut s = Session::new(
        CapabilityProfile::for_tier(tier, 2.0),
        &cfg,
        StdRng::seed_from_u64(1234),
    );
    s.handle(InputEvent::Resized {
        width: 1280,
        height: 720,
    });
    s
}

/// Feed display-rate callbacks until `frames` plans come back.
fn run_frames(s: &mut Session, now: &mut f64, frames: usize) -> Vec<FramePlan> {
    let mut plans = Vec::with_capacity(frames);
    while plans.len() < frames {
        *now += DISPLAY_MS;
        if let Some(p) = s.on_callback(*now) {
            plans.push(p);
        }
    }
    plans
}

#[test]
fn clock_only_advances_on_accepted_frames() {
    let mut s = make_session(Variant::Adaptive, Tier::MobilePhone, 0);
    assert!(s.on_callback(0.0).is_none());
    assert_eq!(s.time(), 0.0);

    let mut accepted = 0;
    for i in 1..=600 {
        let before = s.time();
        match s.on_callback(i as f64 * DISPLAY_MS) {
            Some(plan) => {
                accepted += 1;
                assert!((plan.time - before - SIM_STEP).abs() < 1e-12);
                assert_eq!(plan.time, s.time());
            }
            None => assert_eq!(s.time(), before),
        }
    }
    // 30 fps target over a 60 Hz display
    assert!((accepted as i64 - 300).abs() <= 1, "accepted {}", accepted);
}

#[test]
fn idle_session_pointer_follows_auto_rotate() {
    let mut s = make_session(Variant::Adaptive, Tier::HighEndDesktop, 0);
    let mut now = 0.0;
    s.on_callback(now);
    for plan in run_frames(&mut s, &mut now, 200) {
        let expected = auto_rotate_position(plan.time);
        assert!((plan.pointer - expected).abs().max_element() < 1e-6);
    }
}

#[test]
fn real_pointer_input_overrides_auto_rotate() {
    let mut s = make_session(Variant::Adaptive, Tier::HighEndDesktop, 0);
    let mut now = 0.0;
    s.on_callback(now);
    run_frames(&mut s, &mut now, 5);
    s.handle(InputEvent::PointerMoved {
        x: 320.0,
        y: 540.0,
        width: 640.0,
        height: 720.0,
        at_ms: now,
    });
    let plans = run_frames(&mut s, &mut now, 10);
    for p in plans {
        assert_eq!(p.pointer, Vec2::new(0.5, 0.75));
    }
}

#[test]
fn particle_pool_tracks_pointer_height_every_frame() {
    let mut s = make_session(Variant::Adaptive, Tier::MidRangeDesktop, 2);
    let max = s.profile().max_particles;
    let mut now = 0.0;
    s.on_callback(now);
    for plan in run_frames(&mut s, &mut now, 400) {
        assert!(plan.contains(SceneId::Swarm));
        assert_eq!(s.particles().len(), target_count(max, plan.pointer.y));
    }
}

#[test]
fn particles_stay_idle_when_swarm_is_not_shown() {
    let mut s = make_session(Variant::Adaptive, Tier::MidRangeDesktop, 0);
    let mut now = 0.0;
    s.on_callback(now);
    run_frames(&mut s, &mut now, 50);
    assert!(s.particles().is_empty());
}

#[test]
fn five_clicks_restore_the_scene() {
    let mut s = make_session(Variant::Classic, Tier::MidRangeDesktop, 3);
    assert_eq!(s.scene_index(), 3);
    for _ in 0..5 {
        s.handle(InputEvent::Clicked);
    }
    assert_eq!(s.scene_index(), 3);

    s.handle(InputEvent::PreviousScene);
    assert_eq!(s.scene_index(), 2);
    s.handle(InputEvent::SelectScene(9));
    assert_eq!(s.scene_index(), 4);
}

#[test]
fn scene_change_is_reported_once() {
    let mut s = make_session(Variant::Classic, Tier::MidRangeDesktop, 0);
    let mut now = 0.0;
    s.on_callback(now);
    let first = run_frames(&mut s, &mut now, 2);
    assert!(first[0].scene_changed);
    assert!(!first[1].scene_changed);

    s.handle(InputEvent::Clicked);
    let next = run_frames(&mut s, &mut now, 2);
    assert!(next[0].scene_changed);
    assert!(!next[1].scene_changed);
    assert_eq!(next[0].layer.as_slice(), &[SceneId::FlowField]);
}

#[test]
fn single_variants_render_one_scene_per_frame() {
    for v in [Variant::Classic, Variant::Adaptive] {
        let mut s = make_session(v, Tier::MidRangeDesktop, 0);
        let mut now = 0.0;
        s.on_callback(now);
        for _ in 0..5 {
            let plan = &run_frames(&mut s, &mut now, 1)[0];
            assert_eq!(plan.layer.len(), 1);
            s.handle(InputEvent::Clicked);
        }
    }
}

#[test]
fn aggressive_variant_layers_and_auto_cycles() {
    let mut s = make_session(Variant::Aggressive, Tier::HighEndDesktop, 0);
    let mut now = 0.0;
    s.on_callback(now);
    let plans = run_frames(&mut s, &mut now, 520);
    assert!(plans.iter().all(|p| (2..=4).contains(&p.layer.len())));
    assert_eq!(s.scene_index(), 1);
}

#[test]
fn click_near_cycle_boundary_is_not_overridden() {
    let mut s = make_session(Variant::Aggressive, Tier::HighEndDesktop, 0);
    let mut now = 0.0;
    s.on_callback(now);
    while s.time() < AUTO_CYCLE_SIM_SECS - 0.1 {
        run_frames(&mut s, &mut now, 1);
    }
    assert_eq!(s.scene_index(), 0);
    s.handle(InputEvent::Clicked);
    let plans = run_frames(&mut s, &mut now, 100);
    assert!(plans.iter().skip(1).all(|p| !p.scene_changed));
    assert_eq!(s.scene_index(), 1);
}

#[test]
fn particle_speed_follows_pixel_ratio() {
    let mut s = make_session(Variant::Adaptive, Tier::MidRangeDesktop, 2);
    let dpr = s.profile().pixel_ratio as f32;
    assert_eq!(dpr, 2.0);
    let mut now = 0.0;
    s.on_callback(now);
    run_frames(&mut s, &mut now, 20);
    assert!(!s.particles().is_empty());
    for p in s.particles().particles() {
        assert!(p.speed >= PARTICLE_SPEED_MIN * dpr && p.speed < PARTICLE_SPEED_MAX * dpr);
    }
}

#[test]
fn aggressive_cycling_pauses_while_pointer_moves() {
    let mut s = make_session(Variant::Aggressive, Tier::HighEndDesktop, 0);
    let mut now = 0.0;
    s.on_callback(now);
    for _ in 0..600 {
        s.handle(InputEvent::PointerMoved {
            x: 10.0,
            y: 10.0,
            width: 100.0,
            height: 100.0,
            at_ms: now,
        });
        run_frames(&mut s, &mut now, 1);
    }
    assert_eq!(s.scene_index(), 0);
}

#[test]
fn zero_sized_canvas_is_tolerated() {
    let mut s = make_session(Variant::Adaptive, Tier::MidRangeDesktop, 2);
    s.handle(InputEvent::Resized {
        width: 0,
        height: 0,
    });
    let mut now = 0.0;
    s.on_callback(now);
    let plans = run_frames(&mut s, &mut now, 30);
    assert!(plans.iter().all(|p| p.size == Vec2::ZERO));
}

#[test]
fn profile_is_never_changed_by_the_session() {
    let mut s = make_session(Variant::Aggressive, Tier::Tablet, 0);
    let original = *s.profile();
    let mut now = 0.0;
    s.on_callback(now);
    for plan in run_frames(&mut s, &mut now, 100) {
        assert_eq!(plan.profile, original);
    }
    assert_eq!(*s.profile(), original);
}
