// Host-side tests for scene registry and selector.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod scenes {
    include!("../src/core/scenes.rs");
}

use constants::{AUTO_CYCLE_SIM_SECS, IDLE_REVERT_MS};
use scenes::*;

#[test]
fn five_clicks_on_five_scenes_return_to_start() {
    let reg = SceneRegistry::single();
    assert_eq!(reg.len(), 5);
    for start in 0..5 {
        let mut sel = SceneSelector::new(reg.len(), start, false);
        for _ in 0..5 {
            sel.advance();
        }
        assert_eq!(sel.index(), start);
    }
}

#[test]
fn index_stays_in_range_under_mixed_operations() {
    let mut sel = SceneSelector::new(5, 12, false);
    assert_eq!(sel.index(), 2);
    for i in 0..1000usize {
        match i % 4 {
            0 => {
                sel.advance();
            }
            1 => {
                sel.retreat();
            }
            2 => {
                sel.select(i * 7);
            }
            _ => {
                sel.retreat();
                sel.retreat();
            }
        }
        assert!(sel.index() < sel.len());
    }
    assert_eq!(SceneSelector::new(5, 0, false).retreat(), 4);
}

#[test]
fn empty_length_is_treated_as_one() {
    let mut sel = SceneSelector::new(0, 3, false);
    assert_eq!(sel.index(), 0);
    assert_eq!(sel.advance(), 0);
}

#[test]
fn single_registry_holds_each_scene_once_in_order() {
    let reg = SceneRegistry::single();
    for (i, id) in SceneId::ALL.iter().enumerate() {
        let entry = reg.entry(i).unwrap();
        assert_eq!(entry.as_slice(), &[*id]);
    }
    assert!(reg.entry(5).is_none());
}

#[test]
fn layered_registry_combines_two_to_four_scenes() {
    let reg = SceneRegistry::layered();
    assert_eq!(reg.len(), 5);
    for i in 0..reg.len() {
        let n = reg.entry(i).unwrap().len();
        assert!((2..=4).contains(&n), "entry {} has {} scenes", i, n);
    }
    assert_eq!(reg.label(0), "polygons + glitch");
    assert_eq!(reg.label(99), "");
}

#[test]
fn auto_cycle_advances_on_sim_time_interval() {
    let mut sel = SceneSelector::new(5, 0, true);
    assert!(sel.auto_cycle());
    assert!(!sel.tick(AUTO_CYCLE_SIM_SECS - 0.1, 0.0));
    assert_eq!(sel.index(), 0);
    assert!(sel.tick(AUTO_CYCLE_SIM_SECS, 0.0));
    assert_eq!(sel.index(), 1);
    assert!(!sel.tick(AUTO_CYCLE_SIM_SECS + 1.0, 0.0));
    assert!(sel.tick(AUTO_CYCLE_SIM_SECS * 2.0, 0.0));
    assert_eq!(sel.index(), 2);
}

#[test]
fn manual_pick_restarts_the_cycle_timer() {
    let mut sel = SceneSelector::new(5, 0, true);
    let mut t = 0.0;
    while t < AUTO_CYCLE_SIM_SECS - 0.1 {
        t += 0.016;
        assert!(!sel.tick(t, 0.0));
    }
    assert_eq!(sel.advance(), 1);
    sel.note_manual_switch(t);

    for _ in 0..10 {
        t += 0.016;
        assert!(!sel.tick(t, 0.0));
    }
    assert_eq!(sel.index(), 1);

    // The full interval is measured from the pick
    let picked_at = t - 10.0 * 0.016;
    assert!(!sel.tick(picked_at + AUTO_CYCLE_SIM_SECS - 0.01, 0.0));
    assert!(sel.tick(picked_at + AUTO_CYCLE_SIM_SECS, 0.0));
    assert_eq!(sel.index(), 2);
}

#[test]
fn pointer_movement_pauses_cycling_until_idle() {
    let mut sel = SceneSelector::new(5, 0, true);
    sel.note_pointer_movement(1000.0);
    assert!(!sel.auto_cycle());

    // Plenty of sim time, but the pointer moved recently
    assert!(!sel.tick(20.0, 1000.0 + IDLE_REVERT_MS - 1.0));
    assert_eq!(sel.index(), 0);

    // Idle threshold reached: cycling resumes and the timer restarts
    assert!(!sel.tick(21.0, 1000.0 + IDLE_REVERT_MS));
    assert!(sel.auto_cycle());
    assert!(!sel.tick(21.0 + AUTO_CYCLE_SIM_SECS - 0.5, 1000.0 + IDLE_REVERT_MS));
    assert!(sel.tick(21.0 + AUTO_CYCLE_SIM_SECS, 1000.0 + IDLE_REVERT_MS));
    assert_eq!(sel.index(), 1);
}

#[test]
fn non_cycling_selector_never_moves_by_itself() {
    let mut sel = SceneSelector::new(5, 3, false);
    sel.note_pointer_movement(0.0);
    for k in 0..100 {
        assert!(!sel.tick(k as f64 * 10.0, k as f64 * 10_000.0));
    }
    assert_eq!(sel.index(), 3);
    assert!(!sel.auto_cycle());
}
