#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, FATAL_NOTICE};
use crate::core::{select_profile, CapabilityProfile, InputEvent, Session, SessionConfig};
use crate::error::InitError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod device;
mod dom;
mod error;
mod events;
mod frame;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("kaleido-web starting");

    mount(CANVAS_ID, &dom::query_string())
}

/// Start the visualizer on `canvas_id` with settings from `query`.
///
/// A missing canvas replaces the page with a notice. Strict variants then
/// return `Err`, which surfaces as a JS exception; lenient ones return `Ok`
/// without ever starting the loop.
#[wasm_bindgen]
pub fn mount(canvas_id: &str, query: &str) -> Result<(), JsValue> {
    let config = SessionConfig::from_query(query);
    match init(canvas_id, &config) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                overlay::show_fatal_notice(&document, FATAL_NOTICE);
            }
            if config.variant.strict_startup() {
                Err(JsValue::from_str(&e.to_string()))
            } else {
                Ok(())
            }
        }
    }
}

fn choose_profile(window: &web::Window, config: &SessionConfig) -> CapabilityProfile {
    let reported_dpr = window.device_pixel_ratio();
    if let Some(tier) = config.tier_override {
        log::info!("[profile] tier forced to {}", tier.name());
        return CapabilityProfile::for_tier(tier, reported_dpr);
    }
    if config.variant.probes_device() {
        select_profile(&device::read_signals(window))
    } else {
        CapabilityProfile::baseline(reported_dpr)
    }
}

fn init(canvas_id: &str, config: &SessionConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or(InitError::NoWindow)?;
    let document = window.document().ok_or(InitError::NoDocument)?;
    let canvas = dom::find_canvas(&document, canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;

    let profile = choose_profile(&window, config);
    log::info!(
        "[profile] variant={} tier={} fps={} dpr={:.2} particles={} shapes={}",
        config.variant.name(),
        profile.tier.name(),
        profile.target_fps,
        profile.pixel_ratio,
        profile.max_particles,
        profile.max_shapes
    );

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let session = Rc::new(RefCell::new(Session::new(profile, config, rng)));

    // Maintain canvas internal pixel size to match CSS size * capped pixel ratio
    let (width, height) = dom::sync_canvas_backing_size(&canvas, profile.pixel_ratio);
    session
        .borrow_mut()
        .handle(InputEvent::Resized { width, height });

    events::wire_input_handlers(events::InputWiring {
        canvas,
        session: session.clone(),
        pixel_ratio: profile.pixel_ratio,
    });
    events::wire_global_keydown(session.clone());

    if config.show_hud {
        overlay::show(&document);
        overlay::update_hud(&document, &session.borrow());
    } else {
        overlay::hide(&document);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        ctx,
        document,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
