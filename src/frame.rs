use crate::core::Session;
use crate::overlay;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub ctx: web::CanvasRenderingContext2d,
    pub document: web::Document,
}

impl FrameContext {
    /// One platform callback. Skipped callbacks return without touching the canvas.
    pub fn frame(&mut self) {
        let now_ms = instant::now();
        let mut session = self.session.borrow_mut();
        let Some(plan) = session.on_callback(now_ms) else {
            return;
        };
        render::draw_plan(&self.ctx, &plan, &mut session);

        if plan.fps_sampled {
            log::debug!(
                "[frame] #{} observed {:.1} fps (target {})",
                plan.frame_index,
                session.observed_fps(),
                plan.profile.target_fps
            );
        }
        if plan.fps_sampled || plan.scene_changed {
            overlay::update_hud(&self.document, &session);
        }
    }
}

/// Drive `frame` from `requestAnimationFrame` forever; the loop re-arms itself every callback.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
