use crate::core::{InputEvent, Session};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<Session>>,
    pub pixel_ratio: f64,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_touchmove(&w);
    wire_touchend(&w);
    wire_click(&w);
    wire_resize(&w);
}

/// Client coordinates relative to the canvas, plus its CSS size.
#[inline]
fn pointer_moved(canvas: &web::HtmlCanvasElement, client_x: i32, client_y: i32) -> InputEvent {
    let rect = canvas.get_bounding_client_rect();
    InputEvent::PointerMoved {
        x: client_x as f32 - rect.left() as f32,
        y: client_y as f32 - rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
        at_ms: instant::now(),
    }
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let msg = pointer_moved(&w.canvas, ev.client_x(), ev.client_y());
        w.session.borrow_mut().handle(msg);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_touchmove(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            let msg = pointer_moved(&w.canvas, touch.client_x(), touch.client_y());
            w.session.borrow_mut().handle(msg);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchend(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        w.session.borrow_mut().handle(InputEvent::TouchEnded {
            at_ms: instant::now(),
        });
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        w.session.borrow_mut().handle(InputEvent::Clicked);
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let (width, height) = dom::sync_canvas_backing_size(&w.canvas, w.pixel_ratio);
        log::debug!("[resize] {}x{}", width, height);
        w.session
            .borrow_mut()
            .handle(InputEvent::Resized { width, height });
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
