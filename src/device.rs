use crate::core::DeviceSignals;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Read the coarse startup descriptors. Anything the browser hides stays `None`.
pub fn read_signals(window: &web::Window) -> DeviceSignals {
    let navigator = window.navigator();
    let user_agent = navigator.user_agent().ok();
    let cores = Some(navigator.hardware_concurrency())
        .filter(|c| c.is_finite() && *c >= 1.0)
        .map(|c| c as u32);
    // `deviceMemory` is Chromium-only and absent from web-sys bindings
    let memory_gb = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64());
    let pixel_ratio = Some(window.device_pixel_ratio());
    let webgl = window
        .document()
        .map(|d| probe_webgl(&d))
        .unwrap_or(false);

    let signals = DeviceSignals {
        user_agent,
        cores,
        memory_gb,
        pixel_ratio,
        webgl,
    };
    log::info!(
        "[device] cores={:?} memory={:?}GB dpr={:?} webgl={}",
        signals.cores,
        signals.memory_gb,
        signals.pixel_ratio,
        signals.webgl
    );
    signals
}

fn probe_webgl(document: &web::Document) -> bool {
    let canvas = match document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    {
        Some(c) => c,
        None => return false,
    };
    ["webgl", "experimental-webgl"]
        .iter()
        .any(|kind| matches!(canvas.get_context(kind), Ok(Some(_))))
}
