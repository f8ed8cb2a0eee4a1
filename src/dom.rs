use crate::error::InitError;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query_string() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn find_canvas(
    document: &web::Document,
    canvas_id: &str,
) -> Result<web::HtmlCanvasElement, InitError> {
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| InitError::MissingCanvas(canvas_id.to_string()))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| InitError::NotACanvas(canvas_id.to_string()))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, InitError> {
    canvas
        .get_context("2d")
        .map_err(|e| InitError::NoContext2d(format!("{:?}", e)))?
        .ok_or_else(|| InitError::NoContext2d("null context".to_string()))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| InitError::NoContext2d(format!("{:?}", e)))
}

/// Match the backing store to CSS size times the capped pixel ratio.
/// Returns the new size in device pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, pixel_ratio: f64) -> (u32, u32) {
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * pixel_ratio) as u32;
    let h_px = (rect.height() * pixel_ratio) as u32;
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}
