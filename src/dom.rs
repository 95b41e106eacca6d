use crate::core::geometry::Rect;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> Vec2 {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Vec2::new(width as f32, height as f32)
    } else {
        Vec2::ZERO
    }
}

/// Size the canvas backing store to fill the viewport.
pub fn sync_canvas_viewport_size(canvas: &web::HtmlCanvasElement) {
    let size = viewport_size();
    canvas.set_width((size.x as u32).max(1));
    canvas.set_height((size.y as u32).max(1));
}

/// The element's rendered rectangle in viewport coordinates.
pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        Vec2::new(r.left() as f32, r.top() as f32),
        Vec2::new(r.width() as f32, r.height() as f32),
    )
}
