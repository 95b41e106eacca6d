use crate::constants::{
    CLASS_LOADING, CLASS_TILE, MEDIA_DATA_GLOBAL, SEL_COLUMN_INNER, SEL_GRID_COLUMNS,
    SEL_GRID_MEDIA,
};
use crate::core::{
    column_assignments, column_count, first_batch_size, tile_sequence, MediaItem, MediaKind,
};
use crate::dom;
use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Read the page-supplied `window.mediaData` array. Entries are objects with
/// a `type` and a `url`; anything without a string url is skipped.
pub fn read_media_data() -> Vec<MediaItem> {
    let global = match web::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str(MEDIA_DATA_GLOBAL)).ok())
    {
        Some(v) => v,
        None => return Vec::new(),
    };
    if !js_sys::Array::is_array(&global) {
        return Vec::new();
    }
    let arr = js_sys::Array::from(&global);
    let mut items = Vec::with_capacity(arr.length() as usize);
    for entry in arr.iter() {
        let kind = js_sys::Reflect::get(&entry, &JsValue::from_str("type"))
            .ok()
            .and_then(|v| v.as_string())
            .map(|s| MediaKind::from_type(&s))
            .unwrap_or(MediaKind::Image);
        match js_sys::Reflect::get(&entry, &JsValue::from_str("url"))
            .ok()
            .and_then(|v| v.as_string())
        {
            Some(url) => items.push(MediaItem { kind, url }),
            None => log::warn!("[grid] media entry without url skipped"),
        }
    }
    items
}

/// Fill the background columns with media tiles. Items go round-robin across
/// the current column count and each column's run is laid out twice so the
/// strip can scroll in a seamless loop.
pub fn build_media_grid(document: &web::Document, items: &[MediaItem]) {
    let columns = match document.query_selector_all(SEL_GRID_COLUMNS) {
        Ok(list) => list,
        Err(_) => return,
    };
    if items.is_empty() || columns.length() == 0 {
        return;
    }
    let count = column_count(dom::viewport_size().x);
    for (col_index, assigned) in column_assignments(items.len(), count).iter().enumerate() {
        let inner = match columns
            .get(col_index as u32)
            .and_then(|node| node.dyn_into::<web::Element>().ok())
            .and_then(|col| col.query_selector(SEL_COLUMN_INNER).ok().flatten())
        {
            Some(el) => el,
            // a column without an inner strip is skipped, never an error
            None => continue,
        };
        inner.set_inner_html("");
        if assigned.is_empty() {
            continue;
        }
        for &item_index in &tile_sequence(assigned) {
            if let Some(tile) = make_tile(document, &items[item_index]) {
                _ = inner.append_child(&tile);
            }
        }
    }
    log::info!("[grid] built {} columns over {} items", count, items.len());
}

fn make_tile(document: &web::Document, item: &MediaItem) -> Option<web::Element> {
    let tile = document.create_element("div").ok()?;
    tile.set_class_name(CLASS_TILE);
    let media: web::Element = match item.kind {
        MediaKind::Video => {
            let video = document
                .create_element("video")
                .ok()?
                .dyn_into::<web::HtmlVideoElement>()
                .ok()?;
            video.set_src(&item.url);
            video.set_muted(true);
            video.set_loop(true);
            // web-sys has no `playsInline` binding; set the reflected attribute.
            _ = video.set_attribute("playsinline", "");
            video.set_autoplay(true);
            video.set_preload("metadata");
            _ = video.set_attribute("aria-hidden", "true");
            video.into()
        }
        MediaKind::Image => {
            let img = document
                .create_element("img")
                .ok()?
                .dyn_into::<web::HtmlImageElement>()
                .ok()?;
            img.set_src(&item.url);
            img.set_alt("");
            // web-sys has no `loading` binding; set the reflected attribute.
            _ = img.set_attribute("loading", "lazy");
            img.set_decoding("async");
            _ = img.set_attribute("aria-hidden", "true");
            img.into()
        }
    };
    _ = tile.append_child(&media);
    Some(tile)
}

/// Wait until the first batch of grid media is ready (loaded or errored), or
/// until `max_wait_ms` passes, whichever comes first. Errors count as ready;
/// a broken item never blocks the reveal.
pub async fn wait_for_first_media(document: &web::Document, max_wait_ms: u32) {
    let nodes = match document.query_selector_all(SEL_GRID_MEDIA) {
        Ok(list) => list,
        Err(_) => return,
    };
    if nodes.length() == 0 {
        return;
    }
    let count = column_count(dom::viewport_size().x);
    let batch = first_batch_size(count, nodes.length() as usize);

    let waits = js_sys::Array::new();
    for i in 0..batch as u32 {
        if let Some(node) = nodes.get(i) {
            waits.push(&media_ready_promise(&node));
        }
    }
    let all_ready = js_sys::Promise::all(&waits);
    let timed_out = timeout_promise(max_wait_ms);
    let race = js_sys::Promise::race(&js_sys::Array::of2(&all_ready, &timed_out));
    let _ = JsFuture::from(race).await;
}

/// A promise that settles once the element has loaded or errored. Already
/// ready elements resolve immediately.
fn media_ready_promise(node: &web::Node) -> js_sys::Promise {
    if let Some(img) = node.dyn_ref::<web::HtmlImageElement>() {
        if img.complete() && img.natural_width() > 0 {
            return js_sys::Promise::resolve(&JsValue::UNDEFINED);
        }
        let img = img.clone();
        return js_sys::Promise::new(&mut |resolve, _reject| {
            let resolve_err = resolve.clone();
            let on_load = Closure::once(move || {
                let _ = resolve.call0(&JsValue::NULL);
            });
            let on_error = Closure::once(move || {
                let _ = resolve_err.call0(&JsValue::NULL);
            });
            img.set_onload(Some(on_load.as_ref().unchecked_ref()));
            img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
            on_load.forget();
            on_error.forget();
        });
    }
    if let Some(video) = node.dyn_ref::<web::HtmlVideoElement>() {
        if video.ready_state() >= 2 {
            return js_sys::Promise::resolve(&JsValue::UNDEFINED);
        }
        let video = video.clone();
        return js_sys::Promise::new(&mut |resolve, _reject| {
            let resolve_err = resolve.clone();
            let on_loaded = Closure::once(move || {
                let _ = resolve.call0(&JsValue::NULL);
            });
            let on_error = Closure::once(move || {
                let _ = resolve_err.call0(&JsValue::NULL);
            });
            video.set_onloadeddata(Some(on_loaded.as_ref().unchecked_ref()));
            video.set_onerror(Some(on_error.as_ref().unchecked_ref()));
            on_loaded.forget();
            on_error.forget();
        });
    }
    js_sys::Promise::resolve(&JsValue::UNDEFINED)
}

fn timeout_promise(ms: u32) -> js_sys::Promise {
    js_sys::Promise::new(&mut |resolve, _reject| {
        Timeout::new(ms, move || {
            let _ = resolve.call0(&JsValue::NULL);
        })
        .forget();
    })
}

/// Drop the loading veil from the page body.
pub fn reveal_page(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.class_list().remove_1(CLASS_LOADING);
    }
    log::info!("[grid] page revealed");
}

/// Rebuild the grid when a resize crosses the column-count breakpoint.
pub fn wire_grid_rebuild(document: &web::Document, items: Rc<Vec<MediaItem>>) {
    let last_count = Cell::new(column_count(dom::viewport_size().x));
    let document = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let count = column_count(dom::viewport_size().x);
        if count != last_count.get() {
            last_count.set(count);
            build_media_grid(&document, &items);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
