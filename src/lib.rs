#![cfg(target_arch = "wasm32")]
use crate::constants::{ID_BTN_NO, ID_BTN_YES, ID_CHOICE_OVERLAY, ID_FIREWORKS_CANVAS};
use crate::core::constants::REVEAL_TIMEOUT_MS;
use crate::core::{EvadeController, EvadeParams};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod fireworks;
mod frame;
mod overlay;
mod tiles;

// Keep the celebration canvas matched to the viewport; resizing implicitly
// clears it, and the draw loop repaints on its next frame.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_viewport_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_viewport_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("proposal-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let btn_yes = html_element(&document, ID_BTN_YES)?;
    let btn_no = html_element(&document, ID_BTN_NO)?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(ID_FIREWORKS_CANVAS)
        .ok_or_else(|| anyhow::anyhow!("missing #fireworksCanvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    wire_canvas_resize(&canvas);

    let evade = Rc::new(RefCell::new(EvadeController::new(EvadeParams::default())));
    let loop_running = Rc::new(Cell::new(false));

    events::wire_choice_handlers(events::ChoiceWiring {
        document: document.clone(),
        evade: evade.clone(),
        btn_yes,
        btn_no: btn_no.clone(),
        canvas,
        loop_running: loop_running.clone(),
    });

    if !overlay::is_hidden(&document, ID_CHOICE_OVERLAY) {
        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            evade,
            btn_no,
            running: loop_running,
        }));
        frame::start_loop(frame_ctx);
    }

    // Background grid: build, wait for the first media batch, reveal.
    let items = Rc::new(tiles::read_media_data());
    if items.is_empty() {
        tiles::reveal_page(&document);
    } else {
        tiles::build_media_grid(&document, &items);
        tiles::wire_grid_rebuild(&document, items.clone());
        tiles::wait_for_first_media(&document, REVEAL_TIMEOUT_MS).await;
        tiles::reveal_page(&document);
    }

    Ok(())
}

fn html_element(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}
