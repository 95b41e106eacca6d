use crate::core::constants::{BURST_INTERVAL_MS, BURST_WINDOW_MS, DRAIN_GRACE_MS};
use crate::core::{FireworksEngine, FireworksParams};
use crate::dom;
use glam::Vec2;
use gloo_timers::callback::{Interval, Timeout};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct DriverHandles {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    engine: Rc<RefCell<FireworksEngine>>,
    raf_active: Rc<Cell<bool>>,
}

/// Run the celebration on `canvas`: one burst immediately, more on a fixed
/// interval while the window lasts, then a drain and a forced clear.
pub fn start(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_viewport_size(canvas);
    let ctx = match canvas_2d(canvas) {
        Some(c) => c,
        None => {
            log::error!("[fireworks] no 2d context");
            return;
        }
    };

    let engine = Rc::new(RefCell::new(FireworksEngine::new(
        FireworksParams::default(),
        rand::random::<u64>(),
    )));
    engine.borrow_mut().begin_bursting();

    let handles = DriverHandles {
        canvas: canvas.clone(),
        ctx,
        engine,
        raf_active: Rc::new(Cell::new(false)),
    };
    log::info!("[fireworks] start");

    spawn_burst(&handles);

    let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    {
        let handles = handles.clone();
        *interval.borrow_mut() = Some(Interval::new(BURST_INTERVAL_MS, move || {
            spawn_burst(&handles);
        }));
    }

    // Close the burst window, then force-clear once the grace period is up.
    Timeout::new(BURST_WINDOW_MS, move || {
        interval.borrow_mut().take();
        handles.engine.borrow_mut().finish_bursting();
        Timeout::new(DRAIN_GRACE_MS, move || {
            handles.engine.borrow_mut().clear();
            let width = handles.canvas.width() as f64;
            let height = handles.canvas.height() as f64;
            handles.ctx.clear_rect(0.0, 0.0, width, height);
            log::info!("[fireworks] cleared");
        })
        .forget();
    })
    .forget();
}

fn spawn_burst(h: &DriverHandles) {
    let size = Vec2::new(h.canvas.width() as f32, h.canvas.height() as f32);
    {
        let mut engine = h.engine.borrow_mut();
        let center = engine.random_burst_center(size);
        engine.burst_at(center);
    }
    ensure_loop(h);
}

/// Start the draw loop unless it is already scheduled. The loop stops itself
/// once the particle collection drains; a later burst starts it again.
fn ensure_loop(h: &DriverHandles) {
    if h.raf_active.get() {
        return;
    }
    h.raf_active.set(true);
    let h = h.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !draw_frame(&h) {
            h.raf_active.set(false);
            return;
        }
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// One frame: clear, integrate, paint every surviving particle. Returns
/// whether any particles remain.
fn draw_frame(h: &DriverHandles) -> bool {
    let width = h.canvas.width() as f64;
    let height = h.canvas.height() as f64;
    h.ctx.clear_rect(0.0, 0.0, width, height);

    let mut engine = h.engine.borrow_mut();
    let alive = engine.step();
    for p in &engine.particles {
        h.ctx.set_global_alpha(p.life as f64);
        h.ctx.set_fill_style_str(p.color);
        h.ctx.begin_path();
        h.ctx
            .arc(
                p.pos.x as f64,
                p.pos.y as f64,
                p.radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .ok();
        h.ctx.fill();
    }
    h.ctx.set_global_alpha(1.0);
    alive
}

fn canvas_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
}
