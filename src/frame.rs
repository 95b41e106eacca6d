use crate::core::EvadeController;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state for the dismissive control's smoothing loop.
pub struct FrameContext {
    pub evade: Rc<RefCell<EvadeController>>,
    pub btn_no: web::HtmlElement,
    pub running: Rc<Cell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut evade = self.evade.borrow_mut();
        evade.step();
        if evade.is_floating() {
            let pos = evade.current_top_left();
            let style = self.btn_no.style();
            _ = style.set_property("left", &format!("{}px", pos.x));
            _ = style.set_property("top", &format!("{}px", pos.y));
            _ = style.set_property("transform", "translate(0, 0)");
        }
    }
}

/// Drive the smoothing loop at animation-frame cadence until `running` is
/// cleared (acceptance hides the choice view and clears it).
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let running = frame_ctx.borrow().running.clone();
    running.set(true);
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
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
