use crate::constants::{
    CLASS_GROW, ID_BTN_YES, ID_CHOICE_OVERLAY, ID_SUCCESS_OVERLAY, VAR_YES_SCALE,
};
use crate::core::geometry::distance;
use crate::core::{yes_scale, EvadeController, GrowParams};
use crate::dom;
use crate::fireworks;
use crate::overlay;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ChoiceWiring {
    pub document: web::Document,
    pub evade: Rc<RefCell<EvadeController>>,
    pub btn_yes: web::HtmlElement,
    pub btn_no: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub loop_running: Rc<Cell<bool>>,
}

pub fn wire_choice_handlers(w: ChoiceWiring) {
    wire_pointermove(&w);
    wire_yes_click(&w);
    wire_no_click(&w);
}

fn wire_pointermove(w: &ChoiceWiring) {
    let w = w.clone();
    let document = w.document.clone();
    let grow = GrowParams::default();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if overlay::is_hidden(&w.document, ID_CHOICE_OVERLAY) {
            return;
        }
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let rect = dom::element_rect(&w.btn_no);
        let viewport = dom::viewport_size();

        {
            let mut evade = w.evade.borrow_mut();
            let was_floating = evade.is_floating();
            evade.pointer_moved(pointer, rect, viewport);
            if !was_floating && evade.is_floating() {
                _ = w.btn_no.style().set_property("position", "fixed");
                log::info!("[evade] control floats free");
            }
        }

        apply_yes_scale(&w.btn_yes, pointer, rect.center(), &grow);
    }) as Box<dyn FnMut(_)>);

    _ = document.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Scale the affirmative control by pointer proximity to the dismissive
/// control's center: a CSS custom property plus a class toggle.
fn apply_yes_scale(btn_yes: &web::HtmlElement, pointer: Vec2, no_center: Vec2, grow: &GrowParams) {
    let dist = distance(pointer, no_center);
    let style = btn_yes.style();
    if dist < grow.near_distance {
        let scale = yes_scale(dist, grow);
        _ = style.set_property(VAR_YES_SCALE, &format!("{}", scale));
        _ = btn_yes.class_list().add_1(CLASS_GROW);
    } else {
        _ = style.set_property(VAR_YES_SCALE, "1");
        _ = btn_yes.class_list().remove_1(CLASS_GROW);
    }
}

fn wire_yes_click(w: &ChoiceWiring) {
    let w = w.clone();
    let document = w.document.clone();
    dom::add_click_listener(&document, ID_BTN_YES, move || {
        log::info!("[click] accepted");
        overlay::hide(&w.document, ID_CHOICE_OVERLAY);
        overlay::show(&w.document, ID_SUCCESS_OVERLAY);
        w.loop_running.set(false);
        fireworks::start(&w.canvas);
    });
}

fn wire_no_click(w: &ChoiceWiring) {
    let btn_no = w.btn_no.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        // the dismissive control never activates
        ev.prevent_default();
        ev.stop_propagation();
    }) as Box<dyn FnMut(_)>);
    _ = btn_no.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
