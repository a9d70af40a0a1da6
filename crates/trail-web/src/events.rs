use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use trail_core::{PointerInput, PointerState, TouchPoints};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedPointer = Rc<RefCell<PointerState>>;

fn mouse_position(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn touch_points(ev: &web::TouchEvent) -> TouchPoints {
    let list = ev.touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| Vec2::new(t.page_x() as f32, t.page_y() as f32))
        .collect()
}

pub fn wire_input_handlers(pointer: &SharedPointer) {
    wire_mouse(pointer, "mousemove", |ev| PointerInput::Move(mouse_position(ev)));
    wire_mouse(pointer, "mousedown", |_| PointerInput::Press);
    wire_mouse(pointer, "mouseup", |_| PointerInput::Release);
    if let Some(document) = dom::window_document() {
        wire_touch(&document, pointer, "touchstart");
        wire_touch(&document, pointer, "touchmove");
    }
}

fn wire_mouse(
    pointer: &SharedPointer,
    event: &str,
    to_input: impl Fn(&web::MouseEvent) -> PointerInput + 'static,
) {
    let pointer = pointer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        pointer.borrow_mut().apply(&to_input(&ev));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touch(document: &web::Document, pointer: &SharedPointer, event: &str) {
    let pointer = pointer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // Only single-finger gestures steer; pinch and friends keep their default behaviour.
        if pointer.borrow_mut().apply(&PointerInput::Touch(touch_points(&ev))) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_to_window(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_to_window(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
