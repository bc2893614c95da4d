use crate::dom;
use crate::frame::FrameFlags;
use simba_core::viewer::ProductViewer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed document-wide pointer movement to the product viewer.
pub fn wire_pointer(document: &web::Document, viewer: Rc<RefCell<ProductViewer>>) {
    dom::add_listener(document, "mousemove", move |ev| {
        let (Some(ev), Some(w)) = (ev.dyn_ref::<web::MouseEvent>(), web::window()) else {
            return;
        };
        let size = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        viewer.borrow_mut().set_pointer(
            ev.client_x() as f32,
            ev.client_y() as f32,
            size(w.inner_width()),
            size(w.inner_height()),
        );
    });
}

/// Drag on the viewer canvas to orbit the camera. Moves and releases are
/// tracked on the window so a drag may leave the canvas.
pub fn wire_orbit_drag(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    viewer: Rc<RefCell<ProductViewer>>,
) {
    dom::set_style(canvas, "touch-action", "none");
    {
        let viewer = viewer.clone();
        dom::add_listener(canvas, "pointerdown", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                ev.prevent_default();
                viewer
                    .borrow_mut()
                    .orbit
                    .begin_drag(ev.client_x() as f32, ev.client_y() as f32);
            }
        });
    }
    {
        let viewer = viewer.clone();
        let canvas = canvas.clone();
        dom::add_listener(window, "pointermove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let mut viewer = viewer.borrow_mut();
            if viewer.orbit.is_dragging() {
                viewer.orbit.drag_to(
                    ev.client_x() as f32,
                    ev.client_y() as f32,
                    canvas.client_height() as f32,
                );
            }
        });
    }
    for name in ["pointerup", "pointercancel"] {
        let viewer = viewer.clone();
        dom::add_listener(window, name, move |_| viewer.borrow_mut().orbit.end_drag());
    }
}

/// Window resizes are applied by the next frame.
pub fn wire_resize(window: &web::Window, flags: &FrameFlags) {
    let resized = flags.resized.clone();
    dom::add_listener(window, "resize", move |_| resized.set(true));
}

pub fn wire_visibility(document: &web::Document, flags: &FrameFlags) {
    let hidden = flags.hidden.clone();
    dom::add_listener(document, "visibilitychange", move |_| {
        let Some(document) = dom::window_document() else {
            return;
        };
        let now_hidden = document.hidden();
        hidden.set(now_hidden);
        if now_hidden {
            log::info!("[frame] tab hidden, pausing simulation");
        } else {
            log::info!("[frame] tab visible, resuming");
        }
    });
}
