use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a click handler to every element matching `selector`.
pub fn add_click_listeners(
    document: &web::Document,
    selector: &str,
    handler: impl Fn(web::MouseEvent) + 'static,
) {
    let handler = Rc::new(handler);
    for el in query_all(document, selector) {
        add_click_listener(&el, {
            let handler = handler.clone();
            move |ev| handler(ev)
        });
    }
}

pub fn add_click_listener(
    target: &web::EventTarget,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// One-shot `setTimeout`; returns the handle when the window accepted it.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        .ok()
}

/// Wrap `f` so that bursts of calls collapse into one, `ms` after the last.
pub fn debounced(ms: i32, f: impl Fn() + 'static) -> impl FnMut() + 'static {
    let f = Rc::new(f);
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    move || {
        if let (Some(id), Some(w)) = (pending.take(), web::window()) {
            w.clear_timeout_with_handle(id);
        }
        let f = f.clone();
        let pending_done = pending.clone();
        let id = set_timeout(ms, move || {
            pending_done.set(None);
            f();
        });
        pending.set(id);
    }
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
pub fn as_html(el: &web::Element) -> Option<&web::HtmlElement> {
    el.dyn_ref::<web::HtmlElement>()
}

/// Set one inline style property, ignoring elements that are not HTML.
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = as_html(el) {
        let _ = html.style().set_property(property, value);
    }
}

/// Text of the first `selector` match under `root`, trimmed.
pub fn child_text(root: &web::Element, selector: &str) -> Option<String> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .map(|t| t.trim().to_string())
}

/// `closest(selector)` from an event's target.
pub fn closest_from_event(ev: &web::Event, selector: &str) -> Option<web::Element> {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}

pub fn create_with_class(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> Option<web::Element> {
    let el = document.create_element(tag).ok()?;
    el.set_class_name(class);
    Some(el)
}

/// Size the canvas backing store to `width` x `height` physical pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    if canvas.width() != width {
        canvas.set_width(width.max(1));
    }
    if canvas.height() != height {
        canvas.set_height(height.max(1));
    }
}
