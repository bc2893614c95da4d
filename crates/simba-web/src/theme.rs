//! Theme switch, persisted preference and the `themeChanged` bridge into
//! both 3D scenes.

use crate::constants::*;
use crate::dom;
use simba_core::scene::SceneContext;
use simba_core::theme::{Theme, THEME_EVENT, THEME_STORAGE_KEY};
use simba_core::viewer::ProductViewer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn stored_theme() -> Theme {
    let value = storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_storage(value.as_deref())
}

fn store_theme(theme: Theme) {
    if let Some(s) = storage() {
        if s.set_item(THEME_STORAGE_KEY, theme.as_storage_str()).is_err() {
            log::warn!("[theme] could not persist preference");
        }
    }
}

fn apply_body_class(document: &web::Document, theme: Theme) {
    if let Some(body) = document.body() {
        let list = body.class_list();
        let _ = if theme.is_light() {
            list.add_1(LIGHT_THEME_CLASS)
        } else {
            list.remove_1(LIGHT_THEME_CLASS)
        };
    }
}

fn dispatch_theme_changed(document: &web::Document, theme: Theme) {
    let detail = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &detail,
        &JsValue::from_str("isLightTheme"),
        &JsValue::from_bool(theme.is_light()),
    );
    let init = web::CustomEventInit::new();
    init.set_detail(&detail);
    match web::CustomEvent::new_with_event_init_dict(THEME_EVENT, &init) {
        Ok(ev) => {
            let _ = document.dispatch_event(&ev);
        }
        Err(e) => log::error!("[theme] could not build {}: {:?}", THEME_EVENT, e),
    }
}

/// Listen for `themeChanged` and push the new theme into both scenes.
pub fn wire_theme_listener(
    document: &web::Document,
    scene: Rc<RefCell<SceneContext>>,
    viewer: Rc<RefCell<ProductViewer>>,
) {
    dom::add_listener(document, THEME_EVENT, move |ev| {
        let is_light = ev
            .dyn_ref::<web::CustomEvent>()
            .map(|e| e.detail())
            .and_then(|d| js_sys::Reflect::get(&d, &JsValue::from_str("isLightTheme")).ok())
            .and_then(|v| v.as_bool());
        let Some(is_light) = is_light else {
            log::warn!("[theme] {} without isLightTheme", THEME_EVENT);
            return;
        };
        let theme = Theme::from_is_light(is_light);
        scene.borrow_mut().set_theme(theme);
        viewer.borrow_mut().set_theme(theme);
        log::info!("[theme] switched to {:?}", theme);
    });
}

/// Apply the stored preference and wire the switch.
pub fn setup_theme_toggle(document: &web::Document) {
    let Some(switch) = document
        .get_element_by_id(THEME_SWITCH_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        log::error!("[theme] theme switch element not found");
        return;
    };

    let saved = stored_theme();
    if saved.is_light() {
        apply_body_class(document, saved);
        switch.set_checked(true);
        dispatch_theme_changed(document, saved);
    }

    let switch_in = switch.clone();
    dom::add_listener(&switch, "change", move |_| {
        let Some(document) = dom::window_document() else {
            return;
        };
        let theme = Theme::from_is_light(switch_in.checked());
        apply_body_class(&document, theme);
        store_theme(theme);
        dispatch_theme_changed(&document, theme);
    });
}
