//! Enter flow, section navigation, history and scroll reveals.

use crate::constants::*;
use crate::dom;
use simba_core::nav::{
    is_enter_key, section_for_history, section_from_href, should_reveal, stagger_delay_ms,
    DEFAULT_SECTION, SCROLL_DEBOUNCE_MS,
};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct NavWiring {
    pub site_ready: Rc<Cell<bool>>,
    pub intro_visible: Rc<Cell<bool>>,
}

pub fn wire_navigation(document: &web::Document, w: NavWiring) {
    wire_enter(document, w.site_ready, w.intro_visible);

    dom::add_click_listeners(document, NAV_LINK_SELECTOR, |ev| {
        ev.prevent_default();
        let Some(document) = dom::window_document() else {
            return;
        };
        let href = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.get_attribute("href"))
            .unwrap_or_default();
        let Some(section) = section_from_href(&href) else {
            log::warn!("[nav] link without a section target: {:?}", href);
            return;
        };
        set_active_section(&document, section);
        if let Some(list) = dom::query(&document, NAV_LIST_SELECTOR) {
            if list.class_list().contains("active") {
                toggle_mobile_menu(&document);
            }
        }
        push_history(section, "", &format!("#{}", section));
    });

    match dom::query(document, MOBILE_TOGGLE_SELECTOR) {
        Some(toggle) => dom::add_click_listener(&toggle, |_| {
            if let Some(document) = dom::window_document() {
                toggle_mobile_menu(&document);
            }
        }),
        None => log::info!("[nav] no mobile menu toggle on this page"),
    }

    if let Some(window) = web::window() {
        dom::add_listener(&window, "popstate", |ev| {
            let Some(document) = dom::window_document() else {
                return;
            };
            let page = ev
                .dyn_ref::<web::PopStateEvent>()
                .map(|e| e.state())
                .and_then(|state| js_sys::Reflect::get(&state, &JsValue::from_str("page")).ok())
                .and_then(|v| v.as_string());
            set_active_section(&document, section_for_history(page.as_deref()));
        });

        let on_scroll = dom::debounced(SCROLL_DEBOUNCE_MS, reveal_on_scroll);
        let closure = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_enter(
    document: &web::Document,
    site_ready: Rc<Cell<bool>>,
    intro_visible: Rc<Cell<bool>>,
) {
    let Some(button) = dom::query(document, ENTER_BUTTON_SELECTOR) else {
        log::error!("[nav] {} not found; the site cannot be entered", ENTER_BUTTON_SELECTOR);
        return;
    };
    let entered = Rc::new(Cell::new(false));
    let enter = Rc::new(move || {
        if !site_ready.get() {
            log::warn!("[nav] trying to enter site before loading is complete");
            return;
        }
        if entered.replace(true) {
            return;
        }
        enter_site(intro_visible.clone());
    });
    dom::add_click_listener(&button, {
        let enter = enter.clone();
        move |_| enter()
    });
    dom::add_listener(document, "keydown", move |ev| {
        if let Some(key) = ev.dyn_ref::<web::KeyboardEvent>() {
            if is_enter_key(&key.code()) {
                enter();
            }
        }
    });
}

fn enter_site(intro_visible: Rc<Cell<bool>>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let intro = document.get_element_by_id(INTRO_CONTAINER_ID);
    if let Some(intro) = &intro {
        let _ = intro.class_list().add_1("fade-out");
        dom::set_style(intro, "opacity", "0");
        dom::set_style(intro, "transition", "opacity 1s ease");
    }
    dom::set_timeout(INTRO_FADE_MS, move || {
        if let Some(intro) = &intro {
            dom::set_style(intro, "display", "none");
        }
        intro_visible.set(false);
        if let Some(main) = dom::query(&document, MAIN_CONTENT_SELECTOR) {
            let _ = main.class_list().remove_1("hidden");
            let _ = main.class_list().add_1("fade-in");
        }
        set_active_section(&document, DEFAULT_SECTION);
        animate_main_content(&document);
        push_history("main", "Black Simba Energy", "#main");
        log::info!("[nav] entered site");
    });
}

pub fn set_active_section(document: &web::Document, section_id: &str) {
    for section in dom::query_all(document, SECTION_SELECTOR) {
        let _ = section.class_list().remove_1("active");
    }
    if let Some(target) = document.get_element_by_id(section_id) {
        let _ = target.class_list().add_1("active");
        if let Some(window) = web::window() {
            let opts = web::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
        animate_section_elements(&target);
    } else {
        log::warn!("[nav] no section #{}", section_id);
    }
    let wanted = format!("#{}", section_id);
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let _ = link.class_list().remove_1("active");
        if link.get_attribute("href").as_deref() == Some(wanted.as_str()) {
            let _ = link.class_list().add_1("active");
        }
    }
}

fn toggle_mobile_menu(document: &web::Document) {
    let Some(list) = dom::query(document, NAV_LIST_SELECTOR) else {
        return;
    };
    let open = list.class_list().toggle("active").unwrap_or(false);
    let icon = dom::query(document, MOBILE_TOGGLE_SELECTOR)
        .and_then(|t| t.query_selector("i").ok().flatten());
    if let Some(icon) = icon {
        let (from, to) = if open { ("fa-bars", "fa-times") } else { ("fa-times", "fa-bars") };
        let _ = icon.class_list().remove_1(from);
        let _ = icon.class_list().add_1(to);
    }
}

fn animate_main_content(document: &web::Document) {
    for (i, el) in dom::query_all(document, MAIN_REVEAL_SELECTOR)
        .into_iter()
        .enumerate()
    {
        dom::set_timeout(stagger_delay_ms(i, 0), move || {
            let _ = el.class_list().add_1("fade-in");
        });
    }
}

fn animate_section_elements(section: &web::Element) {
    let elements = dom::query_all_in(section, SECTION_REVEAL_SELECTOR);
    for el in &elements {
        dom::set_style(el, "opacity", "0");
    }
    for (i, el) in elements.into_iter().enumerate() {
        dom::set_timeout(stagger_delay_ms(i, 100), move || {
            dom::set_style(&el, "opacity", "1");
        });
    }
}

fn reveal_on_scroll() {
    let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
        return;
    };
    let Some(vh) = window.inner_height().ok().and_then(|v| v.as_f64()) else {
        return;
    };
    for el in dom::query_all(&document, SCROLL_REVEAL_SELECTOR) {
        if should_reveal(el.get_bounding_client_rect().top(), vh) {
            let _ = el.class_list().add_1("active");
        }
    }
}

fn push_history(page: &str, title: &str, url: &str) {
    let Some(history) = web::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let state = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&state, &JsValue::from_str("page"), &JsValue::from_str(page));
    if let Err(e) = history.push_state_with_url(&state, title, Some(url)) {
        log::warn!("[nav] pushState failed: {:?}", e);
    }
}
