//! Store and product buttons, cart badge, notifications and the product modal.

use crate::constants::*;
use crate::dom;
use simba_core::shop::{added_message, parse_price, Cart, MODAL_PRICE, NOTIFICATION_MS};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const NUTRITION_FACTS: [&str; 4] = [
    "Energy: 50 kcal",
    "Caffeine: 30mg",
    "Taurine: 400mg",
    "B-Vitamins: B3, B6, B12",
];

pub fn wire_shop(document: &web::Document, cart: Rc<RefCell<Cart>>) {
    {
        let cart = cart.clone();
        dom::add_click_listeners(document, STORE_BUTTON_SELECTOR, move |ev| {
            ev.prevent_default();
            let Some(card) = dom::closest_from_event(&ev, ".store-card") else {
                return;
            };
            let name = dom::child_text(&card, "h3").unwrap_or_default();
            let price_text = dom::child_text(&card, "p").unwrap_or_default();
            let Some(price) = parse_price(&price_text) else {
                log::warn!("[shop] unreadable price {:?} for {}", price_text, name);
                return;
            };
            add_to_cart(&cart, &name, price);
        });
    }

    dom::add_click_listeners(document, PRODUCT_BUTTON_SELECTOR, move |ev| {
        ev.prevent_default();
        let Some(card) = dom::closest_from_event(&ev, ".product-card") else {
            return;
        };
        let name = dom::child_text(&card, "h3").unwrap_or_default();
        let description = dom::child_text(&card, "p").unwrap_or_default();
        show_product_modal(&name, &description, cart.clone());
    });
}

fn add_to_cart(cart: &Rc<RefCell<Cart>>, name: &str, price: f32) {
    let count = {
        let mut cart = cart.borrow_mut();
        cart.add(name, price);
        log::info!(
            "[shop] cart: {} items, total {:.2}",
            cart.count(),
            cart.total()
        );
        cart.count()
    };
    if let Some(document) = dom::window_document() {
        if let Some(badge) = dom::query(&document, CART_COUNT_SELECTOR) {
            badge.set_text_content(Some(&count.to_string()));
        }
    }
    show_notification(&added_message(name));
}

/// Append `el` to the body and reveal it shortly after.
fn fade_in(document: &web::Document, el: &web::Element) {
    if let Some(body) = document.body() {
        let _ = body.append_child(el);
    }
    let shown = el.clone();
    dom::set_timeout(POPUP_SHOW_MS, move || {
        let _ = shown.class_list().add_1("show");
    });
}

fn fade_out_and_remove(el: &web::Element, class: &str) {
    let _ = el.class_list().add_1(class);
    let el = el.clone();
    dom::set_timeout(POPUP_REMOVE_MS, move || el.remove());
}

fn show_notification(message: &str) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(note) = dom::create_with_class(&document, "div", "notification") else {
        return;
    };
    if let Some(icon) = dom::create_with_class(&document, "i", "fas fa-check-circle") {
        let _ = note.append_child(&icon);
    }
    if let Ok(p) = document.create_element("p") {
        p.set_text_content(Some(message));
        let _ = note.append_child(&p);
    }
    fade_in(&document, &note);
    dom::set_timeout(NOTIFICATION_MS, move || {
        let _ = note.class_list().remove_1("show");
        let note = note.clone();
        dom::set_timeout(POPUP_REMOVE_MS, move || note.remove());
    });
}

fn text_element(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Option<web::Element> {
    let el = dom::create_with_class(document, tag, class)?;
    el.set_text_content(Some(text));
    Some(el)
}

fn show_product_modal(name: &str, description: &str, cart: Rc<RefCell<Cart>>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let (Some(modal), Some(content)) = (
        dom::create_with_class(&document, "div", "modal"),
        dom::create_with_class(&document, "div", "modal-content"),
    ) else {
        return;
    };
    let close = text_element(&document, "span", "close-modal", "\u{00D7}");
    let details = dom::create_with_class(&document, "div", "product-details");
    let nutrition = dom::create_with_class(&document, "div", "nutrition-info");
    let add = text_element(
        &document,
        "button",
        "btn primary-btn",
        &format!("ADD TO CART - ${:.2}", MODAL_PRICE),
    );

    let children = [
        close.clone(),
        text_element(&document, "h2", "", name),
        text_element(&document, "p", "", description),
        details.clone(),
    ];
    for child in children.iter().flatten() {
        let _ = content.append_child(child);
    }
    if let (Some(details), Some(nutrition)) = (&details, &nutrition) {
        if let Some(h3) = text_element(&document, "h3", "", "Nutrition Facts") {
            let _ = nutrition.append_child(&h3);
        }
        if let Ok(ul) = document.create_element("ul") {
            for fact in NUTRITION_FACTS {
                if let Some(li) = text_element(&document, "li", "", fact) {
                    let _ = ul.append_child(&li);
                }
            }
            let _ = nutrition.append_child(&ul);
        }
        let _ = details.append_child(nutrition);
        if let Some(add) = &add {
            let _ = details.append_child(add);
        }
    }
    let _ = modal.append_child(&content);

    if let Some(close) = &close {
        let modal = modal.clone();
        dom::add_click_listener(close, move |_| fade_out_and_remove(&modal, "fade-out"));
    }
    if let Some(add) = &add {
        let modal = modal.clone();
        let name = name.to_string();
        dom::add_click_listener(add, move |_| {
            add_to_cart(&cart, &name, MODAL_PRICE);
            fade_out_and_remove(&modal, "fade-out");
        });
    }
    fade_in(&document, &modal);
}
