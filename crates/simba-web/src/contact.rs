use crate::constants::*;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

const FORM_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

/// Log the submission, swap in a thank-you message and restore the form later.
pub fn wire_contact_form(document: &web::Document) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::info!("[contact] no #{} on this page", CONTACT_FORM_ID);
        return;
    };
    let form_in = form.clone();
    dom::add_listener(&form, "submit", move |ev| {
        ev.prevent_default();
        let form = &form_in;
        if let Ok(data) = web::FormData::new_with_form(form) {
            let values: Vec<String> = FORM_FIELDS
                .iter()
                .filter_map(|k| data.get(k).as_string().map(|v| format!("{}={:?}", k, v)))
                .collect();
            log::info!("[contact] form submitted: {}", values.join(", "));
        }

        let Some(document) = dom::window_document() else {
            return;
        };
        // the listener stays on the form element, so only its markup is swapped
        let markup = form.inner_html();
        form.set_inner_html("");
        if let Some(message) = dom::create_with_class(&document, "div", "success-message") {
            if let Some(icon) = dom::create_with_class(&document, "i", "fas fa-check-circle") {
                let _ = message.append_child(&icon);
            }
            if let Ok(p) = document.create_element("p") {
                p.set_text_content(Some(
                    "Thank you for your message! We'll get back to you soon.",
                ));
                let _ = message.append_child(&p);
            }
            let _ = form.append_child(&message);
        }
        let form = form.clone();
        dom::set_timeout(CONTACT_RESTORE_MS, move || form.set_inner_html(&markup));
    });
}
