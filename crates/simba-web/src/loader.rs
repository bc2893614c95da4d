//! Loading screen: asset preload, progress bar and the completion latch.

use crate::constants::*;
use crate::dom;
use simba_core::loading::{
    AssetKind, LoadProgress, LoadTracker, MODEL_LOAD_MS, PROGRESS_EASE_FROM, SITE_ASSETS,
    SIMULATED_STEP_MS,
};
use simba_core::constants::VIEWER_LABEL_URL;
use simba_core::scene::SceneContext;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct Loader {
    tracker: Rc<RefCell<LoadTracker>>,
    progress_bar: Option<web::Element>,
    loader: Option<web::Element>,
    scene: Rc<RefCell<SceneContext>>,
    /// Set once the loader has faded away; the enter button checks it.
    pub site_ready: Rc<Cell<bool>>,
}

impl Loader {
    pub fn new(document: &web::Document, scene: Rc<RefCell<SceneContext>>) -> Self {
        let progress_bar = dom::query(document, PROGRESS_SELECTOR);
        let loader = dom::query(document, LOADER_SELECTOR);
        if progress_bar.is_none() {
            log::warn!("[loader] {} not found; progress is not shown", PROGRESS_SELECTOR);
        }
        Self {
            tracker: Rc::new(RefCell::new(LoadTracker::new(SITE_ASSETS.len()))),
            progress_bar,
            loader,
            scene,
            site_ready: Rc::new(Cell::new(false)),
        }
    }

    /// Kick off every declared asset, or the simulated ticker when none are.
    pub fn start(&self) {
        if SITE_ASSETS.is_empty() {
            self.simulate();
            return;
        }
        log::info!("[loader] preloading {} assets", SITE_ASSETS.len());
        for asset in SITE_ASSETS {
            let path = asset.path;
            match asset.kind {
                AssetKind::Image => self.load_image(path),
                AssetKind::Model => {
                    // no model decoder on this page; the fetch is simulated
                    let this = self.clone();
                    if dom::set_timeout(MODEL_LOAD_MS, move || this.settle(path, true)).is_none() {
                        self.settle(path, true);
                    }
                }
                AssetKind::Other => self.settle(path, true),
            }
        }
    }

    fn load_image(&self, path: &'static str) {
        let Ok(img) = web::HtmlImageElement::new() else {
            self.settle(path, false);
            return;
        };
        let on_load = {
            let this = self.clone();
            Closure::once_into_js(move || this.settle(path, true))
        };
        let on_error = {
            let this = self.clone();
            Closure::once_into_js(move || this.settle(path, false))
        };
        img.set_onload(Some(on_load.unchecked_ref()));
        img.set_onerror(Some(on_error.unchecked_ref()));
        img.set_src(path);
    }

    fn simulate(&self) {
        let this = self.clone();
        dom::set_timeout(SIMULATED_STEP_MS, move || {
            let progress = this.tracker.borrow_mut().step();
            this.apply(progress);
            if !this.tracker.borrow().is_complete() {
                this.simulate();
            }
        });
    }

    fn settle(&self, key: &str, ok: bool) {
        let progress = self.tracker.borrow_mut().settle(key, ok);
        if let Some(p) = progress {
            self.apply(p);
        }
    }

    fn apply(&self, progress: LoadProgress) {
        if let Some(bar) = &self.progress_bar {
            dom::set_style(bar, "width", &format!("{}%", progress.percent));
            if progress.percent > PROGRESS_EASE_FROM {
                dom::set_style(bar, "transition", "width 0.5s ease-out");
            }
        }
        if progress.just_completed {
            self.complete();
        }
    }

    fn complete(&self) {
        log::info!("[loader] all assets settled");
        if let Some(loader) = &self.loader {
            dom::set_style(loader, "opacity", "0");
            dom::set_style(loader, "transition", "opacity 0.5s ease");
        }
        let loader = self.loader.clone();
        let ready = self.site_ready.clone();
        dom::set_timeout(LOADER_FADE_MS, move || {
            if let Some(loader) = &loader {
                dom::set_style(loader, "display", "none");
            }
            ready.set(true);
        });
        if let Err(e) = self.scene.borrow_mut().on_loading_complete() {
            log::error!("[loader] intro could not start: {}", e);
        }
    }
}

/// Decode the viewer label off the loading path; the frame loop uploads it.
/// On failure the can keeps its flat finish.
pub fn load_viewer_label(slot: Rc<RefCell<Option<web::HtmlImageElement>>>) {
    let Ok(img) = web::HtmlImageElement::new() else {
        log::warn!("[viewer] could not create label image");
        return;
    };
    let on_load = {
        let img = img.clone();
        Closure::once_into_js(move || {
            slot.borrow_mut().replace(img);
        })
    };
    let on_error = Closure::once_into_js(move || {
        log::warn!("[viewer] label {} failed to load; using flat colour", VIEWER_LABEL_URL);
    });
    img.set_onload(Some(on_load.unchecked_ref()));
    img.set_onerror(Some(on_error.unchecked_ref()));
    img.set_src(VIEWER_LABEL_URL);
}
