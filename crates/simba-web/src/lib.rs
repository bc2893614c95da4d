#![cfg(target_arch = "wasm32")]
mod constants;
mod contact;
mod dom;
mod events;
mod frame;
mod loader;
mod nav;
mod render;
mod shop;
mod theme;

use constants::*;
use frame::{FrameContext, FrameFlags};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simba_core::gpu::DrawList;
use simba_core::quality::PerformanceProfile;
use simba_core::scene::{IntroConfig, SceneContext};
use simba_core::shop::Cart;
use simba_core::viewer::ProductViewer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("simba-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let intro_canvas: web::HtmlCanvasElement = document
        .get_element_by_id(INTRO_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", INTRO_CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let profile = PerformanceProfile::detect(&user_agent, window.device_pixel_ratio());
    let mut rng = StdRng::from_entropy();
    let theme = theme::stored_theme();
    let scene = Rc::new(RefCell::new(SceneContext::new(
        IntroConfig::for_profile(profile, rng.gen()),
        theme,
    )));
    let viewer = Rc::new(RefCell::new(ProductViewer::new(&mut rng, theme)));

    // Page wiring works without WebGPU
    theme::wire_theme_listener(&document, scene.clone(), viewer.clone());
    theme::setup_theme_toggle(&document);

    let flags = FrameFlags::default();
    flags.intro_visible.set(true);
    let loader = loader::Loader::new(&document, scene.clone());
    loader.start();
    nav::wire_navigation(
        &document,
        nav::NavWiring {
            site_ready: loader.site_ready.clone(),
            intro_visible: flags.intro_visible.clone(),
        },
    );
    shop::wire_shop(&document, Rc::new(RefCell::new(Cart::default())));
    contact::wire_contact_form(&document);
    events::wire_pointer(&document, viewer.clone());
    events::wire_resize(&window, &flags);
    events::wire_visibility(&document, &flags);

    let (can_container, viewer_canvas) = match ensure_can_container(&document) {
        Some((container, canvas)) => (Some(container), Some(canvas)),
        None => {
            log::warn!("[viewer] could not create #{}", CAN_CONTAINER_ID);
            (None, None)
        }
    };
    if let Some(canvas) = &viewer_canvas {
        events::wire_orbit_drag(&window, canvas, viewer.clone());
        loader::load_viewer_label(flags.label_image.clone());
    }

    let mut ctx = FrameContext {
        scene,
        viewer,
        intro_canvas,
        viewer_canvas,
        can_container,
        intro_gpu: None,
        viewer_gpu: None,
        flags,
        list: DrawList::default(),
        last_instant: None,
    };
    // backing sizes must be known before the surfaces are configured
    ctx.resize();
    ctx.intro_gpu = frame::init_gpu(&ctx.intro_canvas, "intro").await;
    if let Some(canvas) = ctx.viewer_canvas.clone() {
        ctx.viewer_gpu = frame::init_gpu(&canvas, "viewer").await;
    }
    if ctx.intro_gpu.is_none() && ctx.viewer_gpu.is_none() {
        log::warn!("[gpu] no 3D layer available; page stays static");
    }

    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}

/// Find or create the product viewer container and its canvas.
fn ensure_can_container(
    document: &web::Document,
) -> Option<(web::Element, web::HtmlCanvasElement)> {
    let container = match document.get_element_by_id(CAN_CONTAINER_ID) {
        Some(el) => el,
        None => {
            let el = dom::create_with_class(document, "div", CAN_CONTAINER_CLASS)?;
            el.set_id(CAN_CONTAINER_ID);
            let parent: web::Node = match document.get_element_by_id(HERO_ID) {
                Some(hero) => hero.into(),
                None => document.body()?.into(),
            };
            parent.append_child(&el).ok()?;
            el
        }
    };
    let existing = container
        .query_selector("canvas")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let canvas = match existing {
        Some(canvas) => canvas,
        None => {
            let canvas = document
                .create_element("canvas")
                .ok()?
                .dyn_into::<web::HtmlCanvasElement>()
                .ok()?;
            let _ = canvas.style().set_property("width", "100%");
            let _ = canvas.style().set_property("height", "100%");
            container.append_child(&canvas).ok()?;
            canvas
        }
    };
    Some((container, canvas))
}
