use crate::constants::*;
use crate::dom;
use crate::render::{self, FrameInput};
use instant::Instant;
use simba_core::gpu::DrawList;
use simba_core::quality::QualityEvent;
use simba_core::scene::SceneContext;
use simba_core::state::Viewport;
use simba_core::viewer::{center_progress, scroll_progress, ProductViewer};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Flags flipped by DOM listeners and consumed by the next frame.
#[derive(Clone, Default)]
pub struct FrameFlags {
    pub hidden: Rc<Cell<bool>>,
    pub intro_visible: Rc<Cell<bool>>,
    pub resized: Rc<Cell<bool>>,
    /// Decoded label image waiting for upload.
    pub label_image: Rc<RefCell<Option<web::HtmlImageElement>>>,
}

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneContext>>,
    pub viewer: Rc<RefCell<ProductViewer>>,

    pub intro_canvas: web::HtmlCanvasElement,
    pub viewer_canvas: Option<web::HtmlCanvasElement>,
    pub can_container: Option<web::Element>,

    pub intro_gpu: Option<render::GpuState>,
    pub viewer_gpu: Option<render::GpuState>,

    pub flags: FrameFlags,
    pub list: DrawList,
    pub last_instant: Option<Instant>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if self.flags.hidden.get() {
            // resume without a catch-up step
            self.last_instant = None;
            return;
        }
        let now = Instant::now();
        let dt = match self.last_instant {
            Some(prev) if now > prev => (now - prev).as_secs_f32().min(MAX_FRAME_DELTA_SEC),
            _ => 0.0,
        };
        self.last_instant = Some(now);

        if self.flags.resized.replace(false) {
            self.resize();
        }
        let label = self.flags.label_image.borrow_mut().take();
        if let Some(image) = label {
            self.upload_label(&image);
        }

        let report = self.scene.borrow_mut().frame_with(dt);
        if let Some(QualityEvent::Degraded { fps }) = report.quality {
            log::info!("[quality] {} fps, switching to reduced quality", fps);
            // the pixel-ratio cap may have changed with the settings
            self.resize();
        }

        {
            let mut viewer = self.viewer.borrow_mut();
            if let Some((own, section)) = self.viewer_scroll() {
                viewer.apply_scroll(own);
                viewer.apply_section_scroll(section);
            }
            viewer.step(dt);
        }

        if self.flags.intro_visible.get() {
            self.render_intro();
        }
        self.render_viewer();
    }

    fn upload_label(&mut self, image: &web::HtmlImageElement) {
        let Some(gpu) = self.viewer_gpu.as_mut() else {
            return;
        };
        match gpu.upload_label(image) {
            Ok(()) => self.viewer.borrow_mut().set_label_ready(),
            Err(e) => log::warn!("[viewer] label upload failed: {:?}", e),
        }
    }

    fn render_intro(&mut self) {
        let Some(gpu) = self.intro_gpu.as_mut() else {
            return;
        };
        let scene = self.scene.borrow();
        scene.draw_list(&mut self.list);
        let settings = scene.render_settings();
        let input = FrameInput {
            uniforms: scene.uniforms(),
            list: &self.list,
            clear_rgb: scene.theme_params().background,
            settings,
            exposure: settings.exposure,
            fxaa_texel: scene.viewport().fxaa_texel(),
        };
        gpu.resize_if_needed(self.intro_canvas.width(), self.intro_canvas.height());
        present(gpu, &input);
    }

    fn render_viewer(&mut self) {
        let (Some(gpu), Some(canvas)) = (self.viewer_gpu.as_mut(), self.viewer_canvas.as_ref())
        else {
            return;
        };
        let viewer = self.viewer.borrow();
        viewer.draw_list(&mut self.list);
        let settings = viewer.render_settings();
        let (w, h) = (canvas.width(), canvas.height());
        let input = FrameInput {
            uniforms: viewer.uniforms(),
            list: &self.list,
            clear_rgb: viewer.lighting().background,
            settings,
            exposure: settings.exposure,
            fxaa_texel: [1.0 / w.max(1) as f32, 1.0 / h.max(1) as f32],
        };
        gpu.resize_if_needed(w, h);
        present(gpu, &input);
    }

    /// Re-derive both canvases' sizes from the layout.
    pub fn resize(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let dpr = window.device_pixel_ratio() as f32;
        let inner = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as f32
        };
        let (w, h) = (inner(window.inner_width()), inner(window.inner_height()));
        {
            let mut scene = self.scene.borrow_mut();
            scene.resize(w, h, dpr);
            let (bw, bh) = scene.viewport().backing_size();
            dom::sync_canvas_backing_size(&self.intro_canvas, bw, bh);
        }
        if let (Some(container), Some(canvas)) = (&self.can_container, &self.viewer_canvas) {
            let (cw, ch) = (container.client_width() as f32, container.client_height() as f32);
            self.viewer.borrow_mut().resize(cw, ch);
            let max_ratio = self.viewer.borrow().render_settings().max_pixel_ratio;
            let (bw, bh) = Viewport::new(cw, ch, dpr, max_ratio).backing_size();
            dom::sync_canvas_backing_size(canvas, bw, bh);
        }
    }

    /// Progress of the can container through the viewport and of the
    /// products section towards the viewport centre.
    fn viewer_scroll(&self) -> Option<(f32, f32)> {
        let container = self.can_container.as_ref()?;
        let window = web::window()?;
        let vh = window.inner_height().ok()?.as_f64()? as f32;
        let rect = container.get_bounding_client_rect();
        let own = scroll_progress(rect.top() as f32, rect.height() as f32, vh);
        let section = window
            .document()
            .and_then(|d| d.get_element_by_id(PRODUCTS_ID))
            .map(|el| {
                let r = el.get_bounding_client_rect();
                center_progress(r.top() as f32, r.height() as f32, vh)
            })
            .unwrap_or(0.0);
        Some((own, section))
    }
}

fn present(gpu: &mut render::GpuState, input: &FrameInput<'_>) {
    match gpu.render(input) {
        Ok(()) => {}
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
        Err(e) => log::error!("render error: {:?}", e),
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, label: &str) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] {} WebGPU init error: {:?}", label, e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
