//! Scroll- and pointer-driven product viewer.

use crate::constants::*;
use crate::gpu::{push_viewer, DrawList, SceneUniforms};
use crate::lighting::{viewer_rig, LightRig};
use crate::quality::RenderSettings;
use crate::state::Camera;
use crate::theme::{Theme, ViewerLighting};
use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Progress of an element moving from "top enters viewport bottom" to
/// "bottom leaves viewport top".
pub fn scroll_progress(top: f32, height: f32, viewport_height: f32) -> f32 {
    let span = viewport_height + height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / span).clamp(0.0, 1.0)
}

/// Progress from "top enters viewport bottom" to "element centre reaches
/// viewport centre".
pub fn center_progress(top: f32, height: f32, viewport_height: f32) -> f32 {
    let span = (viewport_height + height) * 0.5;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / span).clamp(0.0, 1.0)
}

/// A condensation bead on the can surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Droplet {
    pub position: Vec3,
    pub scale: Vec3,
}

/// Scatter beads and short run-off trails on a cylinder of the viewer can.
pub fn condensation_layout<R: Rng + ?Sized>(rng: &mut R) -> Vec<Droplet> {
    let mut out = Vec::with_capacity(CONDENSATION_COUNT + CONDENSATION_TRAILS * 7);
    for _ in 0..CONDENSATION_COUNT {
        let angle = rng.gen::<f32>() * TAU;
        let height = (rng.gen::<f32>() * 2.0 - 1.0) * 1.2;
        let s = 0.5 + rng.gen::<f32>() * 1.5;
        out.push(Droplet {
            position: on_surface(angle, height),
            scale: Vec3::splat(s),
        });
    }
    for _ in 0..CONDENSATION_TRAILS {
        let len = 3 + rng.gen_range(0..5);
        let angle = rng.gen::<f32>() * TAU;
        let start = rng.gen::<f32>() * 1.8 - 0.9;
        for j in 0..len {
            let taper = 1.0 - j as f32 / len as f32;
            let s = taper * (0.8 + rng.gen::<f32>() * 0.8);
            out.push(Droplet {
                position: on_surface(angle, start - j as f32 * 0.1),
                scale: Vec3::new(s, s * 1.2, s),
            });
        }
    }
    out
}

#[inline]
fn on_surface(angle: f32, height: f32) -> Vec3 {
    Vec3::new(
        CONDENSATION_RADIUS * angle.cos(),
        height,
        CONDENSATION_RADIUS * angle.sin(),
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerPose {
    /// Euler angles (XYZ order), radians.
    pub rotation: Vec3,
    pub position_y: f32,
    pub scale: f32,
}

impl Default for ViewerPose {
    fn default() -> Self {
        Self {
            rotation: Vec3::new(0.0, VIEWER_BASE_YAW, 0.0),
            position_y: 0.0,
            scale: 1.0,
        }
    }
}

/// Camera orbit around the can: auto-rotation plus damped pointer drags.
///
/// Drag deltas accumulate in `pending` and bleed into the angles a fixed
/// share per frame, so the camera keeps gliding after release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    /// Angle around +Y, measured from +Z.
    pub azimuth: f32,
    /// Angle from +Y; `PI / 2` is level with the can.
    pub polar: f32,
    pub radius: f32,
    /// Unapplied (azimuth, polar) rotation.
    pending: Vec2,
    /// Last pointer position while a drag is active.
    grab: Option<Vec2>,
}

impl Orbit {
    pub fn new(radius: f32) -> Self {
        Self {
            azimuth: 0.0,
            polar: FRAC_PI_2,
            radius,
            pending: Vec2::ZERO,
            grab: None,
        }
    }

    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.grab = Some(Vec2::new(x, y));
    }

    /// A drag across the full element height turns the camera once around.
    pub fn drag_to(&mut self, x: f32, y: f32, element_height: f32) {
        let Some(from) = self.grab else {
            return;
        };
        let to = Vec2::new(x, y);
        if element_height > 0.0 {
            self.pending -= (to - from) * TAU / element_height;
        }
        self.grab = Some(to);
    }

    pub fn end_drag(&mut self) {
        self.grab = None;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    #[inline]
    pub fn pending(&self) -> Vec2 {
        self.pending
    }

    /// Advance by one frame and return the camera position.
    pub fn update(&mut self, delta: f32) -> Vec3 {
        // 2π/60 rad per second at speed 1
        self.azimuth += TAU / 60.0 * VIEWER_AUTO_ROTATE_SPEED * delta.max(0.0);
        self.azimuth += self.pending.x * VIEWER_ORBIT_DAMPING;
        self.polar += self.pending.y * VIEWER_ORBIT_DAMPING;
        self.pending *= 1.0 - VIEWER_ORBIT_DAMPING;
        self.azimuth = self.azimuth.rem_euclid(TAU);
        self.polar = self
            .polar
            .clamp(VIEWER_POLAR_MARGIN, PI - VIEWER_POLAR_MARGIN);
        self.eye()
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        Vec3::new(self.radius * sp * sa, self.radius * cp, self.radius * sp * ca)
    }
}

pub struct ProductViewer {
    pub pose: ViewerPose,
    pub droplets: Vec<Droplet>,
    pub camera: Camera,
    pub orbit: Orbit,
    /// Normalised pointer position in `[-1, 1]`.
    mouse: Vec2,
    lighting: ViewerLighting,
    label_ready: bool,
}

impl ProductViewer {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, theme: Theme) -> Self {
        Self {
            pose: ViewerPose::default(),
            droplets: condensation_layout(rng),
            camera: Camera::new(
                Vec3::new(0.0, 0.0, CAMERA_Z),
                Vec3::ZERO,
                VIEWER_FOVY_DEG,
                CAMERA_NEAR,
                CAMERA_FAR,
            ),
            orbit: Orbit::new(CAMERA_Z),
            mouse: Vec2::ZERO,
            lighting: ViewerLighting::initial(theme),
            label_ready: false,
        }
    }

    /// Pose from the can container's own scroll progress.
    pub fn apply_scroll(&mut self, progress: f32) {
        let p = progress.clamp(0.0, 1.0);
        self.pose.rotation.y = VIEWER_BASE_YAW + p * TAU;
        self.pose.rotation.x = (p * PI).sin() * VIEWER_TILT;
        self.pose.position_y = (p * PI * 4.0).sin() * VIEWER_FLOAT;
    }

    /// Scale-up as the products section scrolls into the centre.
    pub fn apply_section_scroll(&mut self, progress: f32) {
        self.pose.scale = 1.0 + progress.clamp(0.0, 1.0) * VIEWER_SECTION_SCALE;
    }

    /// Pointer position in client pixels.
    pub fn set_pointer(&mut self, client_x: f32, client_y: f32, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.mouse = Vec2::new(client_x / width * 2.0 - 1.0, client_y / height * 2.0 - 1.0);
        }
    }

    #[inline]
    pub fn mouse(&self) -> Vec2 {
        self.mouse
    }

    /// One frame of pointer easing plus the camera orbit.
    pub fn step(&mut self, delta: f32) {
        let r = &mut self.pose.rotation;
        r.y += (self.mouse.x * VIEWER_MOUSE_GAIN - r.y * VIEWER_MOUSE_PULL) * VIEWER_MOUSE_EASE;
        r.x += (self.mouse.y * VIEWER_MOUSE_GAIN - r.x * VIEWER_MOUSE_PULL) * VIEWER_MOUSE_EASE;

        self.camera.eye = self.orbit.update(delta);
    }

    /// Lights start from a fixed rig; the first switch moves to the themed table.
    pub fn set_theme(&mut self, theme: Theme) {
        self.lighting = ViewerLighting::for_theme(theme);
    }

    #[inline]
    pub fn lighting(&self) -> &ViewerLighting {
        &self.lighting
    }

    pub fn lights(&self) -> LightRig {
        viewer_rig(&self.lighting)
    }

    /// Called once the label texture is on the GPU.
    pub fn set_label_ready(&mut self) {
        self.label_ready = true;
    }

    #[inline]
    pub fn has_label(&self) -> bool {
        self.label_ready
    }

    pub fn draw_list(&self, list: &mut DrawList) {
        list.clear();
        push_viewer(list, self);
    }

    /// The viewer has no fog and no floor to shadow.
    pub fn uniforms(&self) -> SceneUniforms {
        SceneUniforms::new(
            &self.camera,
            &self.lights(),
            self.lighting.background,
            0.0,
            None,
        )
    }

    /// No bloom composer and no shadowed floor; only tone mapping and FXAA.
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            shadows: false,
            bloom_strength: 0.0,
            bloom_radius: 0.0,
            bloom_threshold: BLOOM_THRESHOLD,
            exposure: self.lighting.exposure,
            max_pixel_ratio: f32::INFINITY,
            fxaa: true,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.aspect = width.max(1.0) / height.max(1.0);
    }
}
