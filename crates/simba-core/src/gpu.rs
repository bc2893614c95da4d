//! Packed uniform and instance layouts shared with the WGSL shaders.
//!
//! Builders here turn scene state into plain `Pod` data so the frontend only
//! uploads buffers. Instances are rebuilt from the live pools every frame;
//! nothing keeps per-droplet GPU handles.

use crate::background::ParticleField;
use crate::constants::*;
use crate::lighting::LightRig;
use crate::liquid::LiquidParticleSystem;
use crate::scene::CanState;
use crate::state::Camera;
use crate::viewer::ProductViewer;
use glam::{EulerRot, Mat4, Quat, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshInstance {
    pub model: [[f32; 4]; 4],
    /// rgb, w = 1 when the surface receives the blob shadow
    pub color: [f32; 4],
    /// metalness, roughness, emissive, opacity
    pub material: [f32; 4],
    /// x = 1 samples the label texture, y = u offset
    pub texture: [f32; 4],
}

impl MeshInstance {
    pub fn new(model: Mat4, rgb: [f32; 3], metalness: f32, roughness: f32, emissive: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [rgb[0], rgb[1], rgb[2], 0.0],
            material: [metalness, roughness, emissive, 1.0],
            texture: [0.0; 4],
        }
    }

    /// Multiply the base colour by the label texture, shifted by `u_offset`.
    pub fn with_label(mut self, u_offset: f32) -> Self {
        self.texture = [1.0, u_offset, 0.0, 0.0];
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.material[3] = opacity;
        self
    }

    pub fn receiving_shadow(mut self) -> Self {
        self.color[3] = 1.0;
        self
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
    pub size: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightPacked {
    /// xyz = direction or position, w = intensity (directional) or range (point)
    pub vec: [f32; 4],
    /// rgb premultiplied by intensity
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
    pub ambient: [f32; 4],
    /// rgb, density
    pub fog: [f32; 4],
    pub directional: [LightPacked; 2],
    pub points: [LightPacked; 2],
    /// xyz position, w range
    pub spot_pos: [f32; 4],
    /// xyz direction, w cos(outer)
    pub spot_dir: [f32; 4],
    /// rgb premultiplied, w cos(inner)
    pub spot_color: [f32; 4],
    /// caster x, caster z, caster radius, enabled
    pub shadow: [f32; 4],
    /// rgb tint, opacity
    pub point_color: [f32; 4],
}

#[inline]
fn premul(rgb: [f32; 3], k: f32) -> [f32; 4] {
    [rgb[0] * k, rgb[1] * k, rgb[2] * k, 1.0]
}

/// Contact shadow cast onto the floor by a single upright object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobShadow {
    pub x: f32,
    pub z: f32,
    pub radius: f32,
}

impl BlobShadow {
    /// Shadow of the intro can; shrinks away as the can sinks below the floor.
    pub fn under_can(can: &CanState) -> Option<Self> {
        let lift = can.position.y - CAN_HEIGHT * 0.5 * can.scale - FLOOR_Y;
        if lift < -CAN_HEIGHT {
            return None;
        }
        Some(Self {
            x: can.position.x,
            z: can.position.z,
            radius: CAN_RADIUS * can.scale * 1.6,
        })
    }
}

impl SceneUniforms {
    pub fn new(
        camera: &Camera,
        lights: &LightRig,
        fog_rgb: [f32; 3],
        fog_density: f32,
        shadow: Option<BlobShadow>,
    ) -> Self {
        let dir = |i: usize| {
            let d = lights.directional[i];
            LightPacked {
                vec: [d.direction.x, d.direction.y, d.direction.z, d.intensity],
                color: premul(d.color, d.intensity),
            }
        };
        let point = |i: usize| {
            let p = lights.points[i];
            LightPacked {
                vec: [p.position.x, p.position.y, p.position.z, p.range],
                color: premul(p.color, p.intensity),
            }
        };
        let s = lights.spot;
        let spot_color = premul(s.color, s.intensity);
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            eye: [camera.eye.x, camera.eye.y, camera.eye.z, 1.0],
            ambient: [lights.ambient[0], lights.ambient[1], lights.ambient[2], 1.0],
            fog: [fog_rgb[0], fog_rgb[1], fog_rgb[2], fog_density],
            directional: [dir(0), dir(1)],
            points: [point(0), point(1)],
            spot_pos: [s.position.x, s.position.y, s.position.z, s.range],
            spot_dir: [s.direction.x, s.direction.y, s.direction.z, s.cos_outer],
            spot_color: [spot_color[0], spot_color[1], spot_color[2], s.cos_inner],
            shadow: match shadow {
                Some(b) => [b.x, b.z, b.radius, 1.0],
                None => [0.0; 4],
            },
            point_color: {
                let g = hex_to_rgb(GOLD_HEX);
                [g[0], g[1], g[2], BACKGROUND_OPACITY]
            },
        }
    }
}

/// Unit meshes the renderer knows how to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshKind {
    /// Closed cylinder of radius 1 and height 1, centred on the origin.
    Cylinder,
    /// Sphere of radius 1.
    Sphere,
    /// Quad in the XZ plane, side 1.
    Plane,
}

/// Instances grouped per unit mesh, in draw order.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub cylinders: Vec<MeshInstance>,
    pub spheres: Vec<MeshInstance>,
    pub planes: Vec<MeshInstance>,
    pub points: Vec<PointInstance>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.cylinders.clear();
        self.spheres.clear();
        self.planes.clear();
        self.points.clear();
    }

    pub fn instances(&self, kind: MeshKind) -> &[MeshInstance] {
        match kind {
            MeshKind::Cylinder => &self.cylinders,
            MeshKind::Sphere => &self.spheres,
            MeshKind::Plane => &self.planes,
        }
    }
}

fn euler_quat(rotation: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

/// Intro can: dark metallic body with a gold label panel, plus the floor.
pub fn push_intro_can(list: &mut DrawList, can: &CanState) {
    let base = Mat4::from_scale_rotation_translation(
        Vec3::splat(can.scale),
        euler_quat(can.rotation),
        can.position,
    );
    list.cylinders.push(MeshInstance::new(
        base * Mat4::from_scale(Vec3::new(CAN_RADIUS, CAN_HEIGHT, CAN_RADIUS)),
        hex_to_rgb(CAN_BODY_HEX),
        0.8,
        0.2,
        0.0,
    ));
    // label panel sits just proud of the body
    let label = base
        * Mat4::from_translation(Vec3::new(0.0, 0.0, CAN_RADIUS + 0.01))
        * Mat4::from_rotation_x(std::f32::consts::FRAC_PI_2)
        * Mat4::from_scale(Vec3::new(1.0, 0.01, 1.5));
    list.planes.push(MeshInstance::new(label, hex_to_rgb(GOLD_HEX), 0.0, 1.0, 1.0));
    list.planes.push(MeshInstance::new(
        Mat4::from_translation(Vec3::new(0.0, FLOOR_Y, 0.0))
            * Mat4::from_scale(Vec3::new(FLOOR_SIZE, 1.0, FLOOR_SIZE)),
        hex_to_rgb(FLOOR_HEX),
        0.2,
        0.7,
        0.0,
    )
    .receiving_shadow());
}

pub fn push_liquid(list: &mut DrawList, liquid: &LiquidParticleSystem) {
    list.spheres.extend(liquid.particles().iter().map(|p| {
        let s = p.size * p.pose.scale;
        MeshInstance::new(
            Mat4::from_scale_rotation_translation(Vec3::splat(s), Quat::IDENTITY, p.pose.position),
            p.tint.rgb(),
            0.5,
            0.1,
            LIQUID_EMISSIVE,
        )
    }));
}

pub fn push_background(list: &mut DrawList, field: &ParticleField) {
    let size = field.point_size();
    list.points.extend(field.positions().iter().map(|p| PointInstance {
        position: p.to_array(),
        size,
    }));
}

/// Viewer can: body, lid, pull tab and condensation beads.
///
/// The body shows the label artwork once it has loaded and a flat dark
/// finish until then.
pub fn push_viewer(list: &mut DrawList, viewer: &ProductViewer) {
    let pose = viewer.pose;
    let base = Mat4::from_scale_rotation_translation(
        Vec3::splat(pose.scale),
        euler_quat(pose.rotation),
        Vec3::new(0.0, pose.position_y, 0.0),
    );
    let body = base
        * Mat4::from_scale(Vec3::new(
            VIEWER_CAN_RADIUS,
            VIEWER_CAN_HEIGHT,
            VIEWER_CAN_RADIUS,
        ));
    list.cylinders.push(if viewer.has_label() {
        MeshInstance::new(body, [1.0, 1.0, 1.0], 0.6, 0.2, VIEWER_LABEL_EMISSIVE)
            .with_label(VIEWER_LABEL_U_OFFSET)
    } else {
        MeshInstance::new(body, hex_to_rgb(0x1A1A1A), 0.6, 0.2, 0.2)
    });
    list.cylinders.push(MeshInstance::new(
        base * Mat4::from_translation(Vec3::new(0.0, VIEWER_CAN_HEIGHT * 0.5, 0.0))
            * Mat4::from_scale(Vec3::new(VIEWER_CAN_RADIUS, 0.1, VIEWER_CAN_RADIUS)),
        hex_to_rgb(0x888888),
        0.9,
        0.1,
        0.0,
    ));
    list.cylinders.push(MeshInstance::new(
        base * Mat4::from_translation(Vec3::new(0.0, 1.3, 0.4))
            * Mat4::from_scale(Vec3::new(0.15, 0.05, 0.1)),
        hex_to_rgb(0xCCCCCC),
        1.0,
        0.2,
        0.0,
    ));
    list.spheres.extend(viewer.droplets.iter().map(|d| {
        MeshInstance::new(
            base * Mat4::from_translation(d.position)
                * Mat4::from_scale(d.scale * CONDENSATION_DROPLET_SIZE),
            [1.0, 1.0, 1.0],
            0.0,
            0.1,
            0.0,
        )
        .with_opacity(0.7)
    }));
}
