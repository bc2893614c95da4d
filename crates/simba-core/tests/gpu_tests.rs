// Host-side tests for mesh generation and GPU data layouts.

use simba_core::gpu::*;
use simba_core::constants::*;
use simba_core::mesh;
use simba_core::scene::CanState;
use std::mem::size_of;

#[test]
fn uniform_layouts_are_16_byte_aligned() {
    // WGSL uniform structs round up to 16 bytes
    assert_eq!(size_of::<SceneUniforms>() % 16, 0);
    assert_eq!(size_of::<SceneUniforms>(), 320);
    assert_eq!(size_of::<MeshInstance>(), 112);
    assert_eq!(size_of::<mesh::Vertex>(), 32);
    assert_eq!(size_of::<PointInstance>(), 16);
}

#[test]
fn meshes_index_within_bounds() {
    for m in [mesh::cylinder(32), mesh::sphere(16, 12), mesh::plane()] {
        assert_eq!(m.indices.len() % 3, 0);
        assert!(m.indices.iter().all(|&i| (i as usize) < m.vertices.len()));
        for v in &m.vertices {
            let n = glam::Vec3::from(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-4);
        }
    }
}

#[test]
fn sphere_vertices_lie_on_unit_sphere() {
    let m = mesh::sphere(12, 8);
    for v in &m.vertices {
        assert!((glam::Vec3::from(v.position).length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn shadow_follows_the_can_until_it_sinks() {
    let mut can = CanState::default();
    // Parked far below the floor at startup
    assert!(BlobShadow::under_can(&can).is_none());
    can.position.y = -1.0;
    let s = BlobShadow::under_can(&can).unwrap();
    assert_eq!((s.x, s.z), (0.0, 0.0));
    assert!(s.radius > 0.0);
}

#[test]
fn only_the_floor_receives_the_shadow() {
    let mut list = DrawList::default();
    push_intro_can(&mut list, &CanState::default());
    let receivers = list
        .instances(MeshKind::Plane)
        .iter()
        .chain(list.instances(MeshKind::Cylinder))
        .filter(|i| i.color[3] > 0.5)
        .count();
    assert_eq!(receivers, 1);
}

#[test]
fn texture_coordinates_stay_in_unit_square() {
    for m in [mesh::cylinder(32), mesh::sphere(16, 12), mesh::plane()] {
        for v in &m.vertices {
            assert!(v.uv.iter().all(|c| (0.0..=1.0).contains(c)), "{:?}", v.uv);
        }
    }
}

#[test]
fn cylinder_side_wraps_the_label_once() {
    let m = mesh::cylinder(8);
    // side vertices come first, bottom then top per column
    let side = &m.vertices[..18];
    assert_eq!(side[0].uv, [0.0, 1.0]);
    assert_eq!(side[1].uv, [0.0, 0.0]);
    assert_eq!(side[16].uv, [1.0, 1.0]);
    assert_eq!(side[17].uv, [1.0, 0.0]);
    // the top edge of the image sits at the top of the can
    assert!(side.iter().all(|v| (v.uv[1] == 0.0) == (v.position[1] > 0.0)));
}

#[test]
fn intro_label_matches_panel_size() {
    let can = CanState::default();
    let mut list = DrawList::default();
    push_intro_can(&mut list, &can);
    let label = glam::Mat4::from_cols_array_2d(&list.planes[0].model);
    let width = label.x_axis.truncate().length();
    let height = label.z_axis.truncate().length();
    assert!((width - can.scale).abs() < 1e-5);
    assert!((height - 1.5 * can.scale).abs() < 1e-5);
    // the panel stands upright on the can's front
    assert!(label.z_axis.y.abs() > 0.99 * height);
}

#[test]
fn only_textured_instances_sample_the_label() {
    let plain = MeshInstance::new(glam::Mat4::IDENTITY, [1.0; 3], 0.0, 1.0, 0.0);
    assert_eq!(plain.texture, [0.0; 4]);
    let labelled = plain.with_label(VIEWER_LABEL_U_OFFSET);
    assert_eq!(labelled.texture[0], 1.0);
    assert_eq!(labelled.texture[1], 0.25);
}
