// Host-side tests for the scroll-driven product viewer.

use rand::rngs::StdRng;
use rand::SeedableRng;
use simba_core::constants::*;
use simba_core::gpu::DrawList;
use simba_core::theme::{Theme, ViewerLighting};
use simba_core::viewer::*;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

fn viewer() -> ProductViewer {
    let mut rng = StdRng::seed_from_u64(9);
    ProductViewer::new(&mut rng, Theme::Dark)
}

#[test]
fn scroll_progress_bounds() {
    // Element just below the viewport
    assert_eq!(scroll_progress(800.0, 400.0, 800.0), 0.0);
    // Element just above the viewport
    assert_eq!(scroll_progress(-400.0, 400.0, 800.0), 1.0);
    assert!((scroll_progress(200.0, 400.0, 800.0) - 0.5).abs() < 1e-6);
    // Far outside stays clamped
    assert_eq!(scroll_progress(5000.0, 400.0, 800.0), 0.0);
    assert_eq!(scroll_progress(-5000.0, 400.0, 800.0), 1.0);
    assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
}

#[test]
fn center_progress_completes_at_viewport_centre() {
    // Centre of a 400px element at the centre of an 800px viewport
    assert!((center_progress(200.0, 400.0, 800.0) - 1.0).abs() < 1e-6);
    assert_eq!(center_progress(800.0, 400.0, 800.0), 0.0);
}

#[test]
fn scroll_pose_follows_progress() {
    let mut v = viewer();
    v.apply_scroll(0.0);
    assert!((v.pose.rotation.y - VIEWER_BASE_YAW).abs() < 1e-6);
    assert!(v.pose.rotation.x.abs() < 1e-6);
    v.apply_scroll(0.5);
    assert!((v.pose.rotation.y - (VIEWER_BASE_YAW + PI)).abs() < 1e-5);
    assert!((v.pose.rotation.x - VIEWER_TILT).abs() < 1e-6);
    v.apply_scroll(1.0);
    assert!((v.pose.rotation.y - (VIEWER_BASE_YAW + TAU)).abs() < 1e-5);
    assert!(v.pose.position_y.abs() < 1e-5);
}

#[test]
fn section_scroll_scales_up_to_limit() {
    let mut v = viewer();
    v.apply_section_scroll(0.0);
    assert_eq!(v.pose.scale, 1.0);
    v.apply_section_scroll(2.0);
    assert!((v.pose.scale - (1.0 + VIEWER_SECTION_SCALE)).abs() < 1e-6);
}

#[test]
fn pointer_is_normalised() {
    let mut v = viewer();
    v.set_pointer(0.0, 0.0, 1000.0, 500.0);
    assert_eq!(v.mouse(), glam::Vec2::new(-1.0, -1.0));
    v.set_pointer(1000.0, 250.0, 1000.0, 500.0);
    assert_eq!(v.mouse(), glam::Vec2::new(1.0, 0.0));
    // Degenerate sizes leave the last position alone
    v.set_pointer(10.0, 10.0, 0.0, 0.0);
    assert_eq!(v.mouse(), glam::Vec2::new(1.0, 0.0));
}

#[test]
fn camera_orbits_at_constant_radius() {
    let mut v = viewer();
    for _ in 0..600 {
        v.step(1.0 / 60.0);
        let r = (v.camera.eye.x.powi(2) + v.camera.eye.z.powi(2)).sqrt();
        assert!((r - CAMERA_Z).abs() < 1e-4);
    }
    assert!(v.camera.eye.x.abs() > 0.0);
}

#[test]
fn condensation_sits_on_the_can() {
    let v = viewer();
    assert!(v.droplets.len() >= CONDENSATION_COUNT + CONDENSATION_TRAILS * 3);
    for d in &v.droplets {
        let r = (d.position.x.powi(2) + d.position.z.powi(2)).sqrt();
        assert!((r - CONDENSATION_RADIUS).abs() < 1e-4);
    }
}

#[test]
fn draw_list_and_theme() {
    let mut v = viewer();
    let mut list = DrawList::default();
    v.draw_list(&mut list);
    assert_eq!(list.cylinders.len(), 3);
    assert_eq!(list.spheres.len(), v.droplets.len());
    assert!(list.points.is_empty());

    let dark = *v.lighting();
    v.set_theme(Theme::Light);
    assert_ne!(*v.lighting(), dark);
    // The viewer has no fog
    assert_eq!(v.uniforms().fog[3], 0.0);
}

#[test]
fn viewer_renders_without_bloom() {
    let mut v = viewer();
    let dark = v.render_settings();
    assert_eq!(dark.bloom_strength, 0.0);
    assert!(!dark.shadows);
    assert!(dark.fxaa);
    assert_eq!(dark.exposure, v.lighting().exposure);
    v.set_theme(Theme::Light);
    assert_eq!(v.render_settings().exposure, v.lighting().exposure);
}

#[test]
fn starts_with_fixed_lighting_until_first_switch() {
    let mut v = viewer();
    let start = *v.lighting();
    assert_eq!(start.directional_intensity, 2.0);
    assert_eq!(start.fill_intensity, 1.2);
    assert_eq!(start.exposure, 1.2);
    assert_eq!(v.render_settings().exposure, 1.2);
    // background already follows the theme
    assert_eq!(start.background, ViewerLighting::for_theme(Theme::Dark).background);

    v.set_theme(Theme::Dark);
    assert_eq!(*v.lighting(), ViewerLighting::for_theme(Theme::Dark));
    assert_eq!(v.render_settings().exposure, 1.5);
}

#[test]
fn drag_turns_the_camera_and_glides_to_a_stop() {
    let mut v = viewer();
    v.step(0.0);
    let before = v.orbit.azimuth;

    v.orbit.begin_drag(100.0, 100.0);
    // a quarter of the element height to the left
    v.orbit.drag_to(0.0, 100.0, 400.0);
    v.orbit.end_drag();
    assert!((v.orbit.pending().x - FRAC_PI_2).abs() < 1e-5);

    v.step(0.0);
    let first = v.orbit.azimuth - before;
    assert!((first - FRAC_PI_2 * VIEWER_ORBIT_DAMPING).abs() < 1e-5);
    v.step(0.0);
    let second = v.orbit.azimuth - before - first;
    // each frame applies a shrinking share of what is left
    assert!(second > 0.0 && second < first);

    for _ in 0..600 {
        v.step(0.0);
    }
    assert!(v.orbit.pending().length() < 1e-6);
    assert!((v.orbit.azimuth - (before + FRAC_PI_2)).abs() < 1e-3);
}

#[test]
fn moves_without_a_drag_are_ignored() {
    let mut v = viewer();
    assert!(!v.orbit.is_dragging());
    v.orbit.drag_to(300.0, 300.0, 400.0);
    assert_eq!(v.orbit.pending(), glam::Vec2::ZERO);
    v.orbit.begin_drag(0.0, 0.0);
    assert!(v.orbit.is_dragging());
    // zero-height elements cannot scale a drag
    v.orbit.drag_to(50.0, 50.0, 0.0);
    assert_eq!(v.orbit.pending(), glam::Vec2::ZERO);
}

#[test]
fn vertical_drag_stays_off_the_poles() {
    let mut v = viewer();
    v.orbit.begin_drag(0.0, 0.0);
    v.orbit.drag_to(0.0, 4000.0, 400.0);
    for _ in 0..600 {
        v.step(1.0 / 60.0);
        assert!(v.orbit.polar >= VIEWER_POLAR_MARGIN);
        assert!(v.orbit.polar <= PI - VIEWER_POLAR_MARGIN);
        assert!((v.camera.eye.length() - CAMERA_Z).abs() < 1e-4);
    }
    // dragging down lifts the camera over the can
    assert!(v.camera.eye.y > 0.0);
}

#[test]
fn auto_rotation_continues_during_a_drag() {
    let mut v = viewer();
    v.orbit.begin_drag(10.0, 10.0);
    v.step(1.0);
    let expected = TAU / 60.0 * VIEWER_AUTO_ROTATE_SPEED;
    assert!((v.orbit.azimuth - expected).abs() < 1e-5);
}

#[test]
fn body_shows_label_only_once_loaded() {
    let mut v = viewer();
    let mut list = DrawList::default();
    v.draw_list(&mut list);
    assert_eq!(list.cylinders[0].texture[0], 0.0);

    v.set_label_ready();
    v.draw_list(&mut list);
    let body = list.cylinders[0];
    assert_eq!(body.texture[0], 1.0);
    assert_eq!(body.texture[1], VIEWER_LABEL_U_OFFSET);
    assert_eq!(&body.color[..3], &[1.0, 1.0, 1.0]);
    // lid and tab stay untextured
    assert!(list.cylinders[1..].iter().all(|c| c.texture[0] == 0.0));
}
