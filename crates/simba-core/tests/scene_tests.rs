// Host-side tests for the intro scene context.

use simba_core::constants::*;
use simba_core::gpu::DrawList;
use simba_core::quality::{PerformanceProfile, QualityEvent, QualityState};
use simba_core::scene::{IntroConfig, SceneContext};
use simba_core::theme::{apply_theme, Theme};

fn scene() -> SceneContext {
    SceneContext::new(IntroConfig::default(), Theme::Dark)
}

/// Run `seconds` of frames at `fps`, returning any quality events.
fn run(ctx: &mut SceneContext, seconds: f32, fps: f32) -> Vec<QualityEvent> {
    let frames = (seconds * fps).round() as usize;
    (0..frames)
        .filter_map(|_| ctx.frame_with(1.0 / fps).quality)
        .collect()
}

#[test]
fn config_follows_profile() {
    let std = IntroConfig::for_profile(PerformanceProfile::Standard, 1);
    let low = IntroConfig::for_profile(PerformanceProfile::Low, 1);
    assert_eq!(std.liquid_count, LIQUID_COUNT);
    assert_eq!(low.liquid_count, LIQUID_COUNT_LOW);
    assert!(low.liquid_stagger_ms > std.liquid_stagger_ms);
}

#[test]
fn can_waits_below_the_floor_until_loading_completes() {
    let mut ctx = scene();
    run(&mut ctx, 5.0, 60.0);
    assert_eq!(ctx.objects.can.position.y, CAN_START_Y);
    assert_eq!(ctx.liquid.animating_count(), 0);
    assert!(!ctx.intro_started());
}

#[test]
fn can_rises_to_rest_after_delay() {
    let mut ctx = scene();
    ctx.on_loading_complete().unwrap();
    run(&mut ctx, CAN_RISE_DELAY_SEC - 0.1, 60.0);
    assert_eq!(ctx.objects.can.position.y, CAN_START_Y);
    run(&mut ctx, 0.2 + CAN_RISE_DURATION_SEC, 60.0);
    assert_eq!(ctx.objects.can.position.y, CAN_REST_Y);
    assert!(ctx.tweens.is_empty());
}

#[test]
fn loading_complete_is_idempotent() {
    let mut ctx = scene();
    ctx.on_loading_complete().unwrap();
    ctx.on_loading_complete().unwrap();
    assert_eq!(ctx.tweens.len(), 1);
}

#[test]
fn can_spins_with_time() {
    let mut ctx = scene();
    run(&mut ctx, 2.0, 60.0);
    let yaw = ctx.objects.can.rotation.y;
    assert!((yaw - 2.0 * CAN_SPIN_RAD_PER_SEC).abs() < 1e-3);
}

#[test]
fn liquid_erupts_after_lead_in() {
    let mut ctx = scene();
    ctx.on_loading_complete().unwrap();
    run(&mut ctx, LIQUID_LEAD_IN_SEC + 0.5, 60.0);
    assert!(ctx.liquid.animating_count() > 0);
}

#[test]
fn slow_frames_cut_liquid_to_cap() {
    let mut ctx = scene();
    ctx.on_loading_complete().unwrap();
    assert_eq!(ctx.liquid.len(), LIQUID_COUNT);
    let events = run(&mut ctx, 1.5, 20.0);
    assert_eq!(events.len(), 1);
    assert_eq!(ctx.quality().state(), QualityState::Degraded);
    assert_eq!(ctx.liquid.len(), DEGRADED_LIQUID_CAP);

    // Instances come from the live pool only
    let mut list = DrawList::default();
    ctx.draw_list(&mut list);
    assert_eq!(list.spheres.len(), DEGRADED_LIQUID_CAP);

    // Calling the reduction again changes nothing
    assert_eq!(ctx.reduce_liquid_particles(), 0);
    run(&mut ctx, 3.0, 60.0);
    assert_eq!(ctx.liquid.len(), DEGRADED_LIQUID_CAP);
    assert_eq!(ctx.quality().state(), QualityState::Degraded);
}

#[test]
fn degradation_switches_off_shadows() {
    let mut ctx = scene();
    assert!(ctx.render_settings().shadows);
    run(&mut ctx, 1.5, 10.0);
    let s = ctx.render_settings();
    assert!(!s.shadows);
    assert_eq!(s.bloom_strength, DEGRADED_BLOOM_STRENGTH);
    assert_eq!(ctx.uniforms().shadow[3], 0.0);
}

#[test]
fn low_profile_starts_with_theme_bloom_and_no_shadows() {
    let mut ctx = SceneContext::new(
        IntroConfig::for_profile(PerformanceProfile::Low, 1),
        Theme::Dark,
    );
    let dark = apply_theme(Theme::Dark);
    let s = ctx.render_settings();
    assert!(!s.shadows);
    assert_eq!(s.bloom_strength, dark.bloom_strength);
    assert_eq!(s.bloom_radius, dark.bloom_radius);
    assert_eq!(ctx.uniforms().shadow[3], 0.0);

    // A slow second never fires a second transition on a Low device
    assert!(run(&mut ctx, 1.5, 10.0).is_empty());
    assert_eq!(ctx.render_settings().bloom_strength, dark.bloom_strength);

    ctx.set_theme(Theme::Light);
    let light = apply_theme(Theme::Light);
    assert_eq!(ctx.render_settings().bloom_strength, light.bloom_strength);
}

#[test]
fn theme_switch_restores_values() {
    let mut ctx = scene();
    let dark = *ctx.theme_params();
    ctx.set_theme(Theme::Light);
    assert_eq!(*ctx.theme_params(), apply_theme(Theme::Light));
    assert!(ctx.render_settings().exposure > dark.exposure);
    ctx.set_theme(Theme::Dark);
    assert_eq!(*ctx.theme_params(), dark);
    assert_eq!(ctx.theme(), Theme::Dark);
}

#[test]
fn resize_updates_aspect_and_caps_pixel_ratio() {
    let mut ctx = SceneContext::new(
        IntroConfig::for_profile(PerformanceProfile::Low, 3),
        Theme::Dark,
    );
    ctx.resize(1600.0, 800.0, 3.0);
    assert!((ctx.camera.aspect - 2.0).abs() < 1e-6);
    assert_eq!(ctx.viewport().pixel_ratio, 1.0);
    assert_eq!(ctx.viewport().backing_size(), (1600, 800));

    let mut ctx = scene();
    ctx.resize(800.0, 600.0, 2.0);
    assert_eq!(ctx.viewport().backing_size(), (1600, 1200));
}

#[test]
fn draw_list_holds_can_floor_liquid_and_background() {
    let ctx = scene();
    let mut list = DrawList::default();
    ctx.draw_list(&mut list);
    assert_eq!(list.cylinders.len(), 1);
    assert_eq!(list.planes.len(), 2);
    assert_eq!(list.spheres.len(), LIQUID_COUNT);
    assert_eq!(list.points.len(), BACKGROUND_COUNT);
}

#[test]
fn wall_clock_frames_move_forward() {
    let mut ctx = scene();
    let first = ctx.frame();
    let second = ctx.frame();
    assert!(first.tick.delta >= 0.0);
    assert!(second.tick.elapsed >= first.tick.elapsed);
    assert!(ctx.elapsed() >= second.tick.elapsed);
}
