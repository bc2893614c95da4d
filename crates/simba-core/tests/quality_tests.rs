// Host-side tests for device detection and the quality valve.

use simba_core::constants::*;
use simba_core::quality::*;
use simba_core::theme::{apply_theme, Theme};

const IPHONE: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";

/// Feed `frames` evenly spaced frames over one second starting at `t0`.
fn run_second(q: &mut QualityController, t0: f32, frames: u32) -> Vec<QualityEvent> {
    let mut events = Vec::new();
    for i in 1..=frames {
        let t = t0 + i as f32 / frames as f32;
        if let Some(e) = q.sample(t) {
            events.push(e);
        }
    }
    events
}

#[test]
fn profile_detection() {
    assert_eq!(PerformanceProfile::detect(IPHONE, 3.0), PerformanceProfile::Low);
    assert_eq!(PerformanceProfile::detect(DESKTOP, 2.0), PerformanceProfile::Standard);
    // Low-density desktop displays count as low end
    assert_eq!(PerformanceProfile::detect(DESKTOP, 1.0), PerformanceProfile::Low);
}

#[test]
fn fast_frames_keep_normal_quality() {
    let mut q = QualityController::new(PerformanceProfile::Standard);
    for s in 0..5 {
        assert!(run_second(&mut q, s as f32, 60).is_empty());
    }
    assert_eq!(q.state(), QualityState::Normal);
    assert!(q.fps().is_some());
}

#[test]
fn slow_window_degrades_exactly_once() {
    let mut q = QualityController::new(PerformanceProfile::Standard);
    let events = run_second(&mut q, 0.0, 20);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], QualityEvent::Degraded { fps } if fps < FPS_DEGRADE_THRESHOLD));
    assert!(q.is_degraded());
    // Recovery never upgrades, and no second event fires
    for s in 1..5 {
        assert!(run_second(&mut q, s as f32, 120).is_empty());
        assert!(run_second(&mut q, s as f32 + 0.5, 5).is_empty());
    }
    assert_eq!(q.state(), QualityState::Degraded);
}

#[test]
fn low_profile_starts_degraded() {
    let mut q = QualityController::new(PerformanceProfile::Low);
    assert!(q.is_degraded());
    assert!(run_second(&mut q, 0.0, 10).is_empty());
}

#[test]
fn degraded_settings_override_theme_bloom() {
    let params = apply_theme(Theme::Dark);
    let normal = RenderSettings::resolve(&params, QualityState::Normal, PerformanceProfile::Standard);
    assert!(normal.shadows);
    assert_eq!(normal.bloom_strength, params.bloom_strength);
    assert!(normal.max_pixel_ratio.is_infinite());

    let degraded =
        RenderSettings::resolve(&params, QualityState::Degraded, PerformanceProfile::Standard);
    assert!(!degraded.shadows);
    assert_eq!(degraded.bloom_strength, DEGRADED_BLOOM_STRENGTH);
    assert_eq!(degraded.bloom_radius, DEGRADED_BLOOM_RADIUS);
    assert_eq!(degraded.bloom_threshold, BLOOM_THRESHOLD);

    let low = RenderSettings::resolve(&params, QualityState::Degraded, PerformanceProfile::Low);
    assert_eq!(low.max_pixel_ratio, 1.0);
}

#[test]
fn low_profile_keeps_theme_bloom_without_shadows() {
    let params = apply_theme(Theme::Dark);
    let low = RenderSettings::resolve(&params, QualityState::Degraded, PerformanceProfile::Low);
    assert!(!low.shadows);
    assert_eq!(low.bloom_strength, params.bloom_strength);
    assert_eq!(low.bloom_radius, params.bloom_radius);
    assert_eq!(low.exposure, params.exposure);
}
