// Host-side tests for the liquid splash system.

use simba_core::constants::*;
use simba_core::liquid::*;

#[test]
fn rise_fall_shape() {
    assert!(rise_fall(0.0).abs() < 1e-6);
    assert!(rise_fall(1.0).abs() < 1e-6);
    assert!((rise_fall(0.5) - 1.0).abs() < 1e-6);
    // Out-of-range progress is clamped, never negative
    assert!(rise_fall(-0.3) >= 0.0);
    assert!(rise_fall(1.7) >= 0.0);
}

#[test]
fn droplets_start_hidden_and_idle() {
    let sys = LiquidParticleSystem::new(20, 10.0, 3);
    assert_eq!(sys.len(), 20);
    for p in sys.particles() {
        assert_eq!(p.state, LiquidPhase::Idle);
        assert_eq!(p.pose.position.y, LIQUID_HIDDEN_Y);
    }
}

#[test]
fn begin_arms_every_droplet_with_stagger() {
    let mut sys = LiquidParticleSystem::new(5, 10.0, 3);
    sys.begin(2.0);
    for (i, p) in sys.particles().iter().enumerate() {
        let expected = 2.0 + LIQUID_LEAD_IN_SEC + i as f32 * 0.01;
        match p.state {
            LiquidPhase::Armed { at } => assert!((at - expected).abs() < 1e-5),
            other => panic!("expected armed, got {:?}", other),
        }
        assert_eq!(p.pose.position.y, LIQUID_BASE_Y);
    }
}

#[test]
fn nothing_moves_before_lead_in() {
    let mut sys = LiquidParticleSystem::new(10, 10.0, 3);
    sys.begin(0.0);
    sys.update(0.5);
    assert_eq!(sys.animating_count(), 0);
    sys.update(LIQUID_LEAD_IN_SEC + 0.2);
    assert!(sys.animating_count() > 0);
}

#[test]
fn droplets_stay_between_base_and_apex() {
    let mut sys = LiquidParticleSystem::new(50, 10.0, 11);
    sys.begin(0.0);
    let mut t = 0.0;
    while t < 30.0 {
        sys.update(t);
        for p in sys.particles() {
            if p.is_animating() {
                let y = p.pose.position.y;
                assert!(y >= LIQUID_BASE_Y - 1e-4);
                assert!(y <= LIQUID_BASE_Y + LIQUID_RISE_HEIGHT + 1e-4);
                assert!(p.pose.scale >= 1.0 && p.pose.scale <= 1.0 + LIQUID_APEX_SWELL + 1e-4);
            }
        }
        t += 1.0 / 60.0;
    }
}

#[test]
fn finished_droplets_are_rearmed_within_jitter() {
    let mut sys = LiquidParticleSystem::new(1, 10.0, 5);
    sys.begin(0.0);
    let speed = sys.particles()[0].speed;
    // Launch at the lead-in, finish after 1/speed seconds
    let start = LIQUID_LEAD_IN_SEC;
    sys.update(start);
    assert!(sys.particles()[0].is_animating());
    let done = start + 1.0 / speed + 0.01;
    sys.update(done);
    match sys.particles()[0].state {
        LiquidPhase::Armed { at } => {
            assert!(at >= done && at <= done + LIQUID_REARM_JITTER_SEC);
        }
        other => panic!("expected re-armed droplet, got {:?}", other),
    }
}

#[test]
fn truncate_is_one_way_and_idempotent() {
    let mut sys = LiquidParticleSystem::new(200, 10.0, 1);
    assert_eq!(sys.truncate(100), 100);
    assert_eq!(sys.len(), 100);
    // Second truncation is a no-op
    assert_eq!(sys.truncate(100), 0);
    assert_eq!(sys.len(), 100);
    // A larger cap never grows the pool back
    assert_eq!(sys.truncate(150), 0);
    assert_eq!(sys.capacity(), 100);
}

#[test]
fn truncate_below_count_keeps_everything() {
    let mut sys = LiquidParticleSystem::new(80, 10.0, 1);
    assert_eq!(sys.truncate(100), 0);
    assert_eq!(sys.len(), 80);
}

#[test]
fn tints_alternate() {
    let sys = LiquidParticleSystem::new(4, 10.0, 1);
    let tints: Vec<_> = sys.particles().iter().map(|p| p.tint).collect();
    assert_eq!(
        tints,
        vec![
            DropletTint::Gold,
            DropletTint::DarkGold,
            DropletTint::Gold,
            DropletTint::DarkGold
        ]
    );
}
