// Host-side tests for the background particle shell.

use rand::rngs::StdRng;
use rand::SeedableRng;
use simba_core::background::ParticleField;
use simba_core::constants::*;
use simba_core::quality::PerformanceProfile;

fn field(count: usize) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(7);
    ParticleField::create(&mut rng, count, 20.0..50.0, 0.01..0.04, 0.05)
}

#[test]
fn radius_and_height_preserved_over_time() {
    let mut f = field(200);
    let origins: Vec<_> = f.particles().iter().map(|p| p.origin).collect();
    for t in [0.0, 1.0, 12.5, 600.0] {
        f.update(t);
        for (p, o) in f.positions().iter().zip(&origins) {
            // Rotation about Y keeps the distance from the axis and the y value
            let r0 = (o.x * o.x + o.z * o.z).sqrt();
            let r1 = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r0 - r1).abs() < 1e-3);
            assert_eq!(p.y, o.y);
        }
    }
}

#[test]
fn points_stay_within_the_shell() {
    let f = field(500);
    for p in f.particles() {
        let r = p.origin.length();
        assert!(r >= 20.0 - 1e-3 && r <= 50.0 + 1e-3, "radius {}", r);
        assert!(p.angular_speed >= 0.01 && p.angular_speed <= 0.04);
    }
}

#[test]
fn position_is_a_pure_function_of_elapsed() {
    let mut a = field(50);
    let mut b = field(50);
    // Different step histories, same final time
    for t in [0.5, 3.0, 9.0] {
        a.update(t);
    }
    b.update(9.0);
    for (pa, pb) in a.positions().iter().zip(b.positions()) {
        assert!((*pa - *pb).length() < 1e-5);
    }
}

#[test]
fn low_profile_halves_count_and_enlarges_points() {
    let mut rng = StdRng::seed_from_u64(1);
    let standard = ParticleField::for_profile(&mut rng, PerformanceProfile::Standard);
    let low = ParticleField::for_profile(&mut rng, PerformanceProfile::Low);
    assert_eq!(standard.len(), BACKGROUND_COUNT);
    assert_eq!(low.len(), BACKGROUND_COUNT / 2);
    assert!(low.point_size() > standard.point_size());
}

#[test]
fn empty_field_is_fine() {
    let mut f = field(0);
    f.update(10.0);
    assert!(f.is_empty());
    assert!(f.positions().is_empty());
}
