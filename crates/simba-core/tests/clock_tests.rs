// Host-side tests for the frame clock.

use simba_core::clock::Clock;

#[test]
fn elapsed_is_the_sum_of_deltas() {
    let mut clock = Clock::new();
    let mut sum = 0.0;
    for d in [0.016, 0.033, 0.0, 0.5] {
        let tick = clock.advance(d);
        sum += d;
        assert!((tick.elapsed - sum).abs() < 1e-6);
        assert_eq!(tick.delta, d);
    }
    assert!((clock.elapsed() - sum).abs() < 1e-6);
}

#[test]
fn negative_and_non_finite_deltas_are_ignored() {
    let mut clock = Clock::new();
    clock.advance(1.0);
    // Time never runs backwards
    assert_eq!(clock.advance(-0.5).delta, 0.0);
    assert_eq!(clock.advance(f32::NAN).delta, 0.0);
    assert_eq!(clock.advance(f32::INFINITY).delta, 0.0);
    assert_eq!(clock.elapsed(), 1.0);
}

#[test]
fn wall_clock_tick_is_monotonic() {
    let mut clock = Clock::new();
    let mut last = 0.0;
    for _ in 0..100 {
        let tick = clock.tick();
        assert!(tick.delta >= 0.0);
        assert!(tick.elapsed >= last);
        last = tick.elapsed;
    }
}
