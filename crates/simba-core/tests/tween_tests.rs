// Host-side tests for the tween engine.

use simba_core::tween::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Prop {
    X,
    Y,
    Missing,
}

#[derive(Default)]
struct Target {
    x: f32,
    y: f32,
}

impl Tweenable for Target {
    type Key = Prop;

    fn get(&self, key: Prop) -> Option<f32> {
        match key {
            Prop::X => Some(self.x),
            Prop::Y => Some(self.y),
            Prop::Missing => None,
        }
    }

    fn set(&mut self, key: Prop, value: f32) {
        match key {
            Prop::X => self.x = value,
            Prop::Y => self.y = value,
            Prop::Missing => {}
        }
    }
}

#[test]
fn linear_tween_hits_midpoint_and_end() {
    let mut target = Target { x: 5.0, y: 0.0 };
    let mut engine = TweenEngine::new();
    let id = engine
        .animate(&mut target, TweenSpec::new(vec![(Prop::X, Change::To(10.0))], 2.0), 0.0)
        .unwrap();
    engine.step(1.0, &mut target);
    assert!((target.x - 7.5).abs() < 1e-5);
    engine.step(2.0, &mut target);
    assert_eq!(target.x, 10.0);
    // Finished tweens are removed
    assert!(!engine.is_active(id));
    assert!(engine.is_empty());
}

#[test]
fn quad_out_tween_is_three_quarters_done_at_midpoint() {
    let mut target = Target::default();
    let mut engine = TweenEngine::new();
    engine
        .animate(
            &mut target,
            TweenSpec::new(vec![(Prop::X, Change::To(10.0))], 2.0).eased(Easing::QuadOut),
            0.0,
        )
        .unwrap();
    engine.step(1.0, &mut target);
    assert!((target.x - 7.5).abs() < 1e-5);
    engine.step(2.0, &mut target);
    assert_eq!(target.x, 10.0);
    assert!(engine.is_empty());
}

#[test]
fn end_value_is_exact_even_when_overshooting() {
    let mut target = Target::default();
    let mut engine = TweenEngine::new();
    engine
        .animate(
            &mut target,
            TweenSpec::new(vec![(Prop::Y, Change::To(-1.0))], 0.3).eased(Easing::QuadOut),
            0.0,
        )
        .unwrap();
    engine.step(5.0, &mut target);
    assert_eq!(target.y, -1.0);
}

#[test]
fn relative_change_uses_captured_start() {
    let mut target = Target { x: 2.0, y: 0.0 };
    let mut engine = TweenEngine::new();
    engine
        .animate(&mut target, TweenSpec::new(vec![(Prop::X, Change::By(3.0))], 1.0), 0.0)
        .unwrap();
    engine.step(1.0, &mut target);
    assert_eq!(target.x, 5.0);
}

#[test]
fn delayed_tween_waits_and_captures_late() {
    let mut target = Target { x: 0.0, y: -10.0 };
    let mut engine = TweenEngine::new();
    engine
        .animate(
            &mut target,
            TweenSpec::new(vec![(Prop::Y, Change::To(-1.0))], 2.0).delayed(3.0),
            0.0,
        )
        .unwrap();
    engine.step(1.0, &mut target);
    assert_eq!(target.y, -10.0);
    // The field moves before the delay ends; the tween starts from there
    target.y = -6.0;
    engine.step(3.0, &mut target);
    assert_eq!(target.y, -6.0);
    engine.step(4.0, &mut target);
    assert!((target.y - -3.5).abs() < 1e-5);
    engine.step(5.0, &mut target);
    assert_eq!(target.y, -1.0);
}

#[test]
fn quad_out_is_ahead_of_linear() {
    assert_eq!(Easing::QuadOut.apply(0.0), 0.0);
    assert_eq!(Easing::QuadOut.apply(1.0), 1.0);
    assert!(Easing::QuadOut.apply(0.5) > Easing::Linear.apply(0.5));
    assert!((Easing::QuadOut.apply(0.5) - 0.75).abs() < 1e-6);
}

#[test]
fn zero_duration_falls_back_to_one_second() {
    let mut target = Target::default();
    let mut engine = TweenEngine::new();
    engine
        .animate(&mut target, TweenSpec::new(vec![(Prop::X, Change::To(4.0))], 0.0), 0.0)
        .unwrap();
    engine.step(0.5, &mut target);
    assert!((target.x - 2.0).abs() < 1e-5);
}

#[test]
fn unknown_property_is_rejected() {
    let mut target = Target::default();
    let mut engine = TweenEngine::new();
    let err = engine
        .animate(
            &mut target,
            TweenSpec::new(vec![(Prop::Missing, Change::To(1.0))], 1.0),
            0.0,
        )
        .unwrap_err();
    assert_eq!(err, TweenError::UnknownProperty("Missing".into()));
    assert!(engine.is_empty());
}

#[test]
fn later_tween_wins_on_shared_property() {
    let mut target = Target::default();
    let mut engine = TweenEngine::new();
    engine
        .animate(&mut target, TweenSpec::new(vec![(Prop::X, Change::To(10.0))], 1.0), 0.0)
        .unwrap();
    engine
        .animate(&mut target, TweenSpec::new(vec![(Prop::X, Change::To(-10.0))], 1.0), 0.0)
        .unwrap();
    engine.step(1.0, &mut target);
    assert_eq!(target.x, -10.0);
    assert_eq!(engine.len(), 0);
}
