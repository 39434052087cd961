use super::*;

use carousel_core::ManualClock;
use std::cell::Cell;

fn hover_animation(clock: &ManualClock, spec: TweenSpec) -> EasedAnimation {
    EasedAnimation::with_clock(1.0, 1.2, spec, Rc::new(clock.clone()))
}

fn sample(animation: &mut EasedAnimation) -> Option<f32> {
    let applied = Cell::new(None);
    animation.update(|value| applied.set(Some(value)));
    applied.get()
}

#[test]
fn idle_animation_ignores_updates() {
    let clock = ManualClock::new();
    let mut animation = hover_animation(&clock, TweenSpec::default());

    clock.advance(100.0);
    assert_eq!(sample(&mut animation), None);
    assert!(!animation.is_running());
    assert_eq!(animation.current_value(), 1.0);
}

#[test]
fn first_update_after_start_returns_origin_endpoint() {
    let clock = ManualClock::starting_at(1_000.0);

    let mut forward = hover_animation(&clock, TweenSpec::default());
    forward.forwards().start();
    assert_eq!(sample(&mut forward), Some(1.0));

    let mut backward = hover_animation(&clock, TweenSpec::default());
    backward.backwards().start();
    assert_eq!(sample(&mut backward), Some(1.2));
}

#[test]
fn midpoint_sample_lands_half_way() {
    let clock = ManualClock::new();
    let mut animation = hover_animation(&clock, TweenSpec::default());
    animation.start();

    clock.advance(250.0);
    let value = sample(&mut animation).expect("running animation applies a value");
    assert!((value - 1.1).abs() < 1e-5, "got {value}");
}

#[test]
fn completion_stops_without_snapping() {
    let clock = ManualClock::new();
    let mut animation = hover_animation(&clock, TweenSpec::default());
    animation.start();

    clock.advance(100.0);
    let before = sample(&mut animation).expect("value applied");
    assert!(before < 1.2);

    clock.advance(500.0);
    assert_eq!(sample(&mut animation), None);
    assert!(!animation.is_running());
    assert_eq!(animation.current_value(), before);

    clock.advance(16.0);
    assert_eq!(sample(&mut animation), None);
    assert_eq!(animation.current_value(), before);
}

#[test]
fn reversing_mid_leg_continues_from_partial_value() {
    let clock = ManualClock::new();
    let mut animation = hover_animation(&clock, TweenSpec::default());
    animation.forwards().start();

    clock.advance(250.0);
    let partial = sample(&mut animation).expect("value applied");
    assert!(partial > 1.0 && partial < 1.2);

    animation.backwards().start();
    assert!(animation.is_running());
    assert_eq!(animation.current_value(), partial);
    assert_eq!(sample(&mut animation), Some(partial));

    clock.advance(250.0);
    let heading_back = sample(&mut animation).expect("value applied");
    assert!(heading_back < partial);
    assert!(heading_back >= 1.0);
}

#[test]
fn restart_after_completion_reinitialises_value() {
    let clock = ManualClock::new();
    let mut animation = hover_animation(&clock, TweenSpec::default());
    animation.start();
    clock.advance(250.0);
    sample(&mut animation);
    clock.advance(600.0);
    sample(&mut animation);
    assert!(!animation.is_running());

    animation.backwards().start();
    assert_eq!(animation.current_value(), 1.2);
    assert_eq!(animation.direction(), Direction::Backward);
}

#[test]
fn zero_duration_completes_on_first_update() {
    let clock = ManualClock::new();
    let mut animation = hover_animation(&clock, TweenSpec::default().with_duration(0.0));
    animation.start();

    clock.advance(1.0);
    assert_eq!(sample(&mut animation), None);
    assert!(!animation.is_running());
    assert_eq!(animation.current_value(), 1.0);
}

#[test]
fn direction_changes_do_not_touch_timing() {
    let clock = ManualClock::new();
    let mut animation = hover_animation(&clock, TweenSpec::default());
    animation.forwards().start();
    clock.advance(100.0);
    animation.backwards().forwards();
    let value = sample(&mut animation).expect("value applied");
    assert!(value > 1.0);
}

#[test]
fn ease_in_out_expo_endpoints_and_symmetry() {
    assert_eq!(ease_in_out_expo(0.0, 2.0, 4.0, 500.0), 2.0);
    assert_eq!(ease_in_out_expo(500.0, 2.0, 4.0, 500.0), 6.0);
    assert!((ease_in_out_expo(250.0, 0.0, 1.0, 500.0) - 0.5).abs() < 1e-6);

    let early = ease_in_out_expo(100.0, 0.0, 1.0, 500.0);
    let late = ease_in_out_expo(400.0, 0.0, 1.0, 500.0);
    assert!((early + late - 1.0).abs() < 1e-5);
    assert!(early < 0.1, "slow start, got {early}");
}

#[test]
fn ease_out_expo_lands_on_target() {
    assert_eq!(ease_out_expo(0.0, 1.0, 0.5, 2_000.0), 1.0);
    assert!((ease_out_expo(2_000.0, 1.0, 0.5, 2_000.0) - 1.5).abs() < 1e-5);
    assert!(ease_out_expo(200.0, 0.0, 1.0, 2_000.0) > 0.5, "fast start");
    assert_eq!(ease_out_expo(10.0, 1.0, 0.5, 0.0), 1.5);
}

#[test]
fn linear_and_custom_easings_are_pluggable() {
    fn step(t: f32, b: f32, c: f32, d: f32) -> f32 {
        if t < d {
            b
        } else {
            b + c
        }
    }

    assert_eq!(Easing::Linear.evaluate(50.0, 0.0, 10.0, 100.0), 5.0);
    assert_eq!(Easing::Custom(step).evaluate(50.0, 1.0, 10.0, 100.0), 1.0);
    assert_eq!(format!("{:?}", Easing::Custom(step)), "Custom");
}

#[test]
fn tween_spec_default_has_reasonable_values() {
    let spec = TweenSpec::default();
    assert_eq!(spec.duration_millis, DEFAULT_DURATION_MILLIS);
    assert!(matches!(spec.easing, Easing::EaseInOutExpo));

    let custom = spec.with_duration(2_000.0).with_easing(Easing::EaseOutExpo);
    assert_eq!(custom.duration_millis, 2_000.0);
    assert!(matches!(custom.easing, Easing::EaseOutExpo));
}
