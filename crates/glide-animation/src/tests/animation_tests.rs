use super::*;

use glide_core::Runtime;

const MS: u64 = 1_000_000;

#[test]
fn tween_lands_on_target_after_its_duration() {
    let runtime = Runtime::default();
    let alpha = Animatable::new(0.0f32, runtime.handle());
    alpha.animate_to(1.0, AnimationSpec::linear(500));
    assert!(alpha.is_running());

    // The first frame anchors the start time.
    runtime.drain_frame_callbacks(100 * MS);
    assert_eq!(alpha.value(), 0.0);

    runtime.drain_frame_callbacks(350 * MS);
    assert!((alpha.value() - 0.5).abs() < 1e-6);

    runtime.drain_frame_callbacks(599 * MS);
    assert!(alpha.value() < 1.0);
    assert!(alpha.is_running());

    runtime.drain_frame_callbacks(600 * MS);
    assert_eq!(alpha.value(), 1.0);
    assert!(!alpha.is_running());
    assert!(!runtime.has_frame_callbacks());
}

#[test]
fn eased_tween_is_monotonic_without_overshoot() {
    let runtime = Runtime::default();
    let alpha = Animatable::new(0.25f32, runtime.handle());
    alpha.animate_to(1.0, AnimationSpec::tween(500, Easing::FastOutSlowInEasing));

    let mut previous = alpha.value();
    let mut frame = 0u64;
    while alpha.is_running() {
        runtime.drain_frame_callbacks(frame * 16_666_667);
        let value = alpha.value();
        assert!(value >= previous, "{value} < {previous} at frame {frame}");
        assert!(value <= 1.0);
        previous = value;
        frame += 1;
        assert!(frame < 64, "tween did not finish");
    }
    assert_eq!(alpha.value(), 1.0);
}

#[test]
fn retargeting_starts_from_current_value() {
    let runtime = Runtime::default();
    let value = Animatable::new(0.0f32, runtime.handle());
    value.animate_to(100.0, AnimationSpec::linear(100));
    runtime.drain_frame_callbacks(0);
    runtime.drain_frame_callbacks(50 * MS);
    assert!((value.value() - 50.0).abs() < 1e-3);

    value.animate_to(0.0, AnimationSpec::linear(100));
    assert_eq!(value.target(), 0.0);
    runtime.drain_frame_callbacks(60 * MS);
    assert!((value.value() - 50.0).abs() < 1e-3);
    runtime.drain_frame_callbacks(110 * MS);
    assert!((value.value() - 25.0).abs() < 1e-3);
}

#[test]
fn snap_to_cancels_running_tween() {
    let runtime = Runtime::default();
    let value = Animatable::new(0.0f32, runtime.handle());
    value.animate_to(1.0, AnimationSpec::linear(300));
    value.snap_to(0.75);
    assert!(!value.is_running());
    runtime.drain_frame_callbacks(1_000 * MS);
    assert_eq!(value.value(), 0.75);
}

#[test]
fn delay_holds_start_value() {
    let runtime = Runtime::default();
    let value = Animatable::new(0.0f64, runtime.handle());
    value.animate_to(1.0, AnimationSpec::linear(100).with_delay(50));
    runtime.drain_frame_callbacks(0);
    runtime.drain_frame_callbacks(40 * MS);
    assert_eq!(value.value(), 0.0);
    runtime.drain_frame_callbacks(100 * MS);
    assert!((value.value() - 0.5).abs() < 1e-6);
    runtime.drain_frame_callbacks(150 * MS);
    assert_eq!(value.value(), 1.0);
}

#[test]
fn state_view_tracks_animated_value() {
    let runtime = Runtime::default();
    let value = Animatable::new(0.0f32, runtime.handle());
    let state = value.state();
    value.animate_to(2.0, AnimationSpec::linear(0));
    runtime.drain_frame_callbacks(5);
    assert_eq!(state.get(), 2.0);
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::LinearEasing,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowInEasing,
        Easing::LinearOutSlowInEasing,
        Easing::FastOutLinearEasing,
    ];

    for easing in easings {
        assert!(easing.transform(0.0).abs() < 0.01, "start of {easing:?}");
        assert!((easing.transform(1.0) - 1.0).abs() < 0.01, "end of {easing:?}");
        let mid = easing.transform(0.5);
        assert!(mid > 0.0 && mid < 1.0, "midpoint of {easing:?} is {mid}");
    }
}

#[test]
fn ease_in_out_is_symmetric() {
    let low = Easing::EaseInOut.transform(0.25);
    let high = Easing::EaseInOut.transform(0.75);
    assert!((low + high - 1.0).abs() < 1e-3);
    assert!(low < 0.25);
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowInEasing);
    assert_eq!(spec.delay_millis, 0);
}
