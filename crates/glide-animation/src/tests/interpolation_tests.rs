use super::*;

fn focus_table() -> InterpolationConfig {
    InterpolationConfig::new(&[0.0, 100.0, 200.0], &[0.5, 1.0, 0.5]).expect("valid table")
}

#[test]
fn control_points_map_exactly() {
    let table = focus_table().extrapolate(Extrapolate::Clamp);
    assert_eq!(table.apply(0.0), 0.5);
    assert_eq!(table.apply(100.0), 1.0);
    assert_eq!(table.apply(200.0), 0.5);
    assert_eq!(table.apply(50.0), 0.75);
    assert_eq!(table.apply(150.0), 0.75);
}

#[test]
fn clamp_holds_outer_values() {
    let table = focus_table().extrapolate(Extrapolate::Clamp);
    assert_eq!(table.apply(-1_000.0), 0.5);
    assert_eq!(table.apply(10_000.0), 0.5);
}

#[test]
fn extend_continues_outer_slope() {
    let table = InterpolationConfig::new(&[0.0, 10.0], &[0.0, 2.0]).expect("valid table");
    assert_eq!(table.apply(20.0), 4.0);
    assert_eq!(table.apply(-5.0), -1.0);
}

#[test]
fn sides_can_differ() {
    let table = InterpolationConfig::new(&[0.0, 10.0], &[0.0, 2.0])
        .expect("valid table")
        .extrapolate_left(Extrapolate::Identity)
        .extrapolate_right(Extrapolate::Clamp);
    assert_eq!(table.apply(-7.0), -7.0);
    assert_eq!(table.apply(15.0), 2.0);
}

#[test]
fn zero_width_segment_steps() {
    let table = InterpolationConfig::new(&[0.0, 5.0, 5.0, 10.0], &[0.0, 1.0, 3.0, 4.0])
        .expect("valid table");
    assert_eq!(table.apply(5.0), 1.0);
    assert_eq!(table.apply(7.5), 3.5);
}

#[test]
fn invalid_tables_are_rejected() {
    assert_eq!(
        InterpolationConfig::new(&[0.0, 1.0], &[0.0]),
        Err(InterpolationError::LengthMismatch {
            input: 2,
            output: 1
        })
    );
    assert_eq!(
        InterpolationConfig::new(&[0.0], &[0.0]),
        Err(InterpolationError::TooFewPoints { len: 1 })
    );
    assert_eq!(
        InterpolationConfig::new(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]),
        Err(InterpolationError::NonMonotonicInput { index: 2 })
    );
    let err = InterpolationConfig::new(&[0.0, f32::NAN], &[0.0, 1.0]).unwrap_err();
    assert_eq!(err, InterpolationError::NonFiniteInput { index: 1 });
    assert_eq!(err.to_string(), "input range point 1 is not finite");
}

#[test]
fn from_points_matches_checked_constructor() {
    let checked = InterpolationConfig::new(&[0.0, 640.0], &[0.0, 2.0]).expect("valid table");
    let unchecked = InterpolationConfig::from_points([0.0, 640.0], [0.0, 2.0]);
    assert_eq!(checked, unchecked);
    assert_eq!(unchecked.input_range(), &[0.0, 640.0]);
    assert_eq!(unchecked.output_range(), &[0.0, 2.0]);
}
