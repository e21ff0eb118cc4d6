use super::*;

fn pointer(kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(kind, Point::new(x, y))
}

#[test]
fn press_and_release_in_place_is_a_tap() {
    let mut tap = TapGesture::new();
    let down = pointer(PointerEventKind::Down, 10.0, 10.0);
    assert!(!tap.on_pointer_event(&down));
    assert!(down.is_consumed());
    assert!(tap.is_pressed());
    assert!(tap.on_pointer_event(&pointer(PointerEventKind::Up, 12.0, 11.0)));
    assert!(!tap.is_pressed());
}

#[test]
fn moving_past_slop_cancels_tap() {
    let mut tap = TapGesture::new();
    tap.on_pointer_event(&pointer(PointerEventKind::Down, 0.0, 0.0));
    tap.on_pointer_event(&pointer(PointerEventKind::Move, 30.0, 0.0));
    assert!(!tap.on_pointer_event(&pointer(PointerEventKind::Up, 0.0, 0.0)));
}

#[test]
fn cancel_drops_pending_press() {
    let mut tap = TapGesture::new();
    tap.on_pointer_event(&pointer(PointerEventKind::Down, 0.0, 0.0));
    tap.on_pointer_event(&pointer(PointerEventKind::Cancel, 0.0, 0.0));
    assert!(!tap.on_pointer_event(&pointer(PointerEventKind::Up, 0.0, 0.0)));
}

#[test]
fn cancel_of_another_pointer_keeps_press() {
    let mut tap = TapGesture::new();
    tap.on_pointer_event(&pointer(PointerEventKind::Down, 0.0, 0.0).with_id(1));
    tap.on_pointer_event(&pointer(PointerEventKind::Cancel, 0.0, 0.0).with_id(2));
    assert!(tap.is_pressed());
    assert!(tap.on_pointer_event(&pointer(PointerEventKind::Up, 1.0, 0.0).with_id(1)));
}

#[test]
fn release_without_press_is_ignored() {
    let mut tap = TapGesture::new();
    assert!(!tap.on_pointer_event(&pointer(PointerEventKind::Up, 0.0, 0.0)));
}
