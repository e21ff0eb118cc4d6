use gesture_demo::{DemoApp, DemoConfig, ToggleState};
use glide_testing::{FrameDriver, GestureRobot, FRAME_INTERVAL_NANOS};
use glide_ui_graphics::Point;

fn mounted(config: DemoConfig) -> (FrameDriver, DemoApp) {
    let driver = FrameDriver::new();
    let app = DemoApp::with_runtime(config, driver.runtime().clone()).expect("valid config");
    (driver, app)
}

#[test]
fn toggle_fade_runs_on_the_driver_clock() {
    let (mut driver, mut app) = mounted(DemoConfig::default());
    let mut robot = GestureRobot::new();
    let button = app.config().toggle_button_bounds().center();
    for event in robot.tap(button) {
        app.dispatch_pointer(&event);
    }
    assert!(driver.scheduler().frame_requests() > 0);

    let frames = driver.pump_until_idle(120);
    // First frame anchors, 500ms at ~16.7ms per frame is 30 more.
    assert_eq!(frames, 31);
    assert!(driver.is_idle());
    assert_eq!(app.carousel().opacity(), 1.0);
    assert_eq!(app.carousel().toggle_state(), ToggleState::Shown);

    // Once shown the button does nothing.
    for event in robot.tap(button) {
        app.dispatch_pointer(&event);
    }
    assert!(driver.is_idle());
    assert_eq!(app.carousel().opacity(), 1.0);
}

#[test]
fn opacity_rises_monotonically_during_fade() {
    let (mut driver, mut app) = mounted(DemoConfig::default());
    assert!(app.carousel_mut().toggle());

    let mut previous = app.carousel().opacity();
    while !driver.is_idle() {
        driver.run_frames(1);
        let opacity = app.carousel().opacity();
        assert!(opacity >= previous, "{opacity} dropped below {previous}");
        assert!((0.0..=1.0).contains(&opacity));
        previous = opacity;
    }
    assert_eq!(previous, 1.0);
}

#[test]
fn scroll_then_settle_focuses_nearest_card() {
    let (_driver, app) = mounted(DemoConfig::default().with_initially_shown(true));
    let width = app.config().card_width();

    app.on_scroll(2.4 * width);
    let styles = app.frame_styles();
    assert!(styles.cards[2].opacity > styles.cards[3].opacity);
    assert!(styles.cards[0].opacity == 0.5 && styles.cards[0].scale == 0.9);

    let settled = app.carousel().settle_scroll();
    assert!((settled - 2.0 * width).abs() < 1e-3);
    assert_eq!(app.carousel().focused_index(), 2);
    assert!((app.frame_styles().cards[2].opacity - 1.0).abs() < 1e-4);
}

#[test]
fn settle_past_the_end_stops_on_last_card() {
    let (_driver, app) = mounted(DemoConfig::default());
    let width = app.config().card_width();
    app.on_scroll(12.0 * width);
    app.carousel().settle_scroll();
    assert!((app.carousel().offset() - 9.0 * width).abs() < 1e-3);
    assert_eq!(app.carousel().focused_index(), 9);
}

#[test]
fn drags_accumulate_across_frames() {
    let (mut driver, mut app) = mounted(DemoConfig::default());
    let mut robot = GestureRobot::new();
    let origin = app.circle().position();

    for delta in [Point::new(50.0, 30.0), Point::new(-20.0, -10.0)] {
        let from = app.circle().position();
        for event in robot.drag(from, delta, 10) {
            app.dispatch_pointer(&event);
            driver.advance_by_nanos(FRAME_INTERVAL_NANOS);
        }
        // Nothing animates, so further frames leave the circle where it is.
        driver.run_frames(3);
    }

    let position = app.circle().position();
    assert!((position.x - (origin.x + 30.0)).abs() < 1e-3);
    assert!((position.y - (origin.y + 20.0)).abs() < 1e-3);
    assert_eq!(app.circle().commit_count(), 2);
    assert_eq!(app.render_frame(driver.now_nanos()).circle.translation(), position);
}

#[test]
fn fade_and_drag_share_one_frame_pass() {
    let (mut driver, mut app) = mounted(DemoConfig::default());
    let mut robot = GestureRobot::new();
    app.carousel_mut().toggle();

    let start = app.circle().position();
    app.dispatch_pointer(&robot.press(start));
    driver.frame();
    for event in robot.move_by(Point::new(0.0, 40.0), 4) {
        app.dispatch_pointer(&event);
    }
    driver.advance_by_millis(250);

    let styles = app.frame_styles();
    assert!((styles.carousel_opacity - 0.5).abs() < 1e-4);
    assert_eq!(styles.circle.translation(), Point::new(start.x, start.y + 40.0));
    assert_eq!(app.circle().position(), start);
}
