use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gesture_demo::{DemoApp, DemoConfig};
use glide_testing::{FrameDriver, GestureRobot, FRAME_INTERVAL_NANOS};
use glide_ui_graphics::Point;

fn bench_frame_styles(c: &mut Criterion) {
    let driver = FrameDriver::new();
    let app = DemoApp::with_runtime(
        DemoConfig::default().with_initially_shown(true),
        driver.runtime().clone(),
    )
    .expect("valid config");
    let width = app.config().card_width();
    app.on_scroll(3.5 * width);

    c.bench_function("frame_styles", |b| {
        b.iter(|| black_box(app.frame_styles()))
    });
}

fn bench_render_frame_while_fading(c: &mut Criterion) {
    c.bench_function("render_frame_fading", |b| {
        b.iter_with_setup(
            || {
                let driver = FrameDriver::new();
                let mut app =
                    DemoApp::with_runtime(DemoConfig::default(), driver.runtime().clone())
                        .expect("valid config");
                app.carousel_mut().toggle();
                app.render_frame(0);
                (driver, app)
            },
            |(_driver, mut app)| black_box(app.render_frame(FRAME_INTERVAL_NANOS)),
        )
    });
}

fn bench_drag_dispatch(c: &mut Criterion) {
    let driver = FrameDriver::new();
    let mut app = DemoApp::with_runtime(DemoConfig::default(), driver.runtime().clone())
        .expect("valid config");
    let mut robot = GestureRobot::new();

    c.bench_function("drag_dispatch", |b| {
        b.iter(|| {
            let from = app.circle().position();
            for event in robot.drag(from, Point::new(12.0, -12.0), 6) {
                app.dispatch_pointer(&event);
            }
            let back = app.circle().position();
            for event in robot.drag(back, Point::new(-12.0, 12.0), 6) {
                app.dispatch_pointer(&event);
            }
            black_box(app.frame_styles())
        })
    });
}

criterion_group!(
    benches,
    bench_frame_styles,
    bench_render_frame_while_fading,
    bench_drag_dispatch
);
criterion_main!(benches);
