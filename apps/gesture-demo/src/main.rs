use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use gesture_demo::{DemoApp, DemoConfig, FrameStyles};
use glide_core::Clock;
use glide_foundation::{PointerEvent, PointerEventKind};
use glide_ui_graphics::Point;
use web_time::Instant;

const FRAME: Duration = Duration::from_micros(16_667);

/// Wall clock for pacing the scripted session.
struct SystemClock {
    origin: Instant,
}

impl Clock for SystemClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_nanos(&self, since: Instant) -> u64 {
        self.now().saturating_duration_since(since).as_nanos() as u64
    }
}

impl SystemClock {
    fn frame_time(&self) -> u64 {
        self.elapsed_nanos(self.origin)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = DemoConfig::default();
    let mut app = DemoApp::new(config.clone()).context("invalid demo configuration")?;
    let clock = SystemClock {
        origin: Instant::now(),
    };

    println!("=== Glide gesture demo ===");
    println!("Scripted session: reveal, swipe through cards, drag the circle.");
    println!("Set RUST_LOG=debug to see gesture transitions.");
    println!();

    let button = config.toggle_button_bounds().center();
    app.dispatch_pointer(&PointerEvent::new(PointerEventKind::Down, button).with_id(1));
    app.dispatch_pointer(&PointerEvent::new(PointerEventKind::Up, button).with_id(1));
    let styles = run_until_idle(&mut app, &clock);
    log::info!(
        "carousel revealed, opacity {:.2} ({:?})",
        styles.carousel_opacity,
        app.carousel().toggle_state()
    );

    let card_width = config.card_width();
    let target = 2.4 * card_width;
    let frames = 45;
    for frame in 1..=frames {
        app.on_scroll(target * frame as f32 / frames as f32);
        let styles = render(&mut app, &clock);
        if frame % 15 == 0 {
            log::info!(
                "offset {:>6.1}: {}",
                app.carousel().offset(),
                describe_cards(&styles)
            );
        }
    }
    app.carousel().settle_scroll();
    let styles = render(&mut app, &clock);
    log::info!(
        "settled on card {}: {}",
        app.carousel().focused_index(),
        describe_cards(&styles)
    );

    let start = app.circle().position();
    app.dispatch_pointer(&PointerEvent::new(PointerEventKind::Down, start).with_id(2));
    let steps = 20;
    for step in 1..=steps {
        let fraction = step as f32 / steps as f32;
        let at = Point::new(start.x + 50.0 * fraction, start.y + 30.0 * fraction);
        app.dispatch_pointer(&PointerEvent::new(PointerEventKind::Move, at).with_id(2));
        render(&mut app, &clock);
    }
    let end = Point::new(start.x + 50.0, start.y + 30.0);
    app.dispatch_pointer(&PointerEvent::new(PointerEventKind::Up, end).with_id(2));
    let styles = render(&mut app, &clock);
    log::info!(
        "circle moved {:?} -> {:?}, scale {:.2} x {:.2}",
        start,
        app.circle().position(),
        styles.circle.scale_x,
        styles.circle.scale_y
    );

    println!("Done after {}ms.", clock.frame_time() / 1_000_000);
    Ok(())
}

fn render(app: &mut DemoApp, clock: &SystemClock) -> FrameStyles {
    let styles = app.render_frame(clock.frame_time());
    thread::sleep(FRAME);
    styles
}

fn run_until_idle(app: &mut DemoApp, clock: &SystemClock) -> FrameStyles {
    let mut styles = render(app, clock);
    while app.is_animating() {
        styles = render(app, clock);
    }
    styles
}

fn describe_cards(styles: &FrameStyles) -> String {
    styles
        .cards
        .iter()
        .take(4)
        .enumerate()
        .map(|(index, card)| format!("#{index} {:.2}/{:.2}", card.opacity, card.scale))
        .collect::<Vec<_>>()
        .join("  ")
}
