//! Simulated frame loop: a driver publishes input events each frame while a
//! UI widget and the debug logger listen.
//!
//! Run with `RUST_LOG=debug cargo run --example frame_loop`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use sync_events::event::input::{KeyPressed, MouseClicked, MouseMoved, Position, WindowResized};
use sync_events::prelude::*;
use sync_events::EventLogger;
use tracing_subscriber::EnvFilter;

const KEY_ESCAPE: i32 = 256;

/// A button that highlights while hovered and closes on click.
struct Button {
    min: Position,
    max: Position,
    hovered: Arc<AtomicBool>,
    subscriptions: SubscriptionSet,
}

impl Button {
    fn new(bus: &EventBus, min: Position, max: Position, quit: Arc<AtomicBool>) -> Self {
        let hovered = Arc::new(AtomicBool::new(false));
        let mut subscriptions = SubscriptionSet::new();

        let hover = hovered.clone();
        subscriptions.push(bus.subscribe(move |event: &MouseMoved| {
            let p = event.position;
            hover.store(
                p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y,
                Ordering::Relaxed,
            );
        }));

        let hover = hovered.clone();
        subscriptions.push(bus.subscribe(move |event: &MouseClicked| {
            if event.down && hover.load(Ordering::Relaxed) {
                println!("Quit button clicked");
                quit.store(true, Ordering::Relaxed);
            }
        }));

        Self {
            min,
            max,
            hovered,
            subscriptions,
        }
    }

    fn describe(&self) -> String {
        format!(
            "button ({}, {})-({}, {}) hovered={} listeners={}",
            self.min.x,
            self.min.y,
            self.max.x,
            self.max.y,
            self.hovered.load(Ordering::Relaxed),
            self.subscriptions.active_count()
        )
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bus = EventBus::builder().name("frame-loop").build()?;
    let logger = EventLogger::new(&bus);
    let quit = Arc::new(AtomicBool::new(false));

    let quit_on_escape = quit.clone();
    let _escape = bus.subscribe(move |event: &KeyPressed| {
        if event.key == KEY_ESCAPE {
            quit_on_escape.store(true, Ordering::Relaxed);
        }
    });

    let button = Button::new(
        &bus,
        Position::new(100.0, 100.0),
        Position::new(200.0, 140.0),
        quit.clone(),
    );

    bus.publish(WindowResized {
        width: 800,
        height: 600,
    });

    let cursor_path = [(20.0, 20.0), (80.0, 110.0), (150.0, 120.0)];
    for (frame, (x, y)) in cursor_path.into_iter().enumerate() {
        bus.publish(MouseMoved {
            position: Position::new(x, y),
        });
        println!("frame {frame}: {}", button.describe());
    }

    bus.publish(MouseClicked {
        button: 0,
        position: Position::new(150.0, 120.0),
        down: true,
    });

    println!("quit requested: {}", quit.load(Ordering::Relaxed));
    println!("logger saw {} events", logger.event_count());
    println!("{}", bus.stats());

    drop(button);
    drop(logger);
    println!("after teardown: {} event types subscribed", bus.event_type_count());

    Ok(())
}
