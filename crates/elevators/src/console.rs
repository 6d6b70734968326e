//! Console output for elevator events.
//!
//! Provides a `tracing` layer that prints the engine's construction and
//! census events as single summary lines.

use std::io::{self, Write};
use std::sync::OnceLock;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Honors
/// `RUST_LOG`, defaulting to debug output from the engine.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("elevators_core=debug"));

        // a subscriber installed elsewhere wins
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ElevatorConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats elevator events.
pub struct ElevatorConsoleLayer;

impl<S: Subscriber> Layer<S> for ElevatorConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("elevators_core") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    items: Option<u64>,
    degree: Option<u64>,
    distinct_grades: Option<u64>,
    lattice_points: Option<u64>,
    sum_types: Option<u64>,
    count: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "message" => self.message = Some(s.trim_matches('"').to_string()),
            "count" => self.count = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "items" => self.items = Some(value),
            "degree" => self.degree = Some(value),
            "distinct_grades" => self.distinct_grades = Some(value),
            "lattice_points" => self.lattice_points = Some(value),
            "sum_types" => self.sum_types = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.message.as_deref() {
        Some("Elevator built") => format!(
            "[elevator] degree {} over {} items: {} distinct grades, {} lattice points",
            v.degree.unwrap_or(0),
            v.items.unwrap_or(0),
            v.distinct_grades.unwrap_or(0),
            v.lattice_points.unwrap_or(0),
        ),
        Some("Elevator census computed") => format!(
            "[elevator] {} elevations in {} sum types ({} lattice points)",
            v.count.as_deref().unwrap_or("0"),
            v.sum_types.unwrap_or(0),
            v.lattice_points.unwrap_or(0),
        ),
        Some(other) => format!("[elevator] {}", other),
        None => String::new(),
    }
}
