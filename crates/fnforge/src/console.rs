//! Console output for FnForge events.
//!
//! Provides a custom `tracing` layer that prints cache and adapter events
//! emitted by `fnforge_core`, one line per event.
//!
//! ## Log Levels
//!
//! - **WARN**: A recover handler returned no fallback
//! - **DEBUG**: Failures wrapped by `nest` or answered by `recover`
//! - **TRACE**: Memoization cache hits and misses

use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::OnceLock;

use fnforge_config::LoggingConfig;
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output with the default [`LoggingConfig`].
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with(&LoggingConfig::default());
}

/// Initializes console output.
///
/// `RUST_LOG` takes precedence over `config.default_directive`. Safe to call
/// multiple times - only the first call has effect.
pub fn init_with(config: &LoggingConfig) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.default_directive))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ConsoleLayer::new(config.ansi))
            .try_init();
    });
}

/// A tracing layer that formats FnForge events.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLayer {
    ansi: bool,
}

impl ConsoleLayer {
    /// Creates a layer; `ansi` enables colored output.
    pub fn new(ansi: bool) -> Self {
        Self { ansi }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("fnforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level(), self.ansi);
        if !output.is_empty() {
            let _ = writeln!(io::stderr().lock(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    fields: Vec<(&'static str, String)>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s),
            name => self.fields.push((name, s)),
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            name => self.fields.push((name, value.to_string())),
        }
    }
}

fn format_event(v: &EventVisitor, level: Level, ansi: bool) -> String {
    let Some(event) = v.event.as_deref() else {
        return String::new();
    };

    let mut output = format!("{} {}", format_level(level, ansi), format_name(event, ansi));
    if let Some(message) = &v.message {
        let _ = write!(output, ": {}", message);
    }
    for (name, value) in &v.fields {
        let _ = write!(output, " {}={}", name, value);
    }
    output
}

fn format_level(level: Level, ansi: bool) -> String {
    let label = format!("{:>5}", level.as_str());
    if !ansi {
        return label;
    }
    match level {
        Level::ERROR => label.bright_red().bold().to_string(),
        Level::WARN => label.bright_yellow().bold().to_string(),
        Level::INFO => label.bright_green().to_string(),
        Level::DEBUG => label.bright_blue().to_string(),
        Level::TRACE => label.bright_black().to_string(),
    }
}

fn format_name(event: &str, ansi: bool) -> String {
    if ansi {
        event.bright_cyan().bold().to_string()
    } else {
        event.to_string()
    }
}
