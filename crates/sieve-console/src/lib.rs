//! Colorful console output for Sieve queries.
//!
//! Provides a custom `tracing` layer that formats query events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Query lifecycle (`query_start`, `query_end`)
//! - **WARN**: Queries rejected at construction (`query_invalid`)
//! - **DEBUG**: Every accepted item (`match`)

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing. `RUST_LOG` overrides the default
/// `info` level, e.g. `RUST_LOG=sieve=debug` to list every match.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SieveConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let banner = r#"
  ___ _
 / __(_)_____ _____
 \__ \ / -_) V / -_)
 |___/_\___|\_/\___|
"#;

    let version_line = format!("  v{} - Specification Filter Engine\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats query events with colors.
pub struct SieveConsoleLayer;

impl<S: Subscriber> Layer<S> for SieveConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Accept events from sieve crates only
        if !metadata.target().starts_with("sieve") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    query: Option<String>,
    spec: Option<String>,
    product: Option<String>,
    error: Option<String>,
    item_count: Option<u64>,
    match_count: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        // Display-formatted (`%`) fields land here unquoted; `&str` fields
        // go through `record_str`.
        self.record_str(field, &format!("{:?}", value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "item_count" => self.item_count = Some(value),
            "match_count" => self.match_count = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "query" => self.query = Some(value.to_string()),
            "spec" => self.spec = Some(value.to_string()),
            "product" => self.product = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "query_start" => format_query_start(v),
        "query_end" => format_query_end(v),
        "query_invalid" => format_query_invalid(v),
        "match" => format_match(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_query_start(v: &EventVisitor) -> String {
    let query = v.query.as_deref().unwrap_or("?");
    let spec = v.spec.as_deref().unwrap_or("?");
    let items = v.item_count.unwrap_or(0);

    format!(
        "{} {} Query {} │ {} │ {} items",
        format_elapsed(),
        "▶".bright_green().bold(),
        query.white().bold(),
        spec.bright_magenta(),
        items.to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_query_end(v: &EventVisitor) -> String {
    let query = v.query.as_deref().unwrap_or("?");
    let items = v.item_count.unwrap_or(0);
    let matched = v.match_count.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} {} │ {} of {} matched ({}) │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        query.white().bold(),
        matched.to_formatted_string(&Locale::en).bright_green().bold(),
        items.to_formatted_string(&Locale::en),
        format_ratio(matched, items),
        format_duration_ms(duration).yellow(),
    )
}

fn format_query_invalid(v: &EventVisitor) -> String {
    let query = v.query.as_deref().unwrap_or("?");
    let error = v.error.as_deref().unwrap_or("unknown error");

    format!(
        "{} {} {} │ {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        query.white().bold(),
        error.bright_red(),
    )
}

fn format_match(v: &EventVisitor, level: Level) -> String {
    if level != Level::DEBUG {
        return String::new();
    }

    let product = v.product.as_deref().unwrap_or("?");
    format!("{}   {} {}", format_elapsed(), "✓".bright_green(), product)
}

fn format_ratio(matched: u64, total: u64) -> String {
    if total == 0 {
        return "-".to_string();
    }
    format!("{:.0}%", matched as f64 * 100.0 / total as f64)
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Capture(Arc<Mutex<Vec<EventVisitor>>>);

    impl<S: Subscriber> Layer<S> for Capture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = EventVisitor::default();
            event.record(&mut visitor);
            self.0.lock().unwrap().push(visitor);
        }
    }

    #[test]
    fn test_visitor_keeps_quotes_in_names() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(Capture(Arc::clone(&seen)));
        let query = String::from("\"big\" things");
        let product = String::from("The \"House\"");

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(event = "match", query = %query, product = %product, match_count = 3u64);
        });

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].event.as_deref(), Some("match"));
        assert_eq!(seen[0].query.as_deref(), Some("\"big\" things"));
        assert_eq!(seen[0].product.as_deref(), Some("The \"House\""));
        assert_eq!(seen[0].match_count, Some(3));
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(1, 4), "25%");
        assert_eq!(format_ratio(3, 3), "100%");
        assert_eq!(format_ratio(0, 0), "-");
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(12), "12ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(61_000), "1m 1s");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let v = EventVisitor {
            event: Some("solve_start".to_string()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_match_only_at_debug() {
        let v = EventVisitor {
            event: Some("match".to_string()),
            product: Some("Apple".to_string()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
        assert!(format_event(&v, Level::DEBUG).contains("Apple"));
    }
}
