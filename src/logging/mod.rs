// Logging module - subscriber setup and in-memory log capture
//
// In the interactive terminal mode log lines must never be written to the
// terminal: they would tear the alternate screen. A capture layer stores them
// in a bounded ring instead and the status bar shows the latest one. Headless
// commands log to stderr. Either mode can also write JSON lines to rolling
// files.

use crate::config::LoggingConfig;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::{Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 500;

/// A single log entry captured from tracing
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub message: String,
}

/// Bounded, shareable ring of captured log entries
#[derive(Clone, Default)]
pub struct LogRing {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl LogRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, dropping the oldest when full
    pub fn push(&self, entry: LogEntry) {
        // A poisoned lock only means another thread panicked mid-push
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if entries.len() >= MAX_LOG_ENTRIES {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    pub fn latest(&self) -> Option<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .back()
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

/// Tracing layer that stores events in a [`LogRing`]
pub struct CaptureLayer {
    ring: LogRing,
}

impl CaptureLayer {
    pub fn new(ring: LogRing) -> Self {
        Self { ring }
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));

        self.ring.push(LogEntry {
            timestamp: Utc::now(),
            level: *event.metadata().level(),
            message,
        });
    }
}

/// Visitor that collects the message plus any extra fields as `name=value`
struct MessageVisitor<'a>(&'a mut String);

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.insert_str(0, value);
        } else {
            self.0.push_str(&format!(" {}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0.insert_str(0, &format!("{:?}", value));
        } else {
            self.0.push_str(&format!(" {}={:?}", field.name(), value));
        }
    }
}

/// Where non-file log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Capture into the ring for the status bar
    Capture,
    /// Human-readable lines on stderr
    Stderr,
}

/// Install the global subscriber
///
/// Precedence for the filter: RUST_LOG > config level. The returned guard
/// flushes the file writer and must live until the program exits.
pub fn init(config: &LoggingConfig, target: LogTarget, ring: &LogRing) -> Option<WorkerGuard> {
    let default_filter = config.filter_directive();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (file_layer, guard) = match file_writer(config) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    let capture = (target == LogTarget::Capture).then(|| CaptureLayer::new(ring.clone()));
    let stderr = (target == LogTarget::Stderr)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(capture)
        .with(stderr)
        .with(file_layer)
        .init();

    guard
}

/// Non-blocking rolling file writer, when file logging is enabled
fn file_writer(
    config: &LoggingConfig,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if !config.file_enabled {
        return None;
    }

    let files = &config.files;
    if let Err(e) = std::fs::create_dir_all(&files.dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            files.dir, e
        );
        return None;
    }

    Some(tracing_appender::non_blocking(files.appender()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level: Level::INFO,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_ring_is_bounded() {
        let ring = LogRing::new();
        for i in 0..MAX_LOG_ENTRIES + 10 {
            ring.push(entry(&format!("line {i}")));
        }
        assert_eq!(ring.len(), MAX_LOG_ENTRIES);
        assert_eq!(
            ring.latest().map(|e| e.message),
            Some(format!("line {}", MAX_LOG_ENTRIES + 9))
        );
    }

    #[test]
    fn test_capture_layer_records_message_and_fields() {
        let ring = LogRing::new();
        let subscriber = tracing_subscriber::registry().with(CaptureLayer::new(ring.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(count = 3, "Ejected stacks");
        });

        let latest = ring.latest().expect("event captured");
        assert_eq!(latest.level, Level::WARN);
        assert_eq!(latest.message, "Ejected stacks count=3");
    }
}
