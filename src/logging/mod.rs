// Logging module - in-memory log capture for the TUI
//
// While the TUI owns the terminal, log lines cannot go to stdout without
// garbling the alternate screen. `CaptureLayer` records events into a
// bounded `LogBuffer` that the logs strip reads on every frame.

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 500;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub message: String,
}

impl LogEntry {
    /// `HH:MM:SS LEVEL message`
    pub fn line(&self) -> String {
        format!(
            "{} {:<5} {}",
            self.timestamp.format("%H:%M:%S"),
            self.level,
            self.message
        )
    }
}

/// Bounded, shareable ring of log entries
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: LogEntry) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        if entries.len() >= MAX_LOG_ENTRIES {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// The last `n` entries, oldest first
    pub fn tail(&self, n: usize) -> Vec<LogEntry> {
        let Ok(entries) = self.entries.lock() else {
            return Vec::new();
        };
        let skip = entries.len().saturating_sub(n);
        entries.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }
}

/// Tracing layer that writes events into a [`LogBuffer`]
pub struct CaptureLayer {
    buffer: LogBuffer,
}

impl CaptureLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldCollector::default();
        event.record(&mut visitor);

        self.buffer.push(LogEntry {
            timestamp: Local::now(),
            level: *event.metadata().level(),
            message: visitor.finish(),
        });
    }
}

/// Collects the `message` field plus any structured fields as `key=value`
#[derive(Default)]
struct FieldCollector {
    message: String,
    fields: String,
}

impl FieldCollector {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else {
            format!("{}{}", self.message, self.fields)
        }
    }
}

impl tracing::field::Visit for FieldCollector {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn buffer_is_bounded() {
        let buffer = LogBuffer::new();
        for i in 0..(MAX_LOG_ENTRIES + 10) {
            buffer.push(LogEntry {
                timestamp: Local::now(),
                level: Level::INFO,
                message: format!("line {}", i),
            });
        }
        assert_eq!(buffer.len(), MAX_LOG_ENTRIES);
        let last = buffer.tail(1);
        assert_eq!(last[0].message, format!("line {}", MAX_LOG_ENTRIES + 9));
    }

    #[test]
    fn layer_captures_message_and_fields() {
        let buffer = LogBuffer::new();
        let subscriber = tracing_subscriber::registry().with(CaptureLayer::new(buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(cluster = "prod-1", "Alerts fetch failed");
        });

        let entries = buffer.tail(10);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::WARN);
        assert_eq!(entries[0].message, "Alerts fetch failed cluster=prod-1");
        assert!(entries[0].line().contains("WARN"));
    }
}
