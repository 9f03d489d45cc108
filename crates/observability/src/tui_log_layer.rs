//! Tracing layer that forwards formatted log lines to a sink (e.g. TUI debug traces).

use std::fmt::Write;

use tracing::field::Visit;
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

// Pathological events (full reply payloads at trace level) get truncated
// rather than flooding the traces screen.
const MAX_LINE_LEN: usize = 32_000;

/// Builds a single line from an event: "[LEVEL] target: message key=value ..."
struct LineVisitor {
    buf: String,
}

impl LineVisitor {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(256),
        }
    }

    fn push_sep(&mut self) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
    }

    fn finish(self) -> String {
        self.buf
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.push_sep();
        if field.name() == "message" {
            self.buf.push_str(value);
        } else {
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.push_sep();
        if field.name() == "message" {
            write!(self.buf, "{:?}", value).ok();
        } else {
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }
}

/// Layer that sends each formatted event to the given sink when present. The sink must not block.
pub(crate) fn tui_log_layer(sink: Option<LogSink>) -> TuiLogLayer {
    TuiLogLayer { sink }
}

#[derive(Clone)]
pub(crate) struct TuiLogLayer {
    sink: Option<LogSink>,
}

impl<S> Layer<S> for TuiLogLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let Some(sink) = &self.sink else {
            return;
        };
        let level = *event.metadata().level();
        let target = event.metadata().target();
        let mut visitor = LineVisitor::new();
        event.record(&mut visitor);
        let rest = visitor.finish();
        let line = if rest.is_empty() {
            format!("[{}] {}", level, target)
        } else {
            format!("[{}] {}: {}", level, target, rest)
        };
        sink(truncate_line(line));
    }
}

fn truncate_line(line: String) -> String {
    if line.len() <= MAX_LINE_LEN {
        return line;
    }
    let trunc: String = line.chars().take(MAX_LINE_LEN).collect();
    format!("{}… ({} chars)", trunc, line.len())
}
