//! Trace sinks for step-by-step factorization output.
//!
//! The engine never writes to a global logger by itself. A caller that wants
//! to see the intermediate steps hands a [`TraceSink`] to the
//! [`Factorizer`](crate::Factorizer):
//!
//! - [`NoopSink`]: discards everything (the default, zero output).
//! - [`CollectSink`]: keeps rendered lines in memory, in emission order.
//! - [`LogSink`]: forwards lines to the [`log`] facade at `info` level.
//!
//! Tracing is purely observational: the sink cannot influence the result.

use std::fmt;

/// `log` target used by [`LogSink`].
pub const TRACE_TARGET: &str = "primefactor::trace";

/// Receiver for human-readable trace lines, one per notable algorithm step.
pub trait TraceSink {
    /// Record one trace line.
    fn emit(&mut self, line: fmt::Arguments<'_>);

    /// Whether emitted lines go anywhere. Callers may skip expensive
    /// formatting when this is false.
    fn is_enabled(&self) -> bool {
        true
    }
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn emit(&mut self, line: fmt::Arguments<'_>) {
        (**self).emit(line);
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

/// Sink that drops every line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn emit(&mut self, _line: fmt::Arguments<'_>) {}

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Sink that captures every line in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectSink {
    lines: Vec<String>,
}

impl CollectSink {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines captured so far, in emission order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the collector and return its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl TraceSink for CollectSink {
    fn emit(&mut self, line: fmt::Arguments<'_>) {
        self.lines.push(line.to_string());
    }
}

/// Sink that forwards each line to `log::info!` under [`TRACE_TARGET`].
///
/// The host process decides where that ends up (e.g. `env_logger` in the
/// `primefactor` binary).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn emit(&mut self, line: fmt::Arguments<'_>) {
        log::info!(target: TRACE_TARGET, "{line}");
    }

    fn is_enabled(&self) -> bool {
        log::log_enabled!(target: TRACE_TARGET, log::Level::Info)
    }
}
