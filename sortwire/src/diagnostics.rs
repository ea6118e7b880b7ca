//! Diagnostic logging for the codec
//!
//! Best-effort encoding reports skipped terms through a [`DiagnosticLogger`]
//! injected at encoder construction rather than a process-wide singleton, so
//! embedding applications route diagnostics wherever they route the rest of
//! their telemetry and tests can substitute a capturing implementation.

use std::error::Error as StdError;

/// Sink for codec diagnostics
///
/// Implementations must be safe to call concurrently without external
/// locking; the encoder shares one instance across every call.
pub trait DiagnosticLogger: Send + Sync {
    /// Check whether error-level diagnostics are currently recorded
    ///
    /// The encoder consults this before formatting a message, so disabled
    /// sinks cost nothing on the skip path.
    fn error_enabled(&self) -> bool;

    /// Record an error-level diagnostic with its underlying cause
    fn error(&self, message: &str, cause: &(dyn StdError + 'static));
}

/// [`DiagnosticLogger`] backed by the `tracing` facade
///
/// This is the default logger for encoders; it emits through whatever
/// subscriber the embedding application installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create a new tracing-backed logger
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticLogger for TracingLogger {
    fn error_enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::ERROR)
    }

    fn error(&self, message: &str, cause: &(dyn StdError + 'static)) {
        tracing::error!(cause = %cause, "{}", message);
    }
}
