//! Error logging contract

use std::fmt::Debug;

use serde_json::Value;

/// Sink for structured error events
///
/// Fire-and-forget: implementations must not panic and have no failure mode
/// of their own. The repository logs through this capability instead of a
/// global so tests can substitute a recording collaborator.
pub trait ErrorLogger: Send + Sync + Debug {
    /// Records an error event with contextual fields
    fn error(&self, message: &str, context: Value);
}

/// Logger forwarding error events to `tracing`
#[derive(Debug, Clone, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorLogger for TracingLogger {
    fn error(&self, message: &str, context: Value) {
        tracing::error!(context = %context, "{}", message);
    }
}
