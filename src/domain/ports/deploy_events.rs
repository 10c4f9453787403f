//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables console narration, JSON event streams, and test recording.

use crate::domain::value_objects::{StepKind, StepStatus};

/// Event emitted during a deploy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Selector argument resolved to a set of names
    SelectorResolved {
        selected: Vec<String>,
        unmatched: Vec<String>,
    },

    /// A selected controller is about to be deployed
    EntryStarted {
        index: usize,
        name: String,
        host: String,
    },

    /// A command is about to run
    StepStarted {
        name: String,
        step: StepKind,
        command: String,
    },

    /// A command finished (or was skipped in dry-run mode)
    StepFinished {
        name: String,
        step: StepKind,
        status: StepStatus,
    },

    /// Run finished
    Completed {
        deployed: usize,
        failed_steps: usize,
        aborted: bool,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Human-readable narration in the terminal
/// - JsonEventSink: NDJSON event stream for automation
/// - NoopEventSink: Silent operation
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
