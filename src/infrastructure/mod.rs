//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process and output I/O.
//!
//! ## Structure
//!
//! - `process/` - Command runners (system processes, dry run)
//! - `events/` - Event sinks (NDJSON)

pub mod events;
pub mod process;

// Re-export for convenience
pub use events::JsonEventSink;
pub use process::{DryRunCommandRunner, SystemCommandRunner};
