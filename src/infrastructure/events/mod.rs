//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - JsonEventSink: NDJSON output for automation
//!
//! The human-readable console sink lives with the terminal UI in the binary.

mod json;

pub use json::JsonEventSink;
