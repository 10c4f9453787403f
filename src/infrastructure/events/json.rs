//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::SelectorResolved {
                selected,
                unmatched,
            } => {
                serde_json::json!({
                    "event": "selector",
                    "command": "deploy",
                    "selected": selected,
                    "unmatched": unmatched,
                })
            }

            DeployEvent::EntryStarted { index, name, host } => {
                serde_json::json!({
                    "event": "item_start",
                    "command": "deploy",
                    "index": index,
                    "name": name,
                    "host": host,
                })
            }

            DeployEvent::StepStarted {
                name,
                step,
                command,
            } => {
                serde_json::json!({
                    "event": "step_start",
                    "command": "deploy",
                    "name": name,
                    "step": step,
                    "line": command,
                })
            }

            DeployEvent::StepFinished { name, step, status } => {
                serde_json::json!({
                    "event": "step_finish",
                    "command": "deploy",
                    "name": name,
                    "step": step,
                    "result": status,
                })
            }

            DeployEvent::Completed {
                deployed,
                failed_steps,
                aborted,
            } => {
                let status = if aborted {
                    "aborted"
                } else if failed_steps == 0 {
                    "success"
                } else {
                    "partial"
                };
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": status,
                    "deployed": deployed,
                    "failed_steps": failed_steps,
                })
            }
        };

        self.write_event(json);
    }
}
