//! System Command Runner
//!
//! Starts the external tool as a child process and blocks until it exits.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::domain::ports::{CommandOutcome, CommandRunner, RemoteCommand};
use crate::error::{DeployError, DeployResult};

/// Runs commands with `std::process::Command`, inheriting the terminal.
///
/// No timeout is applied: a hung remote session blocks the run.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner {
    /// Send the child's stdout to our stderr (keeps an NDJSON stream on stdout clean)
    stdout_to_stderr: bool,
}

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    fn child_stdout(&self) -> Stdio {
        if self.stdout_to_stderr {
            Stdio::from(std::io::stderr())
        } else {
            Stdio::inherit()
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &RemoteCommand) -> DeployResult<CommandOutcome> {
        // Our own narration must land before the child's output
        let _ = std::io::stdout().flush();

        let status = Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::inherit())
            .stdout(self.child_stdout())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| DeployError::Spawn {
                program: command.program().to_string(),
                source,
            })?;

        Ok(CommandOutcome {
            exit_code: status.code(),
        })
    }
}
