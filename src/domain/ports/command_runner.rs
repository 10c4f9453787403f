//! Command Runner Port
//!
//! Abstracts starting an external tool (scp, ssh) and waiting for it.
//! The deploy use case never touches `std::process` directly, which lets
//! tests swap in recording or failing runners.

use std::fmt;

use crate::error::DeployResult;

/// An external program plus its arguments.
///
/// `Display` renders the line as it would be typed in a shell, which is
/// what gets printed before the command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommand {
    program: String,
    args: Vec<String>,
}

impl RemoteCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for RemoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if needs_quoting(arg) {
                write!(f, " \"{}\"", arg.replace('"', "\\\""))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

fn needs_quoting(arg: &str) -> bool {
    arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, ';' | '&' | '|' | '"' | '\'' | '$'))
}

/// Exit information of a finished command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
}

impl CommandOutcome {
    pub fn exited(code: i32) -> Self {
        Self {
            exit_code: Some(code),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs one command to completion.
///
/// Implementations block until the process exits and let it write to the
/// caller's terminal; nothing is captured.
pub trait CommandRunner {
    /// Run the command, returning `Err` only if it could not be started
    fn run(&self, command: &RemoteCommand) -> DeployResult<CommandOutcome>;

    /// Whether this runner actually starts processes
    fn is_dry_run(&self) -> bool {
        false
    }
}
