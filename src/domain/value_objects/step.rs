//! Step value objects - the two actions run per controller and how they ended

use std::fmt;

use serde::Serialize;

/// One of the two actions run for every selected controller, in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Copy the source file to the controller
    Copy,
    /// Clean and rebuild in the remote directory
    Build,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Copy => "copy",
            StepKind::Build => "build",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a single step ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepStatus {
    /// The tool exited with status 0
    Succeeded,
    /// The tool exited non-zero, or was killed by a signal (`exit_code` is `None`)
    Failed { exit_code: Option<i32> },
    /// The tool could not be started
    SpawnFailed { message: String },
    /// Nothing was run
    DryRun,
}

impl StepStatus {
    pub fn from_exit_code(exit_code: Option<i32>) -> Self {
        match exit_code {
            Some(0) => StepStatus::Succeeded,
            code => StepStatus::Failed { exit_code: code },
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            StepStatus::Failed { .. } | StepStatus::SpawnFailed { .. }
        )
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepStatus::Succeeded => f.write_str("ok"),
            StepStatus::Failed {
                exit_code: Some(code),
            } => write!(f, "exit code {}", code),
            StepStatus::Failed { exit_code: None } => f.write_str("terminated by signal"),
            StepStatus::SpawnFailed { message } => write!(f, "not started: {}", message),
            StepStatus::DryRun => f.write_str("dry run"),
        }
    }
}
