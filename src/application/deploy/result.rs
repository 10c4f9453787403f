//! Deploy report types

use serde::Serialize;

use crate::domain::value_objects::{StepKind, StepStatus};
use crate::error::{DeployError, DeployResult};

/// Outcome of the steps run for one controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    pub name: String,
    pub host: String,
    pub copy: StepStatus,
    /// `None` when the run stopped before the build step
    pub build: Option<StepStatus>,
}

impl EntryReport {
    pub fn new(name: impl Into<String>, host: impl Into<String>, copy: StepStatus) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            copy,
            build: None,
        }
    }

    /// Steps in the order they ran
    pub fn steps(&self) -> impl Iterator<Item = (StepKind, &StepStatus)> {
        std::iter::once((StepKind::Copy, &self.copy))
            .chain(self.build.iter().map(|b| (StepKind::Build, b)))
    }

    pub fn is_success(&self) -> bool {
        self.steps().all(|(_, status)| !status.is_failure())
    }
}

/// Result of a whole deploy run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeployReport {
    /// Visited controllers, in inventory order
    pub entries: Vec<EntryReport>,
    /// Set when the fail-fast policy stopped the run early
    pub aborted: bool,
}

impl DeployReport {
    pub fn failed_steps(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|e| e.steps())
            .filter(|(_, status)| status.is_failure())
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failed_steps() == 0
    }

    /// First failed step as `(controller, step, status)`
    pub fn first_failure(&self) -> Option<(&str, StepKind, &StepStatus)> {
        self.entries.iter().find_map(|e| {
            e.steps()
                .find(|(_, status)| status.is_failure())
                .map(|(step, status)| (e.name.as_str(), step, status))
        })
    }

    /// Turn an aborted run into an error; a run that kept going always succeeds
    pub fn into_result(self) -> DeployResult<Self> {
        if !self.aborted {
            return Ok(self);
        }

        let failure = self
            .first_failure()
            .map(|(name, step, status)| DeployError::StepFailed {
                name: name.to_string(),
                step,
                detail: status.to_string(),
            });

        match failure {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}
