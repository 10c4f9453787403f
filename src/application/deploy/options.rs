//! Deploy options

use crate::domain::value_objects::FailurePolicy;

/// Options for a deploy run
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// What a failed step does to the rest of the run
    pub policy: FailurePolicy,
}

impl DeployOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}
