//! Failure policy value object - what a failed step does to the rest of the run

/// How the deployer reacts when a copy or build step fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure and keep going with the next step and entry
    #[default]
    Continue,
    /// Stop at the first failed step
    FailFast,
}

impl FailurePolicy {
    pub fn from_fail_fast(fail_fast: bool) -> Self {
        if fail_fast {
            Self::FailFast
        } else {
            Self::Continue
        }
    }

    pub fn stops_on_failure(&self) -> bool {
        matches!(self, Self::FailFast)
    }
}
