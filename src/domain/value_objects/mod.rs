//! Value Objects
//!
//! Immutable types without identity.

mod failure_policy;
mod selector;
mod step;

pub use failure_policy::FailurePolicy;
pub use selector::{SelectorSet, ALL_TOKEN, NAME_PREFIX};
pub use step::{StepKind, StepStatus};
