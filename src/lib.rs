//! rocdeploy - deploy readout-list sources to Readout Controllers
//!
//! Copies each selected controller's source file to its remote build
//! directory with `scp`, then cleans and rebuilds there over `ssh`.
//! Controllers are visited one at a time, in inventory order.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployReport, DeployUseCase, EntryReport};
pub use config::{default_inventory, load_config, DeployConfig};
pub use domain::entities::{Inventory, InventoryEntry};
pub use domain::ports::{CommandOutcome, CommandRunner, DeployEvent, DeployEventSink, RemoteCommand};
pub use domain::value_objects::{FailurePolicy, SelectorSet, StepKind, StepStatus};
pub use error::{DeployError, DeployResult};
pub use infrastructure::{DryRunCommandRunner, JsonEventSink, SystemCommandRunner};
