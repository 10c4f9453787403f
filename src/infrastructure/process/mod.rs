//! Command runner implementations

mod dry_run;
mod system;

pub use dry_run::DryRunCommandRunner;
pub use system::SystemCommandRunner;
