//! Dry-run Command Runner

use crate::domain::ports::{CommandOutcome, CommandRunner, RemoteCommand};
use crate::error::DeployResult;

/// Pretends every command succeeded without starting anything
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunCommandRunner;

impl CommandRunner for DryRunCommandRunner {
    fn run(&self, _command: &RemoteCommand) -> DeployResult<CommandOutcome> {
        Ok(CommandOutcome::exited(0))
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}
