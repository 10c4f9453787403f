//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Resolve the selector argument against the inventory
//! 2. Walk the inventory in order, skipping unselected controllers
//! 3. For each selected controller, copy the source then run the remote build
//!
//! Every step blocks until its process exits. Nothing runs concurrently.

use crate::config::DeployConfig;
use crate::domain::entities::InventoryEntry;
use crate::domain::ports::{CommandRunner, DeployEvent, DeployEventSink, RemoteCommand};
use crate::domain::value_objects::{SelectorSet, StepKind, StepStatus};

use super::options::DeployOptions;
use super::result::{DeployReport, EntryReport};

/// Deploy use case, parameterized by the runner that starts processes
pub struct DeployUseCase<'a, R>
where
    R: CommandRunner,
{
    config: &'a DeployConfig,
    runner: R,
}

impl<'a, R> DeployUseCase<'a, R>
where
    R: CommandRunner,
{
    pub fn new(config: &'a DeployConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolve the selector and deploy to every matching controller
    pub fn execute(
        &self,
        selector: &str,
        options: &DeployOptions,
        events: &dyn DeployEventSink,
    ) -> DeployReport {
        let selected = self.resolve_selector(selector, events);
        self.deploy_all(&selected, options, events)
    }

    /// Resolve a raw selector argument and announce the result
    pub fn resolve_selector(&self, arg: &str, events: &dyn DeployEventSink) -> SelectorSet {
        let inventory = &self.config.inventory;
        let selected = SelectorSet::resolve(arg, inventory);

        events.on_event(DeployEvent::SelectorResolved {
            selected: selected.names().to_vec(),
            unmatched: selected
                .unmatched(inventory)
                .into_iter()
                .map(String::from)
                .collect(),
        });

        selected
    }

    /// Copy and rebuild on every selected controller, in inventory order.
    ///
    /// Under `FailurePolicy::Continue` a failed step is only recorded; under
    /// `FailFast` the run stops right after it.
    pub fn deploy_all(
        &self,
        selected: &SelectorSet,
        options: &DeployOptions,
        events: &dyn DeployEventSink,
    ) -> DeployReport {
        let builder = self.config.command_builder();
        let stop_on_failure = options.policy.stops_on_failure();
        let mut report = DeployReport::default();

        for entry in self.config.inventory.entries() {
            if !selected.contains(entry.name()) {
                continue;
            }

            events.on_event(DeployEvent::EntryStarted {
                index: report.entries.len(),
                name: entry.name().to_string(),
                host: entry.host().to_string(),
            });

            let copy = self.run_step(entry, StepKind::Copy, &builder.copy_command(entry), events);
            let mut entry_report = EntryReport::new(entry.name(), entry.host(), copy);

            if stop_on_failure && entry_report.copy.is_failure() {
                report.entries.push(entry_report);
                report.aborted = true;
                break;
            }

            let build = self.run_step(entry, StepKind::Build, &builder.build_command(entry), events);
            let build_failed = build.is_failure();
            entry_report.build = Some(build);
            report.entries.push(entry_report);

            if stop_on_failure && build_failed {
                report.aborted = true;
                break;
            }
        }

        events.on_event(DeployEvent::Completed {
            deployed: report.entries.len(),
            failed_steps: report.failed_steps(),
            aborted: report.aborted,
        });

        report
    }

    /// Announce, run, and classify a single command
    fn run_step(
        &self,
        entry: &InventoryEntry,
        step: StepKind,
        command: &RemoteCommand,
        events: &dyn DeployEventSink,
    ) -> StepStatus {
        events.on_event(DeployEvent::StepStarted {
            name: entry.name().to_string(),
            step,
            command: command.to_string(),
        });

        let status = match self.runner.run(command) {
            Ok(_) if self.runner.is_dry_run() => StepStatus::DryRun,
            Ok(outcome) => StepStatus::from_exit_code(outcome.exit_code),
            Err(err) => StepStatus::SpawnFailed {
                message: err.to_string(),
            },
        };

        events.on_event(DeployEvent::StepFinished {
            name: entry.name().to_string(),
            step,
            status: status.clone(),
        });

        status
    }
}
