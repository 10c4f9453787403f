//! rocdeploy CLI - copy readout sources to Readout Controllers and rebuild them
//!
//! Usage: rocdeploy [OPTIONS] <SELECTOR>
//!
//!   rocdeploy all        deploy to every controller
//!   rocdeploy 6,8,10     deploy to ROC6, ROC8 and ROC10
//!   rocdeploy --list     show the controller inventory

mod ui;

use anyhow::Result;
use clap::Parser;

use rocdeploy::presentation::Cli;
use rocdeploy::{
    load_config, CommandRunner, DeployConfig, DeployEventSink, DeployOptions, DeployUseCase,
    DryRunCommandRunner, FailurePolicy, JsonEventSink, SystemCommandRunner,
};

use crate::ui::context::UiContext;
use crate::ui::views::deploy::ConsoleEventSink;
use crate::ui::views::inventory::render_inventory;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    let config = load_config()?;

    if cli.list {
        return cmd_list(&config, &ui);
    }

    let Some(selector) = cli.selector.as_deref() else {
        anyhow::bail!("a selector is required: `all` or suffixes such as `6,8`");
    };

    let options =
        DeployOptions::new().with_policy(FailurePolicy::from_fail_fast(cli.fail_fast));

    let sink: Box<dyn DeployEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::new(
            ui,
            config.inventory.remote_dir(),
            cli.dry_run,
        ))
    };

    if cli.dry_run {
        cmd_deploy(&config, DryRunCommandRunner, selector, &options, sink.as_ref())
    } else {
        let runner = SystemCommandRunner::new().with_stdout_to_stderr(ui.json);
        cmd_deploy(&config, runner, selector, &options, sink.as_ref())
    }
}

fn cmd_deploy<R: CommandRunner>(
    config: &DeployConfig,
    runner: R,
    selector: &str,
    options: &DeployOptions,
    sink: &dyn DeployEventSink,
) -> Result<()> {
    let use_case = DeployUseCase::new(config, runner);
    let report = use_case.execute(selector, options, sink);

    // Only an aborted fail-fast run turns into a non-zero exit
    report.into_result()?;
    Ok(())
}

fn cmd_list(config: &DeployConfig, ui: &UiContext) -> Result<()> {
    if ui.json {
        let output = serde_json::json!({
            "event": "inventory",
            "remote_dir": config.inventory.remote_dir(),
            "entries": config.inventory.entries(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        print!(
            "{}",
            render_inventory(&config.inventory, ui.color, ui.unicode)
        );
    }
    Ok(())
}
