use rocdeploy::{DeployEvent, DeployEventSink, StepKind, StepStatus};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::theme::{self, Tone};

pub fn render_deploy_header(
    selected: &[String],
    remote_dir: &str,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = Tone::Info.paint("ROC Deploy").bold().render(supports_color);
    let mut out = format!(
        "{} {}\n",
        Icon::Deploy.colored(supports_color, supports_unicode),
        title
    );
    out.push_str(&format!("Selected: [{}]\n", selected.join(", ")));
    out.push_str(&format!("Remote dir: {}\n", remote_dir));
    if dry_run {
        out.push_str("Mode: Dry run\n");
    }
    out
}

/// Rule line opening each controller's section, e.g. `------------- ROC6`
pub fn render_separator(name: &str, supports_color: bool, supports_unicode: bool) -> String {
    let rule = theme::glyphs::RULE
        .pick(supports_unicode)
        .repeat(theme::RULE_WIDTH);
    format!(
        "{} {}",
        Tone::Dim.paint(rule).render(supports_color),
        Tone::Info.paint(name).bold().render(supports_color)
    )
}

pub fn render_step_status(
    step: StepKind,
    status: &StepStatus,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = match status {
        StepStatus::Succeeded => Icon::Success,
        StepStatus::DryRun => Icon::Skipped,
        StepStatus::Failed { .. } | StepStatus::SpawnFailed { .. } => Icon::Error,
    };
    format!(
        "  {} {}: {}",
        icon.colored(supports_color, supports_unicode),
        step,
        status
    )
}

pub fn render_deploy_summary(
    deployed: usize,
    failed_steps: usize,
    aborted: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if deployed == 0 {
        return format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            Tone::Warning.paint("No controllers matched the selector").render(supports_color)
        );
    }

    let noun = if deployed == 1 { "controller" } else { "controllers" };
    if aborted {
        return format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            Tone::Error.paint(format!("Stopped after {} {} (fail-fast)", deployed, noun))
                .render(supports_color)
        );
    }

    if failed_steps == 0 {
        return format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            Tone::Success.paint(format!("Deployed {} {}", deployed, noun)).render(supports_color)
        );
    }

    format!(
        "{} {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        Tone::Warning.paint(format!(
            "Deployed {} {}, {} failed step(s)",
            deployed, noun, failed_steps
        ))
        .render(supports_color)
    )
}

/// Human-readable narration of a deploy run
pub struct ConsoleEventSink {
    ui: UiContext,
    remote_dir: String,
    dry_run: bool,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext, remote_dir: impl Into<String>, dry_run: bool) -> Self {
        Self {
            ui,
            remote_dir: remote_dir.into(),
            dry_run,
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let (color, unicode) = (self.ui.color, self.ui.unicode);

        match event {
            DeployEvent::SelectorResolved {
                selected,
                unmatched,
            } => {
                print!(
                    "{}",
                    render_deploy_header(&selected, &self.remote_dir, self.dry_run, color, unicode)
                );
                if self.ui.is_verbose() {
                    for name in unmatched {
                        eprintln!(
                            "{} No controller named {} (ignored)",
                            Icon::Warning.colored(color, unicode),
                            name
                        );
                    }
                }
            }

            DeployEvent::EntryStarted { name, .. } => {
                println!("{}", render_separator(&name, color, unicode));
            }

            // The literal command line, before the tool writes anything
            DeployEvent::StepStarted { command, .. } => {
                println!("{}", command);
            }

            DeployEvent::StepFinished { step, status, .. } => {
                if status.is_failure() {
                    eprintln!("{}", render_step_status(step, &status, color, unicode));
                } else if self.ui.is_verbose() {
                    println!("{}", render_step_status(step, &status, color, unicode));
                }
            }

            DeployEvent::Completed {
                deployed,
                failed_steps,
                aborted,
            } => {
                println!();
                println!(
                    "{}",
                    render_deploy_summary(deployed, failed_steps, aborted, color, unicode)
                );
            }
        }
    }
}
