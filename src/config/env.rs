//! Environment variable overrides (ROCDEPLOY_* prefix)

use super::DeployConfig;

/// Replaces the secure copy program (default `scp`)
pub const COPY_TOOL_ENV: &str = "ROCDEPLOY_COPY_TOOL";
/// Replaces the remote shell program (default `ssh`)
pub const REMOTE_TOOL_ENV: &str = "ROCDEPLOY_REMOTE_TOOL";
/// Disables colored output when set, alongside the standard `NO_COLOR`
pub const NO_COLOR_ENV: &str = "ROCDEPLOY_NO_COLOR";

/// Apply environment variable overrides. Empty values are ignored.
pub fn apply_env_overrides(config: &mut DeployConfig, get_env: impl Fn(&str) -> Option<String>) {
    // ROCDEPLOY_COPY_TOOL
    if let Some(tool) = non_empty(get_env(COPY_TOOL_ENV)) {
        config.tools.copy = tool;
    }

    // ROCDEPLOY_REMOTE_TOOL
    if let Some(tool) = non_empty(get_env(REMOTE_TOOL_ENV)) {
        config.tools.remote = tool;
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
