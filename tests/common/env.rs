//! Test environment builder for isolated rocdeploy runs.
//!
//! Provides `TestEnv` - a temp directory holding fake `scp` and `ssh`
//! scripts that log their arguments instead of touching the network.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running the rocdeploy binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated environment with fake remote tools.
pub struct TestEnv {
    root: TempDir,
    bin_dir: PathBuf,
    log_path: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Run rocdeploy with the fake tools first on `PATH`
    pub fn run(&self, args: &[&str]) -> TestResult {
        let original_path = std::env::var("PATH").unwrap_or_default();
        let output = Command::new(env!("CARGO_BIN_EXE_rocdeploy"))
            .current_dir(self.root.path())
            .args(args)
            .env("PATH", format!("{}:{}", self.bin_dir.display(), original_path))
            .env("NO_COLOR", "1")
            .env("LANG", "C")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .env_remove("ROCDEPLOY_COPY_TOOL")
            .env_remove("ROCDEPLOY_REMOTE_TOOL")
            .output()
            .expect("Failed to execute rocdeploy");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Every fake tool invocation, one line each: `<tool> <args...>`
    pub fn tool_calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log_path)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    scp_exit: i32,
    ssh_exit: i32,
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self {
            scp_exit: 0,
            ssh_exit: 0,
        }
    }
}

impl TestEnvBuilder {
    /// Make the fake `scp` exit with this code
    pub fn scp_exit(mut self, code: i32) -> Self {
        self.scp_exit = code;
        self
    }

    /// Make the fake `ssh` exit with this code
    pub fn ssh_exit(mut self, code: i32) -> Self {
        self.ssh_exit = code;
        self
    }

    pub fn build(self) -> TestEnv {
        let root = TempDir::new().expect("Failed to create temp dir");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_path = root.path().join("tools.log");

        write_fake_tool(&bin_dir, "scp", &log_path, self.scp_exit);
        write_fake_tool(&bin_dir, "ssh", &log_path, self.ssh_exit);

        TestEnv {
            root,
            bin_dir,
            log_path,
        }
    }
}

fn write_fake_tool(bin_dir: &Path, name: &str, log_path: &Path, exit_code: i32) {
    let path = bin_dir.join(name);
    fs::write(
        &path,
        format!(
            "#!/bin/sh\necho \"{name} $*\" >> \"{log}\"\necho \"fake {name} ran\"\nexit {code}\n",
            name = name,
            log = log_path.display(),
            code = exit_code
        ),
    )
    .expect("Failed to write fake tool");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake tool executable");
}
