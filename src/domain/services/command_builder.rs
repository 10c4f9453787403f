//! Command Builder Service
//!
//! Turns an inventory entry into the copy and remote-build commands.

use crate::domain::entities::InventoryEntry;
use crate::domain::ports::RemoteCommand;

/// External programs used for the two steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSet {
    /// Secure copy tool, invoked as `<copy> <file> <host>:<dir>`
    pub copy: String,
    /// Remote shell, invoked as `<remote> <host> "<script>"`
    pub remote: String,
}

impl Default for ToolSet {
    fn default() -> Self {
        Self {
            copy: "scp".to_string(),
            remote: "ssh".to_string(),
        }
    }
}

/// Shell actions run on the controller after `cd`-ing into the remote directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRecipe {
    pub clean: String,
    pub build: String,
}

impl Default for BuildRecipe {
    fn default() -> Self {
        Self {
            clean: "make clean".to_string(),
            build: "make".to_string(),
        }
    }
}

impl BuildRecipe {
    /// Remote script: `cd <dir>;<clean>;<build>`
    pub fn script(&self, remote_dir: &str) -> String {
        format!("cd {};{};{}", remote_dir, self.clean, self.build)
    }
}

/// Builds the per-entry commands for one remote directory
#[derive(Debug, Clone)]
pub struct CommandBuilder<'a> {
    tools: &'a ToolSet,
    recipe: &'a BuildRecipe,
    remote_dir: &'a str,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(tools: &'a ToolSet, recipe: &'a BuildRecipe, remote_dir: &'a str) -> Self {
        Self {
            tools,
            recipe,
            remote_dir,
        }
    }

    pub fn copy_command(&self, entry: &InventoryEntry) -> RemoteCommand {
        RemoteCommand::new(self.tools.copy.as_str())
            .arg(entry.source_file().display().to_string())
            .arg(format!("{}:{}", entry.host(), self.remote_dir))
    }

    pub fn build_command(&self, entry: &InventoryEntry) -> RemoteCommand {
        RemoteCommand::new(self.tools.remote.as_str())
            .arg(entry.host())
            .arg(self.recipe.script(self.remote_dir))
    }
}
