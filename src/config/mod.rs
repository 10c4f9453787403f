//! Configuration module for rocdeploy
//!
//! There is no configuration file. Settings come from, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (ROCDEPLOY_*)
//! 3. Built-in defaults (the compiled-in inventory below)

mod env;
mod inventory;

pub use env::{apply_env_overrides, COPY_TOOL_ENV, NO_COLOR_ENV, REMOTE_TOOL_ENV};
pub use inventory::{default_inventory, REMOTE_TARGET_DIR, ROC_TABLE};

use crate::domain::entities::Inventory;
use crate::domain::services::{BuildRecipe, CommandBuilder, ToolSet};
use crate::error::DeployResult;

/// Everything a deploy run needs, built once at startup and passed explicitly
#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub inventory: Inventory,
    pub tools: ToolSet,
    pub recipe: BuildRecipe,
}

impl DeployConfig {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            tools: ToolSet::default(),
            recipe: BuildRecipe::default(),
        }
    }

    pub fn command_builder(&self) -> CommandBuilder<'_> {
        CommandBuilder::new(&self.tools, &self.recipe, self.inventory.remote_dir())
    }
}

/// Built-in inventory with environment overrides applied
pub fn load_config() -> DeployResult<DeployConfig> {
    let mut config = DeployConfig::new(default_inventory()?);
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}
