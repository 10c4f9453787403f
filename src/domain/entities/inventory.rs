//! Inventory entity - the readout controllers a deploy can reach

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{DeployError, DeployResult};

/// A single readout controller: its name, the source it builds, and its address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryEntry {
    name: String,
    source_file: PathBuf,
    host: String,
}

impl InventoryEntry {
    pub fn new(
        name: impl Into<String>,
        source_file: impl Into<PathBuf>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source_file: source_file.into(),
            host: host.into(),
        }
    }

    /// Controller name (e.g. `ROC6`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local file copied to the controller (e.g. `ROC16.c`)
    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    /// Network address of the controller
    pub fn host(&self) -> &str {
        &self.host
    }
}

/// Ordered, immutable list of controllers sharing one remote build directory.
///
/// Entry order is the deploy order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    entries: Vec<InventoryEntry>,
    remote_dir: String,
}

impl Inventory {
    /// Build an inventory, rejecting duplicate entry names
    pub fn new(entries: Vec<InventoryEntry>, remote_dir: impl Into<String>) -> DeployResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(DeployError::DuplicateEntry {
                    name: entry.name.clone(),
                });
            }
        }

        Ok(Self {
            entries,
            remote_dir: remote_dir.into(),
        })
    }

    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    /// Entry names in inventory order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name())
    }

    pub fn get(&self, name: &str) -> Option<&InventoryEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Absolute directory on every controller that receives the source and runs the build
    pub fn remote_dir(&self) -> &str {
        &self.remote_dir
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
