//! Compiled-in controller inventory

use crate::domain::entities::{Inventory, InventoryEntry};
use crate::error::DeployResult;

/// Directory on every controller that holds the readout sources and Makefile
pub const REMOTE_TARGET_DIR: &str = "/home/e906daq/2.6.1/extensions/linuxvme/AllLinuxROC";

/// `(name, source file, host)` for each controller, in deploy order
pub const ROC_TABLE: &[(&str, &str, &str)] = &[
    ("ROC6", "ROC16.c", "192.168.24.26"),
    ("ROC8", "ROC18.c", "192.168.24.28"),
    ("ROC10", "ROC20.c", "192.168.24.30"),
    ("ROC12", "ROC22.c", "192.168.24.32"),
    ("ROC16", "ROC26.c", "192.168.24.36"),
    ("ROC17", "ROC27.c", "192.168.24.37"),
    ("ROC18", "ROC28.c", "192.168.24.38"),
];

pub fn default_inventory() -> DeployResult<Inventory> {
    let entries = ROC_TABLE
        .iter()
        .map(|(name, source, host)| InventoryEntry::new(*name, *source, *host))
        .collect();
    Inventory::new(entries, REMOTE_TARGET_DIR)
}
