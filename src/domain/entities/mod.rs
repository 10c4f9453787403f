//! Domain Entities

mod inventory;

pub use inventory::{Inventory, InventoryEntry};
