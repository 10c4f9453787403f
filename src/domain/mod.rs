//! Domain Layer
//!
//! Pure deploy logic without process or terminal I/O.
//!
//! ## Structure
//!
//! - `entities/` - Inventory and its entries
//! - `value_objects/` - Selector set, step kinds, failure policy
//! - `services/` - Turns an inventory entry into concrete copy/build commands
//! - `ports/` - Interfaces for running commands and reporting events
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Processes are only started through the `CommandRunner` port
//! 2. **Immutable configuration** - The inventory is built once and passed explicitly
//! 3. **Ports & Adapters** - Infrastructure provides the concrete runners and sinks

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
