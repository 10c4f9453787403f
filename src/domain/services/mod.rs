//! Domain Services
//!
//! Stateless logic shared by the use cases.

mod command_builder;

pub use command_builder::{BuildRecipe, CommandBuilder, ToolSet};
