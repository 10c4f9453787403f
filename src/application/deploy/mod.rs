//! Deploy Module
//!
//! Orchestrates the deployment flow for rocdeploy.
//!
//! ## Structure
//!
//! - `options` - Run options (`DeployOptions`)
//! - `result` - Report types (`DeployReport`, `EntryReport`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use rocdeploy::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(&config, SystemCommandRunner::new());
//! let report = use_case.execute("6,8", &DeployOptions::default(), &sink);
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::{DeployReport, EntryReport};
pub use use_case::DeployUseCase;
