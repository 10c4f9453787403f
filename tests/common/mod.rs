//! Common test utilities for rocdeploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated temp directory with fake `scp`/`ssh` on `PATH`
//! - Fixtures: Inventory facts the assertions rely on

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
