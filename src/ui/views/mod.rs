pub mod deploy;
pub mod inventory;
