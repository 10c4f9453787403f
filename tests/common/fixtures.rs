//! Inventory facts shared by CLI tests

pub const REMOTE_DIR: &str = "/home/e906daq/2.6.1/extensions/linuxvme/AllLinuxROC";

pub const ROC6_SOURCE: &str = "ROC16.c";
pub const ROC6_HOST: &str = "192.168.24.26";
pub const ROC8_HOST: &str = "192.168.24.28";
pub const ROC18_SOURCE: &str = "ROC28.c";
pub const ROC18_HOST: &str = "192.168.24.38";

pub const INVENTORY_SIZE: usize = 7;
