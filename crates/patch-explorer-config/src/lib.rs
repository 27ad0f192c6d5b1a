//! Configuration for patch-explorer
//!
//! This crate provides:
//! - Config file locations
//! - Configuration file loading (TOML)
//! - Explorer configuration (ExplorerConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::ExplorerConfig;
pub use config_file::load_config_file;
