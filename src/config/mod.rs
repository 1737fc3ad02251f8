//! Configuration module for bankdesk
//!
//! This module provides configuration management including:
//! - data directory resolution
//! - operator settings persistence

pub mod paths;
pub mod settings;

pub use paths::BankPaths;
pub use settings::Settings;
