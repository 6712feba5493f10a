//! Shared types, error model, and configuration for aortascreen.
//!
//! This crate is the foundation depended on by all other aortascreen crates.
//! It provides:
//! - [`AortascreenError`] — the unified error type
//! - The [`Category`] domain type
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, PatternsConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{AortascreenError, Result};
pub use types::Category;
