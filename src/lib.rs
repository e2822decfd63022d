pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use config::{RewriteSettings, SettingsOverrides, TomlConfig};
pub use crate::core::{rewriter::FileRewriter, splice::splice, RewriteOutcome, WriteMode};
pub use utils::error::{Result, RewriteError};
