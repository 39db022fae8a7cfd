//! CLI command handlers.
//!
//! Handlers hold the logic behind each command invoked by main.rs, so they
//! can be tested without spawning the binary.

mod config;
mod diff;

pub use config::{run_config, ConfigAction};
pub use diff::run_diff;

// Re-export config types used by handlers
pub use crate::config::{AppConfig, DiffConfig};
