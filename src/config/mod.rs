//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/chirp-insight/config.toml)
//! 3. Project config (.chirp-insight/config.toml)
//! 4. Environment variables (CHIRP_INSIGHT_*)
//! 5. CLI arguments (highest priority)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
