//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory Specification conventions over
//! OS-specific locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for buddy.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/buddy` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/buddy` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("buddy")),
        _ => Ok(home_dir()?.join(".config").join("buddy")),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
