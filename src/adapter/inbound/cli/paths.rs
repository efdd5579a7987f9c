//! Path utilities for frontier.
//!
//! All data lives under `~/.frontier/`:
//! - `~/.frontier/config.toml` - optional configuration

use std::path::PathBuf;

/// Returns the frontier home directory (`~/.frontier/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".frontier")
}

/// Returns the default config file path (`~/.frontier/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_under_frontier_home() {
        let config = default_config();

        assert!(config.starts_with(home_dir()));
        assert!(config.to_string_lossy().contains(".frontier"));
        assert!(config.ends_with("config.toml"));
    }
}
