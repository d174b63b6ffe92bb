// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! Resolution order: explicit override parameter (tests), `--config-dir`
//! CLI flag, `ICED_KEEPSAKE_CONFIG_DIR` environment variable, then the
//! platform config directory via `dirs`.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedKeepsake";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_KEEPSAKE_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI override. Call once at startup, before
/// any path resolution.
pub fn init_cli_override(config_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

/// Resolves the application config directory with an optional explicit
/// override (highest priority, used by tests).
pub fn config_dir_with_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        return Some(dir);
    }
    if let Some(Some(dir)) = CLI_CONFIG_DIR.get() {
        return Some(dir.clone());
    }
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let dir = config_dir_with_override(Some(PathBuf::from("/tmp/keepsake-test")));
        assert_eq!(dir, Some(PathBuf::from("/tmp/keepsake-test")));
    }

    #[test]
    fn default_resolution_yields_some_path_on_desktop_platforms() {
        // Either a platform dir exists or an env var points somewhere; both
        // are acceptable, only a panic would be a bug.
        let _ = config_dir_with_override(None);
    }
}
