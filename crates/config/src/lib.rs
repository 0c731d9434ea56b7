pub mod schema;
pub mod watcher;

pub use schema::{GraphConfig, ThemeConfig};
pub use watcher::ConfigWatcher;

use graph_core::{GraphError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `GraphConfig::default()`
/// if the file doesn't exist so the panel always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<GraphConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(GraphConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| GraphError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let mut config: GraphConfig =
        toml::from_str(&raw).map_err(|e| GraphError::Config(format!("TOML parse error: {e}")))?;

    // A zero interval would spin the sampler; fall back to the default
    // cadence rather than reject the whole file.
    if config.interval_ms == 0 {
        tracing::warn!("interval_ms = 0 is invalid; using 1500");
        config.interval_ms = GraphConfig::default().interval_ms;
    }

    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("cpugraph").join("cpugraph.toml")
}
