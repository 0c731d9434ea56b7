use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `cpugraph.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Sampling cadence in milliseconds.
    pub interval_ms: u64,
    /// Overlay the newest sample as a percentage label.
    pub show_percentage: bool,
    /// Command launched (detached) when the graph is clicked.
    /// Split on whitespace into program + arguments.
    pub task_manager: String,
    /// Colors.
    pub theme: ThemeConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1_500,
            show_percentage: true,
            task_manager: "xfce4-taskmanager".to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Color configuration (hex strings, e.g. `"#00cd00"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Bar color.
    pub foreground: String,
    /// Chart background color.
    pub background: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            foreground: "#00cd00".to_string(), // X11 "green3"
            background: "#000000".to_string(),
        }
    }
}
