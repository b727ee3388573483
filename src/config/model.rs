//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Terminals narrower than this many columns get the compact presentation.
    #[serde(default = "default_compact_breakpoint")]
    pub compact_breakpoint: u16,
    /// Lines moved per arrow key or wheel notch.
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint: default_compact_breakpoint(),
            scroll_step: default_scroll_step(),
            show_key_hints: true,
        }
    }
}

/// External link destinations. Shown as text, never opened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    #[serde(default = "default_repository_url")]
    pub repository_url: String,
    #[serde(default = "default_docs_url")]
    pub docs_url: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            repository_url: default_repository_url(),
            docs_url: default_docs_url(),
        }
    }
}

/// Diagnostic log settings. Output goes to a file since the terminal is in use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_compact_breakpoint() -> u16 {
    100
}
fn default_scroll_step() -> u16 {
    3
}
fn default_repository_url() -> String {
    "https://github.com".to_string()
}
fn default_docs_url() -> String {
    "#".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/edgeai-showcase/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
