//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output only ever goes to a
//! file. Logging is off unless `logging.enabled` is set in the config or the
//! `EDGEAI_SHOWCASE_LOG` environment variable names a log file. Daily files
//! are named `edgeai-showcase_<date>.log` inside the configured log directory.

use crate::config::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_PATH_ENV: &str = "EDGEAI_SHOWCASE_LOG";

/// Where log output should go, or `None` when logging is disabled.
pub fn log_path(config: &LoggingConfig, env_override: Option<String>) -> Option<PathBuf> {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    if !config.enabled {
        return None;
    }
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    Some(expand_home(&config.log_dir).join(format!("edgeai-showcase_{}.log", date)))
}

fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(dir)
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
/// Failures are reported on stderr and leave logging disabled.
pub fn init(config: &LoggingConfig) {
    let Some(path) = log_path(config, std::env::var(LOG_PATH_ENV).ok()) else {
        return;
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: cannot create log directory {}: {}", parent.display(), e);
            return;
        }
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: a global tracing subscriber is already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_by_default() {
        assert_eq!(log_path(&LoggingConfig::default(), None), None);
    }

    #[test]
    fn test_env_override_wins() {
        let path = log_path(&LoggingConfig::default(), Some("/tmp/showcase.log".into()));
        assert_eq!(path, Some(PathBuf::from("/tmp/showcase.log")));
        assert_eq!(log_path(&LoggingConfig::default(), Some(String::new())), None);
    }

    #[test]
    fn test_enabled_uses_dated_file_in_log_dir() {
        let config = LoggingConfig {
            enabled: true,
            log_dir: "/var/tmp/showcase-logs".into(),
            level: "debug".into(),
        };
        let path = log_path(&config, None).unwrap();
        assert!(path.starts_with("/var/tmp/showcase-logs"));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("edgeai-showcase_"));
        assert!(name.ends_with(".log"));
    }

    #[test]
    fn test_expand_home_leaves_absolute_paths() {
        assert_eq!(expand_home("/srv/logs"), PathBuf::from("/srv/logs"));
    }
}
