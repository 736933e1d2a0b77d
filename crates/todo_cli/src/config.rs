//! Environment-driven CLI configuration.
//!
//! # Responsibility
//! - Build the session's `LogSettings` and seeding flag from env vars.
//!
//! # Invariants
//! - Parsing never fails; unset, blank or unknown values fall back to
//!   defaults.
//! - A relative log directory is resolved against the working directory.

use log::LevelFilter;
use std::path::{Path, PathBuf};
use todo_core::LogSettings;

pub const LOG_LEVEL_ENV: &str = "TODO_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "TODO_LOG_DIR";
pub const SEED_SAMPLES_ENV: &str = "TODO_SEED_SAMPLES";

const DEFAULT_LOG_DIR_NAME: &str = "todo-cli-logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub logging: LogSettings,
    /// `TODO_LOG_LEVEL` value that did not name a level.
    pub unknown_level: Option<String>,
    /// Whether sample todos are added at startup.
    pub seed_samples: bool,
}

impl CliConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| std::env::temp_dir());
        Self::from_lookup(&cwd, |key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup; relative log
    /// directories are joined onto `cwd`.
    pub fn from_lookup(cwd: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let dir = value(LOG_DIR_ENV)
            .map(|raw| cwd.join(raw))
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME));
        let mut logging = LogSettings::new(dir);
        let mut unknown_level = None;
        if let Some(raw) = value(LOG_LEVEL_ENV) {
            match raw.parse::<LevelFilter>() {
                Ok(level) => logging = logging.with_level(level),
                Err(_) => unknown_level = Some(raw),
            }
        }

        Self {
            logging,
            unknown_level,
            seed_samples: value(SEED_SAMPLES_ENV)
                .map(|raw| parse_flag(&raw))
                .unwrap_or(true),
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::{CliConfig, LOG_DIR_ENV, LOG_LEVEL_ENV, SEED_SAMPLES_ENV};
    use log::LevelFilter;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    fn config_from(pairs: &[(&str, &str)]) -> CliConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        CliConfig::from_lookup(Path::new("/home/user"), |key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.logging.level, todo_core::default_level());
        assert!(config.logging.dir.ends_with("todo-cli-logs"));
        assert!(config.logging.dir.is_absolute());
        assert_eq!(config.unknown_level, None);
        assert!(config.seed_samples);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = config_from(&[
            (LOG_LEVEL_ENV, " WARN "),
            (LOG_DIR_ENV, "/var/log/todo"),
            (SEED_SAMPLES_ENV, "OFF"),
        ]);
        assert_eq!(config.logging.level, LevelFilter::Warn);
        assert_eq!(config.logging.dir, PathBuf::from("/var/log/todo"));
        assert!(!config.seed_samples);
    }

    #[test]
    fn relative_log_dir_is_resolved_against_cwd() {
        let config = config_from(&[(LOG_DIR_ENV, "logs")]);
        assert_eq!(config.logging.dir, PathBuf::from("/home/user/logs"));
    }

    #[test]
    fn unknown_level_keeps_default_and_is_reported() {
        let config = config_from(&[(LOG_LEVEL_ENV, "verbose")]);
        assert_eq!(config.logging.level, todo_core::default_level());
        assert_eq!(config.unknown_level.as_deref(), Some("verbose"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[(LOG_LEVEL_ENV, "  "), (SEED_SAMPLES_ENV, "")]);
        assert_eq!(config.logging.level, todo_core::default_level());
        assert_eq!(config.unknown_level, None);
        assert!(config.seed_samples);
    }
}
