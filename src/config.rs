//! Runtime configuration.
//!
//! Values come from the process environment. On native builds a `.env` file is
//! loaded first; when none exists (packaged desktop and mobile builds) the
//! bundled `assets/config.env` fills in any key the environment leaves unset.

use crate::types::{UnknownView, View};
use once_cell::sync::OnceCell;
use std::env;
use std::time::Duration;

/// Bundled defaults shipped with every build.
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const START_VIEW_KEY: &str = "PRIVATELY_START_VIEW";
pub const REPLY_DELAY_KEY: &str = "PRIVATELY_REPLY_DELAY_MS";
pub const LOG_FILTER_KEY: &str = "PRIVATELY_LOG";

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_LOG_FILTER: &str = "info";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PRIVATELY_START_VIEW: {0}")]
    StartView(#[from] UnknownView),

    #[error("PRIVATELY_REPLY_DELAY_MS must be a whole number of milliseconds, got '{0}'")]
    ReplyDelay(String),

    #[error("configuration already installed")]
    AlreadyInstalled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub start_view: View,
    pub reply_delay: Duration,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_view: View::Dashboard,
            reply_delay: DEFAULT_REPLY_DELAY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(START_VIEW_KEY).filter(|v| !v.trim().is_empty()) {
            config.start_view = raw.parse()?;
        }

        if let Some(raw) = lookup(REPLY_DELAY_KEY).filter(|v| !v.trim().is_empty()) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::ReplyDelay(raw.clone()))?;
            config.reply_delay = Duration::from_millis(millis);
        }

        if let Some(filter) = lookup(LOG_FILTER_KEY).filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter.trim().to_string();
        }

        Ok(config)
    }
}

/// Make `config` visible to the component tree. Only the first call wins.
pub fn install(config: AppConfig) -> Result<(), ConfigError> {
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInstalled)
}

/// The installed config, or defaults when nothing was installed (tests, previews).
pub fn current() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

pub fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    load_bundled_config();
}

fn load_bundled_config() {
    for (key, value) in parse_env_lines(BUNDLED_CONFIG) {
        // Only set if not already set (allow env override)
        if env::var(key).is_err() {
            // SAFETY: called from main before the runtime or any other thread starts
            unsafe {
                env::set_var(key, value);
            }
        }
    }
}

/// `KEY=VALUE` pairs, skipping blanks and `#` comments.
fn parse_env_lines(source: &str) -> impl Iterator<Item = (&str, &str)> {
    source.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        line.split_once('=')
            .map(|(key, value)| (key.trim(), value.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.start_view, View::Dashboard);
        assert_eq!(config.reply_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (START_VIEW_KEY, "chat"),
            (REPLY_DELAY_KEY, "250"),
            (LOG_FILTER_KEY, "privately=debug"),
        ]))
        .unwrap();
        assert_eq!(config.start_view, View::Chat);
        assert_eq!(config.reply_delay, Duration::from_millis(250));
        assert_eq!(config.log_filter, "privately=debug");
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config =
            AppConfig::from_lookup(lookup_from(&[(START_VIEW_KEY, "  "), (REPLY_DELAY_KEY, "")]))
                .unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unknown_view_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(START_VIEW_KEY, "inbox")])).unwrap_err();
        assert!(matches!(err, ConfigError::StartView(_)));
        assert!(err.to_string().contains("inbox"));
    }

    #[test]
    fn test_bad_delay_is_rejected() {
        let err =
            AppConfig::from_lookup(lookup_from(&[(REPLY_DELAY_KEY, "1s")])).unwrap_err();
        assert!(matches!(err, ConfigError::ReplyDelay(ref raw) if raw == "1s"));
    }

    #[test]
    fn test_parse_env_lines() {
        let pairs: Vec<_> =
            parse_env_lines("# comment\n\nPRIVATELY_LOG = warn\nnot a pair\nA=b=c\n").collect();
        assert_eq!(pairs, vec![("PRIVATELY_LOG", "warn"), ("A", "b=c")]);
    }

    #[test]
    fn test_bundled_config_parses() {
        let lookup = |key: &str| {
            parse_env_lines(BUNDLED_CONFIG)
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        };
        assert!(AppConfig::from_lookup(lookup).is_ok());
    }
}
