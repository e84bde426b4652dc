use std::env;

use crate::{DEVTOOLS_ENV, DEV_SERVER_URL_ENV, HEARTBEAT_ENV, NATIVE_FRAME_ENV};

/// Runtime switches read once at startup from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShellConfig {
    pub(crate) dev_server_url: Option<String>,
    pub(crate) force_borderless: bool,
    /// Only consulted by debug builds; release builds carry no devtools.
    pub(crate) devtools_enabled: bool,
    pub(crate) heartbeat_enabled: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            dev_server_url: None,
            force_borderless: true,
            devtools_enabled: true,
            heartbeat_enabled: true,
        }
    }
}

pub(crate) fn parse_env_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl ShellConfig {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            lookup(key)
                .as_deref()
                .and_then(parse_env_flag)
                .unwrap_or(default)
        };

        Self {
            dev_server_url: lookup(DEV_SERVER_URL_ENV)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            // NATIVE_FRAME=1 turns the borderless override off.
            force_borderless: !flag(NATIVE_FRAME_ENV, !defaults.force_borderless),
            devtools_enabled: flag(DEVTOOLS_ENV, defaults.devtools_enabled),
            heartbeat_enabled: flag(HEARTBEAT_ENV, defaults.heartbeat_enabled),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ShellConfig {
        let table: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ShellConfig::from_lookup(|key| table.get(key).cloned())
    }

    #[test]
    fn from_lookup_uses_defaults_for_empty_environment() {
        assert_eq!(config_from(&[]), ShellConfig::default());
    }

    #[test]
    fn from_lookup_reads_all_switches() {
        let config = config_from(&[
            (DEV_SERVER_URL_ENV, " http://localhost:3000 "),
            (NATIVE_FRAME_ENV, "yes"),
            (DEVTOOLS_ENV, "FALSE"),
            (HEARTBEAT_ENV, "0"),
        ]);

        assert_eq!(
            config.dev_server_url.as_deref(),
            Some("http://localhost:3000")
        );
        assert!(!config.force_borderless);
        assert!(!config.devtools_enabled);
        assert!(!config.heartbeat_enabled);
    }

    #[test]
    fn from_lookup_ignores_blank_url_and_unknown_flags() {
        let config = config_from(&[
            (DEV_SERVER_URL_ENV, "   "),
            (NATIVE_FRAME_ENV, "maybe"),
            (HEARTBEAT_ENV, "later"),
        ]);

        assert_eq!(config.dev_server_url, None);
        assert!(config.force_borderless);
        assert!(config.heartbeat_enabled);
    }

    #[test]
    fn parse_env_flag_accepts_common_spellings() {
        assert_eq!(parse_env_flag("On"), Some(true));
        assert_eq!(parse_env_flag(" off "), Some(false));
        assert_eq!(parse_env_flag(""), None);
    }
}
