//! Client configuration
//!
//! Loaded from an optional TOML file plus `RIFFLE_`-prefixed environment
//! variables (nested keys use a double underscore, e.g.
//! `RIFFLE_FEED__CAPACITY=100` or `RIFFLE_FEED__TOAST_KINDS=like,message`).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, RiffleError};
use crate::types::NotificationKind;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "riffle.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "RIFFLE";

/// Client configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Notification feed section
    #[serde(default)]
    pub feed: FeedSettings,

    /// Storage section
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Notification feed tuning
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedSettings {
    /// Maximum feed length; older entries are evicted first
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Kinds forwarded to the toast surface
    #[serde(default = "default_toast_kinds")]
    pub toast_kinds: Vec<NotificationKind>,

    /// Characters of message content quoted in a message notification
    #[serde(default = "default_message_preview_chars")]
    pub message_preview_chars: usize,
}

/// Persistence adapter settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Database file used by the file-backed store
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_capacity() -> usize {
    50
}

fn default_toast_kinds() -> Vec<NotificationKind> {
    vec![
        NotificationKind::Like,
        NotificationKind::Follow,
        NotificationKind::Message,
    ]
}

fn default_message_preview_chars() -> usize {
    50
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("riffle.redb")
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            toast_kinds: default_toast_kinds(),
            message_preview_chars: default_message_preview_chars(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

impl FeedSettings {
    /// Whether notifications of `kind` are forwarded to the toast surface
    pub fn toasts(&self, kind: NotificationKind) -> bool {
        self.toast_kinds.contains(&kind)
    }
}

/// `RIFFLE_SECTION__KEY` variables; `feed.toast_kinds` takes a comma list
fn environment() -> ::config::Environment {
    ::config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("feed.toast_kinds")
        .try_parsing(true)
}

impl ClientConfig {
    /// Load configuration from `riffle.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from the given file (if present) and environment
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::load_with(path, environment())
    }

    fn load_with(path: &Path, env: ::config::Environment) -> Result<Self> {
        let mut settings = ::config::Config::builder();

        if path.exists() {
            settings = settings.add_source(::config::File::from(path.to_path_buf()));
        }

        settings = settings.add_source(env);

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;

        tracing::debug!(
            capacity = config.feed.capacity,
            storage = %config.storage.path.display(),
            "Loaded client configuration"
        );

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.feed.capacity == 0 {
            return Err(RiffleError::config("feed.capacity must be at least 1"));
        }

        if self.storage.path.as_os_str().is_empty() {
            return Err(RiffleError::config("storage.path must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_constants() {
        let config = ClientConfig::default();
        assert_eq!(config.feed.capacity, 50);
        assert_eq!(config.feed.message_preview_chars, 50);
        assert!(config.feed.toasts(NotificationKind::Like));
        assert!(config.feed.toasts(NotificationKind::Follow));
        assert!(config.feed.toasts(NotificationKind::Message));
        assert!(!config.feed.toasts(NotificationKind::TrackUpload));
        assert!(!config.feed.toasts(NotificationKind::Collaboration));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let mut config = ClientConfig::default();
        config.feed.capacity = 0;
        assert!(matches!(config.validate(), Err(RiffleError::Config(_))));
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[feed]\ncapacity = 10\ntoast_kinds = [\"track_upload\"]\n\n[storage]\npath = \"feed.redb\""
        )
        .unwrap();

        let config = ClientConfig::load_from(file.path()).unwrap();
        assert_eq!(config.feed.capacity, 10);
        assert_eq!(config.feed.toast_kinds, vec![NotificationKind::TrackUpload]);
        assert_eq!(config.feed.message_preview_chars, 50);
        assert_eq!(config.storage.path, PathBuf::from("feed.redb"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = ClientConfig::load_from(Path::new("/nonexistent/riffle.toml")).unwrap();
        assert_eq!(config.feed.capacity, 50);
    }

    fn env_source(vars: &[(&str, &str)]) -> ::config::Environment {
        let map = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        environment().source(Some(map))
    }

    #[test]
    fn single_underscore_prefix_overrides_feed() {
        let env = env_source(&[
            ("RIFFLE_FEED__CAPACITY", "7"),
            ("RIFFLE_FEED__TOAST_KINDS", "like,track_upload"),
            ("RIFFLE_STORAGE__PATH", "env.redb"),
        ]);

        let config = ClientConfig::load_with(Path::new("/nonexistent/riffle.toml"), env).unwrap();
        assert_eq!(config.feed.capacity, 7);
        assert_eq!(
            config.feed.toast_kinds,
            vec![NotificationKind::Like, NotificationKind::TrackUpload]
        );
        assert_eq!(config.storage.path, PathBuf::from("env.redb"));
    }

    #[test]
    fn environment_wins_over_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[feed]\ncapacity = 10").unwrap();

        let env = env_source(&[("RIFFLE_FEED__CAPACITY", "25")]);
        let config = ClientConfig::load_with(file.path(), env).unwrap();
        assert_eq!(config.feed.capacity, 25);
    }

    #[test]
    fn environment_capacity_zero_is_rejected() {
        let env = env_source(&[("RIFFLE_FEED__CAPACITY", "0")]);
        let result = ClientConfig::load_with(Path::new("/nonexistent/riffle.toml"), env);
        assert!(matches!(result, Err(RiffleError::Config(_))));
    }
}
