use crate::error::{Error, Result};
use std::{env, path::PathBuf, sync::OnceLock};

static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Config {
    pub log: LogConfig,
    /// Exit non-zero when any input was rejected.
    pub strict_exit: bool,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub dir: PathBuf,
    pub file_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log: LogConfig::from_lookup(&lookup),
            strict_exit: !lookup("LOCATOR_STRICT_EXIT")
                .is_some_and(|val| val.trim().eq_ignore_ascii_case("false")),
        }
    }

    /// Initialize the global config (call once at startup).
    ///
    /// # Errors
    ///
    /// Returns error if config is already initialized.
    pub fn init(self) -> Result<()> {
        GLOBAL_CONFIG
            .set(self)
            .map_err(|_| Error::other("config already initialized"))
    }
}

/// Get global config (initialized by `Config::init(self)`).
#[must_use]
pub fn global_config() -> Config {
    GLOBAL_CONFIG.get().cloned().unwrap_or_default()
}

impl LogConfig {
    const DEFAULT_DIR: &'static str = ".logs";
    const DEFAULT_FILE_NAME: &'static str = "issue-locator.log";

    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            dir: non_blank(lookup("LOG_DIR"))
                .map_or_else(|| PathBuf::from(Self::DEFAULT_DIR), PathBuf::from),
            file_name: non_blank(lookup("LOG_FILE"))
                .unwrap_or_else(|| Self::DEFAULT_FILE_NAME.to_string()),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            strict_exit: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(Self::DEFAULT_DIR),
            file_name: Self::DEFAULT_FILE_NAME.into(),
        }
    }
}
