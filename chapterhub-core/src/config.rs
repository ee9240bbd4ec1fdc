//! Global chapterhub configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ChapterHubError, ChapterHubResult};

static DEFAULT_EVENTS_FILE: &str = "~/.local/share/chapterhub/events.toml";

fn default_events_file() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_FILE)
}

fn is_default_events_file(p: &PathBuf) -> bool {
    *p == default_events_file()
}

/// Global configuration at ~/.config/chapterhub/config.toml
///
/// Every key can be overridden with a `CHAPTERHUB_`-prefixed environment
/// variable, e.g. `CHAPTERHUB_EVENTS_FILE`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChapterHubConfig {
    #[serde(default = "default_events_file", skip_serializing_if = "is_default_events_file")]
    pub events_file: PathBuf,
}

impl Default for ChapterHubConfig {
    fn default() -> Self {
        ChapterHubConfig {
            events_file: default_events_file(),
        }
    }
}

impl ChapterHubConfig {
    pub fn config_path() -> ChapterHubResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ChapterHubError::Config("Could not determine config directory".into()))?
            .join("chapterhub");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented-out config file
    /// on first use.
    pub fn load() -> ChapterHubResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (which may be missing) plus environment overrides.
    pub fn load_from(path: &Path) -> ChapterHubResult<Self> {
        Self::load_with_env(path, Environment::with_prefix("CHAPTERHUB"))
    }

    fn load_with_env(path: &Path, env: Environment) -> ChapterHubResult<Self> {
        let config: ChapterHubConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| ChapterHubError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ChapterHubError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), events_file = %config.events_file.display(), "loaded config");
        Ok(config)
    }

    /// The events file with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.events_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ChapterHubResult<()> {
        let contents = format!(
            "\
# chapterhub configuration

# Event catalog (.toml or .json):
# events_file = \"{}\"
",
            DEFAULT_EVENTS_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ChapterHubError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ChapterHubError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
