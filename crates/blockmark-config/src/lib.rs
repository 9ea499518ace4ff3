use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to read extra head contents at {path}: {source}")]
    ExtraHeadReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// User settings for rendering documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Terminal width to wrap to; detected from the terminal when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_width: Option<usize>,

    #[serde(default = "default_fragment_links")]
    pub fragment_links_in_heading: bool,

    /// File whose contents are inserted into the `<head>` of HTML pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_head: Option<PathBuf>,
}

fn default_fragment_links() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view_width: None,
            fragment_links_in_heading: default_fragment_links(),
            extra_head: None,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the extra head path
        config.extra_head = config
            .extra_head
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/blockmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Contents of the `extra_head` file, or an empty string when none is set.
    pub fn extra_head_contents(&self) -> Result<String, ConfigError> {
        let Some(path) = &self.extra_head else {
            return Ok(String::new());
        };
        std::fs::read_to_string(path).map_err(|source| ConfigError::ExtraHeadReadError {
            path: path.clone(),
            source,
        })
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
