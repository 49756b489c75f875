use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find config directory")]
    NoConfigDir,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Which glyphs to draw for field and social icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IconSet {
    #[default]
    NerdFont,
    Ascii,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Glyph set for icons (needs a Nerd Font for `nerd-font`)
    pub icons: IconSet,

    /// Character drawn in place of each password character
    pub mask_char: char,

    /// Show the focused field's input hints in the info line
    pub show_input_hints: bool,

    /// Render the terms-and-conditions checkbox (hidden by default)
    pub terms_checkbox: bool,

    /// Theme overrides, slot name -> hex color
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub colors: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            icons: IconSet::NerdFont,
            mask_char: '•',
            show_input_hints: true,
            terms_checkbox: false,
            colors: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("create-account-tui");

        Ok(config_dir.join("config.toml"))
    }

    /// Like `load`, but a missing file is not created
    pub async fn read(path: Option<&Path>) -> Self {
        let Some(path) = Self::resolve(path) else {
            return AppConfig::default();
        };
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return AppConfig::default();
        }
        match Self::load_from(&path).await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config: {}", e);
                AppConfig::default()
            }
        }
    }

    fn resolve(path: Option<&Path>) -> Option<PathBuf> {
        match path {
            Some(p) => Some(p.to_path_buf()),
            None => match Self::config_path() {
                Ok(p) => Some(p),
                Err(e) => {
                    tracing::warn!("{}", e);
                    None
                }
            },
        }
    }

    /// Load config from `path` (or the default location), falling back to
    /// defaults when anything goes wrong. A missing file is created.
    pub async fn load(path: Option<&Path>) -> Self {
        let Some(path) = Self::resolve(path) else {
            return AppConfig::default();
        };

        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Self::read(Some(&path)).await;
        }

        let config = AppConfig::default();
        if let Err(e) = config.save_to(&path).await {
            tracing::warn!("Could not write default config: {}", e);
        }
        config
    }

    pub async fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to file
    pub async fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if let Err(e) = tokio::fs::create_dir_all(dir).await {
                tracing::warn!("Could not create config directory: {}", e);
            }
        }

        let content = self.to_toml()?;
        tokio::fs::write(path, content)
            .await
            .map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
