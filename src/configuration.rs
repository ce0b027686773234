// Copyright (c) 2025, TheByteSlayer, Tinyid
// Short, URL-safe and collision-resistant random identifiers, written in Rust.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::alphabet::Alphabet;
use crate::defaults::{Defaults, DEFAULT_ALPHABET, DEFAULT_SIZE};
use crate::error::IdError;
use crate::mask::DEFAULT_MASK_TABLE_SIZE;

pub const CONFIG_FILE: &str = "tinyid.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Invalid generator settings: {0}")]
    Id(#[from] IdError),
}

type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub alphabet: String,
    pub size: usize,
    #[serde(rename = "mask-table-size")]
    pub mask_table_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            size: DEFAULT_SIZE,
            mask_table_size: DEFAULT_MASK_TABLE_SIZE,
        }
    }
}

impl GeneratorConfig {
    /// Reads `path` when it exists, otherwise returns the built-in settings.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!("No config at {}, using built-in defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> ConfigResult<Self> {
        match toml::from_str::<GeneratorConfig>(content) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(
                    "Config does not match the expected layout ({}), keeping readable keys only",
                    e
                );
                Self::parse_partial_config(content)
            }
        }
    }

    fn parse_partial_config(content: &str) -> ConfigResult<Self> {
        let toml_value: toml::Value = toml::from_str(content)?;

        let mut config = Self::default();

        if let toml::Value::Table(table) = toml_value {
            if let Some(toml::Value::String(alphabet)) = table.get("alphabet") {
                config.alphabet = alphabet.clone();
            }
            if let Some(toml::Value::Integer(size)) = table.get("size") {
                if let Ok(size) = usize::try_from(*size) {
                    config.size = size;
                }
            }
            if let Some(toml::Value::Integer(count)) = table.get("mask-table-size") {
                if let Ok(count) = usize::try_from(*count) {
                    config.mask_table_size = count;
                }
            }
        }

        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn alphabet(&self) -> ConfigResult<Alphabet> {
        Ok(self.alphabet.parse::<Alphabet>()?)
    }

    /// Validates the settings into a fast-path [`Defaults`] value.
    pub fn to_defaults(&self) -> ConfigResult<Defaults> {
        Ok(Defaults::with_mask_table(self.alphabet()?, self.size, self.mask_table_size)?)
    }
}
