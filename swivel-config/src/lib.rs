use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use swivel_core::{Identifier, RotationScheme};
use thiserror::Error;

use std::{collections::HashMap, fs, path::Path};

pub mod logging;

pub use logging::{init_logger, LoggingConfig};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Couldn't parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Cell type {0} is both overridden and disabled")]
    Conflict(Identifier),
}

/// Which blocks rotate and how. The built-in scheme list is always the base, this
/// only layers changes on top of it.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RotationConfig {
    /// Block types that never rotate, even if they have a built-in scheme
    pub disabled: Vec<Identifier>,
    pub logging: LoggingConfig,
    /// Replaces or adds schemes, e.g. `"minecraft:observer" = "six_way"`
    pub overrides: HashMap<Identifier, RotationScheme>,
}

pub trait LoadTomlConfiguration {
    /// Loads from [`LoadTomlConfiguration::get_path`], see
    /// [`LoadTomlConfiguration::load_or_default`].
    fn load() -> Self
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        Self::load_or_default(Self::get_path())
    }

    /// Never fails: a missing file is created with the defaults, an unreadable or
    /// invalid one is reported and replaced by the defaults in memory.
    fn load_or_default(path: &Path) -> Self
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        if !path.exists() {
            let content = Self::default();
            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(path, serialized) {
                        warn!("Couldn't write default config to {:?}. Reason: {}", path, err);
                    }
                }
                Err(err) => warn!("Couldn't serialize default config. Reason: {}", err),
            }
            return content;
        }

        Self::load_from(path).unwrap_or_else(|err| {
            warn!(
                "Couldn't load config at {:?}. Reason: {}. Falling back to the defaults",
                path, err
            );
            Self::default()
        })
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + DeserializeOwned,
    {
        let file_content = fs::read_to_string(path)?;
        Self::parse(&file_content)
    }

    fn parse(content: &str) -> Result<Self, ConfigError>
    where
        Self: Sized + DeserializeOwned,
    {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), ConfigError>;
}

impl LoadTomlConfiguration for RotationConfig {
    fn get_path() -> &'static Path {
        Path::new("rotation.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.disabled.iter().find(|id| self.overrides.contains_key(*id)) {
            Some(id) => Err(ConfigError::Conflict(id.clone())),
            None => Ok(()),
        }
    }
}
