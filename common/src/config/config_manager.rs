use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ConfigSerializer, Validate, YamlConfigSerializer};
use crate::ConfigError;

/// Loads and stores one config file. A missing file means defaults.
pub struct ConfigManager<TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    path: PathBuf,
    serializer: TConfigSerializer,
    _config: PhantomData<TConfig>,
}

impl<TConfig> ConfigManager<TConfig, YamlConfigSerializer>
where
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Self {
        Self::new(path, YamlConfigSerializer::new())
    }
}

impl<TConfig, TConfigSerializer> ConfigManager<TConfig, TConfigSerializer>
where
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(path: impl AsRef<Path>, serializer: TConfigSerializer) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            serializer,
            _config: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<TConfig, ConfigError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(TConfig::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.path.display().to_string(),
                    source,
                });
            }
        };

        let config = self.serializer.deserialize(&content)?;
        config.validate().map_err(ConfigError::Validation)?;
        Ok(config)
    }

    pub fn save(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Validation)?;
        let content = self.serializer.serialize(config)?;
        std::fs::write(&self.path, content).map_err(|source| ConfigError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}
