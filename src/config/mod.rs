//! Configuration module for Helu.
//!
//! This module provides a configuration system that loads settings from files
//! (TOML, YAML, JSON) and overrides them with environment variables.
//! All configuration values are validated for correctness before use.

use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use crate::error::{HeluError, HeluResult};
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub mod dictionary;
pub mod query;
pub mod trie;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "HELU";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for Helu.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HeluConfig {
    /// Dictionary source and reading limits
    pub dictionary: dictionary::DictionaryConfig,

    /// Trie limits
    pub trie: trie::TrieConfig,

    /// Words looked up after the index is built
    pub query: query::QueryConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for HeluConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.dictionary.validate()?;
        self.trie.validate()?;
        self.query.validate()?;
        self.log.validate()?;

        // Every line the reader accepts must also fit in the trie
        if self.dictionary.max_line_length > self.trie.max_depth {
            return Err(ConfigError::ValidationError(format!(
                "dictionary.max_line_length ({}) exceeds trie.max_depth ({})",
                self.dictionary.max_line_length, self.trie.max_depth
            )));
        }
        Ok(())
    }
}

impl HeluConfig {
    /// One-line description of the settings that shape a run.
    pub fn summary(&self) -> String {
        format!(
            "dictionary {} (max {} characters per line), trie max depth {}, {} query word(s)",
            self.dictionary.path.display(),
            self.dictionary.max_line_length,
            self.trie.max_depth,
            self.query.words.len()
        )
    }

    /// Writes this configuration to `output`, as JSON for `.json` paths and TOML otherwise.
    ///
    /// Parent directories are created as needed.
    pub fn write_to_file(&self, output: &Path) -> HeluResult<()> {
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = match output.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            _ => toml::to_string_pretty(self)
                .map_err(|e| HeluError::Custom(format!("Failed to serialize config: {e}")))?,
        };
        std::fs::write(output, contents)?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error), overridden by `RUST_LOG`
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for Helu.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(HeluConfig)` if the configuration was loaded and validated
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<HeluConfig> {
        let mut builder = Config::builder();

        // Add default configuration values
        builder = builder.add_source(
            Config::try_from(&HeluConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => return Err(ConfigError::UnsupportedFormat(path.clone())),
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        // Add environment variables with prefix
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::FileParse { uri, cause } => ConfigError::ParseError(format!(
                "Error parsing {}: {cause}",
                uri.unwrap_or_else(|| "config file".to_string())
            )),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let helu_config: HeluConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        helu_config.validate()?;

        Ok(helu_config)
    }
}
