//! Configuration for a context build
//!
//! Settings come from an optional TOML file (by default `diwire.toml`) and are
//! then overridden by command-line flags. Every field has a default, so an
//! empty file is valid as long as at least one service directory ends up
//! configured.
//!
//! # Example
//!
//! ```toml
//! base_dir = "."
//! context_dir = "src/generated"
//! context_name = "context.rs"
//! service_dirs = ["services"]
//!
//! [aliases]
//! scalarService = "YourFunkyDependency2('funky-namespace')"
//! ```
//!
//! Relative `base_dir` values are resolved against the directory holding the
//! config file; relative `context_dir` values are resolved against `base_dir`.

use crate::descriptor::naming::is_identifier;
use crate::error::WireError;
use crate::graph::AliasDirective;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "diwire.toml";

/// Default name of the generated module
pub const DEFAULT_CONTEXT_NAME: &str = "context.rs";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WireConfig {
    /// Directory service directories and source paths are relative to
    pub base_dir: PathBuf,

    /// Output directory; defaults to `base_dir`
    pub context_dir: Option<PathBuf>,

    /// File name of the generated module
    pub context_name: String,

    /// Directories (relative to `base_dir`) scanned for service units
    pub service_dirs: Vec<PathBuf>,

    /// Derived services: alias name -> `Base(arg, ...)`, expanded in order
    pub aliases: IndexMap<String, String>,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            context_dir: None,
            context_name: DEFAULT_CONTEXT_NAME.to_string(),
            service_dirs: Vec::new(),
            aliases: IndexMap::new(),
        }
    }
}

impl WireConfig {
    /// Defaults with the given service directories
    pub fn new<I, P>(service_dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            service_dirs: service_dirs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a config file, resolving a relative `base_dir` against the
    /// file's directory
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content)?;

        if config.base_dir.is_relative() {
            if let Some(dir) = path.parent() {
                config.base_dir = dir.join(&config.base_dir);
            }
        }

        Ok(config)
    }

    /// Resolved output directory
    pub fn context_dir(&self) -> PathBuf {
        match &self.context_dir {
            Some(dir) => self.base_dir.join(dir),
            None => self.base_dir.clone(),
        }
    }

    /// Full path of the generated module
    pub fn context_path(&self) -> PathBuf {
        self.context_dir().join(&self.context_name)
    }

    /// Parses every alias signature, in declaration order
    pub fn alias_directives(&self) -> Result<Vec<AliasDirective>, WireError> {
        self.aliases
            .iter()
            .map(|(name, signature)| AliasDirective::parse(name, signature))
            .collect()
    }

    /// Validates the configuration
    ///
    /// Checks that:
    /// - At least one service directory is configured
    /// - The context name is a plain `.rs` file name
    /// - Alias names are identifiers
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_dirs.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "At least one service directory must be configured".to_string(),
            ));
        }

        let name = Path::new(&self.context_name);
        let plain_file = name.file_name().map(|f| f == name.as_os_str()).unwrap_or(false);
        if !plain_file || name.extension().and_then(|e| e.to_str()) != Some("rs") {
            return Err(ConfigError::ValidationFailed(format!(
                "Context name must be a .rs file name, got '{}'",
                self.context_name
            )));
        }

        if let Some(alias) = self.aliases.keys().find(|a| !is_identifier(a)) {
            return Err(ConfigError::ValidationFailed(format!(
                "Alias name '{}' is not a valid identifier",
                alias
            )));
        }

        Ok(())
    }
}
