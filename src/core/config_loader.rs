// src/core/config_loader.rs

use crate::models::CommandSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or querying a commands file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Could not read commands file '{path}': {source}")]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The content is not valid TOML or a command in it is malformed.
    #[error("Failed to parse commands TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    /// The requested name is not in the `[commands]` table.
    #[error("No command named '{0}' is defined.")]
    UnknownCommand(String),
}

/// A set of named commands read from a TOML file:
///
/// ```toml
/// [commands]
/// list = "ls -la"
/// greet = { program = "sh", args = ["-c", "echo hello world"] }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct CommandsConfig {
    /// Command specifications keyed by name.
    #[serde(default)]
    pub commands: HashMap<String, CommandSpec>,
}

impl CommandsConfig {
    /// Parses a commands file already held in memory.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses the commands file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Loading commands from '{}'.", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::trace!("Loaded {} command(s).", config.commands.len());
        Ok(config)
    }

    /// Looks a command up by name.
    pub fn get(&self, name: &str) -> Result<&CommandSpec, ConfigError> {
        self.commands
            .get(name)
            .ok_or_else(|| ConfigError::UnknownCommand(name.to_string()))
    }
}
