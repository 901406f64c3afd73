//! Configuration for graphkit.
//!
//! Values are layered with figment, later sources overriding earlier ones:
//!
//! 1. built-in defaults
//! 2. a TOML file (`graphkit.toml` unless a path is given)
//! 3. `GRAPHKIT_*` environment variables, with `__` between section and key
//!    (`GRAPHKIT_OUTPUT__PRECISION=4`)
//!
//! # Example
//!
//! ```toml
//! [logging]
//! level = "debug"
//! format = "compact"
//!
//! [input]
//! direction = "directed"
//! comment_prefix = "%"
//! max_vertices = 1000000
//!
//! [output]
//! format = "json"
//! precision = 3
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::graph::{Direction, EdgeListOptions, DEFAULT_MAX_VERTICES};

/// File read when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "graphkit.toml";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "GRAPHKIT_";

/// Largest accepted `output.precision`.
pub const MAX_PRECISION: usize = 17;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("Configuration file not found: {}", path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// A source could not be read or a value has the wrong type.
    #[error("Failed to load configuration: {0}")]
    Load(Box<figment::Error>),

    /// A value is well-typed but not acceptable.
    #[error("Invalid configuration value for '{key}': {message}")]
    Invalid {
        /// Dotted key, e.g. `input.comment_prefix`.
        key: String,
        /// Why the value was rejected.
        message: String,
    },

    /// Rendering the effective configuration failed.
    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}

impl ConfigError {
    fn invalid(key: &str, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Log line layout used by the CLI subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human-readable output.
    #[default]
    Pretty,
    /// One line per event.
    Compact,
}

/// Rendering of command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level: `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
    /// Line layout.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Parses `level`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for an unknown level name.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.level).map_err(|_| {
            ConfigError::invalid(
                "logging.level",
                format!("unknown level '{}'", self.level),
            )
        })
    }
}

/// `[input]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Direction policy for graphs read from text.
    pub direction: Direction,
    /// Edge-list lines starting with this prefix are skipped.
    pub comment_prefix: String,
    /// Token separator for symbol graphs; whitespace means any whitespace run.
    pub symbol_delimiter: String,
    /// Edge lists implying more vertices than this are rejected.
    pub max_vertices: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Undirected,
            comment_prefix: "#".to_string(),
            symbol_delimiter: " ".to_string(),
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

impl InputConfig {
    /// Parser options for edge lists.
    #[must_use]
    pub fn edge_list_options(&self) -> EdgeListOptions {
        EdgeListOptions::new(self.direction)
            .with_comment_prefix(&self.comment_prefix)
            .with_max_vertices(self.max_vertices)
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Result rendering.
    pub format: OutputFormat,
    /// Decimal places of printed weights and distances.
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: 2,
        }
    }
}

/// Effective graphkit configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphkitConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Text input settings.
    pub input: InputConfig,
    /// Output settings.
    pub output: OutputConfig,
}

impl GraphkitConfig {
    /// Loads and validates the layered configuration.
    ///
    /// With `path = None` a missing `graphkit.toml` is not an error and the
    /// defaults apply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if an explicit `path` does not exist,
    /// `ConfigError::Load` on malformed sources and `ConfigError::Invalid`
    /// if validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Some(path) => path,
            None => Path::new(DEFAULT_CONFIG_FILE),
        };
        let config: Self = Self::figment(file).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// The provider stack behind [`load`](Self::load).
    #[must_use]
    pub fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.level_filter()?;
        if self.input.comment_prefix.is_empty() {
            return Err(ConfigError::invalid(
                "input.comment_prefix",
                "must not be empty",
            ));
        }
        if self.input.symbol_delimiter.is_empty() {
            return Err(ConfigError::invalid(
                "input.symbol_delimiter",
                "must not be empty",
            ));
        }
        if self.input.max_vertices == 0 {
            return Err(ConfigError::invalid(
                "input.max_vertices",
                "must be at least 1",
            ));
        }
        if self.output.precision > MAX_PRECISION {
            return Err(ConfigError::invalid(
                "output.precision",
                format!("must be at most {MAX_PRECISION}"),
            ));
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Render` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
