//! Configuration loaded from a TOML file and the environment.
use std::path::Path;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::Error;
use crate::consts;

/// The complete configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Nickname animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Tracing configuration
    #[serde(default)]
    pub tracing: TracingConfig,
}

/// Nickname animation settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnimationConfig {
    /// Delay between two animation ticks
    #[serde(default = "default_animation_interval", with = "humantime_serde")]
    pub interval: Duration,
    /// Tag used when `movename` is given no first tag
    #[serde(default = "default_first_tag")]
    pub first_tag: String,
    /// Tag used when `movename` is given no last tag
    #[serde(default = "default_last_tag")]
    pub last_tag: String,
}

/// Output format of the stderr log layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Single-line human readable output
    #[default]
    Compact,
    /// Multi-line human readable output
    Pretty,
    /// Newline-delimited JSON
    Json,
}

/// Logging settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TracingConfig {
    /// Log line format
    #[serde(default)]
    pub format: Format,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_tracing_filter")]
    pub filter: String,
}

impl Config {
    /// Loads the configuration from the defaults, the TOML file at `path` if it exists, and
    /// `CLIENTMANAGER_` prefixed environment variables, in that order.
    ///
    /// Nested keys are separated by `__` in environment variables, e.g.
    /// `CLIENTMANAGER_ANIMATION__INTERVAL=500ms`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a source can't be parsed or a value has the wrong type.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, Error> {
        let config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(consts::ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;

        Ok(config)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            interval: default_animation_interval(),
            first_tag: default_first_tag(),
            last_tag: default_last_tag(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        TracingConfig {
            format: Format::default(),
            filter: default_tracing_filter(),
        }
    }
}

/// Returns the default animation interval.
#[must_use]
pub const fn default_animation_interval() -> Duration {
    consts::DEFAULT_ANIMATION_INTERVAL
}

/// Returns the default first tag.
#[must_use]
pub fn default_first_tag() -> String {
    consts::DEFAULT_FIRST_TAG.to_string()
}

/// Returns the default last tag.
#[must_use]
pub fn default_last_tag() -> String {
    consts::DEFAULT_LAST_TAG.to_string()
}

/// Returns the default tracing filter directive.
#[must_use]
pub fn default_tracing_filter() -> String {
    consts::DEFAULT_TRACING_FILTER.to_string()
}
