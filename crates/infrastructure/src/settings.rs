//! Layered harness configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `PETCHECK_*` environment variables. Command-line overrides
//! are applied by the binary on the loaded value.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File, Map};
use petcheck_application::{HarnessContext, ScenarioKind, UnknownScenario};
use petcheck_domain::{DomainError, Headers, request::APPLICATION_JSON};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "petcheck.toml";

/// Prefix of the environment variables read by [`HarnessConfig::load`].
pub const ENV_PREFIX: &str = "PETCHECK";

/// Errors raised while loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("configuration error: {0}")]
    Source(#[from] config::ConfigError),

    /// The base URL does not parse.
    #[error("invalid base URL '{url}': {message}")]
    InvalidBaseUrl {
        /// Configured value.
        url: String,
        /// Parser message.
        message: String,
    },

    /// A configured header cannot be sent.
    #[error("invalid header: {0}")]
    InvalidHeader(#[from] DomainError),

    /// A scenario selector matches nothing.
    #[error(transparent)]
    Scenario(#[from] UnknownScenario),
}

/// Settings for one harness run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Root URL of the service under test.
    pub base_url: String,
    /// JSON file holding the inventory the service persists to.
    pub fixture_path: PathBuf,
    /// Per-request timeout.
    pub timeout_ms: u64,
    /// Headers sent with every request.
    pub headers: BTreeMap<String, String>,
    /// Scenario selectors; empty runs the whole catalog.
    pub scenarios: Vec<String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".to_string(),
            fixture_path: PathBuf::from("data/petstore.json"),
            timeout_ms: 30_000,
            headers: BTreeMap::from([
                ("Accept".to_string(), APPLICATION_JSON.to_string()),
                ("Content-Type".to_string(), APPLICATION_JSON.to_string()),
            ]),
            scenarios: Vec::new(),
        }
    }
}

impl HarnessConfig {
    /// Loads the layered configuration.
    ///
    /// An explicit `path` must exist; without one, [`DEFAULT_CONFIG_FILE`]
    /// is used if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Source` if a source is unreadable or a value
    /// has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(path, None)
    }

    fn load_from(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("scenarios")
                    .source(env),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Request timeout as a duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Builds the per-run context handed to every scenario.
    ///
    /// # Errors
    ///
    /// Returns an error for an unparsable base URL or an invalid header name.
    pub fn context(&self) -> Result<HarnessContext, ConfigError> {
        let base_url = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            message: e.to_string(),
        })?;

        let mut headers = Headers::new();
        for (name, value) in &self.headers {
            headers.try_add(name, value.clone())?;
        }

        Ok(HarnessContext::new(base_url)
            .with_headers(headers)
            .with_timeout(self.timeout()))
    }

    /// Resolves the configured selectors against the catalog.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Scenario` for an unknown selector.
    pub fn scenario_kinds(&self) -> Result<Vec<ScenarioKind>, ConfigError> {
        Ok(ScenarioKind::select(&self.scenarios)?)
    }
}
