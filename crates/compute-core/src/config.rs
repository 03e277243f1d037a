//! Configuration for the compute service.
//!
//! The configuration is consumed by the marshaller and the invoker: it names the
//! service endpoint, the API version stamped on every request and the handful
//! of switches that change how requests are flattened and logged.

use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

use crate::Error;

/// API version sent in the `Version` parameter unless overridden.
pub const DEFAULT_API_VERSION: &str = "2016-11-15";

/// Configuration for one compute service endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ServiceConfig {
    /// Service endpoint URL
    #[validate(url)]
    pub endpoint: String,

    /// API version placed in every request
    #[validate(length(min = 1))]
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Optional region name, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Whether a set-but-empty sequence is sent as an empty parameter
    #[serde(default = "default_serialize_empty_lists")]
    pub serialize_empty_lists: bool,

    /// Whether marshalled parameters are logged at trace level
    #[serde(default)]
    pub log_params: bool,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

const fn default_serialize_empty_lists() -> bool {
    true
}

impl ServiceConfig {
    /// Create a new service configuration for an endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The service URL (e.g., "https://ec2.us-east-1.amazonaws.com")
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or validation fails.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            endpoint: endpoint.into(),
            api_version: default_api_version(),
            region: None,
            serialize_empty_lists: default_serialize_empty_lists(),
            log_params: false,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from JSON, applying defaults for omitted fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] for malformed JSON and
    /// [`Error::ValidationError`] when a field is out of range.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the API version.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the region name.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set whether empty sequences are serialized.
    #[must_use]
    pub const fn with_serialize_empty_lists(mut self, enabled: bool) -> Self {
        self.serialize_empty_lists = enabled;
        self
    }

    /// Enable or disable parameter logging.
    #[must_use]
    pub const fn with_log_params(mut self, enabled: bool) -> Self {
        self.log_params = enabled;
        self
    }

    /// Parse and validate the endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_endpoint(&self) -> Result<Url, Error> {
        Url::parse(&self.endpoint)
            .map_err(|e| Error::InvalidEndpoint(format!("{}: {e}", self.endpoint)))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080".to_string(),
            api_version: default_api_version(),
            region: None,
            serialize_empty_lists: default_serialize_empty_lists(),
            log_params: false,
        }
    }
}
