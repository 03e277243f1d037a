//! Request marshalling.
//!
//! [`Marshaller`] is the seam between request shapes and the wire.
//! [`QueryMarshaller`] implements the Query protocol used by the compute
//! service: every set field becomes one or more `Name=value` parameters next to
//! `Action` and `Version`.
//!
//! Flattening rules:
//!
//! - nested shapes prefix their fields with the parent name: `Parent.Child`
//! - sequence elements are numbered from one: `Name.1`, `Name.2`
//! - booleans are `true`/`false`, timestamps use [`crate::value::TIMESTAMP_FORMAT`]
//! - unset fields produce nothing; a set but empty sequence produces `Name=`
//!   unless [`ServiceConfig::serialize_empty_lists`] is off

use std::collections::BTreeMap;

use tracing::{debug, trace};
use url::Url;
use uuid::Uuid;
use validator::Validate;

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::query::QueryParams;
use crate::shape::{DryRunSupported, Request};
use crate::value::{format_timestamp, FieldValue};

/// Content type of a Query-protocol request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// A request ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarshalledRequest {
    /// Operation name
    pub action: &'static str,
    /// Service endpoint
    pub endpoint: Url,
    /// Flattened parameters, `Action` and `Version` first
    pub params: QueryParams,
    /// Headers for the transport
    pub headers: BTreeMap<String, String>,
    /// Client-side request id copied from the request metadata
    pub request_id: Uuid,
}

impl MarshalledRequest {
    /// Encodes the parameters as a form body.
    #[must_use]
    pub fn form_body(&self) -> String {
        self.params.to_form_urlencoded()
    }

    /// Returns the value of one parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

/// Turns a request shape into a transport-ready request.
pub trait Marshaller {
    /// Marshals `request` as-is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MarshalError`] when the request cannot be expressed on
    /// the wire.
    fn marshal<R: Request>(&self, request: &R) -> Result<MarshalledRequest>;

    /// Marshals the dry-run variant of `request`.
    ///
    /// # Errors
    ///
    /// Same as [`Marshaller::marshal`].
    fn marshal_dry_run<R: DryRunSupported>(&self, request: &R) -> Result<MarshalledRequest> {
        self.marshal(&request.to_dry_run())
    }
}

/// Query-protocol marshaller.
#[derive(Debug, Clone)]
pub struct QueryMarshaller {
    config: ServiceConfig,
    endpoint: Url,
}

impl QueryMarshaller {
    /// Creates a marshaller for a service configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] when the configured endpoint does not
    /// parse and [`Error::ValidationError`] when another field is out of range.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let endpoint = config.parse_endpoint()?;
        config.validate()?;
        Ok(Self { config, endpoint })
    }

    /// The configuration this marshaller was built with.
    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn flatten(&self, prefix: &str, value: &FieldValue, params: &mut QueryParams) {
        match value {
            FieldValue::String(s) => params.push(prefix, s),
            FieldValue::Integer(n) => params.push(prefix, n),
            FieldValue::Boolean(b) => params.push(prefix, b),
            FieldValue::Timestamp(ts) => params.push(prefix, format_timestamp(ts)),
            FieldValue::List(items) if items.is_empty() => {
                if self.config.serialize_empty_lists {
                    params.push(prefix, "");
                }
            }
            FieldValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    self.flatten(&format!("{prefix}.{}", i + 1), item, params);
                }
            }
            FieldValue::Structure(entries) => {
                for (name, item) in entries {
                    self.flatten(&format!("{prefix}.{name}"), item, params);
                }
            }
        }
    }
}

impl Marshaller for QueryMarshaller {
    fn marshal<R: Request>(&self, request: &R) -> Result<MarshalledRequest> {
        let metadata = request.metadata();

        let mut params = QueryParams::new();
        params.push("Action", R::ACTION);
        params.push("Version", &self.config.api_version);

        for field in request.fields() {
            if let Some(value) = &field.value {
                self.flatten(field.name, value, &mut params);
            }
        }

        for (name, value) in metadata.custom_query_parameters() {
            if name.is_empty() {
                return Err(Error::MarshalError(format!(
                    "{}: custom query parameter with empty name",
                    R::ACTION
                )));
            }
            params.push(name.as_str(), value);
        }

        let mut headers = metadata.custom_headers().clone();
        headers
            .entry("Content-Type".to_string())
            .or_insert_with(|| FORM_CONTENT_TYPE.to_string());

        let request_id = metadata.request_id();
        if self.config.log_params {
            trace!(action = R::ACTION, %request_id, params = ?params.pairs(), "marshalled request");
        } else {
            debug!(action = R::ACTION, %request_id, count = params.len(), "marshalled request");
        }

        Ok(MarshalledRequest {
            action: R::ACTION,
            endpoint: self.endpoint.clone(),
            params,
            headers,
            request_id,
        })
    }
}
