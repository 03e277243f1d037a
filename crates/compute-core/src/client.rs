//! Transport seam and request invoker.
//!
//! Sending bytes is not this crate's job. A [`Transport`] receives a
//! [`MarshalledRequest`] and returns the parsed service reply, or
//! [`Error::ServiceError`] when the service answered with an error code.
//! [`Invoker`] wires marshalling, the transport and unmarshalling together for
//! one request at a time; it does not retry or paginate.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::marshal::{MarshalledRequest, Marshaller, QueryMarshaller};
use crate::shape::{DryRunSupported, Request};
use crate::unmarshal::{JsonUnmarshaller, Unmarshaller};

/// Service code returned when a dry run would have succeeded.
pub const DRY_RUN_OPERATION: &str = "DryRunOperation";

/// Service code returned when the caller lacks permission.
pub const UNAUTHORIZED_OPERATION: &str = "UnauthorizedOperation";

/// Delivers marshalled requests to the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request and returns the parsed reply payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ServiceError`] for service error replies and
    /// [`Error::TransportError`] when no reply was received.
    async fn send(&self, request: MarshalledRequest) -> Result<Value>;
}

/// Result of a permission-check-only request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DryRunOutcome {
    /// The caller may perform the operation.
    Permitted,
    /// The caller may not perform the operation.
    Denied {
        /// Message returned by the service
        message: String,
    },
}

impl DryRunOutcome {
    /// Returns true when the operation is permitted.
    #[must_use]
    pub const fn is_permitted(&self) -> bool {
        matches!(self, Self::Permitted)
    }
}

/// Runs requests through marshaller, transport and unmarshaller.
#[derive(Debug)]
pub struct Invoker<T> {
    marshaller: QueryMarshaller,
    unmarshaller: JsonUnmarshaller,
    transport: T,
}

impl<T: Transport> Invoker<T> {
    /// Creates an invoker for a service configuration and transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured endpoint is invalid.
    pub fn new(config: ServiceConfig, transport: T) -> Result<Self> {
        Ok(Self {
            marshaller: QueryMarshaller::new(config)?,
            unmarshaller: JsonUnmarshaller::new(),
            transport,
        })
    }

    /// The service configuration.
    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        self.marshaller.config()
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends `request` and unmarshals the reply into its response shape.
    ///
    /// # Errors
    ///
    /// Propagates marshalling, transport, service and unmarshalling errors.
    pub async fn invoke<R: Request>(&self, request: &R) -> Result<R::Response> {
        let marshalled = self.marshaller.marshal(request)?;
        let request_id = marshalled.request_id;
        info!(action = R::ACTION, %request_id, "compute request");

        let payload = self.transport.send(marshalled).await.map_err(|err| {
            if err.should_log() {
                warn!(action = R::ACTION, %request_id, error = %err, "compute request failed");
            }
            err
        })?;

        self.unmarshaller.unmarshal(payload)
    }

    /// Checks whether `request` would be permitted without performing it.
    ///
    /// # Errors
    ///
    /// Returns service errors other than the dry-run and authorization codes,
    /// and any marshalling or transport error.
    pub async fn dry_run<R: DryRunSupported>(&self, request: &R) -> Result<DryRunOutcome> {
        let marshalled = self.marshaller.marshal_dry_run(request)?;
        let request_id = marshalled.request_id;
        info!(action = R::ACTION, %request_id, "compute dry run");

        match self.transport.send(marshalled).await {
            Err(Error::ServiceError { code, .. }) if code == DRY_RUN_OPERATION => {
                Ok(DryRunOutcome::Permitted)
            }
            Err(Error::ServiceError { code, message }) if code == UNAUTHORIZED_OPERATION => {
                Ok(DryRunOutcome::Denied { message })
            }
            Err(err) => Err(err),
            Ok(_) => {
                warn!(action = R::ACTION, %request_id, "service executed a dry-run request");
                Ok(DryRunOutcome::Permitted)
            }
        }
    }
}
