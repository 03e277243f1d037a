//! Error types for shape handling, marshalling and invocation.
//!
//! Field containers never fail on plain getters and setters. Errors only arise
//! on the dynamic paths: populating a field by wire name, validating an
//! enum-constrained value, marshalling, unmarshalling, configuration and the
//! transport seam.

use thiserror::Error;

/// Main error type for compute model operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A dynamic field lookup named a field the shape does not declare
    #[error("Unknown field `{field}` on shape {shape}")]
    UnknownField {
        /// Shape name
        shape: String,
        /// Wire name that was requested
        field: String,
    },

    /// A dynamic value could not be stored in the named field
    #[error("Invalid value for {shape}.{field}: {reason}")]
    InvalidField {
        /// Shape name
        shape: String,
        /// Wire name of the field
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A dynamic value had the wrong kind for the target type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Kind the target type accepts
        expected: &'static str,
        /// Kind that was supplied
        found: &'static str,
    },

    /// A string is outside the closed set of an enumeration
    #[error("Unknown {enumeration} value: {value}")]
    UnknownEnumValue {
        /// Enumeration name
        enumeration: &'static str,
        /// Value that did not match any enumerant
        value: String,
    },

    /// Failed to marshal a request
    #[error("Failed to marshal request: {0}")]
    MarshalError(String),

    /// Failed to unmarshal a response payload
    #[error("Failed to unmarshal response: {0}")]
    UnmarshalError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Invalid endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The transport collaborator failed before a service reply was received
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The service answered with an error reply
    #[error("Service error {code}: {message}")]
    ServiceError {
        /// Service error code (for example `UnauthorizedOperation`)
        code: String,
        /// Service error message
        message: String,
    },
}

/// Specialized result type for compute model operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownField { .. } => "UNKNOWN_FIELD",
            Self::InvalidField { .. } => "INVALID_FIELD",
            Self::TypeMismatch { .. } => "TYPE_MISMATCH",
            Self::UnknownEnumValue { .. } => "UNKNOWN_ENUM_VALUE",
            Self::MarshalError(_) => "MARSHAL_ERROR",
            Self::UnmarshalError(_) => "UNMARSHAL_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::TransportError(_) => "TRANSPORT_ERROR",
            Self::ServiceError { .. } => "SERVICE_ERROR",
        }
    }

    /// Returns the service error code when this is a service reply.
    #[must_use]
    pub fn service_code(&self) -> Option<&str> {
        match self {
            Self::ServiceError { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Attaches shape and field context to a conversion failure.
    #[must_use]
    pub fn in_field(self, shape: &str, field: &str) -> Self {
        match self {
            Self::UnknownField { .. } | Self::InvalidField { .. } => self,
            other => Self::InvalidField {
                shape: shape.to_string(),
                field: field.to_string(),
                reason: other.to_string(),
            },
        }
    }

    /// Returns true if this error should be logged as a serious error.
    #[must_use]
    pub const fn should_log(&self) -> bool {
        matches!(
            self,
            Self::ConfigError(_) | Self::TransportError(_) | Self::MarshalError(_)
        )
    }
}

// Conversions from external error types
impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::UnmarshalError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
