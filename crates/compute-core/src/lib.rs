//! # compute-core
//!
//! Value-object framework for modelling the request and response shapes of a
//! compute provisioning API.
//!
//! Every shape is a flat bag of independently optional fields declared with
//! [`shape!`]. The framework supplies the mechanical parts once: accessors and
//! fluent builders, defensive collection copies, string-backed enums, structural
//! equality, diagnostic rendering, and the hand-off to a wire marshaller and
//! response unmarshaller.
//!
//! ## Modules
//!
//! - [`error`] - Error type and stable error codes
//! - [`value`] - Dynamic field values exchanged with marshallers
//! - [`shape`] - The `Shape`, `Request` and `DryRunSupported` traits
//! - [`kind`] - Storage types behind each field kind
//! - [`collection`] - Owned copies and append semantics for sequence fields
//! - [`enums`] - Closed enumerant sets with canonical wire strings
//! - [`render`] - `{Name: value}` diagnostic rendering
//! - [`metadata`] - Client-side request metadata
//! - [`query`] - Query parameter accumulation
//! - [`marshal`] - Query-protocol marshaller
//! - [`unmarshal`] - JSON response unmarshaller
//! - [`config`] - Service configuration
//! - [`client`] - Transport seam and request invoker

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod collection;
pub mod config;
pub mod enums;
pub mod error;
pub mod kind;
pub mod marshal;
pub mod metadata;
pub mod query;
pub mod render;
pub mod shape;
pub mod unmarshal;
pub mod value;

mod macros;

// Re-export commonly used types
pub use client::{DryRunOutcome, Invoker, Transport};
pub use config::ServiceConfig;
pub use enums::WireEnum;
pub use error::{Error, Result};
pub use marshal::{MarshalledRequest, Marshaller, QueryMarshaller};
pub use metadata::RequestMetadata;
pub use shape::{DryRunSupported, Request, Shape};
pub use unmarshal::{JsonUnmarshaller, Unmarshaller};
pub use value::{Field, FieldValue, FromFieldValue, ToFieldValue};

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}
