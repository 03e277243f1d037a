//! Client-side request metadata.
//!
//! Request shapes embed a [`RequestMetadata`] value instead of inheriting from a
//! common base. It travels with the request to the marshaller but is not part
//! of the shape: equality, hashing, rendering and serde ignore it.

use std::collections::BTreeMap;

use uuid::Uuid;

/// Cross-cutting data attached to one outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMetadata {
    request_id: Uuid,
    custom_query_parameters: Vec<(String, String)>,
    custom_headers: BTreeMap<String, String>,
}

impl RequestMetadata {
    /// Creates metadata with a fresh random request id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            custom_query_parameters: Vec::new(),
            custom_headers: BTreeMap::new(),
        }
    }

    /// Client-side id used to correlate log lines for this request.
    #[must_use]
    pub const fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Replaces the request id.
    pub fn set_request_id(&mut self, request_id: Uuid) {
        self.request_id = request_id;
    }

    /// Extra query parameters appended after the shape's own fields.
    #[must_use]
    pub fn custom_query_parameters(&self) -> &[(String, String)] {
        &self.custom_query_parameters
    }

    /// Adds an extra query parameter.
    pub fn add_custom_query_parameter(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.custom_query_parameters
            .push((name.into(), value.into()));
    }

    /// Extra headers for the transport.
    #[must_use]
    pub const fn custom_headers(&self) -> &BTreeMap<String, String> {
        &self.custom_headers
    }

    /// Adds or replaces an extra header.
    pub fn put_custom_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.custom_headers.insert(name.into(), value.into());
    }
}

impl Default for RequestMetadata {
    fn default() -> Self {
        Self::new()
    }
}
