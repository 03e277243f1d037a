//! Builder for Query-protocol parameters.
//!
//! Parameters keep insertion order; the marshaller relies on it so that
//! `Action` and `Version` lead and custom parameters trail.

use std::fmt::Display;

use url::form_urlencoded;

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: impl Into<String>, value: T)
    where
        T: Display,
    {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Returns the first value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Borrow the collected pairs.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Number of collected pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encodes the pairs as `application/x-www-form-urlencoded`.
    #[must_use]
    pub fn to_form_urlencoded(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::QueryParams;

    #[test]
    fn push_keeps_order() {
        let mut params = QueryParams::new();
        params.push("Action", "DescribeHosts");
        params.push("MaxResults", 5);
        params.push("DryRun", true);
        assert_eq!(
            params.pairs(),
            [
                ("Action".to_string(), "DescribeHosts".to_string()),
                ("MaxResults".to_string(), "5".to_string()),
                ("DryRun".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn get_returns_first_match() {
        let mut params = QueryParams::new();
        params.push("HostId.1", "h-1");
        params.push("HostId.2", "h-2");
        assert_eq!(params.get("HostId.2"), Some("h-2"));
        assert_eq!(params.get("HostId.3"), None);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn form_encoding_escapes_reserved_characters() {
        let mut params = QueryParams::new();
        params.push("ClientCidrBlock", "10.0.0.0/22");
        params.push("Description", "a b&c");
        assert_eq!(
            params.to_form_urlencoded(),
            "ClientCidrBlock=10.0.0.0%2F22&Description=a+b%26c"
        );
    }
}
