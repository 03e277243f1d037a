//! Response unmarshalling.
//!
//! [`JsonUnmarshaller`] populates a response shape from a parsed JSON payload
//! whose keys are wire names. Nested objects become nested shapes and arrays
//! become sequences. `null` leaves a field unset, and keys the shape does not
//! declare are skipped.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::shape::{apply_field, Shape};
use crate::value::FieldValue;

/// Builds a shape from a service reply.
pub trait Unmarshaller {
    /// Populates a fresh `S` from `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnmarshalError`] when the payload is not an object and
    /// [`Error::InvalidField`] when a value cannot be stored in its field.
    fn unmarshal<S: Shape>(&self, payload: Value) -> Result<S>;
}

/// Unmarshaller for JSON payloads keyed by wire name.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonUnmarshaller;

impl JsonUnmarshaller {
    /// Creates a JSON unmarshaller.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses `body` and populates a fresh `S` from it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnmarshalError`] for malformed JSON, otherwise as
    /// [`Unmarshaller::unmarshal`].
    pub fn unmarshal_str<S: Shape>(&self, body: &str) -> Result<S> {
        let payload: Value = serde_json::from_str(body)?;
        self.unmarshal(payload)
    }
}

impl Unmarshaller for JsonUnmarshaller {
    fn unmarshal<S: Shape>(&self, payload: Value) -> Result<S> {
        match payload {
            Value::Object(map) => populate(map),
            other => Err(Error::UnmarshalError(format!(
                "{} payload must be an object, found {}",
                S::SHAPE_NAME,
                json_kind(&other)
            ))),
        }
    }
}

fn populate<S: Shape>(map: Map<String, Value>) -> Result<S> {
    let mut shape = S::default();
    for (name, value) in map {
        if let Some(value) = convert(value, S::SHAPE_NAME, &name)? {
            apply_field(&mut shape, &name, Some(value))?;
        }
    }
    Ok(shape)
}

/// Converts a JSON value into a dynamic field value.
///
/// Returns `Ok(None)` for `null`. Numbers that do not fit an `i64` are kept as
/// their decimal string.
///
/// # Errors
///
/// Returns [`Error::UnmarshalError`] when an array holds a `null` element.
pub fn json_to_field_value(value: Value) -> Result<Option<FieldValue>> {
    convert(value, "payload", "value")
}

fn convert(value: Value, shape: &str, path: &str) -> Result<Option<FieldValue>> {
    Ok(match value {
        Value::Null => None,
        Value::Bool(b) => Some(FieldValue::Boolean(b)),
        Value::Number(n) => Some(
            n.as_i64()
                .map_or_else(|| FieldValue::String(n.to_string()), FieldValue::Integer),
        ),
        Value::String(s) => Some(FieldValue::String(s)),
        Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for (i, item) in items.into_iter().enumerate() {
                let item_path = format!("{path}[{i}]");
                match convert(item, shape, &item_path)? {
                    Some(item) => list.push(item),
                    None => {
                        return Err(Error::UnmarshalError(format!(
                            "{shape}.{item_path}: null list element"
                        )))
                    }
                }
            }
            Some(FieldValue::List(list))
        }
        Value::Object(map) => {
            let mut entries = Vec::with_capacity(map.len());
            for (name, value) in map {
                let entry_path = format!("{path}.{name}");
                if let Some(value) = convert(value, shape, &entry_path)? {
                    entries.push((name, value));
                }
            }
            Some(FieldValue::Structure(entries))
        }
    })
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
