//! Dynamic field values exchanged with marshallers and unmarshallers.
//!
//! A shape exposes its fields as [`Field`] entries carrying an optional
//! [`FieldValue`]. Marshallers walk these values without knowing the concrete
//! shape; unmarshallers build them from a parsed payload and hand them back
//! through [`crate::Shape::set_field`].

use chrono::{DateTime, TimeZone, Utc};

use crate::error::{Error, Result};

/// Wire format for timestamps (ISO-8601, UTC, millisecond precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Formats a timestamp the way it is sent on the wire and rendered.
#[must_use]
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// A dynamically typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// String scalar (also the storage of enum-constrained fields)
    String(String),
    /// Integer scalar
    Integer(i64),
    /// Boolean scalar
    Boolean(bool),
    /// Timestamp scalar
    Timestamp(DateTime<Utc>),
    /// Ordered sequence
    List(Vec<FieldValue>),
    /// Nested shape; only set fields are present, in declared order
    Structure(Vec<(String, FieldValue)>),
}

impl FieldValue {
    /// Short name of the value kind, used in type mismatch errors.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Boolean(_) => "boolean",
            Self::Timestamp(_) => "timestamp",
            Self::List(_) => "list",
            Self::Structure(_) => "structure",
        }
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::TypeMismatch {
            expected,
            found: self.kind_name(),
        }
    }
}

/// One named field of a shape, as seen by a marshaller.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Wire name
    pub name: &'static str,
    /// Current value, `None` when unset
    pub value: Option<FieldValue>,
}

impl Field {
    /// Creates a field entry.
    #[must_use]
    pub const fn new(name: &'static str, value: Option<FieldValue>) -> Self {
        Self { name, value }
    }

    /// Returns true when the field holds a value.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

/// Conversion of a stored field into a [`FieldValue`].
pub trait ToFieldValue {
    /// Produces the dynamic representation of this value.
    fn to_field_value(&self) -> FieldValue;
}

/// Conversion of a [`FieldValue`] into a stored field.
pub trait FromFieldValue: Sized {
    /// Builds the stored representation from a dynamic value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] when the value kind cannot be stored.
    fn from_field_value(value: FieldValue) -> Result<Self>;
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.clone())
    }
}

impl FromFieldValue for String {
    fn from_field_value(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::String(s) => Ok(s),
            // Scalars that a loosely typed payload left unquoted.
            FieldValue::Integer(n) => Ok(n.to_string()),
            FieldValue::Boolean(b) => Ok(b.to_string()),
            other => Err(other.mismatch("string")),
        }
    }
}

impl ToFieldValue for i64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(*self)
    }
}

impl FromFieldValue for i64 {
    fn from_field_value(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::Integer(n) => Ok(n),
            FieldValue::String(ref s) => s.trim().parse().map_err(|_| value.mismatch("integer")),
            other => Err(other.mismatch("integer")),
        }
    }
}

impl ToFieldValue for i32 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(i64::from(*self))
    }
}

impl FromFieldValue for i32 {
    fn from_field_value(value: FieldValue) -> Result<Self> {
        let wide = i64::from_field_value(value)?;
        i32::try_from(wide).map_err(|_| Error::TypeMismatch {
            expected: "32-bit integer",
            found: "out-of-range integer",
        })
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Boolean(*self)
    }
}

impl FromFieldValue for bool {
    fn from_field_value(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::Boolean(b) => Ok(b),
            FieldValue::String(ref s) => match s.as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(value.mismatch("boolean")),
            },
            other => Err(other.mismatch("boolean")),
        }
    }
}

impl ToFieldValue for DateTime<Utc> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Timestamp(*self)
    }
}

impl FromFieldValue for DateTime<Utc> {
    fn from_field_value(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::Timestamp(ts) => Ok(ts),
            FieldValue::String(ref s) => match DateTime::parse_from_rfc3339(s) {
                Ok(ts) => Ok(ts.with_timezone(&Utc)),
                // Fractional epoch seconds arrive as their decimal string.
                Err(_) => match s.trim().parse::<f64>() {
                    Ok(secs) => timestamp_from_epoch_secs(secs),
                    Err(_) => Err(value.mismatch("timestamp")),
                },
            },
            FieldValue::Integer(secs) => Utc
                .timestamp_opt(secs, 0)
                .single()
                .ok_or(OUT_OF_RANGE_EPOCH),
            other => Err(other.mismatch("timestamp")),
        }
    }
}

const OUT_OF_RANGE_EPOCH: Error = Error::TypeMismatch {
    expected: "timestamp",
    found: "out-of-range epoch seconds",
};

/// Converts fractional epoch seconds, rounded to the millisecond.
#[allow(clippy::cast_possible_truncation)]
fn timestamp_from_epoch_secs(secs: f64) -> Result<DateTime<Utc>> {
    let millis = (secs * 1000.0).round();
    // i64::MAX is not representable as f64; compare against the nearest value below it.
    if !millis.is_finite() || millis.abs() >= 9.2e18 {
        return Err(OUT_OF_RANGE_EPOCH);
    }
    Utc.timestamp_millis_opt(millis as i64)
        .single()
        .ok_or(OUT_OF_RANGE_EPOCH)
}

impl<T: ToFieldValue> ToFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::List(self.iter().map(ToFieldValue::to_field_value).collect())
    }
}

impl<T: FromFieldValue> FromFieldValue for Vec<T> {
    fn from_field_value(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::List(items) => items.into_iter().map(T::from_field_value).collect(),
            other => Err(other.mismatch("list")),
        }
    }
}

/// Converts an optional dynamic value into field storage, attaching context.
///
/// # Errors
///
/// Returns [`Error::InvalidField`] naming the shape and field when the value
/// cannot be stored.
pub fn convert_field<T: FromFieldValue>(
    shape: &str,
    field: &str,
    value: Option<FieldValue>,
) -> Result<Option<T>> {
    value
        .map(T::from_field_value)
        .transpose()
        .map_err(|err| err.in_field(shape, field))
}
