//! The field-container contract shared by every request and response shape.

use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::error::{Error, Result};
use crate::metadata::RequestMetadata;
use crate::value::{Field, FieldValue};

/// A fixed set of named, independently optional fields.
///
/// Implementations are generated by [`crate::shape!`]. Plain accessors on the
/// concrete type never fail; this trait adds the name-driven view used by
/// marshallers and unmarshallers.
pub trait Shape:
    Clone + Default + fmt::Debug + fmt::Display + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Shape name used in diagnostics.
    const SHAPE_NAME: &'static str;

    /// Wire names of all fields, in declared order.
    const FIELD_NAMES: &'static [&'static str];

    /// Every field in declared order, unset ones included.
    fn fields(&self) -> Vec<Field>;

    /// Stores a dynamic value into the field with the given wire name.
    ///
    /// `None` clears the field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] for an undeclared name and
    /// [`Error::InvalidField`] when the value kind cannot be stored.
    fn set_field(&mut self, name: &str, value: Option<FieldValue>) -> Result<()>;

    /// Reads a field by wire name. Unknown names read as unset.
    fn get_field(&self, name: &str) -> Option<FieldValue> {
        self.fields()
            .into_iter()
            .find(|field| field.name == name)
            .and_then(|field| field.value)
    }

    /// Returns true when no field is set.
    fn is_empty(&self) -> bool {
        self.fields().iter().all(|field| !field.is_set())
    }
}

/// A shape that is sent to the service as one API operation.
pub trait Request: Shape {
    /// Operation name placed in the `Action` parameter.
    const ACTION: &'static str;

    /// Shape the service replies with.
    type Response: Shape;

    /// Metadata travelling with this request.
    fn metadata(&self) -> &RequestMetadata;

    /// Mutable access to the request metadata.
    fn metadata_mut(&mut self) -> &mut RequestMetadata;
}

/// A request whose operation can run as a permission-check-only dry run.
///
/// Implemented with [`crate::dry_run_supported!`] for shapes that declare a
/// `dry_run: scalar(bool) = "DryRun"` field.
pub trait DryRunSupported: Request {
    /// Returns a copy of this request with `DryRun` set to `true`.
    #[must_use]
    fn to_dry_run(&self) -> Self;
}

/// Builds the dynamic form of a nested shape (set fields only).
pub fn to_structure<S: Shape>(shape: &S) -> FieldValue {
    FieldValue::Structure(
        shape
            .fields()
            .into_iter()
            .filter_map(|field| field.value.map(|value| (field.name.to_string(), value)))
            .collect(),
    )
}

/// Populates a fresh shape from a dynamic structure.
///
/// Entries the shape does not declare are skipped.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] when `value` is not a structure and
/// [`Error::InvalidField`] when an entry cannot be stored.
pub fn from_structure<S: Shape>(value: FieldValue) -> Result<S> {
    match value {
        FieldValue::Structure(entries) => {
            let mut shape = S::default();
            for (name, value) in entries {
                apply_field(&mut shape, &name, Some(value))?;
            }
            Ok(shape)
        }
        other => Err(Error::TypeMismatch {
            expected: "structure",
            found: other.kind_name(),
        }),
    }
}

/// Sets one field, skipping names the shape does not declare.
///
/// Response payloads may carry fields newer than the model; those are logged
/// and dropped.
///
/// # Errors
///
/// Returns [`Error::InvalidField`] when the value kind cannot be stored.
pub fn apply_field<S: Shape>(shape: &mut S, name: &str, value: Option<FieldValue>) -> Result<()> {
    match shape.set_field(name, value) {
        Err(Error::UnknownField { shape, field }) => {
            debug!(%shape, %field, "skipping undeclared response field");
            Ok(())
        }
        other => other,
    }
}
