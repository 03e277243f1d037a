//! Diagnostic rendering of shapes.
//!
//! Output is deterministic: `{Name: value,Name: value}` with only the set
//! fields, in declared order. Strings are written unquoted, sequences as
//! `[a, b]`, nested shapes recursively and timestamps in wire format.

use std::fmt;

use crate::value::{format_timestamp, Field, FieldValue};

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Timestamp(ts) => f.write_str(&format_timestamp(ts)),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Structure(entries) => {
                render_entries(entries.iter().map(|(name, value)| (name.as_str(), value)), f)
            }
        }
    }
}

/// Renders the set fields of a shape.
///
/// # Errors
///
/// Propagates formatter errors.
pub fn render_fields(fields: &[Field], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    render_entries(
        fields
            .iter()
            .filter_map(|field| field.value.as_ref().map(|value| (field.name, value))),
        f,
    )
}

fn render_entries<'a, I>(entries: I, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    I: Iterator<Item = (&'a str, &'a FieldValue)>,
{
    f.write_str("{")?;
    for (i, (name, value)) in entries.enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{name}: {value}")?;
    }
    f.write_str("}")
}
