//! Owned copies and append semantics for sequence fields.
//!
//! A sequence field is `None` until the caller provides a collection. Setting it
//! always copies the elements into a vector owned by the shape, so the caller's
//! collection and the stored one never alias. Appending to an unset field first
//! materializes an empty vector.

/// Copies a caller-supplied sequence into a new owned vector.
pub fn normalize<T, I, V>(values: I) -> Vec<T>
where
    I: IntoIterator<Item = V>,
    V: Into<T>,
{
    values.into_iter().map(Into::into).collect()
}

/// Appends elements to a sequence field, creating it when unset.
pub fn append<T, I, V>(field: &mut Option<Vec<T>>, values: I)
where
    I: IntoIterator<Item = V>,
    V: Into<T>,
{
    field
        .get_or_insert_with(Vec::new)
        .extend(values.into_iter().map(Into::into));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_preserves_order() {
        let stored: Vec<String> = normalize(["b", "a", "c"]);
        assert_eq!(stored, vec!["b", "a", "c"]);
    }

    #[test]
    fn normalize_copies_from_borrowed_slice() {
        let mut original = vec!["10.0.0.2".to_string()];
        let stored: Vec<String> = normalize(original.iter().cloned());
        original.push("10.0.0.3".to_string());
        assert_eq!(stored, vec!["10.0.0.2"]);
    }

    #[test]
    fn normalize_empty_is_empty_not_unset() {
        let stored: Vec<String> = normalize(Vec::<String>::new());
        assert!(stored.is_empty());
    }

    #[test]
    fn append_materializes_unset_field() {
        let mut field: Option<Vec<String>> = None;
        append(&mut field, Vec::<String>::new());
        assert_eq!(field, Some(Vec::new()));
    }

    #[test]
    fn append_accumulates() {
        let mut field: Option<Vec<String>> = None;
        append(&mut field, ["x"]);
        append(&mut field, ["y"]);
        assert_eq!(field, Some(vec!["x".to_string(), "y".to_string()]));
    }
}
