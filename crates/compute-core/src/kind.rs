//! Storage types behind each field kind accepted by [`crate::shape!`].
//!
//! A field declared as `name: list(String) = "Name"` is stored as
//! `Option<kind::list<String>>`. The aliases keep the declaration syntax uniform
//! while the accessor macros pick the right getter and setter signatures.

#![allow(non_camel_case_types)]

use crate::enums::WireEnum;

/// A single scalar or nested shape.
pub type scalar<T> = T;

/// An ordered sequence of scalars or nested shapes.
pub type list<T> = Vec<T>;

/// A string restricted to the enumerants of `E`, stored in canonical form.
pub type enumeration<E> = <E as WireEnum>::Repr;

/// An ordered sequence of enum-constrained strings.
pub type enumeration_list<E> = Vec<<E as WireEnum>::Repr>;
