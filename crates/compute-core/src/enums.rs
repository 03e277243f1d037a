//! Closed enumerant sets with canonical wire strings.
//!
//! Enum-constrained fields always store the canonical string. The typed enum
//! is sugar: it converts into that string on the way in and is recovered by a
//! validating accessor on the way out. Strings outside the set are stored
//! verbatim so newer service values survive a round trip.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A closed set of named values with a canonical wire string each.
pub trait WireEnum:
    'static + Copy + Eq + fmt::Debug + fmt::Display + AsRef<str> + FromStr<Err = Error> + Into<String>
{
    /// Storage representation of fields constrained to this enumeration.
    type Repr;

    /// Enumeration name used in diagnostics.
    const NAME: &'static str;

    /// Returns the canonical wire string.
    fn as_str(&self) -> &'static str;

    /// Returns every enumerant in declaration order.
    fn values() -> &'static [Self];

    /// Looks up the enumerant for a canonical string.
    fn from_wire(value: &str) -> Option<Self> {
        Self::values().iter().copied().find(|v| v.as_str() == value)
    }
}

/// Declares a string-backed enumeration.
///
/// ```
/// compute_core::wire_enum! {
///     /// Transport protocol.
///     pub enum Protocol {
///         /// TCP
///         Tcp => "tcp",
///         /// UDP
///         Udp => "udp",
///     }
/// }
///
/// assert_eq!(Protocol::Udp.to_string(), "udp");
/// assert_eq!("tcp".parse::<Protocol>().unwrap(), Protocol::Tcp);
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Returns the canonical wire string.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            /// Returns every enumerant in declaration order.
            #[must_use]
            pub const fn all() -> &'static [Self] {
                &[ $( Self::$variant, )+ ]
            }
        }

        impl $crate::enums::WireEnum for $name {
            type Repr = ::std::string::String;

            const NAME: &'static str = stringify!($name);

            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }

            fn values() -> &'static [Self] {
                Self::all()
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                match s {
                    $( $wire => Ok(Self::$variant), )+
                    _ => Err($crate::Error::UnknownEnumValue {
                        enumeration: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::convert::From<$name> for ::std::string::String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

/// Parses a stored enum string, logging values outside the known set.
///
/// # Errors
///
/// Returns [`Error::UnknownEnumValue`] for strings the enumeration does not
/// declare.
pub fn parse_stored<E: WireEnum>(value: &str) -> crate::Result<E> {
    value.parse::<E>().map_err(|err| {
        tracing::debug!(enumeration = E::NAME, value, "unrecognized enum value");
        err
    })
}
