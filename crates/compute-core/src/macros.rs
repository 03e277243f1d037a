//! Declaration macros for shapes.
//!
//! A shape is declared once as a table of fields; the macros expand it into the
//! struct, its accessors and fluent builders, structural equality and hashing,
//! diagnostic rendering and the name-driven [`crate::Shape`] view.
//!
//! ```
//! use compute_core::Shape;
//!
//! compute_core::shape! {
//!     /// A key/value label.
//!     pub struct Label {
//!         /// Label key.
//!         key: scalar(String) = "Key",
//!         /// Label values.
//!         values: list(String) = "Values",
//!     }
//! }
//!
//! let label = Label::default().with_key("env").with_values(["prod"]);
//! assert_eq!(label.to_string(), "{Key: env,Values: [prod]}");
//! assert_eq!(Label::FIELD_NAMES, &["Key", "Values"]);
//! ```
//!
//! Field kinds are `scalar(T)`, `list(T)`, `enumeration(E)` and
//! `enumeration_list(E)`; see [`crate::kind`].

/// Declares a request or response shape.
///
/// Request shapes name their operation and response shape after the struct
/// name: `pub struct CreateThingRequest: "CreateThing" -> CreateThingResult`.
#[macro_export]
macro_rules! shape {
    (@define
        [$(#[$meta:meta])*] $name:ident [$($extra:tt)*]
        { $( [$(#[$fmeta:meta])*] $field:ident $kind:ident ($fty:ty) $wire:literal )* }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $($extra)*
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                $field: ::std::option::Option<$crate::kind::$kind<$fty>>,
            )*
        }

        impl $name {
            $( $crate::__shape_accessors!($kind; $field; $fty; [$(#[$fmeta])*]); )*
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                true $( && self.$field == other.$field )*
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $( ::std::hash::Hash::hash(&self.$field, state); )*
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::render::render_fields(&$crate::shape::Shape::fields(self), f)
            }
        }

        impl $crate::shape::Shape for $name {
            const SHAPE_NAME: &'static str = stringify!($name);

            const FIELD_NAMES: &'static [&'static str] = &[ $( $wire, )* ];

            fn fields(&self) -> ::std::vec::Vec<$crate::value::Field> {
                ::std::vec![
                    $(
                        $crate::value::Field::new(
                            $wire,
                            self.$field
                                .as_ref()
                                .map($crate::value::ToFieldValue::to_field_value),
                        ),
                    )*
                ]
            }

            fn set_field(
                &mut self,
                name: &str,
                value: ::std::option::Option<$crate::value::FieldValue>,
            ) -> $crate::Result<()> {
                match name {
                    $(
                        $wire => {
                            self.$field =
                                $crate::value::convert_field(stringify!($name), $wire, value)?;
                            Ok(())
                        }
                    )*
                    _ => Err($crate::Error::UnknownField {
                        shape: stringify!($name).to_string(),
                        field: name.to_string(),
                    }),
                }
            }
        }

        impl $crate::value::ToFieldValue for $name {
            fn to_field_value(&self) -> $crate::value::FieldValue {
                $crate::shape::to_structure(self)
            }
        }

        impl $crate::value::FromFieldValue for $name {
            fn from_field_value(value: $crate::value::FieldValue) -> $crate::Result<Self> {
                $crate::shape::from_structure(value)
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident : $action:literal -> $response:ident {
            $( $(#[$fmeta:meta])* $field:ident : $kind:ident ( $fty:ty ) = $wire:literal ),* $(,)?
        }
    ) => {
        $crate::shape!(@define
            [$(#[$meta])*] $name
            [#[serde(skip)] metadata: $crate::metadata::RequestMetadata,]
            { $( [$(#[$fmeta])*] $field $kind ($fty) $wire )* }
        );

        impl $crate::shape::Request for $name {
            const ACTION: &'static str = $action;

            type Response = $response;

            fn metadata(&self) -> &$crate::metadata::RequestMetadata {
                &self.metadata
            }

            fn metadata_mut(&mut self) -> &mut $crate::metadata::RequestMetadata {
                &mut self.metadata
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $field:ident : $kind:ident ( $fty:ty ) = $wire:literal ),* $(,)?
        }
    ) => {
        $crate::shape!(@define
            [$(#[$meta])*] $name
            []
            { $( [$(#[$fmeta])*] $field $kind ($fty) $wire )* }
        );
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __shape_accessors {
    (scalar; $field:ident; $ty:ty; [$(#[$doc:meta])*]) => {
        $crate::__private::paste! {
            $(#[$doc])*
            #[must_use]
            pub fn $field(&self) -> ::std::option::Option<&$ty> {
                self.$field.as_ref()
            }

            /// Sets this field.
            pub fn [<set_ $field>](&mut self, value: impl ::std::convert::Into<$ty>) {
                self.$field = ::std::option::Option::Some(value.into());
            }

            /// Sets this field and returns the shape.
            #[must_use]
            pub fn [<with_ $field>](mut self, value: impl ::std::convert::Into<$ty>) -> Self {
                self.[<set_ $field>](value);
                self
            }

            /// Returns this field to unset.
            pub fn [<clear_ $field>](&mut self) {
                self.$field = ::std::option::Option::None;
            }
        }
    };

    (list; $field:ident; $ty:ty; [$(#[$doc:meta])*]) => {
        $crate::__private::paste! {
            $(#[$doc])*
            #[must_use]
            pub fn $field(&self) -> ::std::option::Option<&[$ty]> {
                self.$field.as_deref()
            }

            /// Replaces this sequence with an owned copy of `values`.
            pub fn [<set_ $field>]<I, V>(&mut self, values: I)
            where
                I: ::std::iter::IntoIterator<Item = V>,
                V: ::std::convert::Into<$ty>,
            {
                self.$field = ::std::option::Option::Some($crate::collection::normalize(values));
            }

            /// Appends `values` to this sequence and returns the shape.
            #[must_use]
            pub fn [<with_ $field>]<I, V>(mut self, values: I) -> Self
            where
                I: ::std::iter::IntoIterator<Item = V>,
                V: ::std::convert::Into<$ty>,
            {
                $crate::collection::append(&mut self.$field, values);
                self
            }

            /// Returns this sequence to unset.
            pub fn [<clear_ $field>](&mut self) {
                self.$field = ::std::option::Option::None;
            }
        }
    };

    (enumeration; $field:ident; $ty:ty; [$(#[$doc:meta])*]) => {
        $crate::__private::paste! {
            $(#[$doc])*
            #[must_use]
            pub fn $field(&self) -> ::std::option::Option<&str> {
                self.$field.as_deref()
            }

            /// Parses this field into its enumeration, `Ok(None)` when unset.
            ///
            /// # Errors
            ///
            /// Returns an unknown-enum error for values outside the known set.
            pub fn [<parsed_ $field>](&self) -> $crate::Result<::std::option::Option<$ty>> {
                self.$field
                    .as_deref()
                    .map($crate::enums::parse_stored::<$ty>)
                    .transpose()
            }

            /// Sets this field from a raw string or an enumerant.
            pub fn [<set_ $field>](&mut self, value: impl ::std::convert::Into<::std::string::String>) {
                self.$field = ::std::option::Option::Some(value.into());
            }

            /// Sets this field from a raw string or an enumerant and returns the shape.
            #[must_use]
            pub fn [<with_ $field>](
                mut self,
                value: impl ::std::convert::Into<::std::string::String>,
            ) -> Self {
                self.[<set_ $field>](value);
                self
            }

            /// Returns this field to unset.
            pub fn [<clear_ $field>](&mut self) {
                self.$field = ::std::option::Option::None;
            }
        }
    };

    (enumeration_list; $field:ident; $ty:ty; [$(#[$doc:meta])*]) => {
        $crate::__private::paste! {
            $(#[$doc])*
            #[must_use]
            pub fn $field(&self) -> ::std::option::Option<&[::std::string::String]> {
                self.$field.as_deref()
            }

            /// Parses every element into its enumeration, `Ok(None)` when unset.
            ///
            /// # Errors
            ///
            /// Returns an unknown-enum error for the first value outside the known set.
            pub fn [<parsed_ $field>](
                &self,
            ) -> $crate::Result<::std::option::Option<::std::vec::Vec<$ty>>> {
                self.$field
                    .as_ref()
                    .map(|values| {
                        values
                            .iter()
                            .map(|value| $crate::enums::parse_stored::<$ty>(value))
                            .collect::<$crate::Result<::std::vec::Vec<$ty>>>()
                    })
                    .transpose()
            }

            /// Replaces this sequence with owned copies of raw strings or enumerants.
            pub fn [<set_ $field>]<I, V>(&mut self, values: I)
            where
                I: ::std::iter::IntoIterator<Item = V>,
                V: ::std::convert::Into<::std::string::String>,
            {
                self.$field = ::std::option::Option::Some($crate::collection::normalize(values));
            }

            /// Appends raw strings or enumerants and returns the shape.
            #[must_use]
            pub fn [<with_ $field>]<I, V>(mut self, values: I) -> Self
            where
                I: ::std::iter::IntoIterator<Item = V>,
                V: ::std::convert::Into<::std::string::String>,
            {
                $crate::collection::append(&mut self.$field, values);
                self
            }

            /// Returns this sequence to unset.
            pub fn [<clear_ $field>](&mut self) {
                self.$field = ::std::option::Option::None;
            }
        }
    };
}

/// Implements [`crate::DryRunSupported`] for request shapes with a `dry_run`
/// boolean field.
#[macro_export]
macro_rules! dry_run_supported {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $crate::shape::DryRunSupported for $name {
                fn to_dry_run(&self) -> Self {
                    let mut request = self.clone();
                    request.set_dry_run(true);
                    request
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use chrono::{TimeZone, Utc};

    use crate::error::Error;
    use crate::shape::{DryRunSupported, Request, Shape};
    use crate::value::FieldValue;

    crate::wire_enum! {
        /// Test protocol.
        pub enum Protocol {
            /// TCP
            Tcp => "tcp",
            /// UDP
            Udp => "udp",
        }
    }

    crate::shape! {
        /// Test tag.
        pub struct Label {
            /// Key.
            key: scalar(String) = "Key",
            /// Value.
            value: scalar(String) = "Value",
        }
    }

    crate::shape! {
        /// Test reply.
        pub struct OpenTunnelResult {
            /// Tunnel id.
            tunnel_id: scalar(String) = "TunnelId",
        }
    }

    crate::shape! {
        /// Test request covering every field kind.
        pub struct OpenTunnelRequest: "OpenTunnel" -> OpenTunnelResult {
            /// CIDR.
            cidr: scalar(String) = "Cidr",
            /// Port.
            port: scalar(i32) = "Port",
            /// Protocol.
            protocol: enumeration(Protocol) = "Protocol",
            /// Fallback protocols.
            fallbacks: enumeration_list(Protocol) = "Fallback",
            /// Servers.
            servers: list(String) = "Servers",
            /// Labels.
            labels: list(Label) = "Label",
            /// Primary label.
            primary: scalar(Label) = "Primary",
            /// Expiry.
            expires: scalar(chrono::DateTime<chrono::Utc>) = "Expires",
            /// Dry run flag.
            dry_run: scalar(bool) = "DryRun",
        }
    }

    crate::dry_run_supported!(OpenTunnelRequest);

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_getters_default_to_unset() {
        let request = OpenTunnelRequest::default();
        assert!(request.cidr().is_none());
        assert!(request.servers().is_none());
        assert!(request.protocol().is_none());
        assert!(request.is_empty());
    }

    #[test]
    fn test_scalar_set_and_clear() {
        let mut request = OpenTunnelRequest::default();
        request.set_cidr("10.0.0.0/22");
        request.set_port(443);
        assert_eq!(request.cidr().map(String::as_str), Some("10.0.0.0/22"));
        assert_eq!(request.port(), Some(&443));

        request.clear_cidr();
        assert!(request.cidr().is_none());
    }

    #[test]
    fn test_empty_string_is_set() {
        let request = OpenTunnelRequest::default().with_cidr("");
        assert_eq!(request.cidr().map(String::as_str), Some(""));
        assert_ne!(request, OpenTunnelRequest::default());
        assert_eq!(request.to_string(), "{Cidr: }");
    }

    #[test]
    fn test_list_set_replaces_and_with_appends() {
        let mut request = OpenTunnelRequest::default()
            .with_servers(["a"])
            .with_servers(["b", "c"]);
        assert_eq!(request.servers().unwrap(), ["a", "b", "c"]);

        request.set_servers(["z"]);
        assert_eq!(request.servers().unwrap(), ["z"]);
    }

    #[test]
    fn test_empty_list_differs_from_unset() {
        let empty = OpenTunnelRequest::default().with_servers(Vec::<String>::new());
        let unset = OpenTunnelRequest::default();

        assert_eq!(empty.servers(), Some(&[][..]));
        assert!(unset.servers().is_none());
        assert_ne!(empty, unset);
        assert_eq!(empty.to_string(), "{Servers: []}");
        assert_eq!(unset.to_string(), "{}");
    }

    #[test]
    fn test_list_is_an_independent_copy() {
        let mut original = vec!["8.8.8.8".to_string()];
        let request = OpenTunnelRequest::default().with_servers(original.iter().cloned());
        original.push("1.1.1.1".to_string());
        original[0] = "9.9.9.9".to_string();
        assert_eq!(request.servers().unwrap(), ["8.8.8.8"]);
    }

    #[test]
    fn test_enum_and_raw_string_are_equivalent() {
        let raw = OpenTunnelRequest::default().with_protocol("udp");
        let typed = OpenTunnelRequest::default().with_protocol(Protocol::Udp);

        assert_eq!(raw, typed);
        assert_eq!(hash_of(&raw), hash_of(&typed));
        assert_eq!(typed.protocol(), Some("udp"));
        assert_eq!(typed.parsed_protocol().unwrap(), Some(Protocol::Udp));
    }

    #[test]
    fn test_unknown_enum_string_is_stored_verbatim() {
        let request = OpenTunnelRequest::default().with_protocol("quic");
        assert_eq!(request.protocol(), Some("quic"));
        assert!(matches!(
            request.parsed_protocol(),
            Err(Error::UnknownEnumValue { .. })
        ));
        assert_eq!(OpenTunnelRequest::default().parsed_protocol().unwrap(), None);
    }

    #[test]
    fn test_enumeration_list() {
        let request = OpenTunnelRequest::default()
            .with_fallbacks([Protocol::Tcp])
            .with_fallbacks(["udp"]);
        assert_eq!(request.fallbacks().unwrap(), ["tcp", "udp"]);
        assert_eq!(
            request.parsed_fallbacks().unwrap(),
            Some(vec![Protocol::Tcp, Protocol::Udp])
        );
    }

    #[test]
    fn test_equality_ignores_metadata() {
        let a = OpenTunnelRequest::default().with_cidr("10.0.0.0/16");
        let b = OpenTunnelRequest::default().with_cidr("10.0.0.0/16");
        assert_ne!(a.metadata().request_id(), b.metadata().request_id());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_list_order_matters() {
        let a = OpenTunnelRequest::default().with_servers(["a", "b"]);
        let b = OpenTunnelRequest::default().with_servers(["b", "a"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_nested_equality_is_recursive() {
        let a = OpenTunnelRequest::default()
            .with_primary(Label::default().with_key("env").with_value("prod"));
        let b = OpenTunnelRequest::default()
            .with_primary(Label::default().with_key("env").with_value("prod"));
        let c = OpenTunnelRequest::default()
            .with_primary(Label::default().with_key("env").with_value("dev"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_rendering_in_declared_order() {
        let request = OpenTunnelRequest::default()
            .with_dry_run(false)
            .with_servers(["8.8.8.8"])
            .with_cidr("10.0.0.0/22")
            .with_labels([Label::default().with_key("team")]);
        assert_eq!(
            request.to_string(),
            "{Cidr: 10.0.0.0/22,Servers: [8.8.8.8],Label: [{Key: team}],DryRun: false}"
        );
    }

    #[test]
    fn test_fields_enumerates_every_field() {
        let request = OpenTunnelRequest::default().with_port(1194);
        let fields = request.fields();
        let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
        assert_eq!(names, OpenTunnelRequest::FIELD_NAMES);
        assert_eq!(fields.iter().filter(|f| f.is_set()).count(), 1);
        assert_eq!(request.get_field("Port"), Some(FieldValue::Integer(1194)));
        assert_eq!(request.get_field("Cidr"), None);
        assert_eq!(request.get_field("NoSuchField"), None);
    }

    #[test]
    fn test_set_field_round_trip() {
        let expires = Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap();
        let original = OpenTunnelRequest::default()
            .with_cidr("10.0.0.0/22")
            .with_port(443)
            .with_protocol(Protocol::Tcp)
            .with_servers(["8.8.8.8"])
            .with_labels([Label::default().with_key("a").with_value("b")])
            .with_primary(Label::default().with_key("k"))
            .with_expires(expires)
            .with_dry_run(true);

        let mut copy = OpenTunnelRequest::default();
        for field in original.fields() {
            copy.set_field(field.name, field.value).unwrap();
        }
        assert_eq!(copy, original);
    }

    #[test]
    fn test_set_field_none_clears() {
        let mut request = OpenTunnelRequest::default().with_cidr("10.0.0.0/8");
        request.set_field("Cidr", None).unwrap();
        assert!(request.cidr().is_none());
    }

    #[test]
    fn test_set_field_errors() {
        let mut request = OpenTunnelRequest::default();
        assert_eq!(
            request.set_field("Bogus", Some(FieldValue::Boolean(true))),
            Err(Error::UnknownField {
                shape: "OpenTunnelRequest".to_string(),
                field: "Bogus".to_string()
            })
        );
        assert!(matches!(
            request.set_field("Port", Some(FieldValue::Boolean(true))),
            Err(Error::InvalidField { .. })
        ));
    }

    #[test]
    fn test_request_trait() {
        assert_eq!(OpenTunnelRequest::ACTION, "OpenTunnel");
        assert_eq!(OpenTunnelRequest::SHAPE_NAME, "OpenTunnelRequest");
        assert_eq!(OpenTunnelResult::FIELD_NAMES, &["TunnelId"]);
    }

    #[test]
    fn test_to_dry_run() {
        let request = OpenTunnelRequest::default().with_cidr("10.0.0.0/22");
        let dry = request.to_dry_run();
        assert_eq!(dry.dry_run(), Some(&true));
        assert_eq!(dry.cidr(), request.cidr());
        assert!(request.dry_run().is_none());
        assert_eq!(dry.metadata().request_id(), request.metadata().request_id());
    }

    #[test]
    fn test_serde_uses_wire_names_and_omits_unset() {
        let request = OpenTunnelRequest::default()
            .with_cidr("10.0.0.0/22")
            .with_servers(Vec::<String>::new());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "Cidr": "10.0.0.0/22", "Servers": [] })
        );

        let back: OpenTunnelRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }
}
