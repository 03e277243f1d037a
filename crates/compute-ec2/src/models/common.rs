//! Shapes shared by many operations.

use compute_core::{shape, wire_enum};

wire_enum! {
    /// Type of resource a tag specification applies to.
    pub enum ResourceType {
        /// Capacity reservation
        CapacityReservation => "capacity-reservation",
        /// Client VPN endpoint
        ClientVpnEndpoint => "client-vpn-endpoint",
        /// Dedicated host
        DedicatedHost => "dedicated-host",
        /// Instance
        Instance => "instance",
        /// Network interface
        NetworkInterface => "network-interface",
        /// Security group
        SecurityGroup => "security-group",
        /// Spot instance request
        SpotInstancesRequest => "spot-instances-request",
        /// Subnet
        Subnet => "subnet",
        /// Volume
        Volume => "volume",
        /// VPC
        Vpc => "vpc",
    }
}

shape! {
    /// A name and a set of values used to narrow a describe call.
    ///
    /// Values within one filter are ORed; separate filters are ANDed.
    pub struct Filter {
        /// Filter name, for example `vpc-id` or `tag:Name`.
        name: scalar(String) = "Name",
        /// Accepted values.
        values: list(String) = "Value",
    }
}

impl Filter {
    /// Creates a filter from a name and its values.
    #[must_use]
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self::default().with_name(name).with_values(values)
    }
}

shape! {
    /// A key/value label on a resource.
    pub struct Tag {
        /// Tag key.
        key: scalar(String) = "Key",
        /// Tag value.
        value: scalar(String) = "Value",
    }
}

impl Tag {
    /// Creates a tag from a key and value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::default().with_key(key).with_value(value)
    }
}

shape! {
    /// Tags to apply to a resource while it is created.
    pub struct TagSpecification {
        /// Type of resource to tag.
        resource_type: enumeration(ResourceType) = "ResourceType",
        /// Tags to apply.
        tags: list(Tag) = "Tag",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compute_core::Shape;

    #[test]
    fn test_filter_new() {
        let filter = Filter::new("vpc-id", ["vpc-1", "vpc-2"]);
        assert_eq!(filter.name().map(String::as_str), Some("vpc-id"));
        assert_eq!(filter.values().unwrap(), ["vpc-1", "vpc-2"]);
        assert_eq!(filter.to_string(), "{Name: vpc-id,Value: [vpc-1, vpc-2]}");
    }

    #[test]
    fn test_tag_specification_rendering() {
        let spec = TagSpecification::default()
            .with_resource_type(ResourceType::ClientVpnEndpoint)
            .with_tags([Tag::new("team", "net")]);
        assert_eq!(
            spec.to_string(),
            "{ResourceType: client-vpn-endpoint,Tag: [{Key: team,Value: net}]}"
        );
        assert_eq!(
            spec.parsed_resource_type().unwrap(),
            Some(ResourceType::ClientVpnEndpoint)
        );
    }

    #[test]
    fn test_future_resource_type_is_kept() {
        let spec = TagSpecification::default().with_resource_type("vpn-gateway-v2");
        assert_eq!(spec.resource_type(), Some("vpn-gateway-v2"));
        assert!(spec.parsed_resource_type().is_err());
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Filter::FIELD_NAMES, &["Name", "Value"]);
        assert_eq!(TagSpecification::SHAPE_NAME, "TagSpecification");
    }
}
