//! Elastic network interfaces.

use chrono::{DateTime, Utc};
use compute_core::{dry_run_supported, shape, wire_enum};

use super::common::{Filter, Tag, TagSpecification};

wire_enum! {
    /// Lifecycle state of a network interface.
    pub enum NetworkInterfaceStatus {
        /// Not attached
        Available => "available",
        /// Associated
        Associated => "associated",
        /// Being attached
        Attaching => "attaching",
        /// Attached to an instance
        InUse => "in-use",
        /// Being detached
        Detaching => "detaching",
    }
}

wire_enum! {
    /// Kind of network interface.
    pub enum NetworkInterfaceType {
        /// Standard interface
        Interface => "interface",
        /// NAT gateway interface
        NatGateway => "natGateway",
        /// Elastic Fabric Adapter
        Efa => "efa",
    }
}

wire_enum! {
    /// Attachment state of a network interface.
    pub enum AttachmentStatus {
        /// Being attached
        Attaching => "attaching",
        /// Attached
        Attached => "attached",
        /// Being detached
        Detaching => "detaching",
        /// Detached
        Detached => "detached",
    }
}

shape! {
    /// A security group reference.
    pub struct GroupIdentifier {
        /// Group name.
        group_name: scalar(String) = "GroupName",
        /// Group id.
        group_id: scalar(String) = "GroupId",
    }
}

shape! {
    /// How a network interface is attached to an instance.
    pub struct NetworkInterfaceAttachment {
        /// When the attachment was made.
        attach_time: scalar(DateTime<Utc>) = "AttachTime",
        /// Attachment id.
        attachment_id: scalar(String) = "AttachmentId",
        /// Whether the interface is deleted with the instance.
        delete_on_termination: scalar(bool) = "DeleteOnTermination",
        /// Device index on the instance.
        device_index: scalar(i32) = "DeviceIndex",
        /// Instance id.
        instance_id: scalar(String) = "InstanceId",
        /// Account that owns the instance.
        instance_owner_id: scalar(String) = "InstanceOwnerId",
        /// Attachment state.
        status: enumeration(AttachmentStatus) = "Status",
    }
}

shape! {
    /// A private IPv4 address of a network interface.
    pub struct NetworkInterfacePrivateIpAddress {
        /// Private DNS name.
        private_dns_name: scalar(String) = "PrivateDnsName",
        /// Private IPv4 address.
        private_ip_address: scalar(String) = "PrivateIpAddress",
        /// Whether this is the primary address.
        primary: scalar(bool) = "Primary",
    }
}

shape! {
    /// An IPv6 address of a network interface.
    pub struct NetworkInterfaceIpv6Address {
        /// IPv6 address.
        ipv6_address: scalar(String) = "Ipv6Address",
    }
}

shape! {
    /// A network interface as described by the service.
    pub struct NetworkInterface {
        /// Interface id.
        network_interface_id: scalar(String) = "NetworkInterfaceId",
        /// Subnet id.
        subnet_id: scalar(String) = "SubnetId",
        /// VPC id.
        vpc_id: scalar(String) = "VpcId",
        /// Availability Zone.
        availability_zone: scalar(String) = "AvailabilityZone",
        /// Description.
        description: scalar(String) = "Description",
        /// Owning account.
        owner_id: scalar(String) = "OwnerId",
        /// Service or account that created the interface on the owner's behalf.
        requester_id: scalar(String) = "RequesterId",
        /// Whether the interface is managed by a service.
        requester_managed: scalar(bool) = "RequesterManaged",
        /// Lifecycle state.
        status: enumeration(NetworkInterfaceStatus) = "Status",
        /// MAC address.
        mac_address: scalar(String) = "MacAddress",
        /// Primary private IPv4 address.
        private_ip_address: scalar(String) = "PrivateIpAddress",
        /// Private DNS name.
        private_dns_name: scalar(String) = "PrivateDnsName",
        /// Whether source/destination checking is enabled.
        source_dest_check: scalar(bool) = "SourceDestCheck",
        /// Security groups.
        groups: list(GroupIdentifier) = "Groups",
        /// Attachment, when attached.
        attachment: scalar(NetworkInterfaceAttachment) = "Attachment",
        /// Private IPv4 addresses.
        private_ip_addresses: list(NetworkInterfacePrivateIpAddress) = "PrivateIpAddresses",
        /// IPv6 addresses.
        ipv6_addresses: list(NetworkInterfaceIpv6Address) = "Ipv6Addresses",
        /// Interface kind.
        interface_type: enumeration(NetworkInterfaceType) = "InterfaceType",
        /// Tags.
        tag_set: list(Tag) = "TagSet",
    }
}

shape! {
    /// Describes network interfaces.
    pub struct DescribeNetworkInterfacesRequest: "DescribeNetworkInterfaces" -> DescribeNetworkInterfacesResult {
        /// Filters.
        filters: list(Filter) = "Filter",
        /// Checks permissions without describing.
        dry_run: scalar(bool) = "DryRun",
        /// Interface ids.
        network_interface_ids: list(String) = "NetworkInterfaceId",
        /// Token from a previous page.
        next_token: scalar(String) = "NextToken",
        /// Page size, 5 to 1000.
        max_results: scalar(i32) = "MaxResults",
    }
}

shape! {
    /// Reply to [`DescribeNetworkInterfacesRequest`].
    pub struct DescribeNetworkInterfacesResult {
        /// Interfaces.
        network_interfaces: list(NetworkInterface) = "NetworkInterfaces",
        /// Token for the next page.
        next_token: scalar(String) = "NextToken",
    }
}

shape! {
    /// A private IPv4 address requested for a new interface.
    pub struct PrivateIpAddressSpecification {
        /// Whether this is the primary address.
        primary: scalar(bool) = "Primary",
        /// Private IPv4 address.
        private_ip_address: scalar(String) = "PrivateIpAddress",
    }
}

shape! {
    /// An IPv6 address requested for a new interface.
    pub struct InstanceIpv6Address {
        /// IPv6 address.
        ipv6_address: scalar(String) = "Ipv6Address",
    }
}

shape! {
    /// Creates a network interface in a subnet.
    pub struct CreateNetworkInterfaceRequest: "CreateNetworkInterface" -> CreateNetworkInterfaceResult {
        /// Description.
        description: scalar(String) = "Description",
        /// Checks permissions without creating the interface.
        dry_run: scalar(bool) = "DryRun",
        /// Security groups.
        groups: list(String) = "SecurityGroupId",
        /// Number of IPv6 addresses to assign automatically.
        ipv6_address_count: scalar(i32) = "Ipv6AddressCount",
        /// Specific IPv6 addresses.
        ipv6_addresses: list(InstanceIpv6Address) = "Ipv6Addresses",
        /// Primary private IPv4 address.
        private_ip_address: scalar(String) = "PrivateIpAddress",
        /// Private IPv4 addresses.
        private_ip_addresses: list(PrivateIpAddressSpecification) = "PrivateIpAddresses",
        /// Number of secondary private IPv4 addresses to assign automatically.
        secondary_private_ip_address_count: scalar(i32) = "SecondaryPrivateIpAddressCount",
        /// Interface kind.
        interface_type: enumeration(NetworkInterfaceType) = "InterfaceType",
        /// Subnet id.
        subnet_id: scalar(String) = "SubnetId",
        /// Tags applied at creation.
        tag_specifications: list(TagSpecification) = "TagSpecification",
    }
}

shape! {
    /// Reply to [`CreateNetworkInterfaceRequest`].
    pub struct CreateNetworkInterfaceResult {
        /// The new interface.
        network_interface: scalar(NetworkInterface) = "NetworkInterface",
    }
}

dry_run_supported!(DescribeNetworkInterfacesRequest, CreateNetworkInterfaceRequest);

#[cfg(test)]
mod tests {
    use super::*;
    use compute_core::Shape;

    #[test]
    fn test_describe_request_accumulates_ids() {
        let request = DescribeNetworkInterfacesRequest::default()
            .with_network_interface_ids(["eni-1"])
            .with_network_interface_ids(["eni-2", "eni-3"])
            .with_filters([Filter::new("subnet-id", ["subnet-9"])]);

        assert_eq!(
            request.network_interface_ids().unwrap(),
            ["eni-1", "eni-2", "eni-3"]
        );
        assert_eq!(request.filters().map(<[Filter]>::len), Some(1));
    }

    #[test]
    fn test_unset_status_parses_as_none() {
        let interface = NetworkInterface::default().with_network_interface_id("eni-1");
        assert_eq!(interface.parsed_status().unwrap(), None);
        assert_eq!(interface.to_string(), "{NetworkInterfaceId: eni-1}");
    }

    #[test]
    fn test_interface_type_wire_values() {
        assert_eq!(NetworkInterfaceType::NatGateway.as_str(), "natGateway");
        assert_eq!(
            "in-use".parse::<NetworkInterfaceStatus>().unwrap(),
            NetworkInterfaceStatus::InUse
        );
    }

    #[test]
    fn test_nested_attachment_equality() {
        let a = NetworkInterface::default().with_attachment(
            NetworkInterfaceAttachment::default()
                .with_device_index(0)
                .with_status(AttachmentStatus::Attached),
        );
        let b = NetworkInterface::default().with_attachment(
            NetworkInterfaceAttachment::default()
                .with_device_index(0)
                .with_status("attached"),
        );
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }
}
