//! Dedicated Hosts.
//!
//! Host operations have no `DryRun` parameter, so none of these requests
//! supports a dry run.

use chrono::{DateTime, Utc};
use compute_core::{shape, wire_enum};

use super::common::{Filter, Tag, TagSpecification};

wire_enum! {
    /// Whether untargeted launches may land on a host.
    pub enum AutoPlacement {
        /// Accept untargeted launches
        On => "on",
        /// Only targeted launches
        Off => "off",
    }
}

wire_enum! {
    /// Whether instances are moved to a new host after a host failure.
    pub enum HostRecovery {
        /// Recovery enabled
        On => "on",
        /// Recovery disabled
        Off => "off",
    }
}

wire_enum! {
    /// Allocation state of a Dedicated Host.
    pub enum AllocationState {
        /// Allocated and usable
        Available => "available",
        /// Under assessment after a failure
        UnderAssessment => "under-assessment",
        /// Failed permanently
        PermanentFailure => "permanent-failure",
        /// Released
        Released => "released",
        /// Released after a permanent failure
        ReleasedPermanentFailure => "released-permanent-failure",
        /// Being allocated
        Pending => "pending",
    }
}

shape! {
    /// Allocates Dedicated Hosts.
    pub struct AllocateHostsRequest: "AllocateHosts" -> AllocateHostsResult {
        /// Auto-placement setting.
        auto_placement: enumeration(AutoPlacement) = "AutoPlacement",
        /// Availability Zone.
        availability_zone: scalar(String) = "AvailabilityZone",
        /// Idempotency token.
        client_token: scalar(String) = "ClientToken",
        /// Instance type the hosts support.
        instance_type: scalar(String) = "InstanceType",
        /// Instance family the hosts support.
        instance_family: scalar(String) = "InstanceFamily",
        /// Number of hosts.
        quantity: scalar(i32) = "Quantity",
        /// Tags applied at creation.
        tag_specifications: list(TagSpecification) = "TagSpecification",
        /// Host recovery setting.
        host_recovery: enumeration(HostRecovery) = "HostRecovery",
    }
}

shape! {
    /// Reply to [`AllocateHostsRequest`].
    pub struct AllocateHostsResult {
        /// Ids of the allocated hosts.
        host_ids: list(String) = "HostIds",
    }
}

shape! {
    /// Releases Dedicated Hosts.
    pub struct ReleaseHostsRequest: "ReleaseHosts" -> ReleaseHostsResult {
        /// Host ids.
        host_ids: list(String) = "HostId",
    }
}

shape! {
    /// Error detail of an item that could not be processed.
    pub struct UnsuccessfulItemError {
        /// Error code.
        code: scalar(String) = "Code",
        /// Error message.
        message: scalar(String) = "Message",
    }
}

shape! {
    /// An item a bulk operation could not process.
    pub struct UnsuccessfulItem {
        /// The error.
        error: scalar(UnsuccessfulItemError) = "Error",
        /// Resource id.
        resource_id: scalar(String) = "ResourceId",
    }
}

shape! {
    /// Reply to [`ReleaseHostsRequest`].
    pub struct ReleaseHostsResult {
        /// Released host ids.
        successful: list(String) = "Successful",
        /// Hosts that could not be released.
        unsuccessful: list(UnsuccessfulItem) = "Unsuccessful",
    }
}

shape! {
    /// Hardware of a Dedicated Host.
    pub struct HostProperties {
        /// Physical cores.
        cores: scalar(i32) = "Cores",
        /// Supported instance type.
        instance_type: scalar(String) = "InstanceType",
        /// Supported instance family.
        instance_family: scalar(String) = "InstanceFamily",
        /// Sockets.
        sockets: scalar(i32) = "Sockets",
        /// Total vCPUs.
        total_v_cpus: scalar(i32) = "TotalVCpus",
    }
}

shape! {
    /// An instance running on a Dedicated Host.
    pub struct HostInstance {
        /// Instance id.
        instance_id: scalar(String) = "InstanceId",
        /// Instance type.
        instance_type: scalar(String) = "InstanceType",
        /// Owning account.
        owner_id: scalar(String) = "OwnerId",
    }
}

shape! {
    /// A Dedicated Host as described by the service.
    pub struct Host {
        /// Auto-placement setting.
        auto_placement: enumeration(AutoPlacement) = "AutoPlacement",
        /// Availability Zone.
        availability_zone: scalar(String) = "AvailabilityZone",
        /// Idempotency token used at allocation.
        client_token: scalar(String) = "ClientToken",
        /// Host id.
        host_id: scalar(String) = "HostId",
        /// Hardware.
        host_properties: scalar(HostProperties) = "HostProperties",
        /// Host reservation, when purchased.
        host_reservation_id: scalar(String) = "HostReservationId",
        /// Instances on the host.
        instances: list(HostInstance) = "Instances",
        /// Allocation state.
        state: enumeration(AllocationState) = "State",
        /// When the host was allocated.
        allocation_time: scalar(DateTime<Utc>) = "AllocationTime",
        /// When the host was released.
        release_time: scalar(DateTime<Utc>) = "ReleaseTime",
        /// Tags.
        tags: list(Tag) = "Tags",
        /// Host recovery setting.
        host_recovery: enumeration(HostRecovery) = "HostRecovery",
        /// Whether several instance types may share the host.
        allows_multiple_instance_types: scalar(String) = "AllowsMultipleInstanceTypes",
        /// Owning account.
        owner_id: scalar(String) = "OwnerId",
        /// Availability Zone id.
        availability_zone_id: scalar(String) = "AvailabilityZoneId",
        /// Whether the host belongs to a service-linked resource group.
        member_of_service_linked_resource_group: scalar(bool) = "MemberOfServiceLinkedResourceGroup",
    }
}

shape! {
    /// Describes Dedicated Hosts.
    pub struct DescribeHostsRequest: "DescribeHosts" -> DescribeHostsResult {
        /// Filters.
        filters: list(Filter) = "Filter",
        /// Host ids.
        host_ids: list(String) = "HostId",
        /// Page size, 5 to 500.
        max_results: scalar(i32) = "MaxResults",
        /// Token from a previous page.
        next_token: scalar(String) = "NextToken",
    }
}

shape! {
    /// Reply to [`DescribeHostsRequest`].
    pub struct DescribeHostsResult {
        /// Hosts.
        hosts: list(Host) = "Hosts",
        /// Token for the next page.
        next_token: scalar(String) = "NextToken",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compute_core::Shape;

    #[test]
    fn test_allocate_request() {
        let request = AllocateHostsRequest::default()
            .with_auto_placement(AutoPlacement::On)
            .with_availability_zone("us-east-1a")
            .with_instance_family("m5")
            .with_quantity(2);

        assert_eq!(request.parsed_auto_placement().unwrap(), Some(AutoPlacement::On));
        assert_eq!(
            request.to_string(),
            "{AutoPlacement: on,AvailabilityZone: us-east-1a,InstanceFamily: m5,Quantity: 2}"
        );
    }

    #[test]
    fn test_host_operations_have_no_dry_run_field() {
        assert!(!AllocateHostsRequest::FIELD_NAMES.contains(&"DryRun"));
        assert!(!ReleaseHostsRequest::FIELD_NAMES.contains(&"DryRun"));
        assert!(!DescribeHostsRequest::FIELD_NAMES.contains(&"DryRun"));
    }

    #[test]
    fn test_release_result_unsuccessful_items() {
        let result = ReleaseHostsResult::default()
            .with_successful(["h-1"])
            .with_unsuccessful([UnsuccessfulItem::default()
                .with_resource_id("h-2")
                .with_error(
                    UnsuccessfulItemError::default()
                        .with_code("Client.InvalidHost.NotFound")
                        .with_message("not found"),
                )]);

        let failed = &result.unsuccessful().unwrap()[0];
        assert_eq!(failed.resource_id().map(String::as_str), Some("h-2"));
        assert_eq!(
            failed.error().and_then(UnsuccessfulItemError::code).map(String::as_str),
            Some("Client.InvalidHost.NotFound")
        );
    }

    #[test]
    fn test_allocation_state_values() {
        assert_eq!(AllocationState::all().len(), 6);
        assert_eq!(
            "released-permanent-failure".parse::<AllocationState>().unwrap(),
            AllocationState::ReleasedPermanentFailure
        );
    }
}
