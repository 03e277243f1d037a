//! Spot Instance requests.

use chrono::{DateTime, Utc};
use compute_core::{dry_run_supported, shape, wire_enum};

use super::common::{Filter, Tag, TagSpecification};
use super::network_interface::GroupIdentifier;

wire_enum! {
    /// Whether a Spot request is fulfilled once or kept open.
    pub enum SpotInstanceType {
        /// Closed after the first fulfilment
        OneTime => "one-time",
        /// Re-opened after interruption
        Persistent => "persistent",
    }
}

wire_enum! {
    /// State of a Spot Instance request.
    pub enum SpotInstanceState {
        /// Waiting for fulfilment
        Open => "open",
        /// Fulfilled
        Active => "active",
        /// Closed by the service
        Closed => "closed",
        /// Cancelled by the user
        Cancelled => "cancelled",
        /// Failed on bad parameters
        Failed => "failed",
    }
}

wire_enum! {
    /// What happens to a Spot Instance when it is interrupted.
    pub enum InstanceInterruptionBehavior {
        /// Hibernate the instance
        Hibernate => "hibernate",
        /// Stop the instance
        Stop => "stop",
        /// Terminate the instance
        Terminate => "terminate",
    }
}

shape! {
    /// Placement of a Spot Instance.
    pub struct SpotPlacement {
        /// Availability Zone.
        availability_zone: scalar(String) = "AvailabilityZone",
        /// Placement group name.
        group_name: scalar(String) = "GroupName",
        /// Tenancy.
        tenancy: scalar(String) = "Tenancy",
    }
}

shape! {
    /// An IAM instance profile reference.
    pub struct IamInstanceProfileSpecification {
        /// Profile ARN.
        arn: scalar(String) = "Arn",
        /// Profile name.
        name: scalar(String) = "Name",
    }
}

shape! {
    /// Launch parameters of the instances a Spot request starts.
    pub struct RequestSpotLaunchSpecification {
        /// Security group ids.
        security_group_ids: list(String) = "SecurityGroupId",
        /// Security group names.
        security_groups: list(String) = "SecurityGroup",
        /// Addressing type.
        addressing_type: scalar(String) = "AddressingType",
        /// Whether the instance is EBS-optimized.
        ebs_optimized: scalar(bool) = "EbsOptimized",
        /// IAM instance profile.
        iam_instance_profile: scalar(IamInstanceProfileSpecification) = "IamInstanceProfile",
        /// Image id.
        image_id: scalar(String) = "ImageId",
        /// Instance type.
        instance_type: scalar(String) = "InstanceType",
        /// Kernel id.
        kernel_id: scalar(String) = "KernelId",
        /// Key pair name.
        key_name: scalar(String) = "KeyName",
        /// Placement.
        placement: scalar(SpotPlacement) = "Placement",
        /// RAM disk id.
        ramdisk_id: scalar(String) = "RamdiskId",
        /// Subnet id.
        subnet_id: scalar(String) = "SubnetId",
        /// Base64-encoded user data.
        user_data: scalar(String) = "UserData",
    }
}

shape! {
    /// Launch parameters reported for an existing Spot request.
    pub struct LaunchSpecification {
        /// Image id.
        image_id: scalar(String) = "ImageId",
        /// Instance type.
        instance_type: scalar(String) = "InstanceType",
        /// Key pair name.
        key_name: scalar(String) = "KeyName",
        /// Subnet id.
        subnet_id: scalar(String) = "SubnetId",
        /// Placement.
        placement: scalar(SpotPlacement) = "Placement",
        /// Security groups.
        security_groups: list(GroupIdentifier) = "SecurityGroups",
    }
}

shape! {
    /// Fulfilment status of a Spot request.
    pub struct SpotInstanceStatus {
        /// Status code, for example `fulfilled` or `price-too-low`.
        code: scalar(String) = "Code",
        /// Status message.
        message: scalar(String) = "Message",
        /// When the status last changed.
        update_time: scalar(DateTime<Utc>) = "UpdateTime",
    }
}

shape! {
    /// Why a Spot request failed.
    pub struct SpotInstanceStateFault {
        /// Fault code.
        code: scalar(String) = "Code",
        /// Fault message.
        message: scalar(String) = "Message",
    }
}

shape! {
    /// A Spot Instance request as described by the service.
    pub struct SpotInstanceRequest {
        /// Request id.
        spot_instance_request_id: scalar(String) = "SpotInstanceRequestId",
        /// Maximum price per hour.
        spot_price: scalar(String) = "SpotPrice",
        /// One-time or persistent.
        request_type: enumeration(SpotInstanceType) = "Type",
        /// Request state.
        state: enumeration(SpotInstanceState) = "State",
        /// Fault, when failed.
        fault: scalar(SpotInstanceStateFault) = "Fault",
        /// Fulfilment status.
        status: scalar(SpotInstanceStatus) = "Status",
        /// Start of the validity period.
        valid_from: scalar(DateTime<Utc>) = "ValidFrom",
        /// End of the validity period.
        valid_until: scalar(DateTime<Utc>) = "ValidUntil",
        /// Launch group.
        launch_group: scalar(String) = "LaunchGroup",
        /// Availability Zone group.
        availability_zone_group: scalar(String) = "AvailabilityZoneGroup",
        /// Launch parameters.
        launch_specification: scalar(LaunchSpecification) = "LaunchSpecification",
        /// Instance that fulfilled the request.
        instance_id: scalar(String) = "InstanceId",
        /// When the request was created.
        create_time: scalar(DateTime<Utc>) = "CreateTime",
        /// Product description.
        product_description: scalar(String) = "ProductDescription",
        /// Spot block duration in minutes.
        block_duration_minutes: scalar(i32) = "BlockDurationMinutes",
        /// Fixed hourly price of a Spot block.
        actual_block_hourly_price: scalar(String) = "ActualBlockHourlyPrice",
        /// Tags.
        tags: list(Tag) = "Tags",
        /// Availability Zone the instance launched in.
        launched_availability_zone: scalar(String) = "LaunchedAvailabilityZone",
        /// Interruption behaviour.
        instance_interruption_behavior: enumeration(InstanceInterruptionBehavior) = "InstanceInterruptionBehavior",
    }
}

shape! {
    /// Requests Spot Instances.
    pub struct RequestSpotInstancesRequest: "RequestSpotInstances" -> RequestSpotInstancesResult {
        /// Availability Zone group.
        availability_zone_group: scalar(String) = "AvailabilityZoneGroup",
        /// Spot block duration in minutes.
        block_duration_minutes: scalar(i32) = "BlockDurationMinutes",
        /// Idempotency token.
        client_token: scalar(String) = "ClientToken",
        /// Checks permissions without requesting.
        dry_run: scalar(bool) = "DryRun",
        /// Number of instances.
        instance_count: scalar(i32) = "InstanceCount",
        /// Launch group.
        launch_group: scalar(String) = "LaunchGroup",
        /// Launch parameters.
        launch_specification: scalar(RequestSpotLaunchSpecification) = "LaunchSpecification",
        /// Maximum price per hour.
        spot_price: scalar(String) = "SpotPrice",
        /// One-time or persistent.
        request_type: enumeration(SpotInstanceType) = "Type",
        /// Start of the validity period.
        valid_from: scalar(DateTime<Utc>) = "ValidFrom",
        /// End of the validity period.
        valid_until: scalar(DateTime<Utc>) = "ValidUntil",
        /// Tags applied at creation.
        tag_specifications: list(TagSpecification) = "TagSpecification",
        /// Interruption behaviour.
        instance_interruption_behavior: enumeration(InstanceInterruptionBehavior) = "InstanceInterruptionBehavior",
    }
}

shape! {
    /// Reply to [`RequestSpotInstancesRequest`].
    pub struct RequestSpotInstancesResult {
        /// Created requests.
        spot_instance_requests: list(SpotInstanceRequest) = "SpotInstanceRequests",
    }
}

shape! {
    /// Describes Spot Instance requests.
    pub struct DescribeSpotInstanceRequestsRequest: "DescribeSpotInstanceRequests" -> DescribeSpotInstanceRequestsResult {
        /// Filters.
        filters: list(Filter) = "Filter",
        /// Checks permissions without describing.
        dry_run: scalar(bool) = "DryRun",
        /// Request ids.
        spot_instance_request_ids: list(String) = "SpotInstanceRequestId",
        /// Token from a previous page.
        next_token: scalar(String) = "NextToken",
        /// Page size, 5 to 1000.
        max_results: scalar(i32) = "MaxResults",
    }
}

shape! {
    /// Reply to [`DescribeSpotInstanceRequestsRequest`].
    pub struct DescribeSpotInstanceRequestsResult {
        /// Requests.
        spot_instance_requests: list(SpotInstanceRequest) = "SpotInstanceRequests",
        /// Token for the next page.
        next_token: scalar(String) = "NextToken",
    }
}

dry_run_supported!(RequestSpotInstancesRequest, DescribeSpotInstanceRequestsRequest);
