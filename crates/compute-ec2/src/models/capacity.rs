//! On-Demand Capacity Reservations.

use chrono::{DateTime, Utc};
use compute_core::{dry_run_supported, shape, wire_enum};

use super::common::{Filter, Tag, TagSpecification};

wire_enum! {
    /// Operating system of the reserved instances.
    pub enum CapacityReservationInstancePlatform {
        /// Linux/UNIX
        LinuxUnix => "Linux/UNIX",
        /// Red Hat Enterprise Linux
        RedHatEnterpriseLinux => "Red Hat Enterprise Linux",
        /// SUSE Linux
        SuseLinux => "SUSE Linux",
        /// Windows
        Windows => "Windows",
        /// Windows with SQL Server
        WindowsWithSqlServer => "Windows with SQL Server",
        /// Windows with SQL Server Enterprise
        WindowsWithSqlServerEnterprise => "Windows with SQL Server Enterprise",
        /// Windows with SQL Server Standard
        WindowsWithSqlServerStandard => "Windows with SQL Server Standard",
        /// Windows with SQL Server Web
        WindowsWithSqlServerWeb => "Windows with SQL Server Web",
        /// Linux with SQL Server Standard
        LinuxWithSqlServerStandard => "Linux with SQL Server Standard",
        /// Linux with SQL Server Web
        LinuxWithSqlServerWeb => "Linux with SQL Server Web",
        /// Linux with SQL Server Enterprise
        LinuxWithSqlServerEnterprise => "Linux with SQL Server Enterprise",
    }
}

wire_enum! {
    /// Tenancy of a Capacity Reservation.
    pub enum CapacityReservationTenancy {
        /// Shared hardware
        Default => "default",
        /// Single-tenant hardware
        Dedicated => "dedicated",
    }
}

wire_enum! {
    /// How a Capacity Reservation ends.
    pub enum EndDateType {
        /// Active until cancelled
        Unlimited => "unlimited",
        /// Expires at the end date
        Limited => "limited",
    }
}

wire_enum! {
    /// Which instances may use a Capacity Reservation.
    pub enum InstanceMatchCriteria {
        /// Any matching instance
        Open => "open",
        /// Only instances that target the reservation
        Targeted => "targeted",
    }
}

wire_enum! {
    /// State of a Capacity Reservation.
    pub enum CapacityReservationState {
        /// Capacity available
        Active => "active",
        /// Past its end date
        Expired => "expired",
        /// Cancelled
        Cancelled => "cancelled",
        /// Being provisioned
        Pending => "pending",
        /// Could not be provisioned
        Failed => "failed",
    }
}

shape! {
    /// Creates a Capacity Reservation.
    pub struct CreateCapacityReservationRequest: "CreateCapacityReservation" -> CreateCapacityReservationResult {
        /// Idempotency token.
        client_token: scalar(String) = "ClientToken",
        /// Instance type.
        instance_type: scalar(String) = "InstanceType",
        /// Operating system.
        instance_platform: enumeration(CapacityReservationInstancePlatform) = "InstancePlatform",
        /// Availability Zone.
        availability_zone: scalar(String) = "AvailabilityZone",
        /// Availability Zone id.
        availability_zone_id: scalar(String) = "AvailabilityZoneId",
        /// Tenancy.
        tenancy: enumeration(CapacityReservationTenancy) = "Tenancy",
        /// Number of instances.
        instance_count: scalar(i32) = "InstanceCount",
        /// Whether the capacity is EBS-optimized.
        ebs_optimized: scalar(bool) = "EbsOptimized",
        /// Whether the instances use ephemeral storage.
        ephemeral_storage: scalar(bool) = "EphemeralStorage",
        /// When the reservation ends, with `EndDateType` `limited`.
        end_date: scalar(DateTime<Utc>) = "EndDate",
        /// How the reservation ends.
        end_date_type: enumeration(EndDateType) = "EndDateType",
        /// Which instances may use the reservation.
        instance_match_criteria: enumeration(InstanceMatchCriteria) = "InstanceMatchCriteria",
        /// Tags applied at creation.
        tag_specifications: list(TagSpecification) = "TagSpecifications",
        /// Checks permissions without creating the reservation.
        dry_run: scalar(bool) = "DryRun",
    }
}

shape! {
    /// A Capacity Reservation as described by the service.
    pub struct CapacityReservation {
        /// Reservation id.
        capacity_reservation_id: scalar(String) = "CapacityReservationId",
        /// Owning account.
        owner_id: scalar(String) = "OwnerId",
        /// Reservation ARN.
        capacity_reservation_arn: scalar(String) = "CapacityReservationArn",
        /// Availability Zone id.
        availability_zone_id: scalar(String) = "AvailabilityZoneId",
        /// Instance type.
        instance_type: scalar(String) = "InstanceType",
        /// Operating system.
        instance_platform: enumeration(CapacityReservationInstancePlatform) = "InstancePlatform",
        /// Availability Zone.
        availability_zone: scalar(String) = "AvailabilityZone",
        /// Tenancy.
        tenancy: enumeration(CapacityReservationTenancy) = "Tenancy",
        /// Reserved instance count.
        total_instance_count: scalar(i32) = "TotalInstanceCount",
        /// Unused instance count.
        available_instance_count: scalar(i32) = "AvailableInstanceCount",
        /// Whether the capacity is EBS-optimized.
        ebs_optimized: scalar(bool) = "EbsOptimized",
        /// Whether the instances use ephemeral storage.
        ephemeral_storage: scalar(bool) = "EphemeralStorage",
        /// State.
        state: enumeration(CapacityReservationState) = "State",
        /// When the reservation ends.
        end_date: scalar(DateTime<Utc>) = "EndDate",
        /// How the reservation ends.
        end_date_type: enumeration(EndDateType) = "EndDateType",
        /// Which instances may use the reservation.
        instance_match_criteria: enumeration(InstanceMatchCriteria) = "InstanceMatchCriteria",
        /// When the reservation was created.
        create_date: scalar(DateTime<Utc>) = "CreateDate",
        /// Tags.
        tags: list(Tag) = "Tags",
    }
}

shape! {
    /// Reply to [`CreateCapacityReservationRequest`].
    pub struct CreateCapacityReservationResult {
        /// The new reservation.
        capacity_reservation: scalar(CapacityReservation) = "CapacityReservation",
    }
}

shape! {
    /// Describes Capacity Reservations.
    pub struct DescribeCapacityReservationsRequest: "DescribeCapacityReservations" -> DescribeCapacityReservationsResult {
        /// Reservation ids.
        capacity_reservation_ids: list(String) = "CapacityReservationId",
        /// Token from a previous page.
        next_token: scalar(String) = "NextToken",
        /// Page size, 1 to 1000.
        max_results: scalar(i32) = "MaxResults",
        /// Filters.
        filters: list(Filter) = "Filter",
        /// Checks permissions without describing.
        dry_run: scalar(bool) = "DryRun",
    }
}

shape! {
    /// Reply to [`DescribeCapacityReservationsRequest`].
    pub struct DescribeCapacityReservationsResult {
        /// Reservations.
        capacity_reservations: list(CapacityReservation) = "CapacityReservations",
        /// Token for the next page.
        next_token: scalar(String) = "NextToken",
    }
}

dry_run_supported!(CreateCapacityReservationRequest, DescribeCapacityReservationsRequest);
