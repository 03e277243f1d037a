//! Request and response shapes, grouped by resource.
//!
//! Request shapes use the Query parameter names of the service as wire names.
//! Response shapes use the service's member names, which are also the keys of
//! the JSON payloads handed to the unmarshaller.

pub mod capacity;
pub mod client_vpn;
pub mod common;
pub mod host;
pub mod network_interface;
pub mod spot;

pub use capacity::{
    CapacityReservation, CapacityReservationInstancePlatform, CapacityReservationState,
    CapacityReservationTenancy, CreateCapacityReservationRequest,
    CreateCapacityReservationResult, DescribeCapacityReservationsRequest,
    DescribeCapacityReservationsResult, EndDateType, InstanceMatchCriteria,
};
pub use client_vpn::{
    CertificateAuthentication, CertificateAuthenticationRequest, ClientVpnAuthentication,
    ClientVpnAuthenticationRequest, ClientVpnAuthenticationType, ClientVpnEndpoint,
    ClientVpnEndpointStatus, ClientVpnEndpointStatusCode, ConnectionLogOptions,
    CreateClientVpnEndpointRequest, CreateClientVpnEndpointResult,
    DeleteClientVpnEndpointRequest, DeleteClientVpnEndpointResult,
    DescribeClientVpnEndpointsRequest, DescribeClientVpnEndpointsResult,
    DirectoryServiceAuthentication, DirectoryServiceAuthenticationRequest,
    FederatedAuthenticationRequest, TransportProtocol,
};
pub use common::{Filter, ResourceType, Tag, TagSpecification};
pub use host::{
    AllocateHostsRequest, AllocateHostsResult, AllocationState, AutoPlacement,
    DescribeHostsRequest, DescribeHostsResult, Host, HostInstance, HostProperties, HostRecovery,
    ReleaseHostsRequest, ReleaseHostsResult, UnsuccessfulItem, UnsuccessfulItemError,
};
pub use network_interface::{
    AttachmentStatus, CreateNetworkInterfaceRequest, CreateNetworkInterfaceResult,
    DescribeNetworkInterfacesRequest, DescribeNetworkInterfacesResult, GroupIdentifier,
    InstanceIpv6Address, NetworkInterface, NetworkInterfaceAttachment,
    NetworkInterfaceIpv6Address, NetworkInterfacePrivateIpAddress, NetworkInterfaceStatus,
    NetworkInterfaceType, PrivateIpAddressSpecification,
};
pub use spot::{
    DescribeSpotInstanceRequestsRequest, DescribeSpotInstanceRequestsResult,
    IamInstanceProfileSpecification, InstanceInterruptionBehavior, LaunchSpecification,
    RequestSpotInstancesRequest, RequestSpotInstancesResult, RequestSpotLaunchSpecification,
    SpotInstanceRequest, SpotInstanceState, SpotInstanceStateFault, SpotInstanceStatus,
    SpotInstanceType, SpotPlacement,
};
