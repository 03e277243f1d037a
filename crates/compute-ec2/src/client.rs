//! Asynchronous compute client.

use compute_core::{DryRunOutcome, DryRunSupported, Invoker, Request, ServiceConfig, Transport};
use tracing::debug;

use crate::models::{
    AllocateHostsRequest, AllocateHostsResult, CreateCapacityReservationRequest,
    CreateCapacityReservationResult, CreateClientVpnEndpointRequest,
    CreateClientVpnEndpointResult, CreateNetworkInterfaceRequest, CreateNetworkInterfaceResult,
    DeleteClientVpnEndpointRequest, DeleteClientVpnEndpointResult,
    DescribeCapacityReservationsRequest, DescribeCapacityReservationsResult,
    DescribeClientVpnEndpointsRequest, DescribeClientVpnEndpointsResult, DescribeHostsRequest,
    DescribeHostsResult, DescribeNetworkInterfacesRequest, DescribeNetworkInterfacesResult,
    DescribeSpotInstanceRequestsRequest, DescribeSpotInstanceRequestsResult,
    ReleaseHostsRequest, ReleaseHostsResult, RequestSpotInstancesRequest,
    RequestSpotInstancesResult,
};
use crate::Result;

/// Builder for [`Ec2Client`].
#[derive(Debug, Clone)]
pub struct Ec2ClientBuilder {
    config: ServiceConfig,
}

impl Ec2ClientBuilder {
    /// Create a builder for the specified endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Ok(Self {
            config: ServiceConfig::new(endpoint)?,
        })
    }

    /// Start from an existing service configuration.
    #[must_use]
    pub const fn from_config(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Override the API version.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.config = self.config.with_api_version(version);
        self
    }

    /// Set the region name.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.config = self.config.with_region(region);
        self
    }

    /// Set whether empty sequences are serialized.
    #[must_use]
    pub fn with_serialize_empty_lists(mut self, enabled: bool) -> Self {
        self.config = self.config.with_serialize_empty_lists(enabled);
        self
    }

    /// Enable or disable parameter logging.
    #[must_use]
    pub fn with_log_params(mut self, enabled: bool) -> Self {
        self.config = self.config.with_log_params(enabled);
        self
    }

    /// Build the client around a transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured endpoint cannot be parsed.
    pub fn build<T: Transport>(self, transport: T) -> Result<Ec2Client<T>> {
        debug!(
            endpoint = %self.config.endpoint,
            region = ?self.config.region,
            api_version = %self.config.api_version,
            "building compute client"
        );
        Ok(Ec2Client {
            invoker: Invoker::new(self.config, transport)?,
        })
    }
}

/// Asynchronous compute client.
#[derive(Debug)]
pub struct Ec2Client<T> {
    invoker: Invoker<T>,
}

impl<T: Transport> Ec2Client<T> {
    /// Construct a client directly from an endpoint and a transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL.
    pub fn new(endpoint: impl Into<String>, transport: T) -> Result<Self> {
        Ec2ClientBuilder::new(endpoint)?.build(transport)
    }

    /// Return the service configuration.
    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        self.invoker.config()
    }

    /// Send any request shape and return its response shape.
    ///
    /// # Errors
    ///
    /// Propagates marshalling, transport, service and unmarshalling errors.
    pub async fn send<R: Request>(&self, request: &R) -> Result<R::Response> {
        self.invoker.invoke(request).await
    }

    /// Check whether a request would be permitted without performing it.
    ///
    /// # Errors
    ///
    /// Returns service errors other than the dry-run and authorization replies.
    pub async fn dry_run<R: DryRunSupported>(&self, request: &R) -> Result<DryRunOutcome> {
        self.invoker.dry_run(request).await
    }

    /// Create a Client VPN endpoint.
    pub async fn create_client_vpn_endpoint(
        &self,
        request: &CreateClientVpnEndpointRequest,
    ) -> Result<CreateClientVpnEndpointResult> {
        self.send(request).await
    }

    /// Describe Client VPN endpoints.
    pub async fn describe_client_vpn_endpoints(
        &self,
        request: &DescribeClientVpnEndpointsRequest,
    ) -> Result<DescribeClientVpnEndpointsResult> {
        self.send(request).await
    }

    /// Delete a Client VPN endpoint.
    pub async fn delete_client_vpn_endpoint(
        &self,
        request: &DeleteClientVpnEndpointRequest,
    ) -> Result<DeleteClientVpnEndpointResult> {
        self.send(request).await
    }

    /// Describe network interfaces.
    pub async fn describe_network_interfaces(
        &self,
        request: &DescribeNetworkInterfacesRequest,
    ) -> Result<DescribeNetworkInterfacesResult> {
        self.send(request).await
    }

    /// Create a network interface.
    pub async fn create_network_interface(
        &self,
        request: &CreateNetworkInterfaceRequest,
    ) -> Result<CreateNetworkInterfaceResult> {
        self.send(request).await
    }

    /// Request Spot Instances.
    pub async fn request_spot_instances(
        &self,
        request: &RequestSpotInstancesRequest,
    ) -> Result<RequestSpotInstancesResult> {
        self.send(request).await
    }

    /// Describe Spot Instance requests.
    pub async fn describe_spot_instance_requests(
        &self,
        request: &DescribeSpotInstanceRequestsRequest,
    ) -> Result<DescribeSpotInstanceRequestsResult> {
        self.send(request).await
    }

    /// Allocate Dedicated Hosts.
    pub async fn allocate_hosts(&self, request: &AllocateHostsRequest) -> Result<AllocateHostsResult> {
        self.send(request).await
    }

    /// Release Dedicated Hosts.
    pub async fn release_hosts(&self, request: &ReleaseHostsRequest) -> Result<ReleaseHostsResult> {
        self.send(request).await
    }

    /// Describe Dedicated Hosts.
    pub async fn describe_hosts(&self, request: &DescribeHostsRequest) -> Result<DescribeHostsResult> {
        self.send(request).await
    }

    /// Create a Capacity Reservation.
    pub async fn create_capacity_reservation(
        &self,
        request: &CreateCapacityReservationRequest,
    ) -> Result<CreateCapacityReservationResult> {
        self.send(request).await
    }

    /// Describe Capacity Reservations.
    pub async fn describe_capacity_reservations(
        &self,
        request: &DescribeCapacityReservationsRequest,
    ) -> Result<DescribeCapacityReservationsResult> {
        self.send(request).await
    }
}
