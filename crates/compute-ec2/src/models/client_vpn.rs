//! Client VPN endpoints.

use compute_core::{dry_run_supported, shape, wire_enum};

use super::common::{Filter, Tag, TagSpecification};

wire_enum! {
    /// Transport protocol used by a VPN session.
    pub enum TransportProtocol {
        /// TCP
        Tcp => "tcp",
        /// UDP
        Udp => "udp",
    }
}

wire_enum! {
    /// How clients authenticate to a Client VPN endpoint.
    pub enum ClientVpnAuthenticationType {
        /// Mutual certificate authentication
        CertificateAuthentication => "certificate-authentication",
        /// Active Directory authentication
        DirectoryServiceAuthentication => "directory-service-authentication",
        /// SAML federated authentication
        FederatedAuthentication => "federated-authentication",
    }
}

wire_enum! {
    /// Lifecycle state of a Client VPN endpoint.
    pub enum ClientVpnEndpointStatusCode {
        /// Waiting for a target network association
        PendingAssociate => "pending-associate",
        /// Ready for connections
        Available => "available",
        /// Being deleted
        Deleting => "deleting",
        /// Deleted
        Deleted => "deleted",
    }
}

shape! {
    /// Mutual certificate authentication settings.
    pub struct CertificateAuthenticationRequest {
        /// ARN of the client root certificate chain.
        client_root_certificate_chain_arn: scalar(String) = "ClientRootCertificateChainArn",
    }
}

shape! {
    /// Active Directory authentication settings.
    pub struct DirectoryServiceAuthenticationRequest {
        /// Directory id.
        directory_id: scalar(String) = "DirectoryId",
    }
}

shape! {
    /// SAML federated authentication settings.
    pub struct FederatedAuthenticationRequest {
        /// ARN of the IAM SAML identity provider.
        saml_provider_arn: scalar(String) = "SAMLProviderArn",
    }
}

shape! {
    /// One authentication method requested for a new endpoint.
    ///
    /// Only the settings matching `Type` are read by the service.
    pub struct ClientVpnAuthenticationRequest {
        /// Authentication type.
        authentication_type: enumeration(ClientVpnAuthenticationType) = "Type",
        /// Active Directory settings.
        active_directory: scalar(DirectoryServiceAuthenticationRequest) = "ActiveDirectory",
        /// Certificate settings.
        mutual_authentication: scalar(CertificateAuthenticationRequest) = "MutualAuthentication",
        /// Federated settings.
        federated_authentication: scalar(FederatedAuthenticationRequest) = "FederatedAuthentication",
    }
}

shape! {
    /// Active Directory authentication in effect.
    pub struct DirectoryServiceAuthentication {
        /// Directory id.
        directory_id: scalar(String) = "DirectoryId",
    }
}

shape! {
    /// Certificate authentication in effect.
    pub struct CertificateAuthentication {
        /// ARN of the client root certificate chain.
        client_root_certificate_chain: scalar(String) = "ClientRootCertificateChain",
    }
}

shape! {
    /// One authentication method configured on an endpoint.
    pub struct ClientVpnAuthentication {
        /// Authentication type.
        authentication_type: enumeration(ClientVpnAuthenticationType) = "Type",
        /// Active Directory details.
        active_directory: scalar(DirectoryServiceAuthentication) = "ActiveDirectory",
        /// Certificate details.
        mutual_authentication: scalar(CertificateAuthentication) = "MutualAuthentication",
    }
}

shape! {
    /// Client connection logging.
    pub struct ConnectionLogOptions {
        /// Whether connection logging is enabled.
        enabled: scalar(bool) = "Enabled",
        /// CloudWatch Logs log group.
        cloudwatch_log_group: scalar(String) = "CloudwatchLogGroup",
        /// CloudWatch Logs log stream.
        cloudwatch_log_stream: scalar(String) = "CloudwatchLogStream",
    }
}

shape! {
    /// State of an endpoint with an optional explanation.
    pub struct ClientVpnEndpointStatus {
        /// State code.
        code: enumeration(ClientVpnEndpointStatusCode) = "Code",
        /// Status message.
        message: scalar(String) = "Message",
    }
}

shape! {
    /// A Client VPN endpoint as described by the service.
    pub struct ClientVpnEndpoint {
        /// Endpoint id.
        client_vpn_endpoint_id: scalar(String) = "ClientVpnEndpointId",
        /// Description.
        description: scalar(String) = "Description",
        /// Current state.
        status: scalar(ClientVpnEndpointStatus) = "Status",
        /// Creation time as reported by the service.
        creation_time: scalar(String) = "CreationTime",
        /// Deletion time as reported by the service.
        deletion_time: scalar(String) = "DeletionTime",
        /// DNS name clients connect to.
        dns_name: scalar(String) = "DnsName",
        /// Client address range.
        client_cidr_block: scalar(String) = "ClientCidrBlock",
        /// DNS servers pushed to clients.
        dns_servers: list(String) = "DnsServers",
        /// Whether split tunnel is enabled.
        split_tunnel: scalar(bool) = "SplitTunnel",
        /// VPN protocol.
        vpn_protocol: scalar(String) = "VpnProtocol",
        /// Transport protocol.
        transport_protocol: enumeration(TransportProtocol) = "TransportProtocol",
        /// Port clients connect to.
        vpn_port: scalar(i32) = "VpnPort",
        /// Server certificate ARN.
        server_certificate_arn: scalar(String) = "ServerCertificateArn",
        /// Authentication methods.
        authentication_options: list(ClientVpnAuthentication) = "AuthenticationOptions",
        /// Connection logging.
        connection_log_options: scalar(ConnectionLogOptions) = "ConnectionLogOptions",
        /// Tags.
        tags: list(Tag) = "Tags",
        /// Security groups applied to the target network association.
        security_group_ids: list(String) = "SecurityGroupIds",
        /// VPC of the target network.
        vpc_id: scalar(String) = "VpcId",
    }
}

shape! {
    /// Creates a Client VPN endpoint.
    pub struct CreateClientVpnEndpointRequest: "CreateClientVpnEndpoint" -> CreateClientVpnEndpointResult {
        /// IPv4 range assigned to clients, at least /22.
        client_cidr_block: scalar(String) = "ClientCidrBlock",
        /// Server certificate ARN.
        server_certificate_arn: scalar(String) = "ServerCertificateArn",
        /// Authentication methods, at most two.
        authentication_options: list(ClientVpnAuthenticationRequest) = "Authentication",
        /// Connection logging.
        connection_log_options: scalar(ConnectionLogOptions) = "ConnectionLogOptions",
        /// DNS servers pushed to clients, at most two.
        dns_servers: list(String) = "DnsServers",
        /// Transport protocol, `udp` when unset.
        transport_protocol: enumeration(TransportProtocol) = "TransportProtocol",
        /// Port, 443 or 1194.
        vpn_port: scalar(i32) = "VpnPort",
        /// Description.
        description: scalar(String) = "Description",
        /// Whether split tunnel is enabled.
        split_tunnel: scalar(bool) = "SplitTunnel",
        /// Checks permissions without creating the endpoint.
        dry_run: scalar(bool) = "DryRun",
        /// Idempotency token.
        client_token: scalar(String) = "ClientToken",
        /// Tags applied at creation.
        tag_specifications: list(TagSpecification) = "TagSpecification",
        /// Security groups for the target network association.
        security_group_ids: list(String) = "SecurityGroupId",
        /// VPC of the target network.
        vpc_id: scalar(String) = "VpcId",
    }
}

shape! {
    /// Reply to [`CreateClientVpnEndpointRequest`].
    pub struct CreateClientVpnEndpointResult {
        /// New endpoint id.
        client_vpn_endpoint_id: scalar(String) = "ClientVpnEndpointId",
        /// Initial state.
        status: scalar(ClientVpnEndpointStatus) = "Status",
        /// DNS name clients connect to.
        dns_name: scalar(String) = "DnsName",
    }
}

shape! {
    /// Describes Client VPN endpoints.
    pub struct DescribeClientVpnEndpointsRequest: "DescribeClientVpnEndpoints" -> DescribeClientVpnEndpointsResult {
        /// Endpoint ids.
        client_vpn_endpoint_ids: list(String) = "ClientVpnEndpointId",
        /// Page size.
        max_results: scalar(i32) = "MaxResults",
        /// Token from a previous page.
        next_token: scalar(String) = "NextToken",
        /// Filters.
        filters: list(Filter) = "Filter",
        /// Checks permissions without describing.
        dry_run: scalar(bool) = "DryRun",
    }
}

shape! {
    /// Reply to [`DescribeClientVpnEndpointsRequest`].
    pub struct DescribeClientVpnEndpointsResult {
        /// Endpoints.
        client_vpn_endpoints: list(ClientVpnEndpoint) = "ClientVpnEndpoints",
        /// Token for the next page.
        next_token: scalar(String) = "NextToken",
    }
}

shape! {
    /// Deletes a Client VPN endpoint.
    pub struct DeleteClientVpnEndpointRequest: "DeleteClientVpnEndpoint" -> DeleteClientVpnEndpointResult {
        /// Endpoint id.
        client_vpn_endpoint_id: scalar(String) = "ClientVpnEndpointId",
        /// Checks permissions without deleting.
        dry_run: scalar(bool) = "DryRun",
    }
}

shape! {
    /// Reply to [`DeleteClientVpnEndpointRequest`].
    pub struct DeleteClientVpnEndpointResult {
        /// State after the delete was accepted.
        status: scalar(ClientVpnEndpointStatus) = "Status",
    }
}

dry_run_supported!(
    CreateClientVpnEndpointRequest,
    DescribeClientVpnEndpointsRequest,
    DeleteClientVpnEndpointRequest,
);

#[cfg(test)]
mod tests {
    use super::*;
    use compute_core::{DryRunSupported, Request};

    fn certificate_auth() -> ClientVpnAuthenticationRequest {
        ClientVpnAuthenticationRequest::default()
            .with_authentication_type(ClientVpnAuthenticationType::CertificateAuthentication)
            .with_mutual_authentication(
                CertificateAuthenticationRequest::default()
                    .with_client_root_certificate_chain_arn("arn:aws:acm:us-east-1:1:certificate/ca"),
            )
    }

    #[test]
    fn test_create_request_rendering() {
        let request = CreateClientVpnEndpointRequest::default()
            .with_client_cidr_block("10.0.0.0/22")
            .with_transport_protocol(TransportProtocol::Udp)
            .with_dns_servers(["8.8.8.8"])
            .with_authentication_options([certificate_auth()]);

        assert_eq!(
            request.to_string(),
            "{ClientCidrBlock: 10.0.0.0/22,\
             Authentication: [{Type: certificate-authentication,\
             MutualAuthentication: {ClientRootCertificateChainArn: arn:aws:acm:us-east-1:1:certificate/ca}}],\
             DnsServers: [8.8.8.8],TransportProtocol: udp}"
        );
    }

    #[test]
    fn test_transport_protocol_parsing() {
        let request = CreateClientVpnEndpointRequest::default().with_transport_protocol("tcp");
        assert_eq!(
            request.parsed_transport_protocol().unwrap(),
            Some(TransportProtocol::Tcp)
        );
        assert_eq!(TransportProtocol::all(), &[TransportProtocol::Tcp, TransportProtocol::Udp]);
    }

    #[test]
    fn test_dry_run_variant() {
        let request = DeleteClientVpnEndpointRequest::default()
            .with_client_vpn_endpoint_id("cvpn-endpoint-1");
        let dry = request.to_dry_run();
        assert_eq!(dry.dry_run(), Some(&true));
        assert_ne!(dry, request);
    }

    #[test]
    fn test_actions() {
        assert_eq!(CreateClientVpnEndpointRequest::ACTION, "CreateClientVpnEndpoint");
        assert_eq!(DescribeClientVpnEndpointsRequest::ACTION, "DescribeClientVpnEndpoints");
        assert_eq!(DeleteClientVpnEndpointRequest::ACTION, "DeleteClientVpnEndpoint");
    }

    #[test]
    fn test_status_code_parsing() {
        let status = ClientVpnEndpointStatus::default().with_code("pending-associate");
        assert_eq!(
            status.parsed_code().unwrap(),
            Some(ClientVpnEndpointStatusCode::PendingAssociate)
        );
    }
}
