//! Query-protocol flattening of concrete requests.

use anyhow::Result;
use chrono::{TimeZone, Utc};
use compute_core::{Marshaller, QueryMarshaller, Request, ServiceConfig};
use compute_ec2::models::{
    ClientVpnAuthenticationRequest, ClientVpnAuthenticationType,
    CertificateAuthenticationRequest, CreateClientVpnEndpointRequest,
    CreateNetworkInterfaceRequest, DescribeNetworkInterfacesRequest, Filter,
    PrivateIpAddressSpecification, RequestSpotInstancesRequest, RequestSpotLaunchSpecification,
    ResourceType, SpotInstanceType, SpotPlacement, Tag, TagSpecification, TransportProtocol,
};

const ENDPOINT: &str = "https://ec2.us-east-1.amazonaws.com";

fn marshaller() -> Result<QueryMarshaller> {
    Ok(QueryMarshaller::new(ServiceConfig::new(ENDPOINT)?)?)
}

#[test]
fn test_filters_flatten_with_one_based_indices() -> Result<()> {
    let request = DescribeNetworkInterfacesRequest::default()
        .with_filters([
            Filter::new("vpc-id", ["vpc-1"]),
            Filter::new("status", ["available", "in-use"]),
        ])
        .with_max_results(50);

    let marshalled = marshaller()?.marshal(&request)?;

    assert_eq!(marshalled.action, "DescribeNetworkInterfaces");
    assert_eq!(marshalled.param("Action"), Some("DescribeNetworkInterfaces"));
    assert_eq!(marshalled.param("Version"), Some("2016-11-15"));
    assert_eq!(marshalled.param("Filter.1.Name"), Some("vpc-id"));
    assert_eq!(marshalled.param("Filter.1.Value.1"), Some("vpc-1"));
    assert_eq!(marshalled.param("Filter.2.Name"), Some("status"));
    assert_eq!(marshalled.param("Filter.2.Value.2"), Some("in-use"));
    assert_eq!(marshalled.param("MaxResults"), Some("50"));
    assert_eq!(marshalled.endpoint.as_str(), "https://ec2.us-east-1.amazonaws.com/");
    Ok(())
}

#[test]
fn test_client_vpn_request_parameters() -> Result<()> {
    let request = CreateClientVpnEndpointRequest::default()
        .with_client_cidr_block("10.0.0.0/22")
        .with_server_certificate_arn("arn:server")
        .with_authentication_options([ClientVpnAuthenticationRequest::default()
            .with_authentication_type(ClientVpnAuthenticationType::CertificateAuthentication)
            .with_mutual_authentication(
                CertificateAuthenticationRequest::default()
                    .with_client_root_certificate_chain_arn("arn:ca"),
            )])
        .with_transport_protocol(TransportProtocol::Udp)
        .with_dns_servers(["8.8.8.8", "8.8.4.4"])
        .with_tag_specifications([TagSpecification::default()
            .with_resource_type(ResourceType::ClientVpnEndpoint)
            .with_tags([Tag::new("team", "platform")])]);

    let marshalled = marshaller()?.marshal(&request)?;
    let names: Vec<&str> = marshalled
        .params
        .pairs()
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();

    assert_eq!(
        names,
        [
            "Action",
            "Version",
            "ClientCidrBlock",
            "ServerCertificateArn",
            "Authentication.1.Type",
            "Authentication.1.MutualAuthentication.ClientRootCertificateChainArn",
            "DnsServers.1",
            "DnsServers.2",
            "TransportProtocol",
            "TagSpecification.1.ResourceType",
            "TagSpecification.1.Tag.1.Key",
            "TagSpecification.1.Tag.1.Value",
        ]
    );
    assert_eq!(
        marshalled.param("Authentication.1.Type"),
        Some("certificate-authentication")
    );
    assert_eq!(
        marshalled.param("TagSpecification.1.ResourceType"),
        Some("client-vpn-endpoint")
    );
    assert!(marshalled.param("DryRun").is_none());
    Ok(())
}

#[test]
fn test_dry_run_marshals_flag() -> Result<()> {
    let request = CreateNetworkInterfaceRequest::default().with_subnet_id("subnet-1");

    let marshalled = marshaller()?.marshal_dry_run(&request)?;

    assert_eq!(marshalled.param("DryRun"), Some("true"));
    assert_eq!(marshalled.param("SubnetId"), Some("subnet-1"));
    assert!(request.dry_run().is_none(), "the caller's request is unchanged");
    Ok(())
}

#[test]
fn test_nested_lists_and_timestamps() -> Result<()> {
    let valid_until = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap();
    let request = RequestSpotInstancesRequest::default()
        .with_instance_count(1)
        .with_request_type(SpotInstanceType::Persistent)
        .with_valid_until(valid_until)
        .with_launch_specification(
            RequestSpotLaunchSpecification::default()
                .with_image_id("ami-1")
                .with_security_group_ids(["sg-1", "sg-2"])
                .with_placement(SpotPlacement::default().with_availability_zone("us-east-1a")),
        );

    let marshalled = marshaller()?.marshal(&request)?;

    assert_eq!(marshalled.param("Type"), Some("persistent"));
    assert_eq!(marshalled.param("ValidUntil"), Some("2030-01-02T03:04:05.000Z"));
    assert_eq!(marshalled.param("LaunchSpecification.ImageId"), Some("ami-1"));
    assert_eq!(
        marshalled.param("LaunchSpecification.SecurityGroupId.2"),
        Some("sg-2")
    );
    assert_eq!(
        marshalled.param("LaunchSpecification.Placement.AvailabilityZone"),
        Some("us-east-1a")
    );
    Ok(())
}

#[test]
fn test_empty_list_follows_config() -> Result<()> {
    let request = CreateNetworkInterfaceRequest::default()
        .with_subnet_id("subnet-1")
        .with_private_ip_addresses(Vec::<PrivateIpAddressSpecification>::new());

    let with_empty = marshaller()?.marshal(&request)?;
    assert_eq!(with_empty.param("PrivateIpAddresses"), Some(""));

    let config = ServiceConfig::new(ENDPOINT)?.with_serialize_empty_lists(false);
    let without_empty = QueryMarshaller::new(config)?.marshal(&request)?;
    assert!(without_empty.param("PrivateIpAddresses").is_none());
    Ok(())
}

#[test]
fn test_metadata_travels_with_request() -> Result<()> {
    let mut request = DescribeNetworkInterfacesRequest::default().with_network_interface_ids(["eni-1"]);
    request
        .metadata_mut()
        .add_custom_query_parameter("Trace", "abc");
    request.metadata_mut().put_custom_header("X-Trace", "abc");

    let marshalled = marshaller()?.marshal(&request)?;

    assert_eq!(marshalled.params.pairs().last().map(|(n, _)| n.as_str()), Some("Trace"));
    assert_eq!(marshalled.headers.get("X-Trace").map(String::as_str), Some("abc"));
    assert_eq!(marshalled.request_id, request.metadata().request_id());
    assert!(marshalled
        .form_body()
        .starts_with("Action=DescribeNetworkInterfaces&Version=2016-11-15&NetworkInterfaceId.1=eni-1"));
    Ok(())
}
