//! Typed shapes and an asynchronous client for the compute provisioning API.
//!
//! Every request and response of the supported operations is a
//! [`compute_core::Shape`]: a bag of optional fields with fluent builders,
//! structural equality and `{Name: value}` rendering. [`Ec2Client`] marshals
//! requests, hands them to a caller-supplied [`compute_core::Transport`] and
//! unmarshals the replies.
//!
//! ```
//! use compute_ec2::models::{CreateClientVpnEndpointRequest, TransportProtocol};
//!
//! let request = CreateClientVpnEndpointRequest::default()
//!     .with_client_cidr_block("10.0.0.0/22")
//!     .with_transport_protocol(TransportProtocol::Udp)
//!     .with_dns_servers(["8.8.8.8"]);
//!
//! assert_eq!(
//!     request.to_string(),
//!     "{ClientCidrBlock: 10.0.0.0/22,DnsServers: [8.8.8.8],TransportProtocol: udp}"
//! );
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod models;

pub use client::{Ec2Client, Ec2ClientBuilder};

/// Convenient result alias that reuses the shared compute error type.
pub type Result<T> = compute_core::Result<T>;
