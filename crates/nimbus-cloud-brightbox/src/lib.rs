//! Brightbox provider for Nimbus
//!
//! This crate maps Brightbox's REST API onto the nimbus-cloud abstraction:
//! datacenter topology derived from the vendor's flat zone listing, plus
//! static capability tables for topology and firewall-policy discovery.
//!
//! # Features
//!
//! - Region/datacenter topology, derived from `GET /1.0/zones` and cached
//!   per account (10 hours for regions, 1 day for datacenters)
//! - Datacenter and firewall-policy capability discovery
//!
//! # Requirements
//!
//! - A Brightbox OAuth access token (`BRIGHTBOX_ACCESS_TOKEN`) and account
//!   id (`BRIGHTBOX_ACCOUNT_ID`)
//!
//! # Example
//!
//! ```ignore
//! use nimbus_cloud::DataCenterServices;
//! use nimbus_cloud_brightbox::{ApiConfig, BrightboxApiClient, BrightboxTopology};
//!
//! let config = ApiConfig::from_env()?;
//! let context = config.provider_context();
//! let topology = BrightboxTopology::new(BrightboxApiClient::new(config), Some(context));
//!
//! for region in topology.list_regions().await? {
//!     println!("{} ({})", region.id, region.jurisdiction);
//! }
//! ```

pub mod api;
pub mod capabilities;
pub mod error;
pub mod network;
pub mod topology;

pub use api::{ApiConfig, BrightboxApiClient, Zone, ZoneApi};
pub use capabilities::{BrightboxDataCenterCapabilities, BrightboxFirewallCapabilities};
pub use error::{BrightboxError, Result};
pub use network::BrightboxNetworkServices;
pub use topology::BrightboxTopology;
