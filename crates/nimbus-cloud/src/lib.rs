//! Nimbus Cloud Abstraction
//!
//! This crate defines the vendor-neutral interfaces Nimbus uses to talk to
//! cloud providers: datacenter topology (regions and datacenters),
//! capability discovery (what a provider's firewalls and datacenters can
//! do), and the shared error taxonomy. Provider crates implement the
//! traits defined here.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 Nimbus callers                   │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │                nimbus-cloud                      │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │  trait DataCenterServices { ... }         │   │
//! │  │  trait NetworkServices { ... }            │   │
//! │  │  trait FirewallCapabilities { ... }       │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐                               │
//! │  │ ExpiringCache│  (scope-keyed, TTL-evicted)   │
//! │  └──────────────┘                               │
//! └───────┬─────────────────────────────────────────┘
//!         │
//! ┌───────▼───────┐
//! │   brightbox   │
//! │   provider    │
//! └───────────────┘
//! ```

pub mod cache;
pub mod dc;
pub mod error;
pub mod network;

// Re-exports
pub use cache::ExpiringCache;
pub use dc::{DataCenter, DataCenterCapabilities, DataCenterServices, ProviderContext, Region};
pub use error::{CloudError, Result};
pub use network::{
    Direction, FirewallCapabilities, NamingConstraints, NetworkServices, Permission, Protocol,
    Requirement, RuleTargetType,
};
