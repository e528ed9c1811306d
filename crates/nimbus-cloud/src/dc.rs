//! Datacenter topology model and provider trait
//!
//! Providers expose their geography as a two-level hierarchy: regions
//! (coarse, jurisdiction-bearing) containing datacenters (the unit a
//! resource is actually placed in). Both are derived from whatever the
//! vendor natively exposes and served from provider-side caches, so
//! repeated lookups are cheap.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Account scope a provider operates under
///
/// Carries the identifier used to namespace cached topology, so two
/// accounts sharing one process never see each other's listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderContext {
    /// Provider-side account identifier
    pub account_id: String,
}

impl ProviderContext {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }
}

/// A geographic region offered by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Provider-side region identifier
    pub id: String,

    /// Display name (often the same as the id)
    pub name: String,

    /// Two-letter jurisdiction code, e.g. "gb"
    pub jurisdiction: String,

    /// Whether the region currently accepts new resources
    pub available: bool,

    /// Whether the region is active at all
    pub active: bool,
}

/// A datacenter (availability zone) within a region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataCenter {
    /// Provider-side datacenter identifier
    pub id: String,

    /// Display name (for most providers, the vendor's zone handle)
    pub name: String,

    /// Identifier of the region this datacenter belongs to
    pub region_id: String,

    /// Whether the datacenter currently accepts new resources
    pub available: bool,

    /// Whether the datacenter is active at all
    pub active: bool,
}

/// Datacenter topology services
///
/// All providers implement this trait to expose their region/datacenter
/// hierarchy through a unified interface. Implementations are expected to
/// cache listings; callers may invoke these freely in hot paths.
#[async_trait]
pub trait DataCenterServices: Send + Sync {
    /// Static capability descriptors for this provider's topology
    fn capabilities(&self) -> &dyn DataCenterCapabilities;

    /// List all regions visible to the current account
    async fn list_regions(&self) -> Result<Vec<Region>>;

    /// List the datacenters belonging to `region_id`
    ///
    /// Fails with [`crate::CloudError::RegionNotFound`] when no such
    /// region exists.
    async fn list_data_centers(&self, region_id: &str) -> Result<Vec<DataCenter>>;

    /// Look up a single region by id; `None` when unknown
    async fn get_region(&self, region_id: &str) -> Result<Option<Region>>;

    /// Look up a single datacenter by id; `None` when unknown
    async fn get_data_center(&self, data_center_id: &str) -> Result<Option<DataCenter>>;
}

/// Static descriptors for a provider's datacenter topology
///
/// Pure metadata. Implementations answer from compiled-in constants and
/// never touch the network.
pub trait DataCenterCapabilities: Send + Sync {
    /// The vendor's own term for a datacenter, e.g. "availability zone"
    fn term_for_data_center(&self) -> &str;

    /// The vendor's own term for a region
    fn term_for_region(&self) -> &str;

    fn supports_affinity_groups(&self) -> bool;

    fn supports_resource_pools(&self) -> bool;

    fn supports_storage_pools(&self) -> bool;

    fn supports_folders(&self) -> bool;
}
