//! Region/datacenter topology derived from Brightbox zones
//!
//! Brightbox only exposes a flat zone listing; regions are not a vendor
//! concept. The topology service derives them by truncating zone handles
//! ("gb1-a" belongs to region "gb1") and caches both derived listings per
//! account, so repeated lookups within the TTL window cost no API calls.

use crate::api::{Zone, ZoneApi};
use crate::capabilities::BrightboxDataCenterCapabilities;
use async_trait::async_trait;
use nimbus_cloud::{
    CloudError, DataCenter, DataCenterCapabilities, DataCenterServices, ExpiringCache,
    ProviderContext, Region, Result,
};
use std::time::Duration;

const REGION_TTL: Duration = Duration::from_secs(10 * 60 * 60);
const DATA_CENTER_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Region a zone falls back to when its handle has no recognizable prefix
const DEFAULT_REGION_ID: &str = "gb1";

/// Derive a region id from a zone handle
///
/// A handle like "gb1-a" yields "gb1". Any handle that does not split into
/// exactly two hyphen-separated parts falls back to "gb1". That fallback
/// mirrors the vendor's long-standing handle format; a multi-hyphen handle
/// would silently land in the default region, so revisit this if Brightbox
/// ever changes the format.
pub fn region_id_from_handle(handle: &str) -> String {
    let parts: Vec<&str> = handle.split('-').collect();
    if parts.len() == 2 {
        parts[0].to_string()
    } else {
        DEFAULT_REGION_ID.to_string()
    }
}

/// Brightbox datacenter topology service
pub struct BrightboxTopology<A: ZoneApi> {
    api: A,
    context: Option<ProviderContext>,
    capabilities: BrightboxDataCenterCapabilities,
    regions: ExpiringCache<Region>,
    data_centers: ExpiringCache<DataCenter>,
    region_ttl: Duration,
    data_center_ttl: Duration,
}

impl<A: ZoneApi> BrightboxTopology<A> {
    pub fn new(api: A, context: Option<ProviderContext>) -> Self {
        Self::with_ttls(api, context, REGION_TTL, DATA_CENTER_TTL)
    }

    fn with_ttls(
        api: A,
        context: Option<ProviderContext>,
        region_ttl: Duration,
        data_center_ttl: Duration,
    ) -> Self {
        Self {
            api,
            context,
            capabilities: BrightboxDataCenterCapabilities,
            regions: ExpiringCache::new(),
            data_centers: ExpiringCache::new(),
            region_ttl,
            data_center_ttl,
        }
    }

    fn context(&self) -> Result<&ProviderContext> {
        self.context.as_ref().ok_or(CloudError::NoContext)
    }

    async fn fetch_zones(&self) -> Result<Vec<Zone>> {
        self.api
            .list_zones()
            .await
            .map_err(|e| CloudError::Api(e.to_string()))
    }
}

#[async_trait]
impl<A: ZoneApi> DataCenterServices for BrightboxTopology<A> {
    fn capabilities(&self) -> &dyn DataCenterCapabilities {
        &self.capabilities
    }

    async fn list_regions(&self) -> Result<Vec<Region>> {
        let ctx = self.context()?;
        let scope = ctx.account_id.clone();

        if let Some(regions) = self.regions.get(&scope) {
            return Ok(regions);
        }

        tracing::debug!("Region cache miss for account {}, listing zones", scope);
        let zones = self.fetch_zones().await?;

        // One region per distinct derived id, first-seen wins
        let mut regions: Vec<Region> = Vec::new();
        for zone in &zones {
            let region_id = region_id_from_handle(&zone.handle);
            if regions.iter().any(|r| r.id == region_id) {
                continue;
            }
            regions.push(Region {
                jurisdiction: region_id.chars().take(2).collect(),
                name: region_id.clone(),
                id: region_id,
                available: true,
                active: true,
            });
        }

        self.regions.put(scope, regions.clone(), self.region_ttl);
        Ok(regions)
    }

    async fn list_data_centers(&self, region_id: &str) -> Result<Vec<DataCenter>> {
        let region = self
            .get_region(region_id)
            .await?
            .ok_or_else(|| CloudError::RegionNotFound(region_id.to_string()))?;
        let ctx = self.context()?;
        let scope = format!("{}:{}", ctx.account_id, region.id);

        if let Some(data_centers) = self.data_centers.get(&scope) {
            return Ok(data_centers);
        }

        tracing::debug!("Datacenter cache miss for {}, listing zones", scope);
        let zones = self.fetch_zones().await?;

        let data_centers: Vec<DataCenter> = zones
            .into_iter()
            .filter(|zone| region_id_from_handle(&zone.handle) == region.id)
            .map(|zone| DataCenter {
                id: zone.id,
                name: zone.handle,
                region_id: region.id.clone(),
                available: true,
                active: true,
            })
            .collect();

        self.data_centers
            .put(scope, data_centers.clone(), self.data_center_ttl);
        Ok(data_centers)
    }

    async fn get_region(&self, region_id: &str) -> Result<Option<Region>> {
        Ok(self
            .list_regions()
            .await?
            .into_iter()
            .find(|r| r.id == region_id))
    }

    async fn get_data_center(&self, data_center_id: &str) -> Result<Option<DataCenter>> {
        for region in self.list_regions().await? {
            for data_center in self.list_data_centers(&region.id).await? {
                if data_center.id == data_center_id {
                    return Ok(Some(data_center));
                }
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrightboxError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockZoneApi {
        zones: Vec<Zone>,
        calls: Arc<AtomicUsize>,
    }

    impl MockZoneApi {
        fn new(zones: Vec<Zone>) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    zones,
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl ZoneApi for MockZoneApi {
        async fn list_zones(&self) -> crate::error::Result<Vec<Zone>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.zones.clone())
        }
    }

    struct FailingZoneApi;

    #[async_trait]
    impl ZoneApi for FailingZoneApi {
        async fn list_zones(&self) -> crate::error::Result<Vec<Zone>> {
            Err(BrightboxError::Api("HTTP 503: service unavailable".to_string()))
        }
    }

    fn zone(id: &str, handle: &str) -> Zone {
        Zone {
            id: id.to_string(),
            handle: handle.to_string(),
        }
    }

    fn sample_zones() -> Vec<Zone> {
        vec![
            zone("zone1", "gb1-a"),
            zone("zone2", "gb1-b"),
            zone("zone3", "us1-a"),
        ]
    }

    fn topology(zones: Vec<Zone>) -> (BrightboxTopology<MockZoneApi>, Arc<AtomicUsize>) {
        let (api, calls) = MockZoneApi::new(zones);
        (
            BrightboxTopology::new(api, Some(ProviderContext::new("acc-12345"))),
            calls,
        )
    }

    #[test]
    fn test_region_id_from_handle() {
        assert_eq!(region_id_from_handle("gb1-a"), "gb1");
        assert_eq!(region_id_from_handle("us1-b"), "us1");
        // anything but exactly two parts falls back to the default region
        assert_eq!(region_id_from_handle("gb1"), "gb1");
        assert_eq!(region_id_from_handle("a-b-c"), "gb1");
        assert_eq!(region_id_from_handle(""), "gb1");
    }

    #[tokio::test]
    async fn test_list_regions_dedups_and_derives_jurisdiction() {
        let (topology, _) = topology(sample_zones());

        let regions = topology.list_regions().await.unwrap();
        let ids: Vec<&str> = regions.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["gb1", "us1"]);

        let gb1 = &regions[0];
        assert_eq!(gb1.name, "gb1");
        assert_eq!(gb1.jurisdiction, "gb");
        assert!(gb1.available);
        assert!(gb1.active);
        assert_eq!(regions[1].jurisdiction, "us");
    }

    #[tokio::test]
    async fn test_list_data_centers_filters_by_region() {
        let (topology, _) = topology(sample_zones());

        let dcs = topology.list_data_centers("gb1").await.unwrap();
        assert_eq!(dcs.len(), 2);
        assert_eq!(dcs[0].id, "zone1");
        assert_eq!(dcs[0].name, "gb1-a");
        assert_eq!(dcs[0].region_id, "gb1");
        assert_eq!(dcs[1].id, "zone2");

        let dcs = topology.list_data_centers("us1").await.unwrap();
        assert_eq!(dcs.len(), 1);
        assert_eq!(dcs[0].id, "zone3");
    }

    #[tokio::test]
    async fn test_data_centers_partition_the_zone_list() {
        let zones = vec![
            zone("zone1", "gb1-a"),
            zone("zone2", "gb1-b"),
            zone("zone3", "us1-a"),
            zone("zone4", "weird-handle-x"),
        ];
        let (topology, _) = topology(zones.clone());

        let mut seen: Vec<String> = Vec::new();
        for region in topology.list_regions().await.unwrap() {
            for dc in topology.list_data_centers(&region.id).await.unwrap() {
                assert_eq!(region_id_from_handle(&dc.name), region.id);
                seen.push(dc.id);
            }
        }
        seen.sort();
        let mut expected: Vec<String> = zones.iter().map(|z| z.id.clone()).collect();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[tokio::test]
    async fn test_repeat_calls_within_ttl_hit_the_cache() {
        let (topology, calls) = topology(sample_zones());

        topology.list_regions().await.unwrap();
        topology.list_regions().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // first datacenter listing is a separate miss, the second is not
        topology.list_data_centers("gb1").await.unwrap();
        topology.list_data_centers("gb1").await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_expired_ttl_triggers_fresh_fetch() {
        let (api, calls) = MockZoneApi::new(sample_zones());
        let topology = BrightboxTopology::with_ttls(
            api,
            Some(ProviderContext::new("acc-12345")),
            Duration::ZERO,
            Duration::ZERO,
        );

        topology.list_regions().await.unwrap();
        topology.list_regions().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unknown_region_lookup_is_absent_not_an_error() {
        let (topology, _) = topology(sample_zones());
        assert_eq!(topology.get_region("nonexistent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_data_centers_for_unknown_region_fails() {
        let (topology, _) = topology(sample_zones());
        let err = topology.list_data_centers("nonexistent").await.unwrap_err();
        assert!(matches!(err, CloudError::RegionNotFound(id) if id == "nonexistent"));
    }

    #[tokio::test]
    async fn test_get_data_center_scans_all_regions() {
        let (topology, _) = topology(sample_zones());

        let dc = topology.get_data_center("zone3").await.unwrap().unwrap();
        assert_eq!(dc.name, "us1-a");
        assert_eq!(dc.region_id, "us1");

        assert_eq!(topology.get_data_center("zone9").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_context_fails_before_any_api_call() {
        let (api, calls) = MockZoneApi::new(sample_zones());
        let topology = BrightboxTopology::new(api, None);

        let err = topology.list_regions().await.unwrap_err();
        assert!(matches!(err, CloudError::NoContext));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates_unretried() {
        let topology =
            BrightboxTopology::new(FailingZoneApi, Some(ProviderContext::new("acc-12345")));

        let err = topology.list_regions().await.unwrap_err();
        assert!(matches!(err, CloudError::Api(_)));
    }

    #[tokio::test]
    async fn test_multi_hyphen_handles_collapse_into_default_region() {
        let (topology, _) = topology(vec![zone("zone1", "eu-west-1")]);

        let regions = topology.list_regions().await.unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].id, "gb1");

        let dcs = topology.list_data_centers("gb1").await.unwrap();
        assert_eq!(dcs[0].name, "eu-west-1");
    }
}
