//! Network feature discovery for Brightbox
//!
//! Brightbox supports firewall policies; managed load balancers and
//! standalone IP management are not implemented by this adapter, and the
//! discovery surface says so explicitly instead of offering stubs.

use crate::capabilities::BrightboxFirewallCapabilities;
use nimbus_cloud::{FirewallCapabilities, NetworkServices};

/// Brightbox network services
pub struct BrightboxNetworkServices {
    firewall_capabilities: BrightboxFirewallCapabilities,
}

impl BrightboxNetworkServices {
    pub fn new() -> Self {
        Self {
            firewall_capabilities: BrightboxFirewallCapabilities,
        }
    }
}

impl Default for BrightboxNetworkServices {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkServices for BrightboxNetworkServices {
    fn has_firewall_support(&self) -> bool {
        true
    }

    fn firewall_capabilities(&self) -> Option<&dyn FirewallCapabilities> {
        Some(&self.firewall_capabilities)
    }

    fn has_load_balancer_support(&self) -> bool {
        false
    }

    fn has_ip_address_support(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_flags() {
        let services = BrightboxNetworkServices::new();
        assert!(services.has_firewall_support());
        assert!(!services.has_load_balancer_support());
        assert!(!services.has_ip_address_support());
    }

    #[test]
    fn test_firewall_capabilities_are_exposed() {
        let services = BrightboxNetworkServices::new();
        let caps = services.firewall_capabilities().unwrap();
        assert_eq!(caps.term_for_firewall(), "firewall policy");
    }
}
