//! Static capability tables for the Brightbox provider
//!
//! Pure metadata: what Brightbox's zones and firewall policies support.
//! Everything here is a compiled-in constant; nothing touches the API.

use nimbus_cloud::{
    DataCenterCapabilities, Direction, FirewallCapabilities, NamingConstraints, Permission,
    Protocol, Requirement, RuleTargetType,
};

const DIRECTIONS: &[Direction] = &[Direction::Ingress, Direction::Egress];
const PERMISSIONS: &[Permission] = &[Permission::Allow];
const PROTOCOLS: &[Protocol] = &[Protocol::Tcp, Protocol::Icmp, Protocol::Udp];
const RULE_TARGETS: &[RuleTargetType] =
    &[RuleTargetType::Global, RuleTargetType::Cidr, RuleTargetType::Vm];

/// Brightbox datacenter capability descriptors
pub struct BrightboxDataCenterCapabilities;

impl DataCenterCapabilities for BrightboxDataCenterCapabilities {
    fn term_for_data_center(&self) -> &str {
        "availability zone"
    }

    fn term_for_region(&self) -> &str {
        "region"
    }

    fn supports_affinity_groups(&self) -> bool {
        false
    }

    fn supports_resource_pools(&self) -> bool {
        false
    }

    fn supports_storage_pools(&self) -> bool {
        false
    }

    fn supports_folders(&self) -> bool {
        false
    }
}

/// Brightbox firewall-policy capability descriptors
///
/// Brightbox firewall policies live outside private networks: every list
/// accessor returns empty when `in_vlan` is set.
pub struct BrightboxFirewallCapabilities;

impl FirewallCapabilities for BrightboxFirewallCapabilities {
    fn term_for_firewall(&self) -> &str {
        "firewall policy"
    }

    fn precedence_requirement(&self, _in_vlan: bool) -> Requirement {
        Requirement::None
    }

    fn is_zero_precedence_highest(&self) -> bool {
        false
    }

    fn supported_directions(&self, in_vlan: bool) -> &[Direction] {
        if in_vlan { &[] } else { DIRECTIONS }
    }

    fn supported_permissions(&self, in_vlan: bool) -> &[Permission] {
        if in_vlan { &[] } else { PERMISSIONS }
    }

    fn supported_protocols(&self, in_vlan: bool) -> &[Protocol] {
        if in_vlan { &[] } else { PROTOCOLS }
    }

    fn supported_destination_types(
        &self,
        in_vlan: bool,
        direction: Direction,
    ) -> &[RuleTargetType] {
        if direction == Direction::Egress && !in_vlan {
            RULE_TARGETS
        } else {
            &[]
        }
    }

    fn supported_source_types(&self, in_vlan: bool, direction: Direction) -> &[RuleTargetType] {
        if direction == Direction::Ingress && !in_vlan {
            RULE_TARGETS
        } else {
            &[]
        }
    }

    fn supports_rules(&self, _direction: Direction, permission: Permission, in_vlan: bool) -> bool {
        !in_vlan && permission == Permission::Allow
    }

    fn supports_firewall_creation(&self, in_vlan: bool) -> bool {
        !in_vlan
    }

    fn supports_firewall_deletion(&self) -> bool {
        true
    }

    fn requires_rules_on_creation(&self) -> bool {
        false
    }

    fn requires_vlan(&self) -> Requirement {
        Requirement::None
    }

    fn naming_constraints(&self) -> NamingConstraints {
        NamingConstraints::alphanumeric(0, 255)
    }
}
