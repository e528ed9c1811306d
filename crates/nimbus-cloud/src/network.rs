//! Network services and firewall capability vocabulary
//!
//! Callers use these descriptors to discover what a provider's firewalls
//! support before attempting an operation, instead of probing the API and
//! handling vendor-specific rejections.

use serde::{Deserialize, Serialize};

/// Traffic direction of a firewall rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Traffic entering the protected resource
    Ingress,
    /// Traffic leaving the protected resource
    Egress,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Ingress => write!(f, "ingress"),
            Direction::Egress => write!(f, "egress"),
        }
    }
}

/// What a matching firewall rule does with traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Allow,
    Deny,
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Permission::Allow => write!(f, "allow"),
            Permission::Deny => write!(f, "deny"),
        }
    }
}

/// Protocols a firewall rule can match on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    Tcp,
    Udp,
    Icmp,
    Any,
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Protocol::Tcp => write!(f, "tcp"),
            Protocol::Udp => write!(f, "udp"),
            Protocol::Icmp => write!(f, "icmp"),
            Protocol::Any => write!(f, "any"),
        }
    }
}

/// Kinds of endpoints a firewall rule can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleTargetType {
    /// Anywhere; no restriction on the endpoint
    Global,
    /// A CIDR block
    Cidr,
    /// A specific virtual machine
    Vm,
    /// A VLAN / private network
    Vlan,
}

/// Whether a provider needs, tolerates, or rejects a given input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Required,
    Optional,
    None,
}

/// Constraints a provider places on resource names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConstraints {
    /// Only letters and digits allowed
    pub alphanumeric_only: bool,
    pub min_length: usize,
    pub max_length: usize,
}

impl NamingConstraints {
    /// Alphanumeric names between `min_length` and `max_length` characters
    pub fn alphanumeric(min_length: usize, max_length: usize) -> Self {
        Self {
            alphanumeric_only: true,
            min_length,
            max_length,
        }
    }

    /// Whether `name` satisfies these constraints
    pub fn is_valid(&self, name: &str) -> bool {
        let len = name.chars().count();
        if len < self.min_length || len > self.max_length {
            return false;
        }
        !self.alphanumeric_only || name.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

/// Static descriptors for a provider's firewall support
///
/// Every accessor answers from compiled-in constants. The `in_vlan` flag
/// distinguishes rules attached inside a private network from rules on
/// the public surface; providers commonly support only one of the two.
pub trait FirewallCapabilities: Send + Sync {
    /// The vendor's own term for a firewall, e.g. "firewall policy"
    fn term_for_firewall(&self) -> &str;

    /// Whether rules carry an ordering precedence
    fn precedence_requirement(&self, in_vlan: bool) -> Requirement;

    /// When precedence exists, whether 0 is the highest priority
    fn is_zero_precedence_highest(&self) -> bool;

    /// Rule directions the provider supports
    fn supported_directions(&self, in_vlan: bool) -> &[Direction];

    /// Rule permissions the provider supports
    fn supported_permissions(&self, in_vlan: bool) -> &[Permission];

    /// Protocols rules can match on
    fn supported_protocols(&self, in_vlan: bool) -> &[Protocol];

    /// Target types allowed as the destination of a rule in `direction`
    fn supported_destination_types(
        &self,
        in_vlan: bool,
        direction: Direction,
    ) -> &[RuleTargetType];

    /// Target types allowed as the source of a rule in `direction`
    fn supported_source_types(&self, in_vlan: bool, direction: Direction) -> &[RuleTargetType];

    /// Whether a rule with this shape can exist at all
    fn supports_rules(&self, direction: Direction, permission: Permission, in_vlan: bool) -> bool;

    fn supports_firewall_creation(&self, in_vlan: bool) -> bool;

    fn supports_firewall_deletion(&self) -> bool;

    /// Whether a firewall must be created with at least one rule
    fn requires_rules_on_creation(&self) -> bool;

    /// Whether firewalls must be bound to a VLAN
    fn requires_vlan(&self) -> Requirement;

    /// Constraints on firewall names
    fn naming_constraints(&self) -> NamingConstraints;
}

/// Network feature discovery for a provider
///
/// Reports which network services a provider implements. A `false` flag
/// means the feature is genuinely unsupported, not merely unconfigured;
/// callers should not fall back to probing.
pub trait NetworkServices: Send + Sync {
    /// Whether the provider supports firewalls at all
    fn has_firewall_support(&self) -> bool;

    /// Capability descriptors for the provider's firewalls, when supported
    fn firewall_capabilities(&self) -> Option<&dyn FirewallCapabilities>;

    /// Whether the provider supports managed load balancers
    fn has_load_balancer_support(&self) -> bool;

    /// Whether the provider supports standalone IP address management
    fn has_ip_address_support(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naming_constraints_alphanumeric() {
        let constraints = NamingConstraints::alphanumeric(0, 255);

        assert!(constraints.is_valid(""));
        assert!(constraints.is_valid("web1"));
        assert!(constraints.is_valid(&"a".repeat(255)));
        assert!(!constraints.is_valid(&"a".repeat(256)));
        assert!(!constraints.is_valid("web-1"));
        assert!(!constraints.is_valid("web 1"));
    }

    #[test]
    fn test_naming_constraints_min_length() {
        let constraints = NamingConstraints::alphanumeric(3, 10);

        assert!(!constraints.is_valid("ab"));
        assert!(constraints.is_valid("abc"));
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(Direction::Ingress.to_string(), "ingress");
        assert_eq!(Permission::Allow.to_string(), "allow");
        assert_eq!(Protocol::Icmp.to_string(), "icmp");
    }
}
