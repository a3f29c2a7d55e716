//! Subnet identity and de-duplication.
//!
//! Every subnet string seen during one build goes through a
//! [`SubnetRegistry`], which canonicalizes it and hands back the single
//! shared [`Subnet`] for that network.

use crate::error::TopologyError;
use crate::models::{Ipv4, Subnet};
use std::collections::HashMap;
use std::rc::Rc;

/// Canonical CIDR -> Subnet, scoped to one build.
#[derive(Debug, Default)]
pub struct SubnetRegistry {
    by_cidr: HashMap<Ipv4, Rc<Subnet>>,
    // first-seen order, ids are index + 1
    ordered: Vec<Rc<Subnet>>,
}

impl SubnetRegistry {
    pub fn new() -> SubnetRegistry {
        SubnetRegistry::default()
    }

    /// Resolve a raw CIDR string to its subnet, creating it on first sight.
    ///
    /// `"10.0.0.0/24"` and `"10.0.0.9/24"` resolve to the same subnet.
    pub fn resolve(&mut self, raw_cidr: &str) -> Result<Rc<Subnet>, TopologyError> {
        let cidr = Ipv4::new(raw_cidr)?.canonical();

        if let Some(subnet) = self.by_cidr.get(&cidr) {
            return Ok(Rc::clone(subnet));
        }

        let id = u32::try_from(self.ordered.len() + 1).map_err(|_| {
            TopologyError::MalformedCidr {
                cidr: raw_cidr.to_string(),
                reason: "too many subnets".to_string(),
            }
        })?;
        let subnet = Rc::new(Subnet::new(id, cidr));
        log::trace!("new subnet {subnet} from '{raw_cidr}'");
        self.by_cidr.insert(cidr, Rc::clone(&subnet));
        self.ordered.push(Rc::clone(&subnet));
        Ok(subnet)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Consume the registry, returning its subnets in id order.
    pub fn into_subnets(self) -> Vec<Rc<Subnet>> {
        self.ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_dedups_equal_strings() {
        let mut registry = SubnetRegistry::new();
        let a = registry.resolve("192.168.1.0/24").unwrap();
        let b = registry.resolve("192.168.1.0/24").unwrap();
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resolve_dedups_by_canonical_value() {
        let mut registry = SubnetRegistry::new();
        let a = registry.resolve("192.168.1.0/24").unwrap();
        let b = registry.resolve("192.168.1.200/24").unwrap();
        let c = registry.resolve(" 192.168.1.0/24").unwrap();
        assert!(Rc::ptr_eq(&a, &b));
        assert!(Rc::ptr_eq(&a, &c));
        assert_eq!(a.cidr.to_string(), "192.168.1.0/24");
    }

    #[test]
    fn test_same_address_different_prefix_are_distinct() {
        let mut registry = SubnetRegistry::new();
        let a = registry.resolve("10.0.0.0/16").unwrap();
        let b = registry.resolve("10.0.0.0/24").unwrap();
        assert!(!Rc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_ids_follow_first_seen_order() {
        let mut registry = SubnetRegistry::new();
        for cidr in ["10.0.2.0/24", "10.0.1.0/24", "10.0.2.0/24", "10.0.0.0/24"] {
            registry.resolve(cidr).unwrap();
        }
        let subnets = registry.into_subnets();
        let got: Vec<(u32, String)> = subnets
            .iter()
            .map(|s| (s.id, s.cidr.to_string()))
            .collect();
        assert_eq!(
            got,
            vec![
                (1, "10.0.2.0/24".to_string()),
                (2, "10.0.1.0/24".to_string()),
                (3, "10.0.0.0/24".to_string()),
            ]
        );
    }

    #[test]
    fn test_malformed_does_not_register() {
        let mut registry = SubnetRegistry::new();
        let err = registry.resolve("10.0.0.0/40").unwrap_err();
        assert!(matches!(err, TopologyError::MalformedCidr { .. }));
        assert!(registry.is_empty());
    }
}
