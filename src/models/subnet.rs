//! Subnet data model.

use super::Ipv4;

/// A subnet seen in the inventory.
///
/// Identity is the canonical CIDR. Instances are only created by
/// [`SubnetRegistry`](crate::processing::SubnetRegistry), which hands out
/// shared references so every interface on the same network points at the
/// same value.
#[derive(Debug, PartialEq, Eq)]
pub struct Subnet {
    /// Build-local id, assigned in first-seen order starting at 1.
    pub id: u32,
    /// Canonical network value (host bits cleared).
    pub cidr: Ipv4,
}

impl Subnet {
    pub(crate) fn new(id: u32, cidr: Ipv4) -> Subnet {
        Subnet {
            id,
            cidr: cidr.canonical(),
        }
    }

    /// Human readable name, e.g. `Subnet 3`.
    pub fn name(&self) -> String {
        format!("Subnet {}", self.id)
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subnet_{}({})", self.id, self.cidr)
    }
}
