//! Domain models for the network topology.
//!
//! - [`Ipv4`] - IPv4 network value with CIDR notation support
//! - [`Subnet`], [`NetworkInterface`], [`Node`], [`Network`] - the built topology
//! - [`HostRecord`] and [`Inventory`] - raw records the topology is built from

mod ipv4;
mod network;
mod node;
mod record;
mod subnet;

// Re-export public types
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, Ipv4, MAX_LENGTH};
pub use network::Network;
pub use node::{NetworkInterface, Node};
pub use record::{HostRecord, Inventory, UNSET_IP};
pub use subnet::Subnet;

/// Display id used as the join key in rendered output: the name with every
/// space replaced by an underscore.
pub fn display_id(name: &str) -> String {
    name.replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_id() {
        assert_eq!(display_id("Subnet 12"), "Subnet_12");
        assert_eq!(display_id("rack 1 node 2"), "rack_1_node_2");
        assert_eq!(display_id("node-1.maas"), "node-1.maas");
    }
}
