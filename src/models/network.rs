//! The built topology.

use super::{NetworkInterface, Node, Subnet};
use std::fmt;
use std::rc::Rc;

/// Hosts plus every subnet their interfaces reference.
///
/// Only [`build_network`](crate::processing::build_network) creates one, so
/// `subnets` holds each referenced subnet exactly once, in id order.
#[derive(Debug)]
pub struct Network {
    pub nodes: Vec<Node>,
    pub subnets: Vec<Rc<Subnet>>,
}

impl Network {
    /// Total number of interfaces across all nodes.
    pub fn interface_count(&self) -> usize {
        self.nodes.iter().map(|n| n.interfaces.len()).sum()
    }

    /// Every `(node, interface)` pair in node then interface order.
    pub fn interfaces(&self) -> impl Iterator<Item = (&Node, &NetworkInterface)> {
        self.nodes
            .iter()
            .flat_map(|node| node.interfaces.iter().map(move |iface| (node, iface)))
    }

    /// Look up a subnet by its canonical CIDR string.
    pub fn subnet_by_cidr(&self, cidr: &str) -> Option<&Rc<Subnet>> {
        self.subnets.iter().find(|s| s.cidr.to_string() == cidr)
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Network ({} nodes, {} subnets, {} interfaces):",
            self.nodes.len(),
            self.subnets.len(),
            self.interface_count()
        )?;
        for subnet in &self.subnets {
            writeln!(f, "  - {subnet}")?;
        }
        for node in &self.nodes {
            writeln!(f, "  - {} [{}]", node.name, node.key)?;
            for iface in &node.interfaces {
                writeln!(f, "      {iface}")?;
            }
        }
        Ok(())
    }
}
