//! Hosts and their network interfaces.

use super::Subnet;
use std::net::Ipv4Addr;
use std::rc::Rc;

/// One interface of a host, bound to a subnet.
#[derive(Debug, Clone)]
pub struct NetworkInterface {
    /// Interface name, empty when the inventory does not name it.
    pub name: String,
    /// Current address, `None` when the host holds no lease.
    pub ip: Option<Ipv4Addr>,
    /// Shared with every other interface on the same network.
    pub subnet: Rc<Subnet>,
}

impl NetworkInterface {
    pub fn new(name: &str, ip: Option<Ipv4Addr>, subnet: Rc<Subnet>) -> NetworkInterface {
        NetworkInterface {
            name: name.to_string(),
            ip,
            subnet,
        }
    }
}

impl std::fmt::Display for NetworkInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ip = self
            .ip
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(f, "{}={} on {}", self.name, ip, self.subnet)
    }
}

/// A host of the inventory.
#[derive(Debug, Clone)]
pub struct Node {
    /// Hostname, or the inventory key when the record has no hostname.
    pub name: String,
    /// Key of the record this node was built from.
    pub key: String,
    /// Interfaces in inventory order.
    pub interfaces: Vec<NetworkInterface>,
}

impl Node {
    /// Interfaces on the given subnet, in inventory order.
    pub fn interfaces_on<'a>(
        &'a self,
        subnet: &'a Subnet,
    ) -> impl Iterator<Item = &'a NetworkInterface> + 'a {
        self.interfaces
            .iter()
            .filter(move |iface| std::ptr::eq(iface.subnet.as_ref(), subnet))
    }
}
