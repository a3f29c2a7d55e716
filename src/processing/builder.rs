//! Inventory records to [`Network`].

use super::SubnetRegistry;
use crate::error::TopologyError;
use crate::models::{HostRecord, Inventory, Network, NetworkInterface, Node, UNSET_IP};
use std::net::Ipv4Addr;

/// Build a [`Network`] from inventory records.
///
/// Each build gets its own [`SubnetRegistry`], so subnet ids start at 1 and
/// follow first-seen order across the inventory. Any error aborts the whole
/// build.
///
/// # Arguments
/// * `inventory` - Host records in document order
///
/// # Returns
/// * `Ok(Network)` - One node per record, plus every referenced subnet once
/// * `Err(TopologyError)` - First cardinality, CIDR or address error found
pub fn build_network(inventory: &Inventory) -> Result<Network, TopologyError> {
    let mut registry = SubnetRegistry::new();
    let mut nodes = Vec::with_capacity(inventory.len());

    for (key, record) in inventory.iter() {
        let node = build_node(key, record, &mut registry)?;
        log::debug!(
            "host '{key}' -> node '{}' with {} interface(s)",
            node.name,
            node.interfaces.len()
        );
        nodes.push(node);
    }

    let network = Network {
        nodes,
        subnets: registry.into_subnets(),
    };
    log::info!(
        "Built network: {} nodes, {} subnets, {} interfaces",
        network.nodes.len(),
        network.subnets.len(),
        network.interface_count()
    );
    Ok(network)
}

/// Check the positional lists of one record agree in length.
fn check_cardinality(key: &str, record: &HostRecord) -> Result<(), TopologyError> {
    if record.ips.len() != record.subnets.len() {
        return Err(TopologyError::CardinalityMismatch {
            host: key.to_string(),
            ips: record.ips.len(),
            subnets: record.subnets.len(),
        });
    }
    match &record.interfaces {
        Some(names) if names.len() != record.ips.len() => {
            Err(TopologyError::InterfaceNamesMismatch {
                host: key.to_string(),
                names: names.len(),
                ips: record.ips.len(),
            })
        }
        _ => Ok(()),
    }
}

fn parse_ip(key: &str, raw: &str) -> Result<Option<Ipv4Addr>, TopologyError> {
    let raw = raw.trim();
    if raw == UNSET_IP {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| TopologyError::MalformedAddress {
            host: key.to_string(),
            address: raw.to_string(),
        })
}

fn build_node(
    key: &str,
    record: &HostRecord,
    registry: &mut SubnetRegistry,
) -> Result<Node, TopologyError> {
    check_cardinality(key, record)?;

    let mut interfaces = Vec::with_capacity(record.ips.len());
    for (i, (raw_ip, raw_cidr)) in record.ips.iter().zip(&record.subnets).enumerate() {
        let subnet = registry.resolve(raw_cidr)?;
        let ip = parse_ip(key, raw_ip)?;

        if let Some(addr) = ip {
            if !subnet.cidr.contains(addr) {
                log::warn!("host '{key}': address {addr} is outside {}", subnet.cidr);
            }
        }

        let name = record
            .interfaces
            .as_ref()
            .and_then(|names| names.get(i))
            .map(String::as_str)
            .unwrap_or("");
        interfaces.push(NetworkInterface::new(name, ip, subnet));
    }

    Ok(Node {
        name: record.declared_hostname().unwrap_or(key).to_string(),
        key: key.to_string(),
        interfaces,
    })
}
