//! Node-link output for force-directed visualization.
//!
//! ```json
//! { "nodes": [ {"id": "Subnet_1", "name": "Subnet 1", "cidr": "10.0.0.0/24", "type": "subnet", "group": 1} ],
//!   "links": [ {"source": "node1", "target": "Subnet_1", "interface": "eth0", "ip": "10.0.0.5"} ] }
//! ```

use super::DisplayIds;
use crate::error::TopologyError;
use crate::models::Network;
use serde::Serialize;

/// Group number of subnet entries.
pub const SUBNET_GROUP: u8 = 1;
/// Group number of host entries.
pub const NODE_GROUP: u8 = 2;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GraphNodeKind {
    Subnet,
    Node,
}

/// Interface detail attached to host entries.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GraphInterface {
    pub name: String,
    pub ip: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
    #[serde(rename = "type")]
    pub kind: GraphNodeKind,
    pub group: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<Vec<GraphInterface>>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub interface: String,
    pub ip: Option<String>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologyGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// Render the network as nodes and links.
///
/// Subnets come first, then hosts. One link per interface, in node then
/// interface order; links are never merged.
pub fn render_graph(network: &Network) -> Result<TopologyGraph, TopologyError> {
    let ids = DisplayIds::new(network)?;
    let mut graph = TopologyGraph::default();

    for (subnet, id) in network.subnets.iter().zip(&ids.subnets) {
        graph.nodes.push(GraphNode {
            id: id.clone(),
            name: subnet.name(),
            cidr: Some(subnet.cidr.to_string()),
            kind: GraphNodeKind::Subnet,
            group: SUBNET_GROUP,
            interfaces: None,
        });
    }

    for (node, id) in network.nodes.iter().zip(&ids.nodes) {
        let interfaces = node
            .interfaces
            .iter()
            .map(|iface| GraphInterface {
                name: iface.name.clone(),
                ip: iface.ip.map(|ip| ip.to_string()),
            })
            .collect();
        graph.nodes.push(GraphNode {
            id: id.clone(),
            name: node.name.clone(),
            cidr: None,
            kind: GraphNodeKind::Node,
            group: NODE_GROUP,
            interfaces: Some(interfaces),
        });
    }

    for (node, node_id) in network.nodes.iter().zip(&ids.nodes) {
        for iface in &node.interfaces {
            graph.links.push(GraphLink {
                source: node_id.clone(),
                target: ids.subnet(&iface.subnet).to_string(),
                interface: iface.name.clone(),
                ip: iface.ip.map(|ip| ip.to_string()),
            });
        }
    }

    log::debug!(
        "graph: {} nodes, {} links",
        graph.nodes.len(),
        graph.links.len()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HostRecord, Inventory};
    use crate::processing::build_network;
    use serde_json::json;

    fn network(hosts: Vec<(&str, &str, Vec<&str>, Vec<&str>)>) -> Network {
        let inventory: Inventory = hosts
            .into_iter()
            .map(|(key, hostname, ips, subnets)| {
                (
                    key.to_string(),
                    HostRecord {
                        hostname: Some(hostname.to_string()),
                        ips: ips.iter().map(|s| s.to_string()).collect(),
                        subnets: subnets.iter().map(|s| s.to_string()).collect(),
                        interfaces: None,
                    },
                )
            })
            .collect();
        build_network(&inventory).unwrap()
    }

    #[test]
    fn test_counts() {
        let net = network(vec![
            (
                "h1",
                "Node 1",
                vec!["10.0.0.5", "None"],
                vec!["10.0.0.0/24", "10.0.0.0/24"],
            ),
            ("h2", "Node 2", vec!["10.0.1.5"], vec!["10.0.1.0/24"]),
        ]);
        let graph = render_graph(&net).unwrap();
        assert_eq!(graph.nodes.len(), 2 + 2);
        assert_eq!(graph.links.len(), 3);
        assert_eq!(graph.links[0].target, graph.links[1].target);
    }

    #[test]
    fn test_json_shape() {
        let net = network(vec![(
            "h1",
            "Node 1",
            vec!["10.0.0.5", "None"],
            vec!["10.0.0.0/24", "10.0.0.1/24"],
        )]);
        let graph = render_graph(&net).unwrap();
        let value = serde_json::to_value(&graph).unwrap();
        assert_eq!(
            value,
            json!({
                "nodes": [
                    {"id": "Subnet_1", "name": "Subnet 1", "cidr": "10.0.0.0/24", "type": "subnet", "group": 1},
                    {"id": "Node_1", "name": "Node 1", "type": "node", "group": 2,
                     "interfaces": [{"name": "", "ip": "10.0.0.5"}, {"name": "", "ip": null}]}
                ],
                "links": [
                    {"source": "Node_1", "target": "Subnet_1", "interface": "", "ip": "10.0.0.5"},
                    {"source": "Node_1", "target": "Subnet_1", "interface": "", "ip": null}
                ]
            })
        );
    }

    #[test]
    fn test_padded_hostnames_keep_their_spaces() {
        let net = network(vec![
            ("k1", " web ", vec![], vec![]),
            ("k2", "  ", vec![], vec![]),
        ]);
        let graph = render_graph(&net).unwrap();
        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(ids, vec!["_web_", "__"]);
        assert_eq!(names, vec![" web ", "  "]);
    }

    #[test]
    fn test_collision_is_an_error() {
        let net = network(vec![
            ("h1", "rack 1", vec![], vec![]),
            ("h2", "rack_1", vec![], vec![]),
        ]);
        assert_eq!(
            render_graph(&net).unwrap_err(),
            TopologyError::DuplicateIdentifier {
                id: "rack_1".to_string()
            }
        );
    }
}
