//! Rendering a built [`Network`].
//!
//! - [`graph`] - Node-link structure for force-directed visualization
//! - [`mermaid`] - Static `graph LR` diagram text
//! - [`terminal`] - Coloured summary for the terminal

mod graph;
mod mermaid;
mod terminal;

pub use graph::{
    render_graph, GraphInterface, GraphLink, GraphNode, GraphNodeKind, TopologyGraph, NODE_GROUP,
    SUBNET_GROUP,
};
pub use mermaid::{render_mermaid, LEASE_EXPIRED_LABEL};
pub use terminal::{format_field, print_summary};

use crate::error::TopologyError;
use crate::models::{display_id, Network, Subnet};
use std::collections::HashSet;

/// Output formats of the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Node-link JSON
    Graph,
    /// Mermaid diagram text
    Mermaid,
}

/// Display ids of every subnet and node, checked for collisions.
struct DisplayIds {
    subnets: Vec<String>,
    nodes: Vec<String>,
}

impl DisplayIds {
    fn new(network: &Network) -> Result<DisplayIds, TopologyError> {
        let subnets: Vec<String> = network
            .subnets
            .iter()
            .map(|s| display_id(&s.name()))
            .collect();
        let nodes: Vec<String> = network.nodes.iter().map(|n| display_id(&n.name)).collect();

        let mut seen = HashSet::new();
        for id in subnets.iter().chain(&nodes) {
            if !seen.insert(id.as_str()) {
                return Err(TopologyError::DuplicateIdentifier { id: id.clone() });
            }
        }
        Ok(DisplayIds { subnets, nodes })
    }

    fn subnet(&self, subnet: &Subnet) -> String {
        display_id(&subnet.name())
    }
}
