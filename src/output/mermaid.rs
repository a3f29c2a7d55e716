//! Mermaid `graph LR` diagram.

use super::DisplayIds;
use crate::error::TopologyError;
use crate::models::{Network, NetworkInterface};
use itertools::Itertools;

/// Edge label of an interface without an address.
pub const LEASE_EXPIRED_LABEL: &str = "DHCP lease expired";

/// Quotes and pipes end a Mermaid label early.
fn escape(text: &str) -> String {
    text.replace('"', "#quot;").replace('|', "#124;")
}

/// Characters that end or reshape a Mermaid node id.
const DIAGRAM_ID_SYNTAX: &[char] = &['"', '[', ']', '(', ')', '{', '}', '<', '>', '|', ';'];

fn check_diagram_id(id: &str) -> Result<(), TopologyError> {
    let syntax = |c: char| c.is_whitespace() || DIAGRAM_ID_SYNTAX.contains(&c);
    if id.is_empty() || id.chars().any(syntax) {
        return Err(TopologyError::UnsupportedDiagramId { id: id.to_string() });
    }
    Ok(())
}

fn edge_label(iface: &NetworkInterface) -> String {
    match iface.ip {
        Some(ip) => format!("{}: {}", escape(&iface.name), ip),
        None => LEASE_EXPIRED_LABEL.to_string(),
    }
}

/// Render the network as a Mermaid flowchart.
///
/// Subnet declarations, then node declarations, then one edge per
/// interface, each block followed by a blank line. Labels are escaped, but
/// a host whose display id holds Mermaid syntax (quotes, brackets, braces,
/// pipes, `;` or whitespace) fails with `UnsupportedDiagramId`.
pub fn render_mermaid(network: &Network) -> Result<String, TopologyError> {
    let ids = DisplayIds::new(network)?;
    for id in &ids.nodes {
        check_diagram_id(id)?;
    }
    let mut output = String::from("graph LR\n\n");

    // Subnets first, hosts point at them
    output += &network
        .subnets
        .iter()
        .zip(&ids.subnets)
        .map(|(subnet, id)| format!("  {id}[\"{id}<br>{}\"]\n", subnet.cidr))
        .join("");
    output.push('\n');

    output += &network
        .nodes
        .iter()
        .zip(&ids.nodes)
        .map(|(node, id)| format!("  {id}[\"{}\"]\n", escape(&node.name)))
        .join("");
    output.push('\n');

    for (node, node_id) in network.nodes.iter().zip(&ids.nodes) {
        for iface in &node.interfaces {
            output += &format!(
                "  {node_id} -->|{}| {}\n",
                edge_label(iface),
                ids.subnet(&iface.subnet)
            );
        }
    }

    Ok(output)
}
