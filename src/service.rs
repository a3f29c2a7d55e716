//! Document in, rendered topology out.
//!
//! A [`TopologyService`] is created for each request or CLI invocation and
//! holds no state beyond the output format it renders.

use crate::error::InventoryError;
use crate::inventory::parse_inventory;
use crate::models::{Inventory, Network};
use crate::output::{render_graph, render_mermaid, OutputFormat};
use crate::processing::build_network;

#[derive(Debug, Clone, Copy)]
pub struct TopologyService {
    format: OutputFormat,
}

impl TopologyService {
    pub fn new(format: OutputFormat) -> TopologyService {
        TopologyService { format }
    }

    /// Build and render an already parsed inventory.
    pub fn render_inventory(&self, inventory: &Inventory) -> Result<String, InventoryError> {
        let network = build_network(inventory)?;
        self.render_network(&network)
    }

    pub fn render_network(&self, network: &Network) -> Result<String, InventoryError> {
        match self.format {
            OutputFormat::Graph => {
                let graph = render_graph(network)?;
                serde_json::to_string_pretty(&graph).map_err(InventoryError::Serialize)
            }
            OutputFormat::Mermaid => Ok(render_mermaid(network)?),
        }
    }

    /// Parse an uploaded document, rejecting unsupported file names before
    /// anything else, then build and render it.
    pub fn render_document(&self, filename: &str, text: &str) -> Result<String, InventoryError> {
        let inventory = parse_inventory(filename, text)?;
        self.render_inventory(&inventory)
    }
}
