//! Network topology from a host inventory.
//!
//! Inventory records (hosts with interfaces bound to subnets) are built into
//! a de-duplicated [`Network`](models::Network), which is rendered either as
//! a node-link graph for force-directed visualization or as a Mermaid
//! diagram.
//!
//! ```
//! use network_topology::{build_network, render_mermaid, Inventory};
//!
//! let doc = r#"{"h1": {"hostname": "Node1", "ips": ["10.0.0.5"], "subnets": ["10.0.0.0/24"]}}"#;
//! let inventory: Inventory = serde_json::from_str(doc).unwrap();
//! let network = build_network(&inventory).unwrap();
//! assert!(render_mermaid(&network).unwrap().contains("Node1 -->|: 10.0.0.5| Subnet_1"));
//! ```

pub mod config;
pub mod error;
pub mod inventory;
pub mod models;
pub mod output;
pub mod processing;
pub mod service;

pub use error::{InventoryError, TopologyError};
pub use models::{HostRecord, Inventory, Network};
pub use output::{render_graph, render_mermaid, OutputFormat, TopologyGraph};
pub use processing::build_network;
pub use service::TopologyService;
