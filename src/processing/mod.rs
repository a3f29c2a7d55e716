//! Building a topology from inventory records.
//!
//! - [`registry`] - Subnet canonicalization and de-duplication
//! - [`builder`] - Record to [`Network`](crate::models::Network) conversion

mod builder;
mod registry;

pub use builder::build_network;
pub use registry::SubnetRegistry;
