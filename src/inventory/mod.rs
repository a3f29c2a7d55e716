//! Getting inventory documents into the core.
//!
//! - [`loader`] - YAML / JSON documents from a file or an upload
//! - [`maas`] - Machine listing from the MAAS API
//! - [`cache`] - Dated cache of the MAAS inventory

mod cache;
mod loader;
mod maas;

pub use cache::{default_cache_file, read_inventory_cache};
pub use loader::{load_inventory, parse_inventory, DocumentFormat};
pub use maas::{authorization_header, machines_to_inventory, parse_machines, Machine, MaasClient};
