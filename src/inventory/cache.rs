//! Cache of the MAAS inventory.
//!
//! Avoids hitting the MAAS API on every run: the inventory is written to a
//! dated JSON file and read back from it for the rest of the day.

use super::loader::load_inventory;
use super::maas::MaasClient;
use crate::config::{MaasSettings, CACHE_FILE_PREFIX};
use crate::error::InventoryError;
use crate::models::Inventory;
use std::path::Path;

/// Default cache file name for today, e.g. `maas_cache_2024-05-01.json`.
pub fn default_cache_file() -> String {
    format!(
        "{CACHE_FILE_PREFIX}_{}.json",
        chrono::Local::now().format("%Y-%m-%d")
    )
}

/// Read the inventory from a cache file, or fetch it from MAAS if the cache
/// doesn't exist.
///
/// # Arguments
/// * `cache_file` - Optional path to a specific cache file, which must exist.
///   If None, uses today's default cache file.
pub async fn read_inventory_cache(cache_file: Option<&str>) -> Result<Inventory, InventoryError> {
    let cache_file = match cache_file {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(InventoryError::Io {
                    path: file.to_string(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "cache file does not exist",
                    ),
                });
            }
            log::info!("Using provided cache file: {file}");
            file.to_string()
        }
        None => default_cache_file(),
    };

    if Path::new(&cache_file).exists() {
        log::info!("Reading from cache file: {cache_file}");
        return load_inventory(Path::new(&cache_file));
    }

    log::warn!("Cache file not found: {cache_file}");
    let client = MaasClient::new(MaasSettings::from_env()?);
    let inventory = client.fetch_inventory().await?;

    let json = serde_json::to_string_pretty(&inventory).map_err(InventoryError::Serialize)?;
    log::warn!("Writing inventory to cache file: {cache_file}");
    std::fs::write(&cache_file, json).map_err(|source| InventoryError::Io {
        path: cache_file.clone(),
        source,
    })?;
    Ok(inventory)
}
