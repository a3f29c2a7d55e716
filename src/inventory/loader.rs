//! Reading inventory documents from disk or an upload.

use crate::config::{JSON_EXTENSIONS, YAML_EXTENSIONS};
use crate::error::InventoryError;
use crate::models::Inventory;
use std::path::Path;

/// Serialization of an inventory document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file name; anything but `.yaml`, `.yml` or
    /// `.json` (case-insensitive) is rejected.
    pub fn from_filename(filename: &str) -> Result<DocumentFormat, InventoryError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if YAML_EXTENSIONS.contains(&extension.as_str()) {
            Ok(DocumentFormat::Yaml)
        } else if JSON_EXTENSIONS.contains(&extension.as_str()) {
            Ok(DocumentFormat::Json)
        } else {
            Err(InventoryError::UnsupportedFormat {
                filename: filename.to_string(),
            })
        }
    }
}

/// Error for anything left after the top-level JSON value.
pub(crate) fn trailing_content(e: serde_json::Error) -> InventoryError {
    InventoryError::Json {
        path: ".".to_string(),
        message: e.to_string(),
    }
}

/// Parse an inventory document whose format is given by `filename`.
pub fn parse_inventory(filename: &str, text: &str) -> Result<Inventory, InventoryError> {
    let format = DocumentFormat::from_filename(filename)?;
    log::debug!("parsing '{filename}' as {format:?} ({} bytes)", text.len());

    let inventory = match format {
        DocumentFormat::Json => {
            let mut deserializer = serde_json::Deserializer::from_str(text);
            let inventory: Inventory = serde_path_to_error::deserialize(&mut deserializer)?;
            deserializer.end().map_err(trailing_content)?;
            inventory
        }
        DocumentFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(inventory)
}

/// Read and parse an inventory file.
pub fn load_inventory(path: &Path) -> Result<Inventory, InventoryError> {
    let filename = path.to_string_lossy().to_string();
    // reject before touching the file
    DocumentFormat::from_filename(&filename)?;

    let text = std::fs::read_to_string(path).map_err(|source| InventoryError::Io {
        path: filename.clone(),
        source,
    })?;
    let inventory = parse_inventory(&filename, &text)?;
    log::info!("Read {} host(s) from {filename}", inventory.len());
    Ok(inventory)
}
