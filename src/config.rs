//! Settings and constants.

use crate::error::InventoryError;

/// log4rs configuration file, relative to the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Inventory document extensions accepted at the boundary.
pub const YAML_EXTENSIONS: [&str; 2] = ["yaml", "yml"];
pub const JSON_EXTENSIONS: [&str; 1] = ["json"];

/// Env var holding the MAAS api key as `consumer:token:secret`.
pub const ENV_MAAS_APIKEY: &str = "MAAS_APIKEY";
/// Env var holding the MAAS region controller address.
pub const ENV_MAAS_IP: &str = "MAAS_IP";

pub const MAAS_PORT: u16 = 5240;
pub const MAAS_MACHINES_PATH: &str = "/MAAS/api/2.0/machines/";

/// Prefix of the daily inventory cache file.
pub const CACHE_FILE_PREFIX: &str = "maas_cache";

/// MAAS api key, split into its three parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey {
    pub consumer_key: String,
    pub token: String,
    pub secret: String,
}

impl ApiKey {
    pub fn parse(raw: &str) -> Result<ApiKey, InventoryError> {
        let parts: Vec<&str> = raw.trim().split(':').collect();
        match parts.as_slice() {
            [consumer_key, token, secret] if parts.iter().all(|p| !p.is_empty()) => Ok(ApiKey {
                consumer_key: consumer_key.to_string(),
                token: token.to_string(),
                secret: secret.to_string(),
            }),
            _ => Err(InventoryError::InvalidApiKey),
        }
    }
}

/// Connection settings for the MAAS fetch.
#[derive(Debug, Clone)]
pub struct MaasSettings {
    pub api_key: ApiKey,
    pub host: String,
}

impl MaasSettings {
    /// Read settings from the environment (after `dotenv` has run).
    pub fn from_env() -> Result<MaasSettings, InventoryError> {
        let api_key = std::env::var(ENV_MAAS_APIKEY)
            .map_err(|_| InventoryError::MissingSetting(ENV_MAAS_APIKEY))?;
        let host =
            std::env::var(ENV_MAAS_IP).map_err(|_| InventoryError::MissingSetting(ENV_MAAS_IP))?;
        Ok(MaasSettings {
            api_key: ApiKey::parse(&api_key)?,
            host,
        })
    }

    pub fn machines_url(&self) -> String {
        format!("http://{}:{}{}", self.host, MAAS_PORT, MAAS_MACHINES_PATH)
    }
}
