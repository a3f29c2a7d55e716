//! MAAS machine listing.
//!
//! Fetches `/MAAS/api/2.0/machines/` and flattens every machine into a
//! [`HostRecord`], keeping address, subnet and interface name paired.

use crate::config::{ApiKey, MaasSettings};
use super::loader::trailing_content;
use crate::error::InventoryError;
use crate::models::{HostRecord, Inventory, UNSET_IP};
use serde::Deserialize;

/// The parts of a MAAS machine the topology needs.
#[derive(Deserialize, Debug, Clone)]
pub struct Machine {
    pub system_id: String,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub interface_set: Vec<MachineInterface>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MachineInterface {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub links: Vec<InterfaceLink>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct InterfaceLink {
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub subnet: Option<LinkSubnet>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LinkSubnet {
    pub cidr: String,
}

/// OAuth 1.0 PLAINTEXT `Authorization` header value.
pub fn authorization_header(key: &ApiKey, nonce: &str, timestamp: i64) -> String {
    format!(
        "OAuth oauth_version=1.0, oauth_signature_method=PLAINTEXT, \
         oauth_consumer_key={}, oauth_token={}, oauth_signature=&{}, \
         oauth_nonce={nonce}, oauth_timestamp={timestamp}",
        key.consumer_key, key.token, key.secret
    )
}

/// Convert machines into inventory records keyed by `system_id`.
///
/// One entry per link that has a subnet; a link without an address is
/// recorded as unset. Repeated (address, subnet, interface) triples are
/// only kept once.
pub fn machines_to_inventory(machines: &[Machine]) -> Inventory {
    let mut inventory = Inventory::new();

    for machine in machines {
        let mut record = HostRecord {
            hostname: machine.hostname.clone(),
            ips: Vec::new(),
            subnets: Vec::new(),
            interfaces: Some(Vec::new()),
        };
        let mut seen = Vec::new();

        for iface in &machine.interface_set {
            for link in &iface.links {
                let Some(subnet) = &link.subnet else {
                    log::trace!("{}: link on {} has no subnet", machine.system_id, iface.name);
                    continue;
                };
                let ip = link
                    .ip_address
                    .as_deref()
                    .filter(|ip| !ip.is_empty())
                    .unwrap_or(UNSET_IP);
                let triple = (ip.to_string(), subnet.cidr.clone(), iface.name.clone());
                if seen.contains(&triple) {
                    continue;
                }
                record.ips.push(triple.0.clone());
                record.subnets.push(triple.1.clone());
                if let Some(names) = record.interfaces.as_mut() {
                    names.push(triple.2.clone());
                }
                seen.push(triple);
            }
        }

        if !inventory.insert(&machine.system_id, record) {
            log::warn!("duplicate MAAS system_id '{}' ignored", machine.system_id);
        }
    }
    inventory
}

/// Parse a machine listing, rejecting anything after the JSON array.
pub fn parse_machines(body: &str) -> Result<Vec<Machine>, InventoryError> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    let machines: Vec<Machine> = serde_path_to_error::deserialize(&mut deserializer)?;
    deserializer.end().map_err(trailing_content)?;
    Ok(machines)
}

/// Client for the MAAS region API.
pub struct MaasClient {
    settings: MaasSettings,
    http: reqwest::Client,
}

impl MaasClient {
    pub fn new(settings: MaasSettings) -> MaasClient {
        MaasClient {
            settings,
            http: reqwest::Client::new(),
        }
    }

    /// List every machine known to MAAS.
    pub async fn fetch_machines(&self) -> Result<Vec<Machine>, InventoryError> {
        let url = self.settings.machines_url();
        let header = authorization_header(
            &self.settings.api_key,
            &uuid::Uuid::new_v4().to_string(),
            chrono::Utc::now().timestamp(),
        );
        log::debug!("GET {url}");

        let body = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, header)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let machines = parse_machines(&body).map_err(|e| {
            log::error!("OUTPUT START:\n\n{body}\n\nOUTPUT END\n");
            e
        })?;
        log::info!("Got {} machine(s) from {url}", machines.len());
        Ok(machines)
    }

    pub async fn fetch_inventory(&self) -> Result<Inventory, InventoryError> {
        let machines = self.fetch_machines().await?;
        Ok(machines_to_inventory(&machines))
    }
}
