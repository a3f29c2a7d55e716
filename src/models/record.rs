//! Raw inventory records, as produced by the MAAS fetch or an uploaded file.
//!
//! ```yaml
//! abc123:
//!   hostname: node1
//!   ips: ["10.0.0.5", "None"]
//!   subnets: ["10.0.0.0/24", "10.0.1.0/24"]
//! ```

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Marker used in `ips` for an interface without a lease.
pub const UNSET_IP: &str = "None";

/// One host of the inventory. `ips`, `subnets` and (when present)
/// `interfaces` are paired by position.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, deserialize_with = "ips_or_unset")]
    pub ips: Vec<String>,
    #[serde(default)]
    pub subnets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<Vec<String>>,
}

impl HostRecord {
    /// Hostname when present and non-empty.
    pub fn declared_hostname(&self) -> Option<&str> {
        self.hostname.as_deref().filter(|h| !h.is_empty())
    }
}

/// `null` entries (YAML dumps of unset addresses) read as [`UNSET_IP`].
fn ips_or_unset<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let ips: Vec<Option<String>> = Vec::deserialize(deserializer)?;
    Ok(ips
        .into_iter()
        .map(|ip| ip.unwrap_or_else(|| UNSET_IP.to_string()))
        .collect())
}

/// The whole inventory document, keyed by host key, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    hosts: Vec<(String, HostRecord)>,
}

impl Inventory {
    pub fn new() -> Inventory {
        Inventory { hosts: Vec::new() }
    }

    /// Append a host. Returns false and leaves the inventory untouched when
    /// the key is already present.
    pub fn insert(&mut self, key: &str, record: HostRecord) -> bool {
        if self.get(key).is_some() {
            return false;
        }
        self.hosts.push((key.to_string(), record));
        true
    }

    pub fn get(&self, key: &str) -> Option<&HostRecord> {
        self.hosts.iter().find(|(k, _)| k == key).map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HostRecord)> {
        self.hosts.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

impl Serialize for Inventory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.hosts.len()))?;
        for (key, record) in &self.hosts {
            map.serialize_entry(key, record)?;
        }
        map.end()
    }
}

struct InventoryVisitor;

impl<'de> Visitor<'de> for InventoryVisitor {
    type Value = Inventory;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of host key to host record")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Inventory, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut hosts = Vec::with_capacity(access.size_hint().unwrap_or(0));
        let mut seen = HashSet::new();
        while let Some((key, record)) = access.next_entry::<String, HostRecord>()? {
            if !seen.insert(key.clone()) {
                return Err(de::Error::custom(format!("duplicate host key '{key}'")));
            }
            hosts.push((key, record));
        }
        Ok(Inventory { hosts })
    }

    // An empty YAML document parses as unit.
    fn visit_unit<E>(self) -> Result<Inventory, E>
    where
        E: de::Error,
    {
        Ok(Inventory::new())
    }
}

impl<'de> Deserialize<'de> for Inventory {
    fn deserialize<D>(deserializer: D) -> Result<Inventory, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(InventoryVisitor)
    }
}

impl FromIterator<(String, HostRecord)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (String, HostRecord)>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        for (key, record) in iter {
            inventory.insert(&key, record);
        }
        inventory
    }
}
