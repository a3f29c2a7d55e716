//! Error types.
//!
//! [`TopologyError`] is raised by the core (registry, builder, renderers).
//! [`InventoryError`] covers everything around it: reading documents,
//! talking to MAAS and the cache file.

use thiserror::Error;

/// Failures raised while building or rendering a topology.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    /// The positional lists of one host record disagree in length.
    #[error("host '{host}': {ips} ips but {subnets} subnets")]
    CardinalityMismatch {
        host: String,
        ips: usize,
        subnets: usize,
    },

    /// The `interfaces` name list disagrees in length with `ips`.
    #[error("host '{host}': {names} interface names but {ips} ips")]
    InterfaceNamesMismatch {
        host: String,
        names: usize,
        ips: usize,
    },

    /// A subnet string does not parse as an IPv4 network.
    #[error("malformed CIDR '{cidr}': {reason}")]
    MalformedCidr { cidr: String, reason: String },

    /// An address string is neither an IPv4 literal nor the unset marker.
    #[error("host '{host}': malformed IPv4 address '{address}'")]
    MalformedAddress { host: String, address: String },

    /// Two entities normalize to the same display id.
    #[error("duplicate display id '{id}'")]
    DuplicateIdentifier { id: String },

    /// A display id contains characters Mermaid reads as syntax.
    #[error("display id '{id}' cannot be used as a Mermaid node id")]
    UnsupportedDiagramId { id: String },
}

/// Failures at the document / fetch boundary.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("unsupported inventory file '{filename}', expected .yaml, .yml or .json")]
    UnsupportedFormat { filename: String },

    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON at path={path}: {message}")]
    Json { path: String, message: String },

    #[error("error serializing output: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("MAAS request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("missing setting: {0}")]
    MissingSetting(&'static str),

    #[error("MAAS api key must look like 'consumer:token:secret'")]
    InvalidApiKey,

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

impl From<serde_path_to_error::Error<serde_json::Error>> for InventoryError {
    fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
        InventoryError::Json {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    }
}
