use serde::{Deserialize, Serialize};

/// Network identity exactly as the provider reports it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNetwork {
    pub chain_id: u64,
    pub name: String,
}

impl RawNetwork {
    pub fn new(chain_id: u64, name: impl Into<String>) -> Self {
        Self {
            chain_id,
            name: name.into(),
        }
    }
}

/// Network identity with its display label resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub chain_id: u64,
    pub raw_name: String,
    pub friendly_name: String,
}

impl NetworkInfo {
    pub fn new(
        chain_id: u64,
        raw_name: impl Into<String>,
        friendly_name: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            raw_name: raw_name.into(),
            friendly_name: friendly_name.into(),
        }
    }
}
