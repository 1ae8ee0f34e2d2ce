//! Network naming.
//!
//! Providers report a raw, library-level network name ("homestead",
//! "matic"); the widget shows a friendly label instead.

use std::collections::HashMap;

use crate::models::{NetworkInfo, RawNetwork};

/// Raw name used when a chain id is not known.
pub const UNKNOWN_NETWORK: &str = "unknown";

/// Raw network name for a chain id, as Ethereum client libraries name them.
pub fn raw_network_name(chain_id: u64) -> &'static str {
    match chain_id {
        1 => "homestead",
        5 => "goerli",
        10 => "optimism",
        56 => "bnb",
        137 => "matic",
        8453 => "base",
        17000 => "holesky",
        42161 => "arbitrum",
        43114 => "avalanche",
        59144 => "linea",
        80001 => "maticmum",
        534352 => "scroll",
        11155111 => "sepolia",
        _ => UNKNOWN_NETWORK,
    }
}

/// Parse an EIP-1193 chain id (`"0x1"`) into a number.
pub fn parse_chain_id(hex: &str) -> Option<u64> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    u64::from_str_radix(digits, 16).ok()
}

const BUILTIN_NAMES: &[(&str, &str)] = &[
    ("homestead", "Ethereum Mainnet"),
    ("goerli", "Goerli Testnet"),
    ("sepolia", "Sepolia Testnet"),
    ("holesky", "Holesky Testnet"),
    ("matic", "Polygon"),
    ("maticmum", "Polygon Mumbai"),
    ("optimism", "Optimism"),
    ("arbitrum", "Arbitrum One"),
    ("base", "Base"),
    ("bnb", "BNB Smart Chain"),
    ("linea", "Linea"),
    ("scroll", "Scroll"),
    ("avalanche", "Avalanche C-Chain"),
];

/// Lookup table from raw network name to display label.
#[derive(Clone, Debug, Default)]
pub struct NetworkNames {
    names: HashMap<String, String>,
}

impl NetworkNames {
    /// Table covering the networks the storefront knows about.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_NAMES.iter().copied())
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(raw, friendly)| (raw.into(), friendly.into()))
                .collect(),
        }
    }

    pub fn friendly_name<'a>(&'a self, raw_name: &'a str) -> &'a str {
        self.names
            .get(raw_name)
            .map(String::as_str)
            .unwrap_or(raw_name)
    }

    pub fn resolve(&self, raw: RawNetwork) -> NetworkInfo {
        let friendly_name = self.friendly_name(&raw.name).to_string();
        NetworkInfo {
            chain_id: raw.chain_id,
            raw_name: raw.name,
            friendly_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_network_name() {
        assert_eq!(raw_network_name(1), "homestead");
        assert_eq!(raw_network_name(137), "matic");
        assert_eq!(raw_network_name(11155111), "sepolia");
        assert_eq!(raw_network_name(999_999), UNKNOWN_NETWORK);
    }

    #[test]
    fn test_parse_chain_id() {
        assert_eq!(parse_chain_id("0x1"), Some(1));
        assert_eq!(parse_chain_id("0x89"), Some(137));
        assert_eq!(parse_chain_id("0xaa36a7"), Some(11155111));
        assert_eq!(parse_chain_id("zz"), None);
    }

    #[test]
    fn test_friendly_name_falls_back_to_raw() {
        let names = NetworkNames::builtin();
        assert_eq!(names.friendly_name("homestead"), "Ethereum Mainnet");
        assert_eq!(names.friendly_name("matic"), "Polygon");
        assert_eq!(names.friendly_name("devnet-7"), "devnet-7");
    }

    #[test]
    fn test_resolve_keeps_raw_fields() {
        let names = NetworkNames::from_pairs([("homestead", "Mainnet")]);
        let info = names.resolve(RawNetwork::new(1, "homestead"));
        assert_eq!(info, NetworkInfo::new(1, "homestead", "Mainnet"));

        let unknown = NetworkNames::default().resolve(RawNetwork::new(1, "homestead"));
        assert_eq!(unknown.friendly_name, "homestead");
    }
}
