// src/chains/mod.rs
pub mod cosmos;

use crate::error::WalletResult;
use serde::{Deserialize, Serialize};

/// Per-chain settings: the bech32 human-readable part and the chain id that
/// goes into every sign doc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub name: String,
    pub address_prefix: String,
    pub chain_id: String,
}

// Cấu hình sẵn cho các mạng phổ biến
impl ChainConfig {
    pub fn bitsong() -> Self {
        Self {
            name: "BitSong".to_string(),
            address_prefix: "bitsong".to_string(),
            chain_id: "bitsong-2b".to_string(),
        }
    }

    pub fn cosmos_hub() -> Self {
        Self {
            name: "Cosmos Hub".to_string(),
            address_prefix: "cosmos".to_string(),
            chain_id: "cosmoshub-4".to_string(),
        }
    }

    pub fn osmosis() -> Self {
        Self {
            name: "Osmosis".to_string(),
            address_prefix: "osmo".to_string(),
            chain_id: "osmosis-1".to_string(),
        }
    }

    /// Load a config from JSON, e.g. `{"name":"..","address_prefix":"..","chain_id":".."}`.
    pub fn from_json(json: &str) -> WalletResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::bitsong()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;

    #[test]
    fn test_default_is_bitsong() {
        assert_eq!(ChainConfig::default().address_prefix, "bitsong");
    }

    #[test]
    fn test_from_json() {
        let config = ChainConfig::from_json(
            r#"{"name":"Test","address_prefix":"test","chain_id":"test-1"}"#,
        )
        .unwrap();
        assert_eq!(config.address_prefix, "test");
        assert_eq!(config.chain_id, "test-1");
    }

    #[test]
    fn test_from_json_missing_field() {
        assert!(matches!(
            ChainConfig::from_json(r#"{"name":"Test"}"#),
            Err(WalletError::Serialization(_))
        ));
    }
}
