// wallet-core/src/chains/cosmos/address.rs
//
// Cosmos Address Module - bech32(prefix, RIPEMD160(SHA256(pubkey)))

use crate::crypto::key_deriver::{Secp256k1Deriver, COMPRESSED_PUBLIC_KEY_LEN};
use crate::error::{CryptoError, WalletError, WalletResult};
use bech32::{Bech32, Hrp};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Size of the address payload (RIPEMD-160 digest).
pub const ADDRESS_LEN: usize = 20;

/// Cosmos SDK bech32 address generator
///
/// # Flow:  Public Key (33B, compressed) → SHA-256 → RIPEMD-160 (20B) → bech32(prefix)
///
/// Only compressed keys are accepted. An uncompressed (65-byte) key hashes to a
/// different account, so it is rejected instead of silently converted.
pub struct CosmosAddress;

impl CosmosAddress {
    // =========================================================================
    // CORE: Public Key → Address Bytes (20 bytes)
    // =========================================================================

    /// `RIPEMD160(SHA256(public_key))`, after checking the key is a valid
    /// compressed secp256k1 point.
    pub fn derive_bytes(public_key: &[u8]) -> WalletResult<[u8; ADDRESS_LEN]> {
        Self::validate_public_key(public_key)?;

        let sha = Sha256::digest(public_key);
        let digest = Ripemd160::digest(sha);

        let mut address = [0u8; ADDRESS_LEN];
        address.copy_from_slice(&digest);
        Ok(address)
    }

    /// Derive the bech32 address string for `public_key` under `prefix`.
    ///
    /// # Returns
    /// `"cosmos19rl4cm2hmr8afy4kldpxz3fka4jguq0auqdal4"`-style string
    pub fn derive(public_key: &[u8], prefix: &str) -> WalletResult<String> {
        let bytes = Self::derive_bytes(public_key)?;
        Self::encode(&bytes, prefix)
    }

    /// Convenience: private key → public key → address.
    pub fn from_private_key(private_key: &[u8], prefix: &str) -> WalletResult<String> {
        let public_key = Secp256k1Deriver::public_key(private_key)?;
        Self::derive(&public_key, prefix)
    }

    /// bech32-encode raw address bytes (8-bit → 5-bit regrouping is done by the codec).
    pub fn encode(data: &[u8], prefix: &str) -> WalletResult<String> {
        let hrp = Hrp::parse(prefix)
            .map_err(|_| WalletError::Crypto(CryptoError::InvalidPrefix(prefix.to_string())))?;

        bech32::encode::<Bech32>(hrp, data)
            .map_err(|e| WalletError::Crypto(CryptoError::InvalidAddress(e.to_string())))
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// Decode and check an address: bech32 checksum, optional expected prefix,
    /// 20-byte payload.
    ///
    /// # Returns
    /// `(prefix, payload)`
    pub fn validate(address: &str, expected_prefix: Option<&str>) -> WalletResult<(String, Vec<u8>)> {
        let (hrp, data) = bech32::decode(address)
            .map_err(|e| WalletError::Crypto(CryptoError::InvalidAddress(e.to_string())))?;

        let prefix = hrp.to_lowercase();
        if let Some(expected) = expected_prefix {
            if prefix != expected {
                return Err(WalletError::Crypto(CryptoError::InvalidAddress(format!(
                    "expected prefix '{}', got '{}'",
                    expected, prefix
                ))));
            }
        }

        if data.len() != ADDRESS_LEN {
            return Err(WalletError::Crypto(CryptoError::InvalidAddress(format!(
                "expected {} bytes of address data, got {}",
                ADDRESS_LEN,
                data.len()
            ))));
        }

        Ok((prefix, data))
    }

    #[inline]
    pub fn is_valid(address: &str, expected_prefix: Option<&str>) -> bool {
        Self::validate(address, expected_prefix).is_ok()
    }

    /// Re-encode the same account under another chain's prefix.
    pub fn convert_prefix(address: &str, new_prefix: &str) -> WalletResult<String> {
        let (_, data) = Self::validate(address, None)?;
        Self::encode(&data, new_prefix)
    }

    fn validate_public_key(public_key: &[u8]) -> WalletResult<()> {
        if public_key.len() != COMPRESSED_PUBLIC_KEY_LEN {
            return Err(WalletError::Crypto(CryptoError::InvalidPublicKey(format!(
                "expected {} bytes (compressed), got {}",
                COMPRESSED_PUBLIC_KEY_LEN,
                public_key.len()
            ))));
        }

        if !matches!(public_key[0], 0x02 | 0x03) {
            return Err(WalletError::Crypto(CryptoError::InvalidPublicKey(format!(
                "invalid compressed point prefix 0x{:02x}",
                public_key[0]
            ))));
        }

        k256::PublicKey::from_sec1_bytes(public_key).map_err(|_| {
            WalletError::Crypto(CryptoError::InvalidPublicKey(
                "not a point on secp256k1".to_string(),
            ))
        })?;

        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
