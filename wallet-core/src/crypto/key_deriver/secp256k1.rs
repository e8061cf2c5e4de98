// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation - BIP-32 / BIP-44
//
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use crate::error::{CryptoError, WalletError, WalletResult};
use bip32::{DerivationPath, XPrv};
use k256::ecdsa::SigningKey;
use std::str::FromStr;
use zeroize::Zeroizing;

/// Length of a SEC1 compressed secp256k1 point.
pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;

/// secp256k1 Key Deriver - BIP-32 Standard
///
/// # Security
/// - Private keys are wrapped in `Zeroizing<[u8; 32]>`
/// - Intermediate extended keys are dropped as soon as the next level is derived
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Derive a single private key from seed + path.
    ///
    /// # Arguments
    /// * `seed` - 64 bytes BIP-39 seed
    /// * `path` - Derivation path (e.g. "m/44'/118'/0'/0/0")
    pub fn derive(seed: &[u8], path: &str) -> WalletResult<Zeroizing<[u8; 32]>> {
        let root_xprv = XPrv::new(seed).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Failed to create master key: {}",
                e
            )))
        })?;

        let derivation_path = DerivationPath::from_str(path).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid path '{}': {}",
                path, e
            )))
        })?;

        let mut child = root_xprv;
        for child_num in derivation_path {
            child = child.derive_child(child_num).map_err(|e| {
                WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Child derivation failed: {}",
                    e
                )))
            })?;
        }

        let key_bytes: [u8; 32] = child.private_key().to_bytes().into();
        Ok(Zeroizing::new(key_bytes))
    }

    /// Compute the 33-byte compressed public key for a private scalar.
    ///
    /// Fails with [`CryptoError::InvalidPrivateKey`] when the scalar is zero,
    /// not below the curve order, or not 32 bytes long.
    pub fn public_key(private_key: &[u8]) -> WalletResult<[u8; COMPRESSED_PUBLIC_KEY_LEN]> {
        let signing_key = signing_key(private_key)?;
        let encoded = signing_key.verifying_key().to_encoded_point(true);

        let mut public_key = [0u8; COMPRESSED_PUBLIC_KEY_LEN];
        public_key.copy_from_slice(encoded.as_bytes());
        Ok(public_key)
    }
}

/// Parse a raw private scalar into a k256 signing key.
pub(crate) fn signing_key(private_key: &[u8]) -> WalletResult<SigningKey> {
    // k256 zero-pads short slices; a scalar must be exactly 32 bytes here
    if private_key.len() != 32 {
        return Err(WalletError::Crypto(CryptoError::InvalidPrivateKey(format!(
            "expected 32 bytes, got {}",
            private_key.len()
        ))));
    }

    SigningKey::from_slice(private_key).map_err(|e| {
        WalletError::Crypto(CryptoError::InvalidPrivateKey(format!(
            "scalar must be non-zero and below the curve order: {}",
            e
        )))
    })
}

// =============================================================================
// TESTS
// =============================================================================
