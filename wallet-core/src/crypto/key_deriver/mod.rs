// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine
//
// ┌──────────────────────────────────────────────┐
// │  Mnemonic (BIP-39)                           │
// │      │  PBKDF2-HMAC-SHA512                   │
// │      ▼                                       │
// │  Seed (64 bytes)                             │
// │      │  BIP-32, m/44'/118'/0'/0/0            │
// │      ▼                                       │
// │  secp256k1 private key (32 bytes)            │
// │      │                                       │
// │      ▼                                       │
// │  compressed public key (33 bytes)            │
// └──────────────────────────────────────────────┘

pub mod secp256k1;

pub use secp256k1::{Secp256k1Deriver, COMPRESSED_PUBLIC_KEY_LEN};

use crate::crypto::mnemonic::WalletMnemonic;
use crate::crypto::paths::DerivationPaths;
use crate::error::{CryptoError, WalletError, WalletResult};
use zeroize::Zeroizing;

// =============================================================================
// KEY PAIR
// =============================================================================

/// secp256k1 key pair: private scalar plus its compressed public point.
///
/// The private key is opaque secret material. It is zeroized on drop and
/// never shown by `Debug`.
#[derive(Clone)]
pub struct KeyPair {
    private_key: Zeroizing<[u8; 32]>,
    public_key: [u8; COMPRESSED_PUBLIC_KEY_LEN],
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(self.public_key))
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl KeyPair {
    /// Tạo key pair từ private key 32 bytes.
    pub fn from_private_key(private_key: &[u8]) -> WalletResult<Self> {
        let public_key = Secp256k1Deriver::public_key(private_key)?;

        let mut secret = Zeroizing::new([0u8; 32]);
        secret.copy_from_slice(private_key);

        Ok(Self {
            private_key: secret,
            public_key,
        })
    }

    #[inline]
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    #[inline]
    pub fn public_key(&self) -> &[u8; COMPRESSED_PUBLIC_KEY_LEN] {
        &self.public_key
    }
}

// =============================================================================
// DERIVER
// =============================================================================

/// Entry point for wallet key derivation.
///
/// The derivation path is fixed to [`DerivationPaths::COSMOS_0`].
pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive key pair của ví từ seed BIP-39 (64 bytes).
    pub fn derive(seed: &[u8]) -> WalletResult<KeyPair> {
        Self::validate_seed(seed)?;

        let private_key = Secp256k1Deriver::derive(seed, DerivationPaths::COSMOS_0)?;
        KeyPair::from_private_key(&*private_key)
    }

    /// Validate, stretch and derive in one step.
    pub fn derive_from_mnemonic(mnemonic: &WalletMnemonic) -> WalletResult<KeyPair> {
        let seed = mnemonic.to_seed(None)?;
        Self::derive(&*seed)
    }

    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if seed.len() != 64 {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid seed length: expected 64 bytes, got {}",
                seed.len()
            ))));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
