// wallet-core/src/chains/cosmos/signer.rs
//
// Cosmos Signer Module - amino JSON signing with secp256k1
// SHA-256 pre-hash, RFC 6979 deterministic nonce, low-S normalized (r || s)

use crate::chains::cosmos::sign_doc::{build_sign_message, SignMeta};
use crate::crypto::key_deriver::{secp256k1::signing_key, COMPRESSED_PUBLIC_KEY_LEN};
use crate::error::{CryptoError, WalletError, WalletResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use k256::ecdsa::{
    signature::hazmat::{PrehashSigner, PrehashVerifier},
    Signature, SigningKey, VerifyingKey,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Amino type tag for secp256k1 public keys.
pub const PUB_KEY_TYPE: &str = "tendermint/PubKeySecp256k1";

/// `{ "type": "tendermint/PubKeySecp256k1", "value": <base64> }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubKey {
    #[serde(rename = "type")]
    pub key_type: String,
    pub value: String,
}

/// Signature object attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdSignature {
    pub signature: String,
    pub pub_key: PubKey,
}

// =============================================================================
// STATELESS API
// =============================================================================

/// Sign a sign-doc string: `ECDSA(SHA256(utf8(message)))`.
///
/// # Returns
/// 64 bytes `r || s`, no recovery id. Signing the same message with the same
/// key always yields the same bytes.
pub fn sign_message(message: &str, private_key: &[u8]) -> WalletResult<[u8; 64]> {
    let key = signing_key(private_key)?;
    sign_with(&key, message)
}

/// Verify a 64-byte `r || s` signature over `message` against a compressed public key.
pub fn verify_message(message: &str, signature: &[u8], public_key: &[u8]) -> WalletResult<bool> {
    let verifying_key = VerifyingKey::from_sec1_bytes(public_key).map_err(|e| {
        WalletError::Crypto(CryptoError::InvalidPublicKey(e.to_string()))
    })?;
    let signature = match Signature::from_slice(signature) {
        Ok(signature) => signature,
        Err(_) => return Ok(false),
    };

    let hash = Sha256::digest(message.as_bytes());
    Ok(verifying_key.verify_prehash(&hash, &signature).is_ok())
}

/// Wrap raw signature bytes and the signer's public key into a [`StdSignature`].
pub fn create_signature(signature: &[u8; 64], public_key: &[u8; COMPRESSED_PUBLIC_KEY_LEN]) -> StdSignature {
    StdSignature {
        signature: STANDARD.encode(signature),
        pub_key: PubKey {
            key_type: PUB_KEY_TYPE.to_string(),
            value: STANDARD.encode(public_key),
        },
    }
}

fn sign_with(key: &SigningKey, message: &str) -> WalletResult<[u8; 64]> {
    let hash = Sha256::digest(message.as_bytes());
    let signature: Signature = key
        .sign_prehash(&hash)
        .map_err(|e| WalletError::Crypto(CryptoError::SigningFailed(e.to_string())))?;
    let signature = signature.normalize_s().unwrap_or(signature);

    let mut out = [0u8; 64];
    out.copy_from_slice(&signature.to_bytes());
    Ok(out)
}

// =============================================================================
// SIGNER
// =============================================================================

/// Cosmos Signer - holds one secp256k1 key and signs amino sign docs with it.
///
/// # Security
/// - `SigningKey` zeroizes its scalar on drop
/// - Custom `Debug` shows only the public key
pub struct CosmosSigner {
    key: SigningKey,
    public_key: [u8; COMPRESSED_PUBLIC_KEY_LEN],
}

impl std::fmt::Debug for CosmosSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmosSigner")
            .field("public_key", &hex::encode(self.public_key))
            .finish_non_exhaustive()
    }
}

impl CosmosSigner {
    /// # Arguments
    /// * `private_key` - 32-byte secp256k1 scalar
    pub fn new(private_key: &[u8]) -> WalletResult<Self> {
        let key = signing_key(private_key)?;

        let mut public_key = [0u8; COMPRESSED_PUBLIC_KEY_LEN];
        public_key.copy_from_slice(key.verifying_key().to_encoded_point(true).as_bytes());

        Ok(Self { key, public_key })
    }

    #[inline]
    pub fn public_key(&self) -> &[u8; COMPRESSED_PUBLIC_KEY_LEN] {
        &self.public_key
    }

    /// Sign an already-built sign doc string.
    pub fn sign_message(&self, message: &str) -> WalletResult<[u8; 64]> {
        sign_with(&self.key, message)
    }

    /// Full pipeline: build the sign doc for `tx`, sign it and wrap the result.
    pub fn sign_tx(&self, tx: &Value, meta: &SignMeta) -> WalletResult<StdSignature> {
        let message = build_sign_message(tx, meta)?;
        let signature = self.sign_message(&message)?;

        tracing::debug!(chain_id = %meta.chain_id, "signed amino transaction");
        Ok(create_signature(&signature, &self.public_key))
    }

    pub fn verify_message(&self, message: &str, signature: &[u8]) -> bool {
        verify_message(message, signature, &self.public_key).unwrap_or(false)
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
