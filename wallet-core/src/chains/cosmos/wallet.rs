// wallet-core/src/chains/cosmos/wallet.rs
//
// Cosmos Wallet - mnemonic → key pair → bech32 address, plus tx signing

use crate::chains::cosmos::address::CosmosAddress;
use crate::chains::cosmos::sign_doc::SignMeta;
use crate::chains::cosmos::signer::{CosmosSigner, StdSignature};
use crate::crypto::entropy::EntropySource;
use crate::crypto::key_deriver::{KeyDeriver, KeyPair, COMPRESSED_PUBLIC_KEY_LEN};
use crate::crypto::mnemonic::WalletMnemonic;
use crate::error::WalletResult;
use serde_json::Value;
use zeroize::Zeroizing;

/// A key pair together with the bech32 prefix of one chain.
///
/// Địa chỉ không được cache: [`CosmosWallet::address`] tính lại từ public key
/// và prefix mỗi lần gọi.
#[derive(Clone)]
pub struct CosmosWallet {
    keypair: KeyPair,
    prefix: String,
}

impl std::fmt::Debug for CosmosWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmosWallet")
            .field("prefix", &self.prefix)
            .field("keypair", &self.keypair)
            .finish()
    }
}

impl CosmosWallet {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Restore a wallet from a mnemonic phrase (validated, including checksum).
    pub fn from_mnemonic(phrase: &str, prefix: &str) -> WalletResult<Self> {
        let mnemonic = WalletMnemonic::from_phrase(phrase)?;
        Self::from_wallet_mnemonic(&mnemonic, prefix)
    }

    pub fn from_wallet_mnemonic(mnemonic: &WalletMnemonic, prefix: &str) -> WalletResult<Self> {
        let keypair = KeyDeriver::derive_from_mnemonic(mnemonic)?;
        Self::from_keypair(keypair, prefix)
    }

    /// Wrap a raw 32-byte private key.
    pub fn from_private_key(private_key: &[u8], prefix: &str) -> WalletResult<Self> {
        Self::from_keypair(KeyPair::from_private_key(private_key)?, prefix)
    }

    /// Generate a brand-new mnemonic and the wallet derived from it.
    ///
    /// The mnemonic is returned so the caller can back it up; it is the only
    /// way to recover the keys.
    pub fn generate(
        source: &dyn EntropySource,
        prefix: &str,
    ) -> WalletResult<(WalletMnemonic, Self)> {
        let mnemonic = WalletMnemonic::generate(source)?;
        let wallet = Self::from_wallet_mnemonic(&mnemonic, prefix)?;
        Ok((mnemonic, wallet))
    }

    fn from_keypair(keypair: KeyPair, prefix: &str) -> WalletResult<Self> {
        // prefix is checked here so address() only fails on a broken invariant
        let address = CosmosAddress::derive(keypair.public_key(), prefix)?;
        tracing::debug!(%address, "derived cosmos wallet");
        Ok(Self {
            keypair,
            prefix: prefix.to_string(),
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// Bech32 address, recomputed from the public key on every call.
    pub fn address(&self) -> WalletResult<String> {
        CosmosAddress::derive(self.keypair.public_key(), &self.prefix)
    }

    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[inline]
    pub fn public_key(&self) -> &[u8; COMPRESSED_PUBLIC_KEY_LEN] {
        self.keypair.public_key()
    }

    pub fn public_key_hex(&self) -> String {
        hex::encode(self.keypair.public_key())
    }

    /// Hex private key, in a buffer that is wiped on drop.
    ///
    /// # Warning
    /// Never log or display this value.
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.keypair.private_key()))
    }

    #[inline]
    pub fn keypair(&self) -> &KeyPair {
        &self.keypair
    }

    // =========================================================================
    // SIGNING
    // =========================================================================

    pub fn signer(&self) -> WalletResult<CosmosSigner> {
        CosmosSigner::new(self.keypair.private_key())
    }

    /// Sign `tx` for the account described by `meta`; returns the signature
    /// object to attach to the transaction.
    pub fn sign(&self, tx: &Value, meta: &SignMeta) -> WalletResult<StdSignature> {
        self.signer()?.sign_tx(tx, meta)
    }
}
