// wallet-core/src/lib.rs

//! Cosmos SDK wallet core
//!
//! Derives a secp256k1 key pair from a BIP-39 mnemonic on `m/44'/118'/0'/0/0`,
//! computes the bech32 account address, and signs transactions in the legacy
//! amino JSON format:
//!
//! ```rust,ignore
//! use cosmos_wallet_core::chains::cosmos::{attach_signature, build_broadcast_body, CosmosWallet, SignMeta};
//!
//! let wallet = CosmosWallet::from_mnemonic(phrase, "bitsong")?;
//! let signature = wallet.sign(&tx, &SignMeta::new("0", "1", "bitsong-2b"))?;
//! let body = build_broadcast_body(&attach_signature(&tx, &signature)?)?;
//! ```
//!
//! Everything here is synchronous and stateless; secret material is kept in
//! zeroizing buffers and never logged.

pub mod api;
pub mod chains;
pub mod crypto;
pub mod error;

pub use chains::cosmos::{CosmosAddress, CosmosSigner, CosmosWallet, SignMeta, StdSignature};
pub use chains::ChainConfig;
pub use crypto::{EntropySource, KeyPair, OsEntropy, WalletMnemonic};
pub use error::{CryptoError, MnemonicError, TransactionError, WalletError, WalletResult};
