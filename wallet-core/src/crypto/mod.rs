// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Entropy**: injected randomness for new phrases via [`EntropySource`].
//! - **Mnemonic**: BIP-39 phrases and seeds via [`WalletMnemonic`].
//! - **Key Derivation**: BIP-32 secp256k1 keys on the Cosmos path via [`KeyDeriver`].
//! - **Derivation Paths**: the fixed `m/44'/118'/0'/0/0` path via [`DerivationPaths`].

pub mod entropy;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

// Re-exports for cleaner API access
pub use entropy::{EntropySource, OsEntropy};
pub use key_deriver::{KeyDeriver, KeyPair, Secp256k1Deriver};
pub use mnemonic::WalletMnemonic;
pub use paths::DerivationPaths;
