// wallet-core/src/chains/cosmos/mod.rs

//! Cosmos SDK Chain Support (amino JSON signing)
//!
//! # Pipeline
//! ```text
//! mnemonic ─► KeyPair ─► CosmosAddress::derive ─► "bitsong1..."
//!
//! tx + SignMeta ─► build_sign_message ─► canonical string
//!               ─► sign_message (SHA-256 + ECDSA) ─► create_signature
//!               ─► attach_signature ─► build_broadcast_body
//! ```
//!
//! - **Address**: bech32(RIPEMD160(SHA256(pubkey))) via [`CosmosAddress`].
//! - **Canonical JSON**: sorted keys, nulls dropped, via [`canonicalize`].
//! - **Sign Doc**: the `StdSignDoc` envelope via [`build_sign_message`].
//! - **Signing**: RFC 6979 secp256k1 via [`CosmosSigner`] / [`sign_message`].
//! - **Assembly**: [`attach_signature`] and [`build_broadcast_body`].

pub mod address;
pub mod canonical;
pub mod sign_doc;
pub mod signer;
pub mod tx;
pub mod wallet;

// Re-exports for cleaner API access
pub use address::CosmosAddress;
pub use canonical::{canonicalize, to_canonical_string};
pub use sign_doc::{build_sign_message, SignMeta};
pub use signer::{
    create_signature, sign_message, verify_message, CosmosSigner, PubKey, StdSignature,
    PUB_KEY_TYPE,
};
pub use tx::{attach_signature, build_broadcast_body, BroadcastMode};
pub use wallet::CosmosWallet;
