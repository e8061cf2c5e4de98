// wallet-core/src/crypto/paths.rs
//
// Derivation Paths - BIP-44 path for Cosmos SDK keys
// BIP-44 (Purpose), SLIP-44 (Coin Types)

/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const COSMOS: u32 = 118;
}

/// Các derivation path mà ví sử dụng.
///
/// Only the first Cosmos account is supported: `m/44'/118'/0'/0/0`
/// (hardened purpose/coin/account, non-hardened change/index).
pub struct DerivationPaths;

impl DerivationPaths {
    /// Path duy nhất, mọi key của ví đều derive từ đây.
    pub const COSMOS_0: &'static str = "m/44'/118'/0'/0/0";
}
