// wallet-core/src/crypto/entropy.rs
//
// Entropy Sources - injected randomness for mnemonic generation

use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroizing;

/// Randomness strategy used when generating a new mnemonic.
///
/// Implementations return `byte_count` random bytes as a lowercase hex string.
/// Production code uses [`OsEntropy`]; tests plug in a fixed source to get
/// reproducible mnemonics.
pub trait EntropySource: Send + Sync {
    fn random_hex(&self, byte_count: usize) -> Zeroizing<String>;
}

/// CSPRNG của hệ điều hành (`OsRng`).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn random_hex(&self, byte_count: usize) -> Zeroizing<String> {
        let mut bytes = Zeroizing::new(vec![0u8; byte_count]);
        OsRng.fill_bytes(&mut bytes);
        Zeroizing::new(hex::encode(&*bytes))
    }
}
