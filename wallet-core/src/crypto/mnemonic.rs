// wallet-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - Tạo, kiểm tra mnemonic và sinh seed
// Chuẩn: BIP-39 (Mnemonic), PBKDF2-HMAC-SHA512 (Seed Derivation)

use crate::crypto::entropy::{EntropySource, OsEntropy};
use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::Mnemonic;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Số bytes entropy cần cho ví mới (24 words).
pub const ENTROPY_BYTES: usize = 32;

/// Wallet Mnemonic - BIP-39 phrase held in memory that is wiped on drop.
///
/// # Security Architecture
/// - **ZeroizeOnDrop**: Phrase được tự động ghi đè bằng 0 khi struct bị drop
/// - **Injected RNG**: new phrases draw entropy from an [`EntropySource`]
/// - **No Debug Leak**: Custom Debug impl không hiển thị phrase
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
}

impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Tạo mnemonic 24 từ mới bằng OS CSPRNG.
    pub fn new() -> WalletResult<Self> {
        Self::generate(&OsEntropy)
    }

    /// Generate a 24-word mnemonic from an injected entropy source.
    ///
    /// The source must hand back exactly [`ENTROPY_BYTES`] bytes (hex encoded);
    /// anything else is rejected with [`MnemonicError::EntropyLength`].
    pub fn generate(source: &dyn EntropySource) -> WalletResult<Self> {
        let entropy_hex = source.random_hex(ENTROPY_BYTES);
        let entropy = Zeroizing::new(
            hex::decode(entropy_hex.as_bytes())
                .map_err(|e| MnemonicError::InvalidEntropyHex(e.to_string()))?,
        );

        if entropy.len() != ENTROPY_BYTES {
            return Err(MnemonicError::EntropyLength {
                expected: ENTROPY_BYTES,
                actual: entropy.len(),
            }
            .into());
        }

        let mnemonic = Mnemonic::from_entropy(&entropy).map_err(map_bip39_error)?;
        let phrase = mnemonic.to_string();
        let word_count = phrase.split_whitespace().count();

        Ok(Self { phrase, word_count })
    }

    /// Khôi phục mnemonic từ phrase có sẵn.
    ///
    /// # Validation
    /// - số từ (12, 15, 18, 21, 24)
    /// - mọi từ đều nằm trong wordlist tiếng Anh của BIP-39
    /// - checksum
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let normalized = phrase.split_whitespace().collect::<Vec<_>>();
        let count = normalized.len();

        if !matches!(count, 12 | 15 | 18 | 21 | 24) {
            return Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(
                count,
            )));
        }

        let normalized_phrase = normalized.join(" ");
        Mnemonic::parse_normalized(&normalized_phrase).map_err(map_bip39_error)?;

        Ok(Self {
            phrase: normalized_phrase,
            word_count: count,
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// The mnemonic phrase.
    ///
    /// # Warning
    /// KHÔNG BAO GIỜ log hoặc hiển thị giá trị này.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// Derive the 64-byte BIP-39 seed (PBKDF2-HMAC-SHA512, 2048 rounds).
    ///
    /// `passphrase` is the optional BIP-39 "25th word"; `None` means the empty
    /// passphrase.
    pub fn to_seed(&self, passphrase: Option<&str>) -> WalletResult<Zeroizing<[u8; 64]>> {
        let mnemonic = Mnemonic::parse_normalized(&self.phrase).map_err(map_bip39_error)?;
        Ok(Zeroizing::new(
            mnemonic.to_seed_normalized(passphrase.unwrap_or("")),
        ))
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Full validation: word count, wordlist, checksum.
    #[inline]
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }
}

fn map_bip39_error(e: bip39::Error) -> WalletError {
    let err = match e {
        bip39::Error::BadWordCount(count) => MnemonicError::InvalidWordCount(count),
        bip39::Error::UnknownWord(index) => MnemonicError::UnknownWord(index),
        bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
        other => MnemonicError::Bip39Error(other.to_string()),
    };
    WalletError::Mnemonic(err)
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC_12: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const TEST_MNEMONIC_24: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art";

    struct FixedEntropy(&'static str);

    impl EntropySource for FixedEntropy {
        fn random_hex(&self, _byte_count: usize) -> Zeroizing<String> {
            Zeroizing::new(self.0.to_string())
        }
    }

    #[test]
    fn test_generate_from_zero_entropy() {
        let source = FixedEntropy(
            "0000000000000000000000000000000000000000000000000000000000000000",
        );
        let mnemonic = WalletMnemonic::generate(&source).unwrap();
        assert_eq!(mnemonic.phrase(), TEST_MNEMONIC_24);
        assert_eq!(mnemonic.word_count(), 24);
    }

    #[test]
    fn test_generate_rejects_short_entropy() {
        let source = FixedEntropy("00000000000000000000000000000000");
        let result = WalletMnemonic::generate(&source);
        assert_eq!(
            result.unwrap_err(),
            WalletError::Mnemonic(MnemonicError::EntropyLength {
                expected: 32,
                actual: 16
            })
        );
    }

    #[test]
    fn test_generate_rejects_non_hex() {
        let source = FixedEntropy("not hex at all");
        assert!(matches!(
            WalletMnemonic::generate(&source),
            Err(WalletError::Mnemonic(MnemonicError::InvalidEntropyHex(_)))
        ));
    }

    #[test]
    fn test_new_uses_os_entropy() {
        let m1 = WalletMnemonic::new().unwrap();
        let m2 = WalletMnemonic::new().unwrap();
        assert_eq!(m1.word_count(), 24);
        assert!(WalletMnemonic::validate(m1.phrase()));
        assert_ne!(m1.phrase(), m2.phrase());
    }

    #[test]
    fn test_from_phrase_valid() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        assert_eq!(mnemonic.word_count(), 12);
    }

    #[test]
    fn test_from_phrase_normalizes_whitespace() {
        let messy_phrase =
            "  abandon  abandon   abandon abandon abandon abandon abandon abandon abandon abandon abandon about  ";
        let mnemonic = WalletMnemonic::from_phrase(messy_phrase).unwrap();
        assert_eq!(mnemonic.phrase(), TEST_MNEMONIC_12);
    }

    #[test]
    fn test_from_phrase_invalid_word_count() {
        let result = WalletMnemonic::from_phrase("abandon abandon abandon");
        assert!(matches!(
            result,
            Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(3)))
        ));
    }

    #[test]
    fn test_from_phrase_invalid_word() {
        let invalid = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon invalid";
        let result = WalletMnemonic::from_phrase(invalid);
        assert!(matches!(
            result,
            Err(WalletError::Mnemonic(MnemonicError::UnknownWord(11)))
        ));
    }

    #[test]
    fn test_from_phrase_bad_checksum() {
        let bad = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        assert!(matches!(
            WalletMnemonic::from_phrase(bad),
            Err(WalletError::Mnemonic(MnemonicError::ChecksumFailed))
        ));
    }

    #[test]
    fn test_to_seed_vector() {
        // BIP-39 vector for "abandon ... about" with an empty passphrase
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let seed = mnemonic.to_seed(None).unwrap();
        assert_eq!(
            hex::encode(&*seed),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn test_to_seed_with_passphrase() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let seed_no_pass = mnemonic.to_seed(None).unwrap();
        let seed_with_pass = mnemonic.to_seed(Some("TREZOR")).unwrap();
        assert_ne!(&*seed_no_pass, &*seed_with_pass);
    }

    #[test]
    fn test_validate() {
        assert!(WalletMnemonic::validate(TEST_MNEMONIC_12));
        assert!(WalletMnemonic::validate(TEST_MNEMONIC_24));
        assert!(!WalletMnemonic::validate("invalid mnemonic phrase"));
        assert!(!WalletMnemonic::validate("abandon"));
    }

    #[test]
    fn test_words() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let words = mnemonic.words();
        assert_eq!(words.len(), 12);
        assert_eq!(words[11], "about");
    }

    #[test]
    fn test_debug_does_not_leak_phrase() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let debug_output = format!("{:?}", mnemonic);

        assert!(!debug_output.contains("abandon"));
        assert!(debug_output.contains("REDACTED"));
        assert!(debug_output.contains("word_count: 12"));
    }
}
