// wallet-core/src/api/mod.rs
//
// Host-facing facade: plain strings in, plain strings out.
// Keys travel as hex, transactions and signatures as JSON text.

use crate::chains::cosmos::{
    attach_signature, build_broadcast_body, build_sign_message, CosmosAddress, CosmosWallet,
    SignMeta, StdSignature,
};
use crate::chains::ChainConfig;
use crate::crypto::{EntropySource, WalletMnemonic};
use crate::error::{WalletError, WalletResult};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Keys and address of a wallet, hex encoded.
///
/// `mnemonic` chỉ có khi ví vừa được tạo mới: đây là bản backup duy nhất.
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct WalletCredential {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
    pub private_key: String,
    pub public_key: String,
    pub address: String,
}

impl std::fmt::Debug for WalletCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletCredential")
            .field("public_key", &self.public_key)
            .field("address", &self.address)
            .field("private_key", &"[REDACTED]")
            .field("mnemonic", &self.mnemonic.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl WalletCredential {
    fn new(wallet: &CosmosWallet, mnemonic: Option<&WalletMnemonic>) -> WalletResult<Self> {
        Ok(Self {
            mnemonic: mnemonic.map(|m| m.phrase().to_string()),
            private_key: wallet.private_key_hex().to_string(),
            public_key: wallet.public_key_hex(),
            address: wallet.address()?,
        })
    }
}

// Core Initialization
pub fn init_core() -> WalletResult<()> {
    // The host application may already own the global subscriber
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cosmos_wallet_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
    Ok(())
}

// --- Key Management ---

/// New 24-word mnemonic; production hosts pass [`crate::OsEntropy`].
pub fn generate_seed(source: &dyn EntropySource) -> WalletResult<String> {
    Ok(WalletMnemonic::generate(source)?.phrase().to_string())
}

/// New wallet plus its mnemonic, so the host can show the backup phrase.
pub fn generate_wallet(source: &dyn EntropySource, prefix: String) -> WalletResult<WalletCredential> {
    let (mnemonic, wallet) = CosmosWallet::generate(source, &prefix)?;
    WalletCredential::new(&wallet, Some(&mnemonic))
}

pub fn generate_wallet_from_seed(mnemonic: String, prefix: String) -> WalletResult<WalletCredential> {
    let wallet = CosmosWallet::from_mnemonic(&mnemonic, &prefix)?;
    WalletCredential::new(&wallet, None)
}

pub fn create_cosmos_address(public_key: String, prefix: String) -> WalletResult<String> {
    let bytes = decode_hex(&public_key)?;
    CosmosAddress::derive(&bytes, &prefix)
}

// --- Signing ---

pub fn create_sign_message(
    tx_json: String,
    sequence: String,
    account_number: String,
    chain_id: String,
) -> WalletResult<String> {
    let tx = parse_json(&tx_json)?;
    build_sign_message(&tx, &SignMeta::new(sequence, account_number, chain_id))
}

/// Sign a transaction; returns the signature object as JSON.
pub fn sign(
    tx_json: String,
    private_key: String,
    sequence: String,
    account_number: String,
    chain_id: String,
) -> WalletResult<String> {
    let tx = parse_json(&tx_json)?;
    let key = zeroize::Zeroizing::new(decode_secret_hex(&private_key)?);

    // prefix only matters for the address, which signing does not use
    let wallet = CosmosWallet::from_private_key(&key, &ChainConfig::default().address_prefix)?;
    let signature = wallet.sign(&tx, &SignMeta::new(sequence, account_number, chain_id))?;
    Ok(serde_json::to_string(&signature)?)
}

pub fn create_signed_tx(tx_json: String, signature_json: String) -> WalletResult<String> {
    let tx = parse_json(&tx_json)?;
    let signature: StdSignature = serde_json::from_str(&signature_json)?;
    Ok(serde_json::to_string(&attach_signature(&tx, &signature)?)?)
}

pub fn create_broadcast_body(signed_tx_json: String) -> WalletResult<String> {
    build_broadcast_body(&parse_json(&signed_tx_json)?)
}

// --- Config Helpers ---

pub fn get_default_chains() -> Vec<ChainConfig> {
    vec![
        ChainConfig::bitsong(),
        ChainConfig::cosmos_hub(),
        ChainConfig::osmosis(),
    ]
}

fn parse_json(json: &str) -> WalletResult<Value> {
    Ok(serde_json::from_str(json)?)
}

fn decode_hex(value: &str) -> WalletResult<Vec<u8>> {
    let value = value.strip_prefix("0x").unwrap_or(value);
    hex::decode(value).map_err(|e| WalletError::Validation(format!("invalid public key hex: {}", e)))
}

// Lỗi của hex crate trích ký tự sai từ input, không được lọt vào message
fn decode_secret_hex(value: &str) -> WalletResult<Vec<u8>> {
    let value = value.strip_prefix("0x").unwrap_or(value);
    hex::decode(value).map_err(|_| WalletError::Validation("invalid private key hex".to_string()))
}
