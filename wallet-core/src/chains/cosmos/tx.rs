// wallet-core/src/chains/cosmos/tx.rs
//
// Signed transaction assembly and the REST broadcast body

use crate::chains::cosmos::signer::StdSignature;
use crate::error::{TransactionError, WalletResult};
use serde::Serialize;
use serde_json::Value;

/// Broadcast mode sent with the body. Only block-confirmation is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastMode {
    Block,
}

/// `{ "tx": <signed tx>, "return": "block" }`
#[derive(Debug, Serialize)]
pub struct BroadcastBody<'a> {
    pub tx: &'a Value,
    #[serde(rename = "return")]
    pub mode: BroadcastMode,
}

/// Copy `tx` and set its `signatures` to exactly `[signature]`.
///
/// Any existing signatures are replaced, not appended to. Key order of the
/// the input transaction is kept; the transaction itself is not canonicalized.
pub fn attach_signature(tx: &Value, signature: &StdSignature) -> WalletResult<Value> {
    let mut signed = tx.clone();
    let fields = signed
        .as_object_mut()
        .ok_or(TransactionError::NotAnObject("transaction"))?;

    fields.insert(
        "signatures".to_string(),
        Value::Array(vec![serde_json::to_value(signature)?]),
    );
    Ok(signed)
}

/// Serialize the body POSTed to the node's `/txs` endpoint.
pub fn build_broadcast_body(signed_tx: &Value) -> WalletResult<String> {
    let body = BroadcastBody {
        tx: signed_tx,
        mode: BroadcastMode::Block,
    };
    Ok(serde_json::to_string(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::cosmos::signer::PubKey;
    use crate::error::WalletError;
    use serde_json::json;

    fn signature(tag: &str) -> StdSignature {
        StdSignature {
            signature: tag.to_string(),
            pub_key: PubKey {
                key_type: "tendermint/PubKeySecp256k1".to_string(),
                value: "pk".to_string(),
            },
        }
    }

    #[test]
    fn test_attach_signature() {
        let tx = json!({"fee": {"gas": "1"}, "msg": []});
        let signed = attach_signature(&tx, &signature("s1")).unwrap();

        assert_eq!(signed["signatures"].as_array().unwrap().len(), 1);
        assert_eq!(signed["signatures"][0]["signature"], "s1");
        assert_eq!(signed["fee"], tx["fee"]);
        // the caller's value is untouched
        assert!(tx.get("signatures").is_none());
    }

    #[test]
    fn test_attach_overwrites() {
        let tx = json!({"fee": {"gas": "1"}, "signatures": [{"signature": "old"}]});
        let once = attach_signature(&tx, &signature("s1")).unwrap();
        let twice = attach_signature(&once, &signature("s2")).unwrap();

        let sigs = twice["signatures"].as_array().unwrap();
        assert_eq!(sigs.len(), 1);
        assert_eq!(sigs[0]["signature"], "s2");
    }

    #[test]
    fn test_attach_keeps_key_order() {
        let tx: Value = serde_json::from_str(r#"{"msg":[],"fee":{"gas":"1"},"memo":""}"#).unwrap();
        let signed = attach_signature(&tx, &signature("s")).unwrap();
        let keys: Vec<&String> = signed.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["msg", "fee", "memo", "signatures"]);
    }

    #[test]
    fn test_attach_requires_object() {
        assert_eq!(
            attach_signature(&json!([1, 2]), &signature("s")).unwrap_err(),
            WalletError::Transaction(TransactionError::NotAnObject("transaction"))
        );
    }

    #[test]
    fn test_broadcast_body() {
        let signed = json!({"msg": [], "signatures": []});
        assert_eq!(
            build_broadcast_body(&signed).unwrap(),
            r#"{"tx":{"msg":[],"signatures":[]},"return":"block"}"#
        );
    }
}
