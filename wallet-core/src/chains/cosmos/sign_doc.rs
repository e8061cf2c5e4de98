// wallet-core/src/chains/cosmos/sign_doc.rs
//
// Amino StdSignDoc builder
//
// The chain verifies signatures over this envelope:
//
//   type StdSignDoc struct {
//     AccountNumber uint64          `json:"account_number"`
//     ChainID       string          `json:"chain_id"`
//     Fee           json.RawMessage `json:"fee"`
//     Memo          string          `json:"memo"`
//     Msgs          []json.RawMessage `json:"msgs"`
//     Sequence      uint64          `json:"sequence"`
//   }

use crate::chains::cosmos::canonical::to_canonical_string;
use crate::error::{TransactionError, WalletResult};
use serde_json::{json, Value};

/// Account metadata that is signed alongside the transaction body.
///
/// `sequence` and `account_number` are kept as JSON values so callers can pass
/// either the string form the REST API returns (`"7"`) or a plain number.
#[derive(Debug, Clone, PartialEq)]
pub struct SignMeta {
    pub sequence: Value,
    pub account_number: Value,
    pub chain_id: String,
}

impl SignMeta {
    pub fn new(
        sequence: impl Into<Value>,
        account_number: impl Into<Value>,
        chain_id: impl Into<String>,
    ) -> Self {
        Self {
            sequence: sequence.into(),
            account_number: account_number.into(),
            chain_id: chain_id.into(),
        }
    }
}

/// Build the sign doc for `tx` and render it canonically.
///
/// This string is what gets hashed and signed; it has to match the node's own
/// rendering byte for byte.
pub fn build_sign_message(tx: &Value, meta: &SignMeta) -> WalletResult<String> {
    let envelope = sign_envelope(tx, meta)?;
    let message = to_canonical_string(&envelope)?;

    tracing::debug!(
        chain_id = %meta.chain_id,
        bytes = message.len(),
        "built amino sign doc"
    );
    Ok(message)
}

/// Assemble the (not yet canonical) sign doc envelope.
///
/// - `fee` is required; an empty `fee.amount` (absent, null, `""`, `0` or
///   `false`) becomes `[]`, `fee.gas` is copied as-is
/// - `memo` is copied as-is
/// - `msgs` comes from the transaction's `msg` field, see [`msgs_from_tx`]
pub fn sign_envelope(tx: &Value, meta: &SignMeta) -> WalletResult<Value> {
    let fee = match tx.get("fee") {
        None | Some(Value::Null) => return Err(TransactionError::MissingFee.into()),
        Some(fee) => fee,
    };

    let amount = match fee.get("amount") {
        Some(amount) if !is_empty_amount(amount) => amount.clone(),
        _ => Value::Array(Vec::new()),
    };
    let gas = fee.get("gas").cloned().unwrap_or(Value::Null);

    Ok(json!({
        "fee": {
            "amount": amount,
            "gas": gas,
        },
        "memo": tx.get("memo").cloned().unwrap_or(Value::Null),
        "msgs": msgs_from_tx(tx),
        "sequence": meta.sequence,
        "account_number": meta.account_number,
        "chain_id": meta.chain_id,
    }))
}

/// `null`, `""`, `0` and `false` all mean "no fee coins".
fn is_empty_amount(amount: &Value) -> bool {
    match amount {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Envelope field mapping `msg` → `msgs`.
///
/// Transactions as produced by the REST layer carry their message list under
/// the singular `msg` key, while the sign doc names the same list `msgs`.
pub fn msgs_from_tx(tx: &Value) -> Value {
    tx.get("msg").cloned().unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;

    #[test]
    fn test_golden_sign_message() {
        let tx = json!({
            "fee": {"gas": "5000"},
            "memo": "",
            "msg": [{"type": "x", "value": {"a": 1, "b": 2}}]
        });
        let meta = SignMeta::new("0", "1", "test");

        assert_eq!(
            build_sign_message(&tx, &meta).unwrap(),
            r#"{"account_number":"1","chain_id":"test","fee":{"amount":[],"gas":"5000"},"memo":"","msgs":[{"type":"x","value":{"a":1,"b":2}}],"sequence":"0"}"#
        );
    }

    #[test]
    fn test_numeric_meta() {
        let tx = json!({"fee": {"amount": [{"denom": "ubtsg", "amount": "100"}], "gas": "200000"}, "msg": [], "memo": "hi"});
        let meta = SignMeta::new(3, 42, "bitsong-2b");

        assert_eq!(
            build_sign_message(&tx, &meta).unwrap(),
            r#"{"account_number":42,"chain_id":"bitsong-2b","fee":{"amount":[{"amount":"100","denom":"ubtsg"}],"gas":"200000"},"memo":"hi","msgs":[],"sequence":3}"#
        );
    }

    #[test]
    fn test_missing_fee() {
        let meta = SignMeta::new("0", "1", "test");
        for tx in [json!({"memo": "", "msg": []}), json!({"fee": null, "msg": []})] {
            assert_eq!(
                build_sign_message(&tx, &meta).unwrap_err(),
                WalletError::Transaction(TransactionError::MissingFee)
            );
        }
    }

    #[test]
    fn test_null_amount_becomes_empty_list() {
        let tx = json!({"fee": {"amount": null, "gas": "1"}, "memo": "", "msg": []});
        let envelope = sign_envelope(&tx, &SignMeta::new("0", "0", "c")).unwrap();
        assert_eq!(envelope["fee"]["amount"], json!([]));
    }

    #[test]
    fn test_empty_amount_values_become_empty_list() {
        let meta = SignMeta::new("0", "0", "c");
        for amount in [json!(""), json!(0), json!(0.0), json!(false)] {
            let tx = json!({"fee": {"amount": amount, "gas": "1"}, "msg": []});
            let envelope = sign_envelope(&tx, &meta).unwrap();
            assert_eq!(envelope["fee"]["amount"], json!([]), "amount {}", amount);
        }

        // an empty list or object is kept as given
        for amount in [json!([]), json!({})] {
            let tx = json!({"fee": {"amount": amount.clone(), "gas": "1"}});
            assert_eq!(sign_envelope(&tx, &meta).unwrap()["fee"]["amount"], amount);
        }
    }

    #[test]
    fn test_absent_fields_are_elided() {
        // no memo, no msg, no gas: the keys disappear from the canonical form
        let tx = json!({"fee": {}});
        assert_eq!(
            build_sign_message(&tx, &SignMeta::new("0", "1", "test")).unwrap(),
            r#"{"account_number":"1","chain_id":"test","fee":{"amount":[]},"sequence":"0"}"#
        );
    }

    #[test]
    fn test_msg_renamed_to_msgs() {
        let tx = json!({"fee": {"gas": "1"}, "msg": [1], "msgs": [2]});
        let envelope = sign_envelope(&tx, &SignMeta::new("0", "0", "c")).unwrap();
        assert_eq!(envelope["msgs"], json!([1]));
        assert!(envelope.get("msg").is_none());
    }

    #[test]
    fn test_input_not_mutated() {
        let tx = json!({"fee": {"gas": "1"}, "msg": [{"b": 1, "a": null}]});
        let before = tx.clone();
        build_sign_message(&tx, &SignMeta::new("0", "0", "c")).unwrap();
        assert_eq!(tx, before);
    }
}
