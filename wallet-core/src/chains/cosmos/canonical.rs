// wallet-core/src/chains/cosmos/canonical.rs
//
// Canonical JSON - deterministic form of an amino JSON document for signing
//
// Rules:
// - object keys sorted by code point, at every depth
// - keys whose value is null are dropped
// - arrays keep their element order
// - scalars pass through untouched
// - compact output: no whitespace, integers without fraction or exponent

use crate::error::WalletResult;
use serde_json::{Map, Number, Value};

/// Return a new, canonical copy of `value`.
///
/// Pure and idempotent: `canonicalize(&canonicalize(v)) == canonicalize(v)`,
/// and the result does not depend on the key insertion order of `value`.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        Value::Object(map) => {
            // `String` orders by UTF-8 bytes, which is code point order
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

            let mut sorted = Map::with_capacity(entries.len());
            for (key, inner) in entries {
                if inner.is_null() {
                    continue;
                }
                sorted.insert(key.clone(), canonicalize(inner));
            }
            Value::Object(sorted)
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
    }
}

/// Canonicalize `value` and render it as the compact string that gets hashed.
pub fn to_canonical_string(value: &Value) -> WalletResult<String> {
    let canonical = canonicalize(value);
    let mut out = String::new();
    write_value(&canonical, &mut out)?;
    Ok(out)
}

fn write_value(value: &Value, out: &mut String) -> WalletResult<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(n, out),
        Value::String(s) => out.push_str(&serde_json::to_string(s)?),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(key)?);
                out.push(':');
                write_value(item, out)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn write_number(n: &Number, out: &mut String) {
    if let Some(i) = n.as_i64() {
        out.push_str(&i.to_string());
    } else if let Some(u) = n.as_u64() {
        out.push_str(&u.to_string());
    } else if let Some(f) = n.as_f64() {
        // f64 Display never uses exponent notation and prints 5.0 as "5"
        if f == 0.0 {
            out.push('0');
        } else {
            out.push_str(&f.to_string());
        }
    }
}
