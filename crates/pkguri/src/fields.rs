//! Validators for RPC fields that travel alongside package URIs.
//!
//! Clients that deploy or look up packages send transactions carrying a
//! `chainId` and read blocks carrying `extraData`. These checks catch a
//! client talking to the wrong network before a URI is resolved against
//! it. Values arrive as JSON, so the functions take `serde_json::Value`.

use serde_json::Value;

use crate::error::FieldError;

/// Largest `extraData` a block may carry, in bytes.
pub const MAX_EXTRA_DATA_LENGTH: usize = 32;

/// Check a declared chain id against the connected node's chain id.
///
/// A node that does not report its chain id (`None`) cannot be checked
/// and the declared id passes.
pub fn validate_chain_id(declared: u64, connected: Option<u64>) -> Result<u64, FieldError> {
    match connected {
        Some(connected) if connected != declared => {
            Err(FieldError::ChainIdMismatch { declared, connected })
        }
        _ => Ok(declared),
    }
}

/// Check the `chainId` field of a transaction object, if it has one.
pub fn validate_transaction_chain_id(
    transaction: &Value,
    connected: Option<u64>,
) -> Result<(), FieldError> {
    match transaction.get("chainId") {
        None | Some(Value::Null) => Ok(()),
        Some(value) => {
            let declared = chain_id_value(value)?;
            validate_chain_id(declared, connected).map(|_| ())
        }
    }
}

fn chain_id_value(value: &Value) -> Result<u64, FieldError> {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => match s.strip_prefix("0x") {
            Some(hex) => u64::from_str_radix(hex, 16).ok(),
            None => s.parse::<u64>().ok(),
        },
        _ => None,
    };
    parsed.ok_or_else(|| FieldError::InvalidChainId(value.to_string()))
}

/// Check that an `extraData` value is at most `max` bytes.
///
/// Hex strings (with or without `0x`), unsigned integers and arrays of
/// byte values are measured; any other JSON type passes unchecked.
pub fn check_extra_data_length(value: &Value, max: usize) -> Result<(), FieldError> {
    let bytes = match extra_data_bytes(value)? {
        Some(bytes) => bytes,
        None => return Ok(()),
    };
    if bytes.len() > max {
        return Err(FieldError::ExtraDataTooLong {
            length: bytes.len(),
            max,
            value: format!("0x{}", hex::encode(&bytes)),
        });
    }
    Ok(())
}

fn extra_data_bytes(value: &Value) -> Result<Option<Vec<u8>>, FieldError> {
    match value {
        Value::String(s) => {
            let body = s.strip_prefix("0x").unwrap_or(s);
            // Odd-length hex is left-padded, as node clients render it.
            let padded = if body.len() % 2 == 1 {
                format!("0{}", body)
            } else {
                body.to_string()
            };
            hex::decode(padded)
                .map(Some)
                .map_err(|_| FieldError::InvalidExtraData(s.clone()))
        }
        Value::Number(n) => {
            let n = n
                .as_u64()
                .ok_or_else(|| FieldError::InvalidExtraData(n.to_string()))?;
            let raw = n.to_be_bytes();
            let first = raw.iter().position(|b| *b != 0).unwrap_or(raw.len() - 1);
            Ok(Some(raw[first..].to_vec()))
        }
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_u64()
                    .and_then(|b| u8::try_from(b).ok())
                    .ok_or_else(|| FieldError::InvalidExtraData(value.to_string()))
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(Some),
        _ => Ok(None),
    }
}

/// Check a block object returned by a node. `null` blocks pass.
pub fn validate_block(block: &Value, max_extra_data: usize) -> Result<(), FieldError> {
    match block.get("extraData") {
        Some(extra) if !block.is_null() => check_extra_data_length(extra, max_extra_data),
        _ => Ok(()),
    }
}
