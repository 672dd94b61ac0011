//! Canonical CBOR encoding for deterministic block hashing.
//!
//! This module implements the subset of RFC 8949 Core Deterministic Encoding
//! the seal input needs:
//! - Map keys sorted by encoded byte comparison
//! - Integers use smallest valid encoding
//! - Definite lengths only
//! - No floats (timestamps are whole seconds)
//!
//! The canonical encoding is what makes tamper detection possible: the same
//! sealed content always produces identical bytes, and therefore an
//! identical digest, on every platform.

use ciborium::value::Value;

use crate::payload::EncodedPayload;
use crate::types::{BlockHash, Timestamp};

/// Seal-input field keys (integer keys for compact encoding).
///
/// Keys 0-23 encode as single bytes in CBOR.
mod keys {
    pub const POSITION: u64 = 0;
    pub const PREVIOUS_HASH: u64 = 1;
    pub const SEALED_AT: u64 = 2;
    pub const PAYLOAD: u64 = 3;
}

/// Encode a block's seal input to canonical CBOR bytes.
///
/// The stored `hash` is excluded by construction: these are exactly the
/// bytes the digest covers.
pub fn canonical_seal_bytes(
    position: u64,
    previous_hash: Option<&BlockHash>,
    sealed_at: Timestamp,
    payload: &EncodedPayload,
) -> Vec<u8> {
    let prev_value = match previous_hash {
        Some(hash) => Value::Bytes(hash.0.to_vec()),
        None => Value::Null,
    };

    // Entries are built in key order (already sorted 0-3); the canonical
    // map encoder re-sorts by encoded bytes regardless.
    let value = Value::Map(vec![
        (Value::Integer(keys::POSITION.into()), Value::Integer(position.into())),
        (Value::Integer(keys::PREVIOUS_HASH.into()), prev_value),
        (
            Value::Integer(keys::SEALED_AT.into()),
            Value::Integer(sealed_at.as_secs().into()),
        ),
        (
            Value::Integer(keys::PAYLOAD.into()),
            Value::Text(payload.as_str().to_string()),
        ),
    ]);

    let mut buf = Vec::new();
    encode_value_to(&mut buf, &value);
    buf
}

/// Recursively encode a CBOR value.
fn encode_value_to(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Integer(i) => {
            encode_integer(buf, *i);
        }
        Value::Bytes(b) => {
            encode_bytes(buf, b);
        }
        Value::Text(s) => {
            encode_text(buf, s);
        }
        Value::Map(entries) => {
            encode_map_canonical(buf, entries);
        }
        Value::Null => {
            buf.push(0xf6);
        }
        _ => {
            panic!("unsupported CBOR value type in seal input");
        }
    }
}

/// Encode a CBOR integer (major types 0 and 1).
fn encode_integer(buf: &mut Vec<u8>, i: ciborium::value::Integer) {
    let n: i128 = i.into();

    if n >= 0 {
        // Major type 0: unsigned integer
        encode_uint(buf, 0, n as u64);
    } else {
        // Major type 1: negative integer
        // CBOR encodes -1 as 0, -2 as 1, etc.
        let abs = (-1 - n) as u64;
        encode_uint(buf, 1, abs);
    }
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffffffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a byte string (major type 2).
fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

/// Encode a text string (major type 3).
fn encode_text(buf: &mut Vec<u8>, s: &str) {
    encode_uint(buf, 3, s.len() as u64);
    buf.extend_from_slice(s.as_bytes());
}

/// Encode a map canonically (major type 5).
///
/// Keys are sorted by their encoded byte comparison.
fn encode_map_canonical(buf: &mut Vec<u8>, entries: &[(Value, Value)]) {
    let mut key_value_pairs: Vec<(Vec<u8>, &Value)> = entries
        .iter()
        .map(|(k, v)| {
            let mut key_buf = Vec::new();
            encode_value_to(&mut key_buf, k);
            (key_buf, v)
        })
        .collect();

    key_value_pairs.sort_by(|a, b| a.0.cmp(&b.0));

    encode_uint(buf, 5, key_value_pairs.len() as u64);

    for (key_bytes, value) in key_value_pairs {
        buf.extend_from_slice(&key_bytes);
        encode_value_to(buf, value);
    }
}
