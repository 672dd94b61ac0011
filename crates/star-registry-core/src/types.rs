//! Strong type definitions for the star registry ledger.
//!
//! Identifiers and timestamps are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::time::{SystemTime, UNIX_EPOCH};

/// A 32-byte block hash, computed as Blake3(canonical seal bytes).
///
/// This is the content-address of a sealed block. Two blocks with the same
/// sealed content have the same hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockHash(pub [u8; 32]);

impl BlockHash {
    /// Compute the Blake3 digest of the given bytes.
    pub fn digest(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for BlockHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for BlockHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// A timestamp in whole seconds since the Unix epoch.
///
/// The ledger works in second granularity everywhere: challenge issuance,
/// the validity window, and block sealing. Sub-second precision is dropped
/// at construction, not by string slicing.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// The current time, truncated to whole seconds.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_secs() as i64;
        Self(secs)
    }

    /// Create from whole seconds since the epoch.
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Get the raw seconds value.
    pub const fn as_secs(&self) -> i64 {
        self.0
    }
}

impl Sub for Timestamp {
    type Output = i64;

    /// Elapsed seconds between two timestamps (may be negative).
    fn sub(self, earlier: Timestamp) -> i64 {
        self.0 - earlier.0
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_hash_hex_roundtrip() {
        let hash = BlockHash::from_bytes([0x42; 32]);
        let hex = hash.to_hex();
        let recovered = BlockHash::from_hex(&hex).unwrap();
        assert_eq!(hash, recovered);
    }

    #[test]
    fn test_block_hash_rejects_short_hex() {
        assert!(BlockHash::from_hex("abcd").is_err());
    }

    #[test]
    fn test_digest_deterministic() {
        let h1 = BlockHash::digest(b"some content");
        let h2 = BlockHash::digest(b"some content");
        assert_eq!(h1, h2);

        let h3 = BlockHash::digest(b"other content");
        assert_ne!(h1, h3);
    }

    #[test]
    fn test_timestamp_elapsed() {
        let issued = Timestamp::from_secs(1000);
        let now = Timestamp::from_secs(1299);
        assert_eq!(now - issued, 299);
    }

    #[test]
    fn test_timestamp_elapsed_negative() {
        let issued = Timestamp::from_secs(2000);
        let now = Timestamp::from_secs(1000);
        assert_eq!(now - issued, -1000);
    }
}
