//! Block payloads: the star record and its opaque encoding.
//!
//! A payload is stored hex-over-JSON, so the chain itself carries no
//! human-readable content. `decode` is the exact inverse of `encode`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Marker string carried by the genesis block.
pub const GENESIS_MARKER: &str = "Genesis Block - Star Registry";

/// The astronomical coordinates and story a client registers.
///
/// All fields are free-form strings; the ledger records, it does not
/// interpret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    pub declination: String,

    #[serde(rename = "rightAscension")]
    pub right_ascension: String,

    pub story: String,
}

/// The decoded form of a non-genesis payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRecord {
    /// The address that proved ownership at submission time.
    pub owner: String,

    /// The address substring the client embedded in its challenge, kept
    /// verbatim for later attribution.
    pub message: String,

    pub star: Star,
}

/// An encoded payload as stored in a block: hex over canonical JSON bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedPayload(String);

impl EncodedPayload {
    /// Encode a star record into its stored form.
    pub fn encode(record: &StarRecord) -> Result<Self, CoreError> {
        let json = serde_json::to_vec(record)
            .map_err(|e| CoreError::PayloadEncoding(e.to_string()))?;
        Ok(Self(hex::encode(json)))
    }

    /// The fixed genesis payload.
    pub fn genesis() -> Self {
        Self(hex::encode(GENESIS_MARKER.as_bytes()))
    }

    /// Decode the stored form back into a star record.
    ///
    /// The genesis payload decodes to a typed error rather than a record:
    /// genesis has no owner.
    pub fn decode(&self) -> Result<StarRecord, CoreError> {
        let bytes =
            hex::decode(&self.0).map_err(|e| CoreError::PayloadDecoding(e.to_string()))?;
        if bytes == GENESIS_MARKER.as_bytes() {
            return Err(CoreError::GenesisPayload);
        }
        serde_json::from_slice(&bytes).map_err(|e| CoreError::PayloadDecoding(e.to_string()))
    }

    /// Whether this is the fixed genesis payload.
    pub fn is_genesis(&self) -> bool {
        *self == Self::genesis()
    }

    /// The stored hex text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
