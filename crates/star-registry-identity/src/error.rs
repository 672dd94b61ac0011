//! Error types for the ownership-proof protocol.

use thiserror::Error;

/// Why a submission's ownership proof was rejected.
///
/// Each kind carries a distinct, stable message so callers can tell
/// "try again later" from "check your key" without matching on text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProofError {
    /// The challenge string does not have the expected shape.
    #[error("malformed challenge: {0}")]
    Malformed(String),

    /// The validity window elapsed before the submission arrived.
    #[error("challenge expired: {elapsed}s elapsed, window is {window}s")]
    Expired { elapsed: i64, window: i64 },

    /// The signature does not verify against the claimed address.
    #[error("signature does not match the claimed address")]
    BadSignature,

    /// The verification primitive itself failed or timed out.
    ///
    /// Distinct from [`ProofError::BadSignature`]: the proof was neither
    /// accepted nor rejected, and the caller must not retry silently.
    #[error("signature verifier unavailable: {0}")]
    Verifier(String),
}
