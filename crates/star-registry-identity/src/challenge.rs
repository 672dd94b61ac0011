//! Challenge issuance and parsing.
//!
//! A challenge is stateless by construction: the issuance time rides inside
//! the string itself, so the server keeps no per-requester state. Anyone can
//! mint a challenge string for any address; nobody but the key holder can
//! produce a valid signature over it.

use std::fmt;

use star_registry_core::Timestamp;

use crate::error::ProofError;

/// Tag terminating every challenge string.
pub const CHALLENGE_TAG: &str = "starRegistry";

/// How long a challenge stays valid, in seconds.
///
/// The boundary is inclusive on the failing side: 299 seconds elapsed
/// passes, 300 fails.
pub const VALIDITY_WINDOW_SECS: i64 = 300;

/// An issued challenge: `<address>:<issued_at>:starRegistry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    address: String,
    issued_at: Timestamp,
}

impl Challenge {
    /// Issue a challenge for an address at the given time.
    pub fn issue(address: impl Into<String>, now: Timestamp) -> Self {
        Self {
            address: address.into(),
            issued_at: now,
        }
    }

    /// Parse a challenge string back into its parts.
    ///
    /// The shape must be exactly three colon-separated fields with an
    /// integer middle field; anything else is malformed. The tag field is
    /// not cross-checked: it is covered by the signature, which is the
    /// check that matters.
    pub fn parse(s: &str) -> Result<Self, ProofError> {
        let fields: Vec<&str> = s.split(':').collect();
        if fields.len() != 3 {
            return Err(ProofError::Malformed(format!(
                "expected 3 colon-separated fields, found {}",
                fields.len()
            )));
        }

        let issued_at: i64 = fields[1]
            .parse()
            .map_err(|_| ProofError::Malformed("issuance time is not an integer".to_string()))?;

        Ok(Self {
            address: fields[0].to_string(),
            issued_at: Timestamp::from_secs(issued_at),
        })
    }

    /// The address field the challenge was minted for.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// When the challenge was issued.
    pub fn issued_at(&self) -> Timestamp {
        self.issued_at
    }

    /// Seconds elapsed since issuance.
    pub fn elapsed(&self, now: Timestamp) -> i64 {
        now - self.issued_at
    }

    /// Whether the validity window has passed at `now`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.elapsed(now) >= VALIDITY_WINDOW_SECS
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.address, self.issued_at, CHALLENGE_TAG)
    }
}
