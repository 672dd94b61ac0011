//! # Star Registry Identity
//!
//! The ownership-proof protocol: time-stamped challenges and
//! signature-verified submissions.
//!
//! A client asks for a challenge for its address, signs the exact challenge
//! bytes with the key controlling that address, and submits the triple. The
//! protocol is stateless: the issuance time is embedded in the challenge
//! string, so nothing is stored server-side between the two steps.

pub mod challenge;
pub mod error;
pub mod submission;
pub mod verifier;

pub use challenge::{Challenge, CHALLENGE_TAG, VALIDITY_WINDOW_SECS};
pub use error::ProofError;
pub use submission::verify_submission;
pub use verifier::{Ed25519Verifier, SignatureVerifier};
