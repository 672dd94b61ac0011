//! Submission verification: the pure predicate gating every append.

use star_registry_core::Timestamp;

use crate::challenge::{Challenge, VALIDITY_WINDOW_SECS};
use crate::error::ProofError;
use crate::verifier::SignatureVerifier;

/// Verify an ownership proof: parse the challenge, check the validity
/// window, then check the signature.
///
/// The checks run in that order and the first failure wins; `now` is
/// supplied by the caller, captured once, so the window check and the
/// signature check cannot disagree about the time. On success the parsed
/// challenge is returned so callers can attribute the submission to the
/// address substring the client embedded.
///
/// No side effects, no retries: a failure is returned as its specific kind.
pub fn verify_submission(
    verifier: &dyn SignatureVerifier,
    address: &str,
    challenge_str: &str,
    signature_hex: &str,
    now: Timestamp,
) -> Result<Challenge, ProofError> {
    let challenge = Challenge::parse(challenge_str)?;

    let elapsed = challenge.elapsed(now);
    if elapsed >= VALIDITY_WINDOW_SECS {
        return Err(ProofError::Expired {
            elapsed,
            window: VALIDITY_WINDOW_SECS,
        });
    }

    // The signature must cover the exact challenge bytes the client was
    // handed, against the address it claims, not the parsed address field.
    if !verifier.verify(address, challenge_str.as_bytes(), signature_hex)? {
        return Err(ProofError::BadSignature);
    }

    Ok(challenge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verifier::Ed25519Verifier;
    use star_registry_core::Keypair;

    fn signed_challenge(keypair: &Keypair, issued_at: i64) -> (String, String) {
        let challenge = Challenge::issue(keypair.address(), Timestamp::from_secs(issued_at));
        let challenge_str = challenge.to_string();
        let signature = keypair.sign(challenge_str.as_bytes());
        (challenge_str, signature.to_hex())
    }

    #[test]
    fn test_valid_submission_passes() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let (challenge_str, signature) = signed_challenge(&keypair, 1000);

        let challenge = verify_submission(
            &Ed25519Verifier,
            &keypair.address(),
            &challenge_str,
            &signature,
            Timestamp::from_secs(1200),
        )
        .unwrap();
        assert_eq!(challenge.address(), keypair.address());
    }

    #[test]
    fn test_window_boundary_299_passes_300_fails() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let (challenge_str, signature) = signed_challenge(&keypair, 1000);

        assert!(verify_submission(
            &Ed25519Verifier,
            &keypair.address(),
            &challenge_str,
            &signature,
            Timestamp::from_secs(1299),
        )
        .is_ok());

        let result = verify_submission(
            &Ed25519Verifier,
            &keypair.address(),
            &challenge_str,
            &signature,
            Timestamp::from_secs(1300),
        );
        assert_eq!(
            result,
            Err(ProofError::Expired {
                elapsed: 300,
                window: VALIDITY_WINDOW_SECS
            })
        );
    }

    #[test]
    fn test_malformed_challenge_wins_over_signature() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let result = verify_submission(
            &Ed25519Verifier,
            &keypair.address(),
            "no-colons-here",
            "00",
            Timestamp::from_secs(1000),
        );
        assert!(matches!(result, Err(ProofError::Malformed(_))));
    }

    #[test]
    fn test_expired_wins_over_bad_signature() {
        // Expired challenge with a garbage signature reports Expired, not
        // BadSignature: the window check runs first.
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let challenge_str =
            Challenge::issue(keypair.address(), Timestamp::from_secs(1000)).to_string();

        let result = verify_submission(
            &Ed25519Verifier,
            &keypair.address(),
            &challenge_str,
            "deadbeef",
            Timestamp::from_secs(2000),
        );
        assert!(matches!(result, Err(ProofError::Expired { .. })));
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let owner = Keypair::from_seed(&[0x42; 32]);
        let intruder = Keypair::from_seed(&[0x43; 32]);

        let challenge_str =
            Challenge::issue(owner.address(), Timestamp::from_secs(1000)).to_string();
        let signature = intruder.sign(challenge_str.as_bytes());

        let result = verify_submission(
            &Ed25519Verifier,
            &owner.address(),
            &challenge_str,
            &signature.to_hex(),
            Timestamp::from_secs(1100),
        );
        assert_eq!(result, Err(ProofError::BadSignature));
    }
}
