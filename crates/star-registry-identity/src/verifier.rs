//! The signature-verification seam.
//!
//! The protocol consumes signature verification as a black box. The bundled
//! implementation checks Ed25519 over hex-encoded keys; any other address
//! scheme plugs in behind the same trait.

use star_registry_core::{Ed25519PublicKey, Ed25519Signature};

use crate::error::ProofError;

/// Verifies that a signature over a message was produced by the key
/// controlling an address.
///
/// `Ok(false)` means the proof is rejected; `Err` means the primitive
/// itself failed or timed out, which callers must surface as its own
/// failure kind rather than retry.
pub trait SignatureVerifier: Send + Sync {
    fn verify(
        &self,
        address: &str,
        message: &[u8],
        signature_hex: &str,
    ) -> Result<bool, ProofError>;
}

/// Ed25519 verifier: the address is the hex-encoded verifying key, the
/// signature is hex of the 64-byte detached signature.
///
/// Undecodable addresses or signatures verify to `false` rather than
/// erroring: a client that cannot even present well-formed key material has
/// not proven ownership, and the distinction it would need is "check your
/// key" either way.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn verify(
        &self,
        address: &str,
        message: &[u8],
        signature_hex: &str,
    ) -> Result<bool, ProofError> {
        let Ok(public_key) = Ed25519PublicKey::from_hex(address) else {
            return Ok(false);
        };
        let Ok(signature) = Ed25519Signature::from_hex(signature_hex) else {
            return Ok(false);
        };

        Ok(public_key.verify(message, &signature).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use star_registry_core::Keypair;

    #[test]
    fn test_accepts_valid_signature() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let message = b"addr:1000:starRegistry";
        let signature = keypair.sign(message);

        let ok = Ed25519Verifier
            .verify(&keypair.address(), message, &signature.to_hex())
            .unwrap();
        assert!(ok);
    }

    #[test]
    fn test_rejects_wrong_signer() {
        let owner = Keypair::from_seed(&[0x42; 32]);
        let intruder = Keypair::from_seed(&[0x43; 32]);
        let message = b"addr:1000:starRegistry";
        let signature = intruder.sign(message);

        let ok = Ed25519Verifier
            .verify(&owner.address(), message, &signature.to_hex())
            .unwrap();
        assert!(!ok);
    }

    #[test]
    fn test_rejects_tampered_message() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let signature = keypair.sign(b"addr:1000:starRegistry");

        let ok = Ed25519Verifier
            .verify(
                &keypair.address(),
                b"addr:9999:starRegistry",
                &signature.to_hex(),
            )
            .unwrap();
        assert!(!ok);
    }

    #[test]
    fn test_undecodable_material_rejects() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let message = b"addr:1000:starRegistry";
        let signature = keypair.sign(message);

        assert!(!Ed25519Verifier
            .verify("not-an-address", message, &signature.to_hex())
            .unwrap());
        assert!(!Ed25519Verifier
            .verify(&keypair.address(), message, "not-a-signature")
            .unwrap());
    }
}
