//! Test fixtures and helpers.
//!
//! Common setup code for tests that need a ledger plus a signing client.

use star_registry::{Keypair, Ledger, Submission};
use star_registry_core::{Star, Timestamp};
use star_registry_identity::{Challenge, Ed25519Verifier};
use star_registry_store::MemoryStore;

/// A test fixture: one ledger and one client keypair.
pub struct TestFixture {
    pub keypair: Keypair,
    pub ledger: Ledger<MemoryStore>,
}

impl TestFixture {
    /// Create a fixture with a random keypair.
    pub fn new() -> Self {
        Self::with_keypair(Keypair::generate())
    }

    /// Create a fixture with a deterministic keypair from a seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self::with_keypair(Keypair::from_seed(&seed))
    }

    fn with_keypair(keypair: Keypair) -> Self {
        let ledger = Ledger::open(MemoryStore::new(), Box::new(Ed25519Verifier))
            .expect("fresh ledger must open");
        Self { keypair, ledger }
    }

    /// The fixture client's address.
    pub fn address(&self) -> String {
        self.keypair.address()
    }

    /// A challenge string issued for the fixture client at `issued_at`.
    pub fn challenge_at(&self, issued_at: i64) -> String {
        Challenge::issue(self.address(), Timestamp::from_secs(issued_at)).to_string()
    }

    /// A correctly signed submission for a challenge issued at `issued_at`.
    pub fn signed_submission(&self, star: Star, issued_at: i64) -> Submission {
        let challenge = self.challenge_at(issued_at);
        Submission {
            address: self.address(),
            signature: self.keypair.sign(challenge.as_bytes()).to_hex(),
            challenge,
            star,
        }
    }

    /// Submit a star with a proof that is `elapsed` seconds old.
    pub fn submit_with_elapsed(
        &self,
        star: Star,
        issued_at: i64,
        elapsed: i64,
    ) -> star_registry::Result<star_registry::Block> {
        let submission = self.signed_submission(star, issued_at);
        self.ledger
            .submit_at(submission, Timestamp::from_secs(issued_at + elapsed))
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple fixtures with distinct deterministic keys, all sharing
/// no state.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            TestFixture::with_seed(seed)
        })
        .collect()
}

/// A star that reads like real registry input.
pub fn sample_star(story: &str) -> Star {
    Star {
        declination: "68° 52' 56.9".to_string(),
        right_ascension: "16h 29m 1.0s".to_string(),
        story: story.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_starts_at_genesis() {
        let fixture = TestFixture::with_seed([0x42; 32]);
        assert_eq!(fixture.ledger.height().unwrap(), 1);
        assert!(fixture.ledger.validation_report().unwrap().is_empty());
    }

    #[test]
    fn test_signed_submission_is_accepted() {
        let fixture = TestFixture::with_seed([0x42; 32]);
        let block = fixture
            .submit_with_elapsed(sample_star("fixture star"), 1000, 10)
            .unwrap();
        assert_eq!(block.position(), 1);
    }

    #[test]
    fn test_multi_party_keys_are_distinct() {
        let parties = multi_party_fixtures(3);
        assert_ne!(parties[0].address(), parties[1].address());
        assert_ne!(parties[1].address(), parties[2].address());
        assert_ne!(parties[0].address(), parties[2].address());
    }
}
