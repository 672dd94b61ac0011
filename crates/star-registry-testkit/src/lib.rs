//! # Star Registry Testkit
//!
//! Shared fixtures and proptest generators for exercising the ledger.

pub mod fixtures;
pub mod generators;

pub use fixtures::{multi_party_fixtures, sample_star, TestFixture};
