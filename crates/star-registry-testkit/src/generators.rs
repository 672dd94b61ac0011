//! Proptest generators for property-based testing.

use proptest::prelude::*;

use star_registry_core::{
    Block, BlockHash, EncodedPayload, Keypair, Star, StarRecord, Timestamp,
};

/// Generate a deterministic keypair from an arbitrary seed.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate a random block hash.
pub fn block_hash() -> impl Strategy<Value = BlockHash> {
    any::<[u8; 32]>().prop_map(BlockHash::from_bytes)
}

/// Generate an owner address (hex of a generated public key).
pub fn address() -> impl Strategy<Value = String> {
    keypair().prop_map(|kp| kp.address())
}

/// Generate a reasonable whole-second timestamp.
pub fn timestamp() -> impl Strategy<Value = Timestamp> {
    (0i64..=4_102_444_800).prop_map(Timestamp::from_secs)
}

/// Generate a star with free-form text fields.
pub fn star() -> impl Strategy<Value = Star> {
    (".{0,64}", ".{0,64}", ".{0,256}").prop_map(|(declination, right_ascension, story)| Star {
        declination,
        right_ascension,
        story,
    })
}

/// Generate a full star record.
pub fn star_record() -> impl Strategy<Value = StarRecord> {
    (address(), star()).prop_map(|(owner, star)| StarRecord {
        message: owner.clone(),
        owner,
        star,
    })
}

/// Generate a consistent chain of the given length, genesis included.
pub fn chain(len: impl Into<prop::collection::SizeRange>) -> impl Strategy<Value = Vec<Block>> {
    prop::collection::vec((star_record(), 1i64..=1_000_000), len).prop_map(|entries| {
        let mut blocks = vec![Block::genesis(Timestamp::from_secs(0))];
        for (record, seal_offset) in entries {
            let payload = EncodedPayload::encode(&record).expect("generated record must encode");
            let previous_hash = *blocks.last().expect("chain has genesis").hash();
            let position = blocks.len() as u64;
            blocks.push(Block::seal(
                payload,
                Some(previous_hash),
                position,
                Timestamp::from_secs(seal_offset),
            ));
        }
        blocks
    })
}
