//! Chain validation: digest recomputation and link checks.

use crate::block::Block;
use crate::error::ChainFault;

/// Walk the chain in position order and report every inconsistency.
///
/// For each block the stored hash is compared against a fresh recomputation
/// of its content; for every block past genesis the stored previous-hash is
/// compared against the previous block's stored hash. The two checks are
/// independent and may both fire at the same position.
///
/// Returns an empty vector for a fully consistent chain. Corruption is
/// reported as data, never raised: the caller needs the complete fault list
/// to decide between rejecting an append and surfacing diagnostics.
pub fn validate_chain(blocks: &[Block]) -> Vec<ChainFault> {
    let mut faults = Vec::new();

    for (index, block) in blocks.iter().enumerate() {
        let position = block.position();

        if block.fresh_hash() != *block.hash() {
            faults.push(ChainFault::InvalidHash { position });
        }

        if index > 0 {
            let previous = &blocks[index - 1];
            if block.previous_hash() != Some(previous.hash()) {
                faults.push(ChainFault::InvalidLink { position });
            }
        }
    }

    faults
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{EncodedPayload, Star, StarRecord};
    use crate::types::{BlockHash, Timestamp};

    fn star_payload(owner: &str, story: &str) -> EncodedPayload {
        EncodedPayload::encode(&StarRecord {
            owner: owner.to_string(),
            message: owner.to_string(),
            star: Star {
                declination: "68° 52' 56.9".to_string(),
                right_ascension: "16h 29m 1.0s".to_string(),
                story: story.to_string(),
            },
        })
        .unwrap()
    }

    fn build_chain(len: u64) -> Vec<Block> {
        let mut blocks = vec![Block::genesis(Timestamp::from_secs(1000))];
        for position in 1..len {
            let prev_hash = *blocks[position as usize - 1].hash();
            blocks.push(Block::seal(
                star_payload("addr1", &format!("star {position}")),
                Some(prev_hash),
                position,
                Timestamp::from_secs(1000 + position as i64),
            ));
        }
        blocks
    }

    #[test]
    fn test_consistent_chain_has_no_faults() {
        let chain = build_chain(5);
        assert!(validate_chain(&chain).is_empty());
    }

    #[test]
    fn test_single_genesis_validates() {
        let chain = build_chain(1);
        assert!(validate_chain(&chain).is_empty());
    }

    #[test]
    fn test_hash_links_are_fresh_hashes() {
        let chain = build_chain(4);
        for n in 1..chain.len() {
            assert_eq!(
                chain[n].previous_hash(),
                Some(&chain[n - 1].fresh_hash())
            );
        }
    }

    #[test]
    fn test_tampered_payload_detected() {
        let mut chain = build_chain(4);

        // Mutate block 1's payload but keep its stored hash.
        let victim = &chain[1];
        chain[1] = Block::from_sealed_parts(
            star_payload("attacker", "rewritten"),
            victim.previous_hash().copied(),
            victim.position(),
            victim.sealed_at(),
            *victim.hash(),
        );

        let faults = validate_chain(&chain);
        assert_eq!(
            faults,
            vec![ChainFault::InvalidHash { position: 1 }]
        );
    }

    #[test]
    fn test_reforged_block_breaks_downstream_link() {
        let mut chain = build_chain(4);

        // Re-seal block 1 with different content: its own hash is now
        // internally consistent, but block 2 no longer links to it.
        let victim = &chain[1];
        chain[1] = Block::seal(
            star_payload("attacker", "rewritten"),
            victim.previous_hash().copied(),
            victim.position(),
            victim.sealed_at(),
        );

        let faults = validate_chain(&chain);
        assert_eq!(
            faults,
            vec![ChainFault::InvalidLink { position: 2 }]
        );
    }

    #[test]
    fn test_tampered_genesis_detected() {
        let mut chain = build_chain(3);

        let genesis = &chain[0];
        chain[0] = Block::from_sealed_parts(
            star_payload("attacker", "fake genesis"),
            None,
            0,
            genesis.sealed_at(),
            *genesis.hash(),
        );

        let faults = validate_chain(&chain);
        assert!(faults.contains(&ChainFault::InvalidHash { position: 0 }));
    }

    #[test]
    fn test_both_checks_fire_independently() {
        let mut chain = build_chain(3);

        // Mutate block 2's payload AND its link.
        let victim = &chain[2];
        chain[2] = Block::from_sealed_parts(
            star_payload("attacker", "rewritten"),
            Some(BlockHash::from_bytes([0xff; 32])),
            victim.position(),
            victim.sealed_at(),
            *victim.hash(),
        );

        let faults = validate_chain(&chain);
        assert!(faults.contains(&ChainFault::InvalidHash { position: 2 }));
        assert!(faults.contains(&ChainFault::InvalidLink { position: 2 }));
        assert_eq!(faults.len(), 2);
    }

    #[test]
    fn test_faults_report_positions_in_order() {
        let mut chain = build_chain(5);

        for k in [1usize, 3] {
            let victim = &chain[k];
            chain[k] = Block::from_sealed_parts(
                star_payload("attacker", "rewritten"),
                victim.previous_hash().copied(),
                victim.position(),
                victim.sealed_at(),
                *victim.hash(),
            );
        }

        let positions: Vec<u64> = validate_chain(&chain)
            .iter()
            .map(|f| f.position())
            .collect();
        assert_eq!(positions, vec![1, 3]);
    }
}
