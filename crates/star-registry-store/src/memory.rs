//! In-memory implementation of the Store trait.
//!
//! The production backend as well as the test one: the ledger is explicitly
//! non-durable, so the sealed sequence lives and dies with the process.

use std::sync::RwLock;

use star_registry_core::{Block, BlockHash};

use crate::error::Result;
use crate::traits::Store;

/// In-memory store: an RwLock over the ordered block sequence.
///
/// The write lock is held only for the push itself, which makes the push
/// the atomic visibility boundary; readers either see a block completely or
/// not at all.
pub struct MemoryStore {
    blocks: RwLock<Vec<Block>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            blocks: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn push(&self, block: Block) -> Result<()> {
        let mut blocks = self.blocks.write().unwrap();
        blocks.push(block);
        Ok(())
    }

    fn len(&self) -> Result<u64> {
        let blocks = self.blocks.read().unwrap();
        Ok(blocks.len() as u64)
    }

    fn by_position(&self, position: u64) -> Result<Option<Block>> {
        let blocks = self.blocks.read().unwrap();
        Ok(blocks.get(position as usize).cloned())
    }

    fn by_hash(&self, hash: &BlockHash) -> Result<Option<Block>> {
        let blocks = self.blocks.read().unwrap();
        Ok(blocks.iter().find(|b| b.hash() == hash).cloned())
    }

    fn tip(&self) -> Result<Option<Block>> {
        let blocks = self.blocks.read().unwrap();
        Ok(blocks.last().cloned())
    }

    fn snapshot(&self) -> Result<Vec<Block>> {
        let blocks = self.blocks.read().unwrap();
        Ok(blocks.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use star_registry_core::{EncodedPayload, Star, StarRecord, Timestamp};

    fn star_block(position: u64, previous_hash: Option<BlockHash>) -> Block {
        let payload = EncodedPayload::encode(&StarRecord {
            owner: "addr1".to_string(),
            message: "addr1".to_string(),
            star: Star {
                declination: "d".to_string(),
                right_ascension: "r".to_string(),
                story: format!("star {position}"),
            },
        })
        .unwrap();
        Block::seal(
            payload,
            previous_hash,
            position,
            Timestamp::from_secs(1000 + position as i64),
        )
    }

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty().unwrap());
        assert_eq!(store.len().unwrap(), 0);
        assert!(store.tip().unwrap().is_none());
        assert!(store.by_position(0).unwrap().is_none());
    }

    #[test]
    fn test_push_and_lookup() {
        let store = MemoryStore::new();
        let genesis = Block::genesis(Timestamp::from_secs(1000));
        let genesis_hash = *genesis.hash();
        store.push(genesis).unwrap();

        let block = star_block(1, Some(genesis_hash));
        let block_hash = *block.hash();
        store.push(block).unwrap();

        assert_eq!(store.len().unwrap(), 2);
        assert_eq!(store.tip().unwrap().unwrap().position(), 1);
        assert_eq!(
            store.by_position(1).unwrap().unwrap().hash(),
            &block_hash
        );
        assert_eq!(
            store.by_hash(&genesis_hash).unwrap().unwrap().position(),
            0
        );
    }

    #[test]
    fn test_miss_is_none() {
        let store = MemoryStore::new();
        store.push(Block::genesis(Timestamp::from_secs(1000))).unwrap();

        assert!(store.by_position(7).unwrap().is_none());
        assert!(store
            .by_hash(&BlockHash::from_bytes([0xee; 32]))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_snapshot_is_position_ordered() {
        let store = MemoryStore::new();
        let genesis = Block::genesis(Timestamp::from_secs(1000));
        let mut prev = *genesis.hash();
        store.push(genesis).unwrap();
        for position in 1..5 {
            let block = star_block(position, Some(prev));
            prev = *block.hash();
            store.push(block).unwrap();
        }

        let snapshot = store.snapshot().unwrap();
        let positions: Vec<u64> = snapshot.iter().map(|b| b.position()).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_snapshot_decoupled_from_later_pushes() {
        let store = MemoryStore::new();
        let genesis = Block::genesis(Timestamp::from_secs(1000));
        let genesis_hash = *genesis.hash();
        store.push(genesis).unwrap();

        let snapshot = store.snapshot().unwrap();
        store.push(star_block(1, Some(genesis_hash))).unwrap();
        assert_eq!(snapshot.len(), 1);
    }
}
