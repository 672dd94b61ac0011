//! Store trait: the abstract interface for the sealed sequence.
//!
//! The engine is storage-agnostic behind this seam. The bundled
//! implementation is in-memory; durability beyond the process lifetime is
//! the caller's concern and lives behind the same trait.

use star_registry_core::{Block, BlockHash};

use crate::error::Result;

/// The ordered, append-only sequence of sealed blocks.
///
/// # Design Notes
///
/// - **Single mutation point**: `push` is the only write; the engine
///   serializes callers, the store only has to make the push atomic so
///   readers never observe a partially-inserted block.
/// - **Misses are `None`**: a lookup that finds nothing is a valid empty
///   result, not an error.
/// - **All methods are synchronous**: async belongs to the service boundary,
///   not the storage seam.
pub trait Store: Send + Sync {
    /// Append a sealed block to the tail of the sequence.
    fn push(&self, block: Block) -> Result<()>;

    /// Number of blocks in the sequence (genesis included).
    fn len(&self) -> Result<u64>;

    /// Whether the sequence is empty (true only before genesis).
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// The block at a position, if the position exists.
    fn by_position(&self, position: u64) -> Result<Option<Block>>;

    /// The first block with the given hash, if any. Linear scan.
    fn by_hash(&self, hash: &BlockHash) -> Result<Option<Block>>;

    /// The last block in the sequence.
    fn tip(&self) -> Result<Option<Block>>;

    /// A consistent copy of the whole sequence in position order.
    ///
    /// Validation and owner scans walk this; the copy decouples readers
    /// from concurrent appends.
    fn snapshot(&self) -> Result<Vec<Block>>;
}
