//! ChainHandle trait: the lookups chain matching needs from a live chain.
//!
//! Implementations wrap a node connection or, for tests, an in-memory
//! block list. All methods take `&self`; implementations that cache must
//! handle their own synchronization.

use crate::error::Result;
use crate::types::BlockHash;

/// Read-only view of a connected chain.
pub trait ChainHandle {
    /// Hash of block 0.
    fn genesis_hash(&self) -> Result<BlockHash>;

    /// Whether the chain contains a block with this hash.
    fn has_block(&self, hash: &BlockHash) -> Result<bool>;

    /// Height of the chain head.
    fn latest_block_number(&self) -> Result<u64>;

    /// Hash of the block at `number`, if the chain is that long.
    fn block_hash_at(&self, number: u64) -> Result<Option<BlockHash>>;
}
