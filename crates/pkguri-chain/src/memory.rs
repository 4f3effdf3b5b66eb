//! In-memory implementation of the ChainHandle trait.
//!
//! This is primarily for testing and for resolving URIs against a block
//! list captured ahead of time. The chain is immutable once built, so it
//! can be shared across threads without locking.

use std::collections::HashSet;

use crate::error::Result;
use crate::handle::ChainHandle;
use crate::types::BlockHash;

/// A fixed chain of block hashes. Block 0 is the genesis block.
#[derive(Debug, Clone)]
pub struct MemoryChain {
    /// Block hashes indexed by height.
    blocks: Vec<BlockHash>,

    /// Hash index for `has_block`.
    known: HashSet<BlockHash>,
}

impl MemoryChain {
    /// Create a chain holding only the genesis block.
    pub fn new(genesis: BlockHash) -> Self {
        let mut known = HashSet::new();
        known.insert(genesis);
        Self {
            blocks: vec![genesis],
            known,
        }
    }

    /// Append a block on top of the current head.
    pub fn with_block(mut self, hash: BlockHash) -> Self {
        self.blocks.push(hash);
        self.known.insert(hash);
        self
    }

    /// Append several blocks in order.
    pub fn with_blocks(self, hashes: impl IntoIterator<Item = BlockHash>) -> Self {
        hashes.into_iter().fold(self, MemoryChain::with_block)
    }

    /// Hash of the chain head.
    pub fn head(&self) -> BlockHash {
        // `blocks` always holds at least the genesis block.
        self.blocks[self.blocks.len() - 1]
    }

    /// Number of blocks, including genesis.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false: a chain has at least its genesis block.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl ChainHandle for MemoryChain {
    fn genesis_hash(&self) -> Result<BlockHash> {
        Ok(self.blocks[0])
    }

    fn has_block(&self, hash: &BlockHash) -> Result<bool> {
        Ok(self.known.contains(hash))
    }

    fn latest_block_number(&self) -> Result<u64> {
        Ok((self.blocks.len() - 1) as u64)
    }

    fn block_hash_at(&self, number: u64) -> Result<Option<BlockHash>> {
        let index = match usize::try_from(number) {
            Ok(index) => index,
            Err(_) => return Ok(None),
        };
        Ok(self.blocks.get(index).copied())
    }
}
