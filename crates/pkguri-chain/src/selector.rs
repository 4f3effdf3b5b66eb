//! Matching chain-scoped URIs against a live chain.

use pkguri_core::ValidationError;

use crate::error::{ChainError, Result};
use crate::handle::ChainHandle;
use crate::types::{BlockHash, BlockchainUri, ResourceType};

/// Blocks behind the head used by [`create_latest_block_uri`] callers that
/// want a reorg-safe reference.
pub const DEFAULT_BLOCK_CONFIRMATIONS: u64 = 3;

/// Per-URI chain-match predicate.
///
/// Every [`ChainHandle`] is a matcher through [`chain_matches_uri`].
/// Implement this directly to match URIs some other way.
pub trait ChainMatcher {
    /// Whether `uri` refers to the chain behind this matcher.
    fn matches_chain(&self, uri: &str) -> Result<bool>;
}

impl<C: ChainHandle + ?Sized> ChainMatcher for C {
    fn matches_chain(&self, uri: &str) -> Result<bool> {
        chain_matches_uri(self, uri)
    }
}

/// Check whether a `blockchain://` URI refers to `chain`.
///
/// The genesis hash must equal the chain's genesis, and the referenced
/// block must exist on the chain. Transaction URIs are not supported.
pub fn chain_matches_uri<C: ChainHandle + ?Sized>(chain: &C, uri: &str) -> Result<bool> {
    let parsed = BlockchainUri::parse(uri)?;

    if chain.genesis_hash()? != parsed.genesis_hash {
        return Ok(false);
    }

    match parsed.resource {
        ResourceType::Block => chain.has_block(&parsed.resource_hash),
        ResourceType::Transaction => Err(ChainError::UnsupportedResource(
            parsed.resource.to_string(),
        )),
    }
}

/// Return the only candidate URI that matches `chain`.
///
/// # Errors
/// - `NoMatchingUri` if no candidate matches.
/// - `AmbiguousMatch` if more than one candidate matches, listing them all.
/// - `ChainQuery` if the matcher fails on any candidate.
pub fn select_matching_uri<M, S>(candidates: &[S], chain: &M) -> std::result::Result<String, ValidationError>
where
    M: ChainMatcher + ?Sized,
    S: AsRef<str>,
{
    let mut matching = Vec::new();
    for candidate in candidates {
        let uri = candidate.as_ref();
        let matched = chain.matches_chain(uri)?;
        tracing::trace!(uri, matched, "checked candidate URI against chain");
        if matched {
            matching.push(uri.to_string());
        }
    }

    match matching.len() {
        0 => Err(ValidationError::NoMatchingUri),
        1 => Ok(matching.swap_remove(0)),
        count => Err(ValidationError::AmbiguousMatch {
            count,
            uris: matching,
        }),
    }
}

/// Build the `blockchain://` URI for a block.
pub fn create_block_uri(genesis_hash: &BlockHash, block_hash: &BlockHash) -> BlockchainUri {
    BlockchainUri::block(*genesis_hash, *block_hash)
}

/// Build the `blockchain://` URI for the block `blocks_ago` below the head.
pub fn create_latest_block_uri<C: ChainHandle + ?Sized>(
    chain: &C,
    blocks_ago: u64,
) -> Result<BlockchainUri> {
    let latest = chain.latest_block_number()?;
    let target = latest
        .checked_sub(blocks_ago)
        .ok_or(ChainError::NotEnoughBlocks {
            latest,
            requested: blocks_ago,
        })?;

    let block_hash = chain
        .block_hash_at(target)?
        .ok_or(ChainError::BlockNotFound(target))?;

    Ok(create_block_uri(&chain.genesis_hash()?, &block_hash))
}
