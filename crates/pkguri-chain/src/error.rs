//! Error types for chain lookups and chain-scoped URIs.

use pkguri_core::ValidationError;
use thiserror::Error;

/// Errors that can occur while matching URIs against a chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// Not a `blockchain://<genesis>/<resource>/<hash>` URI.
    #[error("invalid blockchain URI: {0}")]
    InvalidBlockchainUri(String),

    /// A resource type the matcher cannot look up.
    #[error("unsupported resource type: {0}")]
    UnsupportedResource(String),

    /// A hash that is not 32 bytes of hex.
    #[error("invalid block hash: {0}")]
    InvalidHash(String),

    /// The chain is shorter than the requested confirmation depth.
    #[error("only latest block {latest} available, cannot create URI for block {requested} blocks ago")]
    NotEnoughBlocks { latest: u64, requested: u64 },

    /// The chain has no block at this height.
    #[error("block {0} not found")]
    BlockNotFound(u64),

    /// The chain backend failed.
    #[error("provider error: {0}")]
    Provider(String),
}

impl From<ChainError> for ValidationError {
    fn from(e: ChainError) -> Self {
        ValidationError::ChainQuery(e.to_string())
    }
}

/// Result type for chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;
