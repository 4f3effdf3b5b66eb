//! Error types for the pkguri facade.

use pkguri_chain::ChainError;
use pkguri_core::ValidationError;
use thiserror::Error;

/// Errors that can occur during pkguri operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A URI or blob failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A chain lookup failed.
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    /// An RPC field failed validation.
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// Configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// The validation error behind this error, if any.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors for RPC request and result fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A transaction names a different chain than the connected node.
    #[error("the transaction declared chain ID {declared}, but the connected node is on {connected}")]
    ChainIdMismatch { declared: u64, connected: u64 },

    /// A chain id field that is not an integer.
    #[error("invalid chain ID field: {0}")]
    InvalidChainId(String),

    /// A block's `extraData` exceeds the allowed size.
    #[error(
        "the field extraData is {length} bytes, but should be {max}. \
         It is quite likely that you are connected to a POA chain. \
         The full extraData is: {value}"
    )]
    ExtraDataTooLong {
        length: usize,
        max: usize,
        value: String,
    },

    /// An `extraData` value that cannot be read as bytes.
    #[error("invalid extraData field: {0}")]
    InvalidExtraData(String),
}

/// Result type for pkguri operations.
pub type Result<T> = std::result::Result<T, Error>;
