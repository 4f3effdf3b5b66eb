//! Error types for pkguri core.

use thiserror::Error;

/// Low-level decoding errors for hashes and addresses.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("{0} is not a 20-byte hex address")]
    InvalidAddress(String),
}

/// Validation errors for registry, content and blob URIs.
///
/// Every validator stops at the first violated rule, so a single value of
/// this type describes the whole rejection. Messages repeat the offending
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("URI: {0} is not a valid content-addressed URI")]
    InvalidUri(String),

    #[error("{0} is not a valid registry URI scheme")]
    InvalidUriScheme(String),

    #[error("{0} is not a valid registry URI authority, expected <identity>:<chain_id>")]
    MalformedAuthority(String),

    #[error("{0} is not a valid registry address or ENS domain")]
    InvalidAuthorityIdentity(String),

    #[error("chain ID: {chain_id} is not supported, supported chain ids include: {supported}")]
    UnsupportedChainId { chain_id: String, supported: String },

    #[error("{0} is not a valid package name")]
    InvalidPackageName(String),

    #[error("registry URI {0} provides a version without a package name")]
    MissingPackageName(String),

    #[error("{0} is not a correctly formatted version param")]
    MissingVersionKey(String),

    #[error("no candidate URI matches the connected chain")]
    NoMatchingUri,

    #[error("too many ({count}) URIs match the connected chain: {uris:?}")]
    AmbiguousMatch { count: usize, uris: Vec<String> },

    #[error("hash of contents fetched from {uri} is {computed}, which does not match its hash: {expected}")]
    ContentHashMismatch {
        uri: String,
        computed: String,
        expected: String,
    },

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("chain query failed: {0}")]
    ChainQuery(String),
}

/// Discriminant tag for [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    InvalidUri,
    InvalidUriScheme,
    MalformedAuthority,
    InvalidAuthorityIdentity,
    UnsupportedChainId,
    InvalidPackageName,
    MissingPackageName,
    MissingVersionKey,
    NoMatchingUri,
    AmbiguousMatch,
    ContentHashMismatch,
    Encoding,
    ChainQuery,
}

impl ValidationError {
    /// The discriminant of this error.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::InvalidUri(_) => ValidationErrorKind::InvalidUri,
            ValidationError::InvalidUriScheme(_) => ValidationErrorKind::InvalidUriScheme,
            ValidationError::MalformedAuthority(_) => ValidationErrorKind::MalformedAuthority,
            ValidationError::InvalidAuthorityIdentity(_) => {
                ValidationErrorKind::InvalidAuthorityIdentity
            }
            ValidationError::UnsupportedChainId { .. } => ValidationErrorKind::UnsupportedChainId,
            ValidationError::InvalidPackageName(_) => ValidationErrorKind::InvalidPackageName,
            ValidationError::MissingPackageName(_) => ValidationErrorKind::MissingPackageName,
            ValidationError::MissingVersionKey(_) => ValidationErrorKind::MissingVersionKey,
            ValidationError::NoMatchingUri => ValidationErrorKind::NoMatchingUri,
            ValidationError::AmbiguousMatch { .. } => ValidationErrorKind::AmbiguousMatch,
            ValidationError::ContentHashMismatch { .. } => ValidationErrorKind::ContentHashMismatch,
            ValidationError::Encoding(_) => ValidationErrorKind::Encoding,
            ValidationError::ChainQuery(_) => ValidationErrorKind::ChainQuery,
        }
    }
}

impl From<CoreError> for ValidationError {
    fn from(e: CoreError) -> Self {
        ValidationError::Encoding(e.to_string())
    }
}
