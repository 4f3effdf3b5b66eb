//! The UriValidator: unified validation service for package URIs.
//!
//! Brings together the core validators, chain selection and RPC field
//! checks behind one configured value, and logs every rejection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use pkguri_chain::{create_latest_block_uri, BlockchainUri, ChainHandle, ChainMatcher};
use pkguri_core::{
    is_github_blob_uri, parse_registry_uri_with, validate_blob_uri_contents,
    validate_content_uri_with, Predicates, RegistryUri, StandardPredicates, SupportedChains,
    UriParts, ValidationError, REGISTRY_URI_SCHEME,
};

use crate::error::{Error, Result};
use crate::fields::{self, MAX_EXTRA_DATA_LENGTH};

/// Configuration for the UriValidator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Scheme registry URIs must use.
    pub registry_scheme: String,
    /// Chains a registry URI may name.
    pub supported_chains: SupportedChains,
    /// Largest `extraData` accepted on blocks, in bytes.
    pub max_extra_data_length: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            registry_scheme: REGISTRY_URI_SCHEME.to_string(),
            supported_chains: SupportedChains::default(),
            max_extra_data_length: MAX_EXTRA_DATA_LENGTH,
        }
    }
}

impl ValidatorConfig {
    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }
}

/// What kind of URI a string is, judged by its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UriKind {
    /// Content-addressed URI, e.g. `ipfs://...`.
    Content,
    /// GitHub git blob URI, verified with blob contents.
    GithubBlob,
    /// Registry URI using the configured scheme.
    Registry,
    /// BIP-122 `blockchain://` URI.
    Blockchain,
    Unknown,
}

/// The main validation service.
///
/// Provides a unified API for:
/// - Validating and parsing registry URIs
/// - Validating content URIs and blob contents
/// - Selecting the one chain-scoped URI that matches a chain
/// - Checking RPC fields against the connected chain
pub struct UriValidator<P = StandardPredicates> {
    /// Configuration.
    config: ValidatorConfig,
    /// Lookups the validators delegate to.
    predicates: P,
}

impl UriValidator<StandardPredicates> {
    /// Create a validator using the standard predicates.
    pub fn new(config: ValidatorConfig) -> Self {
        let predicates = StandardPredicates::new(config.supported_chains.clone())
            .with_scheme(config.registry_scheme.clone());
        Self { config, predicates }
    }
}

impl Default for UriValidator<StandardPredicates> {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl<P: Predicates> UriValidator<P> {
    /// Create a validator with custom predicates.
    ///
    /// The predicates decide the registry scheme and the supported chains;
    /// the matching `config` fields are ignored.
    pub fn with_predicates(config: ValidatorConfig, predicates: P) -> Self {
        Self { config, predicates }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Get the predicates.
    pub fn predicates(&self) -> &P {
        &self.predicates
    }

    // ─────────────────────────────────────────────────────────────────────────
    // URI Validation
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate a content-addressed URI.
    pub fn validate_content_uri(&self, uri: &str) -> Result<()> {
        observe("content URI", uri, validate_content_uri_with(uri, &self.predicates))
    }

    /// Validate a registry URI.
    pub fn validate_registry_uri(&self, uri: &str) -> Result<()> {
        self.parse_registry_uri(uri).map(|_| ())
    }

    /// Validate a registry URI and return its parts.
    pub fn parse_registry_uri(&self, uri: &str) -> Result<RegistryUri> {
        observe("registry URI", uri, parse_registry_uri_with(uri, &self.predicates))
    }

    /// Verify fetched contents against the digest in their blob URI.
    pub fn validate_blob_contents(&self, contents: &[u8], blob_uri: &str) -> Result<()> {
        observe("blob contents", blob_uri, validate_blob_uri_contents(contents, blob_uri))
    }

    /// Return the only candidate URI that matches `chain`.
    pub fn select_matching_uri<M, S>(&self, candidates: &[S], chain: &M) -> Result<String>
    where
        M: ChainMatcher + ?Sized,
        S: AsRef<str>,
    {
        let subject = format!("{} candidates", candidates.len());
        observe(
            "chain-scoped URI",
            &subject,
            pkguri_chain::select_matching_uri(candidates, chain),
        )
    }

    /// Check one `blockchain://` URI against `chain`.
    pub fn chain_matches<M: ChainMatcher + ?Sized>(&self, uri: &str, chain: &M) -> Result<bool> {
        observe("chain-scoped URI", uri, chain.matches_chain(uri))
    }

    /// Build the URI of the block `blocks_ago` below the head of `chain`.
    pub fn latest_block_uri<C: ChainHandle + ?Sized>(
        &self,
        chain: &C,
        blocks_ago: u64,
    ) -> Result<BlockchainUri> {
        let subject = format!("{} blocks below head", blocks_ago);
        observe(
            "latest block URI",
            &subject,
            create_latest_block_uri(chain, blocks_ago),
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Classification
    // ─────────────────────────────────────────────────────────────────────────

    /// Classify a URI by shape.
    ///
    /// Registry URIs are recognized by scheme alone; use
    /// [`Self::validate_registry_uri`] to check the rest.
    pub fn classify(&self, uri: &str) -> UriKind {
        if is_github_blob_uri(uri) {
            UriKind::GithubBlob
        } else if self.predicates.is_content_uri(uri) {
            UriKind::Content
        } else if BlockchainUri::parse(uri).is_ok() {
            UriKind::Blockchain
        } else if UriParts::split(uri).scheme == self.predicates.registry_scheme() {
            UriKind::Registry
        } else {
            UriKind::Unknown
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // RPC Fields
    // ─────────────────────────────────────────────────────────────────────────

    /// Check a transaction's `chainId` against the connected node.
    pub fn validate_transaction(&self, transaction: &Value, connected: Option<u64>) -> Result<()> {
        observe(
            "transaction chainId",
            &transaction.to_string(),
            fields::validate_transaction_chain_id(transaction, connected),
        )
    }

    /// Check a block's `extraData` length.
    pub fn validate_block(&self, block: &Value) -> Result<()> {
        observe(
            "block extraData",
            &block.to_string(),
            fields::validate_block(block, self.config.max_extra_data_length),
        )
    }
}

fn observe<T, E: Into<Error>>(
    what: &'static str,
    subject: &str,
    result: std::result::Result<T, E>,
) -> Result<T> {
    match result {
        Ok(value) => {
            tracing::debug!(subject, "accepted {}", what);
            Ok(value)
        }
        Err(e) => {
            let err = e.into();
            let kind = err.as_validation().map(ValidationError::kind);
            tracing::warn!(subject, ?kind, "rejected {}: {}", what, err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use pkguri_chain::{BlockHash, ChainError, MemoryChain};
    use pkguri_core::{ChainId, ValidationErrorKind};
    use serde_json::json;

    const ADDRESS: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    fn validation_kind(err: Error) -> ValidationErrorKind {
        match err {
            Error::Validation(e) => e.kind(),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert_eq!(config.registry_scheme, "erc1319");
        assert_eq!(config.max_extra_data_length, 32);
        assert!(config.supported_chains.contains(ChainId(42)));
    }

    #[test]
    fn test_config_from_json() {
        let config = ValidatorConfig::from_json(
            r#"{"registry_scheme": "ercxxx", "supported_chains": {"1337": "devnet"}}"#,
        )
        .unwrap();
        assert_eq!(config.registry_scheme, "ercxxx");
        assert!(config.supported_chains.contains(ChainId(1337)));
        assert!(!config.supported_chains.contains(ChainId(1)));
        assert_eq!(config.max_extra_data_length, MAX_EXTRA_DATA_LENGTH);

        assert!(matches!(
            ValidatorConfig::from_json("{\"max_extra_data_length\": \"big\"}"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_configured_scheme_and_chains() {
        let config = ValidatorConfig::from_json(
            r#"{"registry_scheme": "ercxxx", "supported_chains": {"1337": "devnet"}}"#,
        )
        .unwrap();
        let validator = UriValidator::new(config);

        assert!(validator.validate_registry_uri("ercxxx://packages.eth:1337/owned").is_ok());
        assert_eq!(
            validation_kind(
                validator
                    .validate_registry_uri("erc1319://packages.eth:1337/owned")
                    .unwrap_err()
            ),
            ValidationErrorKind::InvalidUriScheme
        );
        let err = validator
            .validate_registry_uri("ercxxx://packages.eth:1/owned")
            .unwrap_err();
        assert!(err.to_string().contains("1337 (devnet)"));
    }

    #[test]
    fn test_parse_registry_uri() {
        let validator = UriValidator::default();
        let parsed = validator
            .parse_registry_uri(&format!("erc1319://{}:1/owned?version=1.0.0", ADDRESS))
            .unwrap();
        assert_eq!(parsed.identity.as_str(), ADDRESS);
        assert_eq!(parsed.version.as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_classify() {
        let validator = UriValidator::default();
        let genesis = "11".repeat(32);
        let block = "22".repeat(32);

        assert_eq!(
            validator.classify("ipfs://QmTKB75Y73zhNbD3Y73xeXGjYrZHmaXXNxoZqGCagu7r8u"),
            UriKind::Content
        );
        assert_eq!(
            validator.classify(
                "https://api.github.com/repos/o/r/git/blobs/b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0"
            ),
            UriKind::GithubBlob
        );
        assert_eq!(
            validator.classify(&format!("blockchain://{}/block/{}", genesis, block)),
            UriKind::Blockchain
        );
        assert_eq!(validator.classify("erc1319://noColon"), UriKind::Registry);
        assert_eq!(validator.classify("https://example.com"), UriKind::Unknown);
    }

    #[test]
    fn test_select_through_validator() {
        let genesis = BlockHash::from_bytes([0x01; 32]);
        let block = BlockHash::from_bytes([0x02; 32]);
        let chain = MemoryChain::new(genesis).with_block(block);
        let validator = UriValidator::default();

        let ours = BlockchainUri::block(genesis, block).to_string();
        let theirs = BlockchainUri::block(BlockHash::from_bytes([0x09; 32]), block).to_string();

        assert_eq!(
            validator
                .select_matching_uri(&[theirs.clone(), ours.clone()], &chain)
                .unwrap(),
            ours
        );
        assert_eq!(
            validation_kind(
                validator
                    .select_matching_uri(&[ours.clone(), ours], &chain)
                    .unwrap_err()
            ),
            ValidationErrorKind::AmbiguousMatch
        );
        assert_eq!(
            validation_kind(validator.select_matching_uri(&[theirs], &chain).unwrap_err()),
            ValidationErrorKind::NoMatchingUri
        );
    }

    #[test]
    fn test_rpc_fields() {
        let validator = UriValidator::default();
        assert!(validator
            .validate_transaction(&json!({"chainId": 1}), Some(1))
            .is_ok());
        assert!(matches!(
            validator.validate_transaction(&json!({"chainId": 1}), Some(3)),
            Err(Error::Field(FieldError::ChainIdMismatch { .. }))
        ));
        assert!(matches!(
            validator.validate_block(&json!({"extraData": format!("0x{}", "ff".repeat(33))})),
            Err(Error::Field(FieldError::ExtraDataTooLong { length: 33, .. }))
        ));
    }

    #[test]
    fn test_chain_operations_through_validator() {
        let genesis = BlockHash::from_bytes([0x01; 32]);
        let chain = MemoryChain::new(genesis)
            .with_blocks((2..=6).map(|i| BlockHash::from_bytes([i; 32])));
        let validator = UriValidator::default();

        let latest = validator.latest_block_uri(&chain, 3).unwrap();
        assert_eq!(latest.resource_hash, BlockHash::from_bytes([0x03; 32]));
        assert!(validator.chain_matches(&latest.to_string(), &chain).unwrap());

        assert!(matches!(
            validator.latest_block_uri(&chain, 6),
            Err(Error::Chain(ChainError::NotEnoughBlocks { latest: 5, requested: 6 }))
        ));
        assert!(matches!(
            validator.chain_matches("blockchain://nope", &chain),
            Err(Error::Chain(ChainError::InvalidBlockchainUri(_)))
        ));
    }
}
