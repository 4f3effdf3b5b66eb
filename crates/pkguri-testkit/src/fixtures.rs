//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::collections::HashSet;

use pkguri_chain::{BlockHash, BlockchainUri, ChainError, ChainMatcher, MemoryChain};
use pkguri_core::{ChainId, GitBlobHash, Predicates, ValidationError};

/// A checksummed registry address.
pub const REGISTRY_ADDRESS: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

/// An ENS registry name.
pub const REGISTRY_DOMAIN: &str = "packages.eth";

/// Build a GitHub blob URI whose digest matches `contents`.
pub fn blob_uri(contents: &str) -> String {
    format!(
        "https://api.github.com/repos/pkguri/fixtures/git/blobs/{}",
        GitBlobHash::hash_text(contents).to_hex()
    )
}

/// Build a registry URI on the default scheme.
pub fn registry_uri(identity: &str, chain_id: u64, package: &str, version: Option<&str>) -> String {
    match version {
        Some(version) => format!("erc1319://{}:{}/{}?version={}", identity, chain_id, package, version),
        None => format!("erc1319://{}:{}/{}", identity, chain_id, package),
    }
}

/// Predicates with fixed answers, for exercising the validators in isolation.
#[derive(Debug, Clone)]
pub struct StubPredicates {
    pub scheme: String,
    pub content_uri: bool,
    pub domain_name: bool,
    pub checksum_address: bool,
    pub supported_chain: bool,
    pub package_name: bool,
}

impl StubPredicates {
    /// Every lookup succeeds.
    pub fn accepting() -> Self {
        Self {
            scheme: "erc1319".to_string(),
            content_uri: true,
            domain_name: true,
            checksum_address: true,
            supported_chain: true,
            package_name: true,
        }
    }

    /// Every lookup fails.
    pub fn rejecting() -> Self {
        Self {
            content_uri: false,
            domain_name: false,
            checksum_address: false,
            supported_chain: false,
            package_name: false,
            ..Self::accepting()
        }
    }

    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }
}

impl Predicates for StubPredicates {
    fn registry_scheme(&self) -> &str {
        &self.scheme
    }

    fn is_content_uri(&self, _uri: &str) -> bool {
        self.content_uri
    }

    fn is_domain_name(&self, _identity: &str) -> bool {
        self.domain_name
    }

    fn is_checksum_address(&self, _identity: &str) -> bool {
        self.checksum_address
    }

    fn is_supported_chain_id(&self, _chain_id: ChainId) -> bool {
        self.supported_chain
    }

    fn supported_chain_summary(&self) -> String {
        "stub".to_string()
    }

    fn validate_package_name(&self, name: &str) -> Result<(), ValidationError> {
        if self.package_name {
            Ok(())
        } else {
            Err(ValidationError::InvalidPackageName(name.to_string()))
        }
    }
}

/// A matcher that accepts a fixed set of URIs.
#[derive(Debug, Clone, Default)]
pub struct StubMatcher {
    matching: HashSet<String>,
    failing: HashSet<String>,
}

impl StubMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `uri` as matching.
    pub fn matching(mut self, uri: impl Into<String>) -> Self {
        self.matching.insert(uri.into());
        self
    }

    /// Fail with a provider error when asked about `uri`.
    pub fn failing(mut self, uri: impl Into<String>) -> Self {
        self.failing.insert(uri.into());
        self
    }
}

impl ChainMatcher for StubMatcher {
    fn matches_chain(&self, uri: &str) -> pkguri_chain::Result<bool> {
        if self.failing.contains(uri) {
            return Err(ChainError::Provider(format!("lookup failed for {}", uri)));
        }
        Ok(self.matching.contains(uri))
    }
}

/// A deterministic in-memory chain.
///
/// Block hashes are derived from `seed` and the block height, so two
/// fixtures with different seeds never share a genesis.
#[derive(Debug, Clone)]
pub struct ChainFixture {
    pub seed: u8,
    pub chain: MemoryChain,
}

impl ChainFixture {
    /// A chain with `blocks` blocks on top of genesis.
    pub fn new(seed: u8, blocks: u64) -> Self {
        let chain = MemoryChain::new(block_hash(seed, 0))
            .with_blocks((1..=blocks).map(|height| block_hash(seed, height)));
        Self { seed, chain }
    }

    pub fn genesis(&self) -> BlockHash {
        block_hash(self.seed, 0)
    }

    /// Hash of the block at `height`, whether or not the chain holds it.
    pub fn hash_at(&self, height: u64) -> BlockHash {
        block_hash(self.seed, height)
    }

    /// `blockchain://` URI for the block at `height`.
    pub fn block_uri(&self, height: u64) -> String {
        BlockchainUri::block(self.genesis(), self.hash_at(height)).to_string()
    }
}

fn block_hash(seed: u8, height: u64) -> BlockHash {
    let mut bytes = [0u8; 32];
    bytes[0] = seed;
    bytes[24..].copy_from_slice(&height.to_be_bytes());
    BlockHash::from_bytes(bytes)
}

/// Create fixtures for several distinct chains.
pub fn multi_chain_fixtures(count: u8, blocks: u64) -> Vec<ChainFixture> {
    (1..=count).map(|seed| ChainFixture::new(seed, blocks)).collect()
}
