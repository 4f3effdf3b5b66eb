//! Recognizers consulted by the validators.
//!
//! The [`Predicates`] trait is the seam between the validation rules and
//! the lookups they depend on. [`StandardPredicates`] implements it with the
//! recognizers in this module and a [`SupportedChains`] table.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::crypto;
use crate::error::ValidationError;
use crate::types::{ChainId, SupportedChains, REGISTRY_URI_SCHEME};
use crate::uri::UriParts;

/// Host serving content-addressed GitHub blobs.
pub const GITHUB_API_AUTHORITY: &str = "api.github.com";

/// Package names: lowercase letter, then up to 255 of `[-a-z0-9]`.
static PACKAGE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][-a-z0-9]{0,255}$").expect("invalid package name regex"));

/// Check whether `uri` is an `ipfs://` URI with a non-empty target.
pub fn is_ipfs_uri(uri: &str) -> bool {
    let parts = UriParts::split(uri);
    parts.scheme == "ipfs" && !(parts.authority.is_empty() && parts.path.is_empty())
}

/// Check whether `uri` addresses a git blob through the GitHub API.
pub fn is_github_blob_uri(uri: &str) -> bool {
    let parts = UriParts::split(uri);
    parts.scheme == "https"
        && parts.authority == GITHUB_API_AUTHORITY
        && parts.path.starts_with("/repos/")
        && parts.path.contains("/git/blobs/")
        && !parts.last_path_segment().is_empty()
}

/// Check whether `uri` is any supported content-addressed URI.
pub fn is_content_addressed_uri(uri: &str) -> bool {
    is_ipfs_uri(uri) || is_github_blob_uri(uri)
}

/// Check whether `identity` looks like an ENS name.
///
/// Accepts `name.eth` and `sub.name.eth`; every label must be non-empty.
pub fn is_ens_domain(identity: &str) -> bool {
    if !identity.ends_with(".eth") {
        return false;
    }
    let labels: Vec<&str> = identity.split('.').collect();
    matches!(labels.len(), 2 | 3) && labels.iter().all(|label| !label.is_empty())
}

/// Validate a package name against the registry grammar.
pub fn validate_package_name(name: &str) -> Result<(), ValidationError> {
    if PACKAGE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPackageName(name.to_string()))
    }
}

/// Lookups the validators delegate to.
///
/// Implementations must be pure from the caller's point of view: repeated
/// calls with the same input give the same answer.
pub trait Predicates {
    /// The scheme registry URIs must use.
    fn registry_scheme(&self) -> &str {
        REGISTRY_URI_SCHEME
    }

    /// Recognizer for content-addressed URIs.
    fn is_content_uri(&self, uri: &str) -> bool;

    /// Recognizer for domain-style registry names.
    fn is_domain_name(&self, identity: &str) -> bool;

    /// Checker for checksummed registry addresses.
    fn is_checksum_address(&self, identity: &str) -> bool;

    /// Membership check against the supported chain ids.
    fn is_supported_chain_id(&self, chain_id: ChainId) -> bool;

    /// Human-readable list of supported chains, used in error messages.
    fn supported_chain_summary(&self) -> String;

    /// Package-name grammar.
    fn validate_package_name(&self, name: &str) -> Result<(), ValidationError>;
}

/// The default recognizers and a configurable chain table.
#[derive(Debug, Clone, Default)]
pub struct StandardPredicates {
    chains: SupportedChains,
    scheme: Option<String>,
}

impl StandardPredicates {
    pub fn new(chains: SupportedChains) -> Self {
        Self {
            chains,
            scheme: None,
        }
    }

    /// Use a registry scheme other than [`REGISTRY_URI_SCHEME`].
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into().to_ascii_lowercase());
        self
    }

    pub fn chains(&self) -> &SupportedChains {
        &self.chains
    }
}

impl Predicates for StandardPredicates {
    fn registry_scheme(&self) -> &str {
        self.scheme.as_deref().unwrap_or(REGISTRY_URI_SCHEME)
    }

    fn is_content_uri(&self, uri: &str) -> bool {
        is_ipfs_uri(uri)
    }

    fn is_domain_name(&self, identity: &str) -> bool {
        is_ens_domain(identity)
    }

    fn is_checksum_address(&self, identity: &str) -> bool {
        crypto::is_checksum_address(identity)
    }

    fn is_supported_chain_id(&self, chain_id: ChainId) -> bool {
        self.chains.contains(chain_id)
    }

    fn supported_chain_summary(&self) -> String {
        self.chains.to_string()
    }

    fn validate_package_name(&self, name: &str) -> Result<(), ValidationError> {
        validate_package_name(name)
    }
}
