//! # pkguri Core
//!
//! Pure validators for the URIs of a package-registry ecosystem.
//!
//! This crate contains no I/O, no networking and no shared state. Every
//! validator is a synchronous function that either accepts its input or
//! returns the first violated rule as a [`ValidationError`].
//!
//! ## URI Classes
//!
//! - **Registry URIs** - `erc1319://<identity>:<chain_id>/<package>?version=<v>`,
//!   see [`validate_registry_uri`] and [`parse_registry_uri`]
//! - **Content URIs** - `ipfs://<cid>`, see [`validate_content_uri`]
//! - **Blob URIs** - URIs ending in a git blob digest, see
//!   [`validate_blob_uri_contents`]
//!
//! ## Pluggable Predicates
//!
//! The domain-name, checksum-address, chain-id and package-name checks sit
//! behind the [`Predicates`] trait. The plain functions use
//! [`StandardPredicates`]; the `*_with` variants accept any implementation.

pub mod crypto;
pub mod error;
pub mod predicates;
pub mod types;
pub mod uri;
pub mod validation;

pub use crypto::{is_checksum_address, is_hex_address, to_checksum_address, GitBlobHash};
pub use error::{CoreError, ValidationError, ValidationErrorKind};
pub use predicates::{
    is_content_addressed_uri, is_ens_domain, is_github_blob_uri, is_ipfs_uri,
    validate_package_name, Predicates, StandardPredicates,
};
pub use types::{ChainId, RegistryIdentity, RegistryUri, SupportedChains, REGISTRY_URI_SCHEME};
pub use uri::UriParts;
pub use validation::{
    parse_registry_uri, parse_registry_uri_with, validate_blob_uri_contents,
    validate_content_uri, validate_content_uri_with, validate_registry_uri,
    validate_registry_uri_authority, validate_registry_uri_authority_with,
    validate_registry_uri_scheme, validate_registry_uri_version, validate_registry_uri_with,
};
