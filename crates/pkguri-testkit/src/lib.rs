//! # pkguri Testkit
//!
//! Testing utilities for pkguri.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Blob digests and checksum addresses with known outputs
//! - **Generators**: Proptest strategies for registry URIs and their parts
//! - **Fixtures**: Stub predicates, stub matchers and deterministic chains
//!
//! ## Golden Vectors
//!
//! ```rust
//! use pkguri_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, computed) in verify_all_vectors() {
//!     assert!(matches, "{}: {}", name, computed);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use pkguri_testkit::generators::RegistryUriParams;
//!
//! proptest! {
//!     #[test]
//!     fn generated_uris_validate(params: RegistryUriParams) {
//!         prop_assert!(pkguri_core::validate_registry_uri(&params.to_uri()).is_ok());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use pkguri_chain::ChainMatcher;
//! use pkguri_testkit::fixtures::ChainFixture;
//!
//! let fixture = ChainFixture::new(1, 10);
//! assert!(fixture.chain.matches_chain(&fixture.block_uri(3)).unwrap());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{
    blob_uri, multi_chain_fixtures, registry_uri, ChainFixture, StubMatcher, StubPredicates,
    REGISTRY_ADDRESS, REGISTRY_DOMAIN,
};
pub use generators::RegistryUriParams;
pub use vectors::{blob_vectors, checksum_vectors, verify_all_vectors, BlobVector, ChecksumVector};
