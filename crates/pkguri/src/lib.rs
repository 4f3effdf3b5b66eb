//! # pkguri
//!
//! The unified API for validating the URIs of a package registry.
//!
//! ## Overview
//!
//! Packages in the registry are referenced three ways:
//!
//! - **Registry URIs**: `erc1319://<name-or-address>:<chain_id>/<package>?version=<v>`
//!   locate a package in an on-chain registry
//! - **Content URIs**: `ipfs://<cid>` and GitHub blob URIs reference
//!   immutable package content by digest
//! - **Blockchain URIs**: `blockchain://<genesis>/block/<hash>` scope a
//!   deployment to one chain
//!
//! [`UriValidator`] checks all three, logs rejections through `tracing`,
//! and validates the RPC fields that travel with them (see [`fields`]).
//!
//! ## Usage
//!
//! ```rust
//! use pkguri::{UriKind, UriValidator, ValidatorConfig};
//!
//! let validator = UriValidator::new(ValidatorConfig::default());
//!
//! let uri = "erc1319://0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed:1/owned?version=1.0.0";
//! assert_eq!(validator.classify(uri), UriKind::Registry);
//!
//! let parsed = validator.parse_registry_uri(uri).unwrap();
//! assert_eq!(parsed.package_name.as_deref(), Some("owned"));
//!
//! assert!(validator
//!     .validate_registry_uri("erc1319://0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed:1/?version=1")
//!     .is_err());
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `pkguri::core` - Pure validators, predicates and error family
//! - `pkguri::chain` - Blockchain URIs, chain handles and selection

pub mod error;
pub mod fields;
pub mod validator;

// Re-export component crates
pub use pkguri_chain as chain;
pub use pkguri_core as core;

// Re-export main types for convenience
pub use error::{Error, FieldError, Result};
pub use validator::{UriKind, UriValidator, ValidatorConfig};

// Re-export commonly used component types
pub use pkguri_chain::{BlockHash, BlockchainUri, ChainHandle, ChainMatcher, MemoryChain};
pub use pkguri_core::{
    ChainId, Predicates, RegistryIdentity, RegistryUri, StandardPredicates, SupportedChains,
    ValidationError, ValidationErrorKind,
};
