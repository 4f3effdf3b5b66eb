//! # pkguri Chain
//!
//! Chain-scoped URIs and the chain lookups they need.
//!
//! ## Overview
//!
//! A package may list several deployments, each scoped to one chain by a
//! BIP-122 URI (`blockchain://<genesis>/block/<hash>`). Given a live chain,
//! exactly one of them must match. This crate abstracts the chain behind
//! the [`ChainHandle`] trait and provides:
//!
//! - [`BlockchainUri`] - parsed `blockchain://` URIs
//! - [`chain_matches_uri`] - the per-URI match predicate
//! - [`select_matching_uri`] - single-match selection over candidates
//! - [`create_block_uri`] / [`create_latest_block_uri`] - URI builders
//! - [`MemoryChain`] - an in-memory chain for tests and offline use
//!
//! ## Usage
//!
//! ```rust
//! use pkguri_chain::{select_matching_uri, BlockHash, MemoryChain};
//!
//! let genesis = BlockHash::from_bytes([0x11; 32]);
//! let block = BlockHash::from_bytes([0x22; 32]);
//! let chain = MemoryChain::new(genesis).with_block(block);
//!
//! let ours = pkguri_chain::create_block_uri(&genesis, &block).to_string();
//! let other = format!("blockchain://{}/block/{}", "33".repeat(32), "44".repeat(32));
//!
//! let selected = select_matching_uri(&[other, ours.clone()], &chain).unwrap();
//! assert_eq!(selected, ours);
//! ```
//!
//! ## Design Notes
//!
//! - **Ambiguity is an error**: two matching candidates never resolve to
//!   the first one.
//! - **Lookups may fail**: a [`ChainHandle`] error aborts selection and is
//!   reported as `ValidationError::ChainQuery`.

pub mod error;
pub mod handle;
pub mod memory;
pub mod selector;
pub mod types;

pub use error::{ChainError, Result};
pub use handle::ChainHandle;
pub use memory::MemoryChain;
pub use selector::{
    chain_matches_uri, create_block_uri, create_latest_block_uri, select_matching_uri,
    ChainMatcher, DEFAULT_BLOCK_CONFIRMATIONS,
};
pub use types::{BlockHash, BlockchainUri, ResourceType};
