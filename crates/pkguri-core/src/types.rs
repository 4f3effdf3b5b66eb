//! Strong type definitions for registry URIs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The registry URI scheme tag.
pub const REGISTRY_URI_SCHEME: &str = "erc1319";

/// A numeric chain identifier (e.g. 1 for mainnet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChainId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// The set of chain identifiers a registry URI may name, with network names.
///
/// Iteration and rendering are ordered by chain id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportedChains(BTreeMap<u64, String>);

impl SupportedChains {
    /// An empty set. Every chain id is unsupported.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Add a chain, replacing the name if it is already present.
    pub fn with_chain(mut self, id: u64, name: impl Into<String>) -> Self {
        self.0.insert(id, name.into());
        self
    }

    pub fn contains(&self, id: ChainId) -> bool {
        self.0.contains_key(&id.0)
    }

    /// Network name for a chain id.
    pub fn name(&self, id: ChainId) -> Option<&str> {
        self.0.get(&id.0).map(String::as_str)
    }

    pub fn ids(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.0.keys().copied().map(ChainId)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SupportedChains {
    fn default() -> Self {
        Self::empty()
            .with_chain(1, "mainnet")
            .with_chain(3, "ropsten")
            .with_chain(4, "rinkeby")
            .with_chain(5, "goerli")
            .with_chain(42, "kovan")
    }
}

impl fmt::Display for SupportedChains {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (id, name)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} ({})", id, name)?;
        }
        Ok(())
    }
}

/// The identity half of a registry authority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistryIdentity {
    /// An ENS-style name such as `packages.eth`.
    Domain(String),
    /// An EIP-55 checksummed registry contract address.
    Address(String),
}

impl RegistryIdentity {
    pub fn as_str(&self) -> &str {
        match self {
            RegistryIdentity::Domain(name) => name,
            RegistryIdentity::Address(address) => address,
        }
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, RegistryIdentity::Domain(_))
    }
}

impl fmt::Display for RegistryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated registry URI.
///
/// Produced by [`crate::parse_registry_uri`]. A `version` is only ever
/// present together with a `package_name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistryUri {
    pub identity: RegistryIdentity,
    pub chain_id: ChainId,
    pub package_name: Option<String>,
    pub version: Option<String>,
}

impl RegistryUri {
    /// The `identity:chain_id` authority.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.identity, self.chain_id)
    }
}

impl fmt::Display for RegistryUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", REGISTRY_URI_SCHEME, self.authority())?;
        if let Some(name) = &self.package_name {
            write!(f, "/{}", name)?;
            if let Some(version) = &self.version {
                let query: String = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("version", version)
                    .finish();
                write!(f, "?{}", query)?;
            }
        }
        Ok(())
    }
}
