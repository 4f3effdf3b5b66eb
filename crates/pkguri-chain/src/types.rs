//! Block hashes and BIP-122 `blockchain://` URIs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ChainError;

static BLOCKCHAIN_URI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^blockchain://([0-9a-fA-F]{64})/(block|transaction)/([0-9a-fA-F]{64})$")
        .expect("invalid blockchain URI regex")
});

/// A 32-byte block hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockHash(pub [u8; 32]);

impl BlockHash {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to lowercase hex, without `0x`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex, with or without `0x`, in any case.
    pub fn from_hex(s: &str) -> Result<Self, ChainError> {
        let body = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(body).map_err(|_| ChainError::InvalidHash(s.to_string()))?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| ChainError::InvalidHash(s.to_string()))?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl AsRef<[u8]> for BlockHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for BlockHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// What the trailing hash of a `blockchain://` URI names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Block,
    Transaction,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Block => "block",
            ResourceType::Transaction => "transaction",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A BIP-122 URI: `blockchain://<genesis_hash>/<resource>/<resource_hash>`.
///
/// The genesis hash scopes the resource to one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockchainUri {
    pub genesis_hash: BlockHash,
    pub resource: ResourceType,
    pub resource_hash: BlockHash,
}

impl BlockchainUri {
    /// A URI naming a block on the chain with the given genesis.
    pub fn block(genesis_hash: BlockHash, block_hash: BlockHash) -> Self {
        Self {
            genesis_hash,
            resource: ResourceType::Block,
            resource_hash: block_hash,
        }
    }

    /// Parse a `blockchain://` URI. Both hashes are 64 hex characters,
    /// without `0x`.
    pub fn parse(uri: &str) -> Result<Self, ChainError> {
        let captures = BLOCKCHAIN_URI
            .captures(uri)
            .ok_or_else(|| ChainError::InvalidBlockchainUri(uri.to_string()))?;

        let resource = match &captures[2] {
            "block" => ResourceType::Block,
            _ => ResourceType::Transaction,
        };

        Ok(Self {
            genesis_hash: BlockHash::from_hex(&captures[1])?,
            resource,
            resource_hash: BlockHash::from_hex(&captures[3])?,
        })
    }
}

impl FromStr for BlockchainUri {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BlockchainUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "blockchain://{}/{}/{}",
            self.genesis_hash.to_hex(),
            self.resource,
            self.resource_hash.to_hex()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS: &str = "d4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3";
    const BLOCK: &str = "88e96d4537bea4d9c05d12549907b32561d3bf31f45aae734cdc119f13406cb6";

    #[test]
    fn test_parse_block_uri() {
        let uri = format!("blockchain://{}/block/{}", GENESIS, BLOCK);
        let parsed = BlockchainUri::parse(&uri).unwrap();
        assert_eq!(parsed.genesis_hash.to_hex(), GENESIS);
        assert_eq!(parsed.resource, ResourceType::Block);
        assert_eq!(parsed.resource_hash.to_hex(), BLOCK);
        assert_eq!(parsed.to_string(), uri);
    }

    #[test]
    fn test_parse_transaction_uri() {
        let uri = format!("blockchain://{}/transaction/{}", GENESIS, BLOCK);
        let parsed: BlockchainUri = uri.parse().unwrap();
        assert_eq!(parsed.resource, ResourceType::Transaction);
    }

    #[test]
    fn test_uppercase_hex_accepted() {
        let uri = format!("blockchain://{}/block/{}", GENESIS.to_uppercase(), BLOCK);
        let parsed = BlockchainUri::parse(&uri).unwrap();
        assert_eq!(parsed.genesis_hash.to_hex(), GENESIS);
    }

    #[test]
    fn test_rejects_malformed() {
        for uri in [
            format!("blockchain://{}/block/{}", &GENESIS[..63], BLOCK),
            format!("blockchain://0x{}/block/{}", GENESIS, BLOCK),
            format!("blockchain://{}/receipt/{}", GENESIS, BLOCK),
            format!("blockchain://{}/block/{}/", GENESIS, BLOCK),
            format!("bip122://{}/block/{}", GENESIS, BLOCK),
            "ipfs://QmTKB75Y73zhNbD3Y73xeXGjYrZHmaXXNxoZqGCagu7r8u".to_string(),
        ] {
            assert!(
                matches!(BlockchainUri::parse(&uri), Err(ChainError::InvalidBlockchainUri(_))),
                "{uri} should be rejected"
            );
        }
    }

    #[test]
    fn test_block_hash_hex() {
        let hash = BlockHash::from_hex(&format!("0x{}", GENESIS)).unwrap();
        assert_eq!(hash, BlockHash::from_hex(GENESIS).unwrap());
        assert_eq!(hash.to_string(), format!("0x{}", GENESIS));
        assert!(BlockHash::from_hex("0x1234").is_err());
        assert!(BlockHash::from_hex("zz").is_err());
    }

    proptest::proptest! {
        #[test]
        fn test_hash_case_does_not_matter(bytes in proptest::prelude::any::<[u8; 32]>()) {
            let hash = BlockHash::from_bytes(bytes);
            let upper = format!("blockchain://{}/block/{}", GENESIS, hash.to_hex().to_uppercase());
            let parsed = BlockchainUri::parse(&upper).unwrap();
            proptest::prop_assert_eq!(parsed.resource_hash, hash);
        }
    }
}
