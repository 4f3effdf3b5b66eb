//! Proptest generators for property-based testing.

use proptest::prelude::*;

use pkguri_chain::{BlockHash, BlockchainUri};
use pkguri_core::{to_checksum_address, SupportedChains};

/// Generate a package name accepted by the registry grammar.
pub fn package_name() -> impl Strategy<Value = String> {
    "[a-z][-a-z0-9]{0,31}".prop_map(String::from)
}

/// Generate a name the registry grammar rejects.
pub fn invalid_package_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9-][a-z0-9]{0,8}".prop_map(String::from),
        "[a-z]{1,4}[A-Z_.][a-z]{0,4}".prop_map(String::from),
    ]
}

/// Generate a version string.
pub fn version() -> impl Strategy<Value = String> {
    (0u32..20, 0u32..20, 0u32..100).prop_map(|(major, minor, patch)| {
        format!("{}.{}.{}", major, minor, patch)
    })
}

/// Generate a chain id from the default supported set.
pub fn supported_chain_id() -> impl Strategy<Value = u64> {
    let ids: Vec<u64> = SupportedChains::default().ids().map(|id| id.get()).collect();
    prop::sample::select(ids)
}

/// Generate a chain id outside the default supported set.
pub fn unsupported_chain_id() -> impl Strategy<Value = u64> {
    any::<u64>().prop_filter("chain id is supported", |id| {
        !SupportedChains::default().contains((*id).into())
    })
}

/// Generate an ENS name with two or three labels.
pub fn ens_domain() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,12}(\\.[a-z0-9]{1,12})?\\.eth".prop_map(String::from)
}

/// Generate an address in EIP-55 checksum case.
pub fn checksum_address() -> impl Strategy<Value = String> {
    any::<[u8; 20]>()
        .prop_filter_map("unrenderable address", |bytes| {
            to_checksum_address(&hex::encode(bytes)).ok()
        })
}

/// Generate a registry identity: an ENS name or a checksummed address.
pub fn registry_identity() -> impl Strategy<Value = String> {
    prop_oneof![ens_domain(), checksum_address()]
}

/// Generate a BlockHash.
pub fn block_hash() -> impl Strategy<Value = BlockHash> {
    any::<[u8; 32]>().prop_map(BlockHash::from_bytes)
}

/// Generate a block-scoped `blockchain://` URI.
pub fn blockchain_uri() -> impl Strategy<Value = BlockchainUri> {
    (block_hash(), block_hash()).prop_map(|(genesis, block)| BlockchainUri::block(genesis, block))
}

/// Parameters for generating a registry URI.
#[derive(Debug, Clone)]
pub struct RegistryUriParams {
    pub identity: String,
    pub chain_id: u64,
    pub package_name: String,
    pub version: Option<String>,
}

impl RegistryUriParams {
    /// Render on the given scheme.
    pub fn to_uri_with_scheme(&self, scheme: &str) -> String {
        let mut uri = format!(
            "{}://{}:{}/{}",
            scheme, self.identity, self.chain_id, self.package_name
        );
        if let Some(version) = &self.version {
            uri.push_str("?version=");
            uri.push_str(version);
        }
        uri
    }

    /// Render on the default `erc1319` scheme.
    pub fn to_uri(&self) -> String {
        self.to_uri_with_scheme("erc1319")
    }
}

impl Arbitrary for RegistryUriParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            registry_identity(),
            supported_chain_id(),
            package_name(),
            proptest::option::of(version()),
        )
            .prop_map(|(identity, chain_id, package_name, version)| RegistryUriParams {
                identity,
                chain_id,
                package_name,
                version,
            })
            .boxed()
    }
}
