//! URI validation: registry URIs, content-addressed URIs and blob contents.
//!
//! Every validator checks its rules in a fixed order and returns the first
//! violation. Registry URIs are checked scheme, then authority, then
//! package name, then version query.

use crate::crypto::GitBlobHash;
use crate::error::ValidationError;
use crate::predicates::{Predicates, StandardPredicates};
use crate::types::{ChainId, RegistryIdentity, RegistryUri, REGISTRY_URI_SCHEME};
use crate::uri::UriParts;

/// Validate a content-addressed URI with the standard recognizer.
pub fn validate_content_uri(uri: &str) -> Result<(), ValidationError> {
    validate_content_uri_with(uri, &StandardPredicates::default())
}

/// Validate a content-addressed URI with the given recognizer.
pub fn validate_content_uri_with<P: Predicates + ?Sized>(
    uri: &str,
    predicates: &P,
) -> Result<(), ValidationError> {
    if !predicates.is_content_uri(uri) {
        return Err(ValidationError::InvalidUri(uri.to_string()));
    }
    Ok(())
}

/// Validate a registry URI with the standard predicates.
pub fn validate_registry_uri(uri: &str) -> Result<(), ValidationError> {
    parse_registry_uri(uri).map(|_| ())
}

/// Validate a registry URI with the given predicates.
pub fn validate_registry_uri_with<P: Predicates + ?Sized>(
    uri: &str,
    predicates: &P,
) -> Result<(), ValidationError> {
    parse_registry_uri_with(uri, predicates).map(|_| ())
}

/// Validate a registry URI and return its parts.
pub fn parse_registry_uri(uri: &str) -> Result<RegistryUri, ValidationError> {
    parse_registry_uri_with(uri, &StandardPredicates::default())
}

/// Validate a registry URI with the given predicates and return its parts.
///
/// Checks, in order:
/// 1. the scheme equals [`Predicates::registry_scheme`]
/// 2. the authority is `identity:chain_id` with a known identity form and
///    a supported chain id
/// 3. a non-empty package path satisfies the package-name grammar
/// 4. a query is only present together with a package name
/// 5. a query carries a `version` key
pub fn parse_registry_uri_with<P: Predicates + ?Sized>(
    uri: &str,
    predicates: &P,
) -> Result<RegistryUri, ValidationError> {
    let parts = UriParts::split(uri);

    check_scheme(&parts.scheme, predicates.registry_scheme())?;
    let (identity, chain_id) = parse_authority(parts.authority, predicates)?;

    let package_name = parts.path.trim_matches('/');
    if !package_name.is_empty() {
        predicates.validate_package_name(package_name)?;
    }

    if package_name.is_empty() && !parts.query.is_empty() {
        return Err(ValidationError::MissingPackageName(uri.to_string()));
    }

    let version = if parts.query.is_empty() {
        None
    } else {
        Some(version_param(parts.query)?)
    };

    Ok(RegistryUri {
        identity,
        chain_id,
        package_name: (!package_name.is_empty()).then(|| package_name.to_string()),
        version,
    })
}

/// Validate that `scheme` is the registry URI scheme.
pub fn validate_registry_uri_scheme(scheme: &str) -> Result<(), ValidationError> {
    check_scheme(scheme, REGISTRY_URI_SCHEME)
}

fn check_scheme(scheme: &str, expected: &str) -> Result<(), ValidationError> {
    if scheme != expected {
        return Err(ValidationError::InvalidUriScheme(scheme.to_string()));
    }
    Ok(())
}

/// Validate an `identity:chain_id` authority with the standard predicates.
pub fn validate_registry_uri_authority(authority: &str) -> Result<(), ValidationError> {
    validate_registry_uri_authority_with(authority, &StandardPredicates::default())
}

/// Validate an `identity:chain_id` authority with the given predicates.
pub fn validate_registry_uri_authority_with<P: Predicates + ?Sized>(
    authority: &str,
    predicates: &P,
) -> Result<(), ValidationError> {
    parse_authority(authority, predicates).map(|_| ())
}

fn parse_authority<P: Predicates + ?Sized>(
    authority: &str,
    predicates: &P,
) -> Result<(RegistryIdentity, ChainId), ValidationError> {
    let mut pieces = authority.split(':');
    let (identity, chain_id) = match (pieces.next(), pieces.next(), pieces.next()) {
        (Some(identity), Some(chain_id), None) => (identity, chain_id),
        _ => return Err(ValidationError::MalformedAuthority(authority.to_string())),
    };

    let identity = if predicates.is_domain_name(identity) {
        RegistryIdentity::Domain(identity.to_string())
    } else if predicates.is_checksum_address(identity) {
        RegistryIdentity::Address(identity.to_string())
    } else {
        return Err(ValidationError::InvalidAuthorityIdentity(identity.to_string()));
    };

    // Whitespace around the chain id is ignored.
    let parsed = chain_id
        .trim()
        .parse::<ChainId>()
        .ok()
        .filter(|id| predicates.is_supported_chain_id(*id))
        .ok_or_else(|| ValidationError::UnsupportedChainId {
            chain_id: chain_id.to_string(),
            supported: predicates.supported_chain_summary(),
        })?;

    Ok((identity, parsed))
}

/// Validate that a query string carries a `version` key.
///
/// Blank values count: `version` and `version=` are both accepted. The
/// version value itself is not checked.
pub fn validate_registry_uri_version(query: &str) -> Result<(), ValidationError> {
    version_param(query).map(|_| ())
}

fn version_param(query: &str) -> Result<String, ValidationError> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "version")
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| ValidationError::MissingVersionKey(query.to_string()))
}

/// Verify that `contents` hash to the digest at the end of `blob_uri`.
///
/// The contents must be UTF-8 text. They are framed the way git frames a
/// blob object (`"blob " + length + "\0" + text`, length in characters)
/// and hashed with SHA-1. The lowercase hex digest must equal the last
/// path segment of the URI exactly.
pub fn validate_blob_uri_contents(contents: &[u8], blob_uri: &str) -> Result<(), ValidationError> {
    let expected = UriParts::split(blob_uri).last_path_segment();

    let text = std::str::from_utf8(contents).map_err(|e| {
        ValidationError::Encoding(format!(
            "contents fetched from {} are not valid UTF-8: {}",
            blob_uri, e
        ))
    })?;

    let computed = GitBlobHash::hash_text(text).to_hex();
    if computed != expected {
        return Err(ValidationError::ContentHashMismatch {
            uri: blob_uri.to_string(),
            computed,
            expected: expected.to_string(),
        });
    }
    Ok(())
}
