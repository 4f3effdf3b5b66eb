//! Generic URI decomposition.
//!
//! Splits a URI into `scheme://authority/path?query#fragment` without
//! normalizing or validating any component. Registry URIs carry an
//! `identity:chain_id` authority that is not a valid `host:port` pair, so
//! a strict URL parser would reject inputs that must instead surface as
//! typed authority errors.

/// Borrowed components of a URI.
///
/// Absent components are empty strings. The scheme is the only component
/// that is normalized (ASCII lowercase).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriParts<'a> {
    pub scheme: String,
    pub authority: &'a str,
    pub path: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

impl<'a> UriParts<'a> {
    /// Split `uri` into its components.
    ///
    /// - scheme: everything before the first `:` when it starts with a
    ///   letter and contains only letters, digits, `+`, `-` or `.`
    /// - authority: after `//`, up to the first `/`, `?` or `#`
    /// - fragment: after the first `#`
    /// - query: after the first `?` that precedes the fragment
    pub fn split(uri: &'a str) -> Self {
        let mut scheme = String::new();
        let mut rest = uri;

        if let Some(colon) = uri.find(':') {
            let candidate = &uri[..colon];
            if is_scheme(candidate) {
                scheme = candidate.to_ascii_lowercase();
                rest = &uri[colon + 1..];
            }
        }

        let mut authority = "";
        if let Some(after) = rest.strip_prefix("//") {
            let end = after.find(&['/', '?', '#'][..]).unwrap_or(after.len());
            authority = &after[..end];
            rest = &after[end..];
        }

        let mut fragment = "";
        if let Some(hash) = rest.find('#') {
            fragment = &rest[hash + 1..];
            rest = &rest[..hash];
        }

        let mut query = "";
        if let Some(question) = rest.find('?') {
            query = &rest[question + 1..];
            rest = &rest[..question];
        }

        Self {
            scheme,
            authority,
            path: rest,
            query,
            fragment,
        }
    }

    /// The last `/`-delimited segment of the path.
    pub fn last_path_segment(&self) -> &'a str {
        self.path.rsplit('/').next().unwrap_or("")
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_registry_uri() {
        let parts = UriParts::split("erc1319://packages.eth:1/owned?version=1.0.0");
        assert_eq!(parts.scheme, "erc1319");
        assert_eq!(parts.authority, "packages.eth:1");
        assert_eq!(parts.path, "/owned");
        assert_eq!(parts.query, "version=1.0.0");
        assert_eq!(parts.fragment, "");
    }

    #[test]
    fn test_scheme_is_lowercased() {
        let parts = UriParts::split("ERC1319://packages.eth:1");
        assert_eq!(parts.scheme, "erc1319");
        assert_eq!(parts.authority, "packages.eth:1");
        assert_eq!(parts.path, "");
    }

    #[test]
    fn test_authority_keeps_extra_colons() {
        let parts = UriParts::split("erc1319://0xAbC:1:2/pkg");
        assert_eq!(parts.authority, "0xAbC:1:2");
        assert_eq!(parts.path, "/pkg");
    }

    #[test]
    fn test_fragment_split_before_query() {
        let parts = UriParts::split("https://host/a/b?x=1#frag?y");
        assert_eq!(parts.path, "/a/b");
        assert_eq!(parts.query, "x=1");
        assert_eq!(parts.fragment, "frag?y");
    }

    #[test]
    fn test_no_scheme() {
        let parts = UriParts::split("1abc://host/path");
        assert_eq!(parts.scheme, "");
        assert_eq!(parts.authority, "");
        assert_eq!(parts.path, "1abc://host/path");
    }

    #[test]
    fn test_authority_ends_at_query() {
        let parts = UriParts::split("erc1319://packages.eth:1?version=1");
        assert_eq!(parts.authority, "packages.eth:1");
        assert_eq!(parts.path, "");
        assert_eq!(parts.query, "version=1");
    }

    #[test]
    fn test_last_path_segment() {
        let parts = UriParts::split("https://api.github.com/repos/o/r/git/blobs/abc123");
        assert_eq!(parts.last_path_segment(), "abc123");
        assert_eq!(UriParts::split("ipfs://").last_path_segment(), "");
    }

    proptest::proptest! {
        #[test]
        fn test_split_reassembles(uri in "[a-z]{1,6}://[a-z0-9.:]{0,12}(/[a-z0-9]{0,6}){0,3}(\\?[a-z=&]{0,10})?(#[a-z]{0,4})?") {
            let parts = UriParts::split(&uri);
            let mut rebuilt = format!("{}://{}{}", parts.scheme, parts.authority, parts.path);
            if uri.contains('?') {
                rebuilt.push('?');
                rebuilt.push_str(parts.query);
            }
            if uri.contains('#') {
                rebuilt.push('#');
                rebuilt.push_str(parts.fragment);
            }
            proptest::prop_assert_eq!(rebuilt, uri);
        }

        #[test]
        fn test_validators_never_panic(uri in "\\PC{0,64}") {
            let _ = crate::validate_registry_uri(&uri);
            let _ = crate::validate_content_uri(&uri);
            let _ = crate::validate_blob_uri_contents(uri.as_bytes(), &uri);
        }
    }
}
