//! Hashing primitives used by the validators.
//!
//! Wraps SHA-1 git blob hashing and Keccak-256 address checksums with
//! strong types. The hash functions themselves come from RustCrypto.

use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha3::{Digest, Keccak256};
use std::fmt;

use crate::error::CoreError;

/// Length of a hex address body, without the `0x` prefix.
const ADDRESS_HEX_LEN: usize = 40;

/// A 20-byte SHA-1 digest of a git blob object.
///
/// Git hashes a blob as `sha1("blob " + len + "\0" + contents)`. The same
/// framing lets a blob URI be checked against content stored in git.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GitBlobHash(pub [u8; 20]);

impl GitBlobHash {
    /// Hash text with git blob framing.
    ///
    /// The length in the header is the number of characters in `text`.
    pub fn hash_text(text: &str) -> Self {
        let framed = frame_blob(text);
        let digest = Sha1::digest(framed.as_bytes());
        let mut out = [0u8; 20];
        out.copy_from_slice(&digest);
        Self(out)
    }

    /// Convert to lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 20 {
            return Err(CoreError::InvalidLength {
                expected: 20,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 20];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for GitBlobHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GitBlob({})", &self.to_hex()[..12])
    }
}

impl fmt::Display for GitBlobHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for GitBlobHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Build the git blob preimage for `text`.
pub fn frame_blob(text: &str) -> String {
    format!("blob {}\0{}", text.chars().count(), text)
}

/// Compute the Keccak-256 hash of the given data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let digest = Keccak256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

fn strip_0x(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Check whether `value` is a 20-byte hex address, with or without `0x`.
///
/// Casing is not checked.
pub fn is_hex_address(value: &str) -> bool {
    let body = strip_0x(value);
    body.len() == ADDRESS_HEX_LEN && body.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Render an address in EIP-55 mixed-case checksum form.
///
/// A letter is uppercased when the matching nibble of
/// `keccak256(lowercase_hex)` is 8 or more.
pub fn to_checksum_address(value: &str) -> Result<String, CoreError> {
    if !is_hex_address(value) {
        return Err(CoreError::InvalidAddress(value.to_string()));
    }
    let lower = strip_0x(value).to_ascii_lowercase();
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(ADDRESS_HEX_LEN + 2);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// Check whether `value` is a `0x`-prefixed address in exact checksum case.
pub fn is_checksum_address(value: &str) -> bool {
    match to_checksum_address(value) {
        Ok(checksummed) => checksummed == value,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_blob_hash_hello() {
        let hash = GitBlobHash::hash_text("hello");
        assert_eq!(hash.to_hex(), "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0");
    }

    #[test]
    fn test_git_blob_hash_empty() {
        let hash = GitBlobHash::hash_text("");
        assert_eq!(hash.to_hex(), "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391");
    }

    #[test]
    fn test_frame_counts_characters() {
        assert_eq!(frame_blob("hello"), "blob 5\0hello");
        assert_eq!(frame_blob("h\u{e9}llo"), "blob 5\0h\u{e9}llo");
    }

    #[test]
    fn test_blob_hash_hex_roundtrip() {
        let hash = GitBlobHash::hash_text("hello\n");
        let recovered = GitBlobHash::from_hex(&hash.to_hex()).unwrap();
        assert_eq!(hash, recovered);
        assert!(GitBlobHash::from_hex("abcd").is_err());
    }

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_checksum_known_addresses() {
        for addr in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            assert_eq!(to_checksum_address(&addr.to_lowercase()).unwrap(), addr);
            assert!(is_checksum_address(addr));
        }
    }

    #[test]
    fn test_wrong_case_is_not_checksummed() {
        assert!(!is_checksum_address(
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"
        ));
        assert!(!is_checksum_address(
            "0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED"
        ));
    }

    #[test]
    fn test_checksum_requires_prefix() {
        assert!(is_hex_address("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(!is_checksum_address(
            "5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        ));
    }

    #[test]
    fn test_not_an_address() {
        assert!(!is_hex_address("0x1234"));
        assert!(!is_hex_address("0xZZeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(to_checksum_address("packages.eth").is_err());
    }
}
