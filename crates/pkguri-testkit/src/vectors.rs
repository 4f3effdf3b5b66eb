//! Golden test vectors for deterministic verification.
//!
//! Blob digests follow git's object framing over the decoded text, with the
//! length counted in characters. Checksum vectors come from EIP-55.

use pkguri_core::{to_checksum_address, GitBlobHash};

/// A git blob golden vector.
#[derive(Debug, Clone)]
pub struct BlobVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Blob contents.
    pub contents: &'static str,
    /// Expected SHA-1 digest (hex).
    pub expected_digest: &'static str,
}

/// An EIP-55 golden vector.
#[derive(Debug, Clone)]
pub struct ChecksumVector {
    pub lowercase: &'static str,
    pub checksummed: &'static str,
}

/// Get all blob vectors.
pub fn blob_vectors() -> Vec<BlobVector> {
    vec![
        BlobVector {
            name: "hello",
            contents: "hello",
            expected_digest: "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0",
        },
        BlobVector {
            name: "empty blob",
            contents: "",
            expected_digest: "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391",
        },
        BlobVector {
            name: "trailing newline",
            contents: "hello\n",
            expected_digest: "ce013625030ba8dba906f756967f9e9ca394464a",
        },
        BlobVector {
            name: "manifest",
            contents: "{\"manifest\":\"ethpm/3\"}\n",
            expected_digest: "0868d8382e2d3367adbba7aba5377f3aa524356f",
        },
        BlobVector {
            name: "non-ascii text",
            contents: "h\u{e9}llo",
            expected_digest: "656adaa8596b65fabfd976af91d297c15c2dc1e4",
        },
    ]
}

/// Get all checksum vectors.
pub fn checksum_vectors() -> Vec<ChecksumVector> {
    vec![
        ChecksumVector {
            lowercase: "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            checksummed: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        },
        ChecksumVector {
            lowercase: "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359",
            checksummed: "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        },
        ChecksumVector {
            lowercase: "0xdbf03b407c01e7cd3cbea99509d93f8dddc8c6fb",
            checksummed: "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        },
        ChecksumVector {
            lowercase: "0xd1220a0cf47c7b9be7a2e6ba89f429762e7b9adb",
            checksummed: "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        },
    ]
}

/// Verify every vector against this implementation.
///
/// Returns `(name, matches, computed)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let blobs = blob_vectors().into_iter().map(|v| {
        let computed = GitBlobHash::hash_text(v.contents).to_hex();
        (v.name.to_string(), computed == v.expected_digest, computed)
    });
    let checksums = checksum_vectors().into_iter().map(|v| {
        let computed = to_checksum_address(v.lowercase).unwrap_or_default();
        (v.checksummed.to_string(), computed == v.checksummed, computed)
    });
    blobs.chain(checksums).collect()
}
