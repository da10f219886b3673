use std::fmt::{Display, Write as _};
use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::hasher::SequenceHasher;

/// Length in bytes of a SHA-1 fingerprint.
pub const SHA1_LEN: usize = 20;

/// Length in bytes of an MD5 fingerprint.
pub const MD5_LEN: usize = 16;

/// Digest family used for fingerprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestKind {
    /// 160-bit SHA-1
    #[default]
    Sha1,
    /// 128-bit MD5
    Md5,
}

impl DigestKind {
    /// Digest length in bytes.
    pub fn byte_len(&self) -> usize {
        match self {
            DigestKind::Sha1 => SHA1_LEN,
            DigestKind::Md5 => MD5_LEN,
        }
    }

    /// Length of the lowercase hex rendering.
    pub fn hex_len(&self) -> usize {
        2 * self.byte_len()
    }
}

impl Display for DigestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigestKind::Sha1 => write!(f, "sha1"),
            DigestKind::Md5 => write!(f, "md5"),
        }
    }
}

impl FromStr for DigestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(DigestKind::Sha1),
            "md5" => Ok(DigestKind::Md5),
            _ => Err(format!("Unknown digest: {}", s)),
        }
    }
}

/// Fixed-length digest of a normalized sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fingerprint {
    Sha1([u8; SHA1_LEN]),
    Md5([u8; MD5_LEN]),
}

impl Fingerprint {
    pub fn kind(&self) -> DigestKind {
        match self {
            Fingerprint::Sha1(_) => DigestKind::Sha1,
            Fingerprint::Md5(_) => DigestKind::Md5,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Fingerprint::Sha1(bytes) => bytes,
            Fingerprint::Md5(bytes) => bytes,
        }
    }

    /// Lowercase hex, always `2 * kind().byte_len()` characters.
    pub fn to_hex(&self) -> String {
        let bytes = self.as_bytes();
        let mut hex = String::with_capacity(2 * bytes.len());
        for byte in bytes {
            let _ = write!(hex, "{:02x}", byte);
        }
        hex
    }
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

///
/// Compute the fingerprint of a sequence.
///
/// The sequence is uppercased and has `U` replaced by `T` before hashing, so case and RNA/DNA
/// spelling never change the result.
///
/// # Arguments
/// - seq: the raw sequence bytes
/// - kind: which digest family to use
pub fn fingerprint(seq: &[u8], kind: DigestKind) -> Fingerprint {
    let mut hasher = SequenceHasher::new(kind);
    hasher.update(seq);
    hasher.finalize()
}

/// Lowercase hex fingerprint of a sequence.
pub fn hex_fingerprint(seq: &[u8], kind: DigestKind) -> String {
    fingerprint(seq, kind).to_hex()
}

/// Write the hex fingerprint of a sequence to `writer`, without a trailing newline.
pub fn write_fingerprint<W: Write>(writer: &mut W, seq: &[u8], kind: DigestKind) -> io::Result<()> {
    write!(writer, "{}", fingerprint(seq, kind))
}
