//! # Sequence fingerprints
//!
//! Content-addressable identity keys for biological sequences. Two sequences that differ only
//! in letter case, or in using `U` where the other uses `T`, get the same fingerprint: every
//! sequence is normalized through a fixed 256-entry table before it is hashed.
//!
//! Two digest families are available, selected by [`DigestKind`]:
//!
//! * `sha1` - 20-byte digest, 40 hex characters
//! * `md5` - 16-byte digest, 32 hex characters
//!
//! Fingerprints carry no per-process salt, so they compare equal across separate runs.
//! For in-memory grouping there is also [`identity_hash`], a cheap 64-bit key.
//!
//! ```rust
//! use seqgate_digest::{hex_fingerprint, DigestKind};
//!
//! let a = hex_fingerprint(b"acgu", DigestKind::Sha1);
//! let b = hex_fingerprint(b"ACGT", DigestKind::Sha1);
//! assert_eq!(a, b);
//! assert_eq!(a.len(), 40);
//! ```
pub mod algorithms;
pub mod hasher;
pub mod identity;
pub mod normalize;

pub use algorithms::{
    DigestKind, Fingerprint, MD5_LEN, SHA1_LEN, fingerprint, hex_fingerprint, write_fingerprint,
};
pub use hasher::SequenceHasher;
pub use identity::identity_hash;
pub use normalize::{NORMALIZE_ARRAY, normalize, normalize_byte, normalize_into};
