//! Fast 64-bit identity keys for in-memory lookups, e.g. grouping identical sequences in a
//! hash table. Unlike [`crate::fingerprint`] these are not collision resistant and should not
//! be written out as stable identifiers.

use std::hash::Hasher;

use fxhash::FxHasher64;

use crate::normalize::normalize_into;

/// Must stay a multiple of 8 so chunked writes hash like one contiguous write.
const SCRATCH_LEN: usize = 800;

/// Non-cryptographic hash of the normalized sequence.
pub fn identity_hash(seq: &[u8]) -> u64 {
    let mut hasher = FxHasher64::default();
    let mut scratch = [0u8; SCRATCH_LEN];

    for piece in seq.chunks(SCRATCH_LEN) {
        let normalized = &mut scratch[..piece.len()];
        normalize_into(piece, normalized);
        hasher.write(normalized);
    }

    hasher.finish()
}
