//! Streaming fingerprints for sequences that arrive in pieces, e.g. the lines of a multi-line
//! FASTA record. Feeding the pieces one by one gives the same fingerprint as hashing their
//! concatenation in one call.

use md5::Md5;
use sha1::{Digest, Sha1};

use crate::algorithms::{DigestKind, Fingerprint, MD5_LEN, SHA1_LEN};
use crate::normalize::normalize_into;

/// Size of the stack scratch buffer each `update` normalizes into.
const SCRATCH_LEN: usize = 800;

enum HasherState {
    Sha1(Sha1),
    Md5(Md5),
}

/// Incremental fingerprint of one sequence.
pub struct SequenceHasher {
    state: HasherState,
    length: usize,
}

impl SequenceHasher {
    pub fn new(kind: DigestKind) -> Self {
        let state = match kind {
            DigestKind::Sha1 => HasherState::Sha1(Sha1::new()),
            DigestKind::Md5 => HasherState::Md5(Md5::new()),
        };

        SequenceHasher { state, length: 0 }
    }

    pub fn kind(&self) -> DigestKind {
        match self.state {
            HasherState::Sha1(_) => DigestKind::Sha1,
            HasherState::Md5(_) => DigestKind::Md5,
        }
    }

    /// Number of sequence bytes hashed so far.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Normalize and hash the next piece of the sequence.
    pub fn update(&mut self, chunk: &[u8]) {
        let mut scratch = [0u8; SCRATCH_LEN];

        for piece in chunk.chunks(SCRATCH_LEN) {
            let normalized = &mut scratch[..piece.len()];
            normalize_into(piece, normalized);

            match &mut self.state {
                HasherState::Sha1(hasher) => hasher.update(&*normalized),
                HasherState::Md5(hasher) => hasher.update(&*normalized),
            }
        }

        self.length += chunk.len();
    }

    pub fn finalize(self) -> Fingerprint {
        match self.state {
            HasherState::Sha1(hasher) => {
                let mut bytes = [0u8; SHA1_LEN];
                bytes.copy_from_slice(&hasher.finalize());
                Fingerprint::Sha1(bytes)
            }
            HasherState::Md5(hasher) => {
                let mut bytes = [0u8; MD5_LEN];
                bytes.copy_from_slice(&hasher.finalize());
                Fingerprint::Md5(bytes)
            }
        }
    }
}
