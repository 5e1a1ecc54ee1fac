//! Fingerprints of compiled constraint systems. Keys record the digest of the
//! constraint system they were generated for, and provers refuse to run on a
//! mismatch.

use ark_ff::PrimeField;
use blake2::{digest::consts::U32, Blake2b, Digest as _};
use snark_utils::FieldHelpers;

/// A 32-byte Blake2b digest.
pub type Digest = [u8; 32];

type Blake2b256 = Blake2b<U32>;

/// Absorbs the parts of a constraint system in a fixed order.
pub(crate) struct DigestWriter {
    hasher: Blake2b256,
}

impl DigestWriter {
    pub fn new(tag: &[u8]) -> Self {
        let mut hasher = Blake2b256::new();
        hasher.update((tag.len() as u64).to_le_bytes());
        hasher.update(tag);
        DigestWriter { hasher }
    }

    pub fn usize(&mut self, n: usize) {
        self.hasher.update((n as u64).to_le_bytes());
    }

    pub fn field<F: PrimeField>(&mut self, f: &F) {
        self.hasher.update(f.to_bytes());
    }

    pub fn finish(self) -> Digest {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.hasher.finalize());
        out
    }
}
