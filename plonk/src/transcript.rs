//! The Fiat-Shamir transcript: a byte sponge backed by Blake2b.

use ark_ec::AffineRepr;
use ark_ff::PrimeField;
use ark_serialize::CanonicalSerialize;
use blake2::{Blake2b512, Digest};
use std::marker::PhantomData;

/// A sponge over bytes. Squeezing hashes everything absorbed so far and
/// restarts from the output.
#[derive(Debug, Clone)]
struct Blake2bSponge {
    pending: Vec<u8>,
}

impl Blake2bSponge {
    fn new() -> Self {
        Blake2bSponge { pending: vec![] }
    }

    /// Absorb arbitrary bytes
    fn absorb_bytes(&mut self, x: &[u8]) {
        self.pending.extend_from_slice(x)
    }

    fn squeeze(&mut self) -> [u8; 64] {
        let mut output = [0u8; 64];
        output.copy_from_slice(&Blake2b512::digest(&self.pending));
        self.pending = output.to_vec();
        output
    }
}

/// The transcript shared by the prover and the verifier. Challenges are
/// scalars derived from everything absorbed before them.
#[derive(Debug, Clone)]
pub struct Transcript<G: AffineRepr> {
    sponge: Blake2bSponge,
    _g: PhantomData<G>,
}

impl<G: AffineRepr> Transcript<G>
where
    G::ScalarField: PrimeField,
{
    pub fn new(label: &[u8]) -> Self {
        let mut sponge = Blake2bSponge::new();
        sponge.absorb_bytes(&(label.len() as u64).to_le_bytes());
        sponge.absorb_bytes(label);
        Transcript {
            sponge,
            _g: PhantomData,
        }
    }

    pub fn absorb_usize(&mut self, n: usize) {
        self.sponge.absorb_bytes(&(n as u64).to_le_bytes())
    }

    pub fn absorb_g(&mut self, gs: &[G]) {
        for g in gs {
            let mut bytes = Vec::with_capacity(g.compressed_size());
            g.serialize_compressed(&mut bytes)
                .expect("serializing into a vector cannot fail");
            self.sponge.absorb_bytes(&bytes);
        }
    }

    pub fn absorb_fr(&mut self, xs: &[G::ScalarField]) {
        for x in xs {
            let mut bytes = Vec::with_capacity(x.compressed_size());
            x.serialize_compressed(&mut bytes)
                .expect("serializing into a vector cannot fail");
            self.sponge.absorb_bytes(&bytes);
        }
    }

    /// Squeezes a challenge. 512 bits are reduced modulo the field order, so
    /// the bias is negligible.
    pub fn challenge(&mut self) -> G::ScalarField {
        G::ScalarField::from_le_bytes_mod_order(&self.sponge.squeeze())
    }
}
