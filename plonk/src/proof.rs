//! This module implements the PLONK proof: nine commitments and six
//! evaluations.

use ark_ec::pairing::Pairing;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use snark_utils::serialization::SerdeAs;

/// Evaluations of the witness and permutation polynomials at the challenge
/// point `ζ` (and `ζω` for the accumulator).
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ProofEvaluations<F: ark_ff::PrimeField> {
    #[serde_as(as = "SerdeAs")]
    pub a: F,
    #[serde_as(as = "SerdeAs")]
    pub b: F,
    #[serde_as(as = "SerdeAs")]
    pub c: F,
    #[serde_as(as = "SerdeAs")]
    pub s_sigma1: F,
    #[serde_as(as = "SerdeAs")]
    pub s_sigma2: F,
    /// `z(ζω)`
    #[serde_as(as = "SerdeAs")]
    pub z_omega: F,
}

impl<F: ark_ff::PrimeField> ProofEvaluations<F> {
    pub fn to_vec(&self) -> Vec<F> {
        vec![
            self.a,
            self.b,
            self.c,
            self.s_sigma1,
            self.s_sigma2,
            self.z_omega,
        ]
    }
}

/// The commitments of a PLONK proof, in the order they are sent.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ProverCommitments<E: Pairing> {
    #[serde_as(as = "SerdeAs")]
    pub a: E::G1Affine,
    #[serde_as(as = "SerdeAs")]
    pub b: E::G1Affine,
    #[serde_as(as = "SerdeAs")]
    pub c: E::G1Affine,
    /// The permutation accumulator
    #[serde_as(as = "SerdeAs")]
    pub z: E::G1Affine,
    /// The quotient, in three chunks
    #[serde_as(as = "[SerdeAs; 3]")]
    pub t: [E::G1Affine; 3],
    /// Opening proof at `ζ`
    #[serde_as(as = "SerdeAs")]
    pub w_zeta: E::G1Affine,
    /// Opening proof at `ζω`
    #[serde_as(as = "SerdeAs")]
    pub w_zeta_omega: E::G1Affine,
}

/// The proof that a prover generates for a PLONK circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ProverProof<E: Pairing> {
    pub commitments: ProverCommitments<E>,
    pub evals: ProofEvaluations<E::ScalarField>,
}
