//! This module implements the verifier index as [VerifierIndex].

use ark_ec::pairing::Pairing;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use snark_poly_commitment::VerifierSRS;
use snark_utils::serialization::SerdeAs;

use crate::{permutation::COLUMNS, transcript::Transcript};

/// The verifier index: commitments to the circuit polynomials, and the part of
/// the SRS needed to check openings.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct VerifierIndex<E: Pairing> {
    /// Size of the evaluation domain
    pub domain_size: usize,
    /// Number of public inputs
    pub num_public: usize,
    /// The coset shifts `[1, k_1, k_2]`
    #[serde_as(as = "[SerdeAs; 3]")]
    pub shifts: [E::ScalarField; COLUMNS],

    #[serde_as(as = "SerdeAs")]
    pub q_m_comm: E::G1Affine,
    #[serde_as(as = "SerdeAs")]
    pub q_l_comm: E::G1Affine,
    #[serde_as(as = "SerdeAs")]
    pub q_r_comm: E::G1Affine,
    #[serde_as(as = "SerdeAs")]
    pub q_o_comm: E::G1Affine,
    #[serde_as(as = "SerdeAs")]
    pub q_c_comm: E::G1Affine,
    /// Commitments to `S_σ1, S_σ2, S_σ3`
    #[serde_as(as = "[SerdeAs; 3]")]
    pub sigma_comm: [E::G1Affine; COLUMNS],

    pub srs: VerifierSRS<E>,
}

impl<E: Pairing> VerifierIndex<E> {
    /// A transcript that has absorbed the whole index, so that challenges are
    /// bound to the circuit.
    pub fn transcript(&self) -> Transcript<E::G1Affine> {
        let mut transcript = Transcript::new(b"snark-plonk-kzg");
        transcript.absorb_usize(self.domain_size);
        transcript.absorb_usize(self.num_public);
        transcript.absorb_fr(&self.shifts);
        transcript.absorb_g(&[
            self.q_m_comm,
            self.q_l_comm,
            self.q_r_comm,
            self.q_o_comm,
            self.q_c_comm,
        ]);
        transcript.absorb_g(&self.sigma_comm);
        transcript.absorb_g(&[self.srs.g1]);
        transcript
    }
}
