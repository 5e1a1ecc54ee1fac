use crate::verification_key::VerifyingKey;
use ark_ec::pairing::Pairing;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use snark_circuits::Digest;
use snark_utils::serialization::SerdeAs;

/// The prover's side of the trusted setup outputs.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ProvingKey<E: Pairing> {
    pub vk: VerifyingKey<E>,
    /// Digest of the R1CS the key was generated for
    pub cs_digest: Digest,
    #[serde_as(as = "SerdeAs")]
    pub beta_g1: E::G1Affine,
    #[serde_as(as = "SerdeAs")]
    pub delta_g1: E::G1Affine,
    /// `[u_i(x)]_1` for every variable
    #[serde_as(as = "Vec<SerdeAs>")]
    pub a_query: Vec<E::G1Affine>,
    /// `[v_i(x)]_1` for every variable
    #[serde_as(as = "Vec<SerdeAs>")]
    pub b_g1_query: Vec<E::G1Affine>,
    /// `[v_i(x)]_2` for every variable
    #[serde_as(as = "Vec<SerdeAs>")]
    pub b_g2_query: Vec<E::G2Affine>,
    /// `[x^i Z(x) / delta]_1` for `i` in `0..n - 1`
    #[serde_as(as = "Vec<SerdeAs>")]
    pub h_query: Vec<E::G1Affine>,
    /// `[(beta u_i(x) + alpha v_i(x) + w_i(x)) / delta]_1` for each private
    /// variable
    #[serde_as(as = "Vec<SerdeAs>")]
    pub l_query: Vec<E::G1Affine>,
}

impl<E: Pairing> ProvingKey<E> {
    /// Size of the evaluation domain the key was generated over.
    pub fn domain_size(&self) -> usize {
        self.h_query.len() + 1
    }

    /// Checks that the queries have matching lengths: one entry per variable
    /// in `a_query` and both `b` queries, split between the public part of
    /// the verifying key and `l_query`, over a radix-2 domain.
    pub fn is_consistent(&self) -> bool {
        let num_variables = self.a_query.len();
        !self.vk.gamma_abc_g1.is_empty()
            && self.b_g1_query.len() == num_variables
            && self.b_g2_query.len() == num_variables
            && self.vk.gamma_abc_g1.len() + self.l_query.len() == num_variables
            && self.domain_size().is_power_of_two()
            && self.domain_size() > 1
    }
}
