use ark_ec::pairing::Pairing;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use snark_utils::serialization::SerdeAs;

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct VerifyingKey<E: Pairing> {
    #[serde_as(as = "SerdeAs")]
    pub alpha_g1: E::G1Affine,
    #[serde_as(as = "SerdeAs")]
    pub beta_g2: E::G2Affine,
    #[serde_as(as = "SerdeAs")]
    pub gamma_g2: E::G2Affine,
    #[serde_as(as = "SerdeAs")]
    pub delta_g2: E::G2Affine,
    /// `[(beta u_i(x) + alpha v_i(x) + w_i(x)) / gamma]_1` for the constant
    /// and each public input
    #[serde_as(as = "Vec<SerdeAs>")]
    pub gamma_abc_g1: Vec<E::G1Affine>,
}

impl<E: Pairing> VerifyingKey<E> {
    /// Number of public inputs the key expects.
    pub fn num_public(&self) -> usize {
        self.gamma_abc_g1.len().saturating_sub(1)
    }
}
