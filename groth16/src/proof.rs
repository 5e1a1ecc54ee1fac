use ark_ec::pairing::Pairing;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use snark_utils::serialization::SerdeAs;

/// A Groth16 proof: two points of the first group and one of the second.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Proof<E: Pairing> {
    #[serde_as(as = "SerdeAs")]
    pub a: E::G1Affine,
    #[serde_as(as = "SerdeAs")]
    pub b: E::G2Affine,
    #[serde_as(as = "SerdeAs")]
    pub c: E::G1Affine,
}
