use crate::{proof::Proof, verification_key::VerifyingKey};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::Zero;
use snark_utils::fast_msm::msm;

/// Checks `e(A, B) = e(alpha, beta) e(acc, gamma) e(C, delta)`, where `acc`
/// commits to the public inputs.
///
/// A wrong number of public inputs is a rejection, not an error.
pub fn verify<E: Pairing>(
    vk: &VerifyingKey<E>,
    public_inputs: &[E::ScalarField],
    proof: &Proof<E>,
) -> bool {
    if vk.gamma_abc_g1.is_empty() || public_inputs.len() != vk.num_public() {
        log::debug!(
            "expected {} public inputs, got {}",
            vk.num_public(),
            public_inputs.len()
        );
        return false;
    }
    let acc =
        vk.gamma_abc_g1[0].into_group() + msm::<E::G1>(&vk.gamma_abc_g1[1..], public_inputs);
    let g1 = E::G1::normalize_batch(&[
        -proof.a.into_group(),
        vk.alpha_g1.into_group(),
        acc,
        proof.c.into_group(),
    ]);
    E::multi_pairing(g1, [proof.b, vk.beta_g2, vk.gamma_g2, vk.delta_g2]).is_zero()
}
