//! This module implements the PLONK verifier, with the batched opening check
//! of section 8.4 of the PLONK paper.

use crate::{
    linearization::{linearization_scalars, Challenges},
    proof::ProverProof,
    verifier_index::VerifierIndex,
};
use ark_ec::{pairing::Pairing, AffineRepr};
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain as D};
use snark_poly_commitment::kzg::check_opening_identity;
use snark_utils::fast_msm::msm;

/// Checks `proof` against `index` and the public inputs.
///
/// Any malformed input (wrong number of public inputs, an index with an
/// invalid domain, a degenerate challenge) is a rejection.
pub fn verify<E: Pairing>(
    index: &VerifierIndex<E>,
    public: &[E::ScalarField],
    proof: &ProverProof<E>,
) -> bool {
    if public.len() != index.num_public {
        log::debug!(
            "expected {} public inputs, got {}",
            index.num_public,
            public.len()
        );
        return false;
    }
    let Some(domain) =
        D::<E::ScalarField>::new(index.domain_size).filter(|d| d.size() == index.domain_size)
    else {
        log::debug!("invalid domain size {}", index.domain_size);
        return false;
    };

    let comm = &proof.commitments;
    let evals = &proof.evals;

    // replay the transcript
    let mut transcript = index.transcript();
    transcript.absorb_fr(public);
    transcript.absorb_g(&[comm.a, comm.b, comm.c]);
    let beta = transcript.challenge();
    let gamma = transcript.challenge();
    transcript.absorb_g(&[comm.z]);
    let alpha = transcript.challenge();
    transcript.absorb_g(&comm.t);
    let zeta = transcript.challenge();
    transcript.absorb_fr(&evals.to_vec());
    let v = transcript.challenge();
    transcript.absorb_g(&[comm.w_zeta, comm.w_zeta_omega]);
    let u = transcript.challenge();

    let challenges = Challenges {
        beta,
        gamma,
        alpha,
        zeta,
    };
    let Some(scalars) = linearization_scalars(domain, public, &index.shifts, evals, &challenges)
    else {
        log::debug!("the evaluation point lies in the domain");
        return false;
    };

    let v2 = v * v;
    let v3 = v2 * v;
    let v4 = v3 * v;
    let v5 = v4 * v;
    let zeta_omega = zeta * domain.group_gen();

    // [E]: the value the batched commitment should open to
    let e_scalar = -scalars.r0
        + v * evals.a
        + v2 * evals.b
        + v3 * evals.c
        + v4 * evals.s_sigma1
        + v5 * evals.s_sigma2
        + u * evals.z_omega;

    // [F] - [E] + ζ [W_ζ] + uζω [W_ζω], as a single msm
    let bases = [
        index.q_m_comm,
        index.q_l_comm,
        index.q_r_comm,
        index.q_o_comm,
        index.q_c_comm,
        comm.z,
        index.sigma_comm[2],
        comm.t[0],
        comm.t[1],
        comm.t[2],
        comm.a,
        comm.b,
        comm.c,
        index.sigma_comm[0],
        index.sigma_comm[1],
        index.srs.g1,
        comm.w_zeta,
        comm.w_zeta_omega,
    ];
    let scalars = [
        evals.a * evals.b,
        evals.a,
        evals.b,
        evals.c,
        E::ScalarField::from(1u64),
        scalars.z_coeff + u,
        scalars.s_sigma3_coeff,
        scalars.t_coeffs[0],
        scalars.t_coeffs[1],
        scalars.t_coeffs[2],
        v,
        v2,
        v3,
        v4,
        v5,
        -e_scalar,
        zeta,
        u * zeta_omega,
    ];
    let rhs = msm::<E::G1>(&bases, &scalars);
    let lhs = comm.w_zeta.into_group() + comm.w_zeta_omega * u;

    check_opening_identity(&index.srs, lhs, rhs)
}
