//! The circuit-specific trusted setup.
//!
//! The R1CS rows are interpolated over a radix-2 domain, followed by one row
//! `z_i * 0 = 0` for the constant and each public input. These extra rows
//! make the public input polynomials linearly independent, which the
//! soundness of the public input binding relies on.

use crate::{proving_key::ProvingKey, verification_key::VerifyingKey, SetupError};
use ark_ec::{pairing::Pairing, CurveGroup, PrimeGroup};
use ark_ff::{Field, PrimeField, Zero};
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain as D};
use rand_core::{CryptoRng, RngCore};
use snark_circuits::R1CS;
use snark_utils::{fast_msm::batch_mul, field_helpers::sample_nonzero_field};

/// Number of QAP rows: the constraints and one row per assignment
/// variable up to the last public input.
pub(crate) fn num_qap_rows<F: PrimeField>(r1cs: &R1CS<F>) -> usize {
    r1cs.num_constraints() + r1cs.num_public + 1
}

/// Evaluates the QAP polynomials `u_j, v_j, w_j` of every variable `j` given
/// the Lagrange basis evaluated at the secret point.
fn qap_at<F: PrimeField>(r1cs: &R1CS<F>, lagrange: &[F]) -> (Vec<F>, Vec<F>, Vec<F>) {
    let num_variables = r1cs.num_variables();
    let mut u = vec![F::zero(); num_variables];
    let mut v = vec![F::zero(); num_variables];
    let mut w = vec![F::zero(); num_variables];
    for (matrix, out) in [(&r1cs.a, &mut u), (&r1cs.b, &mut v), (&r1cs.c, &mut w)] {
        for (row, l) in matrix.iter().zip(lagrange) {
            for (coeff, j) in row {
                out[*j] += *l * coeff;
            }
        }
    }
    let m = r1cs.num_constraints();
    for k in 0..=r1cs.num_public {
        u[k] += lagrange[m + k];
    }
    (u, v, w)
}

/// Runs the trusted setup for `r1cs`. The toxic waste is sampled from `rng`
/// and dropped before returning.
pub fn setup<E, R>(
    r1cs: &R1CS<E::ScalarField>,
    rng: &mut R,
) -> Result<(ProvingKey<E>, VerifyingKey<E>), SetupError>
where
    E: Pairing,
    R: RngCore + CryptoRng + ?Sized,
{
    if !r1cs.is_well_formed() {
        return Err(SetupError::MalformedConstraintSystem);
    }
    let num_rows = num_qap_rows(r1cs);
    let domain = D::<E::ScalarField>::new(num_rows).ok_or(SetupError::DomainTooLarge(num_rows))?;

    let mut sample = || -> Result<E::ScalarField, SetupError> {
        sample_nonzero_field(&mut *rng).map_err(|e| SetupError::Randomness(e.to_string()))
    };
    let mut tau = sample()?;
    while domain.evaluate_vanishing_polynomial(tau).is_zero() {
        tau = sample()?;
    }
    let alpha = sample()?;
    let beta = sample()?;
    let gamma = sample()?;
    let delta = sample()?;
    let (gamma_inv, delta_inv) = match (gamma.inverse(), delta.inverse()) {
        (Some(g), Some(d)) => (g, d),
        _ => return Err(SetupError::Randomness("sampled a zero element".into())),
    };

    let lagrange = domain.evaluate_all_lagrange_coefficients(tau);
    let (u, v, w) = qap_at(r1cs, &lagrange);
    let abc: Vec<E::ScalarField> = u
        .iter()
        .zip(&v)
        .zip(&w)
        .map(|((u, v), w)| beta * u + alpha * v + w)
        .collect();
    let (abc_public, abc_private) = abc.split_at(r1cs.num_public + 1);

    let z_tau = domain.evaluate_vanishing_polynomial(tau);
    let mut h_scalars = Vec::with_capacity(domain.size() - 1);
    let mut power = z_tau * delta_inv;
    for _ in 0..domain.size() - 1 {
        h_scalars.push(power);
        power *= tau;
    }

    let g1 = E::G1::generator();
    let g2 = E::G2::generator();
    let scale = |xs: &[E::ScalarField], by: E::ScalarField| -> Vec<E::ScalarField> {
        xs.iter().map(|x| *x * by).collect()
    };

    let vk = VerifyingKey {
        alpha_g1: (g1 * alpha).into_affine(),
        beta_g2: (g2 * beta).into_affine(),
        gamma_g2: (g2 * gamma).into_affine(),
        delta_g2: (g2 * delta).into_affine(),
        gamma_abc_g1: batch_mul(g1, &scale(abc_public, gamma_inv)),
    };
    let pk = ProvingKey {
        vk: vk.clone(),
        cs_digest: r1cs.digest(),
        beta_g1: (g1 * beta).into_affine(),
        delta_g1: (g1 * delta).into_affine(),
        a_query: batch_mul(g1, &u),
        b_g1_query: batch_mul(g1, &v),
        b_g2_query: batch_mul(g2, &v),
        h_query: batch_mul(g1, &h_scalars),
        l_query: batch_mul(g1, &scale(abc_private, delta_inv)),
    };
    log::info!(
        "groth16 setup over a domain of size {} for {} constraints and {} variables",
        domain.size(),
        r1cs.num_constraints(),
        r1cs.num_variables()
    );
    Ok((pk, vk))
}
