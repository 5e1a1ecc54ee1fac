use crate::{proof::Proof, proving_key::ProvingKey, setup::num_qap_rows, ProverError};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain as D};
use rand_core::{CryptoRng, RngCore};
use rayon::prelude::*;
use snark_circuits::{r1cs::evaluate_row, Witness, R1CS};
use snark_utils::{
    fast_msm::msm,
    field_helpers::sample_field,
    radix2evaluation_domain::{coset_fft, coset_ifft, vanishing_inverses_on_coset},
};

/// Evaluations of `<a_i, z>` over the domain: the constraint rows, then the
/// public input rows, then zero.
fn compute_contributions<F: PrimeField>(
    domain: D<F>,
    rows: &[Vec<(F, usize)>],
    z: &[F],
) -> Vec<F> {
    let mut values = vec![F::zero(); domain.size()];
    values[..rows.len()]
        .par_iter_mut()
        .zip(rows)
        .for_each(|(value, row)| *value = evaluate_row(row, z));
    values
}

/// Coefficients of `h = (a b - c) / Z`, where `Z` vanishes on the domain.
/// The division is carried out on the coset `g H`, on which `Z` is the
/// non-zero constant `g^n - 1`.
fn compute_h<F: PrimeField>(domain: D<F>, r1cs: &R1CS<F>, z: &[F]) -> Vec<F> {
    let mut a = compute_contributions(domain, &r1cs.a, z);
    let m = r1cs.num_constraints();
    a[m..=m + r1cs.num_public].copy_from_slice(&z[..=r1cs.num_public]);
    let b = compute_contributions(domain, &r1cs.b, z);
    let c = compute_contributions(domain, &r1cs.c, z);

    let offset = F::GENERATOR;
    let [a, b, c] = [a, b, c].map(|evals| coset_fft(domain, offset, &domain.ifft(&evals)));
    let z_inv = vanishing_inverses_on_coset(domain, domain, offset);
    let h_evals: Vec<F> = (0..domain.size())
        .into_par_iter()
        .map(|i| (a[i] * b[i] - c[i]) * z_inv[i])
        .collect();
    let mut h = coset_ifft(domain, offset, &h_evals);
    // `a b - c` has degree at most 2n - 2, hence `h` at most n - 2
    h.truncate(domain.size() - 1);
    h
}

fn check_key<E: Pairing>(
    pk: &ProvingKey<E>,
    r1cs: &R1CS<E::ScalarField>,
    domain_size: usize,
) -> Result<(), ProverError> {
    let num_variables = r1cs.num_variables();
    let consistent = pk.is_consistent()
        && pk.cs_digest == r1cs.digest()
        && pk.domain_size() == domain_size
        && pk.a_query.len() == num_variables
        && pk.b_g1_query.len() == num_variables
        && pk.b_g2_query.len() == num_variables
        && pk.l_query.len() == r1cs.num_private
        && pk.vk.gamma_abc_g1.len() == r1cs.num_public + 1;
    if consistent {
        Ok(())
    } else {
        Err(ProverError::KeyMismatch)
    }
}

/// Creates a Groth16 proof for `witness`.
///
/// The witness is checked against `r1cs` before any group operation, so an
/// unsatisfying witness fails with [ProverError::Witness] naming the first
/// failing constraint.
pub fn prove<E, R>(
    pk: &ProvingKey<E>,
    r1cs: &R1CS<E::ScalarField>,
    witness: &Witness<E::ScalarField>,
    rng: &mut R,
) -> Result<Proof<E>, ProverError>
where
    E: Pairing,
    R: RngCore + CryptoRng + ?Sized,
{
    if !r1cs.is_well_formed() {
        return Err(ProverError::MalformedConstraintSystem);
    }
    let num_rows = num_qap_rows(r1cs);
    let domain =
        D::<E::ScalarField>::new(num_rows).ok_or(ProverError::DomainTooLarge(num_rows))?;
    check_key(pk, r1cs, domain.size())?;
    r1cs.is_satisfied(witness)?;

    let z = witness.assignment();
    let h = compute_h(domain, r1cs, &z);

    let r: E::ScalarField =
        sample_field(&mut *rng).map_err(|e| ProverError::Randomness(e.to_string()))?;
    let s: E::ScalarField =
        sample_field(&mut *rng).map_err(|e| ProverError::Randomness(e.to_string()))?;

    let a = pk.vk.alpha_g1.into_group() + msm::<E::G1>(&pk.a_query, &z) + pk.delta_g1 * r;
    let b = pk.vk.beta_g2.into_group() + msm::<E::G2>(&pk.b_g2_query, &z) + pk.vk.delta_g2 * s;
    let b_g1 = pk.beta_g1.into_group() + msm::<E::G1>(&pk.b_g1_query, &z) + pk.delta_g1 * s;
    let c = msm::<E::G1>(&pk.l_query, &z[r1cs.num_public + 1..])
        + msm::<E::G1>(&pk.h_query, &h)
        + a * s
        + b_g1 * r
        - pk.delta_g1 * (r * s);

    let [a, c] = [a, c].map(|p| p.into_affine());
    log::debug!("created a groth16 proof over a domain of size {}", domain.size());
    Ok(Proof {
        a,
        b: b.into_affine(),
        c,
    })
}
