//! This module implements the PLONK prover, following the five rounds of
//! section 8.3 of the [PLONK paper](https://eprint.iacr.org/2019/953).

use crate::{
    linearization::{combine_polys, linearization_scalars, quotient_chunk_size, Challenges},
    permutation::{self, COLUMNS},
    proof::{ProofEvaluations, ProverCommitments, ProverProof},
    prover_index::{ProverIndex, QUOTIENT_BLOWUP},
    ProverError,
};
use ark_ec::pairing::Pairing;
use ark_ff::{PrimeField, Zero};
use ark_poly::{
    univariate::DensePolynomial, DenseUVPolynomial, EvaluationDomain, Polynomial,
    Radix2EvaluationDomain as D,
};
use rand_core::{CryptoRng, RngCore};
use rayon::prelude::*;
use snark_circuits::{PlonkConstraintSystem, Witness};
use snark_poly_commitment::KZGProof;
use snark_utils::{
    field_helpers::sample_field,
    radix2evaluation_domain::{coset_fft, coset_ifft, vanishing_inverses_on_coset},
    ExtendedDensePolynomial,
};

/// Everything the quotient numerator is made of, in coefficient form.
struct QuotientInputs<'a, F: PrimeField> {
    wires: [&'a DensePolynomial<F>; COLUMNS],
    z: &'a DensePolynomial<F>,
    selectors: [&'a DensePolynomial<F>; 5],
    sigma: [&'a DensePolynomial<F>; COLUMNS],
    public: &'a DensePolynomial<F>,
    shifts: [F; COLUMNS],
}

/// Computes `t(X)` such that
///
/// ```text
/// t Z_H = a b q_M + a q_L + b q_R + c q_O + PI + q_C
///       + α (a + βX + γ)(b + β k_1 X + γ)(c + β k_2 X + γ) z(X)
///       - α (a + β S_σ1 + γ)(b + β S_σ2 + γ)(c + β S_σ3 + γ) z(ωX)
///       + α² (z(X) - 1) L_1(X)
/// ```
///
/// evaluating everything over a coset of a larger domain.
fn quotient<F: PrimeField>(
    domain: D<F>,
    large: D<F>,
    inputs: &QuotientInputs<F>,
    beta: F,
    gamma: F,
    alpha: F,
) -> Result<Vec<F>, ProverError> {
    let offset = F::GENERATOR;
    let on_coset = |p: &DensePolynomial<F>| coset_fft(large, offset, &p.coeffs);

    let [a, b, c] = inputs.wires.map(on_coset);
    let [q_m, q_l, q_r, q_o, q_c] = inputs.selectors.map(on_coset);
    let [s1, s2, s3] = inputs.sigma.map(on_coset);
    let z = on_coset(inputs.z);
    let pi = on_coset(inputs.public);
    let l1 = {
        let mut evals = vec![F::zero(); domain.size()];
        evals[0] = F::one();
        coset_fft(large, offset, &domain.ifft(&evals))
    };
    let zh_inv = vanishing_inverses_on_coset(domain, large, offset);

    let size = large.size();
    let mut xs = Vec::with_capacity(size);
    let mut x = offset;
    for _ in 0..size {
        xs.push(x);
        x *= large.group_gen();
    }

    let [_, k1, k2] = inputs.shifts;
    let alpha2 = alpha.square();
    let evals: Vec<F> = (0..size)
        .into_par_iter()
        .map(|i| {
            let x = xs[i];
            // z(ωX) on the coset is a shift by the blowup factor
            let z_omega = z[(i + QUOTIENT_BLOWUP) % size];
            let gate = a[i] * b[i] * q_m[i]
                + a[i] * q_l[i]
                + b[i] * q_r[i]
                + c[i] * q_o[i]
                + pi[i]
                + q_c[i];
            let id = (a[i] + beta * x + gamma)
                * (b[i] + beta * k1 * x + gamma)
                * (c[i] + beta * k2 * x + gamma)
                * z[i];
            let sigma = (a[i] + beta * s1[i] + gamma)
                * (b[i] + beta * s2[i] + gamma)
                * (c[i] + beta * s3[i] + gamma)
                * z_omega;
            let boundary = (z[i] - F::one()) * l1[i];
            (gate + alpha * (id - sigma) + alpha2 * boundary) * zh_inv[i]
        })
        .collect();

    let mut t = coset_ifft(large, offset, &evals);
    let len = COLUMNS * quotient_chunk_size(domain.size());
    if t[len..].iter().any(|c| !c.is_zero()) {
        return Err(ProverError::Prover("the quotient polynomial has an unexpected degree"));
    }
    t.truncate(len);
    Ok(t)
}

/// Two blinders for each wire polynomial, then three for the permutation
/// accumulator.
const NUM_BLINDERS: usize = 2 * COLUMNS + 3;

fn sample_blinders<F: PrimeField, R: RngCore + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<F>, ProverError> {
    (0..count)
        .map(|_| sample_field(&mut *rng).map_err(|e| ProverError::Randomness(e.to_string())))
        .collect()
}

/// Creates a PLONK proof for `witness`.
///
/// The witness is checked against `cs` before any group operation, so an
/// unsatisfying witness fails with [ProverError::Witness] naming the first
/// failing constraint.
pub fn prove<E, R>(
    index: &ProverIndex<E>,
    cs: &PlonkConstraintSystem<E::ScalarField>,
    witness: &Witness<E::ScalarField>,
    rng: &mut R,
) -> Result<ProverProof<E>, ProverError>
where
    E: Pairing,
    R: RngCore + CryptoRng + ?Sized,
{
    if index.cs_digest != cs.digest() {
        return Err(ProverError::KeyMismatch);
    }
    if !index.is_consistent() || cs.num_gates() > index.domain_size() {
        return Err(ProverError::KeyMismatch);
    }
    let n = index.domain_size();
    let domain = D::<E::ScalarField>::new(n).ok_or(ProverError::KeyMismatch)?;
    let large = D::<E::ScalarField>::new(QUOTIENT_BLOWUP * n).ok_or(ProverError::KeyMismatch)?;

    cs.is_satisfied(witness)?;
    let values = cs.wire_values(witness)?;
    let wires = permutation::wire_columns(domain, &cs.gates, cs.zero_wire());
    let wire_evals: [Vec<E::ScalarField>; COLUMNS] =
        wires.map(|column| column.iter().map(|w| values[*w]).collect());
    let public = &witness.public;

    let blinders = sample_blinders::<E::ScalarField, R>(rng, NUM_BLINDERS)?;
    let vi = &index.verifier_index;
    let shifts = vi.shifts;
    let mut transcript = vi.transcript();
    transcript.absorb_fr(public);

    // round 1: blinded wire polynomials
    let interpolate = |evals: &[E::ScalarField]| {
        DensePolynomial::from_coefficients_vec(domain.ifft(evals))
    };
    let [a, b, c] = [0, 1, 2].map(|col| {
        interpolate(&wire_evals[col])
            .blind_with_vanishing(n, &[blinders[2 * col + 1], blinders[2 * col]])
    });
    let wire_comm = [
        index.srs.commit_non_hiding(&a)?,
        index.srs.commit_non_hiding(&b)?,
        index.srs.commit_non_hiding(&c)?,
    ];
    transcript.absorb_g(&wire_comm);
    let beta = transcript.challenge();
    let gamma = transcript.challenge();

    // round 2: the permutation accumulator
    let sigma_evals = index.sigma.clone().map(|s| domain.fft(&s.coeffs));
    let z_evals = permutation::compute_z(domain, &wire_evals, &sigma_evals, &shifts, beta, gamma)?;
    let z = interpolate(&z_evals).blind_with_vanishing(n, &[blinders[8], blinders[7], blinders[6]]);
    let z_comm = index.srs.commit_non_hiding(&z)?;
    transcript.absorb_g(&[z_comm]);
    let alpha = transcript.challenge();

    // round 3: the quotient, split in chunks of n + 2 coefficients
    let pi_poly = {
        let mut evals = vec![E::ScalarField::zero(); n];
        for (e, x) in evals.iter_mut().zip(public) {
            *e = -*x;
        }
        interpolate(&evals)
    };
    let inputs = QuotientInputs {
        wires: [&a, &b, &c],
        z: &z,
        selectors: [&index.q_m, &index.q_l, &index.q_r, &index.q_o, &index.q_c],
        sigma: [&index.sigma[0], &index.sigma[1], &index.sigma[2]],
        public: &pi_poly,
        shifts,
    };
    let t = quotient(domain, large, &inputs, beta, gamma, alpha)?;
    let chunk = quotient_chunk_size(n);
    let t_chunks: Vec<DensePolynomial<E::ScalarField>> = t
        .chunks(chunk)
        .map(|coeffs| DensePolynomial::from_coefficients_slice(coeffs))
        .collect();
    let t_comm = [
        index.srs.commit_non_hiding(&t_chunks[0])?,
        index.srs.commit_non_hiding(&t_chunks[1])?,
        index.srs.commit_non_hiding(&t_chunks[2])?,
    ];
    transcript.absorb_g(&t_comm);
    let zeta = transcript.challenge();

    // round 4: evaluations
    let omega = domain.group_gen();
    let evals = ProofEvaluations {
        a: a.evaluate(&zeta),
        b: b.evaluate(&zeta),
        c: c.evaluate(&zeta),
        s_sigma1: index.sigma[0].evaluate(&zeta),
        s_sigma2: index.sigma[1].evaluate(&zeta),
        z_omega: z.evaluate(&(zeta * omega)),
    };
    transcript.absorb_fr(&evals.to_vec());
    let v = transcript.challenge();

    // round 5: opening proofs
    let challenges = Challenges {
        beta,
        gamma,
        alpha,
        zeta,
    };
    let scalars = linearization_scalars(domain, public, &shifts, &evals, &challenges)
        .ok_or(ProverError::Prover("the evaluation point lies in the domain"))?;
    let one = E::ScalarField::from(1u64);
    let v2 = v * v;
    let v3 = v2 * v;
    let v4 = v3 * v;
    let v5 = v4 * v;
    // r(X) + v a(X) + v² b(X) + v³ c(X) + v⁴ S_σ1(X) + v⁵ S_σ2(X)
    let opened = combine_polys(&[
        (evals.a * evals.b, &index.q_m),
        (evals.a, &index.q_l),
        (evals.b, &index.q_r),
        (evals.c, &index.q_o),
        (one, &index.q_c),
        (scalars.z_coeff, &z),
        (scalars.s_sigma3_coeff, &index.sigma[2]),
        (scalars.t_coeffs[0], &t_chunks[0]),
        (scalars.t_coeffs[1], &t_chunks[1]),
        (scalars.t_coeffs[2], &t_chunks[2]),
        (v, &a),
        (v2, &b),
        (v3, &c),
        (v4, &index.sigma[0]),
        (v5, &index.sigma[1]),
    ]);
    let (opened_value, w_zeta) = KZGProof::create(&index.srs, &opened, zeta)?;
    let expected = -scalars.r0
        + v * evals.a
        + v2 * evals.b
        + v3 * evals.c
        + v4 * evals.s_sigma1
        + v5 * evals.s_sigma2;
    if opened_value != expected {
        return Err(ProverError::Prover("the linearisation does not open to the expected value"));
    }
    let (_, w_zeta_omega) = KZGProof::create(&index.srs, &z, zeta * omega)?;

    log::debug!("created a plonk proof over a domain of size {n}");
    Ok(ProverProof {
        commitments: ProverCommitments {
            a: wire_comm[0],
            b: wire_comm[1],
            c: wire_comm[2],
            z: z_comm,
            t: t_comm,
            w_zeta: w_zeta.quotient,
            w_zeta_omega: w_zeta_omega.quotient,
        },
        evals,
    })
}
