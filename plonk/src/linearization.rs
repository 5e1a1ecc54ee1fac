//! Scalars of the linearisation polynomial `r(X)`, shared by the prover (who
//! builds `r`) and the verifier (who builds its commitment `[D]`).
//!
//! With `ā, b̄, c̄, s̄σ1, s̄σ2, z̄ω` the evaluations sent in the proof,
//!
//! ```text
//! r(X) = ā b̄ q_M + ā q_L + b̄ q_R + c̄ q_O + q_C
//!      + (α (ā + βζ + γ)(b̄ + β k_1 ζ + γ)(c̄ + β k_2 ζ + γ) + α² L_1(ζ)) z(X)
//!      - α (ā + β s̄σ1 + γ)(b̄ + β s̄σ2 + γ) β z̄ω S_σ3(X)
//!      - Z_H(ζ) (t_lo(X) + ζ^(n+2) t_mid(X) + ζ^(2(n+2)) t_hi(X))
//! ```
//!
//! and `r(ζ) = -r_0` with
//! `r_0 = PI(ζ) - α² L_1(ζ) - α (ā + β s̄σ1 + γ)(b̄ + β s̄σ2 + γ)(c̄ + γ) z̄ω`.

use crate::{permutation::COLUMNS, proof::ProofEvaluations};
use ark_ff::{batch_inversion, Field, PrimeField};
use ark_poly::{
    univariate::DensePolynomial, DenseUVPolynomial, EvaluationDomain, Radix2EvaluationDomain as D,
};

/// Number of coefficients of each chunk of the quotient polynomial
pub fn quotient_chunk_size(domain_size: usize) -> usize {
    domain_size + 2
}

/// The Fiat-Shamir challenges up to `ζ`.
#[derive(Debug, Clone, Copy)]
pub struct Challenges<F> {
    pub beta: F,
    pub gamma: F,
    pub alpha: F,
    pub zeta: F,
}

#[derive(Debug, Clone, Copy)]
pub struct LinearizationScalars<F> {
    /// `Z_H(ζ)`
    pub zh_zeta: F,
    /// Coefficient of `z(X)`
    pub z_coeff: F,
    /// Coefficient of `S_σ3(X)`
    pub s_sigma3_coeff: F,
    /// Coefficients of `t_lo, t_mid, t_hi`
    pub t_coeffs: [F; 3],
    /// The constant `r_0`
    pub r0: F,
}

/// `PI(ζ) = -Σ_i x_i L_i(ζ)`, with `L_i(ζ) = ω^i Z_H(ζ) / (n (ζ - ω^i))`.
/// Assumes `ζ` lies outside the domain.
pub fn public_input_at<F: PrimeField>(domain: D<F>, public: &[F], zeta: F, zh_zeta: F) -> F {
    let n = F::from(domain.size() as u64);
    let omegas: Vec<F> = domain.elements().take(public.len()).collect();
    let mut denominators: Vec<F> = omegas.iter().map(|w| n * (zeta - w)).collect();
    batch_inversion(&mut denominators);
    -public
        .iter()
        .zip(omegas.iter().zip(&denominators))
        .map(|(x, (w, inv))| *x * w * zh_zeta * inv)
        .sum::<F>()
}

/// Returns `None` if `ζ` lies in the domain, where the check is meaningless.
pub fn linearization_scalars<F: PrimeField>(
    domain: D<F>,
    public: &[F],
    shifts: &[F; COLUMNS],
    evals: &ProofEvaluations<F>,
    ch: &Challenges<F>,
) -> Option<LinearizationScalars<F>> {
    let Challenges {
        beta,
        gamma,
        alpha,
        zeta,
    } = *ch;
    let zh_zeta = domain.evaluate_vanishing_polynomial(zeta);
    if zh_zeta.is_zero() {
        return None;
    }
    let n = F::from(domain.size() as u64);
    // L_1 is the Lagrange polynomial of ω^0 = 1
    let l1_zeta = zh_zeta * (n * (zeta - F::one())).inverse()?;
    let pi_zeta = public_input_at(domain, public, zeta, zh_zeta);
    let alpha2 = alpha.square();

    let ProofEvaluations {
        a,
        b,
        c,
        s_sigma1,
        s_sigma2,
        z_omega,
    } = *evals;
    let id_product = (a + beta * shifts[0] * zeta + gamma)
        * (b + beta * shifts[1] * zeta + gamma)
        * (c + beta * shifts[2] * zeta + gamma);
    let sigma_partial = (a + beta * s_sigma1 + gamma) * (b + beta * s_sigma2 + gamma);

    let zeta_chunk = zeta.pow([quotient_chunk_size(domain.size()) as u64]);
    Some(LinearizationScalars {
        zh_zeta,
        z_coeff: alpha * id_product + alpha2 * l1_zeta,
        s_sigma3_coeff: -(alpha * sigma_partial * beta * z_omega),
        t_coeffs: [-zh_zeta, -zh_zeta * zeta_chunk, -zh_zeta * zeta_chunk.square()],
        r0: pi_zeta - alpha2 * l1_zeta - alpha * sigma_partial * (c + gamma) * z_omega,
    })
}

/// `Σ_i scalar_i * poly_i`
pub fn combine_polys<F: PrimeField>(terms: &[(F, &DensePolynomial<F>)]) -> DensePolynomial<F> {
    let len = terms.iter().map(|(_, p)| p.coeffs.len()).max().unwrap_or(0);
    let mut coeffs = vec![F::zero(); len];
    for (scalar, poly) in terms {
        for (acc, c) in coeffs.iter_mut().zip(&poly.coeffs) {
            *acc += *scalar * c;
        }
    }
    DensePolynomial::from_coefficients_vec(coeffs)
}
