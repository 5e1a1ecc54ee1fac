//! This adds a few utility functions for the [Radix2EvaluationDomain] arkworks type:
//! evaluation and interpolation over a multiplicative coset `offset * H`.

use ark_ff::{batch_inversion, FftField, Field, One, Zero};
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain as D};
use rayon::prelude::*;

/// Multiplies the `i`-th coefficient by `offset^i`.
fn distribute_powers<F: Field>(coeffs: &mut [F], offset: F) {
    let mut power = F::one();
    for c in coeffs.iter_mut() {
        *c *= power;
        power *= offset;
    }
}

/// Evaluates the polynomial with coefficients `coeffs` over `offset * H`.
///
/// # Panics
///
/// Panics if the polynomial has more coefficients than the domain size.
pub fn coset_fft<F: FftField>(domain: D<F>, offset: F, coeffs: &[F]) -> Vec<F> {
    assert!(
        coeffs.len() <= domain.size(),
        "polynomial of {} coefficients does not fit a domain of size {}",
        coeffs.len(),
        domain.size()
    );
    let mut scaled = coeffs.to_vec();
    distribute_powers(&mut scaled, offset);
    scaled.resize(domain.size(), F::zero());
    domain.fft_in_place(&mut scaled);
    scaled
}

/// Interpolates evaluations over `offset * H` back to coefficients.
pub fn coset_ifft<F: FftField>(domain: D<F>, offset: F, evals: &[F]) -> Vec<F> {
    let mut coeffs = domain.ifft(evals);
    let offset_inv = offset.inverse().expect("coset offset is non-zero");
    distribute_powers(&mut coeffs, offset_inv);
    coeffs
}

/// Inverses of the vanishing polynomial of `small` over the coset
/// `offset * large`, indexed by the position in the large domain.
///
/// `Z_H(offset * w^i) = offset^n * w^(i n) - 1` only takes `large / small`
/// distinct values, so only those are inverted.
///
/// # Panics
///
/// Panics if `offset` lies in `small` (the vanishing polynomial is then zero
/// on the coset).
pub fn vanishing_inverses_on_coset<F: FftField>(small: D<F>, large: D<F>, offset: F) -> Vec<F> {
    let n = small.size() as u64;
    let ratio = large.size() / small.size();
    let offset_n = offset.pow([n]);
    let root = large.group_gen().pow([n]);
    let mut distinct: Vec<F> = Vec::with_capacity(ratio);
    let mut power = F::one();
    for _ in 0..ratio {
        distinct.push(offset_n * power - F::one());
        power *= root;
    }
    assert!(
        distinct.iter().all(|v| !v.is_zero()),
        "coset offset must not lie in the vanishing set"
    );
    batch_inversion(&mut distinct);
    (0..large.size())
        .into_par_iter()
        .map(|i| distinct[i % ratio])
        .collect()
}
