//! Multi-scalar multiplication and fixed-base batch multiplication helpers
//! used by the setups and the provers.

use ark_ec::{CurveGroup, VariableBaseMSM};
use rayon::prelude::*;

/// Computes `sum_i scalars[i] * bases[i]`.
///
/// # Panics
///
/// Panics if there are fewer bases than scalars; callers size their bases
/// from the setup so this is an invariant violation.
pub fn msm<G: CurveGroup>(
    bases: &[G::Affine],
    scalars: &[G::ScalarField],
) -> G {
    assert!(
        scalars.len() <= bases.len(),
        "msm over {} scalars with only {} bases",
        scalars.len(),
        bases.len()
    );
    G::msm_unchecked(&bases[..scalars.len()], scalars)
}

/// Multiplies a fixed `base` by each scalar and returns the affine results.
pub fn batch_mul<G: CurveGroup>(base: G, scalars: &[G::ScalarField]) -> Vec<G::Affine> {
    let projective: Vec<G> = scalars.par_iter().map(|s| base * s).collect();
    G::normalize_batch(&projective)
}
