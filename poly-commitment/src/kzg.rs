//! This module implements the KZG protocol described in the paper
//! [Constant-Size Commitments to Polynomials and Their
//! Applications](https://www.iacr.org/archive/asiacrypt2010/6477178/6477178.pdf)
//! by Kate, Zaverucha and Goldberg, often referred to as the KZG10 paper.
//!
//! An opening of a committed polynomial `p` at a point `z` is a commitment to
//! the quotient `(p(X) - p(z)) / (X - z)`. The verifier checks
//! `e(C - [p(z)]_1 + z [q]_1, [1]_2) == e([q]_1, [x]_2)`.

use crate::{
    srs::{PairingSRS, VerifierSRS},
    CommitmentError,
};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::Zero;
use ark_poly::univariate::DensePolynomial;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use snark_utils::{serialization::SerdeAs, ExtendedDensePolynomial};

#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct KZGProof<E: Pairing> {
    /// Commitment to the quotient polynomial
    #[serde_as(as = "SerdeAs")]
    pub quotient: E::G1Affine,
}

impl<E: Pairing> KZGProof<E> {
    /// Opens `plnm` at `point`. Returns the evaluation together with the
    /// proof.
    pub fn create(
        srs: &PairingSRS<E>,
        plnm: &DensePolynomial<E::ScalarField>,
        point: E::ScalarField,
    ) -> Result<(E::ScalarField, Self), CommitmentError> {
        let (quotient_poly, value) = plnm.divide_by_linear(point);
        let quotient = srs.commit_non_hiding(&quotient_poly)?;
        Ok((value, KZGProof { quotient }))
    }

    /// Checks that `commitment` opens to `value` at `point`.
    pub fn verify(
        &self,
        srs: &VerifierSRS<E>,
        commitment: E::G1Affine,
        point: E::ScalarField,
        value: E::ScalarField,
    ) -> bool {
        let lhs = commitment.into_group() - srs.g1 * value + self.quotient * point;
        check_opening_identity(srs, self.quotient.into_group(), lhs)
    }
}

/// Checks `e(lhs, [x]_2) == e(rhs, [1]_2)` with a single final
/// exponentiation.
pub fn check_opening_identity<E: Pairing>(srs: &VerifierSRS<E>, lhs: E::G1, rhs: E::G1) -> bool {
    let g1 = E::G1::normalize_batch(&[lhs, -rhs]);
    E::multi_pairing(g1, [srs.g2_x, srs.g2]).is_zero()
}
