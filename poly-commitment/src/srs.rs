//! This module implements the structured reference string (SRS) used by the
//! KZG commitment scheme: powers of a secret `x` in the first group, and
//! `[1]_2, [x]_2` in the second group.
//!
//! The SRS is universal: it does not depend on any circuit and can be shared,
//! read-only, by any number of provers and verifiers.

use crate::CommitmentError;
use ark_ec::{pairing::Pairing, CurveGroup, PrimeGroup};
use ark_ff::{One, Zero};
use ark_poly::univariate::DensePolynomial;
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use snark_utils::{
    fast_msm::{batch_mul, msm},
    field_helpers::sample_nonzero_field,
    serialization::SerdeAs,
};

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
/// Define a structured reference string (i.e. SRS) for the KZG protocol.
/// The SRS consists of powers of an element `g^x` for some toxic waste `x`.
pub struct PairingSRS<E: Pairing> {
    /// `[x^i]_1` for `i` in `0..depth`. Used by the prover to commit.
    #[serde_as(as = "Vec<SerdeAs>")]
    pub g1: Vec<E::G1Affine>,
    /// The generator of the second group, `[1]_2`
    #[serde_as(as = "SerdeAs")]
    pub g2: E::G2Affine,
    /// `[x]_2`
    #[serde_as(as = "SerdeAs")]
    pub g2_x: E::G2Affine,
}

#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
/// The part of the SRS a verifier needs to check openings.
pub struct VerifierSRS<E: Pairing> {
    /// `[1]_1`
    #[serde_as(as = "SerdeAs")]
    pub g1: E::G1Affine,
    /// `[1]_2`
    #[serde_as(as = "SerdeAs")]
    pub g2: E::G2Affine,
    /// `[x]_2`
    #[serde_as(as = "SerdeAs")]
    pub g2_x: E::G2Affine,
}

impl<E: Pairing> PairingSRS<E> {
    /// Create a new SRS for the KZG protocol from a known secret `x`,
    /// supporting polynomials of up to `depth` coefficients.
    ///
    /// # Safety
    ///
    /// The method is annotated as unsafe because the caller knows the toxic
    /// waste `x`, which allows forging proofs. It is meant for tests and
    /// reproducible benchmarks only.
    pub unsafe fn create_trusted_setup(x: E::ScalarField, depth: usize) -> Self {
        let mut x_pow = E::ScalarField::one();
        let powers: Vec<E::ScalarField> = (0..depth)
            .map(|_| {
                let res = x_pow;
                x_pow *= x;
                res
            })
            .collect();
        let g1 = batch_mul(E::G1::generator(), &powers);
        let g2 = E::G2::generator();
        PairingSRS {
            g1,
            g2: g2.into_affine(),
            g2_x: (g2 * x).into_affine(),
        }
    }

    /// Runs a single-party ceremony: samples a fresh secret, derives the SRS,
    /// and drops the secret.
    ///
    /// This is the equivalent of an "unsafe" development setup: whoever runs
    /// it could have kept the secret. Production deployments load an SRS
    /// produced by a multi-party ceremony instead.
    pub fn create<R: RngCore + CryptoRng + ?Sized>(
        depth: usize,
        rng: &mut R,
    ) -> Result<Self, CommitmentError> {
        if depth < 2 {
            return Err(CommitmentError::SrsTooSmall(2, depth));
        }
        let x: E::ScalarField =
            sample_nonzero_field(rng).map_err(|e| CommitmentError::Randomness(e.to_string()))?;
        log::debug!("creating an SRS of depth {depth}");
        // SAFETY: `x` is dropped at the end of this function
        Ok(unsafe { Self::create_trusted_setup(x, depth) })
    }

    /// Number of coefficients a committed polynomial may have.
    pub fn max_poly_size(&self) -> usize {
        self.g1.len()
    }

    /// A copy of the SRS keeping only the first `size` powers, which is all a
    /// prover for a given circuit needs.
    pub fn trim(&self, size: usize) -> Result<Self, CommitmentError> {
        if size > self.g1.len() {
            return Err(CommitmentError::SrsTooSmall(size, self.g1.len()));
        }
        Ok(PairingSRS {
            g1: self.g1[..size].to_vec(),
            g2: self.g2,
            g2_x: self.g2_x,
        })
    }

    pub fn verifier_srs(&self) -> Result<VerifierSRS<E>, CommitmentError> {
        let g1 = *self
            .g1
            .first()
            .ok_or(CommitmentError::SrsTooSmall(1, 0))?;
        Ok(VerifierSRS {
            g1,
            g2: self.g2,
            g2_x: self.g2_x,
        })
    }

    /// Commits to a polynomial in coefficient form, without hiding.
    pub fn commit_non_hiding(
        &self,
        plnm: &DensePolynomial<E::ScalarField>,
    ) -> Result<E::G1Affine, CommitmentError> {
        self.commit_coefficients(&plnm.coeffs)
    }

    /// Commits to a raw coefficient vector.
    pub fn commit_coefficients(
        &self,
        coeffs: &[E::ScalarField],
    ) -> Result<E::G1Affine, CommitmentError> {
        if coeffs.len() > self.g1.len() {
            return Err(CommitmentError::PolynomialTooLarge(
                coeffs.len(),
                self.g1.len(),
            ));
        }
        Ok(msm::<E::G1>(&self.g1, coeffs).into_affine())
    }
}

impl<E: Pairing> VerifierSRS<E> {
    /// Checks that the secret `x` is the same in both groups, i.e. that
    /// `e([x]_1, [1]_2) == e([1]_1, [x]_2)` for the given `[x]_1`.
    pub fn is_consistent_with(&self, g1_x: E::G1Affine) -> bool {
        E::pairing(g1_x, self.g2) == E::pairing(self.g1, self.g2_x)
    }
}

/// Checks `e([x]_1, [1]_2) == e([1]_1, [x]_2)` on a full SRS, and that the
/// powers in the first group are consecutive, using a random linear
/// combination challenge `r`.
pub fn check_srs_consistency<E: Pairing>(srs: &PairingSRS<E>, r: E::ScalarField) -> bool {
    if srs.g1.len() < 2 || r.is_zero() {
        return false;
    }
    // sum r^i [x^i]_1 paired with [x]_2 must equal sum r^i [x^(i+1)]_1 paired with [1]_2
    let n = srs.g1.len() - 1;
    let mut r_pow = E::ScalarField::one();
    let scalars: Vec<E::ScalarField> = (0..n)
        .map(|_| {
            let res = r_pow;
            r_pow *= r;
            res
        })
        .collect();
    let lhs = msm::<E::G1>(&srs.g1[..n], &scalars);
    let rhs = msm::<E::G1>(&srs.g1[1..], &scalars);
    let lhs = E::pairing(lhs, srs.g2_x);
    let rhs = E::pairing(rhs, srs.g2);
    lhs == rhs
}
