//! This adds a few utility functions for the [DensePolynomial] arkworks type.

use ark_ff::Field;
use ark_poly::univariate::DensePolynomial;
use ark_poly::DenseUVPolynomial;

/// An extension for the [DensePolynomial] type.
pub trait ExtendedDensePolynomial<F: Field> {
    /// Divides by `X - point` with synthetic division, returning the
    /// quotient and the remainder (which equals the evaluation at `point`).
    fn divide_by_linear(&self, point: F) -> (Self, F)
    where
        Self: Sized;

    /// Adds `b(X) * (X^n - 1)`, where `b` has coefficients `blinders`.
    /// The result agrees with `self` on the subgroup of size `n`.
    fn blind_with_vanishing(&self, n: usize, blinders: &[F]) -> Self;
}

impl<F: Field> ExtendedDensePolynomial<F> for DensePolynomial<F> {
    fn divide_by_linear(&self, point: F) -> (Self, F) {
        let coeffs = &self.coeffs;
        if coeffs.is_empty() {
            return (DensePolynomial::from_coefficients_vec(vec![]), F::zero());
        }
        let mut quotient = vec![F::zero(); coeffs.len() - 1];
        let mut carry = F::zero();
        for (i, c) in coeffs.iter().enumerate().rev() {
            carry = *c + carry * point;
            if i > 0 {
                quotient[i - 1] = carry;
            }
        }
        (DensePolynomial::from_coefficients_vec(quotient), carry)
    }

    fn blind_with_vanishing(&self, n: usize, blinders: &[F]) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs.resize(std::cmp::max(coeffs.len(), n + blinders.len()), F::zero());
        for (i, b) in blinders.iter().enumerate() {
            coeffs[i] -= b;
            coeffs[i + n] += b;
        }
        DensePolynomial::from_coefficients_vec(coeffs)
    }
}
