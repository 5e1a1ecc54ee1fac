//! Variables and linear combinations over them.

use ark_ff::PrimeField;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use snark_utils::serialization::SerdeAs;
use std::{
    collections::BTreeMap,
    ops::{Add, Mul, Neg, Sub},
};

/// A variable of a circuit.
///
/// The assignment vector of a circuit is `z = [1, public..., private...]`;
/// [Variable::One] is the constant `1` at the start of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Variable {
    One,
    Public(usize),
    Private(usize),
}

impl Variable {
    /// Position of the variable in the assignment vector `[1, public..., private...]`.
    pub fn assignment_index(&self, num_public: usize) -> usize {
        match self {
            Variable::One => 0,
            Variable::Public(i) => 1 + i,
            Variable::Private(i) => 1 + num_public + i,
        }
    }
}

/// A linear combination `sum_i coeff_i * var_i`. Constants are coefficients of
/// [Variable::One].
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct LinearCombination<F: PrimeField> {
    #[serde_as(as = "Vec<(_, SerdeAs)>")]
    pub terms: Vec<(Variable, F)>,
}

impl<F: PrimeField> Default for LinearCombination<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: PrimeField> LinearCombination<F> {
    pub fn zero() -> Self {
        LinearCombination { terms: vec![] }
    }

    pub fn constant(value: F) -> Self {
        LinearCombination {
            terms: vec![(Variable::One, value)],
        }
    }

    pub fn term(var: Variable, coeff: F) -> Self {
        LinearCombination {
            terms: vec![(var, coeff)],
        }
    }

    /// Merges duplicate variables, drops zero coefficients, and orders the
    /// terms by variable so that the constant term comes first.
    pub fn normalize(&self) -> Self {
        let mut merged: BTreeMap<Variable, F> = BTreeMap::new();
        for (var, coeff) in &self.terms {
            *merged.entry(*var).or_insert_with(F::zero) += coeff;
        }
        LinearCombination {
            terms: merged.into_iter().filter(|(_, c)| !c.is_zero()).collect(),
        }
    }

    /// The coefficient of [Variable::One]. Assumes a normalized combination.
    pub fn constant_term(&self) -> F {
        self.terms
            .iter()
            .filter(|(v, _)| *v == Variable::One)
            .map(|(_, c)| *c)
            .sum()
    }

    /// The terms over non-constant variables.
    pub fn variable_terms(&self) -> impl Iterator<Item = &(Variable, F)> {
        self.terms.iter().filter(|(v, _)| *v != Variable::One)
    }

    pub fn is_constant(&self) -> bool {
        self.variable_terms().next().is_none()
    }

    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.variable_terms().map(|(v, _)| *v)
    }

    /// Evaluates the combination, looking up variables with `value`. Returns
    /// `None` as soon as a variable has no value.
    pub fn evaluate<V>(&self, mut value: V) -> Option<F>
    where
        V: FnMut(Variable) -> Option<F>,
    {
        let mut acc = F::zero();
        for (var, coeff) in &self.terms {
            let v = match var {
                Variable::One => F::one(),
                _ => value(*var)?,
            };
            acc += v * coeff;
        }
        Some(acc)
    }
}

impl<F: PrimeField> From<Variable> for LinearCombination<F> {
    fn from(var: Variable) -> Self {
        LinearCombination::term(var, F::one())
    }
}

impl<F: PrimeField> Add for LinearCombination<F> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self.terms.extend(other.terms);
        self
    }
}

impl<F: PrimeField> Add<Variable> for LinearCombination<F> {
    type Output = Self;

    fn add(mut self, var: Variable) -> Self {
        self.terms.push((var, F::one()));
        self
    }
}

impl<F: PrimeField> Neg for LinearCombination<F> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for (_, c) in self.terms.iter_mut() {
            *c = -*c;
        }
        self
    }
}

impl<F: PrimeField> Sub for LinearCombination<F> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl<F: PrimeField> Sub<Variable> for LinearCombination<F> {
    type Output = Self;

    fn sub(mut self, var: Variable) -> Self {
        self.terms.push((var, -F::one()));
        self
    }
}

impl<F: PrimeField> Mul<F> for LinearCombination<F> {
    type Output = Self;

    fn mul(mut self, scalar: F) -> Self {
        for (_, c) in self.terms.iter_mut() {
            *c *= scalar;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_ff::{One, Zero};

    #[test]
    fn test_normalize_merges_and_drops() {
        let x = Variable::Private(0);
        let y = Variable::Public(0);
        let lc = LinearCombination::<Fr>::from(x)
            + LinearCombination::constant(Fr::from(3u64))
            + LinearCombination::term(y, Fr::from(2u64))
            - x
            + LinearCombination::constant(Fr::from(4u64));
        let lc = lc.normalize();
        assert_eq!(
            lc.terms,
            vec![(Variable::One, Fr::from(7u64)), (y, Fr::from(2u64))]
        );
        assert_eq!(lc.constant_term(), Fr::from(7u64));
        assert!(!lc.is_constant());
    }

    #[test]
    fn test_evaluate() {
        let x = Variable::Private(1);
        let lc = (LinearCombination::<Fr>::from(x) * Fr::from(5u64))
            + LinearCombination::constant(Fr::one());
        let value = lc.evaluate(|v| (v == x).then(|| Fr::from(2u64)));
        assert_eq!(value, Some(Fr::from(11u64)));
        assert_eq!(lc.evaluate(|_| None), None);
        assert_eq!(
            LinearCombination::<Fr>::zero().evaluate(|_| None),
            Some(Fr::zero())
        );
    }

    #[test]
    fn test_assignment_index() {
        assert_eq!(Variable::One.assignment_index(2), 0);
        assert_eq!(Variable::Public(1).assignment_index(2), 2);
        assert_eq!(Variable::Private(0).assignment_index(2), 3);
    }
}
