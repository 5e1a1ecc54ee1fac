//! The circuit builder.
//!
//! A circuit is a list of rank-1 constraints `<a, z> * <b, z> = <c, z>` over
//! linear combinations of variables. Derived variables (results of [CircuitBuilder::mul]
//! and [CircuitBuilder::linear]) carry a [Hint] recording how the witness
//! solver computes them.

use crate::{
    error::{CompilationError, WitnessError},
    plonk::PlonkConstraintSystem,
    r1cs::R1CS,
    variable::{LinearCombination, Variable},
    witness::Witness,
};
use ark_ff::PrimeField;
use rayon::prelude::*;

/// How the witness solver computes a private variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hint<F: PrimeField> {
    /// The i-th secret input
    Secret(usize),
    /// The product of two linear combinations
    Product(LinearCombination<F>, LinearCombination<F>),
    /// A linear combination
    Linear(LinearCombination<F>),
}

impl<F: PrimeField> Hint<F> {
    fn variables(&self) -> Vec<Variable> {
        match self {
            Hint::Secret(_) => vec![],
            Hint::Product(a, b) => a.variables().chain(b.variables()).collect(),
            Hint::Linear(l) => l.variables().collect(),
        }
    }

    fn normalize(&self) -> Self {
        match self {
            Hint::Secret(i) => Hint::Secret(*i),
            Hint::Product(a, b) => Hint::Product(a.normalize(), b.normalize()),
            Hint::Linear(l) => Hint::Linear(l.normalize()),
        }
    }
}

/// A rank-1 constraint `a * b = c`, with an optional label used in error
/// messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraint<F: PrimeField> {
    pub a: LinearCombination<F>,
    pub b: LinearCombination<F>,
    pub c: LinearCombination<F>,
    pub label: Option<String>,
    /// Position of the constraint in the builder, which errors report.
    /// Constant constraints dropped by [CircuitBuilder::build] leave gaps.
    pub index: usize,
}

impl<F: PrimeField> Constraint<F> {
    fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.a
            .variables()
            .chain(self.b.variables())
            .chain(self.c.variables())
    }

    fn is_satisfied_by<V>(&self, value: V) -> bool
    where
        V: Fn(Variable) -> Option<F> + Copy,
    {
        match (
            self.a.evaluate(value),
            self.b.evaluate(value),
            self.c.evaluate(value),
        ) {
            (Some(a), Some(b), Some(c)) => a * b == c,
            _ => false,
        }
    }
}

/// Incrementally describes a circuit. Call [CircuitBuilder::build] to obtain
/// a checked, immutable [Circuit].
#[derive(Clone, Debug)]
pub struct CircuitBuilder<F: PrimeField> {
    num_public: usize,
    num_secret: usize,
    hints: Vec<Hint<F>>,
    constraints: Vec<Constraint<F>>,
}

impl<F: PrimeField> Default for CircuitBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: PrimeField> CircuitBuilder<F> {
    pub fn new() -> Self {
        CircuitBuilder {
            num_public: 0,
            num_secret: 0,
            hints: vec![],
            constraints: vec![],
        }
    }

    /// Allocates a new public input.
    pub fn public_input(&mut self) -> Variable {
        self.num_public += 1;
        Variable::Public(self.num_public - 1)
    }

    /// Allocates a new secret input.
    pub fn secret_input(&mut self) -> Variable {
        self.num_secret += 1;
        self.alloc(Hint::Secret(self.num_secret - 1))
    }

    fn alloc(&mut self, hint: Hint<F>) -> Variable {
        self.hints.push(hint);
        Variable::Private(self.hints.len() - 1)
    }

    /// Allocates `w = a * b` and constrains it.
    pub fn mul(
        &mut self,
        a: impl Into<LinearCombination<F>>,
        b: impl Into<LinearCombination<F>>,
    ) -> Variable {
        let (a, b) = (a.into(), b.into());
        let w = self.alloc(Hint::Product(a.clone(), b.clone()));
        self.enforce(a, b, w);
        w
    }

    /// Allocates `w = lc` and constrains it.
    pub fn linear(&mut self, lc: impl Into<LinearCombination<F>>) -> Variable {
        let lc = lc.into();
        let w = self.alloc(Hint::Linear(lc.clone()));
        self.enforce(lc, Variable::One, w);
        w
    }

    /// Adds the constraint `a * b = c`.
    pub fn enforce(
        &mut self,
        a: impl Into<LinearCombination<F>>,
        b: impl Into<LinearCombination<F>>,
        c: impl Into<LinearCombination<F>>,
    ) {
        self.push_constraint(None, a.into(), b.into(), c.into())
    }

    /// Adds the constraint `a * b = c`, reported as `label` when a witness
    /// does not satisfy it.
    pub fn enforce_named(
        &mut self,
        label: impl Into<String>,
        a: impl Into<LinearCombination<F>>,
        b: impl Into<LinearCombination<F>>,
        c: impl Into<LinearCombination<F>>,
    ) {
        self.push_constraint(Some(label.into()), a.into(), b.into(), c.into())
    }

    /// Adds the constraint `a = b`.
    pub fn enforce_equal(
        &mut self,
        a: impl Into<LinearCombination<F>>,
        b: impl Into<LinearCombination<F>>,
    ) {
        self.enforce(a, Variable::One, b)
    }

    /// Adds the constraint `v * (v - 1) = 0`.
    pub fn assert_boolean(&mut self, v: Variable) {
        let v_minus_one = LinearCombination::from(v) - Variable::One;
        self.enforce(v, v_minus_one, LinearCombination::zero())
    }

    fn push_constraint(
        &mut self,
        label: Option<String>,
        a: LinearCombination<F>,
        b: LinearCombination<F>,
        c: LinearCombination<F>,
    ) {
        let index = self.constraints.len();
        self.constraints.push(Constraint {
            a,
            b,
            c,
            label,
            index,
        })
    }

    /// Normalizes and checks the circuit.
    pub fn build(self) -> Result<Circuit<F>, CompilationError> {
        if self.constraints.is_empty() {
            return Err(CompilationError::EmptyCircuit);
        }
        let num_public = self.num_public;
        let num_private = self.hints.len();

        let hints: Vec<Hint<F>> = self.hints.iter().map(Hint::normalize).collect();
        for (k, hint) in hints.iter().enumerate() {
            let in_order = hint.variables().into_iter().all(|var| match var {
                Variable::One => true,
                Variable::Public(i) => i < num_public,
                Variable::Private(j) => j < k,
            });
            if !in_order {
                return Err(CompilationError::HintOutOfOrder { variable: k });
            }
        }

        let mut constraints = Vec::with_capacity(self.constraints.len());
        for (i, constraint) in self.constraints.into_iter().enumerate() {
            let constraint = Constraint {
                a: constraint.a.normalize(),
                b: constraint.b.normalize(),
                c: constraint.c.normalize(),
                label: constraint.label,
                index: constraint.index,
            };
            if let Some(variable) = constraint.variables().find(|var| match var {
                Variable::One => false,
                Variable::Public(i) => *i >= num_public,
                Variable::Private(j) => *j >= num_private,
            }) {
                return Err(CompilationError::UnknownVariable {
                    constraint: i,
                    variable,
                });
            }
            if constraint.a.is_constant()
                && constraint.b.is_constant()
                && constraint.c.is_constant()
            {
                if !constraint.is_satisfied_by(|_| None) {
                    return Err(CompilationError::UnsatisfiableConstant { constraint: i });
                }
                log::debug!("dropping constraint {i}, it only involves constants");
                continue;
            }
            constraints.push(constraint);
        }
        if constraints.is_empty() {
            return Err(CompilationError::EmptyCircuit);
        }

        log::debug!(
            "built a circuit with {} public inputs, {} private variables and {} constraints",
            num_public,
            num_private,
            constraints.len()
        );
        Ok(Circuit {
            num_public,
            num_secret: self.num_secret,
            hints,
            constraints,
        })
    }
}

/// A checked circuit. Every variable referenced by a constraint exists, and
/// every derived variable only depends on variables allocated before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Circuit<F: PrimeField> {
    num_public: usize,
    num_secret: usize,
    hints: Vec<Hint<F>>,
    constraints: Vec<Constraint<F>>,
}

impl<F: PrimeField> Circuit<F> {
    pub fn num_public(&self) -> usize {
        self.num_public
    }

    pub fn num_secret(&self) -> usize {
        self.num_secret
    }

    /// Number of private variables: secret inputs and derived variables.
    pub fn num_private(&self) -> usize {
        self.hints.len()
    }

    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    pub fn hints(&self) -> &[Hint<F>] {
        &self.hints
    }

    /// Compiles to R1CS, for Groth16.
    pub fn to_r1cs(&self) -> R1CS<F> {
        R1CS::compile(self)
    }

    /// Compiles to PLONK gates, for PLONK.
    pub fn to_plonk(&self) -> PlonkConstraintSystem<F> {
        PlonkConstraintSystem::compile(self)
    }

    /// Computes the full witness from the public and secret inputs, and checks
    /// that it satisfies every constraint.
    pub fn solve(&self, public: &[F], secret: &[F]) -> Result<Witness<F>, WitnessError> {
        if public.len() != self.num_public {
            return Err(WitnessError::PublicLength {
                expected: self.num_public,
                got: public.len(),
            });
        }
        if secret.len() != self.num_secret {
            return Err(WitnessError::SecretLength {
                expected: self.num_secret,
                got: secret.len(),
            });
        }

        let mut private: Vec<F> = Vec::with_capacity(self.hints.len());
        for hint in &self.hints {
            let value = {
                let lookup = |var: Variable| match var {
                    Variable::One => Some(F::one()),
                    Variable::Public(i) => public.get(i).copied(),
                    Variable::Private(j) => private.get(j).copied(),
                };
                match hint {
                    Hint::Secret(i) => secret.get(*i).copied(),
                    Hint::Product(a, b) => a
                        .evaluate(lookup)
                        .and_then(|a| b.evaluate(lookup).map(|b| a * b)),
                    Hint::Linear(l) => l.evaluate(lookup),
                }
            };
            let value = value.ok_or(WitnessError::PrivateLength {
                expected: self.hints.len(),
                got: private.len(),
            })?;
            private.push(value);
        }

        let witness = Witness::new(public.to_vec(), private);
        self.is_satisfied(&witness)?;
        Ok(witness)
    }

    /// Checks the witness against the constraints, reporting the first one
    /// that fails.
    pub fn is_satisfied(&self, witness: &Witness<F>) -> Result<(), WitnessError> {
        if witness.public.len() != self.num_public {
            return Err(WitnessError::PublicLength {
                expected: self.num_public,
                got: witness.public.len(),
            });
        }
        if witness.private.len() != self.num_private() {
            return Err(WitnessError::PrivateLength {
                expected: self.num_private(),
                got: witness.private.len(),
            });
        }
        let failing = self
            .constraints
            .par_iter()
            .position_first(|c| !c.is_satisfied_by(|var| witness.value(var)));
        match failing {
            None => Ok(()),
            Some(i) => Err(WitnessError::Unsatisfied {
                constraint: self.constraints[i].index,
                label: self.constraints[i].label.clone(),
            }),
        }
    }
}
