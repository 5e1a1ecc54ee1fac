use crate::variable::Variable;
use ark_ff::PrimeField;

/// A full assignment for a circuit: public values, then private values
/// (secret inputs interleaved with solved derived variables, in allocation
/// order).
///
/// Witnesses are never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness<F: PrimeField> {
    pub public: Vec<F>,
    pub private: Vec<F>,
}

impl<F: PrimeField> Witness<F> {
    pub fn new(public: Vec<F>, private: Vec<F>) -> Self {
        Witness { public, private }
    }

    pub fn value(&self, var: Variable) -> Option<F> {
        match var {
            Variable::One => Some(F::one()),
            Variable::Public(i) => self.public.get(i).copied(),
            Variable::Private(i) => self.private.get(i).copied(),
        }
    }

    /// The assignment vector `z = [1, public..., private...]`.
    pub fn assignment(&self) -> Vec<F> {
        let mut z = Vec::with_capacity(1 + self.public.len() + self.private.len());
        z.push(F::one());
        z.extend_from_slice(&self.public);
        z.extend_from_slice(&self.private);
        z
    }
}
