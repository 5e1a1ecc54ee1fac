//! Rank-1 constraint systems, the input of the Groth16 setup and prover.

use crate::{
    builder::Circuit,
    digest::{Digest, DigestWriter},
    error::WitnessError,
    variable::LinearCombination,
    witness::Witness,
};
use ark_ff::PrimeField;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use snark_utils::serialization::SerdeAs;

/// A sparse row: pairs of coefficient and index into the assignment vector
/// `z = [1, public..., private...]`.
pub type SparseRow<F> = Vec<(F, usize)>;

/// A rank-1 constraint system: for every row `i`,
/// `<a_i, z> * <b_i, z> = <c_i, z>`.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct R1CS<F: PrimeField> {
    pub num_public: usize,
    pub num_private: usize,
    #[serde_as(as = "Vec<Vec<(SerdeAs, _)>>")]
    pub a: Vec<SparseRow<F>>,
    #[serde_as(as = "Vec<Vec<(SerdeAs, _)>>")]
    pub b: Vec<SparseRow<F>>,
    #[serde_as(as = "Vec<Vec<(SerdeAs, _)>>")]
    pub c: Vec<SparseRow<F>>,
    /// Labels given with [crate::CircuitBuilder::enforce_named]
    pub labels: Vec<Option<String>>,
    /// Builder position of the constraint each row comes from
    pub origins: Vec<usize>,
}

fn sparse_row<F: PrimeField>(lc: &LinearCombination<F>, num_public: usize) -> SparseRow<F> {
    lc.terms
        .iter()
        .map(|(var, coeff)| (*coeff, var.assignment_index(num_public)))
        .collect()
}

/// `<row, z>`
pub fn evaluate_row<F: PrimeField>(row: &[(F, usize)], z: &[F]) -> F {
    row.iter().map(|(coeff, i)| *coeff * z[*i]).sum()
}

impl<F: PrimeField> R1CS<F> {
    pub(crate) fn compile(circuit: &Circuit<F>) -> Self {
        let num_public = circuit.num_public();
        let constraints = circuit.constraints();
        let r1cs = R1CS {
            num_public,
            num_private: circuit.num_private(),
            a: constraints.iter().map(|c| sparse_row(&c.a, num_public)).collect(),
            b: constraints.iter().map(|c| sparse_row(&c.b, num_public)).collect(),
            c: constraints.iter().map(|c| sparse_row(&c.c, num_public)).collect(),
            labels: constraints.iter().map(|c| c.label.clone()).collect(),
            origins: constraints.iter().map(|c| c.index).collect(),
        };
        log::debug!(
            "compiled R1CS with {} rows, digest {}",
            r1cs.num_constraints(),
            hex::encode(r1cs.digest())
        );
        r1cs
    }

    pub fn num_constraints(&self) -> usize {
        self.a.len()
    }

    /// Length of the assignment vector, including the constant `1`.
    pub fn num_variables(&self) -> usize {
        1 + self.num_public + self.num_private
    }

    /// Checks that the rows are consistent with each other and only
    /// reference existing variables. Decoded constraint systems go through
    /// this before being used.
    pub fn is_well_formed(&self) -> bool {
        let n = self.num_constraints();
        let num_variables = self.num_variables();
        n > 0
            && self.b.len() == n
            && self.c.len() == n
            && self.labels.len() == n
            && self.origins.len() == n
            && self
                .a
                .iter()
                .chain(&self.b)
                .chain(&self.c)
                .flatten()
                .all(|(_, i)| *i < num_variables)
    }

    /// Checks the witness against every row, reporting the first one that
    /// fails.
    pub fn is_satisfied(&self, witness: &Witness<F>) -> Result<(), WitnessError> {
        if witness.public.len() != self.num_public {
            return Err(WitnessError::PublicLength {
                expected: self.num_public,
                got: witness.public.len(),
            });
        }
        if witness.private.len() != self.num_private {
            return Err(WitnessError::PrivateLength {
                expected: self.num_private,
                got: witness.private.len(),
            });
        }
        let z = witness.assignment();
        let failing = (0..self.num_constraints()).into_par_iter().find_first(|i| {
            evaluate_row(&self.a[*i], &z) * evaluate_row(&self.b[*i], &z)
                != evaluate_row(&self.c[*i], &z)
        });
        match failing {
            None => Ok(()),
            Some(i) => Err(WitnessError::Unsatisfied {
                constraint: self.origins[i],
                label: self.labels.get(i).cloned().flatten(),
            }),
        }
    }

    /// Blake2b digest of the rows and variable counts. Labels and origins
    /// are not part of it.
    pub fn digest(&self) -> Digest {
        let mut writer = DigestWriter::new(b"r1cs");
        writer.usize(self.num_public);
        writer.usize(self.num_private);
        for matrix in [&self.a, &self.b, &self.c] {
            writer.usize(matrix.len());
            for row in matrix {
                writer.usize(row.len());
                for (coeff, i) in row {
                    writer.usize(*i);
                    writer.field(coeff);
                }
            }
        }
        writer.finish()
    }
}
