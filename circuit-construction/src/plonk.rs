//! Compilation of circuits to fan-in-two PLONK gates.
//!
//! Every gate enforces `q_l a + q_r b + q_o c + q_m a b + q_c (+ PI) = 0` on
//! its three wires. Wires are variables: two gate slots referring to the same
//! wire are copy-constrained. Wires are laid out as
//! `[public... | private... | zero | intermediate...]`.
//!
//! The first `num_public` gates read the public inputs: gate `i` has
//! `q_l = 1` with wire `a` set to public input `i`, and the public input
//! polynomial contributes `-x_i` on that row.

use crate::{
    builder::Circuit,
    digest::{Digest, DigestWriter},
    error::WitnessError,
    variable::{LinearCombination, Variable},
    witness::Witness,
};
use ark_ff::PrimeField;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use snark_utils::serialization::SerdeAs;
use std::collections::BTreeMap;

/// A PLONK gate.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Gate<F: PrimeField> {
    /// The wires `a, b, c`
    pub wires: [usize; 3],
    #[serde_as(as = "SerdeAs")]
    pub q_l: F,
    #[serde_as(as = "SerdeAs")]
    pub q_r: F,
    #[serde_as(as = "SerdeAs")]
    pub q_o: F,
    #[serde_as(as = "SerdeAs")]
    pub q_m: F,
    #[serde_as(as = "SerdeAs")]
    pub q_c: F,
    /// Builder position of the circuit constraint this gate was compiled from
    pub origin: Option<usize>,
    /// Whether wire `c` is an intermediate computed from this gate
    pub solves_output: bool,
}

impl<F: PrimeField> Gate<F> {
    /// A gate with all selectors zero, used to fill unused rows.
    pub fn zero(wire: usize) -> Self {
        Gate {
            wires: [wire; 3],
            q_l: F::zero(),
            q_r: F::zero(),
            q_o: F::zero(),
            q_m: F::zero(),
            q_c: F::zero(),
            origin: None,
            solves_output: false,
        }
    }

    fn public(wire: usize, zero_wire: usize) -> Self {
        Gate {
            wires: [wire, zero_wire, zero_wire],
            q_l: F::one(),
            ..Gate::zero(zero_wire)
        }
    }

    /// `q_l a + q_r b + q_o c + q_m a b + q_c`
    pub fn evaluate(&self, a: F, b: F, c: F) -> F {
        self.q_l * a + self.q_r * b + self.q_o * c + self.q_m * a * b + self.q_c
    }
}

/// A linear combination reduced to a single wire: `scale * wire + constant`.
struct Reduced<F> {
    scale: F,
    wire: usize,
    constant: F,
}

/// A PLONK constraint system, ready for preprocessing.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PlonkConstraintSystem<F: PrimeField> {
    pub num_public: usize,
    pub num_private: usize,
    /// Total number of wires, intermediates included
    pub num_wires: usize,
    pub gates: Vec<Gate<F>>,
    /// Labels of the circuit constraints, keyed by [Gate::origin]
    pub labels: BTreeMap<usize, String>,
}

struct Compiler<F: PrimeField> {
    num_public: usize,
    zero_wire: usize,
    next_wire: usize,
    gates: Vec<Gate<F>>,
}

impl<F: PrimeField> Compiler<F> {
    fn wire(&self, var: Variable) -> usize {
        match var {
            Variable::Public(i) => i,
            Variable::Private(j) => self.num_public + j,
            // constants are folded into selectors before we get here
            Variable::One => self.zero_wire,
        }
    }

    fn intermediate(&mut self) -> usize {
        self.next_wire += 1;
        self.next_wire - 1
    }

    /// Reduces a normalized linear combination to one wire, adding addition
    /// gates for combinations of more than one variable.
    fn reduce(&mut self, lc: &LinearCombination<F>, origin: usize) -> Reduced<F> {
        let constant = lc.constant_term();
        let terms: Vec<(Variable, F)> = lc.variable_terms().copied().collect();
        match terms.as_slice() {
            [] => Reduced {
                scale: F::zero(),
                wire: self.zero_wire,
                constant,
            },
            [(var, coeff)] => Reduced {
                scale: *coeff,
                wire: self.wire(*var),
                constant,
            },
            [(v0, c0), rest @ ..] => {
                let mut acc = self.wire(*v0);
                let mut acc_scale = *c0;
                for (var, coeff) in rest {
                    let out = self.intermediate();
                    self.gates.push(Gate {
                        wires: [acc, self.wire(*var), out],
                        q_l: acc_scale,
                        q_r: *coeff,
                        q_o: -F::one(),
                        q_m: F::zero(),
                        q_c: F::zero(),
                        origin: Some(origin),
                        solves_output: true,
                    });
                    acc = out;
                    acc_scale = F::one();
                }
                Reduced {
                    scale: F::one(),
                    wire: acc,
                    constant,
                }
            }
        }
    }
}

impl<F: PrimeField> PlonkConstraintSystem<F> {
    pub(crate) fn compile(circuit: &Circuit<F>) -> Self {
        let num_public = circuit.num_public();
        let num_private = circuit.num_private();
        let zero_wire = num_public + num_private;
        let mut compiler = Compiler {
            num_public,
            zero_wire,
            next_wire: zero_wire + 1,
            gates: (0..num_public)
                .map(|i| Gate::public(i, zero_wire))
                .collect(),
        };

        for constraint in circuit.constraints() {
            let i = constraint.index;
            let a = compiler.reduce(&constraint.a, i);
            let b = compiler.reduce(&constraint.b, i);
            let c = compiler.reduce(&constraint.c, i);
            // (sa a + ka) (sb b + kb) = sc c + kc
            compiler.gates.push(Gate {
                wires: [a.wire, b.wire, c.wire],
                q_l: a.scale * b.constant,
                q_r: a.constant * b.scale,
                q_o: -c.scale,
                q_m: a.scale * b.scale,
                q_c: a.constant * b.constant - c.constant,
                origin: Some(i),
                solves_output: false,
            });
        }

        let cs = PlonkConstraintSystem {
            num_public,
            num_private,
            num_wires: compiler.next_wire,
            gates: compiler.gates,
            labels: circuit
                .constraints()
                .iter()
                .filter_map(|c| Some((c.index, c.label.clone()?)))
                .collect(),
        };
        log::debug!(
            "compiled {} constraints to {} PLONK gates over {} wires, digest {}",
            circuit.constraints().len(),
            cs.gates.len(),
            cs.num_wires,
            hex::encode(cs.digest())
        );
        cs
    }

    /// The wire that always holds zero.
    pub fn zero_wire(&self) -> usize {
        self.num_public + self.num_private
    }

    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Checks that gates only reference existing wires and that the public
    /// rows have the expected shape. Decoded constraint systems go through
    /// this before being used.
    pub fn is_well_formed(&self) -> bool {
        let zero_wire = self.zero_wire();
        !self.gates.is_empty()
            && self.num_wires > zero_wire
            && self.gates.len() >= self.num_public
            && self
                .gates
                .iter()
                .all(|g| g.wires.iter().all(|w| *w < self.num_wires))
            && self.gates[..self.num_public]
                .iter()
                .enumerate()
                .all(|(i, g)| *g == Gate::public(i, zero_wire))
            && self
                .gates
                .iter()
                .all(|g| !g.solves_output || g.wires[2] > zero_wire)
    }

    /// Computes the value of every wire, solving intermediates gate by gate.
    pub fn wire_values(&self, witness: &Witness<F>) -> Result<Vec<F>, WitnessError> {
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
        let mut values = Vec::with_capacity(self.num_wires);
        values.extend_from_slice(&witness.public);
        values.extend_from_slice(&witness.private);
        values.resize(self.num_wires, F::zero());

        for (i, gate) in self.gates.iter().enumerate() {
            if !gate.solves_output {
                continue;
            }
            let [a, b, c] = gate.wires;
            let q_o_inv = gate
                .q_o
                .inverse()
                .ok_or(WitnessError::UnsolvableGate { gate: i })?;
            values[c] = -gate.evaluate(values[a], values[b], F::zero()) * q_o_inv;
        }
        Ok(values)
    }

    /// The public input polynomial evaluated on gate `row`.
    pub fn public_input_at(&self, public: &[F], row: usize) -> F {
        public.get(row).map(|x| -*x).unwrap_or_else(F::zero)
    }

    /// Checks the witness against every gate, reporting the circuit
    /// constraint of the first gate that fails.
    pub fn is_satisfied(&self, witness: &Witness<F>) -> Result<(), WitnessError> {
        let values = self.wire_values(witness)?;
        for (row, gate) in self.gates.iter().enumerate() {
            let [a, b, c] = gate.wires;
            let lhs = gate.evaluate(values[a], values[b], values[c])
                + self.public_input_at(&witness.public, row);
            if !lhs.is_zero() {
                let constraint = gate.origin.unwrap_or(row);
                return Err(WitnessError::Unsatisfied {
                    constraint,
                    label: gate
                        .origin
                        .and_then(|o| self.labels.get(&o).cloned()),
                });
            }
        }
        Ok(())
    }

    /// Blake2b digest of the gates and variable counts. Labels and origins
    /// are not part of it.
    pub fn digest(&self) -> Digest {
        let mut writer = DigestWriter::new(b"plonk");
        writer.usize(self.num_public);
        writer.usize(self.num_private);
        writer.usize(self.num_wires);
        writer.usize(self.gates.len());
        for gate in &self.gates {
            for w in gate.wires {
                writer.usize(w);
            }
            for q in [&gate.q_l, &gate.q_r, &gate.q_o, &gate.q_m, &gate.q_c] {
                writer.field(q);
            }
            writer.usize(gate.solves_output as usize);
        }
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CircuitBuilder;
    use ark_bn254::Fr;

    // x^3 + x + 5 = y
    fn cubic() -> Circuit<Fr> {
        let mut builder = CircuitBuilder::new();
        let y = builder.public_input();
        let x = builder.secret_input();
        let x2 = builder.mul(x, x);
        let x3 = builder.mul(x2, x);
        let lhs = LinearCombination::from(x3)
            + LinearCombination::from(x)
            + LinearCombination::constant(Fr::from(5u64));
        builder.enforce_equal(lhs, y);
        builder.build().unwrap()
    }

    #[test]
    fn test_cubic_gates() {
        let cs = cubic().to_plonk();
        // one public gate, two products, one addition, one equality
        assert_eq!(cs.num_gates(), 5);
        assert_eq!(cs.zero_wire(), 4);
        assert_eq!(cs.num_wires, 6);
        assert!(cs.gates[3].solves_output);
        assert!(cs.is_well_formed());
    }

    #[test]
    fn test_cubic_satisfaction() {
        let circuit = cubic();
        let cs = circuit.to_plonk();
        let witness = circuit.solve(&[Fr::from(35u64)], &[Fr::from(3u64)]).unwrap();
        assert_eq!(cs.is_satisfied(&witness), Ok(()));
        let values = cs.wire_values(&witness).unwrap();
        // x^3 + x
        assert_eq!(values[5], Fr::from(30u64));

        let mut bad = witness.clone();
        bad.public[0] = Fr::from(36u64);
        assert_eq!(
            cs.is_satisfied(&bad),
            Err(WitnessError::Unsatisfied {
                constraint: 2,
                label: None
            })
        );
    }

    #[test]
    fn test_digest_binds_selectors() {
        let cs = cubic().to_plonk();
        let mut other = cs.clone();
        other.gates[4].q_c += Fr::from(1u64);
        assert_ne!(cs.digest(), other.digest());
        assert_eq!(cs.digest(), cs.clone().digest());
    }
}
