//! Circuits over a prime field, and their compilation to the constraint
//! systems consumed by the provers: R1CS for Groth16, and fan-in-two gates
//! with copy constraints for PLONK.
//!
//! ```ignore
//! let mut builder = CircuitBuilder::<Fr>::new();
//! let y = builder.public_input();
//! let x = builder.secret_input();
//! let x2 = builder.mul(x, x);
//! builder.enforce_equal(x2, y);
//! let circuit = builder.build()?;
//! let witness = circuit.solve(&[9u64.into()], &[3u64.into()])?;
//! ```

pub mod builder;
pub mod digest;
pub mod error;
pub mod plonk;
pub mod r1cs;
pub mod variable;
pub mod witness;

pub use builder::{Circuit, CircuitBuilder, Constraint, Hint};
pub use digest::Digest;
pub use error::{CompilationError, WitnessError};
pub use plonk::{Gate, PlonkConstraintSystem};
pub use r1cs::R1CS;
pub use variable::{LinearCombination, Variable};
pub use witness::Witness;
