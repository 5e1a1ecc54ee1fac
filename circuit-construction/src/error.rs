//! This module implements the errors raised while compiling circuits and
//! checking witnesses.

use crate::variable::Variable;
use thiserror::Error;

/// Errors raised when a circuit description cannot be compiled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompilationError {
    #[error("the circuit has no constraints")]
    EmptyCircuit,

    #[error("constraint {constraint} references unknown variable {variable:?}")]
    UnknownVariable {
        constraint: usize,
        variable: Variable,
    },

    #[error("constraint {constraint} only involves constants and can never hold")]
    UnsatisfiableConstant { constraint: usize },

    #[error("derived variable {variable} depends on a variable computed after it")]
    HintOutOfOrder { variable: usize },
}

/// Errors raised when a witness does not fit, or does not satisfy, a
/// constraint system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WitnessError {
    #[error("expected {expected} public values, got {got}")]
    PublicLength { expected: usize, got: usize },

    #[error("expected {expected} secret inputs, got {got}")]
    SecretLength { expected: usize, got: usize },

    #[error("expected {expected} private values, got {got}")]
    PrivateLength { expected: usize, got: usize },

    #[error(
        "constraint {constraint} ({}) is not satisfied",
        .label.as_deref().unwrap_or("unnamed")
    )]
    Unsatisfied {
        constraint: usize,
        label: Option<String>,
    },

    #[error("gate {gate} cannot solve its output wire")]
    UnsolvableGate { gate: usize },
}
