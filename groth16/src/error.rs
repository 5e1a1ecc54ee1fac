//! This module implements the [`ProverError`] and [`SetupError`] types.

use snark_circuits::WitnessError;
use thiserror::Error;

/// Errors that can arise when running the trusted setup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("randomness generation failed: {0}")]
    Randomness(String),

    #[error("no evaluation domain of size {0} exists over the scalar field")]
    DomainTooLarge(usize),

    #[error("the constraint system is malformed")]
    MalformedConstraintSystem,
}

/// Errors that can arise when creating a proof
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProverError {
    #[error("the witness does not fit the constraint system: {0}")]
    Witness(#[from] WitnessError),

    #[error("the proving key was not generated for this constraint system")]
    KeyMismatch,

    #[error("randomness generation failed: {0}")]
    Randomness(String),

    #[error("no evaluation domain of size {0} exists over the scalar field")]
    DomainTooLarge(usize),

    #[error("the constraint system is malformed")]
    MalformedConstraintSystem,
}
