//! This module implements the [`ProverError`] and [`SetupError`] types.

use snark_circuits::WitnessError;
use snark_poly_commitment::CommitmentError;
use thiserror::Error;

/// Errors that can arise when preprocessing a circuit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("the SRS is too small for this circuit (required: {required}, available: {available})")]
    SrsTooSmall { required: usize, available: usize },

    #[error("no evaluation domain of size {0} exists over the scalar field")]
    DomainTooLarge(usize),

    #[error("the constraint system is malformed")]
    MalformedConstraintSystem,

    #[error("the polynomial commitment failed: {0}")]
    Commitment(#[from] CommitmentError),
}

/// Errors that can arise when creating a proof
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProverError {
    #[error("the witness does not fit the constraint system: {0}")]
    Witness(#[from] WitnessError),

    #[error("the prover index was not generated for this constraint system")]
    KeyMismatch,

    #[error("randomness generation failed: {0}")]
    Randomness(String),

    #[error("the polynomial commitment failed: {0}")]
    Commitment(#[from] CommitmentError),

    #[error("the proof could not be constructed: {0}")]
    Prover(&'static str),
}
