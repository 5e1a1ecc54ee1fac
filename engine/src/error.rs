//! This module implements the error types of the engine.
//!
//! Backend errors are wrapped, except witness and key errors which are the
//! same for both proving systems and are flattened into [ProverError].

use crate::{artifact::ArtifactKind, curve::CurveId, system::ProvingSystem};
use snark_circuits::{CompilationError, WitnessError};
use snark_utils::FieldHelpersError;
use thiserror::Error;

/// Errors that can arise when generating keys
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("groth16 setup failed: {0}")]
    Groth16(#[from] snark_groth16::SetupError),

    #[error("plonk setup failed: {0}")]
    Plonk(#[from] snark_plonk::SetupError),

    #[error("a PLONK setup needs a structured reference string")]
    MissingSrs,
}

/// Errors that can arise when creating a proof
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProverError {
    #[error("the witness does not fit the constraint system: {0}")]
    Witness(WitnessError),

    #[error("the proving key was not generated for this constraint system")]
    KeyMismatch,

    #[error("a {key:?} proving key cannot prove a {constraint_system:?} constraint system")]
    SystemMismatch {
        key: ProvingSystem,
        constraint_system: ProvingSystem,
    },

    #[error("randomness generation failed: {0}")]
    Randomness(String),

    #[error("groth16 prover failed: {0}")]
    Groth16(snark_groth16::ProverError),

    #[error("plonk prover failed: {0}")]
    Plonk(snark_plonk::ProverError),
}

impl From<snark_groth16::ProverError> for ProverError {
    fn from(e: snark_groth16::ProverError) -> Self {
        use snark_groth16::ProverError as E;
        match e {
            E::Witness(w) => ProverError::Witness(w),
            E::KeyMismatch => ProverError::KeyMismatch,
            E::Randomness(msg) => ProverError::Randomness(msg),
            e => ProverError::Groth16(e),
        }
    }
}

impl From<snark_plonk::ProverError> for ProverError {
    fn from(e: snark_plonk::ProverError) -> Self {
        use snark_plonk::ProverError as E;
        match e {
            E::Witness(w) => ProverError::Witness(w),
            E::KeyMismatch => ProverError::KeyMismatch,
            E::Randomness(msg) => ProverError::Randomness(msg),
            e => ProverError::Plonk(e),
        }
    }
}

/// Errors that can arise when encoding an artifact
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("failed to encode the payload: {0}")]
    Payload(String),

    #[error("the payload of {0} bytes does not fit the header length field")]
    PayloadTooLarge(usize),
}

/// Errors that can arise when decoding an artifact. Decoding never panics
/// on corrupt input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodingError {
    #[error("the input is truncated (expected at least {expected} bytes, got {got})")]
    Truncated { expected: usize, got: usize },

    #[error("bad magic bytes {}", hex::encode(.0))]
    BadMagic([u8; 4]),

    #[error("unsupported format version {0}")]
    UnsupportedVersion(u16),

    #[error("unknown curve id {0}")]
    UnknownCurve(u8),

    #[error("the artifact is for curve {got:?}, expected {expected:?}")]
    WrongCurve { expected: CurveId, got: CurveId },

    #[error("unknown proving system id {0}")]
    UnknownSystem(u8),

    #[error("unknown artifact kind {0}")]
    UnknownKind(u8),

    #[error("the artifact is a {got:?}, expected a {expected:?}")]
    WrongKind {
        expected: ArtifactKind,
        got: ArtifactKind,
    },

    #[error("the artifact is for {got:?}, expected {expected:?}")]
    WrongSystem {
        expected: ProvingSystem,
        got: ProvingSystem,
    },

    #[error("reserved header bytes are not zero")]
    ReservedBytes,

    #[error("the header declares {declared} payload bytes but {actual} follow")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("{0} trailing bytes after the payload")]
    TrailingBytes(usize),

    #[error("failed to decode the payload: {0}")]
    Payload(String),

    #[error("the decoded constraint system is malformed")]
    MalformedConstraintSystem,

    #[error("the decoded proving key is malformed")]
    MalformedProvingKey,

    #[error("invalid public inputs: {0}")]
    PublicInputs(#[from] FieldHelpersError),
}

/// Any error of the engine
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Compilation(#[from] CompilationError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Prover(#[from] ProverError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Decoding(#[from] DecodingError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
