//! A proving engine over pairing-friendly curves: circuits built with
//! [snark_circuits] are compiled to R1CS for Groth16 or to PLONK gates, and
//! every value crossing a process boundary (constraint systems, keys, proofs,
//! the PLONK SRS) is persisted in a versioned [artifact] format.
//!
//! ```text
//! circuit -> compile -> setup -> prove -> verify
//! ```

pub mod artifact;
pub mod curve;
pub mod error;
pub mod prover;
pub mod setup;
pub mod system;
pub mod types;
pub mod verifier;

pub use artifact::{Artifact, ArtifactKind, Header};
pub use curve::{CurveId, EngineCurve};
pub use error::{DecodingError, EncodingError, Error, ProverError, SetupError};
pub use prover::prove;
pub use setup::{compile, setup};
pub use system::{Groth16, Plonk, ProofSystem, ProvingSystem};
pub use types::{ConstraintSystem, Proof, ProvingKey, VerificationResult, VerifyingKey};
pub use verifier::{verify, verify_bytes};
