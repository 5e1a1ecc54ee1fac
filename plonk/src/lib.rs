//! PLONK over fan-in-two arithmetic gates with KZG polynomial commitments,
//! following [PLONK](https://eprint.iacr.org/2019/953).
//!
//! Unlike Groth16, the setup is universal: one [PairingSRS](snark_poly_commitment::PairingSRS)
//! serves every circuit that fits it, and [ProverIndex::create] only
//! preprocesses a circuit against it. Challenges are derived with a Blake2b
//! [transcript](transcript::Transcript).

pub mod error;
pub mod linearization;
pub mod permutation;
pub mod proof;
pub mod prover;
pub mod prover_index;
pub mod transcript;
pub mod verifier;
pub mod verifier_index;

pub use error::{ProverError, SetupError};
pub use proof::{ProofEvaluations, ProverCommitments, ProverProof};
pub use prover::prove;
pub use prover_index::ProverIndex;
pub use verifier::verify;
pub use verifier_index::VerifierIndex;
