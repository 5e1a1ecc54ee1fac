//! Groth16 zk-SNARKs over rank-1 constraint systems, following
//! [On the Size of Pairing-based Non-interactive Arguments](https://eprint.iacr.org/2016/260).
//!
//! The setup is circuit specific: each [R1CS](snark_circuits::R1CS) gets its
//! own [ProvingKey] and [VerifyingKey], and the proving key records the digest
//! of the constraint system it was generated for.

pub mod error;
pub mod proof;
pub mod prover;
pub mod proving_key;
pub mod setup;
pub mod verification_key;
pub mod verifier;

pub use error::{ProverError, SetupError};
pub use proof::Proof;
pub use prover::prove;
pub use proving_key::ProvingKey;
pub use setup::setup;
pub use verification_key::VerifyingKey;
pub use verifier::verify;
