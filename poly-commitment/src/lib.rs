//! KZG polynomial commitments.
//!
//! The structured reference string lives in [srs] and the opening proofs in
//! [kzg]. Polynomials are given in coefficient form.

pub mod error;
pub mod kzg;
pub mod srs;

pub use error::CommitmentError;
pub use kzg::KZGProof;
pub use srs::{PairingSRS, VerifierSRS};
