//! Sum types over the proving systems, as exchanged through the engine API
//! and persisted as artifacts.

use crate::system::ProvingSystem;
use ark_ec::pairing::Pairing;
use snark_circuits::{PlonkConstraintSystem, R1CS};
use snark_plonk::{ProverIndex, ProverProof, VerifierIndex};

/// A compiled circuit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintSystem<E: Pairing> {
    Groth16(R1CS<E::ScalarField>),
    Plonk(PlonkConstraintSystem<E::ScalarField>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvingKey<E: Pairing> {
    Groth16(snark_groth16::ProvingKey<E>),
    Plonk(ProverIndex<E>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyingKey<E: Pairing> {
    Groth16(snark_groth16::VerifyingKey<E>),
    Plonk(VerifierIndex<E>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proof<E: Pairing> {
    Groth16(snark_groth16::Proof<E>),
    Plonk(ProverProof<E>),
}

macro_rules! impl_system {
    ($($ty:ident),*) => {
        $(
            impl<E: Pairing> $ty<E> {
                /// The proving system this value belongs to.
                pub fn system(&self) -> ProvingSystem {
                    match self {
                        $ty::Groth16(_) => ProvingSystem::Groth16,
                        $ty::Plonk(_) => ProvingSystem::Plonk,
                    }
                }
            }
        )*
    };
}

impl_system!(ConstraintSystem, ProvingKey, VerifyingKey, Proof);

impl<E: Pairing> ConstraintSystem<E> {
    pub fn digest(&self) -> snark_circuits::Digest {
        match self {
            ConstraintSystem::Groth16(r1cs) => r1cs.digest(),
            ConstraintSystem::Plonk(cs) => cs.digest(),
        }
    }

    pub fn num_public(&self) -> usize {
        match self {
            ConstraintSystem::Groth16(r1cs) => r1cs.num_public,
            ConstraintSystem::Plonk(cs) => cs.num_public,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        match self {
            ConstraintSystem::Groth16(r1cs) => r1cs.is_well_formed(),
            ConstraintSystem::Plonk(cs) => cs.is_well_formed(),
        }
    }
}

impl<E: Pairing> ProvingKey<E> {
    pub fn is_consistent(&self) -> bool {
        match self {
            ProvingKey::Groth16(pk) => pk.is_consistent(),
            ProvingKey::Plonk(index) => index.is_consistent(),
        }
    }

    /// The verifying key matching this proving key.
    pub fn verifying_key(&self) -> VerifyingKey<E> {
        match self {
            ProvingKey::Groth16(pk) => VerifyingKey::Groth16(pk.vk.clone()),
            ProvingKey::Plonk(index) => VerifyingKey::Plonk(index.verifier_index()),
        }
    }
}

/// The outcome of a verification. Rejecting a proof is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationResult {
    Accepted,
    Rejected,
}

impl VerificationResult {
    pub fn is_accepted(&self) -> bool {
        *self == VerificationResult::Accepted
    }
}

impl From<bool> for VerificationResult {
    fn from(accepted: bool) -> Self {
        if accepted {
            VerificationResult::Accepted
        } else {
            VerificationResult::Rejected
        }
    }
}
