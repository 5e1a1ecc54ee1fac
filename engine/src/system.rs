//! The proving systems behind the engine, as a shared [ProofSystem] interface
//! implemented by the [Groth16] and [Plonk] marker types.

use crate::error::{ProverError, SetupError};
use ark_ec::pairing::Pairing;
use rand_core::{CryptoRng, RngCore};
use snark_circuits::{Circuit, PlonkConstraintSystem, Witness, R1CS};
use snark_plonk::{ProverIndex, ProverProof, VerifierIndex};
use snark_poly_commitment::PairingSRS;

/// Identifier of a proving system, as written in artifact headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ProvingSystem {
    Groth16 = 1,
    Plonk = 2,
}

impl ProvingSystem {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(ProvingSystem::Groth16),
            2 => Some(ProvingSystem::Plonk),
            _ => None,
        }
    }
}

/// The operations every proving system provides.
pub trait ProofSystem<E: Pairing> {
    const SYSTEM: ProvingSystem;

    type ConstraintSystem;
    type ProvingKey;
    type VerifyingKey;
    type Proof;

    fn compile(circuit: &Circuit<E::ScalarField>) -> Self::ConstraintSystem;

    /// Generates the keys. `srs` is ignored by systems with a circuit
    /// specific setup.
    fn setup<R: RngCore + CryptoRng + ?Sized>(
        cs: &Self::ConstraintSystem,
        srs: Option<&PairingSRS<E>>,
        rng: &mut R,
    ) -> Result<(Self::ProvingKey, Self::VerifyingKey), SetupError>;

    fn prove<R: RngCore + CryptoRng + ?Sized>(
        pk: &Self::ProvingKey,
        cs: &Self::ConstraintSystem,
        witness: &Witness<E::ScalarField>,
        rng: &mut R,
    ) -> Result<Self::Proof, ProverError>;

    fn verify(
        vk: &Self::VerifyingKey,
        public_inputs: &[E::ScalarField],
        proof: &Self::Proof,
    ) -> bool;
}

/// Groth16 over R1CS, with a circuit specific trusted setup
#[derive(Debug, Clone, Copy)]
pub struct Groth16;

/// PLONK with KZG commitments, with a universal SRS
#[derive(Debug, Clone, Copy)]
pub struct Plonk;

impl<E: Pairing> ProofSystem<E> for Groth16 {
    const SYSTEM: ProvingSystem = ProvingSystem::Groth16;

    type ConstraintSystem = R1CS<E::ScalarField>;
    type ProvingKey = snark_groth16::ProvingKey<E>;
    type VerifyingKey = snark_groth16::VerifyingKey<E>;
    type Proof = snark_groth16::Proof<E>;

    fn compile(circuit: &Circuit<E::ScalarField>) -> Self::ConstraintSystem {
        circuit.to_r1cs()
    }

    fn setup<R: RngCore + CryptoRng + ?Sized>(
        cs: &Self::ConstraintSystem,
        srs: Option<&PairingSRS<E>>,
        rng: &mut R,
    ) -> Result<(Self::ProvingKey, Self::VerifyingKey), SetupError> {
        if srs.is_some() {
            log::debug!("groth16 has a circuit specific setup, ignoring the SRS");
        }
        Ok(snark_groth16::setup(cs, rng)?)
    }

    fn prove<R: RngCore + CryptoRng + ?Sized>(
        pk: &Self::ProvingKey,
        cs: &Self::ConstraintSystem,
        witness: &Witness<E::ScalarField>,
        rng: &mut R,
    ) -> Result<Self::Proof, ProverError> {
        Ok(snark_groth16::prove(pk, cs, witness, rng)?)
    }

    fn verify(
        vk: &Self::VerifyingKey,
        public_inputs: &[E::ScalarField],
        proof: &Self::Proof,
    ) -> bool {
        snark_groth16::verify(vk, public_inputs, proof)
    }
}

impl<E: Pairing> ProofSystem<E> for Plonk {
    const SYSTEM: ProvingSystem = ProvingSystem::Plonk;

    type ConstraintSystem = PlonkConstraintSystem<E::ScalarField>;
    type ProvingKey = ProverIndex<E>;
    type VerifyingKey = VerifierIndex<E>;
    type Proof = ProverProof<E>;

    fn compile(circuit: &Circuit<E::ScalarField>) -> Self::ConstraintSystem {
        circuit.to_plonk()
    }

    fn setup<R: RngCore + CryptoRng + ?Sized>(
        cs: &Self::ConstraintSystem,
        srs: Option<&PairingSRS<E>>,
        _rng: &mut R,
    ) -> Result<(Self::ProvingKey, Self::VerifyingKey), SetupError> {
        let srs = srs.ok_or(SetupError::MissingSrs)?;
        let index = ProverIndex::create(cs, srs)?;
        let vk = index.verifier_index();
        Ok((index, vk))
    }

    fn prove<R: RngCore + CryptoRng + ?Sized>(
        pk: &Self::ProvingKey,
        cs: &Self::ConstraintSystem,
        witness: &Witness<E::ScalarField>,
        rng: &mut R,
    ) -> Result<Self::Proof, ProverError> {
        Ok(snark_plonk::prove(pk, cs, witness, rng)?)
    }

    fn verify(
        vk: &Self::VerifyingKey,
        public_inputs: &[E::ScalarField],
        proof: &Self::Proof,
    ) -> bool {
        snark_plonk::verify(vk, public_inputs, proof)
    }
}
