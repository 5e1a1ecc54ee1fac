//! Compilation and key generation for either proving system.

use crate::{
    error::SetupError,
    system::{Groth16, Plonk, ProofSystem, ProvingSystem},
    types::{ConstraintSystem, ProvingKey, VerifyingKey},
};
use ark_ec::pairing::Pairing;
use rand_core::{CryptoRng, RngCore};
use snark_circuits::Circuit;
use snark_poly_commitment::PairingSRS;

/// Compiles `circuit` for `system`.
pub fn compile<E: Pairing>(
    circuit: &Circuit<E::ScalarField>,
    system: ProvingSystem,
) -> ConstraintSystem<E> {
    match system {
        ProvingSystem::Groth16 => {
            ConstraintSystem::Groth16(<Groth16 as ProofSystem<E>>::compile(circuit))
        }
        ProvingSystem::Plonk => ConstraintSystem::Plonk(<Plonk as ProofSystem<E>>::compile(circuit)),
    }
}

/// Generates the keys of `cs`. Groth16 runs a circuit specific trusted setup
/// with `rng`; PLONK preprocesses `cs` against `srs`, which it requires.
pub fn setup<E, R>(
    cs: &ConstraintSystem<E>,
    srs: Option<&PairingSRS<E>>,
    rng: &mut R,
) -> Result<(ProvingKey<E>, VerifyingKey<E>), SetupError>
where
    E: Pairing,
    R: RngCore + CryptoRng + ?Sized,
{
    let keys = match cs {
        ConstraintSystem::Groth16(r1cs) => {
            let (pk, vk) = <Groth16 as ProofSystem<E>>::setup(r1cs, srs, rng)?;
            (ProvingKey::Groth16(pk), VerifyingKey::Groth16(vk))
        }
        ConstraintSystem::Plonk(cs) => {
            let (pk, vk) = <Plonk as ProofSystem<E>>::setup(cs, srs, rng)?;
            (ProvingKey::Plonk(pk), VerifyingKey::Plonk(vk))
        }
    };
    log::info!(
        "{:?} keys generated for constraint system {}",
        cs.system(),
        hex::encode(cs.digest())
    );
    Ok(keys)
}
