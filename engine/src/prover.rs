use crate::{
    error::ProverError,
    system::{Groth16, Plonk, ProofSystem},
    types::{ConstraintSystem, Proof, ProvingKey},
};
use ark_ec::pairing::Pairing;
use rand_core::{CryptoRng, RngCore};
use snark_circuits::Witness;

/// Proves `witness` for `cs` with `pk`. Both must belong to the same proving
/// system.
pub fn prove<E, R>(
    pk: &ProvingKey<E>,
    cs: &ConstraintSystem<E>,
    witness: &Witness<E::ScalarField>,
    rng: &mut R,
) -> Result<Proof<E>, ProverError>
where
    E: Pairing,
    R: RngCore + CryptoRng + ?Sized,
{
    match (pk, cs) {
        (ProvingKey::Groth16(pk), ConstraintSystem::Groth16(r1cs)) => Ok(Proof::Groth16(
            <Groth16 as ProofSystem<E>>::prove(pk, r1cs, witness, rng)?,
        )),
        (ProvingKey::Plonk(index), ConstraintSystem::Plonk(cs)) => Ok(Proof::Plonk(
            <Plonk as ProofSystem<E>>::prove(index, cs, witness, rng)?,
        )),
        _ => Err(ProverError::SystemMismatch {
            key: pk.system(),
            constraint_system: cs.system(),
        }),
    }
}
