use crate::{
    artifact::Artifact,
    curve::EngineCurve,
    error::DecodingError,
    system::{Groth16, Plonk, ProofSystem},
    types::{Proof, VerificationResult, VerifyingKey},
};
use ark_ec::pairing::Pairing;
use snark_utils::field_helpers::public_inputs_from_be_bytes;

/// Verifies `proof` against `vk`. A key and a proof of different proving
/// systems are a rejection.
pub fn verify<E: Pairing>(
    vk: &VerifyingKey<E>,
    public_inputs: &[E::ScalarField],
    proof: &Proof<E>,
) -> VerificationResult {
    let accepted = match (vk, proof) {
        (VerifyingKey::Groth16(vk), Proof::Groth16(proof)) => {
            <Groth16 as ProofSystem<E>>::verify(vk, public_inputs, proof)
        }
        (VerifyingKey::Plonk(index), Proof::Plonk(proof)) => {
            <Plonk as ProofSystem<E>>::verify(index, public_inputs, proof)
        }
        _ => {
            log::debug!(
                "{:?} verifying key given a {:?} proof",
                vk.system(),
                proof.system()
            );
            false
        }
    };
    VerificationResult::from(accepted)
}

/// Verifies serialized inputs: a verifying key and a proof in the artifact
/// format, and public inputs as concatenated 32-byte big-endian field
/// elements.
///
/// Corrupt encodings are errors; a valid encoding of a bad proof is
/// [VerificationResult::Rejected].
pub fn verify_bytes<E: EngineCurve>(
    vk: &[u8],
    proof: &[u8],
    public_inputs: &[u8],
) -> Result<VerificationResult, DecodingError> {
    let vk = VerifyingKey::<E>::from_bytes(vk)?;
    let proof = Proof::<E>::from_bytes(proof)?;
    let public_inputs = public_inputs_from_be_bytes::<E::ScalarField>(public_inputs)?;
    Ok(verify(&vk, &public_inputs, &proof))
}
