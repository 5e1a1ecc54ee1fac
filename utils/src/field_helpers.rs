//! Conversions between field elements and bytes, and field sampling.

use ark_ff::{BigInteger, Field, PrimeField, Zero};
use ark_serialize::CanonicalSerialize;
use rand_core::RngCore;
use thiserror::Error;

/// Size in bytes of an encoded public input, as exchanged with external
/// verifiers (big-endian, one field element per chunk).
pub const PUBLIC_INPUT_BYTES: usize = 32;

// Field helpers error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldHelpersError {
    #[error("field element is not reduced modulo the field characteristic")]
    NotCanonical,
    #[error("public input buffer length {0} is not a multiple of {PUBLIC_INPUT_BYTES}")]
    PublicInputLength(usize),
}
pub type Result<T> = std::result::Result<T, FieldHelpersError>;

/// Field element helpers
pub trait FieldHelpers<F> {
    /// Deserialize a big-endian integer, rejecting values that are not
    /// smaller than the modulus
    fn from_be_bytes_canonical(bytes: &[u8]) -> Result<F>
    where
        F: PrimeField;

    /// Serialize to bytes
    fn to_bytes(&self) -> Vec<u8>;

    /// Field size in bytes
    fn size_in_bytes() -> usize
    where
        F: PrimeField,
    {
        (F::MODULUS_BIT_SIZE as usize).div_ceil(8)
    }
}

impl<F: Field> FieldHelpers<F> for F {
    fn from_be_bytes_canonical(bytes: &[u8]) -> Result<F>
    where
        F: PrimeField,
    {
        let value = F::from_be_bytes_mod_order(bytes);
        // reduction happened iff the re-encoding differs from the input
        let encoded = value.into_bigint().to_bytes_be();
        let width = bytes.len().max(encoded.len());
        let pad = |b: &[u8]| {
            let mut padded = vec![0u8; width - b.len()];
            padded.extend_from_slice(b);
            padded
        };
        if pad(bytes) != pad(&encoded) {
            return Err(FieldHelpersError::NotCanonical);
        }
        Ok(value)
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = Vec::with_capacity(self.compressed_size());
        self.serialize_compressed(&mut bytes)
            .expect("serializing into a vector cannot fail");
        bytes
    }
}

/// Parses public inputs given as a concatenation of 32-byte big-endian field
/// elements, the layout used by on-chain and wasm verifiers.
pub fn public_inputs_from_be_bytes<F: PrimeField>(bytes: &[u8]) -> Result<Vec<F>> {
    if bytes.len() % PUBLIC_INPUT_BYTES != 0 {
        return Err(FieldHelpersError::PublicInputLength(bytes.len()));
    }
    bytes
        .chunks_exact(PUBLIC_INPUT_BYTES)
        .map(F::from_be_bytes_canonical)
        .collect()
}

/// Encodes public inputs as 32-byte big-endian chunks, the inverse of
/// [public_inputs_from_be_bytes].
pub fn public_inputs_to_be_bytes<F: PrimeField>(inputs: &[F]) -> Vec<u8> {
    let mut out = Vec::with_capacity(inputs.len() * PUBLIC_INPUT_BYTES);
    for input in inputs {
        let be = input.into_bigint().to_bytes_be();
        let start = be.len().saturating_sub(PUBLIC_INPUT_BYTES);
        out.extend(std::iter::repeat(0u8).take(PUBLIC_INPUT_BYTES - (be.len() - start)));
        out.extend_from_slice(&be[start..]);
    }
    out
}

/// Samples a field element with a negligible bias, reporting RNG failures
/// instead of panicking.
pub fn sample_field<F: PrimeField, R: RngCore + ?Sized>(
    rng: &mut R,
) -> std::result::Result<F, rand_core::Error> {
    // twice the modulus size makes the bias of the reduction negligible
    let mut bytes = vec![0u8; 2 * <F as FieldHelpers<F>>::size_in_bytes()];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(F::from_le_bytes_mod_order(&bytes))
}

/// Samples a non-zero field element, as needed for toxic waste.
pub fn sample_nonzero_field<F: PrimeField, R: RngCore + ?Sized>(
    rng: &mut R,
) -> std::result::Result<F, rand_core::Error> {
    loop {
        let value: F = sample_field(rng)?;
        if !value.is_zero() {
            return Ok(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_ff::One;

    #[test]
    fn test_to_bytes_is_little_endian() {
        let bytes = Fr::from(0x0102u64).to_bytes();
        assert_eq!(bytes.len(), 32);
        assert_eq!(&bytes[..3], &[2, 1, 0]);
    }

    #[test]
    fn test_size_in_bytes() {
        assert_eq!(<Fr as FieldHelpers<Fr>>::size_in_bytes(), 32);
    }

    #[test]
    fn test_be_bytes_canonical() {
        let mut bytes = [0u8; 32];
        bytes[31] = 35;
        assert_eq!(Fr::from_be_bytes_canonical(&bytes), Ok(Fr::from(35u64)));

        assert_eq!(
            Fr::from_be_bytes_canonical(&[0xff; 32]),
            Err(FieldHelpersError::NotCanonical)
        );
    }

    #[test]
    fn test_public_inputs_bytes() {
        let inputs = vec![Fr::zero(), Fr::one(), -Fr::one(), Fr::from(35u64)];
        let bytes = public_inputs_to_be_bytes(&inputs);
        assert_eq!(bytes.len(), 4 * PUBLIC_INPUT_BYTES);
        assert_eq!(bytes[2 * PUBLIC_INPUT_BYTES - 1], 1);
        assert_eq!(public_inputs_from_be_bytes::<Fr>(&bytes), Ok(inputs));

        assert_eq!(
            public_inputs_from_be_bytes::<Fr>(&bytes[1..]),
            Err(FieldHelpersError::PublicInputLength(4 * PUBLIC_INPUT_BYTES - 1))
        );
    }

    #[test]
    fn test_sample_nonzero_field() {
        let mut rng = crate::tests::make_test_rng(None);
        for _ in 0..16 {
            let x: Fr = sample_nonzero_field(&mut rng).unwrap();
            assert!(!x.is_zero());
        }
    }
}
