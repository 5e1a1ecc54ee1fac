//! The artifact format: a fixed 16-byte header followed by a MessagePack
//! payload.
//!
//! ```text
//! offset  size  field
//! 0       4     magic "ZKEA"
//! 4       2     format version (big endian)
//! 6       1     curve id
//! 7       1     proving system id
//! 8       1     artifact kind
//! 9       3     reserved, zero
//! 12      4     payload length (big endian)
//! ```
//!
//! The payload is the encoding of the proving system's own type, with
//! arkworks values in their compressed canonical form. Decoding only accepts
//! the canonical encoding of a value: re-encoding a decoded payload must give
//! back the same bytes.

use crate::{
    curve::{CurveId, EngineCurve},
    error::{DecodingError, EncodingError, Error},
    system::ProvingSystem,
    types::{ConstraintSystem, Proof, ProvingKey, VerifyingKey},
};
use serde::{de::DeserializeOwned, Serialize};
use snark_poly_commitment::PairingSRS;
use std::{io::Write, path::Path};
use tempfile::NamedTempFile;

pub const MAGIC: [u8; 4] = *b"ZKEA";
pub const FORMAT_VERSION: u16 = 1;
pub const HEADER_LEN: usize = 16;

/// What an artifact holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ArtifactKind {
    ConstraintSystem = 1,
    ProvingKey = 2,
    VerifyingKey = 3,
    Proof = 4,
    Srs = 5,
}

impl ArtifactKind {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(ArtifactKind::ConstraintSystem),
            2 => Some(ArtifactKind::ProvingKey),
            3 => Some(ArtifactKind::VerifyingKey),
            4 => Some(ArtifactKind::Proof),
            5 => Some(ArtifactKind::Srs),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: u16,
    pub curve: CurveId,
    pub system: ProvingSystem,
    pub kind: ArtifactKind,
    pub payload_len: u32,
}

impl Header {
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..4].copy_from_slice(&MAGIC);
        out[4..6].copy_from_slice(&self.version.to_be_bytes());
        out[6] = self.curve as u8;
        out[7] = self.system as u8;
        out[8] = self.kind as u8;
        out[12..16].copy_from_slice(&self.payload_len.to_be_bytes());
        out
    }

    /// Parses the header at the start of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodingError> {
        if bytes.len() < HEADER_LEN {
            return Err(DecodingError::Truncated {
                expected: HEADER_LEN,
                got: bytes.len(),
            });
        }
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&bytes[0..4]);
        if magic != MAGIC {
            return Err(DecodingError::BadMagic(magic));
        }
        let version = u16::from_be_bytes([bytes[4], bytes[5]]);
        if version != FORMAT_VERSION {
            return Err(DecodingError::UnsupportedVersion(version));
        }
        let curve = CurveId::from_u8(bytes[6]).ok_or(DecodingError::UnknownCurve(bytes[6]))?;
        let system =
            ProvingSystem::from_u8(bytes[7]).ok_or(DecodingError::UnknownSystem(bytes[7]))?;
        let kind = ArtifactKind::from_u8(bytes[8]).ok_or(DecodingError::UnknownKind(bytes[8]))?;
        if bytes[9..12] != [0u8; 3] {
            return Err(DecodingError::ReservedBytes);
        }
        let payload_len = u32::from_be_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);
        Ok(Header {
            version,
            curve,
            system,
            kind,
            payload_len,
        })
    }
}

fn encode_payload<T: Serialize>(value: &T) -> Result<Vec<u8>, EncodingError> {
    rmp_serde::to_vec(value).map_err(|e| EncodingError::Payload(e.to_string()))
}

fn decode_payload<T: Serialize + DeserializeOwned>(payload: &[u8]) -> Result<T, DecodingError> {
    let value: T =
        rmp_serde::from_slice(payload).map_err(|e| DecodingError::Payload(e.to_string()))?;
    let canonical =
        rmp_serde::to_vec(&value).map_err(|e| DecodingError::Payload(e.to_string()))?;
    if canonical.len() < payload.len() && payload.starts_with(&canonical) {
        return Err(DecodingError::TrailingBytes(payload.len() - canonical.len()));
    }
    if canonical != payload {
        return Err(DecodingError::Payload("non-canonical encoding".into()));
    }
    Ok(value)
}

fn expect_system(expected: ProvingSystem, got: ProvingSystem) -> Result<(), DecodingError> {
    if expected != got {
        return Err(DecodingError::WrongSystem { expected, got });
    }
    Ok(())
}

/// A value that can be persisted in the artifact format.
pub trait Artifact: Sized {
    const KIND: ArtifactKind;

    fn curve() -> CurveId;

    fn system(&self) -> ProvingSystem;

    fn payload(&self) -> Result<Vec<u8>, EncodingError>;

    fn from_payload(system: ProvingSystem, payload: &[u8]) -> Result<Self, DecodingError>;

    fn to_bytes(&self) -> Result<Vec<u8>, EncodingError> {
        let payload = self.payload()?;
        let payload_len = u32::try_from(payload.len())
            .map_err(|_| EncodingError::PayloadTooLarge(payload.len()))?;
        let header = Header {
            version: FORMAT_VERSION,
            curve: Self::curve(),
            system: self.system(),
            kind: Self::KIND,
            payload_len,
        };
        let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
        out.extend_from_slice(&header.to_bytes());
        out.extend_from_slice(&payload);
        Ok(out)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, DecodingError> {
        let header = Header::from_bytes(bytes)?;
        if header.curve != Self::curve() {
            return Err(DecodingError::WrongCurve {
                expected: Self::curve(),
                got: header.curve,
            });
        }
        if header.kind != Self::KIND {
            return Err(DecodingError::WrongKind {
                expected: Self::KIND,
                got: header.kind,
            });
        }
        let payload = &bytes[HEADER_LEN..];
        let declared = header.payload_len as usize;
        if payload.len() < declared {
            return Err(DecodingError::LengthMismatch {
                declared,
                actual: payload.len(),
            });
        }
        if payload.len() > declared {
            return Err(DecodingError::TrailingBytes(payload.len() - declared));
        }
        Self::from_payload(header.system, payload)
    }

    /// Writes the artifact atomically: the bytes go to a temporary file in
    /// the same directory, which is synced and then renamed over `path`.
    fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(&bytes)?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| e.error)?;
        log::debug!(
            "wrote {:?} artifact of {} bytes to {}",
            Self::KIND,
            bytes.len(),
            path.display()
        );
        Ok(())
    }

    fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(&bytes)?)
    }
}

impl<E: EngineCurve> Artifact for ConstraintSystem<E> {
    const KIND: ArtifactKind = ArtifactKind::ConstraintSystem;

    fn curve() -> CurveId {
        E::CURVE_ID
    }

    fn system(&self) -> ProvingSystem {
        ConstraintSystem::system(self)
    }

    fn payload(&self) -> Result<Vec<u8>, EncodingError> {
        match self {
            ConstraintSystem::Groth16(r1cs) => encode_payload(r1cs),
            ConstraintSystem::Plonk(cs) => encode_payload(cs),
        }
    }

    /// Decoded constraint systems are checked for well-formedness, since
    /// setups and provers index into them.
    fn from_payload(system: ProvingSystem, payload: &[u8]) -> Result<Self, DecodingError> {
        let cs = match system {
            ProvingSystem::Groth16 => ConstraintSystem::Groth16(decode_payload(payload)?),
            ProvingSystem::Plonk => ConstraintSystem::Plonk(decode_payload(payload)?),
        };
        if !cs.is_well_formed() {
            return Err(DecodingError::MalformedConstraintSystem);
        }
        Ok(cs)
    }
}

impl<E: EngineCurve> Artifact for ProvingKey<E> {
    const KIND: ArtifactKind = ArtifactKind::ProvingKey;

    fn curve() -> CurveId {
        E::CURVE_ID
    }

    fn system(&self) -> ProvingSystem {
        ProvingKey::system(self)
    }

    fn payload(&self) -> Result<Vec<u8>, EncodingError> {
        match self {
            ProvingKey::Groth16(pk) => encode_payload(pk),
            ProvingKey::Plonk(index) => encode_payload(index),
        }
    }

    /// Decoded keys are checked against their own domain, since the
    /// provers size their FFTs and MSMs from them.
    fn from_payload(system: ProvingSystem, payload: &[u8]) -> Result<Self, DecodingError> {
        let pk = match system {
            ProvingSystem::Groth16 => ProvingKey::Groth16(decode_payload(payload)?),
            ProvingSystem::Plonk => ProvingKey::Plonk(decode_payload(payload)?),
        };
        if !pk.is_consistent() {
            return Err(DecodingError::MalformedProvingKey);
        }
        Ok(pk)
    }
}

impl<E: EngineCurve> Artifact for VerifyingKey<E> {
    const KIND: ArtifactKind = ArtifactKind::VerifyingKey;

    fn curve() -> CurveId {
        E::CURVE_ID
    }

    fn system(&self) -> ProvingSystem {
        VerifyingKey::system(self)
    }

    fn payload(&self) -> Result<Vec<u8>, EncodingError> {
        match self {
            VerifyingKey::Groth16(vk) => encode_payload(vk),
            VerifyingKey::Plonk(index) => encode_payload(index),
        }
    }

    fn from_payload(system: ProvingSystem, payload: &[u8]) -> Result<Self, DecodingError> {
        Ok(match system {
            ProvingSystem::Groth16 => VerifyingKey::Groth16(decode_payload(payload)?),
            ProvingSystem::Plonk => VerifyingKey::Plonk(decode_payload(payload)?),
        })
    }
}

impl<E: EngineCurve> Artifact for Proof<E> {
    const KIND: ArtifactKind = ArtifactKind::Proof;

    fn curve() -> CurveId {
        E::CURVE_ID
    }

    fn system(&self) -> ProvingSystem {
        Proof::system(self)
    }

    fn payload(&self) -> Result<Vec<u8>, EncodingError> {
        match self {
            Proof::Groth16(proof) => encode_payload(proof),
            Proof::Plonk(proof) => encode_payload(proof),
        }
    }

    fn from_payload(system: ProvingSystem, payload: &[u8]) -> Result<Self, DecodingError> {
        Ok(match system {
            ProvingSystem::Groth16 => Proof::Groth16(decode_payload(payload)?),
            ProvingSystem::Plonk => Proof::Plonk(decode_payload(payload)?),
        })
    }
}

/// The SRS is only used by PLONK, and is tagged as such.
impl<E: EngineCurve> Artifact for PairingSRS<E> {
    const KIND: ArtifactKind = ArtifactKind::Srs;

    fn curve() -> CurveId {
        E::CURVE_ID
    }

    fn system(&self) -> ProvingSystem {
        ProvingSystem::Plonk
    }

    fn payload(&self) -> Result<Vec<u8>, EncodingError> {
        encode_payload(self)
    }

    fn from_payload(system: ProvingSystem, payload: &[u8]) -> Result<Self, DecodingError> {
        expect_system(ProvingSystem::Plonk, system)?;
        decode_payload(payload)
    }
}
