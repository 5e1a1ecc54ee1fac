//! Curves the engine knows how to tag in artifact headers.

use ark_ec::pairing::Pairing;

/// Identifier of a pairing-friendly curve, as written in artifact headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CurveId {
    Bn254 = 1,
}

impl CurveId {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(CurveId::Bn254),
            _ => None,
        }
    }
}

/// A pairing the engine can prove over.
pub trait EngineCurve: Pairing {
    const CURVE_ID: CurveId;
}

impl EngineCurve for ark_bn254::Bn254 {
    const CURVE_ID: CurveId = CurveId::Bn254;
}
