use std::fmt;

use crate::eval::evaluator::FrameDescription;
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::foundation::math::Fnv1a64;

/// 128-bit digest of a frame description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// First 64-bit FNV-1a stream.
    pub hi: u64,
    /// Second, differently seeded stream.
    pub lo: u64,
}

impl fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Hash the canonical JSON encoding of `desc`.
///
/// Field order is fixed by the type definitions, so equal descriptions always
/// produce equal fingerprints.
pub fn fingerprint_frame(desc: &FrameDescription) -> FramecastResult<FrameFingerprint> {
    let bytes = serde_json::to_vec(desc)
        .map_err(|e| FramecastError::serde(format!("encode frame {}: {e}", desc.frame.0)))?;
    let mut a = Fnv1a64::new_default();
    let mut b = Fnv1a64::new(0x9ae1_6a3b_2f90_404f);
    a.write_bytes(&bytes);
    b.write_u64(bytes.len() as u64);
    b.write_bytes(&bytes);
    Ok(FrameFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
