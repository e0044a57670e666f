use num_bigint::BigUint;

use super::errors::{CodecError, FrameError};

/// Leading byte of every frame. Keeps the integer's top byte non-zero so no
/// leading payload bytes are lost in the big-integer round trip.
pub const SENTINEL: u8 = 1;

/// Width of the big-endian payload length field.
pub const LENGTH_FIELD_BYTES: usize = 8;

/// Builds `SENTINEL ‖ u64_be(len) ‖ payload` and reads it as one integer.
pub fn frame(payload: &[u8]) -> BigUint {
    let mut framed = Vec::with_capacity(1 + LENGTH_FIELD_BYTES + payload.len());
    framed.push(SENTINEL);
    framed.extend_from_slice(&(payload.len() as u64).to_be_bytes());
    framed.extend_from_slice(payload);
    BigUint::from_bytes_be(&framed)
}

/// Recovers the payload from a framed integer.
///
/// # Errors
///
/// Returns [`CodecError::CorruptPayload`] if the sentinel is missing, the
/// length field is short, or the payload size disagrees with the length field.
pub fn unframe(value: &BigUint) -> Result<Vec<u8>, CodecError> {
    // zero serializes as [0], which fails the sentinel check below
    let bytes = value.to_bytes_be();

    let (&first, rest) = bytes
        .split_first()
        .ok_or(FrameError::MissingSentinel { found: 0 })?;
    if first != SENTINEL {
        return Err(FrameError::MissingSentinel { found: first }.into());
    }

    if rest.len() < LENGTH_FIELD_BYTES {
        return Err(FrameError::MissingLength {
            available: rest.len(),
        }
        .into());
    }

    let (length_field, payload) = rest.split_at(LENGTH_FIELD_BYTES);
    let mut length_bytes = [0u8; LENGTH_FIELD_BYTES];
    length_bytes.copy_from_slice(length_field);
    let declared = u64::from_be_bytes(length_bytes);

    if payload.len() as u64 != declared {
        return Err(FrameError::LengthMismatch {
            declared,
            actual: payload.len(),
        }
        .into());
    }

    tracing::trace!(payload_bytes = payload.len(), "frame validated");
    Ok(payload.to_vec())
}
