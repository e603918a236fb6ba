//! Characteristic-level framing for the ToGrill GATT transport.
//!
//! Every value written to the write characteristic, and every value pushed on
//! the notify characteristic, is a frame of the form
//! `[0x55, 0xAA, payload length as u16 big-endian, payload.., checksum]`,
//! where the checksum is the XOR of every preceding byte of the frame.

use crate::error::DecodeError;

const MAGIC: [u8; 2] = [0x55, 0xAA];

/// Bytes a frame adds around its payload: magic, length word, checksum.
const OVERHEAD: usize = 5;

fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, byte| acc ^ byte)
}

/// Wrap a packet payload for the write characteristic.
pub fn encode(payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + OVERHEAD);
    frame.extend_from_slice(&MAGIC);
    frame.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    frame.extend_from_slice(payload);
    frame.push(checksum(&frame));
    frame
}

/// Unwrap a frame received on the notify characteristic, returning its payload.
pub fn decode(frame: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if frame.len() < OVERHEAD {
        return Err(DecodeError::FrameTooShort(frame.len()));
    }
    if frame[..2] != MAGIC {
        return Err(DecodeError::BadMagic);
    }

    let declared = usize::from(u16::from_be_bytes([frame[2], frame[3]]));
    let actual = frame.len() - OVERHEAD;
    if declared != actual {
        return Err(DecodeError::LengthMismatch { declared, actual });
    }

    let (body, tail) = frame.split_at(frame.len() - 1);
    let computed = checksum(body);
    if computed != tail[0] {
        return Err(DecodeError::ChecksumMismatch {
            computed,
            actual: tail[0],
        });
    }

    Ok(body[4..].to_vec())
}
