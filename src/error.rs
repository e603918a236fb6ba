use thiserror::Error;

/// Errors raised while unwrapping frames or decoding packet payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("frame too short: {0} bytes")]
    FrameTooShort(usize),

    #[error("frame does not start with the 55 AA magic")]
    BadMagic,

    #[error("frame length mismatch: header declares {declared} payload bytes, frame carries {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("frame checksum mismatch: computed {computed:#04x}, frame carries {actual:#04x}")]
    ChecksumMismatch { computed: u8, actual: u8 },

    #[error("packet too short")]
    PacketTooShort,

    #[error("unexpected packet type {0:#04x}")]
    UnexpectedType(u8),

    #[error("invalid packet subtype {0:#04x}")]
    InvalidSubtype(u8),
}
