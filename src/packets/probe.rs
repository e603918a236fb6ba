use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Event raised by a probe (packet `0xA5`).
///
/// Layout: `[A5, probe, message]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeEvent {
    pub probe: u8,
    pub message: ProbeMessage,
}

/// Messages a probe can report. Unassigned values are carried through raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeMessage {
    Acknowledge,
    Alarm,
    Disconnected,
    Other(u8),
}

impl ProbeMessage {
    pub fn from_byte(value: u8) -> Self {
        match value {
            0 => Self::Acknowledge,
            5 => Self::Alarm,
            6 => Self::Disconnected,
            other => Self::Other(other),
        }
    }
}

impl ProbeEvent {
    pub const TYPE: u8 = 0xA5;

    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        if payload.len() < 3 {
            return Err(DecodeError::PacketTooShort);
        }
        if payload[0] != Self::TYPE {
            return Err(DecodeError::UnexpectedType(payload[0]));
        }

        Ok(Self {
            probe: payload[1],
            message: ProbeMessage::from_byte(payload[2]),
        })
    }
}
