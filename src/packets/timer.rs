use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::packets::WritePacket;

/// Timer acknowledgement pushed by the device (packet `0xA7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerAck {
    pub data: u8,
}

impl TimerAck {
    pub const TYPE: u8 = 0xA7;

    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        if payload.len() < 2 {
            return Err(DecodeError::PacketTooShort);
        }
        Ok(Self { data: payload[1] })
    }
}

/// Start or update the countdown timer on a probe (packet `0xA7`).
///
/// Layout: `[A7, probe, flags, seconds u16 BE]`. The flags byte is always 1
/// in captures from the vendor app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTimer {
    pub probe: u8,
    pub duration: Duration,
    pub flags: u8,
}

impl SetTimer {
    pub const TYPE: u8 = 0xA7;

    pub fn new(probe: u8, duration: Duration) -> Self {
        Self {
            probe,
            duration,
            flags: 1,
        }
    }

    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        if payload.len() < 5 {
            return Err(DecodeError::PacketTooShort);
        }
        let seconds = u16::from_be_bytes([payload[3], payload[4]]);
        Ok(Self {
            probe: payload[1],
            flags: payload[2],
            duration: Duration::from_secs(u64::from(seconds)),
        })
    }
}

impl WritePacket for SetTimer {
    fn encode(&self) -> Vec<u8> {
        // The wire field is a u16 of whole seconds.
        let seconds = self.duration.as_secs_f64().round().min(f64::from(u16::MAX)) as u16;
        let mut payload = vec![Self::TYPE, self.probe, self.flags];
        payload.extend_from_slice(&seconds.to_be_bytes());
        payload
    }
}
