use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::packets::{decicelsius, WritePacket};

/// Set the low/high alarm temperatures for a probe (packet `0xA3`, subtype
/// `0x00`).
///
/// Layout: `[A3, probe, 00, min u16 BE, max u16 BE]`, temperatures in
/// decicelsius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlarmRange {
    pub probe: u8,
    pub minimum: f32,
    pub maximum: f32,
}

impl AlarmRange {
    pub const TYPE: u8 = 0xA3;
    pub const SUBTYPE: u8 = 0x00;

    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        if payload.len() < 7 {
            return Err(DecodeError::PacketTooShort);
        }
        if payload[2] != Self::SUBTYPE {
            return Err(DecodeError::InvalidSubtype(payload[2]));
        }
        Ok(Self {
            probe: payload[1],
            minimum: f32::from(u16::from_be_bytes([payload[3], payload[4]])) / 10.0,
            maximum: f32::from(u16::from_be_bytes([payload[5], payload[6]])) / 10.0,
        })
    }
}

impl WritePacket for AlarmRange {
    fn encode(&self) -> Vec<u8> {
        let mut payload = vec![Self::TYPE, self.probe, Self::SUBTYPE];
        payload.extend_from_slice(&decicelsius(self.minimum).to_be_bytes());
        payload.extend_from_slice(&decicelsius(self.maximum).to_be_bytes());
        payload
    }
}

/// Set the target temperature for a probe (packet `0xA3`, subtype `0x01`).
///
/// Layout: `[A3, probe, 01, target u16 BE, 00, 00]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetTemperature {
    pub probe: u8,
    pub target: f32,
}

impl TargetTemperature {
    pub const TYPE: u8 = 0xA3;
    pub const SUBTYPE: u8 = 0x01;

    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        if payload.len() < 7 {
            return Err(DecodeError::PacketTooShort);
        }
        if payload[2] != Self::SUBTYPE {
            return Err(DecodeError::InvalidSubtype(payload[2]));
        }
        Ok(Self {
            probe: payload[1],
            target: f32::from(u16::from_be_bytes([payload[3], payload[4]])) / 10.0,
        })
    }
}

impl WritePacket for TargetTemperature {
    fn encode(&self) -> Vec<u8> {
        let mut payload = vec![Self::TYPE, self.probe, Self::SUBTYPE];
        payload.extend_from_slice(&decicelsius(self.target).to_be_bytes());
        payload.extend_from_slice(&[0x00, 0x00]);
        payload
    }
}

/// Select the grill preset for a probe (packet `0xA3`, subtype `0x03`).
///
/// Layout: `[A3, probe, 03, 00, grill_type, 00, 00]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrillType {
    pub probe: u8,
    pub grill_type: u8,
}

impl GrillType {
    pub const TYPE: u8 = 0xA3;
    pub const SUBTYPE: u8 = 0x03;

    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        if payload.len() < 7 {
            return Err(DecodeError::PacketTooShort);
        }
        if payload[2] != Self::SUBTYPE {
            return Err(DecodeError::InvalidSubtype(payload[2]));
        }
        Ok(Self {
            probe: payload[1],
            grill_type: payload[4],
        })
    }
}

impl WritePacket for GrillType {
    fn encode(&self) -> Vec<u8> {
        vec![
            Self::TYPE,
            self.probe,
            Self::SUBTYPE,
            0x00,
            self.grill_type,
            0x00,
            0x00,
        ]
    }
}
