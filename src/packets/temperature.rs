use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Per-probe temperature report (packet `0xA1`).
///
/// Layout: `[A1, reading u16 BE, ..]`, one word per probe slot. `0xFFFF`
/// means the slot is empty; values above `0x8000` carry an offset (the device
/// uses them for its second measurement range), everything is decicelsius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeTemperatures {
    /// One entry per probe slot; `None` when no probe is attached.
    pub temperatures: Vec<Option<f32>>,
}

impl ProbeTemperatures {
    pub const TYPE: u8 = 0xA1;

    const NO_PROBE: u16 = 0xFFFF;
    const OFFSET_FLAG: u16 = 0x8000;

    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        let Some(&packet_type) = payload.first() else {
            return Err(DecodeError::PacketTooShort);
        };
        if packet_type != Self::TYPE {
            return Err(DecodeError::UnexpectedType(packet_type));
        }

        let temperatures = payload[1..]
            .chunks(2)
            .map(|word| {
                let raw = match *word {
                    [hi, lo] => u16::from_be_bytes([hi, lo]),
                    [byte] => u16::from(byte),
                    _ => unreachable!("chunks(2) yields one or two bytes"),
                };
                Self::convert(raw)
            })
            .collect();

        Ok(Self { temperatures })
    }

    fn convert(raw: u16) -> Option<f32> {
        match raw {
            Self::NO_PROBE => None,
            value if value > Self::OFFSET_FLAG => Some(f32::from(value - Self::OFFSET_FLAG) / 10.0),
            value => Some(f32::from(value) / 10.0),
        }
    }

    /// Payload asking the device to report probe temperatures.
    pub fn request() -> Vec<u8> {
        vec![Self::TYPE, 0x00]
    }
}
