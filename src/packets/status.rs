use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Device status report (packet `0xA0`).
///
/// Layout: `[A0, battery, version_major, version_minor, <reserved>, bitfield,
/// (alarm_interval, alarm_sound)?]`. The bitfield packs the function type in
/// the low nibble, the probe count in bits 4-6, and the ambient flag in bit 7.
/// The two alarm bytes are absent on older firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceStatus {
    /// Battery charge in percent.
    pub battery: u8,
    pub version_major: u8,
    pub version_minor: u8,
    pub function_type: u8,
    /// Number of probe slots on the device.
    pub probe_count: u8,
    /// Whether the device has an ambient temperature sensor.
    pub ambient: bool,
    /// Minutes between repeated alarms.
    pub alarm_interval: u8,
    pub alarm_sound: bool,
}

impl DeviceStatus {
    pub const TYPE: u8 = 0xA0;

    /// Defaults used when the device omits the trailing alarm bytes.
    const DEFAULT_ALARM_INTERVAL: u8 = 5;

    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        if payload.len() < 6 {
            return Err(DecodeError::PacketTooShort);
        }
        if payload[0] != Self::TYPE {
            return Err(DecodeError::UnexpectedType(payload[0]));
        }

        let bitfield = payload[5];
        let (alarm_interval, alarm_sound) = match payload.get(6..8) {
            Some(&[interval, sound]) => (interval, sound == 1),
            _ => (Self::DEFAULT_ALARM_INTERVAL, true),
        };

        Ok(Self {
            battery: payload[1],
            version_major: payload[2],
            version_minor: payload[3],
            function_type: bitfield & 0x0F,
            probe_count: (bitfield >> 4) & 0x07,
            ambient: bitfield >> 7 != 0,
            alarm_interval,
            alarm_sound,
        })
    }

    /// Payload asking the device to report its status.
    pub fn request() -> Vec<u8> {
        vec![Self::TYPE, 0x00, 0x00]
    }
}
