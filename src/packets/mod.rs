//! Packet layer of the ToGrill protocol.
//!
//! A packet is the payload of a [`crate::frame`]; its first byte is the packet
//! type.
//!
//! ## Notifications (device → host)
//!
//! - [`DeviceStatus`] (`0xA0`): battery, firmware version, probe count.
//! - [`ProbeTemperatures`] (`0xA1`): one reading per probe slot.
//! - [`ProbeEvent`] (`0xA5`): alarm fired, probe disconnected, acknowledge.
//! - [`TimerAck`] (`0xA7`): timer acknowledgement.
//!
//! Anything else decodes to [`UnknownPacket`] rather than an error, so new
//! firmware never breaks the notification stream.
//!
//! ## Writes (host → device)
//!
//! - [`AlarmRange`] (`0xA3/0x00`): low/high alarm temperatures for a probe.
//! - [`TargetTemperature`] (`0xA3/0x01`): target temperature for a probe.
//! - [`GrillType`] (`0xA3/0x03`): grill preset for a probe.
//! - [`SetTimer`] (`0xA7`): countdown timer on a probe.

mod alarm;
mod probe;
mod status;
mod temperature;
mod timer;

pub use alarm::*;
pub use probe::*;
pub use status::*;
pub use temperature::*;
pub use timer::*;

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// A host-to-device packet that can be framed and sent on the write
/// characteristic.
pub trait WritePacket {
    /// Encode to a packet payload (unframed).
    fn encode(&self) -> Vec<u8>;
}

/// Celsius to the u16 decicelsius wire representation.
pub(crate) fn decicelsius(celsius: f32) -> u16 {
    (celsius * 10.0).round() as u16
}

/// A notification whose type byte the protocol does not describe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownPacket {
    pub packet_type: u8,
    pub data: Vec<u8>,
}

/// A decoded notification from the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "packet", rename_all = "snake_case")]
pub enum Notify {
    Status(DeviceStatus),
    Temperatures(ProbeTemperatures),
    ProbeEvent(ProbeEvent),
    TimerAck(TimerAck),
    Unknown(UnknownPacket),
}

impl Notify {
    /// Decode a notify payload, dispatching on the type byte.
    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        let Some(&packet_type) = payload.first() else {
            return Err(DecodeError::PacketTooShort);
        };

        match packet_type {
            DeviceStatus::TYPE => DeviceStatus::decode(payload).map(Self::Status),
            ProbeTemperatures::TYPE => ProbeTemperatures::decode(payload).map(Self::Temperatures),
            ProbeEvent::TYPE => ProbeEvent::decode(payload).map(Self::ProbeEvent),
            TimerAck::TYPE => TimerAck::decode(payload).map(Self::TimerAck),
            _ => Ok(Self::Unknown(UnknownPacket {
                packet_type,
                data: payload[1..].to_vec(),
            })),
        }
    }
}
