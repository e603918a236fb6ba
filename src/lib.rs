//! Protocol implementation for ToGrill-family BLE grill thermometers.
//!
//! The device speaks a two-layer protocol over GATT:
//!
//! - [`frame`]: every characteristic value is wrapped in a `55 AA` frame with
//!   a big-endian length word and an XOR checksum.
//! - [`packets`]: the frame payload, dispatched on its first byte. The device
//!   pushes [`packets::Notify`] packets on the notify characteristic; the host
//!   sends request payloads and [`packets::WritePacket`]s on the write
//!   characteristic.
//!
//! [`client`] ties both layers to a connected [`btleplug`] peripheral, and
//! [`service`] holds the GATT identifiers involved.

pub mod client;
pub mod error;
pub mod frame;
pub mod packets;
pub mod service;
