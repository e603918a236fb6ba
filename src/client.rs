//! Async client for a connected ToGrill peripheral.
//!
//! [`GrillClient`] resolves the notify and write characteristics at connect
//! time and exposes the device as a stream of decoded [`Notify`] packets plus
//! framed writes.

use btleplug::api::{Central as _, Characteristic, Peripheral as _, WriteType};
use btleplug::platform::{Adapter, Peripheral};
use futures::{Stream, StreamExt};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::frame;
use crate::packets::{DeviceStatus, Notify, ProbeTemperatures, WritePacket};
use crate::service;

/// Errors from locating or talking to a device.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("bluetooth error: {0}")]
    Bluetooth(#[from] btleplug::Error),

    #[error("no device with address {0}")]
    DeviceNotFound(String),

    #[error("device is missing characteristic {0}")]
    MissingCharacteristic(Uuid),
}

/// A connected ToGrill device, subscribed to its notify characteristic.
pub struct GrillClient {
    peripheral: Peripheral,
    notify: Characteristic,
    write: Characteristic,
}

impl GrillClient {
    /// Locate a peripheral on the adapter by address or platform peripheral id.
    ///
    /// The adapter only knows peripherals it has seen, so a scan should be
    /// running (or have run) before calling this.
    pub async fn find(adapter: &Adapter, address: &str) -> Result<Peripheral, ClientError> {
        for peripheral in adapter.peripherals().await? {
            if peripheral.id().to_string() == address
                || peripheral
                    .address()
                    .to_string()
                    .eq_ignore_ascii_case(address)
            {
                return Ok(peripheral);
            }
        }
        Err(ClientError::DeviceNotFound(address.to_string()))
    }

    /// Connect, discover services, and subscribe to notifications.
    pub async fn connect(peripheral: Peripheral) -> Result<Self, ClientError> {
        if !peripheral.is_connected().await? {
            peripheral.connect().await?;
        }
        peripheral.discover_services().await?;

        let notify = find_characteristic(&peripheral, service::NOTIFY_CHARACTERISTIC)?;
        let write = find_characteristic(&peripheral, service::WRITE_CHARACTERISTIC)?;
        peripheral.subscribe(&notify).await?;
        debug!(address = %peripheral.address(), "subscribed to notifications");

        Ok(Self {
            peripheral,
            notify,
            write,
        })
    }

    pub fn peripheral(&self) -> &Peripheral {
        &self.peripheral
    }

    /// Stream of decoded notifications.
    ///
    /// Frames that fail to decode are logged and skipped rather than ending
    /// the stream.
    pub async fn packets(&self) -> Result<impl Stream<Item = Notify>, ClientError> {
        let notify_uuid = self.notify.uuid;
        let notifications = self.peripheral.notifications().await?;

        Ok(notifications.filter_map(move |event| async move {
            if event.uuid != notify_uuid {
                return None;
            }
            match frame::decode(&event.value).and_then(|payload| Notify::decode(&payload)) {
                Ok(packet) => {
                    debug!(?packet, "notification");
                    Some(packet)
                }
                Err(error) => {
                    warn!(%error, data = hex::encode(&event.value), "undecodable notification");
                    None
                }
            }
        }))
    }

    /// Frame a raw packet payload and write it to the device.
    pub async fn send(&self, payload: &[u8]) -> Result<(), ClientError> {
        let framed = frame::encode(payload);
        self.peripheral
            .write(&self.write, &framed, WriteType::WithoutResponse)
            .await?;
        Ok(())
    }

    /// Frame and send a write packet.
    pub async fn write_packet(&self, packet: &impl WritePacket) -> Result<(), ClientError> {
        self.send(&packet.encode()).await
    }

    /// Ask the device to report its status and probe temperatures.
    pub async fn request_state(&self) -> Result<(), ClientError> {
        self.send(&DeviceStatus::request()).await?;
        // WP-01 devices only push temperatures once asked.
        self.send(&ProbeTemperatures::request()).await
    }
}

fn find_characteristic(
    peripheral: &Peripheral,
    uuid: Uuid,
) -> Result<Characteristic, ClientError> {
    peripheral
        .characteristics()
        .into_iter()
        .find(|characteristic| characteristic.uuid == uuid)
        .ok_or(ClientError::MissingCharacteristic(uuid))
}
