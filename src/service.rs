//! GATT identifiers for the ToGrill primary service.

use uuid::Uuid;

/// Expand a 16-bit assigned number over the Bluetooth base UUID.
const fn ble_uuid(short: u16) -> Uuid {
    Uuid::from_u128(0x0000_0000_0000_1000_8000_00805f9b34fb | ((short as u128) << 96))
}

/// Primary service advertised by ToGrill devices.
pub const MAIN_SERVICE: Uuid = ble_uuid(0xFFF0);

/// Characteristic carrying framed device notifications.
pub const NOTIFY_CHARACTERISTIC: Uuid = ble_uuid(0xFFF1);

/// Characteristic accepting framed host packets.
pub const WRITE_CHARACTERISTIC: Uuid = ble_uuid(0xFFF2);
