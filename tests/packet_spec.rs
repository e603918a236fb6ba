use std::time::Duration;

use speculate2::speculate;
use togrill::error::DecodeError;
use togrill::packets::{
    AlarmRange, DeviceStatus, GrillType, Notify, ProbeEvent, ProbeMessage, ProbeTemperatures,
    SetTimer, TargetTemperature, TimerAck, UnknownPacket, WritePacket,
};

fn bytes(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str.replace(' ', "")).expect("invalid hex in test vector")
}

speculate! {
    describe "notify packets" {
        describe "device status" {
            it "decodes a full status report" {
                assert_eq!(
                    Notify::decode(&bytes("a05b000800600501")),
                    Ok(Notify::Status(DeviceStatus {
                        battery: 91,
                        version_major: 0,
                        version_minor: 8,
                        function_type: 0,
                        probe_count: 6,
                        ambient: false,
                        alarm_interval: 5,
                        alarm_sound: true,
                    }))
                );
            }

            it "fills in alarm defaults when the trailing bytes are absent" {
                let packet = DeviceStatus::decode(&bytes("a05b0008006000")).expect("decode failed");
                assert_eq!(packet.alarm_interval, 5);
                assert!(packet.alarm_sound);
            }

            it "unpacks the capability bitfield" {
                // function type 3, 2 probes, ambient sensor present
                let packet = DeviceStatus::decode(&bytes("a064010200a3")).expect("decode failed");
                assert_eq!(packet.function_type, 3);
                assert_eq!(packet.probe_count, 2);
                assert!(packet.ambient);
            }

            it "rejects a short payload" {
                assert_eq!(DeviceStatus::decode(&bytes("a05b00")), Err(DecodeError::PacketTooShort));
            }

            it "rejects a foreign type byte" {
                assert_eq!(
                    DeviceStatus::decode(&bytes("a15b000800600501")),
                    Err(DecodeError::UnexpectedType(0xa1))
                );
            }

            it "builds the status request payload" {
                assert_eq!(DeviceStatus::request(), bytes("a00000"));
            }
        }

        describe "probe temperatures" {
            it "decodes empty probe slots as None" {
                assert_eq!(
                    Notify::decode(&bytes("a1ffffffffffffffffffffffffffff")),
                    Ok(Notify::Temperatures(ProbeTemperatures {
                        temperatures: vec![None; 7],
                    }))
                );
            }

            it "decodes a reading alongside empty slots" {
                assert_eq!(
                    Notify::decode(&bytes("a1 ffff ffff ffff ffff ffff ffff 01b5")),
                    Ok(Notify::Temperatures(ProbeTemperatures {
                        temperatures: vec![None, None, None, None, None, None, Some(43.7)],
                    }))
                );
            }

            it "removes the offset flag from high-range readings" {
                // 0x8000 + 250 decicelsius
                assert_eq!(
                    ProbeTemperatures::decode(&bytes("a180fa")),
                    Ok(ProbeTemperatures { temperatures: vec![Some(25.0)] })
                );
            }

            it "decodes an empty probe list" {
                assert_eq!(
                    ProbeTemperatures::decode(&bytes("a1")),
                    Ok(ProbeTemperatures { temperatures: vec![] })
                );
            }

            it "builds the temperature request payload" {
                assert_eq!(ProbeTemperatures::request(), bytes("a100"));
            }
        }

        describe "probe events" {
            it "decodes known messages" {
                assert_eq!(
                    Notify::decode(&bytes("a50105")),
                    Ok(Notify::ProbeEvent(ProbeEvent { probe: 1, message: ProbeMessage::Alarm }))
                );
                assert_eq!(
                    Notify::decode(&bytes("a50206")),
                    Ok(Notify::ProbeEvent(ProbeEvent {
                        probe: 2,
                        message: ProbeMessage::Disconnected,
                    }))
                );
            }

            it "carries unassigned messages through raw" {
                assert_eq!(
                    ProbeEvent::decode(&bytes("a50009")),
                    Ok(ProbeEvent { probe: 0, message: ProbeMessage::Other(9) })
                );
            }
        }

        describe "timer acknowledgements" {
            it "decodes the payload byte" {
                assert_eq!(Notify::decode(&bytes("a72a")), Ok(Notify::TimerAck(TimerAck { data: 0x2a })));
            }
        }

        describe "dispatch" {
            it "never fails on unassigned packet types" {
                assert_eq!(
                    Notify::decode(&bytes("00ffffffffffffffffffffffffffff")),
                    Ok(Notify::Unknown(UnknownPacket {
                        packet_type: 0x00,
                        data: bytes("ffffffffffffffffffffffffffff"),
                    }))
                );
            }

            it "rejects an empty payload" {
                assert_eq!(Notify::decode(&[]), Err(DecodeError::PacketTooShort));
            }
        }
    }

    describe "write packets" {
        describe "set timer" {
            it "encodes seconds big-endian" {
                assert_eq!(SetTimer::new(0, Duration::from_secs(16)).encode(), bytes("a700010010"));
                assert_eq!(SetTimer::new(0, Duration::from_secs(256)).encode(), bytes("a700010100"));
            }

            it "round-trips through decode" {
                let packet = SetTimer::new(3, Duration::from_secs(90));
                assert_eq!(SetTimer::decode(&packet.encode()), Ok(packet));
            }

            it "rejects a short payload" {
                assert_eq!(SetTimer::decode(&bytes("a7000100")), Err(DecodeError::PacketTooShort));
            }
        }

        describe "alarm range" {
            it "encodes temperatures as decicelsius" {
                assert_eq!(
                    AlarmRange { probe: 1, minimum: 1.6, maximum: 3.2 }.encode(),
                    bytes("a3 01 00 0010 0020")
                );
            }

            it "round-trips through decode" {
                let packet = AlarmRange { probe: 1, minimum: 1.6, maximum: 3.2 };
                assert_eq!(AlarmRange::decode(&packet.encode()), Ok(packet));
            }

            it "rejects a foreign subtype" {
                assert_eq!(
                    AlarmRange::decode(&bytes("a3 01 01 0010 0000")),
                    Err(DecodeError::InvalidSubtype(0x01))
                );
            }
        }

        describe "target temperature" {
            it "encodes with zero padding" {
                assert_eq!(
                    TargetTemperature { probe: 1, target: 1.6 }.encode(),
                    bytes("a3 01 01 0010 0000")
                );
            }

            it "round-trips through decode" {
                let packet = TargetTemperature { probe: 1, target: 1.6 };
                assert_eq!(TargetTemperature::decode(&packet.encode()), Ok(packet));
            }
        }

        describe "grill type" {
            it "encodes the preset byte" {
                assert_eq!(
                    GrillType { probe: 1, grill_type: 5 }.encode(),
                    bytes("a3 01 03 0005 0000")
                );
            }

            it "round-trips through decode" {
                let packet = GrillType { probe: 1, grill_type: 5 };
                assert_eq!(GrillType::decode(&packet.encode()), Ok(packet));
            }
        }
    }
}
