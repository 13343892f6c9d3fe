use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

/// CONNECT protocol level byte for MQTT v3.1.1
pub const MQTT_LEVEL_3: u8 = 4;
/// CONNECT protocol level byte for MQTT v5.0
pub const MQTT_LEVEL_5: u8 = 5;

/// MQTT Control Packet type
///
/// The discriminant is the packet type value carried in the high nibble of
/// the fixed header first byte.
#[repr(u8)]
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum PacketType {
    /// Client request to connect to Server
    Connect = 1,
    /// Connect acknowledgment
    ConnAck = 2,
    /// Publish message
    Publish = 3,
    /// Publish acknowledgment
    PubAck = 4,
    /// Publish received (assured delivery part 1)
    PubRec = 5,
    /// Publish release (assured delivery part 2)
    PubRel = 6,
    /// Publish complete (assured delivery part 3)
    PubComp = 7,
    /// Client subscribe request
    Subscribe = 8,
    /// Subscribe acknowledgment
    SubAck = 9,
    /// Unsubscribe request
    Unsubscribe = 10,
    /// Unsubscribe acknowledgment
    UnsubAck = 11,
    /// PING request
    PingReq = 12,
    /// PING response
    PingResp = 13,
    /// Disconnection is advertised
    Disconnect = 14,
    /// Auth exchange
    Auth = 15,
}

impl TryFrom<u8> for PacketType {
    type Error = ClassifyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PacketType::Connect),
            2 => Ok(PacketType::ConnAck),
            3 => Ok(PacketType::Publish),
            4 => Ok(PacketType::PubAck),
            5 => Ok(PacketType::PubRec),
            6 => Ok(PacketType::PubRel),
            7 => Ok(PacketType::PubComp),
            8 => Ok(PacketType::Subscribe),
            9 => Ok(PacketType::SubAck),
            10 => Ok(PacketType::Unsubscribe),
            11 => Ok(PacketType::UnsubAck),
            12 => Ok(PacketType::PingReq),
            13 => Ok(PacketType::PingResp),
            14 => Ok(PacketType::Disconnect),
            15 => Ok(PacketType::Auth),
            _ => Err(ClassifyError::UnsupportedPacketType(value)),
        }
    }
}

impl From<PacketType> for u8 {
    fn from(value: PacketType) -> Self {
        value as u8
    }
}

/// Protocol generation
///
/// The two generations define incompatible reason code spaces sharing one
/// byte representation: v3.1/v3.1.1 only knows the six CONNACK return codes,
/// v5.0 introduced the packet-type-scoped reason code model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolVersion {
    MQTT3,
    MQTT5,
}

impl ProtocolVersion {
    /// CONNECT protocol level byte for this generation
    pub fn level(self) -> u8 {
        match self {
            ProtocolVersion::MQTT3 => MQTT_LEVEL_3,
            ProtocolVersion::MQTT5 => MQTT_LEVEL_5,
        }
    }
}

impl TryFrom<u8> for ProtocolVersion {
    type Error = ClassifyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            MQTT_LEVEL_3 => Ok(ProtocolVersion::MQTT3),
            MQTT_LEVEL_5 => Ok(ProtocolVersion::MQTT5),
            _ => Err(ClassifyError::UnsupportedProtocolLevel(value)),
        }
    }
}

/// Party permitted to originate a packet carrying a given reason code.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum CodeIssuer {
    /// Sent by the server only
    Server,
    /// Sent by the client only
    Client,
    /// Either side may send it
    Both,
    /// No issuer rule exists
    Invalid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packet_type_round_trips_all_wire_values() {
        for value in 1..=15u8 {
            let packet = PacketType::try_from(value).unwrap();
            assert_eq!(u8::from(packet), value);
        }
    }

    #[test]
    fn packet_type_rejects_reserved_values() {
        assert_eq!(
            PacketType::try_from(0),
            Err(ClassifyError::UnsupportedPacketType(0))
        );
        assert_eq!(
            PacketType::try_from(16),
            Err(ClassifyError::UnsupportedPacketType(16))
        );
        assert_eq!(
            PacketType::try_from(0xFF),
            Err(ClassifyError::UnsupportedPacketType(0xFF))
        );
    }

    #[test]
    fn protocol_version_matches_connect_levels() {
        assert_eq!(ProtocolVersion::try_from(4), Ok(ProtocolVersion::MQTT3));
        assert_eq!(ProtocolVersion::try_from(5), Ok(ProtocolVersion::MQTT5));
        assert_eq!(ProtocolVersion::MQTT3.level(), MQTT_LEVEL_3);
        assert_eq!(ProtocolVersion::MQTT5.level(), MQTT_LEVEL_5);
        assert_eq!(
            ProtocolVersion::try_from(3),
            Err(ClassifyError::UnsupportedProtocolLevel(3))
        );
    }
}
