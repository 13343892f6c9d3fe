use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;
use crate::registry;
use crate::types::{CodeIssuer, PacketType, ProtocolVersion};

const UNKNOWN_ERROR: &str = "Unknown error";

/// Single-byte status value carried in acknowledgment and disconnect
/// packets.
///
/// The numeric space is shared by both protocol generations: the v3.1/v3.1.1
/// CONNACK return codes occupy [0x00, 0x05], the v5.0 reason codes occupy
/// 0x00 plus [0x10, 0xA2], and one byte can mean different things in
/// different packets (0x01 is a granted QoS 1 in a SUBACK and a refused
/// protocol version in a v3 CONNACK). A `ReasonCode` is therefore a plain
/// byte wrapper compared by value; legality is a query, not a constructor
/// precondition.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReasonCode(u8);

impl ReasonCode {
    /// Operation success, all generations
    pub const SUCCESS: ReasonCode = ReasonCode(0x00);
    /// v3 CONNACK: unacceptable protocol version
    pub const REFUSED_UNACCEPTABLE_PROTOCOL_VERSION: ReasonCode = ReasonCode(0x01);
    /// v3 CONNACK: client identifier rejected
    pub const REFUSED_IDENTIFIER_REJECTED: ReasonCode = ReasonCode(0x02);
    /// v3 CONNACK: server unavailable
    pub const REFUSED_SERVER_UNAVAILABLE: ReasonCode = ReasonCode(0x03);
    /// v3 CONNACK: malformed user name or password
    pub const REFUSED_BAD_USERNAME_OR_PASSWORD: ReasonCode = ReasonCode(0x04);
    /// v3 CONNACK: not authorized
    pub const REFUSED_NOT_AUTHORIZED: ReasonCode = ReasonCode(0x05);

    /// SUBACK: subscription accepted at maximum QoS 0
    pub const GRANTED_QOS_0: ReasonCode = ReasonCode(0x00);
    /// SUBACK: subscription accepted at maximum QoS 1
    pub const GRANTED_QOS_1: ReasonCode = ReasonCode(0x01);
    /// SUBACK: subscription accepted at maximum QoS 2
    pub const GRANTED_QOS_2: ReasonCode = ReasonCode(0x02);

    pub const NO_MATCHING_SUBSCRIBERS: ReasonCode = ReasonCode(0x10);
    pub const NO_SUBSCRIPTION_EXISTED: ReasonCode = ReasonCode(0x11);
    pub const CONTINUE_AUTHENTICATION: ReasonCode = ReasonCode(0x18);
    pub const RE_AUTHENTICATE: ReasonCode = ReasonCode(0x19);
    pub const UNSPECIFIED_ERROR: ReasonCode = ReasonCode(0x80);
    pub const MALFORMED_PACKET: ReasonCode = ReasonCode(0x81);
    pub const PROTOCOL_ERROR: ReasonCode = ReasonCode(0x82);
    pub const IMPLEMENTATION_SPECIFIC_ERROR: ReasonCode = ReasonCode(0x83);
    pub const UNSUPPORTED_PROTOCOL: ReasonCode = ReasonCode(0x84);
    pub const INVALID_CLIENT_ID: ReasonCode = ReasonCode(0x85);
    pub const BAD_USER_OR_PASSWORD: ReasonCode = ReasonCode(0x86);
    pub const NOT_AUTHORIZED: ReasonCode = ReasonCode(0x87);
    pub const SERVER_UNAVAILABLE: ReasonCode = ReasonCode(0x88);
    pub const SERVER_BUSY: ReasonCode = ReasonCode(0x89);
    pub const BANNED: ReasonCode = ReasonCode(0x8A);
    pub const SERVER_SHUTTING_DOWN: ReasonCode = ReasonCode(0x8B);
    pub const BAD_AUTH_METHOD: ReasonCode = ReasonCode(0x8C);
    pub const SESSION_TAKEN_OVER: ReasonCode = ReasonCode(0x8E);
    pub const KEEP_ALIVE_TIMEOUT: ReasonCode = ReasonCode(0x8F);
    pub const TOPIC_FILTER_NOT_VALID: ReasonCode = ReasonCode(0x90);
    pub const PACKET_ID_IN_USE: ReasonCode = ReasonCode(0x91);
    pub const PACKET_ID_NOT_FOUND: ReasonCode = ReasonCode(0x92);
    pub const PACKET_TOO_LARGE: ReasonCode = ReasonCode(0x95);
    pub const MESSAGE_RATE_TOO_HIGH: ReasonCode = ReasonCode(0x96);
    pub const QUOTA_EXCEEDED: ReasonCode = ReasonCode(0x97);
    pub const ADMINISTRATIVE_ACTION: ReasonCode = ReasonCode(0x98);
    pub const DISCONNECT_WITH_WILL_MESSAGE: ReasonCode = ReasonCode(0x99);
    pub const RETAIN_UNAVAILABLE: ReasonCode = ReasonCode(0x9A);
    pub const MAXIMUM_QOS: ReasonCode = ReasonCode(0x9B);
    pub const USE_ANOTHER_SERVER: ReasonCode = ReasonCode(0x9C);
    pub const SERVER_MOVED: ReasonCode = ReasonCode(0x9D);
    pub const SHARED_SUBSCRIPTION_NOT_SUPPORTED: ReasonCode = ReasonCode(0x9E);
    pub const CONNECTION_RATE_EXCEEDED: ReasonCode = ReasonCode(0x9F);
    pub const MAXIMUM_CONNECT_TIME: ReasonCode = ReasonCode(0xA0);
    pub const SUBSCRIPTION_ID_NOT_SUPPORTED: ReasonCode = ReasonCode(0xA1);
    pub const WILDCARD_SUBSCRIPTIONS_NOT_SUPPORTED: ReasonCode = ReasonCode(0xA2);

    /// Raw byte value as serialized on the wire.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Party permitted to originate a `packet` carrying this reason code.
    ///
    /// The two failure outcomes are distinct: `UnknownPacketType` means
    /// `packet` never carries reason codes, `InvalidReasonCode` means
    /// `packet` does but this code is not among them.
    pub fn issuer(self, packet: PacketType) -> Result<CodeIssuer, ClassifyError> {
        let Some(table) = registry::table(packet) else {
            log::debug!("{:?} packets do not carry reason codes", packet);
            return Err(ClassifyError::UnknownPacketType(packet));
        };
        match registry::lookup(table, self) {
            Some(entry) => Ok(entry.issuer),
            None => {
                log::debug!(
                    "reason code 0x{:02X} is not valid for {:?} packets",
                    self.0,
                    packet
                );
                Err(ClassifyError::InvalidReasonCode(self, packet))
            }
        }
    }

    /// Whether this code is defined by any MQTT protocol generation,
    /// regardless of packet type context.
    pub fn is_valid(self) -> bool {
        registry::description(self).is_some()
    }

    /// Whether this code belongs to the v3.1/v3.1.1 generation.
    ///
    /// That generation predates the generalized reason code model; only the
    /// CONNACK return codes [0x00, 0x05] exist.
    pub fn is_valid_v3(self) -> bool {
        (Self::SUCCESS.0..=Self::REFUSED_NOT_AUTHORIZED.0).contains(&self.0)
    }

    /// Whether this code belongs to the v5.0 generation numeric space:
    /// success, or [0x10, 0xA2].
    ///
    /// Membership here does not make the code legal for every packet type;
    /// combine with [`ReasonCode::is_valid_for`] for per-packet legality.
    pub fn is_valid_v5(self) -> bool {
        self == Self::SUCCESS
            || (Self::NO_MATCHING_SUBSCRIBERS.0..=Self::WILDCARD_SUBSCRIPTIONS_NOT_SUPPORTED.0)
                .contains(&self.0)
    }

    /// Whether this code belongs to the given protocol generation.
    pub fn is_valid_for_version(self, version: ProtocolVersion) -> bool {
        match version {
            ProtocolVersion::MQTT3 => self.is_valid_v3(),
            ProtocolVersion::MQTT5 => self.is_valid_v5(),
        }
    }

    /// Whether `packet` may legally carry this reason code.
    pub fn is_valid_for(self, packet: PacketType) -> bool {
        registry::entry(packet, self).is_some()
    }

    /// Human-readable meaning of this code, independent of packet type.
    ///
    /// Codes not defined by any generation yield a fixed fallback string.
    pub fn description(self) -> &'static str {
        registry::description(self).unwrap_or(UNKNOWN_ERROR)
    }

    /// Packet-type-specific meaning of this code.
    ///
    /// `None` when `packet` does not carry reason codes or does not allow
    /// this one. The reserved table rows yield `Some("")`.
    pub fn description_for(self, packet: PacketType) -> Option<&'static str> {
        registry::entry(packet, self).map(|entry| entry.description)
    }
}

impl From<u8> for ReasonCode {
    fn from(value: u8) -> Self {
        ReasonCode(value)
    }
}

impl From<ReasonCode> for u8 {
    fn from(value: ReasonCode) -> Self {
        value.0
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl fmt::UpperHex for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl std::error::Error for ReasonCode {}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0x00, true ; "success")]
    #[test_case(0x01, true ; "unacceptable protocol version")]
    #[test_case(0x02, true ; "identifier rejected")]
    #[test_case(0x03, true ; "server unavailable")]
    #[test_case(0x04, true ; "bad username or password")]
    #[test_case(0x05, true ; "not authorized")]
    #[test_case(0x06, false ; "first byte past the range")]
    #[test_case(0x10, false ; "v5 codes are not v3")]
    fn v3_validity(value: u8, expected: bool) {
        assert_eq!(ReasonCode::from(value).is_valid_v3(), expected);
    }

    #[test_case(0x00, true ; "success")]
    #[test_case(0x0F, false ; "below the v5 range")]
    #[test_case(0x10, true ; "lower bound")]
    #[test_case(0xA2, true ; "upper bound")]
    #[test_case(0xA3, false ; "past the upper bound")]
    #[test_case(0x05, false ; "v3 refusals are not v5")]
    fn v5_validity(value: u8, expected: bool) {
        assert_eq!(ReasonCode::from(value).is_valid_v5(), expected);
    }

    #[test]
    fn version_dispatch_matches_the_range_checks() {
        assert!(ReasonCode::REFUSED_NOT_AUTHORIZED.is_valid_for_version(ProtocolVersion::MQTT3));
        assert!(!ReasonCode::REFUSED_NOT_AUTHORIZED.is_valid_for_version(ProtocolVersion::MQTT5));
        assert!(ReasonCode::SERVER_BUSY.is_valid_for_version(ProtocolVersion::MQTT5));
        assert!(!ReasonCode::SERVER_BUSY.is_valid_for_version(ProtocolVersion::MQTT3));
    }

    #[test]
    fn validity_follows_the_global_table() {
        assert!(ReasonCode::BANNED.is_valid());
        assert!(ReasonCode::GRANTED_QOS_2.is_valid());
        for value in [0x06, 0x0F, 0x8D, 0x93, 0x94, 0xA3, 0xFF] {
            assert!(!ReasonCode::from(value).is_valid(), "0x{value:02X}");
        }
    }

    #[test_case(PacketType::ConnAck ; "connack")]
    #[test_case(PacketType::PubAck ; "puback")]
    #[test_case(PacketType::PubRec ; "pubrec")]
    #[test_case(PacketType::PubRel ; "pubrel")]
    #[test_case(PacketType::PubComp ; "pubcomp")]
    #[test_case(PacketType::SubAck ; "suback")]
    #[test_case(PacketType::UnsubAck ; "unsuback")]
    #[test_case(PacketType::Disconnect ; "disconnect")]
    #[test_case(PacketType::Auth ; "auth")]
    fn success_is_valid_everywhere_reason_codes_exist(packet: PacketType) {
        assert!(ReasonCode::SUCCESS.is_valid_for(packet));
    }

    #[test]
    fn pubrel_only_allows_success_and_packet_id_not_found() {
        assert!(ReasonCode::PACKET_ID_NOT_FOUND.is_valid_for(PacketType::PubRel));
        assert!(!ReasonCode::NO_MATCHING_SUBSCRIBERS.is_valid_for(PacketType::PubRel));
        assert!(!ReasonCode::QUOTA_EXCEEDED.is_valid_for(PacketType::PubRel));
    }

    #[test]
    fn issuer_reports_the_registered_direction() {
        assert_eq!(
            ReasonCode::REFUSED_NOT_AUTHORIZED.issuer(PacketType::ConnAck),
            Ok(CodeIssuer::Client)
        );
        assert_eq!(
            ReasonCode::SERVER_BUSY.issuer(PacketType::ConnAck),
            Ok(CodeIssuer::Server)
        );
        assert_eq!(
            ReasonCode::QUOTA_EXCEEDED.issuer(PacketType::PubAck),
            Ok(CodeIssuer::Both)
        );
        assert_eq!(
            ReasonCode::RE_AUTHENTICATE.issuer(PacketType::Auth),
            Ok(CodeIssuer::Client)
        );
    }

    #[test]
    fn issuer_failures_are_distinguishable() {
        assert_eq!(
            ReasonCode::SUCCESS.issuer(PacketType::Publish),
            Err(ClassifyError::UnknownPacketType(PacketType::Publish))
        );
        assert_eq!(
            ReasonCode::SUCCESS.issuer(PacketType::PingReq),
            Err(ClassifyError::UnknownPacketType(PacketType::PingReq))
        );
        assert_eq!(
            ReasonCode::BANNED.issuer(PacketType::PubAck),
            Err(ClassifyError::InvalidReasonCode(ReasonCode::BANNED, PacketType::PubAck))
        );
    }

    #[test]
    fn issuer_flattens_to_the_invalid_sentinel() {
        let issuer = ReasonCode::SUCCESS
            .issuer(PacketType::Publish)
            .unwrap_or(CodeIssuer::Invalid);
        assert_eq!(issuer, CodeIssuer::Invalid);
    }

    #[test]
    fn descriptions_fall_back_for_unregistered_codes() {
        assert_eq!(ReasonCode::from(0xFF).description(), "Unknown error");
        assert_eq!(ReasonCode::from(0x8D).description(), "Unknown error");
        let banned = ReasonCode::BANNED.description();
        assert!(!banned.is_empty());
        assert_ne!(banned, "Unknown error");
    }

    #[test]
    fn packet_scoped_descriptions_do_not_fall_back() {
        assert_eq!(
            ReasonCode::SUCCESS.description_for(PacketType::UnsubAck),
            Some("The subscription is deleted")
        );
        assert_eq!(
            ReasonCode::CONNECTION_RATE_EXCEEDED.description_for(PacketType::Disconnect),
            Some("")
        );
        assert_eq!(ReasonCode::BANNED.description_for(PacketType::PubAck), None);
        assert_eq!(ReasonCode::SUCCESS.description_for(PacketType::Publish), None);
    }

    #[test]
    fn display_renders_the_description() {
        assert_eq!(
            ReasonCode::SERVER_BUSY.to_string(),
            ReasonCode::SERVER_BUSY.description()
        );
        assert_eq!(ReasonCode::from(0xFF).to_string(), "Unknown error");
    }

    #[test]
    fn byte_conversions_round_trip() {
        for value in 0..=u8::MAX {
            assert_eq!(u8::from(ReasonCode::from(value)), value);
        }
        assert_eq!(ReasonCode::NOT_AUTHORIZED.value(), 0x87);
        assert_eq!(ReasonCode::SERVER_BUSY.value(), 0x89);
        assert_eq!(ReasonCode::BANNED.value(), 0x8A);
        assert_eq!(ReasonCode::WILDCARD_SUBSCRIPTIONS_NOT_SUPPORTED.value(), 0xA2);
    }

    #[test]
    fn queries_are_idempotent() {
        let code = ReasonCode::TOPIC_FILTER_NOT_VALID;
        assert_eq!(
            code.issuer(PacketType::Disconnect),
            code.issuer(PacketType::Disconnect)
        );
        assert_eq!(code.description(), code.description());
        assert_eq!(
            code.is_valid_for(PacketType::SubAck),
            code.is_valid_for(PacketType::SubAck)
        );
    }
}
