//! Frozen legality and description tables for reason codes.
//!
//! Two lookup structures back every query: per-packet-type tables recording
//! which codes a packet may carry and who may send them, and a global
//! code-to-description table spanning all protocol generations. Each table is
//! a static slice sorted by code byte and is never mutated, so lookups are
//! lock-free binary searches.

use crate::code::ReasonCode;
use crate::types::CodeIssuer::{self, Both, Client, Server};
use crate::types::PacketType;

/// One rule of the per-packet-type relation: for this packet type, `code` is
/// legal, may be sent by `issuer` and means `description`.
pub(crate) struct PacketReasonEntry {
    pub(crate) code: ReasonCode,
    pub(crate) issuer: CodeIssuer,
    pub(crate) description: &'static str,
}

const fn row(
    code: ReasonCode,
    issuer: CodeIssuer,
    description: &'static str,
) -> PacketReasonEntry {
    PacketReasonEntry { code, issuer, description }
}

static CONNACK: &[PacketReasonEntry] = &[
    row(ReasonCode::SUCCESS, Server, "The Connection is accepted"),
    row(
        ReasonCode::REFUSED_UNACCEPTABLE_PROTOCOL_VERSION,
        Client,
        "The Server does not support the level of the MQTT protocol requested by the Client",
    ),
    row(
        ReasonCode::REFUSED_IDENTIFIER_REJECTED,
        Client,
        "The Client identifier is not allowed",
    ),
    row(ReasonCode::REFUSED_SERVER_UNAVAILABLE, Client, "Server refused connection"),
    row(
        ReasonCode::REFUSED_BAD_USERNAME_OR_PASSWORD,
        Client,
        "The data in the user name or password is malformed",
    ),
    row(
        ReasonCode::REFUSED_NOT_AUTHORIZED,
        Client,
        "The Client is not authorized to connect",
    ),
    row(
        ReasonCode::UNSPECIFIED_ERROR,
        Server,
        "The Server does not wish to reveal the reason for the failure, or none of the other Return Codes apply",
    ),
    row(
        ReasonCode::MALFORMED_PACKET,
        Server,
        "Data within the CONNECT Packet was not consistent with this specification",
    ),
    row(
        ReasonCode::IMPLEMENTATION_SPECIFIC_ERROR,
        Server,
        "The CONNECT is valid but is not accepted by this Server",
    ),
    row(
        ReasonCode::UNSUPPORTED_PROTOCOL,
        Server,
        "The Server does not support the level of the MQTT protocol requested by the Client",
    ),
    row(
        ReasonCode::INVALID_CLIENT_ID,
        Server,
        "The Client Identifier is a valid string but is not allowed by the Server",
    ),
    row(
        ReasonCode::BAD_USER_OR_PASSWORD,
        Server,
        "The Server does not accept the username or password specified by the Client",
    ),
    row(ReasonCode::NOT_AUTHORIZED, Server, "The Client is not authorized to connect"),
    row(ReasonCode::SERVER_UNAVAILABLE, Server, "The MQTT Server is not available"),
    row(ReasonCode::SERVER_BUSY, Server, "The Server is busy. Try again later"),
    row(
        ReasonCode::BANNED,
        Server,
        "This Client has been banned by administrative action. Contact the server administrator",
    ),
    row(
        ReasonCode::BAD_AUTH_METHOD,
        Server,
        "The authentication method is not supported or does not match the authentication method currently in use",
    ),
    row(ReasonCode::TOPIC_FILTER_NOT_VALID, Server, "The Will Topic is invalid"),
    row(
        ReasonCode::PACKET_TOO_LARGE,
        Server,
        "The CONNECT Packet exceeded the maximum permissible size",
    ),
    row(
        ReasonCode::USE_ANOTHER_SERVER,
        Server,
        "The Client should temporarily use another server",
    ),
    row(
        ReasonCode::SERVER_MOVED,
        Server,
        "The Client should permanently use another server",
    ),
    row(
        ReasonCode::CONNECTION_RATE_EXCEEDED,
        Server,
        "The connection rate limit has been exceeded",
    ),
];

static PUBACK: &[PacketReasonEntry] = &[
    row(
        ReasonCode::SUCCESS,
        Both,
        "The message is accepted. Publication of the QoS 1 message proceeds",
    ),
    row(
        ReasonCode::NO_MATCHING_SUBSCRIBERS,
        Both,
        "The message is accepted but there are no subscribers",
    ),
    row(
        ReasonCode::UNSPECIFIED_ERROR,
        Both,
        "The receiver does not accept the publish but either does not want to reveal the reason, or it does not match one of the other values",
    ),
    row(
        ReasonCode::IMPLEMENTATION_SPECIFIC_ERROR,
        Both,
        "The PUBLISH is valid but the receiver is not willing to accept it",
    ),
    row(ReasonCode::NOT_AUTHORIZED, Both, "The PUBLISH is not authorized"),
    row(
        ReasonCode::TOPIC_FILTER_NOT_VALID,
        Both,
        "The topic name is valid, but is not accepted",
    ),
    row(ReasonCode::QUOTA_EXCEEDED, Both, "An implementation imposed limit has been exceeded"),
];

static PUBREC: &[PacketReasonEntry] = &[
    row(
        ReasonCode::SUCCESS,
        Both,
        "The message is accepted. Publication of the QoS 2 message proceeds",
    ),
    row(
        ReasonCode::NO_MATCHING_SUBSCRIBERS,
        Both,
        "The message is accepted but there are no subscribers",
    ),
    row(
        ReasonCode::UNSPECIFIED_ERROR,
        Both,
        "The receiver does not accept the publish but either does not want to reveal the reason, or it does not match one of the other values",
    ),
    row(
        ReasonCode::IMPLEMENTATION_SPECIFIC_ERROR,
        Both,
        "The PUBLISH is valid but the receiver is not willing to accept it",
    ),
    row(ReasonCode::NOT_AUTHORIZED, Both, "The PUBLISH is not authorized"),
    row(
        ReasonCode::TOPIC_FILTER_NOT_VALID,
        Both,
        "The topic name is valid, but is not accepted",
    ),
    row(
        ReasonCode::PACKET_ID_IN_USE,
        Both,
        "The Packet Identifier is already in use. Possibly a mismatch in the Session state between the Client and Server",
    ),
    row(ReasonCode::QUOTA_EXCEEDED, Both, "An implementation imposed limit has been exceeded"),
];

static PUBREL: &[PacketReasonEntry] = &[
    row(
        ReasonCode::SUCCESS,
        Both,
        "Message released. Publication of QoS 2 message is complete",
    ),
    row(
        ReasonCode::PACKET_ID_NOT_FOUND,
        Both,
        "The Packet Identifier is not known. Possibly a mismatch between the Session state on the Client and Server",
    ),
];

static PUBCOMP: &[PacketReasonEntry] = &[
    row(
        ReasonCode::SUCCESS,
        Both,
        "Message released. Publication of QoS 2 message is complete",
    ),
    row(
        ReasonCode::PACKET_ID_NOT_FOUND,
        Both,
        "The Packet Identifier is not known. Possibly a mismatch between the Session state on the Client and Server",
    ),
];

static SUBACK: &[PacketReasonEntry] = &[
    row(
        ReasonCode::GRANTED_QOS_0,
        Both,
        "The subscription is accepted and the maximum QoS sent will be QoS 0. This might be a lower QoS than was requested",
    ),
    row(
        ReasonCode::GRANTED_QOS_1,
        Both,
        "The subscription is accepted and the maximum QoS sent will be QoS 1. This might be a lower QoS than was requested",
    ),
    row(
        ReasonCode::GRANTED_QOS_2,
        Both,
        "The subscription is accepted and any received QoS will be sent to this subscription",
    ),
    row(
        ReasonCode::UNSPECIFIED_ERROR,
        Both,
        "The subscription is not accepted and the Server either does not wish to reveal the reason or none of the other Return Codes apply",
    ),
    row(
        ReasonCode::IMPLEMENTATION_SPECIFIC_ERROR,
        Both,
        "The SUBSCRIBE is valid but the Server does not accept it",
    ),
    row(
        ReasonCode::NOT_AUTHORIZED,
        Both,
        "The Client is not authorized to make this subscription",
    ),
    row(
        ReasonCode::TOPIC_FILTER_NOT_VALID,
        Both,
        "The Topic Filter is correctly formed but is not allowed for this Client",
    ),
    row(
        ReasonCode::PACKET_ID_IN_USE,
        Both,
        "The specified Packet Identifier is already in use",
    ),
    row(ReasonCode::QUOTA_EXCEEDED, Both, "An implementation imposed limit has been exceeded"),
    row(
        ReasonCode::SHARED_SUBSCRIPTION_NOT_SUPPORTED,
        Both,
        "The Server does not support shared subscriptions for this Client",
    ),
    row(
        ReasonCode::SUBSCRIPTION_ID_NOT_SUPPORTED,
        Both,
        "The Server does not support subscription identifiers; the subscription is not accepted",
    ),
    row(
        ReasonCode::WILDCARD_SUBSCRIPTIONS_NOT_SUPPORTED,
        Both,
        "The Server does not support Wildcard subscriptions; the subscription is not accepted",
    ),
];

static UNSUBACK: &[PacketReasonEntry] = &[
    row(ReasonCode::SUCCESS, Both, "The subscription is deleted"),
    row(ReasonCode::NO_SUBSCRIPTION_EXISTED, Both, "No matching subscription existed"),
    row(
        ReasonCode::UNSPECIFIED_ERROR,
        Both,
        "The unsubscribe could not be completed and the Server either does not wish to reveal the reason or none of the other Return Codes apply",
    ),
    row(
        ReasonCode::IMPLEMENTATION_SPECIFIC_ERROR,
        Both,
        "The UNSUBSCRIBE is valid but the Server does not accept it",
    ),
    row(ReasonCode::NOT_AUTHORIZED, Both, "The Client is not authorized to unsubscribe"),
    row(
        ReasonCode::TOPIC_FILTER_NOT_VALID,
        Both,
        "The Topic Filter is correctly formed but is not allowed for this Client",
    ),
    row(
        ReasonCode::PACKET_ID_IN_USE,
        Both,
        "The specified Packet Identifier is already in use",
    ),
];

// DISCONNECT 0x9E and 0x9F are reserved rows: the key must stay present so
// membership checks succeed, but no protocol text is recorded for them.
static DISCONNECT: &[PacketReasonEntry] = &[
    row(
        ReasonCode::SUCCESS,
        Client,
        "Close the connection normally. Do not send the Will Message",
    ),
    row(
        ReasonCode::UNSPECIFIED_ERROR,
        Both,
        "The Connection is closed but the sender either does not wish to reveal the reason, or none of the other Return Codes apply",
    ),
    row(
        ReasonCode::MALFORMED_PACKET,
        Both,
        "The received packet does not conform to this specification",
    ),
    row(ReasonCode::PROTOCOL_ERROR, Both, "An unexpected or out of order packet was received"),
    row(
        ReasonCode::IMPLEMENTATION_SPECIFIC_ERROR,
        Both,
        "The packet received is valid but cannot be processed by this implementation",
    ),
    row(ReasonCode::NOT_AUTHORIZED, Server, "The request is not authorized"),
    row(
        ReasonCode::SERVER_BUSY,
        Server,
        "The Server is busy and cannot continue processing this Client",
    ),
    row(ReasonCode::SERVER_SHUTTING_DOWN, Server, "The Server is shutting down"),
    row(
        ReasonCode::SESSION_TAKEN_OVER,
        Server,
        "Another Connection using the same ClientId has connected causing this Connection to be closed",
    ),
    row(
        ReasonCode::KEEP_ALIVE_TIMEOUT,
        Server,
        "The Connection is closed because no Packet has been received for 1.5 times the Keep Alive time",
    ),
    row(
        ReasonCode::TOPIC_FILTER_NOT_VALID,
        Both,
        "The topic name or filter is valid, but is not accepted",
    ),
    row(ReasonCode::PACKET_TOO_LARGE, Both, "The packet size is too large"),
    row(ReasonCode::MESSAGE_RATE_TOO_HIGH, Both, "The rate of publish is too high"),
    row(ReasonCode::QUOTA_EXCEEDED, Both, "An implementation imposed limit has been exceeded"),
    row(
        ReasonCode::ADMINISTRATIVE_ACTION,
        Both,
        "The Connection is closed due to an administrative action",
    ),
    row(
        ReasonCode::DISCONNECT_WITH_WILL_MESSAGE,
        Client,
        "The Client wishes to disconnect but requires that the Server also publishes its Will Message",
    ),
    row(
        ReasonCode::RETAIN_UNAVAILABLE,
        Server,
        "The Server has specified Retain unavailable in the CONNACK",
    ),
    row(
        ReasonCode::MAXIMUM_QOS,
        Server,
        "The Client specified a QoS greater than the QoS specified in a Maximum QoS in the CONNACK",
    ),
    row(
        ReasonCode::USE_ANOTHER_SERVER,
        Server,
        "The Client should temporarily change its Server",
    ),
    row(
        ReasonCode::SERVER_MOVED,
        Server,
        "The Server is moved and the Client should permanently change its server location",
    ),
    row(ReasonCode::SHARED_SUBSCRIPTION_NOT_SUPPORTED, Server, ""),
    row(ReasonCode::CONNECTION_RATE_EXCEEDED, Server, ""),
    row(
        ReasonCode::MAXIMUM_CONNECT_TIME,
        Server,
        "The maximum connection time authorized for this connection has been exceeded",
    ),
    row(
        ReasonCode::SUBSCRIPTION_ID_NOT_SUPPORTED,
        Server,
        "The Server does not support subscription identifiers; the subscription is not accepted",
    ),
    row(
        ReasonCode::WILDCARD_SUBSCRIPTIONS_NOT_SUPPORTED,
        Server,
        "The Server does not support Wildcard subscriptions; the subscription is not accepted",
    ),
];

static AUTH: &[PacketReasonEntry] = &[
    row(ReasonCode::SUCCESS, Server, "Authentication is successful"),
    row(
        ReasonCode::CONTINUE_AUTHENTICATION,
        Both,
        "Continue the authentication with another step",
    ),
    row(ReasonCode::RE_AUTHENTICATE, Client, "Initiate a re-authentication"),
];

/// Global code-to-description table, independent of packet type context.
static DESCRIPTIONS: &[(ReasonCode, &str)] = &[
    (ReasonCode::SUCCESS, "Operation success"),
    (
        ReasonCode::REFUSED_UNACCEPTABLE_PROTOCOL_VERSION,
        "The Server does not support the level of the MQTT protocol requested by the Client",
    ),
    (ReasonCode::REFUSED_IDENTIFIER_REJECTED, "The Client identifier is not allowed"),
    (ReasonCode::REFUSED_SERVER_UNAVAILABLE, "Server refused connection"),
    (
        ReasonCode::REFUSED_BAD_USERNAME_OR_PASSWORD,
        "The data in the user name or password is malformed",
    ),
    (ReasonCode::REFUSED_NOT_AUTHORIZED, "The Client is not authorized to connect"),
    (
        ReasonCode::NO_MATCHING_SUBSCRIBERS,
        "The message is accepted but there are no subscribers",
    ),
    (ReasonCode::NO_SUBSCRIPTION_EXISTED, "No matching subscription existed"),
    (ReasonCode::CONTINUE_AUTHENTICATION, "Continue the authentication with another step"),
    (ReasonCode::RE_AUTHENTICATE, "Initiate a re-authentication"),
    (ReasonCode::UNSPECIFIED_ERROR, "Return code not specified by application"),
    (
        ReasonCode::MALFORMED_PACKET,
        "Data within the Packet was not consistent with this specification",
    ),
    (ReasonCode::PROTOCOL_ERROR, "An unexpected or out of order packet was received"),
    (
        ReasonCode::IMPLEMENTATION_SPECIFIC_ERROR,
        "The packet is valid but cannot be processed by the receiving implementation",
    ),
    (
        ReasonCode::UNSUPPORTED_PROTOCOL,
        "The Server does not support the version of the MQTT protocol requested by the Client",
    ),
    (
        ReasonCode::INVALID_CLIENT_ID,
        "The Client Identifier is a valid string but is not allowed",
    ),
    (
        ReasonCode::BAD_USER_OR_PASSWORD,
        "The receiver does not accept the user name or password specified",
    ),
    (ReasonCode::NOT_AUTHORIZED, "The sender is not authorized to perform this operation"),
    (ReasonCode::SERVER_UNAVAILABLE, "The MQTT Server is not available"),
    (ReasonCode::SERVER_BUSY, "The Server is busy. Try again later"),
    (ReasonCode::BANNED, "The Client has been banned by administrative action"),
    (ReasonCode::SERVER_SHUTTING_DOWN, "The Server is shutting down"),
    (
        ReasonCode::BAD_AUTH_METHOD,
        "The authentication method is not supported or does not match the authentication method currently in use",
    ),
    (
        ReasonCode::SESSION_TAKEN_OVER,
        "Another Connection using the same ClientId has connected, causing this Connection to be closed",
    ),
    (
        ReasonCode::KEEP_ALIVE_TIMEOUT,
        "The Connection is closed because no Packet has been received for 1.5 times the Keep Alive time",
    ),
    (
        ReasonCode::TOPIC_FILTER_NOT_VALID,
        "The topic name or filter is correctly formed but is not accepted",
    ),
    (ReasonCode::PACKET_ID_IN_USE, "The specified Packet Identifier is already in use"),
    (ReasonCode::PACKET_ID_NOT_FOUND, "The specified Packet Identifier is not known"),
    (ReasonCode::PACKET_TOO_LARGE, "The packet exceeded the maximum permissible size"),
    (ReasonCode::MESSAGE_RATE_TOO_HIGH, "The rate of publish is too high"),
    (ReasonCode::QUOTA_EXCEEDED, "An implementation imposed limit has been exceeded"),
    (
        ReasonCode::ADMINISTRATIVE_ACTION,
        "The Connection is closed due to an administrative action",
    ),
    (
        ReasonCode::DISCONNECT_WITH_WILL_MESSAGE,
        "The Client wishes to disconnect but requires that the Server also publishes its Will Message",
    ),
    (ReasonCode::RETAIN_UNAVAILABLE, "The Server does not support retained messages"),
    (
        ReasonCode::MAXIMUM_QOS,
        "The Client specified a QoS greater than the maximum QoS granted by the Server",
    ),
    (ReasonCode::USE_ANOTHER_SERVER, "The Client should temporarily use another server"),
    (ReasonCode::SERVER_MOVED, "The Client should permanently use another server"),
    (
        ReasonCode::SHARED_SUBSCRIPTION_NOT_SUPPORTED,
        "The Server does not support shared subscriptions",
    ),
    (ReasonCode::CONNECTION_RATE_EXCEEDED, "The connection rate limit has been exceeded"),
    (
        ReasonCode::MAXIMUM_CONNECT_TIME,
        "The maximum connection time authorized for this connection has been exceeded",
    ),
    (
        ReasonCode::SUBSCRIPTION_ID_NOT_SUPPORTED,
        "The Server does not support subscription identifiers",
    ),
    (
        ReasonCode::WILDCARD_SUBSCRIPTIONS_NOT_SUPPORTED,
        "The Server does not support wildcard subscriptions",
    ),
];

/// Reason code table for a packet type, `None` for the types which never
/// carry a reason code.
pub(crate) fn table(packet: PacketType) -> Option<&'static [PacketReasonEntry]> {
    match packet {
        PacketType::ConnAck => Some(CONNACK),
        PacketType::PubAck => Some(PUBACK),
        PacketType::PubRec => Some(PUBREC),
        PacketType::PubRel => Some(PUBREL),
        PacketType::PubComp => Some(PUBCOMP),
        PacketType::SubAck => Some(SUBACK),
        PacketType::UnsubAck => Some(UNSUBACK),
        PacketType::Disconnect => Some(DISCONNECT),
        PacketType::Auth => Some(AUTH),
        _ => None,
    }
}

pub(crate) fn lookup(
    table: &'static [PacketReasonEntry],
    code: ReasonCode,
) -> Option<&'static PacketReasonEntry> {
    table
        .binary_search_by_key(&code.value(), |entry| entry.code.value())
        .ok()
        .map(|idx| &table[idx])
}

pub(crate) fn entry(
    packet: PacketType,
    code: ReasonCode,
) -> Option<&'static PacketReasonEntry> {
    table(packet).and_then(|table| lookup(table, code))
}

pub(crate) fn description(code: ReasonCode) -> Option<&'static str> {
    DESCRIPTIONS
        .binary_search_by_key(&code.value(), |(code, _)| code.value())
        .ok()
        .map(|idx| DESCRIPTIONS[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables_with_packets() -> Vec<(PacketType, &'static [PacketReasonEntry])> {
        [
            PacketType::ConnAck,
            PacketType::PubAck,
            PacketType::PubRec,
            PacketType::PubRel,
            PacketType::PubComp,
            PacketType::SubAck,
            PacketType::UnsubAck,
            PacketType::Disconnect,
            PacketType::Auth,
        ]
        .into_iter()
        .map(|packet| (packet, table(packet).unwrap()))
        .collect()
    }

    #[test]
    fn packet_tables_are_sorted_and_duplicate_free() {
        for (packet, table) in tables_with_packets() {
            for pair in table.windows(2) {
                assert!(
                    pair[0].code.value() < pair[1].code.value(),
                    "{:?} table out of order at 0x{:02X}",
                    packet,
                    pair[1].code.value()
                );
            }
        }
    }

    #[test]
    fn description_table_is_sorted_and_duplicate_free() {
        for pair in DESCRIPTIONS.windows(2) {
            assert!(pair[0].0.value() < pair[1].0.value());
        }
    }

    #[test]
    fn description_table_has_no_empty_text() {
        for (code, description) in DESCRIPTIONS {
            assert!(!description.is_empty(), "0x{:02X} has no description", code.value());
        }
    }

    #[test]
    fn every_packet_table_code_is_globally_registered() {
        for (packet, table) in tables_with_packets() {
            for entry in table {
                assert!(
                    description(entry.code).is_some(),
                    "{:?} code 0x{:02X} missing from the global table",
                    packet,
                    entry.code.value()
                );
            }
        }
    }

    #[test]
    fn packet_types_without_reason_codes_have_no_table() {
        for packet in [
            PacketType::Connect,
            PacketType::Publish,
            PacketType::Subscribe,
            PacketType::Unsubscribe,
            PacketType::PingReq,
            PacketType::PingResp,
        ] {
            assert!(table(packet).is_none());
        }
    }

    #[test]
    fn reserved_disconnect_rows_keep_their_keys() {
        for code in [
            ReasonCode::SHARED_SUBSCRIPTION_NOT_SUPPORTED,
            ReasonCode::CONNECTION_RATE_EXCEEDED,
        ] {
            let entry = entry(PacketType::Disconnect, code).unwrap();
            assert_eq!(entry.issuer, crate::types::CodeIssuer::Server);
            assert_eq!(entry.description, "");
        }
    }
}
