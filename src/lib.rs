//! Reason code classification for the MQTT v3.1.1 and v5.0 protocols.
//!
//! Every acknowledgment-style MQTT control packet carries a single-byte
//! reason code. Which codes are legal is a per-packet-type, per-generation
//! relation with overlapping numeric ranges and asymmetric direction rules:
//! a code a server may send in a DISCONNECT can be illegal in one sent by a
//! client. This crate owns that relation and nothing else. It performs no
//! wire encoding and holds no session state; it answers the classification
//! queries a codec or session layer needs:
//!
//! ```rust
//! use mqtt_reason::{CodeIssuer, PacketType, ReasonCode};
//!
//! // Per-packet legality and direction
//! assert!(ReasonCode::SERVER_BUSY.is_valid_for(PacketType::ConnAck));
//! assert_eq!(
//!     ReasonCode::REFUSED_NOT_AUTHORIZED.issuer(PacketType::ConnAck),
//!     Ok(CodeIssuer::Client),
//! );
//!
//! // Generation membership and diagnostics
//! assert!(ReasonCode::BANNED.is_valid_v5());
//! assert_eq!(ReasonCode::BANNED.value(), 0x8A);
//! assert!(!ReasonCode::BANNED.description().is_empty());
//! ```
//!
//! All tables are frozen static data; every query is a pure lookup, safe to
//! call from any thread without coordination.

mod code;
mod error;
mod registry;
mod types;

pub use self::code::ReasonCode;
pub use self::error::ClassifyError;
pub use self::types::{CodeIssuer, PacketType, ProtocolVersion, MQTT_LEVEL_3, MQTT_LEVEL_5};
