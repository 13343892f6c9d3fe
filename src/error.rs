use crate::code::ReasonCode;
use crate::types::PacketType;

/// Errors which can occur when classifying a reason code.
///
/// All of these are recoverable: the caller decides whether an invalid
/// combination is a protocol violation worth closing the connection over.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// Byte value does not name a control packet type
    #[error("Unsupported packet type: {0}")]
    UnsupportedPacketType(u8),
    /// Byte value does not name a supported protocol level
    #[error("Unsupported protocol level: {0}")]
    UnsupportedProtocolLevel(u8),
    /// Control packet type carries no reason codes at all
    #[error("{0:?} packets do not carry reason codes")]
    UnknownPacketType(PacketType),
    /// Packet type carries reason codes, but not this one
    #[error("Reason code 0x{0:02X} is not valid for {1:?} packets")]
    InvalidReasonCode(ReasonCode, PacketType),
}
