//! The dispatch header leading a memo.

use bytes::{Buf, BufMut};
use memopack_codec::{Encode, Error, FixedSize, Read, Write};
use uuid::Uuid;

/// Protocol identifiers currently assigned on the shared memo channel.
const KNOWN_PROTOCOL_IDS: std::ops::RangeInclusive<u8> = 1..=5;

/// Returns whether a protocol id is currently assigned.
///
/// Informational only: decoding passes unrecognized ids through untouched
/// rather than rejecting them.
pub fn is_known_protocol(id: u8) -> bool {
    KNOWN_PROTOCOL_IDS.contains(&id)
}

/// Routing header leading a memo: which protocol and action the payload is
/// addressed to, and an optional follow-id correlating it to an earlier
/// message.
///
/// Wire layout, version 1 (5 or 21 bytes):
///
/// | offset  | field          | width |
/// |---------|----------------|-------|
/// | 0       | version        | 1     |
/// | 1       | protocol_id    | 1     |
/// | 2       | follow-id flag | 1     |
/// | 3       | follow_id      | 16, only if the flag is set |
/// | 3 or 19 | action         | 2, big-endian |
///
/// The flag is never stored in memory. It is derived on encode from whether
/// the follow-id is present and non-nil; the nil UUID is the wire's absence
/// sentinel, so `Some(Uuid::nil())` encodes exactly like `None`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Header {
    pub version: u8,
    pub protocol_id: u8,
    pub follow_id: Option<Uuid>,
    pub action: u16,
}

impl Header {
    /// Returns whether a follow-id would be emitted on the wire.
    pub fn has_follow_id(&self) -> bool {
        self.follow_id.is_some_and(|id| !id.is_nil())
    }
}

impl Write for Header {
    fn write(&self, buf: &mut impl BufMut) {
        self.version.write(buf);
        self.protocol_id.write(buf);

        let follow_id = self.follow_id.filter(|id| !id.is_nil());
        follow_id.is_some().write(buf);
        if let Some(id) = follow_id {
            id.write(buf);
        }

        self.action.write(buf);
    }
}

impl Read for Header {
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let version = u8::read(buf)?;
        let protocol_id = u8::read(buf)?;
        let follow_id = if bool::read(buf)? {
            Some(Uuid::read(buf)?)
        } else {
            None
        };
        let action = u16::read(buf)?;
        Ok(Self {
            version,
            protocol_id,
            follow_id,
            action,
        })
    }
}

impl Encode for Header {
    fn len_encoded(&self) -> usize {
        if self.has_follow_id() {
            5 + Uuid::LEN_ENCODED
        } else {
            5
        }
    }
}
