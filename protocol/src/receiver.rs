//! The multisig receiver descriptor.

use bytes::{Buf, BufMut};
use memopack_codec::{Encode, Error, FixedSize, Read, Write};
use uuid::Uuid;

/// Describes the m-of-n receiver of a transfer: an ordered list of member
/// identifiers and the approval threshold.
///
/// Wire layout: version (1) | member count (1) | threshold (1) | members
/// (count x 16). The count byte is always derived from the member list, so
/// it can never disagree with it; a list longer than 255 members violates
/// the format ceiling and panics. Member order is significant and preserved
/// (this is a sequence, not a set).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MultisigReceiver {
    pub version: u8,
    pub members: Vec<Uuid>,
    pub threshold: u8,
}

impl Write for MultisigReceiver {
    fn write(&self, buf: &mut impl BufMut) {
        self.version.write(buf);

        let count = u8::try_from(self.members.len()).expect("member count exceeds u8");
        count.write(buf);
        self.threshold.write(buf);

        for member in &self.members {
            member.write(buf);
        }
    }
}

impl Read for MultisigReceiver {
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let version = u8::read(buf)?;
        let count = u8::read(buf)? as usize;
        let threshold = u8::read(buf)?;

        let mut members = Vec::with_capacity(count);
        for _ in 0..count {
            members.push(Uuid::read(buf)?);
        }

        Ok(Self {
            version,
            members,
            threshold,
        })
    }
}

impl Encode for MultisigReceiver {
    fn len_encoded(&self) -> usize {
        3 + self.members.len() * Uuid::LEN_ENCODED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use memopack_codec::Decode;

    fn members(n: usize) -> Vec<Uuid> {
        (0..n)
            .map(|i| {
                let mut bytes = [0u8; 16];
                bytes[0] = (i % 251) as u8;
                bytes[15] = (i / 251) as u8;
                Uuid::from_bytes(bytes)
            })
            .collect()
    }

    #[test]
    fn test_empty_receiver_bytes() {
        let receiver = MultisigReceiver {
            version: 1,
            members: vec![],
            threshold: 0,
        };
        assert_eq!(receiver.encode(), &[0x01, 0x00, 0x00][..]);
    }

    #[test]
    fn test_round_trip_zero_members() {
        let receiver = MultisigReceiver {
            version: 1,
            members: vec![],
            threshold: 0,
        };
        let encoded = receiver.encode();
        assert_eq!(encoded.len(), 3);
        assert_eq!(MultisigReceiver::decode(encoded).unwrap(), receiver);
    }

    #[test]
    fn test_round_trip_max_members() {
        let receiver = MultisigReceiver {
            version: 1,
            members: members(255),
            threshold: 128,
        };
        let encoded = receiver.encode();
        assert_eq!(encoded.len(), 3 + 255 * 16);
        assert_eq!(MultisigReceiver::decode(encoded).unwrap(), receiver);
    }

    #[test]
    fn test_member_order_preserved() {
        let receiver = MultisigReceiver {
            version: 1,
            members: members(5),
            threshold: 3,
        };
        let decoded = MultisigReceiver::decode(receiver.encode()).unwrap();
        assert_eq!(decoded.members, receiver.members);

        let reversed = MultisigReceiver {
            members: receiver.members.iter().rev().cloned().collect(),
            ..receiver.clone()
        };
        assert_ne!(reversed.encode(), receiver.encode());
    }

    #[test]
    fn test_count_tracks_members() {
        let receiver = MultisigReceiver {
            version: 1,
            members: members(7),
            threshold: 4,
        };
        let encoded = receiver.encode();
        assert_eq!(encoded[1], 7);
        assert_eq!(encoded.len(), 3 + 7 * 16);
    }

    #[test]
    #[should_panic(expected = "member count exceeds u8")]
    fn test_oversize_member_list() {
        let receiver = MultisigReceiver {
            version: 1,
            members: members(256),
            threshold: 1,
        };
        let _ = receiver.encode();
    }

    #[test]
    fn test_truncated_member_list() {
        // Count promises two members, the stream carries only one.
        let receiver = MultisigReceiver {
            version: 1,
            members: members(2),
            threshold: 2,
        };
        let encoded = receiver.encode();
        let truncated = Bytes::copy_from_slice(&encoded[..encoded.len() - 1]);
        assert!(matches!(
            MultisigReceiver::decode(truncated),
            Err(Error::EndOfBuffer)
        ));
    }
}
