//! Codec implementation for timestamps.
//!
//! A timestamp travels as a signed 64-bit big-endian count of nanoseconds
//! since the Unix epoch, which bounds the representable range to roughly the
//! years 1677 through 2262. A timestamp outside that range is a caller
//! contract violation and panics.

use crate::{Encode, Error, FixedSize, Read, Write};
use bytes::{Buf, BufMut};
use chrono::{DateTime, TimeZone, Utc};

impl Write for DateTime<Utc> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        let nanos = self
            .timestamp_nanos_opt()
            .expect("timestamp exceeds nanosecond range");
        buf.put_i64(nanos);
    }
}

impl Read for DateTime<Utc> {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        Ok(Utc.timestamp_nanos(i64::read(buf)?))
    }
}

impl FixedSize for DateTime<Utc> {
    const LEN_ENCODED: usize = 8;
}

impl Encode for DateTime<Utc> {
    #[inline]
    fn len_encoded(&self) -> usize {
        Self::LEN_ENCODED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Decode;
    use bytes::Bytes;

    #[test]
    fn test_round_trip() {
        let values = [
            Utc.timestamp_nanos(0),
            Utc.timestamp_nanos(1_700_000_000_123_456_789),
            Utc.timestamp_nanos(-1), // pre-epoch
        ];
        for value in values {
            let encoded = value.encode();
            assert_eq!(encoded.len(), 8);
            let decoded = DateTime::<Utc>::decode(encoded).unwrap();
            assert_eq!(value, decoded);
        }
    }

    #[test]
    fn test_conformity() {
        let epoch_plus_one = Utc.timestamp_nanos(1);
        assert_eq!(
            epoch_plus_one.encode(),
            &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01][..]
        );
    }

    #[test]
    fn test_short_read() {
        let encoded = Bytes::from_static(&[0u8; 4]);
        assert!(matches!(
            DateTime::<Utc>::decode(encoded),
            Err(Error::EndOfBuffer)
        ));
    }
}
