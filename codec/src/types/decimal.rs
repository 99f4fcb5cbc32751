//! Codec implementation for fixed-point decimals.
//!
//! A decimal travels as a signed 64-bit big-endian integer holding the value
//! scaled by 10^8, i.e. eight fractional digits of fixed precision.
//! Fractional digits beyond the eighth are truncated toward zero on encode
//! (the ninth digit never rounds the eighth; negative values truncate toward
//! zero as well). A decimal whose scaled magnitude does not fit an `i64` is
//! a caller contract violation and panics.

use crate::{Encode, Error, FixedSize, Read, Write};
use bytes::{Buf, BufMut};
use rust_decimal::Decimal;

/// Number of fractional digits carried on the wire.
pub const FIXED_POINT_DIGITS: u32 = 8;

impl Write for Decimal {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        let truncated = self.trunc_with_scale(FIXED_POINT_DIGITS);
        let scaled = truncated.mantissa() * 10i128.pow(FIXED_POINT_DIGITS - truncated.scale());
        let units = i64::try_from(scaled).expect("decimal exceeds fixed-point range");
        buf.put_i64(units);
    }
}

impl Read for Decimal {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        Ok(Decimal::new(i64::read(buf)?, FIXED_POINT_DIGITS))
    }
}

impl FixedSize for Decimal {
    const LEN_ENCODED: usize = 8;
}

impl Encode for Decimal {
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
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_trip_exact() {
        // Anything with at most eight fractional digits survives unchanged.
        let values = [
            "0",
            "1",
            "-1",
            "0.00000001",
            "-0.00000001",
            "12.5",
            "-12.5",
            "123456.78901234",
            "92233720368.54775807",  // i64::MAX scaled
            "-92233720368.54775808", // i64::MIN scaled
        ];
        for value in values {
            let value = dec(value);
            let encoded = value.encode();
            assert_eq!(encoded.len(), 8);
            let decoded = Decimal::decode(encoded).unwrap();
            assert_eq!(value, decoded);
        }
    }

    #[test]
    fn test_truncation_toward_zero() {
        // The ninth fractional digit is dropped, never rounded.
        let cases = [
            ("0.000000019", "0.00000001"),
            ("-0.000000019", "-0.00000001"),
            ("1.999999999", "1.99999999"),
            ("-1.999999999", "-1.99999999"),
        ];
        for (input, expected) in cases {
            let decoded = Decimal::decode(dec(input).encode()).unwrap();
            assert_eq!(decoded, dec(expected));
            // Deterministic: a second encode produces the same bytes.
            assert_eq!(dec(input).encode(), dec(input).encode());
        }
    }

    #[test]
    fn test_conformity() {
        // The smallest representable step scales to the integer 1.
        assert_eq!(
            dec("0.00000001").encode(),
            &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01][..]
        );
        assert_eq!(
            dec("1").encode(),
            &[0x00, 0x00, 0x00, 0x00, 0x05, 0xF5, 0xE1, 0x00][..]
        );
        assert_eq!(
            dec("-0.00000001").encode(),
            &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF][..]
        );
    }

    #[test]
    #[should_panic(expected = "decimal exceeds fixed-point range")]
    fn test_oversize() {
        // One step past the largest decimal whose scaled value fits an i64.
        let _ = dec("92233720368.54775808").encode();
    }

    #[test]
    fn test_short_read() {
        let encoded = Bytes::from_static(&[0u8; 7]);
        assert!(matches!(Decimal::decode(encoded), Err(Error::EndOfBuffer)));
    }
}
