//! Pack and unpack ordered, typed memo values.
//!
//! # Overview
//!
//! A memo is a small, opaque byte payload attached to a ledger transaction.
//! It carries an ordered sequence of typed fields in a compact binary form
//! with no per-value type tags and no self-describing schema: producer and
//! consumer must agree, out of band, on the exact ordered sequence of value
//! types a message contains. Decoding reads values back in the exact order
//! they were written.
//!
//! All fixed-width integers travel big-endian. Strings and byte strings are
//! prefixed with a single length byte (0-255). Fixed 16-byte identifiers are
//! written raw, with no prefix. Decimals travel as a signed 64-bit integer
//! scaled by 10^8.
//!
//! # Supported Types
//!
//! Natively supports:
//! - Integers: `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`, `i64`
//! - `bool`, `String`, [`Bytes`](bytes::Bytes), and fixed-size arrays like `[u8; N]`
//! - [`uuid::Uuid`] (16 raw bytes), [`rust_decimal::Decimal`] (fixed-point),
//!   and [`chrono::DateTime<Utc>`](chrono::DateTime) (nanoseconds since epoch)
//!
//! Record types with their own field layout implement the [`Write`] and
//! [`Read`] traits directly and own their complete wire format; the generic
//! rules above never run for such a type. For dynamic, schema-driven use,
//! the [`value`] module carries the same closed set of kinds behind the
//! [`Value`] enum.
//!
//! # Example (custom record)
//!
//! ```
//! use bytes::{Buf, BufMut};
//! use memopack_codec::{Decode, Encode, Error, Read, Write};
//!
//! // Define a custom record
//! #[derive(Debug, Clone, PartialEq)]
//! struct Refund {
//!     order: u64,
//!     partial: bool,
//! }
//!
//! // Implement the `Write` trait
//! impl Write for Refund {
//!     fn write(&self, buf: &mut impl BufMut) {
//!         self.order.write(buf);
//!         self.partial.write(buf);
//!     }
//! }
//!
//! // Implement the `Read` trait
//! impl Read for Refund {
//!     fn read(buf: &mut impl Buf) -> Result<Self, Error> {
//!         let order = u64::read(buf)?;
//!         let partial = bool::read(buf)?;
//!         Ok(Self { order, partial })
//!     }
//! }
//!
//! // Implement the `Encode` trait
//! impl Encode for Refund {
//!     fn len_encoded(&self) -> usize {
//!         self.order.len_encoded() + self.partial.len_encoded()
//!     }
//! }
//!
//! let refund = Refund { order: 7, partial: true };
//! let encoded = refund.encode();
//! assert_eq!(encoded.len(), 9);
//! assert_eq!(Refund::decode(encoded).unwrap(), refund);
//! ```
//!
//! # Example (value sequence)
//!
//! ```
//! use memopack_codec::{encode_values, read_values, Kind, Value};
//!
//! let values = [
//!     Value::U8(1),
//!     Value::String("ok".into()),
//!     Value::Bool(true),
//! ];
//! let encoded = encode_values(&values);
//! assert_eq!(encoded.as_ref(), &[0x01, 0x02, b'o', b'k', 0x01]);
//!
//! let mut buf = encoded.freeze();
//! let decoded = read_values(&mut buf, &[Kind::U8, Kind::String, Kind::Bool]).unwrap();
//! assert_eq!(&decoded[..], &values[..]);
//! ```

pub mod codec;
pub mod error;
pub mod types;
pub mod util;
pub mod value;

// Re-export main types and traits
pub use codec::{Codec, Decode, Encode, FixedSize, Read, Write};
pub use error::Error;
pub use value::{encode_values, read_values, write_values, Kind, Value};
