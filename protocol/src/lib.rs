//! Memo record formats and checksum framing.
//!
//! Two record layouts ride in front of the free-form value sequence of
//! [`memopack_codec`]:
//! - [`Header`] names the protocol and action a memo is addressed to, with
//!   an optional follow-id correlating it to an earlier message.
//! - [`MultisigReceiver`] describes the m-of-n receiver of a transfer.
//!
//! Both implement [`memopack_codec::Write`] and [`memopack_codec::Read`]
//! directly and own their complete field layout.
//!
//! The [`checksum`] module frames already-serialized bytes with a 4-byte
//! integrity suffix. Nothing in record decoding invokes it implicitly: a
//! protocol layer that wants integrity calls [`checksum::verify`] first and
//! feeds only the returned body into record decode.
//!
//! ```
//! use memopack_protocol::{checksum, Decode, Encode, Header};
//!
//! let header = Header {
//!     version: 1,
//!     protocol_id: 1,
//!     follow_id: None,
//!     action: 1,
//! };
//! let framed = checksum::frame(&header.encode());
//!
//! let (body, ok) = checksum::verify(&framed).unwrap();
//! assert!(ok);
//! assert_eq!(Header::decode(body).unwrap(), header);
//! ```

pub mod checksum;
mod header;
mod receiver;

pub use header::{is_known_protocol, Header};
pub use receiver::MultisigReceiver;

// The traits record types are read and written through.
pub use memopack_codec::{Codec, Decode, Encode, Error, Read, Write};
