//! Integrity framing for already-serialized memos.
//!
//! The framer is independent of the record formats: it sees only bytes. A
//! producer that wants tamper-evidence appends [`checksum`] of the body (the
//! first four bytes of a double SHA-256); a consumer calls [`verify`] and
//! decides for itself what a mismatch means. Whether a given message carries
//! the suffix at all must be known out of band — nothing in the bytes marks
//! its presence, and record decoding never strips it implicitly.

use sha2::{Digest, Sha256};

/// Width of the checksum suffix in bytes.
pub const CHECKSUM_SIZE: usize = 4;

/// Returns the 4-byte checksum of `body`: SHA-256 applied twice in
/// succession, truncated to the first four bytes.
pub fn checksum(body: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let digest = Sha256::digest(Sha256::digest(body));
    let mut sum = [0u8; CHECKSUM_SIZE];
    sum.copy_from_slice(&digest[..CHECKSUM_SIZE]);
    sum
}

/// Returns `body` with its checksum appended.
pub fn frame(body: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(body.len() + CHECKSUM_SIZE);
    framed.extend_from_slice(body);
    framed.extend_from_slice(&checksum(body));
    framed
}

/// Splits `data` into body and checksum suffix and reports whether they
/// match.
///
/// Returns `None` if `data` is too short to carry a suffix at all. A
/// mismatch is an ordinary `false`, never an error: the caller decides how
/// to react.
pub fn verify(data: &[u8]) -> Option<(&[u8], bool)> {
    if data.len() < CHECKSUM_SIZE {
        return None;
    }

    let (body, suffix) = data.split_at(data.len() - CHECKSUM_SIZE);
    Some((body, checksum(body).as_slice() == suffix))
}
