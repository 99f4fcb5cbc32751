//! Shared helpers for codec implementations

use crate::Error;
use bytes::Buf;

/// Checks that the buffer has at least `len` bytes remaining.
///
/// Every fixed-width or length-prefixed read calls this before touching the
/// buffer, so a short input fails cleanly instead of reading out of bounds.
#[inline]
pub fn at_least(buf: &mut impl Buf, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_at_least() {
        let mut buf = Bytes::from_static(&[1, 2, 3]);
        assert!(at_least(&mut buf, 3).is_ok());
        assert!(matches!(at_least(&mut buf, 4), Err(Error::EndOfBuffer)));
        // The check never consumes bytes.
        assert_eq!(buf.remaining(), 3);
    }
}
