use std::io::{ErrorKind, Read};

use crate::error::WireError;

/// Initial allocation cap for a single variable-length read.
///
/// Length prefixes come straight off the wire, so a 4-byte prefix can
/// claim up to 4 GiB. The buffer starts at most this large and grows only
/// as bytes actually arrive.
const PREALLOC_LIMIT: usize = 64 * 1024;

/// Width of the length prefix in front of a UTF-8 string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthPrefix {
    /// 2-byte big-endian length (STRING, property keys, class names).
    U16,
    /// 4-byte big-endian length (LONG_STRING, XML_DOCUMENT).
    U32,
}

/// Exact-length reader over any [`Read`] source.
///
/// Every read either delivers exactly the number of bytes asked for or
/// fails with a [`WireError`]. The cumulative count of bytes pulled from
/// the reader is tracked across reads, including the partial bytes of a
/// read that failed, so callers can report how far decoding got.
///
/// ```text
///   ByteSource::new(reader)
///     read_u8()   → 1 byte      consumed += 1
///     read_u16()  → 2 bytes BE  consumed += 2
///     read_exact(7) hits EOF after 3 → Err(UnexpectedEof), consumed += 3
/// ```
pub struct ByteSource<R> {
    reader: R,
    consumed: usize,
}

impl<R: Read> ByteSource<R> {
    /// Wrap a reader. The consumed counter starts at zero.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            consumed: 0,
        }
    }

    /// Total bytes pulled from the reader so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Give back the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read exactly `n` bytes.
    ///
    /// # Errors
    ///
    /// - [`WireError::UnexpectedEof`] if the stream ends first.
    /// - [`WireError::Io`] if the reader fails.
    pub fn read_exact(&mut self, n: usize) -> Result<Vec<u8>, WireError> {
        let offset = self.consumed;
        let mut buf = Vec::with_capacity(n.min(PREALLOC_LIMIT));
        let limit = u64::try_from(n).unwrap_or(u64::MAX);

        // read_to_end retries Interrupted and keeps whatever arrived before
        // a hard error, so the counter stays accurate on both paths.
        let result = (&mut self.reader).take(limit).read_to_end(&mut buf);
        self.consumed += buf.len();

        if let Err(source) = result {
            return Err(WireError::Io { offset, source });
        }
        if buf.len() < n {
            return Err(WireError::UnexpectedEof {
                offset,
                requested: n,
                received: buf.len(),
            });
        }
        Ok(buf)
    }

    /// Read a fixed-size array without allocating.
    ///
    /// # Errors
    ///
    /// Same as [`read_exact`](Self::read_exact).
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let offset = self.consumed;
        let mut buf = [0u8; N];
        let mut filled = 0;

        while filled < N {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(WireError::UnexpectedEof {
                        offset,
                        requested: N,
                        received: filled,
                    });
                }
                Ok(n) => {
                    filled += n;
                    self.consumed += n;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(source) => return Err(WireError::Io { offset, source }),
            }
        }
        Ok(buf)
    }

    /// Read a single byte.
    ///
    /// # Errors
    ///
    /// Same as [`read_exact`](Self::read_exact).
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    /// Read a big-endian `u16`.
    ///
    /// # Errors
    ///
    /// Same as [`read_exact`](Self::read_exact).
    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Read a big-endian `u32`.
    ///
    /// # Errors
    ///
    /// Same as [`read_exact`](Self::read_exact).
    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    /// Read a big-endian IEEE-754 double.
    ///
    /// # Errors
    ///
    /// Same as [`read_exact`](Self::read_exact).
    pub fn read_f64(&mut self) -> Result<f64, WireError> {
        Ok(f64::from_be_bytes(self.read_array()?))
    }

    /// Read a length prefix of the given width, then that many bytes.
    ///
    /// The bytes are returned raw; UTF-8 validation is the caller's job.
    ///
    /// # Errors
    ///
    /// Same as [`read_exact`](Self::read_exact).
    pub fn read_prefixed(&mut self, prefix: LengthPrefix) -> Result<Vec<u8>, WireError> {
        let len = match prefix {
            LengthPrefix::U16 => usize::from(self.read_u16()?),
            LengthPrefix::U32 => usize::try_from(self.read_u32()?).unwrap_or(usize::MAX),
        };
        self.read_exact(len)
    }
}
