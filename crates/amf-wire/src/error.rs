/// Errors raised while pulling bytes off the underlying reader.
///
/// Both variants mean the same thing to the decoder: the stream could not
/// deliver the bytes a value needed. They are kept apart so diagnostics can
/// tell a truncated payload from a failing transport.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The reader reached end-of-stream before `requested` bytes arrived.
    ///
    /// `offset` is the stream position where the read started and
    /// `received` is how many bytes were delivered before the stream ended.
    #[error("unexpected end of input at offset {offset}: wanted {requested} bytes, got {received}")]
    UnexpectedEof {
        offset: usize,
        requested: usize,
        received: usize,
    },

    /// The reader returned an I/O error other than `Interrupted`.
    #[error("read failed at offset {offset}: {source}")]
    Io {
        offset: usize,
        #[source]
        source: std::io::Error,
    },
}

impl WireError {
    /// Stream position at which the failing read started.
    pub fn offset(&self) -> usize {
        match self {
            Self::UnexpectedEof { offset, .. } | Self::Io { offset, .. } => *offset,
        }
    }
}
