//! Error types for container and format parsing.

use thiserror::Error;
use wl_ir::FourCc;

/// Result type for parsing operations
pub type Result<T> = std::result::Result<T, FormatError>;

/// Reasons an input is rejected. Every variant is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Fewer than 8 bytes left where a chunk header was expected
    #[error("incomplete chunk: need an 8-byte header, {available} bytes left")]
    TruncatedChunk { available: usize },

    /// Declared (padded) chunk size runs past the enclosing data
    #[error("incorrect chunk length: '{tag}' declares {declared} bytes, {available} available")]
    ChunkLengthMismatch { tag: FourCc, declared: u32, available: usize },

    #[error("first chunk must be RIFF, found '{found}'")]
    NotRiff { found: FourCc },

    /// Bytes after the RIFF chunk
    #[error("wrong RIFF chunk length: {extra} bytes follow the RIFF chunk")]
    TrailingData { extra: usize },

    #[error("RIFF must be of subtype WAVE")]
    NotWave,

    #[error("duplicate '{0}' chunks")]
    DuplicateChunk(FourCc),

    #[error("fmt chunk missing")]
    MissingFmtChunk,

    #[error("data chunk missing")]
    MissingDataChunk,

    /// Non-PCM `wFormatTag`
    #[error("only PCM encoding is supported, found format tag {0:#06x}")]
    UnsupportedEncoding(u16),

    #[error("fmt chunk too short: {len} bytes, need {needed}")]
    FmtChunkTooShort { len: usize, needed: usize },

    #[error("must have at least 1 channel")]
    ZeroChannels,

    #[error("bits must be between 8 and 32, found {0}")]
    BitsOutOfRange(u16),

    #[error("data chunk is empty")]
    EmptyDataChunk,
}
