//! WAV decoding into mono 16-bit PCM.

use tracing::debug;
use wl_ir::{FormatDescriptor, MonoPcm};

use crate::error::Result;
use crate::fmt::validate_format;
use crate::riff::parse_container;
use crate::view::BufferView;

/// A fully validated WAVE file, not yet transcoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WavSource<'a> {
    pub format: FormatDescriptor,
    pub data: BufferView<'a>,
}

impl WavSource<'_> {
    /// Number of whole frames in the data chunk.
    pub fn frames(&self) -> usize {
        self.format.frames_in(self.data.len())
    }

    pub fn transcode(&self) -> MonoPcm {
        wl_engine::transcode(&self.format, self.data.as_bytes())
    }
}

/// Validate container and format without decoding any samples.
pub fn parse_wav(bytes: &[u8]) -> Result<WavSource<'_>> {
    let chunks = parse_container(bytes)?;
    let format = validate_format(chunks.fmt, chunks.data)?;
    let source = WavSource { format, data: chunks.data };
    debug!(
        frames = source.frames(),
        dropped = source.data.len() % format.frame_len(),
        "wav validated"
    );
    Ok(source)
}

/// Load a WAV file from raw bytes, downmixed to mono 16-bit.
pub fn load_wav(bytes: &[u8]) -> Result<MonoPcm> {
    Ok(parse_wav(bytes)?.transcode())
}
