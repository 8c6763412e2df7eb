//! Headless transcoder for wavlit.
//!
//! Loads a WAV file and commits the generated C source, plus an optional
//! preview WAV, behind one API the CLI and other callers share. Everything
//! is validated and rendered in memory before any output file is touched.

mod emit;
mod error;
mod output;
mod wav;

use std::fmt;
use std::path::Path;

use tracing::info;
use wl_formats::parse_wav;

// Re-export common types so callers don't need wl-ir/wl-formats directly.
pub use wl_formats::FormatError;
pub use wl_ir::{FormatDescriptor, MonoPcm, SampleWidth};

pub use emit::{pcm_to_c_source, write_c_source, SAMPLES_PER_LINE};
pub use error::{Error, Result};
pub use output::{commit_all, read_all, read_input};
pub use wav::{pcm_to_wav, write_wav};

/// A validated and transcoded input.
#[derive(Clone, Debug)]
pub struct Transcoder {
    format: FormatDescriptor,
    data_len: usize,
    pcm: MonoPcm,
}

impl Transcoder {
    /// Validate and transcode an in-memory WAV file.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let source = parse_wav(bytes)?;
        Ok(Self {
            format: source.format,
            data_len: source.data.len(),
            pcm: source.transcode(),
        })
    }

    pub fn open(path: &Path) -> Result<Self> {
        let bytes = read_input(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn format(&self) -> &FormatDescriptor {
        &self.format
    }

    pub fn pcm(&self) -> &MonoPcm {
        &self.pcm
    }

    pub fn probe(&self) -> Probe {
        Probe {
            channels: self.format.channels,
            bits_per_sample: self.format.bits_per_sample,
            bytes_per_sample: self.format.width.bytes(),
            sample_rate: self.format.sample_rate,
            frames: self.pcm.len(),
            dropped_bytes: self.data_len.checked_rem(self.format.frame_len()).unwrap_or(0),
            duration_ms: self.pcm.duration_ms(),
        }
    }

    /// Write the C source to `output` and the preview WAV to `preview`.
    ///
    /// Both files are rendered and staged before either is replaced, so a
    /// failure on one leaves both destinations as they were.
    pub fn commit(&self, output: Option<&Path>, preview: Option<&Path>) -> Result<()> {
        let c_source = output.map(|path| (path, pcm_to_c_source(&self.pcm)));
        let wav = match preview {
            Some(path) => {
                let bytes = pcm_to_wav(&self.pcm).map_err(Error::io("encode", path))?;
                Some((path, bytes))
            }
            None => None,
        };

        let outputs: Vec<(&Path, &[u8])> = c_source
            .iter()
            .chain(wav.iter())
            .map(|(path, bytes)| (*path, bytes.as_slice()))
            .collect();
        commit_all(&outputs)?;

        if let Some((path, _)) = &c_source {
            info!(path = %path.display(), samples = self.pcm.len(), "wrote C source");
        }
        if let Some((path, _)) = &wav {
            info!(path = %path.display(), samples = self.pcm.len(), "wrote preview WAV");
        }
        Ok(())
    }
}

/// Summary of a validated input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probe {
    pub channels: u16,
    pub bits_per_sample: u16,
    pub bytes_per_sample: usize,
    pub sample_rate: u32,
    pub frames: usize,
    /// Trailing bytes that did not fill a whole frame
    pub dropped_bytes: usize,
    pub duration_ms: u64,
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Channels: {}", self.channels)?;
        writeln!(
            f,
            "Bits:     {} ({} bytes per sample)",
            self.bits_per_sample, self.bytes_per_sample
        )?;
        writeln!(f, "Rate:     {} Hz", self.sample_rate)?;
        writeln!(f, "Frames:   {}", self.frames)?;
        if self.dropped_bytes > 0 {
            writeln!(f, "Dropped:  {} trailing bytes", self.dropped_bytes)?;
        }
        writeln!(f, "Duration: {}.{:03} s", self.duration_ms / 1000, self.duration_ms % 1000)
    }
}
