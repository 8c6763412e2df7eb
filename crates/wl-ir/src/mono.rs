//! Transcoder output.

use alloc::vec::Vec;

use crate::format::SampleWidth;

/// Channel count of every transcoded result.
pub const OUTPUT_CHANNELS: u16 = 1;
/// Bit depth of every transcoded result.
pub const OUTPUT_BITS: u16 = 16;

/// Mono 16-bit samples plus the source metadata the emitters report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonoPcm {
    /// Byte width of the source samples (not of the output)
    pub source_width: SampleWidth,
    pub sample_rate: u32,
    /// One value per source frame, centered on zero
    pub samples: Vec<i16>,
}

impl MonoPcm {
    pub fn new(source_width: SampleWidth, sample_rate: u32) -> Self {
        Self { source_width, sample_rate, samples: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Little-endian byte pairs, in order.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }

    /// Playback length in milliseconds; zero for a zero rate.
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.samples.len() as u64 * 1000 / self.sample_rate as u64
    }
}
