//! Source format description.

/// Smallest bit depth the transcoder accepts.
pub const MIN_BITS: u16 = 8;
/// Largest bit depth the transcoder accepts.
pub const MAX_BITS: u16 = 32;

/// The `wFormatTag` of a `fmt ` chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// Uncompressed integer PCM (tag 1)
    Pcm,
    /// Anything else (float, A-law, extensible, ...)
    Other(u16),
}

impl Encoding {
    pub const PCM_TAG: u16 = 0x0001;
}

impl From<u16> for Encoding {
    fn from(tag: u16) -> Self {
        if tag == Self::PCM_TAG {
            Encoding::Pcm
        } else {
            Encoding::Other(tag)
        }
    }
}

/// Storage width of one source sample.
///
/// Bit depths that are not a multiple of 8 round up to the next byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleWidth {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl SampleWidth {
    /// Width for a bit depth in `MIN_BITS..=MAX_BITS`, `None` outside it.
    pub fn from_bits(bits: u16) -> Option<Self> {
        if !(MIN_BITS..=MAX_BITS).contains(&bits) {
            return None;
        }
        match bits.div_ceil(8) {
            1 => Some(SampleWidth::One),
            2 => Some(SampleWidth::Two),
            3 => Some(SampleWidth::Three),
            _ => Some(SampleWidth::Four),
        }
    }

    pub const fn bytes(self) -> usize {
        self as usize
    }
}

/// A validated PCM `fmt ` chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub encoding: Encoding,
    /// At least 1 once validated
    pub channels: u16,
    pub sample_rate: u32,
    /// In `MIN_BITS..=MAX_BITS`
    pub bits_per_sample: u16,
    /// Byte width derived from `bits_per_sample`
    pub width: SampleWidth,
}

impl FormatDescriptor {
    /// Bytes per frame (one sample for every channel).
    pub fn frame_len(&self) -> usize {
        self.width.bytes() * self.channels as usize
    }

    /// Number of whole frames in `data_len` bytes. A trailing partial frame
    /// does not count, and a descriptor without channels holds no frames.
    pub fn frames_in(&self, data_len: usize) -> usize {
        data_len.checked_div(self.frame_len()).unwrap_or(0)
    }
}
