//! Frame-wise averaging of all channels into one.

use wl_ir::{FormatDescriptor, SampleWidth};

use crate::decode::decode_sample;

/// Averages the decoded channels of each frame.
#[derive(Clone, Copy, Debug)]
pub struct Downmixer {
    width: SampleWidth,
    channels: u16,
}

impl Downmixer {
    /// # Panics
    ///
    /// Panics if `desc` has no channels.
    pub fn new(desc: &FormatDescriptor) -> Self {
        assert!(desc.channels > 0, "downmixing needs at least one channel");
        Self { width: desc.width, channels: desc.channels }
    }

    /// Bytes consumed per frame.
    pub fn stride(&self) -> usize {
        self.width.bytes() * self.channels as usize
    }

    /// Mix one frame of exactly `stride()` bytes.
    ///
    /// The sum is divided with truncation, so 3 and 4 average to 3.
    pub fn mix(&self, frame: &[u8]) -> u16 {
        debug_assert_eq!(frame.len(), self.stride());
        // 65535 channels * 0xffff still fits in u32
        let sum: u32 = frame
            .chunks_exact(self.width.bytes())
            .map(|raw| decode_sample(self.width, raw) as u32)
            .sum();
        (sum / self.channels as u32) as u16
    }

    /// Mixed magnitude of every whole frame in `data`.
    pub fn frames<'a>(&'a self, data: &'a [u8]) -> impl Iterator<Item = u16> + 'a {
        data.chunks_exact(self.stride()).map(move |frame| self.mix(frame))
    }
}
