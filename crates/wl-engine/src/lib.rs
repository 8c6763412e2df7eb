//! Transcoding engine for wavlit.
//!
//! Turns the raw bytes of a validated PCM `data` chunk into mono 16-bit
//! samples. Source samples are decoded to unsigned 16-bit magnitudes and
//! averaged per frame; the average is then re-centered on zero.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod decode;
mod downmix;
mod normalize;

pub use decode::{decode16, decode24, decode32, decode8, decode_sample, BIAS};
pub use downmix::Downmixer;
pub use normalize::normalize;

use wl_ir::{FormatDescriptor, MonoPcm};

/// Transcode a whole `data` chunk body.
///
/// Trailing bytes that do not fill a complete frame are dropped. A
/// descriptor with zero channels has no frames and yields an empty result.
pub fn transcode(desc: &FormatDescriptor, data: &[u8]) -> MonoPcm {
    let mut pcm = MonoPcm::new(desc.width, desc.sample_rate);
    if desc.frame_len() == 0 {
        return pcm;
    }
    let mixer = Downmixer::new(desc);
    pcm.samples.reserve_exact(desc.frames_in(data.len()));
    pcm.samples.extend(mixer.frames(data).map(normalize));
    pcm
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use wl_ir::{Encoding, SampleWidth};

    fn desc(channels: u16, bits: u16) -> FormatDescriptor {
        FormatDescriptor {
            encoding: Encoding::Pcm,
            channels,
            sample_rate: 8000,
            bits_per_sample: bits,
            width: SampleWidth::from_bits(bits).unwrap(),
        }
    }

    #[test]
    fn silent_16bit_stays_silent() {
        let pcm = transcode(&desc(2, 16), &[0u8; 64]);
        assert_eq!(pcm.len(), 16);
        assert!(pcm.samples.iter().all(|&s| s == 0));
    }

    #[test]
    fn mono_16bit_is_identity() {
        let input: Vec<i16> = vec![0, 1, -1, 1234, -1234, i16::MAX, i16::MIN];
        let raw: Vec<u8> = input.iter().flat_map(|s| s.to_le_bytes()).collect();
        let pcm = transcode(&desc(1, 16), &raw);
        assert_eq!(pcm.samples, input);
    }

    #[test]
    fn unsigned_8bit_midpoint_maps_to_zero() {
        let pcm = transcode(&desc(1, 8), &[0x80, 0x00, 0xff]);
        assert_eq!(pcm.samples, vec![0, i16::MIN, 0x7f00]);
    }

    #[test]
    fn keeps_source_metadata() {
        let pcm = transcode(&desc(3, 24), &[0u8; 20]);
        assert_eq!(pcm.source_width, SampleWidth::Three);
        assert_eq!(pcm.sample_rate, 8000);
        // 20 bytes / 9-byte frames
        assert_eq!(pcm.len(), 2);
    }

    #[test]
    fn stereo_24bit_truncates_low_byte() {
        // left = 0x7fffff, right = 0x000100 (low bytes 0xff/0x00 discarded)
        let raw = [0xff, 0xff, 0x7f, 0x00, 0x01, 0x00];
        let pcm = transcode(&desc(2, 24), &raw);
        // (0xffff + 0x8001) / 2 = 0xc000 -> 0x4000
        assert_eq!(pcm.samples, vec![0x4000]);
    }

    #[test]
    fn zero_channels_yield_no_frames() {
        let pcm = transcode(&desc(0, 16), &[0u8; 8]);
        assert!(pcm.is_empty());
        assert_eq!(pcm.sample_rate, 8000);
    }

    #[test]
    fn short_data_yields_no_frames() {
        let pcm = transcode(&desc(2, 32), &[1, 2, 3, 4, 5, 6, 7]);
        assert!(pcm.is_empty());
    }
}
