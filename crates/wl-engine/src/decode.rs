//! Per-sample decoding to unsigned 16-bit magnitudes.
//!
//! 8-bit WAV data is already unsigned, so it is only widened. Wider
//! samples are signed: their two most significant bytes are kept and
//! offset by [`BIAS`]. Extra low-order bytes of 24- and 32-bit samples
//! are truncated, not rounded.

use wl_ir::SampleWidth;

/// Offset between signed-centered and unsigned 16-bit samples.
pub const BIAS: u16 = 1 << 15;

/// Decode one raw sample of `width` bytes.
///
/// `raw` must hold at least `width.bytes()` bytes.
#[inline]
pub fn decode_sample(width: SampleWidth, raw: &[u8]) -> u16 {
    match width {
        SampleWidth::One => decode8(raw[0]),
        SampleWidth::Two => decode16([raw[0], raw[1]]),
        SampleWidth::Three => decode24([raw[0], raw[1], raw[2]]),
        SampleWidth::Four => decode32([raw[0], raw[1], raw[2], raw[3]]),
    }
}

#[inline]
pub fn decode8(raw: u8) -> u16 {
    (raw as u16) << 8
}

#[inline]
pub fn decode16(raw: [u8; 2]) -> u16 {
    biased(raw[1], raw[0])
}

#[inline]
pub fn decode24(raw: [u8; 3]) -> u16 {
    biased(raw[2], raw[1])
}

#[inline]
pub fn decode32(raw: [u8; 4]) -> u16 {
    biased(raw[3], raw[2])
}

#[inline]
fn biased(high: u8, low: u8) -> u16 {
    u16::from_le_bytes([low, high]).wrapping_add(BIAS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_bit_is_shifted_without_bias() {
        assert_eq!(decode8(0x00), 0x0000);
        assert_eq!(decode8(0x80), 0x8000);
        assert_eq!(decode8(0xff), 0xff00);
    }

    #[test]
    fn sixteen_bit_is_biased() {
        assert_eq!(decode16([0x00, 0x00]), 0x8000);
        assert_eq!(decode16([0x00, 0x80]), 0x0000);
        assert_eq!(decode16([0xff, 0x7f]), 0xffff);
        assert_eq!(decode16([0xff, 0xff]), 0x7fff);
    }

    #[test]
    fn wide_samples_keep_top_two_bytes() {
        assert_eq!(decode24([0xaa, 0x00, 0x00]), 0x8000);
        assert_eq!(decode24([0xff, 0x34, 0x12]), 0x9234);
        assert_eq!(decode32([0xaa, 0xbb, 0x00, 0x80]), 0x0000);
        assert_eq!(decode32([0x00, 0x00, 0x34, 0x12]), 0x9234);
    }

    #[test]
    fn dispatch_matches_width() {
        let raw = [0x11, 0x22, 0x33, 0x44];
        assert_eq!(decode_sample(SampleWidth::One, &raw), decode8(0x11));
        assert_eq!(decode_sample(SampleWidth::Two, &raw), decode16([0x11, 0x22]));
        assert_eq!(decode_sample(SampleWidth::Three, &raw), decode24([0x11, 0x22, 0x33]));
        assert_eq!(decode_sample(SampleWidth::Four, &raw), decode32(raw));
    }
}
