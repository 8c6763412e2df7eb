//! Conversion of averaged magnitudes back to signed output samples.

use crate::decode::BIAS;

/// Remove the decode bias, giving a sample centered on zero.
#[inline]
pub fn normalize(mixed: u16) -> i16 {
    mixed.wrapping_sub(BIAS) as i16
}
