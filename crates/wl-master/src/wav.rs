//! WAV encoding for 16-bit mono PCM previews.

use std::io::{Error, ErrorKind, Write};

use wl_ir::{MonoPcm, OUTPUT_BITS, OUTPUT_CHANNELS};

/// Write `pcm` as a canonical 44-byte-header PCM WAV file.
pub fn write_wav(w: &mut impl Write, pcm: &MonoPcm) -> std::io::Result<()> {
    let block_align = OUTPUT_CHANNELS * (OUTPUT_BITS / 8);
    let data_size = data_size(pcm.len())?;

    write_riff_header(w, data_size)?;
    write_fmt_chunk(w, pcm.sample_rate, block_align)?;
    write_data_chunk(w, pcm, data_size)
}

pub fn pcm_to_wav(pcm: &MonoPcm) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(44 + pcm.len() * 2);
    write_wav(&mut buf, pcm)?;
    Ok(buf)
}

/// Byte length of the `data` chunk for `samples` mono samples, if the RIFF
/// length field can still describe the whole file.
fn data_size(samples: usize) -> std::io::Result<u32> {
    let block_align = usize::from(OUTPUT_CHANNELS * (OUTPUT_BITS / 8));
    samples
        .checked_mul(block_align)
        .and_then(|size| u32::try_from(size).ok())
        .filter(|&size| size <= u32::MAX - 36)
        .ok_or_else(|| Error::new(ErrorKind::InvalidInput, "too many samples for a WAV file"))
}

fn write_riff_header(w: &mut impl Write, data_size: u32) -> std::io::Result<()> {
    w.write_all(b"RIFF")?;
    w.write_all(&(36 + data_size).to_le_bytes())?;
    w.write_all(b"WAVE")
}

fn write_fmt_chunk(w: &mut impl Write, sample_rate: u32, block_align: u16) -> std::io::Result<()> {
    w.write_all(b"fmt ")?;
    w.write_all(&16u32.to_le_bytes())?;
    w.write_all(&1u16.to_le_bytes())?;
    w.write_all(&OUTPUT_CHANNELS.to_le_bytes())?;
    w.write_all(&sample_rate.to_le_bytes())?;
    w.write_all(&sample_rate.wrapping_mul(block_align as u32).to_le_bytes())?;
    w.write_all(&block_align.to_le_bytes())?;
    w.write_all(&OUTPUT_BITS.to_le_bytes())
}

fn write_data_chunk(w: &mut impl Write, pcm: &MonoPcm, data_size: u32) -> std::io::Result<()> {
    w.write_all(b"data")?;
    w.write_all(&data_size.to_le_bytes())?;
    w.write_all(&pcm.to_le_bytes())
}
