//! `fmt ` chunk validation.

use binrw::BinRead;
use tracing::debug;
use wl_ir::{Encoding, FormatDescriptor, SampleWidth};

use crate::error::{FormatError, Result};
use crate::view::BufferView;

/// Bytes needed to read the format tag.
const TAG_LEN: usize = 2;
/// Bytes in the common PCM `fmt ` body (`WAVEFORMAT` + bits per sample).
pub const PCM_FMT_LEN: usize = 16;

#[derive(BinRead, Debug)]
#[br(little)]
struct PcmFmt {
    _format_tag: u16,
    channels: u16,
    sample_rate: u32,
    byte_rate: u32,
    block_align: u16,
    bits_per_sample: u16,
}

/// Interpret a `fmt ` body, and check it against the `data` body.
///
/// Only plain PCM is accepted. Any extension bytes after the first 16 are
/// ignored, as are the redundant byte rate and block align fields.
pub fn validate_format(fmt: BufferView<'_>, data: BufferView<'_>) -> Result<FormatDescriptor> {
    let tag = fmt
        .read_u16_le(0)
        .ok_or(FormatError::FmtChunkTooShort { len: fmt.len(), needed: TAG_LEN })?;
    let encoding = Encoding::from(tag);
    if encoding != Encoding::Pcm {
        return Err(FormatError::UnsupportedEncoding(tag));
    }

    let too_short = FormatError::FmtChunkTooShort { len: fmt.len(), needed: PCM_FMT_LEN };
    let pcm = match fmt.prefix(PCM_FMT_LEN) {
        Some(fields) => PcmFmt::read(&mut fields.cursor()).map_err(|_| too_short)?,
        None => return Err(too_short),
    };
    debug!(
        channels = pcm.channels,
        sample_rate = pcm.sample_rate,
        bits = pcm.bits_per_sample,
        byte_rate = pcm.byte_rate,
        block_align = pcm.block_align,
        "pcm format"
    );

    if pcm.channels == 0 {
        return Err(FormatError::ZeroChannels);
    }
    let width = SampleWidth::from_bits(pcm.bits_per_sample)
        .ok_or(FormatError::BitsOutOfRange(pcm.bits_per_sample))?;
    if data.is_empty() {
        return Err(FormatError::EmptyDataChunk);
    }

    Ok(FormatDescriptor {
        encoding,
        channels: pcm.channels,
        sample_rate: pcm.sample_rate,
        bits_per_sample: pcm.bits_per_sample,
        width,
    })
}
