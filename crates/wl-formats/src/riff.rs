//! RIFF/WAVE envelope validation.

use tracing::debug;
use wl_ir::FourCc;

use crate::chunk::{read_chunk, Chunk, Chunks};
use crate::error::{FormatError, Result};
use crate::view::BufferView;

/// The two chunks a WAVE file must carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaveChunks<'a> {
    pub fmt: BufferView<'a>,
    pub data: BufferView<'a>,
}

/// Check that `buffer` is exactly one `RIFF` chunk of subtype `WAVE` and
/// pick out its `fmt ` and `data` chunks.
///
/// Other sub-chunks (`LIST`, `fact`, `cue `, ...) are skipped.
pub fn parse_container(buffer: &[u8]) -> Result<WaveChunks<'_>> {
    let riff = read_chunk(BufferView::new(buffer))?;
    if riff.tag != FourCc::RIFF {
        return Err(FormatError::NotRiff { found: riff.tag });
    }
    if !riff.leftover.is_empty() {
        return Err(FormatError::TrailingData { extra: riff.leftover.len() });
    }

    let form = riff.body.read_array::<4>(0).map(FourCc::new);
    if form != Some(FourCc::WAVE) {
        return Err(FormatError::NotWave);
    }
    let sub_chunks = riff.body.skip(4).unwrap_or_default();

    let mut fmt: Option<Chunk<'_>> = None;
    let mut data: Option<Chunk<'_>> = None;
    for chunk in Chunks::new(sub_chunks) {
        let chunk = chunk?;
        let slot = match chunk.tag {
            FourCc::FMT => &mut fmt,
            FourCc::DATA => &mut data,
            other => {
                debug!(tag = %other, len = chunk.body.len(), "skipping chunk");
                continue;
            }
        };
        if slot.is_some() {
            return Err(FormatError::DuplicateChunk(chunk.tag));
        }
        debug!(tag = %chunk.tag, len = chunk.body.len(), "found chunk");
        *slot = Some(chunk);
    }

    let fmt = fmt.ok_or(FormatError::MissingFmtChunk)?;
    let data = data.ok_or(FormatError::MissingDataChunk)?;
    Ok(WaveChunks { fmt: fmt.body, data: data.body })
}
