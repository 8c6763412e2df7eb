//! RIFF/WAVE parsing for wavlit.
//!
//! Validates the container structure of a WAV file, interprets its PCM
//! `fmt ` chunk and hands the `data` chunk to the transcoding engine.

mod chunk;
mod error;
mod fmt;
mod riff;
mod view;
mod wav_format;

pub use chunk::{read_chunk, Chunk, Chunks, HEADER_LEN};
pub use error::{FormatError, Result};
pub use fmt::{validate_format, PCM_FMT_LEN};
pub use riff::{parse_container, WaveChunks};
pub use view::BufferView;
pub use wav_format::{load_wav, parse_wav, WavSource};
