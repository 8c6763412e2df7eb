//! C source emission.
//!
//! The generated text is meant to be compiled straight into the
//! consumer, so the declaration names and their order are fixed:
//!
//! ```c
//! const unsigned wav_channels = 1;
//! const unsigned wav_bits = 16;
//! const unsigned wav_bytes_per_sample = 2;
//! const unsigned wav_hz = 8000;
//! const unsigned wav_samples = 2;
//! const unsigned char wav_data[] = {
//!     "\x00\x00\xff\x7f"
//! };
//! ```

use std::io::Write;

use wl_ir::{MonoPcm, OUTPUT_BITS, OUTPUT_CHANNELS};

/// Output samples per string literal line.
pub const SAMPLES_PER_LINE: usize = 8;

pub fn write_c_source(w: &mut impl Write, pcm: &MonoPcm) -> std::io::Result<()> {
    write_scalar(w, "wav_channels", OUTPUT_CHANNELS as u64)?;
    write_scalar(w, "wav_bits", OUTPUT_BITS as u64)?;
    write_scalar(w, "wav_bytes_per_sample", pcm.source_width.bytes() as u64)?;
    write_scalar(w, "wav_hz", pcm.sample_rate as u64)?;
    write_scalar(w, "wav_samples", pcm.len() as u64)?;
    write_data(w, &pcm.samples)
}

pub fn pcm_to_c_source(pcm: &MonoPcm) -> Vec<u8> {
    let mut buf = Vec::new();
    write_c_source(&mut buf, pcm).expect("Vec<u8> write cannot fail");
    buf
}

fn write_scalar(w: &mut impl Write, name: &str, value: u64) -> std::io::Result<()> {
    writeln!(w, "const unsigned {} = {};", name, value)
}

fn write_data(w: &mut impl Write, samples: &[i16]) -> std::io::Result<()> {
    w.write_all(b"const unsigned char wav_data[] = {\n    \"")?;
    for (i, sample) in samples.iter().enumerate() {
        if i > 0 && i % SAMPLES_PER_LINE == 0 {
            w.write_all(b"\"\n    \"")?;
        }
        let [low, high] = sample.to_le_bytes();
        write!(w, "\\x{:02x}\\x{:02x}", low, high)?;
    }
    w.write_all(b"\"\n};\n")
}
