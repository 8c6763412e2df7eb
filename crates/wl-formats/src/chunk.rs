//! RIFF chunk reading.
//!
//! A chunk is an 8-byte header (tag, little-endian body length) followed
//! by the body and, when the body length is odd, one pad byte.

use binrw::BinRead;
use wl_ir::FourCc;

use crate::error::{FormatError, Result};
use crate::view::BufferView;

/// Size of a chunk header.
pub const HEADER_LEN: usize = 8;

#[derive(BinRead)]
#[br(little)]
struct ChunkHeader {
    tag: [u8; 4],
    len: u32,
}

/// One chunk and the bytes that follow it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub tag: FourCc,
    pub body: BufferView<'a>,
    /// Starts right after the body's pad byte, if any
    pub leftover: BufferView<'a>,
}

impl Chunk<'_> {
    /// Bytes consumed from the input, header and padding included.
    pub fn padded_len(&self) -> usize {
        HEADER_LEN + self.body.len() + self.body.len() % 2
    }
}

/// Read the chunk at the start of `view`.
pub fn read_chunk(view: BufferView<'_>) -> Result<Chunk<'_>> {
    if view.len() < HEADER_LEN {
        return Err(FormatError::TruncatedChunk { available: view.len() });
    }
    let header = ChunkHeader::read(&mut view.cursor())
        .map_err(|_| FormatError::TruncatedChunk { available: view.len() })?;
    let tag = FourCc::new(header.tag);

    let body_len = header.len as u64;
    let padded = HEADER_LEN as u64 + body_len + body_len % 2;
    if padded > view.len() as u64 {
        return Err(FormatError::ChunkLengthMismatch {
            tag,
            declared: header.len,
            available: view.len() - HEADER_LEN,
        });
    }

    // Both fit in usize: they are bounded by view.len()
    let body_len = body_len as usize;
    let padded = padded as usize;
    let body = view.slice(HEADER_LEN, body_len);
    let leftover = view.skip(padded);
    match (body, leftover) {
        (Some(body), Some(leftover)) => Ok(Chunk { tag, body, leftover }),
        _ => Err(FormatError::ChunkLengthMismatch {
            tag,
            declared: header.len,
            available: view.len() - HEADER_LEN,
        }),
    }
}

/// Iterator over consecutive chunks filling a view.
///
/// Yields at most one error, after which it is exhausted.
#[derive(Clone, Debug)]
pub struct Chunks<'a> {
    rest: BufferView<'a>,
    failed: bool,
}

impl<'a> Chunks<'a> {
    pub fn new(view: BufferView<'a>) -> Self {
        Self { rest: view, failed: false }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Result<Chunk<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.rest.is_empty() {
            return None;
        }
        match read_chunk(self.rest) {
            Ok(chunk) => {
                self.rest = chunk.leftover;
                Some(Ok(chunk))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn raw_chunk(tag: &[u8; 4], body: &[u8], pad: bool) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend(tag);
        buf.extend(&(body.len() as u32).to_le_bytes());
        buf.extend(body);
        if pad {
            buf.push(0);
        }
        buf
    }

    #[test]
    fn reads_tag_and_body() {
        let mut buf = raw_chunk(b"abcd", &[1, 2, 3, 4], false);
        buf.extend([9, 9]);
        let chunk = read_chunk(BufferView::new(&buf)).unwrap();
        assert_eq!(chunk.tag, FourCc::new(*b"abcd"));
        assert_eq!(chunk.body.as_bytes(), &[1, 2, 3, 4]);
        assert_eq!(chunk.leftover.as_bytes(), &[9, 9]);
    }

    #[test]
    fn odd_body_skips_pad_byte() {
        let mut buf = raw_chunk(b"odd ", &[7, 7, 7], true);
        buf.push(0x42);
        let chunk = read_chunk(BufferView::new(&buf)).unwrap();
        assert_eq!(chunk.body.len(), 3);
        assert_eq!(chunk.padded_len(), 12);
        assert_eq!(chunk.leftover.as_bytes(), &[0x42]);
    }

    #[test]
    fn missing_pad_byte_is_a_length_mismatch() {
        let buf = raw_chunk(b"odd ", &[7, 7, 7], false);
        assert!(matches!(
            read_chunk(BufferView::new(&buf)),
            Err(FormatError::ChunkLengthMismatch { declared: 3, available: 3, .. })
        ));
    }

    #[test]
    fn short_header_is_truncated() {
        assert_eq!(
            read_chunk(BufferView::new(b"RIFF\x00\x00\x00")),
            Err(FormatError::TruncatedChunk { available: 7 })
        );
    }

    #[test]
    fn huge_declared_length_is_rejected() {
        let buf = [b'd', b'a', b't', b'a', 0xff, 0xff, 0xff, 0xff, 0, 0];
        assert!(matches!(
            read_chunk(BufferView::new(&buf)),
            Err(FormatError::ChunkLengthMismatch { declared: u32::MAX, .. })
        ));
    }

    #[test]
    fn iterator_stops_after_error() {
        let mut buf = raw_chunk(b"one ", &[1, 2], false);
        buf.extend(b"tw");
        let items: Vec<_> = Chunks::new(BufferView::new(&buf)).collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert_eq!(items[1], Err(FormatError::TruncatedChunk { available: 2 }));
    }

    proptest! {
        #[test]
        fn consumed_bytes_add_up(
            body in prop::collection::vec(any::<u8>(), 0..64),
            trailing in prop::collection::vec(any::<u8>(), 0..16),
        ) {
            let mut buf = raw_chunk(b"test", &body, body.len() % 2 == 1);
            buf.extend(&trailing);
            let chunk = read_chunk(BufferView::new(&buf)).unwrap();
            let overhead = HEADER_LEN + chunk.body.len() % 2;
            prop_assert_eq!(chunk.body.len() + chunk.leftover.len() + overhead, buf.len());
            prop_assert_eq!(chunk.body.as_bytes(), &body[..]);
            prop_assert_eq!(chunk.leftover.as_bytes(), &trailing[..]);
        }
    }
}
