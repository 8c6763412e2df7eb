//! Bounds-checked byte views.

use std::io::Cursor;

/// An immutable window into the input buffer.
///
/// Every accessor checks the requested range against the view's own
/// length and returns `None` instead of reading past it. Sub-views never
/// extend beyond their parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BufferView<'a> {
    bytes: &'a [u8],
}

impl<'a> BufferView<'a> {
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The first `len` bytes.
    pub fn prefix(&self, len: usize) -> Option<BufferView<'a>> {
        self.bytes.get(..len).map(BufferView::new)
    }

    /// Everything after the first `offset` bytes.
    pub fn skip(&self, offset: usize) -> Option<BufferView<'a>> {
        self.bytes.get(offset..).map(BufferView::new)
    }

    /// `len` bytes starting at `offset`.
    pub fn slice(&self, offset: usize, len: usize) -> Option<BufferView<'a>> {
        let end = offset.checked_add(len)?;
        self.bytes.get(offset..end).map(BufferView::new)
    }

    pub fn read_array<const N: usize>(&self, offset: usize) -> Option<[u8; N]> {
        self.slice(offset, N)?.bytes.try_into().ok()
    }

    pub fn read_u16_le(&self, offset: usize) -> Option<u16> {
        self.read_array(offset).map(u16::from_le_bytes)
    }

    /// A seekable reader over the view, for binrw.
    pub fn cursor(&self) -> Cursor<&'a [u8]> {
        Cursor::new(self.bytes)
    }
}

impl<'a> From<&'a [u8]> for BufferView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}
