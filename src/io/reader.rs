//! Chunked reader (spec.md §4.2): buffered reads from a [`Read`] source,
//! yielding lines terminated by a configurable delimiter.
//!
//! Grounded on the fixed-capacity-buffer-plus-cursor shape used throughout
//! the reference pack's streaming readers (e.g. `ripgrep`'s `LineBuffer` and
//! `simd-grep`'s `Chunker`): a single read buffer is refilled with one
//! system call at a time, and the line is assembled in the caller-owned
//! output buffer so a line spanning multiple chunks is handled by simple
//! concatenation rather than a second internal buffer.

use std::io::Read;

use crate::core::buffer::GrowableBuffer;
use crate::core::view::ByteView;
use crate::error::Result;
use crate::io::simd::find_byte;

/// Default backing-buffer capacity: 4 MiB, per spec.md §3.
pub const DEFAULT_CAPACITY: usize = 4 * 1024 * 1024;

/// Owns a fixed-capacity read buffer, the underlying reader, and the
/// `cursor <= filled <= capacity` invariant from spec.md §3.
pub struct ChunkedReader<R> {
    reader: R,
    buf: Vec<u8>,
    filled: usize,
    cursor: usize,
    eof: bool,
}

impl<R: Read> ChunkedReader<R> {
    pub fn new(reader: R) -> ChunkedReader<R> {
        Self::with_capacity(reader, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(reader: R, capacity: usize) -> ChunkedReader<R> {
        ChunkedReader {
            reader,
            buf: vec![0u8; capacity.max(1)],
            filled: 0,
            cursor: 0,
            eof: false,
        }
    }

    /// Refills the backing buffer with a single `read` call. Returns the
    /// number of bytes read (0 at true EOF).
    fn refill(&mut self) -> std::io::Result<usize> {
        self.cursor = 0;
        self.filled = self.reader.read(&mut self.buf)?;
        if self.filled == 0 {
            self.eof = true;
        }
        Ok(self.filled)
    }

    /// Returns the next logical line, including the terminating delimiter
    /// byte if one was present, or an empty view at end-of-stream.
    ///
    /// `out` is cleared and then used to assemble the line; the returned
    /// [`ByteView`] is `(0, accumulated_length)` over `out`.
    pub fn read_line(&mut self, out: &mut GrowableBuffer, delim: u8) -> Result<ByteView> {
        out.clear();

        loop {
            if self.cursor >= self.filled {
                if self.eof {
                    break;
                }
                if self.refill().map_err(|source| crate::error::Error::Access {
                    path: "<stream>".into(),
                    source,
                })? == 0
                {
                    break;
                }
            }

            let remaining = &self.buf[self.cursor..self.filled];
            match find_byte(remaining, delim, remaining.len()) {
                Some(rel) => {
                    out.append(&remaining[..=rel])?;
                    self.cursor += rel + 1;
                    break;
                }
                None => {
                    out.append(remaining)?;
                    self.cursor = self.filled;
                }
            }
        }

        Ok(out.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lines_of<R: Read>(mut r: ChunkedReader<R>) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        let mut buf = GrowableBuffer::new();
        loop {
            let view = r.read_line(&mut buf, b'\n').unwrap();
            if view.is_empty() {
                break;
            }
            out.push(view.as_slice(buf.as_slice()).to_vec());
        }
        out
    }

    #[test]
    fn basic_lines() {
        let r = ChunkedReader::new(Cursor::new(b"a\nb\nc\n".to_vec()));
        assert_eq!(lines_of(r), vec![b"a\n".to_vec(), b"b\n".to_vec(), b"c\n".to_vec()]);
    }

    #[test]
    fn no_trailing_delimiter() {
        let r = ChunkedReader::new(Cursor::new(b"a\nb".to_vec()));
        assert_eq!(lines_of(r), vec![b"a\n".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn empty_input_yields_no_lines() {
        let r = ChunkedReader::new(Cursor::new(Vec::new()));
        assert_eq!(lines_of(r), Vec::<Vec<u8>>::new());
    }

    #[test]
    fn line_longer_than_chunk_capacity_spans_multiple_reads() {
        let mut data = vec![b'x'; 10_000];
        data.push(b'\n');
        data.extend_from_slice(b"short\n");
        let r = ChunkedReader::with_capacity(Cursor::new(data.clone()), 64);
        let lines = lines_of(r);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 10_001);
        assert_eq!(lines[1], b"short\n");
    }

    #[test]
    fn embedded_nul_bytes_are_preserved() {
        let data = b"a\x00b\nc\x00\x00d\n".to_vec();
        let r = ChunkedReader::new(Cursor::new(data.clone()));
        assert_eq!(lines_of(r), vec![b"a\x00b\n".to_vec(), b"c\x00\x00d\n".to_vec()]);
    }

    #[test]
    fn crlf_preserved_verbatim() {
        let r = ChunkedReader::new(Cursor::new(b"alpha\r\nbeta\r\n".to_vec()));
        assert_eq!(lines_of(r), vec![b"alpha\r\n".to_vec(), b"beta\r\n".to_vec()]);
    }

    #[test]
    fn subsequent_calls_after_eof_return_empty() {
        let mut r = ChunkedReader::new(Cursor::new(b"a\n".to_vec()));
        let mut buf = GrowableBuffer::new();
        let v = r.read_line(&mut buf, b'\n').unwrap();
        assert_eq!(v.as_slice(buf.as_slice()), b"a\n");
        let v = r.read_line(&mut buf, b'\n').unwrap();
        assert!(v.is_empty());
        let v = r.read_line(&mut buf, b'\n').unwrap();
        assert!(v.is_empty());
    }
}
