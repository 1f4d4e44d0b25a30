//! Line filter engine (spec.md §4.6): for each line, optionally lowercased,
//! scans all suffixes against the trie and writes or suppresses the
//! original line per the invert flag.

use std::io::Write;

use tracing::trace;

use crate::core::buffer::GrowableBuffer;
use crate::core::view::ByteView;
use crate::error::{Error, Result};
use crate::io::reader::ChunkedReader;
use crate::progress::ProgressReporter;
use crate::trie::Trie;

pub struct LineFilterEngine<'t> {
    trie: &'t Trie,
    invert: bool,
    case_insensitive: bool,
    shadow: GrowableBuffer,
    bytes_processed: u64,
}

impl<'t> LineFilterEngine<'t> {
    pub fn new(trie: &'t Trie, invert: bool, case_insensitive: bool) -> LineFilterEngine<'t> {
        LineFilterEngine {
            trie,
            invert,
            case_insensitive,
            shadow: GrowableBuffer::new(),
            bytes_processed: 0,
        }
    }

    pub fn bytes_processed(&self) -> u64 {
        self.bytes_processed
    }

    /// Drives `reader` to completion, writing matching (or, inverted,
    /// non-matching) lines to `sink` in strict input order. `total_bytes`
    /// is the known input size, or 0 if unknown (e.g. stdin).
    pub fn run<R: std::io::Read, W: Write>(
        &mut self,
        reader: &mut ChunkedReader<R>,
        sink: &mut W,
        sink_name: &str,
        progress: &mut ProgressReporter,
        total_bytes: u64,
    ) -> Result<()> {
        let mut line = GrowableBuffer::new();
        loop {
            let view = reader.read_line(&mut line, b'\n')?;
            if view.is_empty() {
                break;
            }

            if self.should_emit(line.as_slice(), view)? {
                sink.write_all(view.as_slice(line.as_slice())).map_err(|source| {
                    Error::Write { sink: sink_name.to_string(), source }
                })?;
            }

            self.bytes_processed += view.len() as u64;
            progress.report(self.bytes_processed, total_bytes);
        }
        Ok(())
    }

    /// Computes the XOR of the match result and the invert flag (spec.md
    /// §4.6 step 3 / §8 invariant 1). `buffer` is the line's original
    /// bytes; matching runs against a lowercased shadow copy when
    /// case-insensitive, but the `\n`/`\r` trim and the output write
    /// always use the original.
    fn should_emit(&mut self, buffer: &[u8], line: ByteView) -> Result<bool> {
        let needle_buffer: &[u8] = if self.case_insensitive {
            self.lower_into_shadow(buffer)?;
            self.shadow.as_slice()
        } else {
            buffer
        };

        let needle = line.trim_trailing(needle_buffer, b'\n').trim_trailing(needle_buffer, b'\r');
        let matched = self.trie.contains_anywhere(needle_buffer, needle);
        trace!(matched, invert = self.invert, "line scanned");
        Ok(matched ^ self.invert)
    }

    /// Lowercases `buffer` into `self.shadow`, growing it as needed. The
    /// line buffer is a raw slice owned by the caller, not a
    /// `GrowableBuffer`, so this folds byte-by-byte rather than going
    /// through `GrowableBuffer::to_lower`.
    fn lower_into_shadow(&mut self, buffer: &[u8]) -> Result<()> {
        self.shadow.clear();
        self.shadow.expand_to(buffer.len())?;
        let table = &crate::case_fold::LOWER;
        let dst = self.shadow.as_mut_slice();
        for (i, &b) in buffer.iter().enumerate() {
            dst[i] = table[b as usize];
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::Trie;
    use std::io::Cursor;

    fn run_engine(dict: &[&str], input: &str, invert: bool, case_insensitive: bool) -> String {
        let mut trie = Trie::new(case_insensitive);
        trie.build_from_keywords(dict.iter().map(|w| w.as_bytes())).unwrap();
        let mut engine = LineFilterEngine::new(&trie, invert, case_insensitive);
        let mut reader = ChunkedReader::new(Cursor::new(input.as_bytes().to_vec()));
        let mut out = Vec::new();
        let mut progress = ProgressReporter::Disabled;
        engine.run(&mut reader, &mut out, "<test>", &mut progress, 0).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn s1_default_mode() {
        let out = run_engine(&["foo", "bar"], "afoo\nbaz\nXbarY\n", false, false);
        assert_eq!(out, "afoo\nXbarY\n");
    }

    #[test]
    fn s2_case_insensitive() {
        let out = run_engine(&["FOO"], "hello foo world\nhello FOO world\n", false, true);
        assert_eq!(out, "hello foo world\nhello FOO world\n");
    }

    #[test]
    fn s3_invert_mode() {
        let out = run_engine(&["cat", "dog"], "fish\nzebra\nrabbit\n", true, false);
        assert_eq!(out, "fish\nzebra\nrabbit\n");
    }

    #[test]
    fn s5_crlf_preserved_but_trimmed_for_matching() {
        let out = run_engine(&["beta"], "alpha\r\nbeta\r\n", false, false);
        assert_eq!(out, "beta\r\n");
    }

    #[test]
    fn empty_dictionary_default_mode_emits_nothing() {
        let out = run_engine(&[], "a\nb\nc\n", false, false);
        assert_eq!(out, "");
    }

    #[test]
    fn empty_dictionary_invert_mode_emits_everything() {
        let out = run_engine(&[], "a\nb\nc\n", true, false);
        assert_eq!(out, "a\nb\nc\n");
    }

    #[test]
    fn keyword_matches_first_and_last_byte_of_line() {
        let out = run_engine(&["x"], "xabc\nabcx\nabc\n", false, false);
        assert_eq!(out, "xabc\nabcx\n");
    }

    #[test]
    fn byte_identical_output_including_terminator() {
        let out = run_engine(&["foo"], "foo\r\n", false, false);
        assert_eq!(out.as_bytes(), b"foo\r\n");
    }

    #[test]
    fn embedded_nul_in_line_is_handled() {
        let out = run_engine(&["mid"], "pre\x00mid\x00post\n", false, false);
        assert_eq!(out, "pre\x00mid\x00post\n");
    }
}
