//! Dictionary loading: builds a [`Trie`] from either a newline-delimited
//! file (streamed through [`ChunkedReader`], the same way the input stream
//! is read) or an in-memory list of `-s/--substring` values.

use std::fs::File;

use tracing::debug;

use crate::config::DictionarySource;
use crate::core::buffer::GrowableBuffer;
use crate::error::{Error, Result};
use crate::io::reader::ChunkedReader;
use crate::trie::Trie;

pub fn build_trie(source: &DictionarySource, case_insensitive: bool) -> Result<Trie> {
    let mut trie = match source {
        DictionarySource::Inline(words) => {
            let total_len: usize = words.iter().map(|w| w.len()).sum();
            Trie::with_capacity_hint(case_insensitive, total_len, 1)?
        }
        DictionarySource::File(path) => {
            let hint = std::fs::metadata(path).map(|m| m.len() as usize).unwrap_or(0);
            Trie::with_capacity_hint(case_insensitive, hint, 1)?
        }
    };

    match source {
        DictionarySource::Inline(words) => {
            trie.build_from_keywords(words.iter().map(|w| w.as_bytes()))?;
        }
        DictionarySource::File(path) => {
            let file = File::open(path).map_err(|source| Error::Access {
                path: path.clone(),
                source,
            })?;
            let mut reader = ChunkedReader::new(file);
            let mut line = GrowableBuffer::new();
            loop {
                let view = reader.read_line(&mut line, b'\n')?;
                if view.is_empty() {
                    break;
                }
                trie.build_from_keywords([view.as_slice(line.as_slice())])?;
            }
        }
    }

    debug!(
        keywords = trie.len(),
        arena_reallocations = trie.arena_reallocation_count(),
        "dictionary loaded"
    );
    Ok(trie)
}
