//! Fatal error kinds. Every variant here is terminal: there is no retry, no
//! graceful degradation, no partial recovery (spec.md §7). `main` maps any
//! `Err` to a single diagnostic line on stdout and a nonzero exit code.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("out of memory allocating {context}")]
    OutOfMemory { context: &'static str },

    #[error("write to {sink} failed: {source}")]
    Write {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    #[error("usage error: {0}")]
    Usage(String),
}
