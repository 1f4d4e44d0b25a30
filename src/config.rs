//! Resolved configuration record (spec.md §6), the seam between the CLI
//! layer ([`crate::cli`]) and the core engine.

use std::path::PathBuf;

/// Where the dictionary comes from: a newline-delimited file, or the
/// in-memory list built up from repeated `-s/--substring`.
#[derive(Debug, Clone)]
pub enum DictionarySource {
    File(PathBuf),
    Inline(Vec<String>),
}

/// Where the input stream comes from.
#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Where emitted lines are written.
#[derive(Debug, Clone)]
pub enum OutputSource {
    Stdout,
    File(PathBuf),
}

/// The fully resolved, validated set of options the engine runs with.
#[derive(Debug, Clone)]
pub struct Config {
    pub case_insensitive: bool,
    pub invert: bool,
    pub dictionary: DictionarySource,
    pub input: InputSource,
    pub output: OutputSource,
}

impl Config {
    /// Progress reporting is enabled only when an explicit output file was
    /// requested (spec.md §6: "`-o`...enables progress reporting").
    pub fn progress_enabled(&self) -> bool {
        matches!(self.output, OutputSource::File(_))
    }
}
