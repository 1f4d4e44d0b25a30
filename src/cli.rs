//! External argument-parsing collaborator (spec.md §1, §6). Trivial glue:
//! its only job is to produce the resolved [`Config`] the core consumes.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, DictionarySource, InputSource, OutputSource};
use crate::error::{Error, Result};

/// Emit only lines containing (or, inverted, lines not containing) at least
/// one substring from a dictionary.
#[derive(Debug, Parser)]
#[command(name = "dictgrep", version, about)]
pub struct Cli {
    /// Lowercase the dictionary and each scanned line before comparing;
    /// emitted lines are unmodified.
    #[arg(short = 'i', long = "case-insensitive")]
    pub case_insensitive: bool,

    /// Emit lines whose match result is false.
    #[arg(short = 'v', long = "invert")]
    pub invert: bool,

    /// Write emitted lines to PATH (created or truncated); enables
    /// progress reporting.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Add STR to the in-memory dictionary. Repeatable; mutually exclusive
    /// with a dictionary-file positional argument.
    #[arg(short = 's', long = "substring", value_name = "STR")]
    pub substrings: Vec<String>,

    /// `[SUBSTRINGS] [FILE]`: if `-s` was not used, the first positional is
    /// the dictionary file path, otherwise it's the input file. `FILE` may
    /// be absent, meaning standard input.
    #[arg(value_name = "SUBSTRINGS|FILE")]
    pub positionals: Vec<PathBuf>,
}

impl Cli {
    /// Resolves the raw CLI struct into a validated [`Config`], performing
    /// the `-s`-vs-dictionary-file disambiguation spec.md §6 describes.
    pub fn into_config(self) -> Result<Config> {
        if self.positionals.len() > 2 {
            return Err(Error::Usage(format!(
                "expected at most 2 positional arguments ([SUBSTRINGS] [FILE]), got {}",
                self.positionals.len()
            )));
        }

        let has_inline = !self.substrings.is_empty();

        let (dictionary, input) = if has_inline {
            if self.positionals.len() > 1 {
                return Err(Error::Usage(
                    "-s/--substring is mutually exclusive with a dictionary-file positional argument"
                        .to_string(),
                ));
            }
            let input = match self.positionals.into_iter().next() {
                Some(path) => InputSource::File(path),
                None => InputSource::Stdin,
            };
            (DictionarySource::Inline(self.substrings), input)
        } else {
            let mut positionals = self.positionals.into_iter();
            let dict_path = positionals.next().ok_or_else(|| {
                Error::Usage(
                    "missing dictionary: pass -s/--substring at least once, or a dictionary file path"
                        .to_string(),
                )
            })?;
            let input = match positionals.next() {
                Some(path) => InputSource::File(path),
                None => InputSource::Stdin,
            };
            (DictionarySource::File(dict_path), input)
        };

        let output = match self.output {
            Some(path) => OutputSource::File(path),
            None => OutputSource::Stdout,
        };

        Ok(Config {
            case_insensitive: self.case_insensitive,
            invert: self.invert,
            dictionary,
            input,
            output,
        })
    }
}
