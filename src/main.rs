use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dictgrep::cli::Cli;
use dictgrep::config::{Config, InputSource, OutputSource};
use dictgrep::dictionary::build_trie;
use dictgrep::engine::LineFilterEngine;
use dictgrep::error::{Error, Result};
use dictgrep::io::reader::ChunkedReader;
use dictgrep::progress::ProgressReporter;

fn init_logging() {
    let filter = EnvFilter::try_from_env("DICTGREP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn main() -> ExitCode {
    init_logging();

    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(err) => return report_fatal(&err),
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_fatal(&err),
    }
}

fn report_fatal(err: &Error) -> ExitCode {
    // spec.md §7: diagnostics go to stdout, not stderr.
    println!("dictgrep: {err}");
    ExitCode::FAILURE
}

fn run(config: Config) -> Result<()> {
    let trie = build_trie(&config.dictionary, config.case_insensitive)?;

    let total_bytes = match &config.input {
        InputSource::File(path) => std::fs::metadata(path).map(|m| m.len()).unwrap_or(0),
        InputSource::Stdin => 0,
    };

    let mut progress = ProgressReporter::new(config.progress_enabled(), total_bytes);
    let mut engine = LineFilterEngine::new(&trie, config.invert, config.case_insensitive);

    let result = match &config.input {
        InputSource::Stdin => {
            let stdin = io::stdin();
            let mut reader = ChunkedReader::new(stdin.lock());
            run_with_sink(&config, &mut engine, &mut reader, &mut progress, total_bytes)
        }
        InputSource::File(path) => {
            let file = File::open(path).map_err(|source| Error::Access {
                path: path.clone(),
                source,
            })?;
            let mut reader = ChunkedReader::new(file);
            run_with_sink(&config, &mut engine, &mut reader, &mut progress, total_bytes)
        }
    };

    progress.finish();
    result
}

fn run_with_sink<R: io::Read>(
    config: &Config,
    engine: &mut LineFilterEngine<'_>,
    reader: &mut ChunkedReader<R>,
    progress: &mut ProgressReporter,
    total_bytes: u64,
) -> Result<()> {
    match &config.output {
        OutputSource::Stdout => {
            let stdout = io::stdout();
            let mut sink = BufWriter::new(stdout.lock());
            engine.run(reader, &mut sink, "<stdout>", progress, total_bytes)?;
            sink.flush().map_err(|source| Error::Write { sink: "<stdout>".to_string(), source })
        }
        OutputSource::File(path) => {
            let file = File::create(path).map_err(|source| Error::Access {
                path: path.clone(),
                source,
            })?;
            let mut sink = BufWriter::new(file);
            let name = path.display().to_string();
            engine.run(reader, &mut sink, &name, progress, total_bytes)?;
            sink.flush().map_err(|source| Error::Write { sink: name, source })
        }
    }
}
