//! Throttled progress reporter (spec.md §4.7/§5/§9), bound to a tty.
//!
//! Grounded on the throttled-update discipline common to long-running CLI
//! tools in the reference pack: update at most once per second of
//! wall-clock time, and only past a minimum byte delta, so a tight inner
//! loop never pays for a terminal write it won't actually show.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;

const MIN_UPDATE_INTERVAL: Duration = Duration::from_secs(1);
const MIN_BYTE_DELTA: u64 = 64 * 1024;

/// A progress sink. The `Disabled` variant is free: every call is a no-op,
/// so wiring it into the hot per-line loop unconditionally costs nothing
/// when progress reporting isn't requested.
pub enum ProgressReporter {
    Disabled,
    Enabled {
        bar: ProgressBar,
        last_reported_bytes: u64,
        last_reported_at: Instant,
    },
}

impl ProgressReporter {
    /// Constructs a reporter bound to stderr, enabled only when the caller
    /// requested it (spec.md §6: `-o` enables progress reporting) and
    /// stderr is a tty. `total_bytes` is `0` when unknown (e.g. stdin),
    /// in which case a spinner is rendered instead of a percentage bar.
    pub fn new(enabled: bool, total_bytes: u64) -> ProgressReporter {
        if !enabled || !std::io::stderr().is_terminal() {
            return ProgressReporter::Disabled;
        }

        let bar = if total_bytes > 0 {
            let bar = ProgressBar::new(total_bytes);
            bar.set_style(
                ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {bytes}/{total_bytes} ({eta})",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        } else {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::with_template("{spinner} {bytes} processed")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            bar
        };

        ProgressReporter::Enabled {
            bar,
            last_reported_bytes: 0,
            last_reported_at: Instant::now(),
        }
    }

    /// Reports progress. Gated by both a minimum wall-clock interval and a
    /// minimum byte delta since the last actual render.
    pub fn report(&mut self, bytes_processed: u64, total_bytes_known_or_zero: u64) {
        let (bar, last_bytes, last_at) = match self {
            ProgressReporter::Disabled => return,
            ProgressReporter::Enabled { bar, last_reported_bytes, last_reported_at } => {
                (bar, last_reported_bytes, last_reported_at)
            }
        };

        let elapsed_enough = last_at.elapsed() >= MIN_UPDATE_INTERVAL;
        let delta_enough = bytes_processed.saturating_sub(*last_bytes) >= MIN_BYTE_DELTA;
        if !(elapsed_enough && delta_enough) {
            return;
        }

        if total_bytes_known_or_zero > 0 && bar.length() != Some(total_bytes_known_or_zero) {
            bar.set_length(total_bytes_known_or_zero);
        }
        bar.set_position(bytes_processed);
        *last_bytes = bytes_processed;
        *last_at = Instant::now();
    }

    /// Clears the bar on the success path, leaving no trailing artifact on
    /// stderr. Left un-finished on the error path (a dropped bar leaves its
    /// last rendered line in place), which is the desired behavior.
    pub fn finish(self) {
        if let ProgressReporter::Enabled { bar, .. } = self {
            bar.finish_and_clear();
        }
    }
}
