//! Diagnostic logging on stderr.
//!
//! `TONEBRIDGE_LOG` takes a full `tracing` filter directive and wins over
//! `-v`. Stdout stays reserved for command output. Under
//! `TONEBRIDGE_OUTPUT=json` log lines are emitted as JSON.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::util::OutputMode;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "TONEBRIDGE_LOG";

/// Level directive for a `-v` count.
#[must_use]
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are ignored.
///
/// In [`OutputMode::Json`] every log line is a JSON object, so stderr stays
/// parseable line by line alongside the JSON error report.
pub fn init(verbosity: u8, mode: OutputMode) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    let _ = match mode {
        OutputMode::Json => builder.json().with_ansi(false).try_init(),
        OutputMode::Human => builder.with_ansi(std::io::stderr().is_terminal()).try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::{init, level_for};
    use crate::util::OutputMode;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn repeated_init_is_harmless() {
        init(0, OutputMode::Human);
        init(2, OutputMode::Json);
    }
}
