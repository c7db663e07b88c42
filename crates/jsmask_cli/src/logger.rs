//! Logging setup for the jsmask binary.
//!
//! Log lines go to stderr so stdout carries only command output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const JSMASK_CRATES: [&str; 4] = ["jsmask_cli", "jsmask_mask", "jsmask_extract", "jsmask_declarations"];

/// Install the global tracing subscriber.
///
/// `--verbose` turns on debug output for the jsmask crates and wins over
/// `--quiet`, which keeps errors only. Otherwise `RUST_LOG` is honored,
/// falling back to warnings.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(directives("debug"))
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

fn directives(level: &str) -> String {
    JSMASK_CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, level))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives() {
        assert_eq!(
            directives("debug"),
            "jsmask_cli=debug,jsmask_mask=debug,jsmask_extract=debug,jsmask_declarations=debug"
        );
    }
}
