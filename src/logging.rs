//! Tracing subscriber setup for the `fos` binary.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Pick the log filter. `RUST_LOG` wins; `--verbose` raises the crate to debug.
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(format!("{},file_open_save=debug", DEFAULT_FILTER))
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    })
}

/// Install a stderr fmt subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init(false);
        init(true);
    }

    #[test]
    fn verbose_filter_mentions_crate() {
        if std::env::var("RUST_LOG").is_err() {
            let verbose = filter(true).to_string().to_lowercase();
            assert!(verbose.contains("file_open_save=debug"));
            let quiet = filter(false).to_string().to_lowercase();
            assert!(!quiet.contains("file_open_save"));
        }
    }
}
