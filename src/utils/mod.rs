use std::env;
use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "budget_dashboard=info";

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `info`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = log_filter(env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());

        // Another subscriber may already be installed by an embedding application.
        let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
    });
}

/// Builds the filter from a `RUST_LOG` value, falling back to the default
/// directive when it is unset, blank or unparseable.
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_applies_without_rust_log() {
        assert_eq!(log_filter(None).to_string(), DEFAULT_DIRECTIVE);
        assert_eq!(log_filter(Some("  ")).to_string(), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn rust_log_overrides_the_crate_level() {
        let filter = log_filter(Some("budget_dashboard=debug")).to_string();
        assert!(filter.contains("budget_dashboard=debug"), "got {filter}");
        assert!(!filter.contains("info"), "got {filter}");
    }
}
