//! Logging and tracing utilities.
//!
//! The crate itself only emits `tracing` events: a `trace!` per decode and a
//! `debug!` whenever insensitive parsing corrects the casing of a segment or a
//! scope candidate is tried. These helpers install a subscriber that writes
//! those events to **stderr** so they never mix with a program's own output.
//!
//! # Quick Start
//!
//! ```no_run
//! use azurerm_resource_ids::ids::synapse::WorkspaceId;
//! use azurerm_resource_ids::{init_logging, ResourceId};
//!
//! init_logging();
//! let id = WorkspaceId::parse_insensitively(
//!     "/subscriptions/sub1/resourcegroups/rg1/providers/Microsoft.Synapse/Workspaces/ws1",
//! );
//! tracing::info!(ok = id.is_ok(), "parsed workspace");
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Controls log levels (e.g., `info`, `debug`, `azurerm_resource_ids=debug`)
//!
//! # Examples
//!
//! ```bash
//! # Show casing corrections and scope fallbacks
//! RUST_LOG=azurerm_resource_ids=debug ./my-tool
//!
//! # Show every decode
//! RUST_LOG=azurerm_resource_ids=trace ./my-tool
//! ```

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn stderr_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

/// Initialize the default logging subscriber.
///
/// This sets up a `tracing` subscriber that:
/// - Writes to **stderr**
/// - Respects the `RUST_LOG` environment variable for filtering
/// - Defaults to `info` level if `RUST_LOG` is not set
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_logging() {
    init_logging_with_default("info");
}

/// Initialize logging with a custom default level.
///
/// Like [`init_logging`], but `default_level` is used when `RUST_LOG` is not
/// set (e.g. `"debug"` to see every casing correction).
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_logging_with_default(default_level: &str) {
    tracing_subscriber::registry()
        .with(filter(default_level))
        .with(stderr_layer())
        .init();
}

/// Try to initialize logging, returning false if already initialized.
///
/// Unlike [`init_logging`], this function does not panic if a subscriber
/// has already been set, which makes it safe to call from tests.
pub fn try_init_logging() -> bool {
    tracing_subscriber::registry()
        .with(filter("info"))
        .with(stderr_layer())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_parsing() {
        assert!(EnvFilter::try_new("info").is_ok());
        assert!(EnvFilter::try_new("azurerm_resource_ids=debug").is_ok());
        assert!(EnvFilter::try_new("warn,azurerm_resource_ids=trace").is_ok());
    }

    #[test]
    fn test_try_init_logging_is_idempotent() {
        // Other tests may have installed the global subscriber already
        let _ = try_init_logging();
        assert!(!try_init_logging());
    }
}
