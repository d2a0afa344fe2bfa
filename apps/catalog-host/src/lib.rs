//! # Catalog Host Library
//!
//! Everything the `catalog-host` binary runs, kept in a library so the
//! command layer and the host loop can be tested without a process.
//!
//! ## Module Organization
//! ```text
//! catalog_host/
//! ├── lib.rs          ◄─── You are here (tracing setup)
//! ├── config.rs       ◄─── Environment configuration
//! ├── commands.rs     ◄─── One function per catalog operation
//! ├── error.rs        ◄─── ApiError / ErrorResponse
//! └── host.rs         ◄─── JSON-lines request loop
//! ```
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  stdin line ──► host::handle_line ──► Request (decoded)                 │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                                  commands::update_item                  │
//! │                                          │                              │
//! │                      ┌───────────────────┴───────────────┐              │
//! │                      ▼                                   ▼              │
//! │               ApiResponse<T>                        ApiError            │
//! │                      │                                   │              │
//! │                      └──────────► stdout line ◄──────────┘              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod host;

use tracing_subscriber::EnvFilter;

use config::HostConfig;

/// Installs the global tracing subscriber.
///
/// Logs go to stderr; stdout carries responses only.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (wins over `CATALOG_LOG_FILTER`)
/// - `RUST_LOG=catalog=trace` - Show trace for catalog crates only
/// - Default: `info,catalog=debug`
pub fn init_tracing(config: &HostConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.log_ansi)
        .init();
}
