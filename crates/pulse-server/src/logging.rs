// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the Pulse server.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: info for pulse and request traces, errors only for HTTP clients
//! pulse-server
//!
//! # Debug output, including corpus sizes and parsed replies
//! RUST_LOG=pulse=debug pulse-server
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "pulse=info,tower_http=info,octocrab=error,reqwest=error";

/// Initialize the logging subsystem, writing to stderr.
pub fn init_logging() {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
