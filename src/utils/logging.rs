//! Logging utilities
//!
//! Wire traffic is reported through `log`; this sends it to stdout.

use env_logger::{Builder, Env, Target};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Setup logging for the client
pub fn setup_logging() {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stdout)
        .init();
}
