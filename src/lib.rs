//! Bank Core manages a local table of bank account records: create, modify,
//! inquire, deposit, withdraw, list, and delete, each a validated single
//! storage statement behind an explicit store handle.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ops;
pub mod storage;
pub mod validate;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("bank_core=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Bank Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
