#![doc(test(attr(deny(warnings))))]

//! Maintenance Core is the persistence and reporting engine behind a
//! community maintenance tracker: a JSON-backed record store, dashboard
//! summaries, and yearly CSV report exports.

pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Maintenance Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
