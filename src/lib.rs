#![doc(test(attr(deny(warnings))))]

//! Budget Pulse turns a snapshot of categorised transactions and budget rules
//! into dashboard figures: cash and savings balances, period totals and the
//! needs/wants/savings allocation of the active budget rule.

pub mod cli;
pub mod errors;
pub mod snapshot;
pub mod summary;
pub mod utils;

pub use pulse_config as config;
pub use pulse_core as engine;
pub use pulse_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Pulse tracing initialized.");
    });
}
