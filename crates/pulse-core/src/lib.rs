//! pulse-core
//!
//! Financial aggregation and budget rule engine for budget_pulse.
//! Depends on pulse-domain. No CLI, no terminal I/O, no storage.
//!
//! Every service here is a pure function of the snapshot it is given: the
//! same inputs always produce the same [`pulse_domain::DashboardMetrics`].

pub mod balance_accumulator;
pub mod category_index;
pub mod dashboard_service;
pub mod error;
pub mod metrics_composer;
pub mod period_aggregator;
pub mod period_service;
pub mod presentation;
pub mod register_service;
pub mod rule_resolver;

pub use balance_accumulator::*;
pub use category_index::*;
pub use dashboard_service::*;
pub use error::{CoreError, CoreResult};
pub use metrics_composer::*;
pub use period_aggregator::*;
pub use period_service::*;
pub use presentation::*;
pub use register_service::*;
pub use rule_resolver::*;
