//! pulse-domain
//!
//! Pure domain models (Category, Transaction, BudgetRule, report periods, dashboard results).
//! No I/O, no CLI, no storage. Only data types, closed enums and the record mapping boundary.

pub mod budget_rule;
pub mod category;
pub mod color;
pub mod common;
pub mod drafts;
pub mod error;
pub mod metrics;
pub mod period;
pub mod records;
pub mod snapshot;
pub mod transaction;

pub use budget_rule::*;
pub use category::*;
pub use color::*;
pub use common::*;
pub use drafts::*;
pub use error::DomainError;
pub use metrics::*;
pub use period::*;
pub use records::*;
pub use snapshot::*;
pub use transaction::*;

// Re-export common dependencies so consumers can rely on this crate as a façade.
pub use chrono;
pub use rust_decimal;
