//! Store-assigned identifiers.

/// Identifier of a [`crate::Category`] as assigned by the data store.
pub type CategoryId = i64;

/// Identifier of a [`crate::Transaction`] as assigned by the data store.
pub type TransactionId = i64;

/// Identifier of a [`crate::BudgetRule`] as assigned by the data store.
pub type RuleId = i64;
