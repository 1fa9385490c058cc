//! Domain types representing cash-flow transactions.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    common::{CategoryId, TransactionId},
    DomainError,
};

/// Direction recorded by the data store for a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        if normalized.eq_ignore_ascii_case("Income") {
            Ok(TransactionKind::Income)
        } else if normalized.eq_ignore_ascii_case("Expense") {
            Ok(TransactionKind::Expense)
        } else {
            Err(DomainError::UnknownTransactionKind(value.to_string()))
        }
    }
}

/// A single income or expense entry.
///
/// `amount` carries the cash-flow direction: negative when money leaves cash
/// (including transfers into savings), positive when money enters it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(default)]
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(id: TransactionId, kind: TransactionKind, amount: Decimal, date: NaiveDate) -> Self {
        Self {
            id,
            description: String::new(),
            amount,
            kind,
            category_id: None,
            date,
        }
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Processing order used by every balance computation.
    pub fn chronological_key(&self) -> (NaiveDate, TransactionId) {
        (self.date, self.id)
    }
}
