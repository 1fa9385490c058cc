//! String-typed records as delivered by the external data store, and their
//! mapping into the closed domain types.
//!
//! The data store reports classifications as free-form strings (`"Needs"`,
//! `"Expense"`) and timestamps with a time-of-day component. Conversion is the
//! only place those strings are interpreted; anything unrecognised is
//! rejected with the id of the offending record.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    AllocationRatios, BudgetRule, Category, CategoryId, ColorHex, DomainError, RuleId,
    SemanticType, Transaction, TransactionId, TransactionKind,
};

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Row of the store's `categories` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRecord {
    pub id: CategoryId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(rename = "type", default)]
    pub category_type: Option<String>,
    #[serde(default)]
    pub is_predefined: bool,
}

/// Row of the store's `transactions` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionRecord {
    pub id: TransactionId,
    #[serde(default)]
    pub description: Option<String>,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Joined by the store for display; the engine resolves names itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    pub transaction_date: String,
}

/// Row of the store's `budget_rules` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetRuleRecord {
    pub id: RuleId,
    #[serde(default)]
    pub name: Option<String>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub needs_ratio: Option<Decimal>,
    #[serde(default)]
    pub wants_ratio: Option<Decimal>,
    #[serde(default)]
    pub savings_ratio: Option<Decimal>,
}

/// Parses a store date, accepting plain dates, local timestamps and RFC 3339.
/// The time-of-day component is discarded.
pub fn parse_record_date(value: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(stamp.date());
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|stamp| stamp.date_naive())
        .map_err(|_| DomainError::InvalidDate(value.to_string()))
}

impl TryFrom<CategoryRecord> for Category {
    type Error = DomainError;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        let raw_type = record
            .category_type
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(DomainError::MissingField {
                record: "category",
                id: record.id,
                field: "type",
            })?;
        let semantic_type: SemanticType = raw_type
            .parse()
            .map_err(|err: DomainError| err.in_record("category", record.id))?;
        Ok(Category {
            id: record.id,
            name: record.name.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
            color: ColorHex::parse_lenient(record.color.as_deref()),
            semantic_type,
            is_predefined: record.is_predefined,
        })
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = DomainError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let kind: TransactionKind = record
            .kind
            .parse()
            .map_err(|err: DomainError| err.in_record("transaction", record.id))?;
        let date = parse_record_date(&record.transaction_date)
            .map_err(|err| err.in_record("transaction", record.id))?;
        Ok(Transaction {
            id: record.id,
            description: record.description.unwrap_or_default(),
            amount: record.amount,
            kind,
            category_id: record.category_id,
            date,
        })
    }
}

impl TryFrom<BudgetRuleRecord> for BudgetRule {
    type Error = DomainError;

    fn try_from(record: BudgetRuleRecord) -> Result<Self, Self::Error> {
        let start_date = parse_record_date(&record.start_date)
            .map_err(|err| err.in_record("budget rule", record.id))?;
        let end_date = record
            .end_date
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(parse_record_date)
            .transpose()
            .map_err(|err| err.in_record("budget rule", record.id))?;
        Ok(BudgetRule {
            id: record.id,
            name: record.name.unwrap_or_default(),
            start_date,
            end_date,
            ratios: AllocationRatios::new(
                record.needs_ratio.unwrap_or(Decimal::ZERO),
                record.wants_ratio.unwrap_or(Decimal::ZERO),
                record.savings_ratio.unwrap_or(Decimal::ZERO),
            ),
        })
    }
}
