//! Editor-side drafts for new or edited records and the checks they must
//! pass before being sent to the data store.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    AllocationRatios, BudgetRule, Category, CategoryId, ColorHex, DomainError, RuleId,
    SemanticType, Transaction, TransactionId, TransactionKind,
};

/// What the user is recording, as offered by the transaction editor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Income,
    Expense,
    TransferToSavings,
    WithdrawalFromSavings,
}

impl EntryKind {
    /// Kind stored for this entry; withdrawals bring cash in.
    pub fn transaction_kind(self) -> TransactionKind {
        match self {
            EntryKind::Income | EntryKind::WithdrawalFromSavings => TransactionKind::Income,
            EntryKind::Expense | EntryKind::TransferToSavings => TransactionKind::Expense,
        }
    }

    pub fn accepts(self, semantic_type: SemanticType) -> bool {
        match self {
            EntryKind::Income => semantic_type == SemanticType::Income,
            EntryKind::Expense => {
                matches!(semantic_type, SemanticType::Needs | SemanticType::Wants)
            }
            EntryKind::TransferToSavings | EntryKind::WithdrawalFromSavings => {
                semantic_type == SemanticType::Savings
            }
        }
    }

    /// Categories the editor offers for this entry kind.
    pub fn eligible_categories(self, categories: &[Category]) -> Vec<&Category> {
        categories
            .iter()
            .filter(|category| self.accepts(category.semantic_type))
            .collect()
    }

    /// Recovers the entry kind of a stored transaction for editing.
    pub fn of(transaction: &Transaction, category: Option<&Category>) -> Self {
        let savings = category.map_or(false, Category::is_savings);
        match (transaction.kind, savings) {
            (TransactionKind::Income, true) => EntryKind::WithdrawalFromSavings,
            (TransactionKind::Income, false) => EntryKind::Income,
            (TransactionKind::Expense, true) => EntryKind::TransferToSavings,
            (TransactionKind::Expense, false) => EntryKind::Expense,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
            EntryKind::TransferToSavings => "Transfer to Savings",
            EntryKind::WithdrawalFromSavings => "Withdrawal from Savings",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unsaved transaction as entered by the user; the amount is a magnitude.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: Decimal,
    pub entry: EntryKind,
    pub category_id: Option<CategoryId>,
    pub date: NaiveDate,
}

impl TransactionDraft {
    /// Signed amount as stored: expenses negative, income positive, whatever
    /// sign was typed.
    pub fn signed_amount(&self) -> Decimal {
        match self.entry.transaction_kind() {
            TransactionKind::Expense => -self.amount.abs(),
            TransactionKind::Income => self.amount.abs(),
        }
    }

    pub fn validate(&self, categories: &[Category]) -> Result<(), DomainError> {
        if self.description.trim().is_empty() {
            return Err(DomainError::Validation("description is required".into()));
        }
        if self.amount <= Decimal::ZERO {
            return Err(DomainError::Validation(
                "amount must be greater than zero".into(),
            ));
        }
        let category_id = self
            .category_id
            .ok_or_else(|| DomainError::Validation("a category is required".into()))?;
        let category = categories
            .iter()
            .find(|category| category.id == category_id)
            .ok_or_else(|| {
                DomainError::Validation(format!("category {} does not exist", category_id))
            })?;
        if !self.entry.accepts(category.semantic_type) {
            return Err(DomainError::Validation(format!(
                "category `{}` ({}) cannot be used for {}",
                category.name, category.semantic_type, self.entry
            )));
        }
        Ok(())
    }

    pub fn into_transaction(
        self,
        id: TransactionId,
        categories: &[Category],
    ) -> Result<Transaction, DomainError> {
        self.validate(categories)?;
        let amount = self.signed_amount();
        Ok(Transaction {
            id,
            description: self.description.trim().to_string(),
            amount,
            kind: self.entry.transaction_kind(),
            category_id: self.category_id,
            date: self.date,
        })
    }
}

/// Unsaved budget rule as entered in the rule editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetRuleDraft {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub ratios: AllocationRatios,
}

impl BudgetRuleDraft {
    /// New drafts start at 50/30/20 with no end date.
    pub fn starting(start_date: NaiveDate) -> Self {
        Self {
            name: String::new(),
            start_date,
            end_date: None,
            ratios: AllocationRatios::fifty_thirty_twenty(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation("rule name is required".into()));
        }
        if self.ratios.total() != Decimal::ONE_HUNDRED {
            return Err(DomainError::Validation(format!(
                "ratios must add up to 100, got {}",
                self.ratios.total().normalize()
            )));
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(DomainError::InvalidWindow {
                    start: self.start_date,
                    end,
                });
            }
        }
        Ok(())
    }

    pub fn into_rule(self, id: RuleId) -> Result<BudgetRule, DomainError> {
        self.validate()?;
        Ok(BudgetRule {
            id,
            name: self.name.trim().to_string(),
            start_date: self.start_date,
            end_date: self.end_date,
            ratios: self.ratios,
        })
    }
}

/// Unsaved user-defined category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub semantic_type: SemanticType,
    pub color: Option<ColorHex>,
}

impl CategoryDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation("category name is required".into()));
        }
        Ok(())
    }

    /// Categories created by the user are never predefined.
    pub fn into_category(self, id: CategoryId) -> Result<Category, DomainError> {
        self.validate()?;
        Ok(Category {
            id,
            name: self.name.trim().to_string(),
            description: self.description,
            color: Some(self.color.unwrap_or_default()),
            semantic_type: self.semantic_type,
            is_predefined: false,
        })
    }
}
