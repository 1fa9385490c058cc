use serde::{Deserialize, Serialize};

use crate::{
    BudgetRule, BudgetRuleRecord, Category, CategoryRecord, DomainError, Transaction,
    TransactionRecord,
};

/// One consistent, already-materialised view of the data store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budget_rules: Vec<BudgetRule>,
}

impl DashboardSnapshot {
    pub fn new(
        categories: Vec<Category>,
        transactions: Vec<Transaction>,
        budget_rules: Vec<BudgetRule>,
    ) -> Self {
        Self {
            categories,
            transactions,
            budget_rules,
        }
    }

    /// Maps raw store records into domain values, failing on the first
    /// record that cannot be interpreted.
    pub fn from_records(
        categories: Vec<CategoryRecord>,
        transactions: Vec<TransactionRecord>,
        budget_rules: Vec<BudgetRuleRecord>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            categories: categories
                .into_iter()
                .map(Category::try_from)
                .collect::<Result<_, _>>()?,
            transactions: transactions
                .into_iter()
                .map(Transaction::try_from)
                .collect::<Result<_, _>>()?,
            budget_rules: budget_rules
                .into_iter()
                .map(BudgetRule::try_from)
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.transactions.is_empty() && self.budget_rules.is_empty()
    }
}
