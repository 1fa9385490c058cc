//! Snapshot files: the store's record tables serialised as one JSON object.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use pulse_domain::{BudgetRuleRecord, CategoryRecord, DashboardSnapshot, TransactionRecord};

use crate::errors::{BudgetError, Result};

/// On-disk layout of a snapshot; every table may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotFile {
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
    #[serde(default)]
    pub budget_rules: Vec<BudgetRuleRecord>,
}

impl SnapshotFile {
    pub fn into_snapshot(self) -> Result<DashboardSnapshot> {
        Ok(DashboardSnapshot::from_records(
            self.categories,
            self.transactions,
            self.budget_rules,
        )?)
    }
}

pub fn parse_snapshot(json: &str) -> Result<DashboardSnapshot> {
    let file: SnapshotFile = serde_json::from_str(json)?;
    file.into_snapshot()
}

pub fn load_snapshot(path: &Path) -> Result<DashboardSnapshot> {
    let data = fs::read_to_string(path).map_err(|err| {
        BudgetError::SnapshotError(format!("cannot read {}: {}", path.display(), err))
    })?;
    let snapshot = parse_snapshot(&data)?;
    tracing::info!(
        path = %path.display(),
        categories = snapshot.categories.len(),
        transactions = snapshot.transactions.len(),
        rules = snapshot.budget_rules.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}
