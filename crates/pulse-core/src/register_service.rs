//! Transaction register rows, newest first.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pulse_domain::{DashboardSnapshot, DateWindow, TransactionId, TransactionKind};

use crate::{BalanceAccumulator, BalanceTotals, CategoryIndex, CoreResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRow {
    pub transaction_id: TransactionId,
    pub date: NaiveDate,
    pub description: String,
    pub category_name: String,
    pub kind: TransactionKind,
    /// Signed movement of cash, taken from the stored amount.
    pub cash_leg: Decimal,
    /// Opposite movement of the savings pot, only on Savings categories.
    pub savings_leg: Option<Decimal>,
    /// Cash balance right after this transaction, over the whole history.
    pub running_balance: Decimal,
}

pub struct RegisterService;

impl RegisterService {
    pub fn rows(
        snapshot: &DashboardSnapshot,
        window: DateWindow,
    ) -> CoreResult<Vec<RegisterRow>> {
        let index = CategoryIndex::new(&snapshot.categories);

        let mut totals = BalanceTotals::default();
        let mut in_window = Vec::new();
        for txn in BalanceAccumulator::chronological(&snapshot.transactions) {
            BalanceAccumulator::apply(&mut totals, txn, &index)?;
            if window.contains(txn.date) {
                in_window.push((txn, totals.cash_balance));
            }
        }

        let mut rows: Vec<RegisterRow> = in_window
            .into_iter()
            .map(|(txn, running_balance)| {
                let cash_leg = txn.amount;
                RegisterRow {
                    transaction_id: txn.id,
                    date: txn.date,
                    description: txn.description.clone(),
                    category_name: index.display_name(txn.category_id).to_string(),
                    kind: txn.kind,
                    cash_leg,
                    savings_leg: index.is_savings(txn.category_id).then(|| -cash_leg),
                    running_balance,
                }
            })
            .collect();
        rows.sort_by(|a, b| (b.date, b.transaction_id).cmp(&(a.date, a.transaction_id)));
        Ok(rows)
    }
}
