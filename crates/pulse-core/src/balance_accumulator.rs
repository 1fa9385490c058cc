//! Cumulative cash and savings-pot balances over the whole history.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pulse_domain::Transaction;

use crate::{CategoryIndex, CoreError, CoreResult};

/// Balances as of a cutoff date, cumulative since the first transaction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceTotals {
    pub cash_balance: Decimal,
    pub savings_pot_total: Decimal,
}

pub struct BalanceAccumulator;

impl BalanceAccumulator {
    /// Transactions in processing order: ascending by `(date, id)`.
    pub fn chronological(transactions: &[Transaction]) -> Vec<&Transaction> {
        let mut ordered: Vec<&Transaction> = transactions.iter().collect();
        ordered.sort_by_key(|txn| txn.chronological_key());
        ordered
    }

    /// Walks the full history up to and including `cutoff`. Every amount
    /// moves cash; amounts on Savings categories move the pot the opposite
    /// way. Fails with the offending transaction id when a balance would
    /// leave the representable range.
    pub fn accumulate(
        transactions: &[Transaction],
        index: &CategoryIndex<'_>,
        cutoff: NaiveDate,
    ) -> CoreResult<BalanceTotals> {
        let mut totals = BalanceTotals::default();
        for txn in Self::chronological(transactions) {
            if txn.date > cutoff {
                break;
            }
            Self::apply(&mut totals, txn, index)?;
        }
        tracing::debug!(
            %cutoff,
            cash = %totals.cash_balance,
            pot = %totals.savings_pot_total,
            "accumulated balances"
        );
        Ok(totals)
    }

    pub(crate) fn apply(
        totals: &mut BalanceTotals,
        txn: &Transaction,
        index: &CategoryIndex<'_>,
    ) -> CoreResult<()> {
        let overflow = || CoreError::Overflow {
            transaction_id: txn.id,
        };
        totals.cash_balance = totals
            .cash_balance
            .checked_add(txn.amount)
            .ok_or_else(overflow)?;
        if index.is_savings(txn.category_id) {
            totals.savings_pot_total = totals
                .savings_pot_total
                .checked_sub(txn.amount)
                .ok_or_else(overflow)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_domain::{Category, SemanticType, TransactionKind};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn withdrawal_from_savings_shrinks_the_pot() {
        let categories = vec![Category::new(1, "Jar", SemanticType::Savings)];
        let index = CategoryIndex::new(&categories);
        let transactions = vec![
            Transaction::new(1, TransactionKind::Expense, dec!(-500), date(2024, 1, 1))
                .with_category(1),
            Transaction::new(2, TransactionKind::Income, dec!(120), date(2024, 2, 1))
                .with_category(1),
        ];
        let totals =
            BalanceAccumulator::accumulate(&transactions, &index, date(2024, 12, 31)).unwrap();
        assert_eq!(totals.cash_balance, dec!(-380));
        assert_eq!(totals.savings_pot_total, dec!(380));
    }

    #[test]
    fn cutoff_is_inclusive_and_later_entries_ignored() {
        let index = CategoryIndex::default();
        let transactions = vec![
            Transaction::new(2, TransactionKind::Income, dec!(10), date(2024, 1, 31)),
            Transaction::new(1, TransactionKind::Income, dec!(99), date(2024, 2, 1)),
        ];
        let totals =
            BalanceAccumulator::accumulate(&transactions, &index, date(2024, 1, 31)).unwrap();
        assert_eq!(totals.cash_balance, dec!(10));
        assert_eq!(totals.savings_pot_total, Decimal::ZERO);
    }

    #[test]
    fn chronological_breaks_same_day_ties_on_id() {
        let day = date(2024, 1, 1);
        let transactions = vec![
            Transaction::new(3, TransactionKind::Income, dec!(1), day),
            Transaction::new(1, TransactionKind::Income, dec!(1), day),
            Transaction::new(2, TransactionKind::Income, dec!(1), day.pred_opt().unwrap()),
        ];
        let ids: Vec<i64> = BalanceAccumulator::chronological(&transactions)
            .into_iter()
            .map(|txn| txn.id)
            .collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
