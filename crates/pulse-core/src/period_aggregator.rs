//! Income, spending and savings totals within one reporting window.

use std::collections::{btree_map::Entry, BTreeMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pulse_domain::{CategorySpend, DateWindow, SemanticType, Transaction, TransactionKind};

use crate::{BalanceAccumulator, CategoryIndex, CoreError, CoreResult};

/// Period-scoped totals. Spending figures are positive magnitudes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodTotals {
    pub income: Decimal,
    pub needs_spend: Decimal,
    pub wants_spend: Decimal,
    pub savings_contribution: Decimal,
    /// Non-savings expenses keyed by category name.
    pub per_category: BTreeMap<String, CategorySpend>,
}

impl PeriodTotals {
    /// Needs plus wants; savings contributions are not spending.
    pub fn total_spent(&self) -> CoreResult<Decimal> {
        self.needs_spend
            .checked_add(self.wants_spend)
            .ok_or(CoreError::FigureOverflow {
                figure: "total spent",
            })
    }
}

pub struct PeriodAggregator;

impl PeriodAggregator {
    pub fn aggregate(
        transactions: &[Transaction],
        index: &CategoryIndex<'_>,
        window: DateWindow,
    ) -> CoreResult<PeriodTotals> {
        let mut totals = PeriodTotals::default();
        for txn in BalanceAccumulator::chronological(transactions)
            .into_iter()
            .filter(|txn| window.contains(txn.date))
        {
            Self::apply(&mut totals, txn, index)?;
        }
        tracing::debug!(
            %window,
            income = %totals.income,
            needs = %totals.needs_spend,
            wants = %totals.wants_spend,
            savings = %totals.savings_contribution,
            categories = totals.per_category.len(),
            "aggregated period"
        );
        Ok(totals)
    }

    fn apply(
        totals: &mut PeriodTotals,
        txn: &Transaction,
        index: &CategoryIndex<'_>,
    ) -> CoreResult<()> {
        let add = |total: Decimal, amount: Decimal| {
            total.checked_add(amount).ok_or(CoreError::Overflow {
                transaction_id: txn.id,
            })
        };
        let semantic_type = index.semantic_type(txn.category_id);
        let magnitude = -txn.amount;
        match (txn.kind, semantic_type) {
            (TransactionKind::Income, Some(SemanticType::Savings)) => {}
            (TransactionKind::Income, _) => totals.income = add(totals.income, txn.amount)?,
            (TransactionKind::Expense, Some(SemanticType::Savings)) => {
                totals.savings_contribution = add(totals.savings_contribution, magnitude)?;
            }
            (TransactionKind::Expense, other) => {
                match other {
                    Some(SemanticType::Needs) => {
                        totals.needs_spend = add(totals.needs_spend, magnitude)?;
                    }
                    Some(SemanticType::Wants) => {
                        totals.wants_spend = add(totals.wants_spend, magnitude)?;
                    }
                    _ => {}
                }
                // Two categories sharing a name land in the same entry;
                // the first color seen is kept.
                match totals
                    .per_category
                    .entry(index.display_name(txn.category_id).to_string())
                {
                    Entry::Occupied(mut entry) => {
                        let spend = entry.get_mut();
                        spend.total = add(spend.total, magnitude)?;
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(CategorySpend {
                            total: magnitude,
                            color: index.display_color(txn.category_id),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pulse_domain::{Category, ColorHex};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn january() -> DateWindow {
        DateWindow::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap()
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let index = CategoryIndex::default();
        let transactions = vec![
            Transaction::new(1, TransactionKind::Income, dec!(1), date(2023, 12, 31)),
            Transaction::new(2, TransactionKind::Income, dec!(10), date(2024, 1, 1)),
            Transaction::new(3, TransactionKind::Income, dec!(100), date(2024, 1, 31)),
            Transaction::new(4, TransactionKind::Income, dec!(1000), date(2024, 2, 1)),
        ];
        let totals = PeriodAggregator::aggregate(&transactions, &index, january()).unwrap();
        assert_eq!(totals.income, dec!(110));
    }

    #[test]
    fn savings_withdrawal_is_not_income() {
        let categories = vec![Category::new(1, "Jar", SemanticType::Savings)];
        let index = CategoryIndex::new(&categories);
        let transactions = vec![
            Transaction::new(1, TransactionKind::Income, dec!(75), date(2024, 1, 3)).with_category(1),
        ];
        let totals = PeriodAggregator::aggregate(&transactions, &index, january()).unwrap();
        assert_eq!(totals.income, Decimal::ZERO);
        assert_eq!(totals.savings_contribution, Decimal::ZERO);
        assert!(totals.per_category.is_empty());
    }

    #[test]
    fn expense_magnitude_is_negated_amount_whatever_its_sign() {
        let categories = vec![Category::new(1, "Refunds", SemanticType::Wants)];
        let index = CategoryIndex::new(&categories);
        let transactions = vec![
            Transaction::new(1, TransactionKind::Expense, dec!(-40), date(2024, 1, 3)).with_category(1),
            Transaction::new(2, TransactionKind::Expense, dec!(15), date(2024, 1, 4)).with_category(1),
        ];
        let totals = PeriodAggregator::aggregate(&transactions, &index, january()).unwrap();
        assert_eq!(totals.wants_spend, dec!(25));
        assert_eq!(totals.per_category["Refunds"].total, dec!(25));
    }

    #[test]
    fn income_typed_expense_feeds_chart_but_no_bucket() {
        let categories = vec![Category::new(1, "Salary", SemanticType::Income)
            .with_color(ColorHex::parse("#00AA00").unwrap())];
        let index = CategoryIndex::new(&categories);
        let transactions = vec![
            Transaction::new(1, TransactionKind::Expense, dec!(-30), date(2024, 1, 9)).with_category(1),
        ];
        let totals = PeriodAggregator::aggregate(&transactions, &index, january()).unwrap();
        assert_eq!(totals.total_spent().unwrap(), Decimal::ZERO);
        let entry = &totals.per_category["Salary"];
        assert_eq!(entry.total, dec!(30));
        assert_eq!(entry.color.as_str(), "#00AA00");
    }
}
