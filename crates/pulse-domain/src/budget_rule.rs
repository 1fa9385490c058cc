//! Time-bounded needs/wants/savings allocation rules.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::RuleId;

/// One of the three allocation buckets a rule splits income into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AllocationBucket {
    Needs,
    Wants,
    Savings,
}

impl AllocationBucket {
    pub const ALL: [AllocationBucket; 3] = [
        AllocationBucket::Needs,
        AllocationBucket::Wants,
        AllocationBucket::Savings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AllocationBucket::Needs => "Needs",
            AllocationBucket::Wants => "Wants",
            AllocationBucket::Savings => "Savings",
        }
    }
}

impl fmt::Display for AllocationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whole-percentage split of income (50 means 50%).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllocationRatios {
    pub needs: Decimal,
    pub wants: Decimal,
    pub savings: Decimal,
}

impl AllocationRatios {
    pub fn new(needs: Decimal, wants: Decimal, savings: Decimal) -> Self {
        Self {
            needs,
            wants,
            savings,
        }
    }

    /// The classic 50/30/20 split.
    pub fn fifty_thirty_twenty() -> Self {
        Self::new(Decimal::from(50), Decimal::from(30), Decimal::from(20))
    }

    pub fn get(&self, bucket: AllocationBucket) -> Decimal {
        match bucket {
            AllocationBucket::Needs => self.needs,
            AllocationBucket::Wants => self.wants,
            AllocationBucket::Savings => self.savings,
        }
    }

    /// Converts a bucket's percentage into a fraction of one.
    pub fn fraction(&self, bucket: AllocationBucket) -> Decimal {
        self.get(bucket) / Decimal::ONE_HUNDRED
    }

    pub fn total(&self) -> Decimal {
        self.needs + self.wants + self.savings
    }

    /// Short `50% / 30% / 20%` label for listings.
    pub fn label(&self) -> String {
        format!(
            "{}% / {}% / {}%",
            self.needs.normalize(),
            self.wants.normalize(),
            self.savings.normalize()
        )
    }
}

impl Default for AllocationRatios {
    fn default() -> Self {
        Self::fifty_thirty_twenty()
    }
}

/// A named allocation rule that applies from `start_date` until `end_date`
/// (inclusive), or indefinitely when `end_date` is absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetRule {
    pub id: RuleId,
    pub name: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub ratios: AllocationRatios,
}

impl BudgetRule {
    pub fn new(
        id: RuleId,
        name: impl Into<String>,
        start_date: NaiveDate,
        ratios: AllocationRatios,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            start_date,
            end_date: None,
            ratios,
        }
    }

    pub fn ending(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn is_open_ended(&self) -> bool {
        self.end_date.is_none()
    }

    /// True when `date` falls inside the rule's validity window.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && self.end_date.map_or(true, |end| end >= date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn covers_is_inclusive_on_both_ends() {
        let rule = BudgetRule::new(1, "Q1", date(2024, 1, 1), AllocationRatios::default())
            .ending(date(2024, 3, 31));
        assert!(rule.covers(date(2024, 1, 1)));
        assert!(rule.covers(date(2024, 3, 31)));
        assert!(!rule.covers(date(2023, 12, 31)));
        assert!(!rule.covers(date(2024, 4, 1)));
    }

    #[test]
    fn open_ended_rule_covers_future_dates() {
        let rule = BudgetRule::new(1, "Forever", date(2020, 6, 1), AllocationRatios::default());
        assert!(rule.is_open_ended());
        assert!(rule.covers(date(2099, 1, 1)));
    }

    #[test]
    fn ratios_convert_to_fractions() {
        let ratios = AllocationRatios::new(dec!(60), dec!(25), dec!(15));
        assert_eq!(ratios.fraction(AllocationBucket::Needs), dec!(0.6));
        assert_eq!(ratios.fraction(AllocationBucket::Savings), dec!(0.15));
        assert_eq!(ratios.total(), dec!(100));
        assert_eq!(ratios.label(), "60% / 25% / 15%");
    }
}
