//! Result structures produced by the dashboard engine.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AllocationBucket, AllocationRatios, ColorHex, ReportPeriod};

/// Total spent in one chart entry and the color to draw it with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySpend {
    pub total: Decimal,
    pub color: ColorHex,
}

/// Immutable snapshot of every figure the dashboard shows for one period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub period: ReportPeriod,
    /// Cash balance as of the cutoff date, cumulative since inception.
    pub cash_balance: Decimal,
    /// Needs plus wants spending in the period; savings transfers excluded.
    pub total_spent_in_period: Decimal,
    pub savings_in_period: Decimal,
    /// Savings pot as of the cutoff date, cumulative since inception.
    pub total_savings_pot: Decimal,
    pub income_in_period: Decimal,
    /// Keyed by category name; same-name categories share one entry.
    pub spending_by_category: BTreeMap<String, CategorySpend>,
    pub active_rule_name: String,
    pub ratios: AllocationRatios,
    pub needs_target: Decimal,
    pub wants_target: Decimal,
    pub savings_target: Decimal,
    pub needs_actual: Decimal,
    pub wants_actual: Decimal,
}

impl DashboardMetrics {
    pub fn target(&self, bucket: AllocationBucket) -> Decimal {
        match bucket {
            AllocationBucket::Needs => self.needs_target,
            AllocationBucket::Wants => self.wants_target,
            AllocationBucket::Savings => self.savings_target,
        }
    }

    pub fn actual(&self, bucket: AllocationBucket) -> Decimal {
        match bucket {
            AllocationBucket::Needs => self.needs_actual,
            AllocationBucket::Wants => self.wants_actual,
            AllocationBucket::Savings => self.savings_in_period,
        }
    }
}
