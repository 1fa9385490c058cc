//! View-ready figures derived from [`DashboardMetrics`]. Nothing here draws.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use pulse_domain::{AllocationBucket, ColorHex, DashboardMetrics};

use crate::{CoreError, CoreResult};

/// Caption shown in place of the chart when nothing was spent.
pub const NO_SPENDING_LABEL: &str = "No Spending Data";

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketProgress {
    pub bucket: AllocationBucket,
    /// Whole-number percentage of income allotted to the bucket.
    pub ratio: Decimal,
    pub actual: Decimal,
    pub target: Decimal,
    /// Fill level, `0..=100`.
    pub percent: u8,
}

pub struct AllocationProgress;

impl AllocationProgress {
    pub fn for_metrics(metrics: &DashboardMetrics) -> Vec<BucketProgress> {
        AllocationBucket::ALL
            .iter()
            .map(|&bucket| {
                let actual = metrics.actual(bucket);
                let target = metrics.target(bucket);
                BucketProgress {
                    bucket,
                    ratio: metrics.ratios.get(bucket),
                    actual,
                    target,
                    percent: Self::percent(actual, target),
                }
            })
            .collect()
    }

    /// `actual / target` as a truncated percentage clamped to `0..=100`.
    /// A non-positive target always reads as zero.
    pub fn percent(actual: Decimal, target: Decimal) -> u8 {
        if target <= Decimal::ZERO {
            return 0;
        }
        actual
            .checked_div(target)
            .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
            .map(|value| value.clamp(Decimal::ZERO, ONE_HUNDRED).trunc())
            .and_then(|value| value.to_u8())
            .unwrap_or(100)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartSlice {
    pub label: String,
    pub total: Decimal,
    pub color: ColorHex,
    /// Share of the chart total, in percent.
    pub share: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpendingChart {
    pub slices: Vec<ChartSlice>,
    pub total: Decimal,
}

impl SpendingChart {
    pub fn from_metrics(metrics: &DashboardMetrics) -> CoreResult<Self> {
        let overflow = |figure| CoreError::FigureOverflow { figure };
        let total = metrics
            .spending_by_category
            .values()
            .try_fold(Decimal::ZERO, |sum, spend| sum.checked_add(spend.total))
            .ok_or_else(|| overflow("chart total"))?;
        let mut slices = metrics
            .spending_by_category
            .iter()
            .map(|(label, spend)| -> CoreResult<ChartSlice> {
                let share = if total > Decimal::ZERO {
                    spend
                        .total
                        .checked_div(total)
                        .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
                        .ok_or_else(|| overflow("chart share"))?
                        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                } else {
                    Decimal::ZERO
                };
                Ok(ChartSlice {
                    label: label.clone(),
                    total: spend.total,
                    color: spend.color.clone(),
                    share,
                })
            })
            .collect::<CoreResult<Vec<ChartSlice>>>()?;
        slices.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.label.cmp(&b.label)));
        Ok(Self { slices, total })
    }

    /// True when the chart has no entries or no entry with positive spending.
    pub fn is_empty(&self) -> bool {
        self.slices.iter().all(|slice| slice.total <= Decimal::ZERO)
    }
}
