use rust_decimal::Decimal;

use pulse_domain::{AllocationBucket, DashboardMetrics, ReportPeriod};

use crate::{BalanceTotals, CoreError, CoreResult, PeriodTotals, ResolvedRule};

/// Combines the resolved rule and both aggregation passes into one result.
pub struct MetricsComposer;

impl MetricsComposer {
    pub fn compose(
        rule: &ResolvedRule,
        balances: BalanceTotals,
        totals: PeriodTotals,
        period: ReportPeriod,
    ) -> CoreResult<DashboardMetrics> {
        let income = totals.income;
        let target = |bucket| Self::target(income, rule.ratios.fraction(bucket));
        Ok(DashboardMetrics {
            period,
            cash_balance: balances.cash_balance,
            total_spent_in_period: totals.total_spent()?,
            savings_in_period: totals.savings_contribution,
            total_savings_pot: balances.savings_pot_total,
            income_in_period: income,
            needs_target: target(AllocationBucket::Needs)?,
            wants_target: target(AllocationBucket::Wants)?,
            savings_target: target(AllocationBucket::Savings)?,
            needs_actual: totals.needs_spend,
            wants_actual: totals.wants_spend,
            spending_by_category: totals.per_category,
            active_rule_name: rule.name.clone(),
            ratios: rule.ratios,
        })
    }

    /// `income × fraction`; zero income always yields a zero target.
    pub fn target(income: Decimal, fraction: Decimal) -> CoreResult<Decimal> {
        income
            .checked_mul(fraction)
            .ok_or(CoreError::FigureOverflow {
                figure: "allocation target",
            })
    }
}
