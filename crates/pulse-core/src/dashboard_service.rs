//! Per-period dashboard calculation over a snapshot.

use chrono::NaiveDate;

use pulse_domain::{DashboardMetrics, DashboardSnapshot, ReportPeriod};

use crate::{
    BalanceAccumulator, CategoryIndex, CoreResult, MetricsComposer, PeriodAggregator, RuleResolver,
};

pub struct DashboardService;

impl DashboardService {
    /// Computes every dashboard figure for `period`. Balances run up to the
    /// last day of the period.
    pub fn calculate(
        snapshot: &DashboardSnapshot,
        period: ReportPeriod,
    ) -> CoreResult<DashboardMetrics> {
        Self::calculate_as_of(snapshot, period, period.end())
    }

    /// Same as [`DashboardService::calculate`] with an explicit balance cutoff.
    pub fn calculate_as_of(
        snapshot: &DashboardSnapshot,
        period: ReportPeriod,
        cutoff: NaiveDate,
    ) -> CoreResult<DashboardMetrics> {
        RuleResolver::validate(&snapshot.budget_rules)?;

        let index = CategoryIndex::new(&snapshot.categories);
        let rule = RuleResolver::resolve(&snapshot.budget_rules, period.reference_date());
        let balances = BalanceAccumulator::accumulate(&snapshot.transactions, &index, cutoff)?;
        let totals = PeriodAggregator::aggregate(&snapshot.transactions, &index, period.window())?;

        tracing::info!(
            %period,
            rule = %rule.name,
            transactions = snapshot.transactions.len(),
            "dashboard metrics calculated"
        );
        MetricsComposer::compose(&rule, balances, totals, period)
    }
}
