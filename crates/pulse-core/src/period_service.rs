use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use pulse_domain::{Granularity, ReportPeriod, Transaction};

/// Period selection helpers for the dashboard picker.
pub struct PeriodService;

impl PeriodService {
    /// Distinct transaction years, newest first. Falls back to the year of
    /// `today` when there are no transactions.
    pub fn available_years(transactions: &[Transaction], today: NaiveDate) -> Vec<i32> {
        let years: BTreeSet<i32> = transactions.iter().map(|txn| txn.date.year()).collect();
        if years.is_empty() {
            return vec![today.year()];
        }
        years.into_iter().rev().collect()
    }

    /// The current month when its year is selectable, otherwise January of
    /// the newest available year.
    pub fn default_selection(years: &[i32], today: NaiveDate) -> ReportPeriod {
        let current = ReportPeriod::containing(Granularity::Monthly, today);
        match years.first() {
            Some(_) if years.contains(&today.year()) => current,
            Some(&newest) => ReportPeriod::monthly(newest, 1).unwrap_or(current),
            None => current,
        }
    }
}
