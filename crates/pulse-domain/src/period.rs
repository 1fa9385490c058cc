//! Reporting windows and the monthly/yearly periods the dashboard is computed for.

use std::{fmt, str::FromStr};

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::DomainError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Inclusive `[start, end]` range of calendar dates.
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Granularity of a dashboard period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Monthly,
    Yearly,
}

impl FromStr for Granularity {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" => Ok(Granularity::Monthly),
            "yearly" | "year" => Ok(Granularity::Yearly),
            _ => Err(DomainError::Validation(format!(
                "unknown granularity `{}`",
                value
            ))),
        }
    }
}

/// The calendar month or year a dashboard is computed for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "granularity", rename_all = "lowercase")]
pub enum ReportPeriod {
    Monthly { year: i32, month: u32 },
    Yearly { year: i32 },
}

impl ReportPeriod {
    pub fn monthly(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(DomainError::InvalidYear(year));
        }
        Ok(ReportPeriod::Monthly { year, month })
    }

    pub fn yearly(year: i32) -> Result<Self, DomainError> {
        if NaiveDate::from_ymd_opt(year, 1, 1).is_none()
            || NaiveDate::from_ymd_opt(year, 12, 31).is_none()
        {
            return Err(DomainError::InvalidYear(year));
        }
        Ok(ReportPeriod::Yearly { year })
    }

    /// Builds a period from the dashboard's granularity flag, year and month.
    /// The month is ignored for yearly periods.
    pub fn from_selection(is_monthly: bool, year: i32, month: u32) -> Result<Self, DomainError> {
        if is_monthly {
            Self::monthly(year, month)
        } else {
            Self::yearly(year)
        }
    }

    /// Period of the given granularity containing `date`.
    pub fn containing(granularity: Granularity, date: NaiveDate) -> Self {
        match granularity {
            Granularity::Monthly => ReportPeriod::Monthly {
                year: date.year(),
                month: date.month(),
            },
            Granularity::Yearly => ReportPeriod::Yearly { year: date.year() },
        }
    }

    pub fn granularity(&self) -> Granularity {
        match self {
            ReportPeriod::Monthly { .. } => Granularity::Monthly,
            ReportPeriod::Yearly { .. } => Granularity::Yearly,
        }
    }

    pub fn year(&self) -> i32 {
        match *self {
            ReportPeriod::Monthly { year, .. } | ReportPeriod::Yearly { year } => year,
        }
    }

    /// First calendar day of the period.
    pub fn start(&self) -> NaiveDate {
        let (year, month) = match *self {
            ReportPeriod::Monthly { year, month } => (year, month),
            ReportPeriod::Yearly { year } => (year, 1),
        };
        first_of_month(year, month)
    }

    /// Last calendar day of the period.
    pub fn end(&self) -> NaiveDate {
        let (year, month) = match *self {
            ReportPeriod::Monthly { year, month } => (year, month),
            ReportPeriod::Yearly { year } => (year, 12),
        };
        last_of_month(year, month)
    }

    /// Date used to pick the governing budget rule: always the period start.
    pub fn reference_date(&self) -> NaiveDate {
        self.start()
    }

    pub fn window(&self) -> DateWindow {
        DateWindow {
            start: self.start(),
            end: self.end(),
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ReportPeriod::Monthly { year, month } => {
                let name = MONTH_NAMES
                    .get(month.saturating_sub(1) as usize)
                    .copied()
                    .unwrap_or("?");
                write!(f, "{} {}", name, year)
            }
            ReportPeriod::Yearly { year } => write!(f, "{}", year),
        }
    }
}

// Constructors validate year/month, so these never see out-of-range input.
fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

fn last_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match NaiveDate::from_ymd_opt(next_year, next_month, 1) {
        Some(first_next) => first_next - Duration::days(1),
        None => NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monthly_period_spans_calendar_month() {
        let period = ReportPeriod::monthly(2024, 2).unwrap();
        assert_eq!(period.start(), date(2024, 2, 1));
        assert_eq!(period.end(), date(2024, 2, 29));
        assert_eq!(period.reference_date(), date(2024, 2, 1));
        assert_eq!(period.to_string(), "February 2024");
    }

    #[test]
    fn december_ends_on_the_31st() {
        let period = ReportPeriod::monthly(2023, 12).unwrap();
        assert_eq!(period.end(), date(2023, 12, 31));
    }

    #[test]
    fn yearly_period_ignores_month_in_selection() {
        let period = ReportPeriod::from_selection(false, 2024, 99).unwrap();
        assert_eq!(period, ReportPeriod::Yearly { year: 2024 });
        assert_eq!(period.start(), date(2024, 1, 1));
        assert_eq!(period.end(), date(2024, 12, 31));
        assert_eq!(period.window().days(), 366);
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert_eq!(
            ReportPeriod::from_selection(true, 2024, 13),
            Err(DomainError::InvalidMonth(13))
        );
        assert!(ReportPeriod::monthly(2024, 0).is_err());
    }

    #[test]
    fn window_is_inclusive_and_rejects_inversion() {
        let window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 1)).unwrap();
        assert!(window.contains(date(2024, 1, 1)));
        assert!(DateWindow::new(date(2024, 1, 2), date(2024, 1, 1)).is_err());
    }

    #[test]
    fn granularity_parses_config_values() {
        assert_eq!("Yearly".parse::<Granularity>(), Ok(Granularity::Yearly));
        assert!("weekly".parse::<Granularity>().is_err());
    }
}
