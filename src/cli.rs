//! Command-line front end: load a snapshot, compute one period, print it.

use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;

use pulse_config::{Config, ConfigManager};
use pulse_core::{DashboardService, PeriodService, RegisterService};
use pulse_domain::{DashboardSnapshot, Granularity, ReportPeriod};

use crate::errors::{BudgetError, Result};
use crate::snapshot::load_snapshot;
use crate::summary::Formatter;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "budget_pulse_cli")]
#[command(about = "Dashboard figures for a budget snapshot: balances, spending and rule targets")]
pub struct Args {
    /// Snapshot JSON file; defaults to the last snapshot used.
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Report year; defaults to the current year when it has transactions.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Report month (1-12); ignored for yearly reports.
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Report the whole year instead of one month.
    #[arg(long)]
    pub yearly: bool,

    /// Print the metrics as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also list the period's transactions, newest first.
    #[arg(long)]
    pub register: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

/// Runs one invocation against the configuration found via [`ConfigManager::from_env`].
pub fn run(args: Args) -> Result<()> {
    let manager = ConfigManager::from_env()?;
    let mut config = manager.load()?;
    let snapshot_path = args
        .snapshot
        .clone()
        .unwrap_or_else(|| config.resolve_snapshot_path());

    let snapshot = load_snapshot(&snapshot_path)?;
    let output = render(&args, &config, &snapshot, Local::now().date_naive())?;
    print!("{output}");

    if config.last_snapshot.as_ref() != Some(&snapshot_path) {
        config.last_snapshot = Some(snapshot_path);
        if let Err(err) = manager.save(&config) {
            tracing::warn!(%err, "could not remember last snapshot");
        }
    }
    Ok(())
}

/// Resolves the requested period from flags, configuration and `today`.
pub fn select_period(
    args: &Args,
    config: &Config,
    snapshot: &DashboardSnapshot,
    today: NaiveDate,
) -> Result<ReportPeriod> {
    let yearly = args.yearly
        || (args.month.is_none() && config.default_granularity == Granularity::Yearly);
    let years = PeriodService::available_years(&snapshot.transactions, today);
    let default = PeriodService::default_selection(&years, today);

    let year = args.year.unwrap_or_else(|| default.year());
    let month = match (args.month, args.year) {
        (Some(month), _) => month,
        (None, Some(year)) if year != today.year() => 1,
        (None, _) => match default {
            ReportPeriod::Monthly { month, .. } => month,
            ReportPeriod::Yearly { .. } => 1,
        },
    };
    Ok(ReportPeriod::from_selection(!yearly, year, month)?)
}

pub fn render(
    args: &Args,
    config: &Config,
    snapshot: &DashboardSnapshot,
    today: NaiveDate,
) -> Result<String> {
    let period = select_period(args, config, snapshot, today)?;
    let metrics = DashboardService::calculate(snapshot, period)?;

    if args.json {
        let mut json = serde_json::to_string_pretty(&metrics)?;
        json.push('\n');
        return Ok(json);
    }

    let formatter = Formatter::new(
        config.ui_color_enabled && !args.no_color,
        config.currency_symbol.clone(),
    );
    let mut output = formatter.dashboard(&metrics)?;
    if args.register {
        output.push('\n');
        let rows = RegisterService::rows(snapshot, period.window())?;
        output.push_str(&formatter.register(&rows));
    }
    Ok(output)
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if let Some(month) = self.month {
            if !(1..=12).contains(&month) {
                return Err(BudgetError::InvalidInput(format!(
                    "month must be between 1 and 12, got {month}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::parse_snapshot;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot() -> DashboardSnapshot {
        parse_snapshot(
            r##"{
                "categories": [
                    {"id": 1, "name": "Wages", "type": "Income"},
                    {"id": 2, "name": "Rent", "type": "Needs", "color": "#AA0000"}
                ],
                "transactions": [
                    {"id": 1, "amount": 2000, "type": "Income", "category_id": 1, "transaction_date": "2023-11-01"},
                    {"id": 2, "description": "Rent", "amount": -800, "type": "Expense", "category_id": 2, "transaction_date": "2023-11-03"}
                ]
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn falls_back_to_newest_year_january() {
        let period =
            select_period(&Args::default(), &Config::default(), &snapshot(), date(2025, 4, 2))
                .unwrap();
        assert_eq!(period, ReportPeriod::monthly(2023, 1).unwrap());
    }

    #[test]
    fn explicit_selection_wins() {
        let args = Args {
            year: Some(2023),
            month: Some(11),
            ..Args::default()
        };
        let period = select_period(&args, &Config::default(), &snapshot(), date(2025, 4, 2)).unwrap();
        assert_eq!(period, ReportPeriod::monthly(2023, 11).unwrap());
    }

    #[test]
    fn configured_yearly_granularity_applies_without_month() {
        let config = Config {
            default_granularity: Granularity::Yearly,
            ..Config::default()
        };
        let args = Args {
            year: Some(2023),
            ..Args::default()
        };
        let period = select_period(&args, &config, &snapshot(), date(2025, 4, 2)).unwrap();
        assert_eq!(period, ReportPeriod::yearly(2023).unwrap());
    }

    #[test]
    fn render_plain_summary() {
        let args = Args {
            year: Some(2023),
            month: Some(11),
            register: true,
            no_color: true,
            ..Args::default()
        };
        let output = render(&args, &Config::default(), &snapshot(), date(2025, 4, 2)).unwrap();
        assert!(output.contains("=== November 2023 ==="));
        assert!(output.contains("Default (50/30/20)"));
        assert!(output.contains("$1,200.00"));
        assert!(output.contains("Needs   50% [################----]  80%  $800.00 of $1,000.00"));
        assert!(output.contains("Cash: -$800.00"));
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        let args = Args {
            month: Some(13),
            ..Args::default()
        };
        assert!(matches!(args.validate(), Err(BudgetError::InvalidInput(_))));
    }
}
