//! Plain-text rendering of dashboard figures for the terminal.

use std::fmt::{self, Write};

use colored::Colorize;
use rust_decimal::{Decimal, RoundingStrategy};

use pulse_core::{AllocationProgress, BucketProgress, RegisterRow, SpendingChart, NO_SPENDING_LABEL};
use pulse_domain::DashboardMetrics;

use crate::errors::Result;

const BAR_WIDTH: usize = 20;
const LABEL_WIDTH: usize = 14;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    Positive,
    Negative,
    Detail,
}

/// Renders metrics with an optional color layer and a currency symbol.
pub struct Formatter {
    color_enabled: bool,
    currency_symbol: String,
}

impl Formatter {
    pub fn new(color_enabled: bool, currency_symbol: impl Into<String>) -> Self {
        Self {
            color_enabled,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn plain() -> Self {
        Self::new(false, "$")
    }

    /// `-$1,234.50` style amount with two decimals and thousands grouping.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let digits = format!("{:.2}", rounded.abs());
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!(
            "{sign}{}{}.{fraction}",
            self.currency_symbol,
            group_thousands(whole)
        )
    }

    pub fn dashboard(&self, metrics: &DashboardMetrics) -> Result<String> {
        let chart = SpendingChart::from_metrics(metrics)?;
        let mut out = String::new();
        let _ = self.write_dashboard(&mut out, metrics, &chart);
        Ok(out)
    }

    pub fn register(&self, rows: &[RegisterRow]) -> String {
        let mut out = String::new();
        let _ = self.write_register(&mut out, rows);
        out
    }

    fn write_dashboard(
        &self,
        out: &mut String,
        metrics: &DashboardMetrics,
        chart: &SpendingChart,
    ) -> fmt::Result {
        writeln!(out, "{}", self.style(Style::Header, format!("=== {} ===", metrics.period)))?;
        writeln!(
            out,
            "Rule: {} ({})",
            metrics.active_rule_name,
            metrics.ratios.label()
        )?;
        writeln!(out)?;
        self.write_figure(out, "Income", metrics.income_in_period)?;
        self.write_figure(out, "Spent", metrics.total_spent_in_period)?;
        self.write_figure(out, "Saved", metrics.savings_in_period)?;
        self.write_figure(out, "Cash balance", metrics.cash_balance)?;
        self.write_figure(out, "Savings pot", metrics.total_savings_pot)?;

        writeln!(out)?;
        for bar in AllocationProgress::for_metrics(metrics) {
            writeln!(out, "{}", self.progress_line(&bar))?;
        }

        writeln!(out)?;
        writeln!(out, "{}", self.style(Style::Header, "Spending by category"))?;
        if chart.is_empty() {
            writeln!(out, "  {}", self.style(Style::Detail, NO_SPENDING_LABEL))?;
        } else {
            for slice in &chart.slices {
                writeln!(
                    out,
                    "  {:<width$} {:>12}  {:>6}%  {}",
                    slice.label,
                    self.format_amount(slice.total),
                    slice
                        .share
                        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
                    self.style(Style::Detail, &slice.color),
                    width = LABEL_WIDTH
                )?;
            }
        }
        Ok(())
    }

    fn write_register(&self, out: &mut String, rows: &[RegisterRow]) -> fmt::Result {
        writeln!(out, "{}", self.style(Style::Header, "=== Transactions ==="))?;
        if rows.is_empty() {
            return writeln!(out, "  {}", self.style(Style::Detail, "No transactions in range"));
        }
        for row in rows {
            let mut amount = format!("Cash: {}", self.signed(row.cash_leg));
            if let Some(savings) = row.savings_leg {
                amount.push_str(&format!(" / Savings: {}", self.signed(savings)));
            }
            writeln!(
                out,
                "  {}  {:<24} {:<width$} {}  (balance {})",
                row.date,
                row.description,
                row.category_name,
                amount,
                self.format_amount(row.running_balance),
                width = LABEL_WIDTH
            )?;
        }
        Ok(())
    }

    fn write_figure(&self, out: &mut String, label: &str, amount: Decimal) -> fmt::Result {
        writeln!(
            out,
            "{:<width$} {:>14}",
            label,
            self.format_amount(amount),
            width = LABEL_WIDTH
        )
    }

    fn progress_line(&self, bar: &BucketProgress) -> String {
        let filled = BAR_WIDTH * usize::from(bar.percent) / 100;
        let track = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled));
        let style = if bar.actual > bar.target {
            Style::Negative
        } else {
            Style::Positive
        };
        format!(
            "{:<7} {}% [{}] {:>3}%  {} of {}",
            bar.bucket.label(),
            bar.ratio.normalize(),
            self.style(style, track),
            bar.percent,
            self.format_amount(bar.actual),
            self.format_amount(bar.target)
        )
    }

    fn signed(&self, amount: Decimal) -> String {
        let text = if amount.is_sign_negative() {
            self.format_amount(amount)
        } else {
            format!("+{}", self.format_amount(amount))
        };
        let style = if amount.is_sign_negative() {
            Style::Negative
        } else {
            Style::Positive
        };
        self.style(style, text)
    }

    fn style(&self, style: Style, text: impl fmt::Display) -> String {
        let text = text.to_string();
        if !self.color_enabled {
            return text;
        }
        match style {
            Style::Header => text.bold().to_string(),
            Style::Positive => text.green().to_string(),
            Style::Negative => text.red().to_string(),
            Style::Detail => text.dimmed().to_string(),
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, ch) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
