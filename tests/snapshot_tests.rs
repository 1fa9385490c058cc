use std::path::Path;

use budget_pulse::{
    engine::DashboardService,
    errors::BudgetError,
    snapshot::load_snapshot,
};
use budget_pulse::domain::ReportPeriod;
use rust_decimal_macros::dec;

fn fixture() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/snapshot.json"))
}

#[test]
fn fixture_snapshot_reproduces_january_dashboard() {
    budget_pulse::init();
    let snapshot = load_snapshot(fixture()).expect("load fixture");
    let metrics =
        DashboardService::calculate(&snapshot, ReportPeriod::monthly(2024, 1).unwrap()).unwrap();

    assert_eq!(metrics.active_rule_name, "Classic split");
    assert_eq!(metrics.income_in_period, dec!(1000));
    assert_eq!(metrics.needs_actual, dec!(300));
    assert_eq!(metrics.savings_in_period, dec!(200));
    assert_eq!(metrics.cash_balance, dec!(500));
    assert_eq!(metrics.total_savings_pot, dec!(200));
    assert_eq!(metrics.savings_target, dec!(200));
}

#[test]
fn february_keeps_cumulative_balances() {
    let snapshot = load_snapshot(fixture()).expect("load fixture");
    let metrics =
        DashboardService::calculate(&snapshot, ReportPeriod::monthly(2024, 2).unwrap()).unwrap();

    assert_eq!(metrics.income_in_period, dec!(0));
    assert_eq!(metrics.wants_actual, dec!(42.5));
    assert_eq!(metrics.cash_balance, dec!(457.5));
    assert_eq!(metrics.total_savings_pot, dec!(200));
    assert_eq!(metrics.spending_by_category["Restaurants"].color.as_str(), "#EF6C00");
}

#[test]
fn missing_file_is_a_snapshot_error() {
    let err = load_snapshot(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, BudgetError::SnapshotError(_)));
    assert!(err.to_string().contains("here.json"));
}
