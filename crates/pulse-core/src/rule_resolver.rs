//! Picks the budget rule that governs a reference date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pulse_domain::{AllocationBucket, AllocationRatios, BudgetRule, RuleId};

use crate::{CoreError, CoreResult};

/// Name of the rule used when no stored rule covers the reference date.
pub const FALLBACK_RULE_NAME: &str = "Default (50/30/20)";
const FALLBACK_RULE_SUFFIX: &str = " [built-in]";

/// The rule applied to a period, either stored or synthesised.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedRule {
    pub rule_id: Option<RuleId>,
    pub name: String,
    pub ratios: AllocationRatios,
    pub is_fallback: bool,
}

impl From<&BudgetRule> for ResolvedRule {
    fn from(rule: &BudgetRule) -> Self {
        Self {
            rule_id: Some(rule.id),
            name: rule.name.clone(),
            ratios: rule.ratios,
            is_fallback: false,
        }
    }
}

/// Stateless rule selection utilities.
pub struct RuleResolver;

impl RuleResolver {
    /// Returns the covering rule with the latest start date (highest id on
    /// ties), or the 50/30/20 fallback when none covers `reference`.
    pub fn resolve(rules: &[BudgetRule], reference: NaiveDate) -> ResolvedRule {
        match rules
            .iter()
            .filter(|rule| rule.covers(reference))
            .max_by_key(|rule| (rule.start_date, rule.id))
        {
            Some(rule) => {
                tracing::debug!(rule_id = rule.id, %reference, "resolved budget rule");
                ResolvedRule::from(rule)
            }
            None => {
                tracing::warn!(%reference, "no budget rule covers reference date, using default");
                Self::fallback(rules)
            }
        }
    }

    /// The synthesised 50/30/20 rule, named so it cannot collide with any
    /// stored rule.
    pub fn fallback(rules: &[BudgetRule]) -> ResolvedRule {
        let mut name = FALLBACK_RULE_NAME.to_string();
        while rules.iter().any(|rule| rule.name == name) {
            name.push_str(FALLBACK_RULE_SUFFIX);
        }
        ResolvedRule {
            rule_id: None,
            name,
            ratios: AllocationRatios::fifty_thirty_twenty(),
            is_fallback: true,
        }
    }

    /// Rejects rules the engine cannot aggregate against: ratios outside
    /// `0..=100` or an end date before the start date.
    pub fn validate(rules: &[BudgetRule]) -> CoreResult<()> {
        for rule in rules {
            for bucket in AllocationBucket::ALL {
                let ratio = rule.ratios.get(bucket);
                if ratio < Decimal::ZERO || ratio > Decimal::ONE_HUNDRED {
                    return Err(CoreError::InvalidRule {
                        rule_id: rule.id,
                        reason: format!(
                            "{} ratio {} is outside 0-100",
                            bucket.label().to_ascii_lowercase(),
                            ratio
                        ),
                    });
                }
            }
            if let Some(end) = rule.end_date {
                if end < rule.start_date {
                    return Err(CoreError::InvalidRule {
                        rule_id: rule.id,
                        reason: format!("end date {} is before start date {}", end, rule.start_date),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rule(id: RuleId, name: &str, start: NaiveDate) -> BudgetRule {
        BudgetRule::new(id, name, start, AllocationRatios::new(dec!(60), dec!(20), dec!(20)))
    }

    #[test]
    fn later_starting_overlapping_rule_wins() {
        let rules = vec![
            rule(1, "Base", date(2023, 1, 1)),
            rule(2, "Tight", date(2024, 1, 1)).ending(date(2024, 6, 30)),
        ];
        assert_eq!(RuleResolver::resolve(&rules, date(2024, 3, 1)).name, "Tight");
        assert_eq!(RuleResolver::resolve(&rules, date(2024, 7, 1)).name, "Base");
        assert_eq!(RuleResolver::resolve(&rules, date(2023, 5, 1)).name, "Base");
    }

    #[test]
    fn same_start_date_ties_break_on_highest_id() {
        let start = date(2024, 1, 1);
        let rules = vec![rule(8, "Eight", start), rule(3, "Three", start)];
        let resolved = RuleResolver::resolve(&rules, start);
        assert_eq!(resolved.rule_id, Some(8));
    }

    #[test]
    fn end_date_is_inclusive() {
        let rules = vec![rule(1, "January", date(2024, 1, 1)).ending(date(2024, 1, 31))];
        assert!(!RuleResolver::resolve(&rules, date(2024, 1, 31)).is_fallback);
        assert!(RuleResolver::resolve(&rules, date(2024, 2, 1)).is_fallback);
    }

    #[test]
    fn reference_before_all_rules_yields_distinct_default() {
        let rules = vec![
            rule(1, "Later", date(2025, 1, 1)),
            rule(2, FALLBACK_RULE_NAME, date(2025, 6, 1)),
        ];
        let resolved = RuleResolver::resolve(&rules, date(2024, 1, 1));
        assert!(resolved.is_fallback);
        assert_eq!(resolved.rule_id, None);
        assert_eq!(resolved.ratios, AllocationRatios::fifty_thirty_twenty());
        assert!(rules.iter().all(|stored| stored.name != resolved.name));
    }

    #[test]
    fn no_rules_always_resolve_to_default() {
        for reference in [date(1999, 12, 1), date(2024, 1, 1), date(2100, 1, 1)] {
            let resolved = RuleResolver::resolve(&[], reference);
            assert_eq!(resolved.name, FALLBACK_RULE_NAME);
            assert!(resolved.is_fallback);
        }
    }

    #[test]
    fn validate_names_the_offending_rule() {
        let mut bad = rule(17, "Broken", date(2024, 1, 1));
        bad.ratios.wants = dec!(-5);
        let err = RuleResolver::validate(&[rule(1, "Fine", date(2024, 1, 1)), bad]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Budget rule 17 is invalid: wants ratio -5 is outside 0-100"
        );

        let inverted = rule(4, "Inverted", date(2024, 5, 1)).ending(date(2024, 4, 1));
        assert!(matches!(
            RuleResolver::validate(&[inverted]),
            Err(CoreError::InvalidRule { rule_id: 4, .. })
        ));
    }
}
