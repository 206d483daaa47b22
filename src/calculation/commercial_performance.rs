//! Sales-performance scoring for commercial employees.
//!
//! The new score depends on where the achieved revenue falls relative to the
//! target, starting from the employee's current score:
//!
//! | Achieved / target      | New score                    |
//! |------------------------|------------------------------|
//! | below 80%              | base performance             |
//! | 80% to below 95%       | max(base, current − 2)       |
//! | 95% to 105% inclusive  | max(base, current)           |
//! | above 105% to 120%     | current + 1                  |
//! | above 120%             | current + 4                  |
//!
//! A score strictly above the average commercial score earns one more point.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Lower bound of the near-target band (80%).
pub const NEAR_TARGET_RATIO: Decimal = Decimal::from_parts(80, 0, 0, false, 2);
/// Lower bound of the on-target band (95%).
pub const ON_TARGET_RATIO: Decimal = Decimal::from_parts(95, 0, 0, false, 2);
/// Upper bound of the on-target band (105%).
pub const ABOVE_TARGET_RATIO: Decimal = Decimal::from_parts(105, 0, 0, false, 2);
/// Upper bound of the above-target band (120%).
pub const FAR_ABOVE_TARGET_RATIO: Decimal = Decimal::from_parts(120, 0, 0, false, 2);

/// Where achieved revenue falls relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueBand {
    /// Below 80% of target.
    BelowTarget,
    /// From 80% (inclusive) to 95% (exclusive).
    NearTarget,
    /// From 95% to 105%, both inclusive.
    OnTarget,
    /// Above 105% up to 120% inclusive.
    AboveTarget,
    /// Above 120%.
    FarAboveTarget,
}

impl RevenueBand {
    /// Classifies `achieved` against `target`.
    pub fn classify(achieved: Decimal, target: Decimal) -> Self {
        if achieved > target * FAR_ABOVE_TARGET_RATIO {
            RevenueBand::FarAboveTarget
        } else if achieved > target * ABOVE_TARGET_RATIO {
            RevenueBand::AboveTarget
        } else if achieved >= target * ON_TARGET_RATIO {
            RevenueBand::OnTarget
        } else if achieved >= target * NEAR_TARGET_RATIO {
            RevenueBand::NearTarget
        } else {
            RevenueBand::BelowTarget
        }
    }
}

/// The result of scoring a commercial employee, including the audit step.
#[derive(Debug, Clone)]
pub struct CommercialPerformanceResult {
    /// The new performance score.
    pub performance: u32,
    /// The revenue band that drove the score.
    pub band: RevenueBand,
    /// Whether the above-average point was granted.
    pub above_average: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Scores a commercial employee from achieved and target revenue.
///
/// `current` is the stored score (unset counts as `base_performance`) and
/// `average` the mean score of commercial employees, if any is known.
/// Inputs are assumed validated: `achieved ≥ 0` and `target > 0`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{score_commercial_performance, RevenueBand};
/// use rust_decimal::Decimal;
///
/// let result = score_commercial_performance(
///     Some(3), Decimal::from(1300), Decimal::from(1000), 1, None, 1,
/// );
/// assert_eq!(result.band, RevenueBand::FarAboveTarget);
/// assert_eq!(result.performance, 7);
/// ```
pub fn score_commercial_performance(
    current: Option<u32>,
    achieved: Decimal,
    target: Decimal,
    base_performance: u32,
    average: Option<Decimal>,
    step_number: u32,
) -> CommercialPerformanceResult {
    let current_score = current.unwrap_or(base_performance);
    let band = RevenueBand::classify(achieved, target);

    let banded = match band {
        RevenueBand::BelowTarget => base_performance,
        RevenueBand::NearTarget => base_performance.max(current_score.saturating_sub(2)),
        RevenueBand::OnTarget => base_performance.max(current_score),
        RevenueBand::AboveTarget => current_score.saturating_add(1),
        RevenueBand::FarAboveTarget => current_score.saturating_add(4),
    };

    let above_average = average.is_some_and(|avg| Decimal::from(banded) > avg);
    let performance = if above_average {
        banded.saturating_add(1)
    } else {
        banded
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "commercial_performance".to_string(),
        rule_name: "Commercial Performance Score".to_string(),
        policy_ref: "base_performance".to_string(),
        input: serde_json::json!({
            "current_performance": current,
            "achieved_revenue": achieved.to_string(),
            "target_revenue": target.to_string(),
            "average_performance": average.map(|a| a.normalize().to_string())
        }),
        output: serde_json::json!({
            "band": band,
            "above_average": above_average,
            "performance": performance
        }),
        reasoning: format!(
            "{:?} from {} to {}{}",
            band,
            current_score,
            banded,
            if above_average {
                ", +1 for beating the commercial average"
            } else {
                ""
            }
        ),
    };

    CommercialPerformanceResult {
        performance,
        band,
        above_average,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(current: Option<u32>, achieved: i64, target: i64) -> u32 {
        score_commercial_performance(
            current,
            Decimal::from(achieved),
            Decimal::from(target),
            1,
            None,
            1,
        )
        .performance
    }

    #[test]
    fn test_band_boundaries() {
        let target = Decimal::from(1000);
        let classify = |a: i64| RevenueBand::classify(Decimal::from(a), target);

        assert_eq!(classify(0), RevenueBand::BelowTarget);
        assert_eq!(classify(799), RevenueBand::BelowTarget);
        assert_eq!(classify(800), RevenueBand::NearTarget);
        assert_eq!(classify(949), RevenueBand::NearTarget);
        assert_eq!(classify(950), RevenueBand::OnTarget);
        assert_eq!(classify(1050), RevenueBand::OnTarget);
        assert_eq!(classify(1051), RevenueBand::AboveTarget);
        assert_eq!(classify(1200), RevenueBand::AboveTarget);
        assert_eq!(classify(1201), RevenueBand::FarAboveTarget);
    }

    #[test]
    fn test_below_target_resets_to_base() {
        assert_eq!(score(Some(8), 500, 1000), 1);
    }

    #[test]
    fn test_near_target_loses_two_points_floored_at_base() {
        assert_eq!(score(Some(5), 900, 1000), 3);
        assert_eq!(score(Some(2), 900, 1000), 1);
        assert_eq!(score(Some(0), 900, 1000), 1);
    }

    #[test]
    fn test_on_target_keeps_score_floored_at_base() {
        assert_eq!(score(Some(4), 1000, 1000), 4);
        assert_eq!(score(Some(0), 1000, 1000), 1);
    }

    #[test]
    fn test_above_target_gains_one_point() {
        assert_eq!(score(Some(4), 1100, 1000), 5);
    }

    #[test]
    fn test_far_above_target_gains_four_points() {
        assert_eq!(score(Some(4), 2000, 1000), 8);
    }

    #[test]
    fn test_unset_performance_starts_from_base() {
        assert_eq!(score(None, 1100, 1000), 2);
    }

    #[test]
    fn test_above_average_earns_extra_point() {
        let result = score_commercial_performance(
            Some(4),
            Decimal::from(1100),
            Decimal::from(1000),
            1,
            Some(Decimal::new(35, 1)),
            1,
        );
        assert!(result.above_average);
        assert_eq!(result.performance, 6);
    }

    #[test]
    fn test_equal_to_average_earns_nothing() {
        let result = score_commercial_performance(
            Some(4),
            Decimal::from(1100),
            Decimal::from(1000),
            1,
            Some(Decimal::from(5)),
            1,
        );
        assert!(!result.above_average);
        assert_eq!(result.performance, 5);
    }

    #[test]
    fn test_score_saturates_at_maximum() {
        assert_eq!(score(Some(u32::MAX - 1), 2000, 1000), u32::MAX);
        assert_eq!(score(Some(u32::MAX), 1100, 1000), u32::MAX);

        let result = score_commercial_performance(
            Some(u32::MAX - 1),
            Decimal::from(1100),
            Decimal::from(1000),
            1,
            Some(Decimal::ONE),
            1,
        );
        assert!(result.above_average);
        assert_eq!(result.performance, u32::MAX);
    }

    #[test]
    fn test_audit_step_records_band() {
        let result = score_commercial_performance(
            Some(2),
            Decimal::from(900),
            Decimal::from(1000),
            1,
            None,
            9,
        );
        assert_eq!(result.audit_step.step_number, 9);
        assert_eq!(result.audit_step.output["band"], "near_target");
        assert_eq!(result.audit_step.output["performance"], 1);
        assert!(result.audit_step.input["average_performance"].is_null());
    }
}
