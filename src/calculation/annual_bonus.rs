//! Annual bonus calculation.
//!
//! The bonus is a base component chosen by role and performance, plus a
//! seniority component, the sum prorated by the part-time fraction:
//!
//! - managers: base annual bonus × manager index;
//! - others at base (or unset) performance: base annual bonus;
//! - others: base annual bonus × (performance + base performance index).

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::EnterprisePolicy;
use crate::models::{AuditStep, Employee, Role};

use super::seniority_years;

/// The result of an annual bonus calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct AnnualBonusResult {
    /// The prorated total bonus.
    pub amount: Decimal,
    /// The role/performance component before proration.
    pub base_component: Decimal,
    /// The seniority component before proration.
    pub seniority_component: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates an employee's annual bonus as of `today`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_annual_bonus;
/// use payroll_engine::config::EnterprisePolicy;
/// use payroll_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = EnterprisePolicy::default();
/// let manager = Employee::new(
///     "Doe", "Jane", "M00001".parse().unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 1), Decimal::new(250000, 2), Some(1), Decimal::ONE,
/// ).unwrap();
///
/// let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
/// let result = calculate_annual_bonus(&manager, &policy, today, 1);
/// // 760.61 x 1.7 + 2 x 100
/// assert_eq!(result.amount, Decimal::from_str("1493.037").unwrap());
/// ```
pub fn calculate_annual_bonus(
    employee: &Employee,
    policy: &EnterprisePolicy,
    today: NaiveDate,
    step_number: u32,
) -> AnnualBonusResult {
    let constants = policy.constants();
    let base_bonus = policy.base_annual_bonus();
    let seniority = seniority_years(employee.hire_date, today);
    let seniority_component = constants.seniority_bonus_per_year * Decimal::from(seniority);

    let (base_component, basis) = match (employee.role(), employee.performance) {
        (Role::Manager, _) => (
            base_bonus * constants.manager_bonus_index,
            format!("manager: {} x {}", base_bonus, constants.manager_bonus_index),
        ),
        (_, None) => (base_bonus, "unset performance: base bonus".to_string()),
        (_, Some(p)) if p == constants.base_performance => {
            (base_bonus, "base performance: base bonus".to_string())
        }
        (_, Some(p)) => {
            let multiplier = Decimal::from(p) + constants.base_performance_index;
            (
                base_bonus * multiplier,
                format!("performance {}: {} x {}", p, base_bonus, multiplier),
            )
        }
    };

    let amount = (base_component + seniority_component) * employee.part_time_fraction;

    let audit_step = AuditStep {
        step_number,
        rule_id: "annual_bonus".to_string(),
        rule_name: "Annual Bonus".to_string(),
        policy_ref: "base_annual_bonus, seniority_bonus_per_year".to_string(),
        input: serde_json::json!({
            "role": employee.role(),
            "performance": employee.performance,
            "seniority_years": seniority,
            "part_time_fraction": employee.part_time_fraction.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_component": base_component.normalize().to_string(),
            "seniority_component": seniority_component.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "({} = {}) + {} seniority, x {} = {}",
            basis,
            base_component.normalize(),
            seniority_component.normalize(),
            employee.part_time_fraction.normalize(),
            amount.normalize()
        ),
    };

    AnnualBonusResult {
        amount,
        base_component,
        seniority_component,
        audit_step,
    }
}
