//! Paid-leave entitlement.
//!
//! Every employee gets the policy's base leave days plus one day per year of
//! seniority. The count is not prorated by the part-time fraction.

use chrono::NaiveDate;

use crate::config::EnterprisePolicy;
use crate::models::{AuditStep, Employee};

use super::seniority_years;

/// The result of a paid-leave calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct PaidLeaveResult {
    /// Paid-leave days owed.
    pub days: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the paid-leave days of an employee as of `today`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_paid_leave_days;
/// use payroll_engine::config::EnterprisePolicy;
/// use payroll_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = EnterprisePolicy::default();
/// let employee = Employee::new(
///     "Doe", "John", "T00001".parse().unwrap(),
///     NaiveDate::from_ymd_opt(2022, 9, 1), Decimal::new(152122, 2), None, Decimal::new(5, 1),
/// ).unwrap();
///
/// let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
/// assert_eq!(calculate_paid_leave_days(&employee, &policy, today, 1).days, 29);
/// ```
pub fn calculate_paid_leave_days(
    employee: &Employee,
    policy: &EnterprisePolicy,
    today: NaiveDate,
    step_number: u32,
) -> PaidLeaveResult {
    let base = policy.constants().base_leave_days;
    let seniority = seniority_years(employee.hire_date, today);
    let days = base + seniority;

    let audit_step = AuditStep {
        step_number,
        rule_id: "paid_leave".to_string(),
        rule_name: "Paid Leave Days".to_string(),
        policy_ref: "base_leave_days".to_string(),
        input: serde_json::json!({
            "base_leave_days": base,
            "seniority_years": seniority
        }),
        output: serde_json::json!({ "days": days }),
        reasoning: format!("{} base days + {} seniority day(s) = {}", base, seniority, days),
    };

    PaidLeaveResult { days, audit_step }
}
