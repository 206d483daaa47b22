//! Entitlement summary: every derived quantity of one employee at one date.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::config::EnterprisePolicy;
use crate::error::EngineResult;
use crate::models::{AuditTrace, AuditWarning, Employee, EntitlementSummary};

use super::{
    calculate_annual_bonus, calculate_paid_leave_days, calculate_rtt_days, calculate_seniority,
};

/// Calculates seniority, paid leave, RTT days and annual bonus as of `as_of`.
///
/// `as_of` is both the "today" of the seniority-based rules and the reference
/// date of the RTT rule. Steps are numbered in that order.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_entitlements;
/// use payroll_engine::config::EnterprisePolicy;
/// use payroll_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = EnterprisePolicy::default();
/// let employee = Employee::new(
///     "Doe", "John", "T00001".parse().unwrap(),
///     NaiveDate::from_ymd_opt(2017, 5, 2), Decimal::new(152122, 2), Some(1), Decimal::ONE,
/// ).unwrap();
///
/// let summary = calculate_entitlements(&employee, &policy, NaiveDate::from_ymd_opt(2019, 9, 1).unwrap()).unwrap();
/// assert_eq!(summary.seniority_years, 2);
/// assert_eq!(summary.paid_leave_days, 27);
/// assert_eq!(summary.rtt_days, 10);
/// assert_eq!(summary.audit_trace.steps.len(), 4);
/// ```
pub fn calculate_entitlements(
    employee: &Employee,
    policy: &EnterprisePolicy,
    as_of: NaiveDate,
) -> EngineResult<EntitlementSummary> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    match employee.hire_date {
        None => warnings.push(AuditWarning {
            code: "MISSING_HIRE_DATE".to_string(),
            message: format!(
                "Employee {} has no hire date; seniority counted as 0",
                employee.matricule
            ),
            severity: "medium".to_string(),
        }),
        Some(hired) if hired > as_of => warnings.push(AuditWarning {
            code: "FUTURE_HIRE_DATE".to_string(),
            message: format!(
                "Employee {} is hired on {}, after {}",
                employee.matricule, hired, as_of
            ),
            severity: "low".to_string(),
        }),
        Some(_) => {}
    }

    let seniority = calculate_seniority(employee, as_of, 1);
    let leave = calculate_paid_leave_days(employee, policy, as_of, 2);
    let rtt = calculate_rtt_days(employee, policy, as_of, 3)?;
    let bonus = calculate_annual_bonus(employee, policy, as_of, 4);

    let duration_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

    Ok(EntitlementSummary {
        summary_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        matricule: employee.matricule,
        as_of,
        seniority_years: seniority.years,
        paid_leave_days: leave.days,
        rtt_days: rtt.days,
        annual_bonus: bonus.amount,
        audit_trace: AuditTrace {
            steps: vec![
                seniority.audit_step,
                leave.audit_step,
                rtt.audit_step,
                bonus.audit_step,
            ],
            warnings,
            duration_us,
        },
    })
}
