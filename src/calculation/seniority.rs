//! Seniority calculation.
//!
//! Seniority is the difference between the current calendar year and the
//! hire year, not the number of elapsed anniversaries: an employee hired on
//! December 31st has one year of seniority the next January 1st.

use chrono::{Datelike, NaiveDate};

use crate::models::{AuditStep, Employee};

/// The result of a seniority calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct SeniorityResult {
    /// Calendar years of seniority.
    pub years: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calendar-year seniority for a hire date as of `today`.
///
/// Returns 0 when the hire date is absent, today, or in the future.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::seniority_years;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert_eq!(seniority_years(NaiveDate::from_ymd_opt(2025, 12, 31), today), 1);
/// assert_eq!(seniority_years(NaiveDate::from_ymd_opt(2025, 1, 1), today), 1);
/// assert_eq!(seniority_years(NaiveDate::from_ymd_opt(2027, 1, 1), today), 0);
/// assert_eq!(seniority_years(None, today), 0);
/// ```
pub fn seniority_years(hire_date: Option<NaiveDate>, today: NaiveDate) -> u32 {
    match hire_date {
        Some(hired) if hired < today => u32::try_from(today.year() - hired.year()).unwrap_or(0),
        _ => 0,
    }
}

/// Calculates an employee's seniority with an audit step.
pub fn calculate_seniority(employee: &Employee, today: NaiveDate, step_number: u32) -> SeniorityResult {
    let years = seniority_years(employee.hire_date, today);

    let reasoning = match employee.hire_date {
        Some(hired) if hired < today => format!(
            "{} - {} = {} calendar year(s) of seniority",
            today.year(),
            hired.year(),
            years
        ),
        Some(hired) => format!("Hire date {} is not before {}: no seniority", hired, today),
        None => "No hire date recorded: no seniority".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "seniority".to_string(),
        rule_name: "Calendar-Year Seniority".to_string(),
        policy_ref: "hire_date".to_string(),
        input: serde_json::json!({
            "hire_date": employee.hire_date.map(|d| d.to_string()),
            "today": today.to_string()
        }),
        output: serde_json::json!({ "years": years }),
        reasoning,
    };

    SeniorityResult { years, audit_step }
}
