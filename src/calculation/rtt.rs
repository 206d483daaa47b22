//! Reduced-work-time (RTT) day calculation.
//!
//! RTT days are what remains of the calendar year once the contractual cap
//! on worked days, weekends, base paid leave and weekday public holidays are
//! taken out, prorated by the part-time fraction and rounded up.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::EnterprisePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Employee};

/// Weekend days assumed for a year before the January 1st adjustment.
pub const BASE_WEEKEND_DAYS: u32 = 104;

/// The result of an RTT calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct RttResult {
    /// RTT days owed for the year.
    pub days: i64,
    /// 365 or 366.
    pub days_in_year: u32,
    /// Weekend days counted for the year.
    pub weekend_days: u32,
    /// Public holidays falling Monday to Friday.
    pub weekday_holidays: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Weekend days counted for `year`, adjusted by the weekday of January 1st.
///
/// A year starting on Friday takes the Friday adjustment and then the
/// Saturday one as well, so a common year starting on Friday counts 106
/// weekend days although it only has 105. Payroll outputs depend on this
/// count; it must not change without sign-off.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::weekend_days;
///
/// assert_eq!(weekend_days(2019), 104); // Tuesday
/// assert_eq!(weekend_days(2021), 106); // Friday, common year
/// assert_eq!(weekend_days(2022), 105); // Saturday
/// ```
pub fn weekend_days(year: i32) -> u32 {
    let leap = is_leap_year(year);
    let mut days = BASE_WEEKEND_DAYS;

    let Some(new_year) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return days;
    };

    match new_year.weekday() {
        Weekday::Thu => {
            if leap {
                days += 1;
            }
        }
        Weekday::Fri => {
            days += if leap { 2 } else { 1 };
            // Saturday adjustment applies on top.
            days += 1;
        }
        Weekday::Sat => days += 1,
        _ => {}
    }

    days
}

/// Calculates the RTT days of an employee for the year of `reference_date`.
///
/// # Returns
///
/// Returns an `RttResult`, or a `CalculationError` if the prorated count
/// cannot be represented.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_rtt_days;
/// use payroll_engine::config::EnterprisePolicy;
/// use payroll_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = EnterprisePolicy::default();
/// let employee = Employee::new(
///     "Doe", "John", "T00001".parse().unwrap(),
///     None, Decimal::new(152122, 2), None, Decimal::ONE,
/// ).unwrap();
///
/// let reference = NaiveDate::from_ymd_opt(2019, 6, 1).unwrap();
/// let result = calculate_rtt_days(&employee, &policy, reference, 1).unwrap();
/// // 365 - 218 - 104 - 25 - 8
/// assert_eq!(result.days, 10);
/// ```
pub fn calculate_rtt_days(
    employee: &Employee,
    policy: &EnterprisePolicy,
    reference_date: NaiveDate,
    step_number: u32,
) -> EngineResult<RttResult> {
    let year = reference_date.year();
    let constants = policy.constants();

    let days_in_year: u32 = if is_leap_year(year) { 366 } else { 365 };
    let weekend = weekend_days(year);
    let weekday_holidays = policy
        .public_holidays(year)
        .iter()
        .filter(|d| d.weekday().number_from_monday() <= Weekday::Fri.number_from_monday())
        .count() as u32;

    let remaining = i64::from(days_in_year)
        - i64::from(constants.max_full_time_worked_days_per_year)
        - i64::from(weekend)
        - i64::from(constants.base_leave_days)
        - i64::from(weekday_holidays);

    let prorated = Decimal::from(remaining) * employee.part_time_fraction;
    let days = prorated
        .ceil()
        .to_i64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("RTT day count {} is out of range", prorated),
        })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "rtt_days".to_string(),
        rule_name: "Reduced Work Time Days".to_string(),
        policy_ref: "max_full_time_worked_days_per_year, base_leave_days".to_string(),
        input: serde_json::json!({
            "year": year,
            "days_in_year": days_in_year,
            "max_worked_days": constants.max_full_time_worked_days_per_year,
            "weekend_days": weekend,
            "base_leave_days": constants.base_leave_days,
            "weekday_holidays": weekday_holidays,
            "part_time_fraction": employee.part_time_fraction.normalize().to_string()
        }),
        output: serde_json::json!({ "days": days }),
        reasoning: format!(
            "ceil(({} - {} - {} - {} - {}) x {}) = {}",
            days_in_year,
            constants.max_full_time_worked_days_per_year,
            weekend,
            constants.base_leave_days,
            weekday_holidays,
            employee.part_time_fraction.normalize(),
            days
        ),
    };

    Ok(RttResult {
        days,
        days_in_year,
        weekend_days: weekend,
        weekday_holidays,
        audit_step,
    })
}
