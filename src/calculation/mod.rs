//! Calculation logic for the payroll engine.
//!
//! This module contains the per-employee entitlement rules (seniority, paid
//! leave, RTT days, annual bonus), salary increases, commercial performance
//! scoring and the public holiday calendar they depend on. Each rule returns
//! its value together with an [`AuditStep`](crate::models::AuditStep).

mod annual_bonus;
mod commercial_performance;
mod entitlements;
mod paid_leave;
mod public_holidays;
mod rtt;
mod salary_increase;
mod seniority;

use chrono::NaiveDate;

pub use annual_bonus::{AnnualBonusResult, calculate_annual_bonus};
pub use commercial_performance::{
    ABOVE_TARGET_RATIO, CommercialPerformanceResult, FAR_ABOVE_TARGET_RATIO, NEAR_TARGET_RATIO,
    ON_TARGET_RATIO, RevenueBand, score_commercial_performance,
};
pub use entitlements::calculate_entitlements;
pub use paid_leave::{PaidLeaveResult, calculate_paid_leave_days};
pub use public_holidays::{easter_sunday, public_holidays};
pub use rtt::{BASE_WEEKEND_DAYS, RttResult, calculate_rtt_days, weekend_days};
pub use salary_increase::{SalaryIncreaseResult, increase_salary, round_to_cents};
pub use seniority::{SeniorityResult, calculate_seniority, seniority_years};

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
