//! Entitlement summary models.
//!
//! This module contains the [`EntitlementSummary`] type and the audit
//! structures that record how each entitlement was derived.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Matricule;

/// One applied rule: what it read, what it produced, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// Position of the rule in the evaluation order, starting at 1.
    pub step_number: u32,
    /// Stable rule key, e.g. `rtt_days`.
    pub rule_id: String,
    /// Display name of the rule.
    pub rule_name: String,
    /// The enterprise policy parameter(s) the rule is driven by.
    pub policy_ref: String,
    /// Values the rule was evaluated on.
    pub input: serde_json::Value,
    /// Values the rule produced.
    pub output: serde_json::Value,
    /// How the output follows from the input.
    pub reasoning: String,
}

/// A data anomaly noticed while deriving entitlements, such as a missing
/// hire date. The entitlements are still computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// Machine-readable code, e.g. `MISSING_HIRE_DATE`.
    pub code: String,
    /// Message naming the employee concerned.
    pub message: String,
    /// `low`, `medium` or `high`.
    pub severity: String,
}

/// Every rule applied for one summary, in order.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// Applied rules.
    pub steps: Vec<AuditStep>,
    /// Anomalies found in the employee record.
    pub warnings: Vec<AuditWarning>,
    /// Wall time spent computing the summary, in microseconds.
    pub duration_us: u64,
}

/// Every derived entitlement of one employee as of one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementSummary {
    /// Unique identifier for this summary.
    pub summary_id: Uuid,
    /// When the summary was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the summary.
    pub engine_version: String,
    /// The employee the summary is for.
    pub matricule: Matricule,
    /// The date the entitlements are evaluated at.
    pub as_of: NaiveDate,
    /// Calendar-year seniority.
    pub seniority_years: u32,
    /// Paid-leave days for the year.
    pub paid_leave_days: u32,
    /// RTT days for the calendar year of `as_of`.
    pub rtt_days: i64,
    /// Annual bonus, prorated by the part-time fraction.
    pub annual_bonus: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
