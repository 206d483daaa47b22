//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod entitlements;

pub use employee::{
    EducationLevel, Employee, JobTitle, MATRICULE_CAPACITY, MATRICULE_DIGITS,
    MATRICULE_MAX_NUMBER, Matricule, Role, validate_part_time_fraction,
};
pub use entitlements::{AuditStep, AuditTrace, AuditWarning, EntitlementSummary};
