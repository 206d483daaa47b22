//! Employee business-rule engine.
//!
//! This crate computes per-employee entitlements (seniority, paid leave, RTT
//! days, annual bonus), validates salary increases, allocates matricules when
//! hiring, and answers company-wide payroll queries against a pluggable
//! employee repository.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod storage;
