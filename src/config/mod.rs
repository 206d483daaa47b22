//! Enterprise policy configuration.
//!
//! This module provides functionality to load the company-wide payroll policy
//! from YAML files: salary and bonus constants, the hiring salary factor
//! table, and the public holiday calendar.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::PolicyLoader;
//!
//! let policy = PolicyLoader::load("./config/enterprise").unwrap().into_policy();
//! println!("Base leave days: {}", policy.constants().base_leave_days);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    EasterRelativeHoliday, EnterprisePolicy, FixedHoliday, HolidayCalendar, PolicyConstants,
    SalaryFactorsConfig,
};
