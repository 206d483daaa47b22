//! Enterprise policy types.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files, and the [`EnterprisePolicy`]
//! value injected into every calculation.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::public_holidays;
use crate::error::{EngineError, EngineResult};
use crate::models::{EducationLevel, JobTitle};

/// Company-wide numeric parameters, from `policy.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConstants {
    /// Base monthly salary, the reference for hiring salaries.
    pub base_salary: Decimal,
    /// Performance score of an employee with no bonification.
    pub base_performance: u32,
    /// Paid-leave days every employee gets before seniority.
    pub base_leave_days: u32,
    /// Bonus added per year of seniority.
    pub seniority_bonus_per_year: Decimal,
    /// Share of the base salary paid as the base annual bonus.
    pub annual_bonus_salary_ratio: Decimal,
    /// Multiplier applied to the base annual bonus for managers.
    pub manager_bonus_index: Decimal,
    /// Added to the performance score to build the performance multiplier.
    pub base_performance_index: Decimal,
    /// Contractual cap on days worked per year by full-time staff.
    pub max_full_time_worked_days_per_year: u32,
}

/// A public holiday falling on the same month and day every year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedHoliday {
    /// The name of the holiday.
    pub name: String,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month.
    pub day: u32,
}

/// A public holiday placed relative to Easter Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasterRelativeHoliday {
    /// The name of the holiday.
    pub name: String,
    /// Days after Easter Sunday (Ascension is 39).
    pub offset_days: i64,
}

/// The holiday calendar rule, from `holidays.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HolidayCalendar {
    /// Holidays on a fixed date.
    #[serde(default)]
    pub fixed: Vec<FixedHoliday>,
    /// Holidays that move with Easter.
    #[serde(default)]
    pub easter_relative: Vec<EasterRelativeHoliday>,
}

/// Salary factor table file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryFactorsConfig {
    /// Map of education level to hiring salary multiplier.
    pub salary_factors: HashMap<EducationLevel, Decimal>,
}

/// The complete, immutable enterprise policy.
///
/// Built once (from [`PolicyLoader`](super::PolicyLoader) or
/// [`EnterprisePolicy::default`]) and shared read-only.
///
/// # Example
///
/// ```
/// use payroll_engine::config::EnterprisePolicy;
/// use rust_decimal::Decimal;
///
/// let policy = EnterprisePolicy::default();
/// assert_eq!(policy.constants().base_leave_days, 25);
/// assert_eq!(policy.base_annual_bonus(), Decimal::new(76061, 2));
/// assert_eq!(policy.public_holidays(2026).len(), 9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EnterprisePolicy {
    constants: PolicyConstants,
    salary_factors: HashMap<EducationLevel, Decimal>,
    holidays: HolidayCalendar,
}

impl EnterprisePolicy {
    /// Creates a policy from its parts after validating them.
    pub fn new(
        constants: PolicyConstants,
        salary_factors: HashMap<EducationLevel, Decimal>,
        holidays: HolidayCalendar,
    ) -> EngineResult<Self> {
        let policy = Self {
            constants,
            salary_factors,
            holidays,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Returns the numeric constants.
    pub fn constants(&self) -> &PolicyConstants {
        &self.constants
    }

    /// Returns the salary factor table.
    pub fn salary_factors(&self) -> &HashMap<EducationLevel, Decimal> {
        &self.salary_factors
    }

    /// Returns the holiday calendar rule.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// The base annual bonus: `base_salary × annual_bonus_salary_ratio`.
    pub fn base_annual_bonus(&self) -> Decimal {
        self.constants.base_salary * self.constants.annual_bonus_salary_ratio
    }

    /// The hiring salary multiplier for a job title and education level.
    ///
    /// The table is keyed by education level; every job title shares it.
    pub fn salary_factor(
        &self,
        _job_title: JobTitle,
        education_level: EducationLevel,
    ) -> EngineResult<Decimal> {
        self.salary_factors
            .get(&education_level)
            .copied()
            .ok_or_else(|| EngineError::SalaryFactorNotFound {
                education_level: education_level.to_string(),
            })
    }

    /// The public holidays of `year`.
    pub fn public_holidays(&self, year: i32) -> BTreeSet<NaiveDate> {
        public_holidays(&self.holidays, year)
    }

    fn validate(&self) -> EngineResult<()> {
        let c = &self.constants;
        if c.base_salary <= Decimal::ZERO {
            return Err(invalid("base_salary", "must be positive"));
        }
        for (field, value) in [
            ("seniority_bonus_per_year", c.seniority_bonus_per_year),
            ("annual_bonus_salary_ratio", c.annual_bonus_salary_ratio),
            ("manager_bonus_index", c.manager_bonus_index),
            ("base_performance_index", c.base_performance_index),
        ] {
            if value < Decimal::ZERO {
                return Err(invalid(field, "cannot be negative"));
            }
        }
        for (level, factor) in &self.salary_factors {
            if *factor < Decimal::ZERO {
                return Err(invalid(
                    &format!("salary_factors.{}", level),
                    "cannot be negative",
                ));
            }
        }
        for holiday in &self.holidays.fixed {
            // 2000 is a leap year, so 02-29 is accepted here.
            if NaiveDate::from_ymd_opt(2000, holiday.month, holiday.day).is_none() {
                return Err(invalid(
                    &format!("holidays.fixed.{}", holiday.name),
                    &format!("{:02}-{:02} is not a calendar day", holiday.month, holiday.day),
                ));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidPolicy {
        field: field.to_string(),
        message: message.to_string(),
    }
}

impl Default for EnterprisePolicy {
    /// The standard company policy, identical to `config/enterprise`.
    fn default() -> Self {
        let constants = PolicyConstants {
            base_salary: Decimal::new(152122, 2),
            base_performance: 1,
            base_leave_days: 25,
            seniority_bonus_per_year: Decimal::new(100, 0),
            annual_bonus_salary_ratio: Decimal::new(5, 1),
            manager_bonus_index: Decimal::new(17, 1),
            base_performance_index: Decimal::new(3, 1),
            max_full_time_worked_days_per_year: 218,
        };

        let salary_factors = HashMap::from([
            (EducationLevel::Cap, Decimal::new(10, 1)),
            (EducationLevel::Bac, Decimal::new(11, 1)),
            (EducationLevel::BtsIut, Decimal::new(12, 1)),
            (EducationLevel::Licence, Decimal::new(12, 1)),
            (EducationLevel::Master, Decimal::new(14, 1)),
            (EducationLevel::Ingenieur, Decimal::new(16, 1)),
            (EducationLevel::Doctorat, Decimal::new(17, 1)),
        ]);

        let fixed = |name: &str, month: u32, day: u32| FixedHoliday {
            name: name.to_string(),
            month,
            day,
        };
        let holidays = HolidayCalendar {
            fixed: vec![
                fixed("New Year's Day", 1, 1),
                fixed("Labour Day", 5, 1),
                fixed("Victory in Europe Day", 5, 8),
                fixed("Bastille Day", 7, 14),
                fixed("Assumption", 8, 15),
                fixed("All Saints' Day", 11, 1),
                fixed("Armistice Day", 11, 11),
                fixed("Christmas Day", 12, 25),
            ],
            easter_relative: vec![EasterRelativeHoliday {
                name: "Ascension Day".to_string(),
                offset_days: 39,
            }],
        };

        Self {
            constants,
            salary_factors,
            holidays,
        }
    }
}
