//! Employee model and related types.
//!
//! This module defines the [`Employee`] record, its [`Matricule`] business
//! identifier with the [`Role`] it encodes, and the [`JobTitle`] and
//! [`EducationLevel`] enums used when hiring.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{
    calculate_annual_bonus, calculate_paid_leave_days, calculate_rtt_days, increase_salary,
    seniority_years, today,
};
use crate::config::EnterprisePolicy;
use crate::error::{EngineError, EngineResult};

/// Number of digits in the numeric part of a matricule.
pub const MATRICULE_DIGITS: usize = 5;

/// Highest numeric suffix a matricule can carry.
pub const MATRICULE_MAX_NUMBER: u32 = 99_999;

/// How many matricules the numbering space holds (`00000` to `99999`).
pub const MATRICULE_CAPACITY: u32 = MATRICULE_MAX_NUMBER + 1;

/// The job a new hire is recruited for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobTitle {
    /// Technical staff.
    Technician,
    /// Sales staff, scored on revenue.
    Commercial,
    /// Management staff.
    Manager,
}

impl JobTitle {
    /// The matricule prefix letter: the first letter of the job-title code.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::JobTitle;
    ///
    /// assert_eq!(JobTitle::Technician.matricule_prefix(), 'T');
    /// assert_eq!(JobTitle::Manager.matricule_prefix(), 'M');
    /// ```
    pub fn matricule_prefix(self) -> char {
        match self {
            JobTitle::Technician => 'T',
            JobTitle::Commercial => 'C',
            JobTitle::Manager => 'M',
        }
    }
}

/// Highest diploma held by a new hire, keying the salary factor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    /// Vocational certificate.
    Cap,
    /// Secondary school diploma.
    Bac,
    /// Two-year technical degree.
    BtsIut,
    /// Bachelor's degree.
    Licence,
    /// Master's degree.
    Master,
    /// Engineering degree.
    Ingenieur,
    /// Doctorate.
    Doctorat,
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EducationLevel::Cap => "cap",
            EducationLevel::Bac => "bac",
            EducationLevel::BtsIut => "bts_iut",
            EducationLevel::Licence => "licence",
            EducationLevel::Master => "master",
            EducationLevel::Ingenieur => "ingenieur",
            EducationLevel::Doctorat => "doctorat",
        };
        f.write_str(name)
    }
}

/// Role class encoded by the matricule prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Prefix `M`.
    Manager,
    /// Prefix `C`.
    Commercial,
    /// Any other prefix.
    Standard,
}

impl Role {
    /// Resolves the role for a matricule prefix letter.
    pub fn from_prefix(prefix: char) -> Self {
        match prefix {
            'M' => Role::Manager,
            'C' => Role::Commercial,
            _ => Role::Standard,
        }
    }
}

/// Business identifier of an employee: a role-prefix letter followed by a
/// five-digit, zero-padded sequence number (e.g. `T00346`).
///
/// The [`Role`] is resolved once when the matricule is built and carried
/// alongside it.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Matricule, Role};
///
/// let matricule: Matricule = "M00001".parse().unwrap();
/// assert_eq!(matricule.role(), Role::Manager);
/// assert_eq!(matricule.number(), 1);
/// assert_eq!(matricule.to_string(), "M00001");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Matricule {
    prefix: char,
    number: u32,
    role: Role,
}

impl Matricule {
    /// Builds a matricule from a prefix letter and a sequence number.
    ///
    /// Fails with [`EngineError::InvalidMatricule`] when the prefix is not an
    /// ASCII uppercase letter or the number does not fit in five digits.
    pub fn new(prefix: char, number: u32) -> EngineResult<Self> {
        if !prefix.is_ascii_uppercase() {
            return Err(EngineError::InvalidMatricule {
                value: format!("{}{:05}", prefix, number),
                message: "prefix must be an uppercase ASCII letter".to_string(),
            });
        }
        if number > MATRICULE_MAX_NUMBER {
            return Err(EngineError::InvalidMatricule {
                value: format!("{}{}", prefix, number),
                message: format!("number must not exceed {}", MATRICULE_MAX_NUMBER),
            });
        }
        Ok(Self {
            prefix,
            number,
            role: Role::from_prefix(prefix),
        })
    }

    /// Builds the matricule for a job title and sequence number.
    pub fn for_job(job_title: JobTitle, number: u32) -> EngineResult<Self> {
        Self::new(job_title.matricule_prefix(), number)
    }

    /// The prefix letter.
    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// The numeric sequence part.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The role class the prefix encodes.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The zero-padded numeric suffix, as stored by the repository.
    pub fn suffix(&self) -> String {
        format!("{:0width$}", self.number, width = MATRICULE_DIGITS)
    }
}

impl fmt::Display for Matricule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.suffix())
    }
}

impl FromStr for Matricule {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| EngineError::InvalidMatricule {
            value: value.to_string(),
            message: message.to_string(),
        };

        let mut chars = value.chars();
        let prefix = chars.next().ok_or_else(|| invalid("matricule is empty"))?;
        let digits = chars.as_str();

        if digits.len() != MATRICULE_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected 5 digits after the prefix"));
        }
        let number = digits
            .parse::<u32>()
            .map_err(|e| invalid(&e.to_string()))?;

        Self::new(prefix, number)
    }
}

impl TryFrom<String> for Matricule {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Matricule> for String {
    fn from(matricule: Matricule) -> Self {
        matricule.to_string()
    }
}

/// Represents an employee of the company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Storage identifier; `None` until the record is first saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Business identifier, carrying the role class.
    pub matricule: Matricule,
    /// The date the employee was hired, if known.
    pub hire_date: Option<NaiveDate>,
    /// Monthly gross salary, to the cent.
    pub salary: Decimal,
    /// Performance score; `None` is treated as the company base performance.
    pub performance: Option<u32>,
    /// Share of a full-time contract, in (0, 1].
    pub part_time_fraction: Decimal,
}

impl Employee {
    /// Creates an unsaved employee after checking the record invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new(
    ///     "Doe",
    ///     "John",
    ///     "T00001".parse().unwrap(),
    ///     NaiveDate::from_ymd_opt(2020, 3, 1),
    ///     Decimal::new(152122, 2),
    ///     Some(1),
    ///     Decimal::ONE,
    /// )
    /// .unwrap();
    /// assert!(employee.id.is_none());
    /// ```
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        matricule: Matricule,
        hire_date: Option<NaiveDate>,
        salary: Decimal,
        performance: Option<u32>,
        part_time_fraction: Decimal,
    ) -> EngineResult<Self> {
        let employee = Self {
            id: None,
            last_name: last_name.into(),
            first_name: first_name.into(),
            matricule,
            hire_date,
            salary,
            performance,
            part_time_fraction,
        };
        employee.validate()?;
        Ok(employee)
    }

    /// Checks the salary and part-time invariants.
    pub fn validate(&self) -> EngineResult<()> {
        validate_part_time_fraction(self.part_time_fraction)?;
        if self.salary < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "salary".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        Ok(())
    }

    /// The role class resolved from the matricule.
    pub fn role(&self) -> Role {
        self.matricule.role()
    }

    /// Whole calendar years between the hire year and `today`'s year.
    pub fn seniority_years(&self, today: NaiveDate) -> u32 {
        seniority_years(self.hire_date, today)
    }

    /// Paid-leave days owed for the year of `today`.
    pub fn paid_leave_days(&self, policy: &EnterprisePolicy, today: NaiveDate) -> u32 {
        calculate_paid_leave_days(self, policy, today, 1).days
    }

    /// RTT days for the calendar year of `reference_date`.
    pub fn rtt_days(
        &self,
        policy: &EnterprisePolicy,
        reference_date: NaiveDate,
    ) -> EngineResult<i64> {
        Ok(calculate_rtt_days(self, policy, reference_date, 1)?.days)
    }

    /// RTT days for the current calendar year.
    pub fn rtt_days_this_year(&self, policy: &EnterprisePolicy) -> EngineResult<i64> {
        self.rtt_days(policy, today())
    }

    /// Annual bonus as of `today`, prorated by the part-time fraction.
    pub fn annual_bonus(&self, policy: &EnterprisePolicy, today: NaiveDate) -> Decimal {
        calculate_annual_bonus(self, policy, today, 1).amount
    }

    /// Raises the salary by `percentage` percent, rounded to the cent.
    ///
    /// Fails with [`EngineError::InvalidOperation`] when `percentage` is not
    /// strictly positive or the rounded salary would not go up; the salary is
    /// left untouched in that case.
    pub fn increase_salary(&mut self, percentage: Decimal) -> EngineResult<()> {
        increase_salary(self, percentage, 1).map(|_| ())
    }
}

/// Checks that a part-time fraction lies in (0, 1].
pub fn validate_part_time_fraction(fraction: Decimal) -> EngineResult<()> {
    if fraction <= Decimal::ZERO || fraction > Decimal::ONE {
        return Err(EngineError::InvalidEmployee {
            field: "part_time_fraction".to_string(),
            message: format!("must be greater than 0 and at most 1, got {}", fraction),
        });
    }
    Ok(())
}
