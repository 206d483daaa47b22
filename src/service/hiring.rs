//! Hiring workflow: matricule allocation and initial salary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::calculation::{round_to_cents, today};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    EducationLevel, Employee, JobTitle, MATRICULE_CAPACITY, MATRICULE_DIGITS,
    MATRICULE_MAX_NUMBER, Matricule, validate_part_time_fraction,
};
use crate::storage::EmployeeRepository;

use super::EmployeeService;

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Hires a new employee today.
    ///
    /// See [`hire_on`](Self::hire_on).
    pub fn hire(
        &self,
        last_name: &str,
        first_name: &str,
        job_title: JobTitle,
        education_level: EducationLevel,
        part_time_fraction: Decimal,
    ) -> EngineResult<Employee> {
        self.hire_on(
            last_name,
            first_name,
            job_title,
            education_level,
            part_time_fraction,
            today(),
        )
    }

    /// Hires a new employee with `hire_date` as the hiring day.
    ///
    /// The matricule is the job-title prefix followed by the number after the
    /// last allocated one. The salary is the base salary times the salary
    /// factor of the education level, prorated and rounded to the cent.
    ///
    /// # Returns
    ///
    /// Returns the persisted employee, or an error if:
    /// - `part_time_fraction` is outside (0, 1] (`InvalidEmployee`)
    /// - the stored last matricule is not a number (`InvalidMatricule`)
    /// - the numbering space is exhausted (`CapacityExceeded`)
    /// - the new matricule is already stored (`AlreadyExists`)
    /// - no salary factor exists for the education level (`SalaryFactorNotFound`)
    pub fn hire_on(
        &self,
        last_name: &str,
        first_name: &str,
        job_title: JobTitle,
        education_level: EducationLevel,
        part_time_fraction: Decimal,
        hire_date: NaiveDate,
    ) -> EngineResult<Employee> {
        validate_part_time_fraction(part_time_fraction)?;

        let last = self.repository.find_last_matricule()?;
        debug!(last_matricule = ?last, "Allocating matricule");

        let last_number = match last.as_deref() {
            Some(suffix) => parse_suffix(suffix)?,
            None => 0,
        };
        let number = last_number + 1;
        if number > MATRICULE_MAX_NUMBER {
            warn!(last_number, "Matricule numbering space exhausted");
            return Err(EngineError::CapacityExceeded {
                limit: MATRICULE_CAPACITY,
            });
        }

        let matricule = Matricule::for_job(job_title, number)?;
        if self.repository.find_by_matricule(&matricule)?.is_some() {
            warn!(matricule = %matricule, "Matricule already allocated");
            return Err(EngineError::AlreadyExists {
                matricule: matricule.to_string(),
            });
        }

        let constants = self.policy.constants();
        let factor = self.policy.salary_factor(job_title, education_level)?;
        let salary = round_to_cents(constants.base_salary * factor * part_time_fraction);

        let employee = Employee::new(
            last_name,
            first_name,
            matricule,
            Some(hire_date),
            salary,
            Some(constants.base_performance),
            part_time_fraction,
        )?;
        let saved = self.repository.save(employee)?;

        info!(
            matricule = %saved.matricule,
            salary = %saved.salary,
            part_time_fraction = %saved.part_time_fraction,
            "Hired employee"
        );
        Ok(saved)
    }
}

fn parse_suffix(suffix: &str) -> EngineResult<u32> {
    let well_formed = !suffix.is_empty()
        && suffix.len() <= MATRICULE_DIGITS
        && suffix.bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        return Err(EngineError::InvalidMatricule {
            value: suffix.to_string(),
            message: "stored matricule suffix is not a 5-digit number".to_string(),
        });
    }
    suffix.parse().map_err(|e| EngineError::InvalidMatricule {
        value: suffix.to_string(),
        message: format!("{}", e),
    })
}
