//! Payroll aggregates and per-employee salary operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::calculation::{calculate_entitlements, increase_salary};
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EntitlementSummary, Matricule};
use crate::storage::EmployeeRepository;

use super::EmployeeService;

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Average salary per full-time equivalent across all employees.
    ///
    /// Computed as the sum of salaries divided by the sum of part-time
    /// fractions. Fails with `EmptyPopulation` when nobody is stored.
    pub fn average_fte_salary(&self) -> EngineResult<Decimal> {
        let count = self.repository.count()?;
        if count == 0 {
            warn!("Average salary requested with no employees");
            return Err(EngineError::EmptyPopulation);
        }

        let salaries = self.repository.sum_salaries()?;
        let fractions = self.repository.sum_part_time_fractions()?;
        debug!(count, salaries = %salaries, fractions = %fractions, "Computing FTE average");

        salaries
            .checked_div(fractions)
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "cannot divide salaries {} by part-time fractions {}",
                    salaries, fractions
                ),
            })
    }

    /// Raises the stored salary of `matricule` by `percentage` percent and
    /// persists the result.
    pub fn increase_salary(
        &self,
        matricule: &Matricule,
        percentage: Decimal,
    ) -> EngineResult<Employee> {
        let mut employee = self.require_employee(matricule)?;
        let result = increase_salary(&mut employee, percentage, 1)?;
        debug!(reasoning = %result.audit_step.reasoning, "Salary increase computed");

        let saved = self.repository.save(employee)?;
        info!(
            matricule = %saved.matricule,
            previous_salary = %result.previous_salary,
            salary = %saved.salary,
            "Increased salary"
        );
        Ok(saved)
    }

    /// Entitlement summary of the stored employee `matricule` as of `as_of`.
    pub fn entitlements(
        &self,
        matricule: &Matricule,
        as_of: NaiveDate,
    ) -> EngineResult<EntitlementSummary> {
        let employee = self.require_employee(matricule)?;
        calculate_entitlements(&employee, &self.policy, as_of)
    }
}
