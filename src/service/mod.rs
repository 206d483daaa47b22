//! Employee rule service.
//!
//! [`EmployeeService`] combines the enterprise policy, the calculation rules
//! and an [`EmployeeRepository`] into the operations callers use: hiring,
//! payroll aggregates, salary increases, entitlement lookups and commercial
//! performance scoring.

mod hiring;
mod payroll;
mod performance;
#[cfg(test)]
mod stub;

use std::sync::Arc;

use crate::config::EnterprisePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Matricule};
use crate::storage::EmployeeRepository;

/// Orchestrates the employee business rules over a repository.
///
/// # Example
///
/// ```
/// use payroll_engine::config::EnterprisePolicy;
/// use payroll_engine::models::{EducationLevel, JobTitle};
/// use payroll_engine::service::EmployeeService;
/// use payroll_engine::storage::InMemoryEmployeeRepository;
/// use rust_decimal::Decimal;
///
/// let service = EmployeeService::new(InMemoryEmployeeRepository::new(), EnterprisePolicy::default());
/// let hired = service
///     .hire("Doe", "John", JobTitle::Technician, EducationLevel::BtsIut, Decimal::ONE)
///     .unwrap();
/// assert_eq!(hired.matricule.to_string(), "T00001");
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeService<R> {
    repository: R,
    policy: Arc<EnterprisePolicy>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service over `repository` with `policy`.
    pub fn new(repository: R, policy: EnterprisePolicy) -> Self {
        Self::with_shared_policy(repository, Arc::new(policy))
    }

    /// Creates a service sharing an already loaded policy.
    pub fn with_shared_policy(repository: R, policy: Arc<EnterprisePolicy>) -> Self {
        Self { repository, policy }
    }

    /// Returns the enterprise policy.
    pub fn policy(&self) -> &EnterprisePolicy {
        &self.policy
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn require_employee(&self, matricule: &Matricule) -> EngineResult<Employee> {
        self.repository
            .find_by_matricule(matricule)?
            .ok_or_else(|| EngineError::EmployeeNotFound {
                matricule: matricule.to_string(),
            })
    }
}
