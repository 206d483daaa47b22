//! Storage collaborator for employee records.
//!
//! The business rules only ever reach persistence through the
//! [`EmployeeRepository`] trait. [`InMemoryEmployeeRepository`] is a
//! thread-safe implementation backed by a map.

mod memory;

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Employee, Matricule};

pub use memory::InMemoryEmployeeRepository;

/// Repository trait for storing and querying employees.
pub trait EmployeeRepository: Send + Sync {
    /// The highest allocated matricule number as a 5-digit string, if any
    /// employee is stored.
    fn find_last_matricule(&self) -> EngineResult<Option<String>>;

    /// The employee holding `matricule`, if any.
    fn find_by_matricule(&self, matricule: &Matricule) -> EngineResult<Option<Employee>>;

    /// Inserts or updates an employee, assigning an id to new records.
    ///
    /// Fails with `AlreadyExists` if a different employee holds the same
    /// matricule.
    fn save(&self, employee: Employee) -> EngineResult<Employee>;

    /// Total number of stored employees.
    fn count(&self) -> EngineResult<u64>;

    /// Sum of every stored salary.
    fn sum_salaries(&self) -> EngineResult<Decimal>;

    /// Sum of every stored part-time fraction.
    fn sum_part_time_fractions(&self) -> EngineResult<Decimal>;

    /// Mean performance of employees whose matricule starts with `prefix`,
    /// ignoring unset scores. `None` when there is nothing to average.
    fn average_performance(&self, prefix: char) -> EngineResult<Option<Decimal>>;
}

impl<T: EmployeeRepository + ?Sized> EmployeeRepository for Arc<T> {
    fn find_last_matricule(&self) -> EngineResult<Option<String>> {
        (**self).find_last_matricule()
    }

    fn find_by_matricule(&self, matricule: &Matricule) -> EngineResult<Option<Employee>> {
        (**self).find_by_matricule(matricule)
    }

    fn save(&self, employee: Employee) -> EngineResult<Employee> {
        (**self).save(employee)
    }

    fn count(&self) -> EngineResult<u64> {
        (**self).count()
    }

    fn sum_salaries(&self) -> EngineResult<Decimal> {
        (**self).sum_salaries()
    }

    fn sum_part_time_fractions(&self) -> EngineResult<Decimal> {
        (**self).sum_part_time_fractions()
    }

    fn average_performance(&self, prefix: char) -> EngineResult<Option<Decimal>> {
        (**self).average_performance(prefix)
    }
}
