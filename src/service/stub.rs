//! Recording repository used by the service unit tests.

use std::sync::Mutex;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Employee, Matricule};
use crate::storage::EmployeeRepository;

/// Answers queries with canned values and records every saved employee.
#[derive(Debug, Default)]
pub(crate) struct StubRepository {
    last_matricule: Option<String>,
    employees: Vec<Employee>,
    count: u64,
    sum_salaries: Decimal,
    sum_part_time_fractions: Decimal,
    average_performance: Option<Decimal>,
    saved: Mutex<Vec<Employee>>,
    calls: Mutex<u32>,
}

impl StubRepository {
    pub(crate) fn with_last_matricule(mut self, suffix: &str) -> Self {
        self.last_matricule = Some(suffix.to_string());
        self
    }

    pub(crate) fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.push(employee);
        self
    }

    pub(crate) fn with_aggregates(mut self, count: u64, salaries: Decimal, fractions: Decimal) -> Self {
        self.count = count;
        self.sum_salaries = salaries;
        self.sum_part_time_fractions = fractions;
        self
    }

    pub(crate) fn with_average_performance(mut self, average: Decimal) -> Self {
        self.average_performance = Some(average);
        self
    }

    /// Employees passed to `save`, in call order.
    pub(crate) fn saved(&self) -> Vec<Employee> {
        self.saved.lock().unwrap().clone()
    }

    /// Number of repository calls made so far.
    pub(crate) fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }

    fn record_call(&self) {
        *self.calls.lock().unwrap() += 1;
    }
}

impl EmployeeRepository for StubRepository {
    fn find_last_matricule(&self) -> EngineResult<Option<String>> {
        self.record_call();
        Ok(self.last_matricule.clone())
    }

    fn find_by_matricule(&self, matricule: &Matricule) -> EngineResult<Option<Employee>> {
        self.record_call();
        Ok(self
            .employees
            .iter()
            .find(|e| &e.matricule == matricule)
            .cloned())
    }

    fn save(&self, mut employee: Employee) -> EngineResult<Employee> {
        self.record_call();
        employee.id.get_or_insert_with(Uuid::new_v4);
        self.saved.lock().unwrap().push(employee.clone());
        Ok(employee)
    }

    fn count(&self) -> EngineResult<u64> {
        self.record_call();
        Ok(self.count)
    }

    fn sum_salaries(&self) -> EngineResult<Decimal> {
        self.record_call();
        Ok(self.sum_salaries)
    }

    fn sum_part_time_fractions(&self) -> EngineResult<Decimal> {
        self.record_call();
        Ok(self.sum_part_time_fractions)
    }

    fn average_performance(&self, _prefix: char) -> EngineResult<Option<Decimal>> {
        self.record_call();
        Ok(self.average_performance)
    }
}
