//! In-memory employee repository.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Matricule};

use super::EmployeeRepository;

/// Employee repository held in process memory.
///
/// Matricule uniqueness is enforced on [`save`](EmployeeRepository::save),
/// under the same write lock as the insert.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
/// use payroll_engine::storage::{EmployeeRepository, InMemoryEmployeeRepository};
/// use rust_decimal::Decimal;
///
/// let repository = InMemoryEmployeeRepository::new();
/// let employee = Employee::new(
///     "Doe", "John", "T00007".parse().unwrap(),
///     None, Decimal::new(152122, 2), Some(1), Decimal::ONE,
/// ).unwrap();
///
/// let saved = repository.save(employee).unwrap();
/// assert!(saved.id.is_some());
/// assert_eq!(repository.find_last_matricule().unwrap().as_deref(), Some("00007"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: RwLock<HashMap<Uuid, Employee>>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `employees`, each saved in turn.
    pub fn with_employees(
        employees: impl IntoIterator<Item = Employee>,
    ) -> EngineResult<Self> {
        let repository = Self::new();
        for employee in employees {
            repository.save(employee)?;
        }
        Ok(repository)
    }

    /// Every stored employee, in matricule order.
    pub fn all(&self) -> EngineResult<Vec<Employee>> {
        let mut employees: Vec<Employee> = self.read()?.values().cloned().collect();
        employees.sort_by_key(|e| e.matricule.to_string());
        Ok(employees)
    }

    fn read(&self) -> EngineResult<RwLockReadGuard<'_, HashMap<Uuid, Employee>>> {
        self.employees.read().map_err(|_| EngineError::Storage {
            message: "employee store lock poisoned".to_string(),
        })
    }

    fn write(&self) -> EngineResult<RwLockWriteGuard<'_, HashMap<Uuid, Employee>>> {
        self.employees.write().map_err(|_| EngineError::Storage {
            message: "employee store lock poisoned".to_string(),
        })
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn find_last_matricule(&self) -> EngineResult<Option<String>> {
        Ok(self
            .read()?
            .values()
            .map(|e| e.matricule)
            .max_by_key(Matricule::number)
            .map(|m| m.suffix()))
    }

    fn find_by_matricule(&self, matricule: &Matricule) -> EngineResult<Option<Employee>> {
        Ok(self
            .read()?
            .values()
            .find(|e| &e.matricule == matricule)
            .cloned())
    }

    fn save(&self, mut employee: Employee) -> EngineResult<Employee> {
        employee.validate()?;

        let mut employees = self.write()?;
        let id = *employee.id.get_or_insert_with(Uuid::new_v4);

        let collision = employees
            .values()
            .any(|e| e.matricule == employee.matricule && e.id != Some(id));
        if collision {
            return Err(EngineError::AlreadyExists {
                matricule: employee.matricule.to_string(),
            });
        }

        employees.insert(id, employee.clone());
        Ok(employee)
    }

    fn count(&self) -> EngineResult<u64> {
        Ok(self.read()?.len() as u64)
    }

    fn sum_salaries(&self) -> EngineResult<Decimal> {
        Ok(self.read()?.values().map(|e| e.salary).sum())
    }

    fn sum_part_time_fractions(&self) -> EngineResult<Decimal> {
        Ok(self.read()?.values().map(|e| e.part_time_fraction).sum())
    }

    fn average_performance(&self, prefix: char) -> EngineResult<Option<Decimal>> {
        let employees = self.read()?;
        let scores: Vec<u32> = employees
            .values()
            .filter(|e| e.matricule.prefix() == prefix)
            .filter_map(|e| e.performance)
            .collect();

        if scores.is_empty() {
            return Ok(None);
        }
        let total: Decimal = scores.iter().copied().map(Decimal::from).sum();
        Ok(Some(total / Decimal::from(scores.len() as u64)))
    }
}
