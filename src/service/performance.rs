//! Commercial performance updates.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::calculation::score_commercial_performance;
use crate::error::{EngineError, EngineResult};
use crate::models::{Matricule, Role};
use crate::storage::EmployeeRepository;

use super::EmployeeService;

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Rescores the commercial employee `matricule` from the revenue achieved
    /// against its target, persists the new score and returns it.
    ///
    /// # Returns
    ///
    /// Returns the new performance score, or an error if:
    /// - `achieved_revenue` is absent or negative (`InvalidInput`)
    /// - `target_revenue` is absent, zero or negative (`InvalidInput`)
    /// - `matricule` is not a commercial matricule (`InvalidInput`)
    /// - no employee holds `matricule` (`EmployeeNotFound`)
    pub fn compute_commercial_performance(
        &self,
        matricule: &str,
        achieved_revenue: Option<i64>,
        target_revenue: Option<i64>,
    ) -> EngineResult<u32> {
        let achieved = match achieved_revenue {
            Some(value) if value >= 0 => Decimal::from(value),
            _ => return Err(reject("achieved revenue cannot be negative or null")),
        };
        let target = match target_revenue {
            Some(value) if value > 0 => Decimal::from(value),
            _ => return Err(reject("revenue target cannot be negative, zero or null")),
        };
        let matricule = match matricule.parse::<Matricule>() {
            Ok(parsed) if parsed.role() == Role::Commercial => parsed,
            _ => return Err(reject("matricule must belong to a commercial employee")),
        };

        let mut employee = self.require_employee(&matricule)?;
        let average = self
            .repository
            .average_performance(matricule.prefix())?;
        debug!(average = ?average, "Commercial average performance");

        let result = score_commercial_performance(
            employee.performance,
            achieved,
            target,
            self.policy.constants().base_performance,
            average,
            1,
        );

        employee.performance = Some(result.performance);
        let saved = self.repository.save(employee)?;
        info!(
            matricule = %saved.matricule,
            band = ?result.band,
            performance = result.performance,
            "Updated commercial performance"
        );
        Ok(result.performance)
    }
}

fn reject(message: &str) -> EngineError {
    warn!(reason = message, "Rejected performance update");
    EngineError::InvalidInput {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnterprisePolicy;
    use crate::models::Employee;
    use crate::service::stub::StubRepository;
    use std::str::FromStr;
    use std::sync::Arc;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_commercial(performance: Option<u32>) -> Employee {
        Employee::new(
            "Doe",
            "John",
            "C00012".parse().unwrap(),
            None,
            dec("2000.00"),
            performance,
            Decimal::ONE,
        )
        .unwrap()
    }

    fn score(
        performance: Option<u32>,
        average: Option<&str>,
        achieved: i64,
        target: i64,
    ) -> (u32, Arc<StubRepository>) {
        let mut stub = StubRepository::default().with_employee(create_test_commercial(performance));
        if let Some(average) = average {
            stub = stub.with_average_performance(dec(average));
        }
        let repository = Arc::new(stub);
        let service = EmployeeService::new(Arc::clone(&repository), EnterprisePolicy::default());

        let result = service
            .compute_commercial_performance("C00012", Some(achieved), Some(target))
            .unwrap();
        (result, repository)
    }

    fn assert_invalid_input(result: EngineResult<u32>, expected: &str) {
        match result {
            Err(err @ EngineError::InvalidInput { .. }) => assert_eq!(err.to_string(), expected),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_scoring_curve() {
        // (current, average, achieved, target, expected)
        let cases = [
            (Some(2), Some("2"), 500, 1000, 1),
            (Some(10), Some("5"), 850, 1000, 9),
            (Some(2), None, 850, 1000, 1),
            (Some(4), Some("4"), 1000, 1000, 4),
            (Some(4), Some("4"), 950, 1000, 4),
            (Some(4), None, 1050, 1000, 4),
            (Some(3), None, 1100, 1000, 4),
            (Some(3), None, 1200, 1000, 4),
            (Some(3), Some("2"), 1300, 1000, 8),
            (None, None, 1300, 1000, 5),
        ];

        for (current, average, achieved, target, expected) in cases {
            let (performance, _) = score(current, average, achieved, target);
            assert_eq!(
                performance, expected,
                "current {:?}, average {:?}, {}/{}",
                current, average, achieved, target
            );
        }
    }

    #[test]
    fn test_new_score_is_persisted() {
        let (performance, repository) = score(Some(3), None, 1300, 1000);

        let saved = repository.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].matricule.to_string(), "C00012");
        assert_eq!(saved[0].performance, Some(performance));
    }

    #[test]
    fn test_rejects_missing_or_negative_achieved_revenue() {
        let service = EmployeeService::new(StubRepository::default(), EnterprisePolicy::default());

        for achieved in [None, Some(-1)] {
            assert_invalid_input(
                service.compute_commercial_performance("C00012", achieved, Some(1000)),
                "achieved revenue cannot be negative or null",
            );
        }
    }

    #[test]
    fn test_rejects_missing_zero_or_negative_target() {
        let service = EmployeeService::new(StubRepository::default(), EnterprisePolicy::default());

        for target in [None, Some(0), Some(-1000)] {
            assert_invalid_input(
                service.compute_commercial_performance("C00012", Some(1000), target),
                "revenue target cannot be negative, zero or null",
            );
        }
    }

    #[test]
    fn test_rejects_non_commercial_matricule() {
        let repository = Arc::new(StubRepository::default());
        let service = EmployeeService::new(Arc::clone(&repository), EnterprisePolicy::default());

        for matricule in ["T00012", "M00012", "", "C12"] {
            assert_invalid_input(
                service.compute_commercial_performance(matricule, Some(1000), Some(1000)),
                "matricule must belong to a commercial employee",
            );
        }
        assert_eq!(repository.calls(), 0);
    }

    #[test]
    fn test_unknown_commercial() {
        let service = EmployeeService::new(StubRepository::default(), EnterprisePolicy::default());

        match service.compute_commercial_performance("C00099", Some(1000), Some(1000)) {
            Err(err @ EngineError::EmployeeNotFound { .. }) => assert_eq!(
                err.to_string(),
                "employee with matricule C00099 does not exist"
            ),
            other => panic!("Expected EmployeeNotFound, got {:?}", other),
        }
    }
}
