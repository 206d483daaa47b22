//! Salary increase validation and application.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Employee};

/// The result of a salary increase, including the audit step.
#[derive(Debug, Clone)]
pub struct SalaryIncreaseResult {
    /// Salary before the increase.
    pub previous_salary: Decimal,
    /// Salary after the increase, to the cent.
    pub new_salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Rounds a monetary amount to the cent, halves away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_cents(Decimal::from_str("1825.464").unwrap()).to_string(), "1825.46");
/// assert_eq!(round_to_cents(Decimal::from_str("0.125").unwrap()).to_string(), "0.13");
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Raises an employee's salary by `percentage` percent.
///
/// The new salary is `salary × (1 + percentage / 100)` rounded to the cent.
///
/// # Returns
///
/// Returns the before/after salaries, or `InvalidOperation` when
/// `percentage` is zero or negative, or when the rounded salary would not
/// be higher than the current one. The employee is not modified on error.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::increase_salary;
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::new(
///     "Doe", "John", "T00001".parse().unwrap(),
///     None, Decimal::new(100000, 2), None, Decimal::ONE,
/// ).unwrap();
///
/// increase_salary(&mut employee, Decimal::new(10, 0), 1).unwrap();
/// assert_eq!(employee.salary, Decimal::new(110000, 2));
/// ```
pub fn increase_salary(
    employee: &mut Employee,
    percentage: Decimal,
    step_number: u32,
) -> EngineResult<SalaryIncreaseResult> {
    if percentage <= Decimal::ZERO {
        return Err(EngineError::InvalidOperation {
            message: "salary decrease is not allowed".to_string(),
        });
    }

    let previous_salary = employee.salary;
    let factor = Decimal::ONE + percentage / Decimal::ONE_HUNDRED;
    let new_salary = previous_salary
        .checked_mul(factor)
        .map(round_to_cents)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("salary {} x {} overflows", previous_salary, factor),
        })?;

    if new_salary <= previous_salary {
        return Err(EngineError::InvalidOperation {
            message: format!(
                "a {}% increase leaves salary {} unchanged",
                percentage.normalize(),
                previous_salary
            ),
        });
    }

    employee.salary = new_salary;

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_increase".to_string(),
        rule_name: "Salary Increase".to_string(),
        policy_ref: "salary".to_string(),
        input: serde_json::json!({
            "salary": previous_salary.to_string(),
            "percentage": percentage.normalize().to_string()
        }),
        output: serde_json::json!({ "salary": new_salary.to_string() }),
        reasoning: format!(
            "{} x (1 + {}/100) = {}, rounded to {}",
            previous_salary,
            percentage.normalize(),
            (previous_salary * factor).normalize(),
            new_salary
        ),
    };

    Ok(SalaryIncreaseResult {
        previous_salary,
        new_salary,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_employee(salary: &str) -> Employee {
        Employee::new(
            "Doe",
            "John",
            "T00001".parse().unwrap(),
            None,
            dec(salary),
            None,
            Decimal::ONE,
        )
        .unwrap()
    }

    #[test]
    fn test_ten_percent_increase() {
        let mut employee = create_employee("1000.00");
        let result = increase_salary(&mut employee, dec("10"), 1).unwrap();

        assert_eq!(result.previous_salary, dec("1000.00"));
        assert_eq!(result.new_salary, dec("1100.00"));
        assert_eq!(employee.salary, dec("1100.00"));
    }

    #[test]
    fn test_increase_rounds_to_cents() {
        // 1521.22 x 1.035 = 1574.4627
        let mut employee = create_employee("1521.22");
        increase_salary(&mut employee, dec("3.5"), 1).unwrap();
        assert_eq!(employee.salary, dec("1574.46"));
        assert_eq!(employee.salary.scale(), 2);
    }

    #[test]
    fn test_increase_rounds_half_up() {
        // 10.05 x 1.5 = 15.075
        let mut employee = create_employee("10.05");
        increase_salary(&mut employee, dec("50"), 1).unwrap();
        assert_eq!(employee.salary, dec("15.08"));
    }

    #[test]
    fn test_zero_percentage_is_rejected() {
        let mut employee = create_employee("1000.00");
        let result = increase_salary(&mut employee, Decimal::ZERO, 1);

        match result {
            Err(EngineError::InvalidOperation { message }) => {
                assert_eq!(message, "salary decrease is not allowed")
            }
            other => panic!("Expected InvalidOperation, got {:?}", other),
        }
        assert_eq!(employee.salary, dec("1000.00"));
    }

    #[test]
    fn test_negative_percentage_is_rejected() {
        let mut employee = create_employee("1000.00");
        let result = increase_salary(&mut employee, dec("-5"), 1);
        assert!(matches!(result, Err(EngineError::InvalidOperation { .. })));
        assert_eq!(employee.salary, dec("1000.00"));
    }

    #[test]
    fn test_increase_that_rounds_to_no_change_is_rejected() {
        // (salary, percentage)
        let cases = [("0.01", "10"), ("0", "10"), ("1000.00", "0.0001")];

        for (salary, percentage) in cases {
            let mut employee = create_employee(salary);
            let result = increase_salary(&mut employee, dec(percentage), 1);

            match result {
                Err(EngineError::InvalidOperation { message }) => {
                    assert!(message.contains("unchanged"), "{}", message)
                }
                other => panic!("Expected InvalidOperation for {} +{}%, got {:?}", salary, percentage, other),
            }
            assert_eq!(employee.salary, dec(salary));
        }
    }

    #[test]
    fn test_smallest_raise_that_moves_a_cent() {
        // 0.10 x 1.05 = 0.105
        let mut employee = create_employee("0.10");
        increase_salary(&mut employee, dec("5"), 1).unwrap();
        assert_eq!(employee.salary, dec("0.11"));
    }

    #[test]
    fn test_audit_step_records_before_and_after() {
        let mut employee = create_employee("1000.00");
        let result = increase_salary(&mut employee, dec("10"), 2).unwrap();

        assert_eq!(result.audit_step.rule_id, "salary_increase");
        assert_eq!(result.audit_step.input["salary"], "1000.00");
        assert_eq!(result.audit_step.input["percentage"], "10");
        assert_eq!(result.audit_step.output["salary"], "1100.00");
    }
}
