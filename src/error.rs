//! Error types for the payroll engine.
//!
//! Every failure the business rules, the policy loader and the storage layer
//! can raise is a variant of [`EngineError`]. The `Display` output of each
//! variant is part of the observable contract: callers match on it.

use thiserror::Error;

/// Failure raised by any engine operation.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::AlreadyExists {
///     matricule: "M00001".to_string(),
/// };
/// assert_eq!(error.to_string(), "employee with matricule M00001 already exists");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A policy file is missing from the config directory.
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path of the missing file.
        path: String,
    },

    /// A policy file is not valid YAML for its schema.
    #[error("failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// Path of the rejected file.
        path: String,
        /// Parser message.
        message: String,
    },

    /// A policy value was syntactically valid but semantically wrong.
    #[error("invalid policy value '{field}': {message}")]
    InvalidPolicy {
        /// The offending policy field.
        field: String,
        /// A description of the violation.
        message: String,
    },

    /// No salary factor is configured for the education level.
    #[error("salary factor not found for education level: {education_level}")]
    SalaryFactorNotFound {
        /// The education level that has no factor.
        education_level: String,
    },

    /// The operation is not permitted on the employee (e.g. a salary decrease).
    #[error("{message}")]
    InvalidOperation {
        /// A description of the refused operation.
        message: String,
    },

    /// The matricule numbering space is exhausted.
    #[error("matricule limit of {limit} reached")]
    CapacityExceeded {
        /// The number of matricules the numbering space holds.
        limit: u32,
    },

    /// An employee with the matricule is already stored.
    #[error("employee with matricule {matricule} already exists")]
    AlreadyExists {
        /// The colliding matricule.
        matricule: String,
    },

    /// An aggregate was requested over an empty workforce.
    #[error("no employees, cannot compute average salary")]
    EmptyPopulation,

    /// A caller-supplied argument was absent or out of range.
    #[error("{message}")]
    InvalidInput {
        /// A description of the rejected input.
        message: String,
    },

    /// No employee is stored under the matricule.
    #[error("employee with matricule {matricule} does not exist")]
    EmployeeNotFound {
        /// The matricule that was looked up.
        matricule: String,
    },

    /// A matricule string could not be parsed or built.
    #[error("invalid matricule '{value}': {message}")]
    InvalidMatricule {
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        message: String,
    },

    /// An employee field breaks a record invariant.
    #[error("invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// Name of the field, e.g. `part_time_fraction`.
        field: String,
        /// The violated constraint.
        message: String,
    },

    /// The storage collaborator failed.
    #[error("storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },

    /// Decimal arithmetic failed: overflow or a zero divisor.
    #[error("calculation error: {message}")]
    CalculationError {
        /// What failed.
        message: String,
    },
}

/// Result alias used across the crate.
pub type EngineResult<T> = Result<T, EngineError>;
