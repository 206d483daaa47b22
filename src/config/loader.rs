//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the enterprise
//! policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EnterprisePolicy, HolidayCalendar, PolicyConstants, SalaryFactorsConfig};

/// Loads the enterprise policy from a configuration directory.
///
/// # Directory Structure
///
/// ```text
/// config/enterprise/
/// ├── policy.yaml          # Salary, leave and bonus constants
/// ├── salary_factors.yaml  # Education level -> hiring salary factor
/// └── holidays.yaml        # Fixed and Easter-relative public holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/enterprise").unwrap();
/// println!("Base salary: {}", loader.policy().constants().base_salary);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: EnterprisePolicy,
}

impl PolicyLoader {
    /// Loads the policy from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - A value breaks a policy invariant (`InvalidPolicy`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let constants = Self::load_yaml::<PolicyConstants>(&path.join("policy.yaml"))?;
        let factors = Self::load_yaml::<SalaryFactorsConfig>(&path.join("salary_factors.yaml"))?;
        let holidays = Self::load_yaml::<HolidayCalendar>(&path.join("holidays.yaml"))?;

        let policy = EnterprisePolicy::new(constants, factors.salary_factors, holidays)?;
        debug!(path = %path.display(), "Loaded enterprise policy");

        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &EnterprisePolicy {
        &self.policy
    }

    /// Consumes the loader, returning the policy.
    pub fn into_policy(self) -> EnterprisePolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationLevel, JobTitle};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/enterprise"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "payroll-engine-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn copy_config_to(dir: &Path) {
        for file in ["policy.yaml", "salary_factors.yaml", "holidays.yaml"] {
            fs::copy(Path::new(config_path()).join(file), dir.join(file)).unwrap();
        }
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = PolicyLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy().constants().base_salary, dec("1521.22"));
        assert_eq!(loader.policy().constants().base_leave_days, 25);
    }

    #[test]
    fn test_loaded_policy_matches_default() {
        let loader = PolicyLoader::load(config_path()).unwrap();
        assert_eq!(loader.into_policy(), EnterprisePolicy::default());
    }

    #[test]
    fn test_salary_factors_loaded_correctly() {
        let loader = PolicyLoader::load(config_path()).unwrap();
        let factor = loader
            .policy()
            .salary_factor(JobTitle::Technician, EducationLevel::BtsIut)
            .unwrap();
        assert_eq!(factor, dec("1.2"));
        assert_eq!(loader.policy().salary_factors().len(), 7);
    }

    #[test]
    fn test_holidays_loaded_correctly() {
        let loader = PolicyLoader::load(config_path()).unwrap();
        let holidays = loader.policy().holidays();
        assert_eq!(holidays.fixed.len(), 8);
        assert_eq!(holidays.easter_relative.len(), 1);
        assert_eq!(holidays.easter_relative[0].offset_days, 39);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = PolicyLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let dir = scratch_dir("malformed");
        copy_config_to(&dir);
        fs::write(dir.join("policy.yaml"), "base_salary: [unclosed").unwrap();

        let result = PolicyLoader::load(&dir);
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.ends_with("policy.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_rejects_invalid_policy_values() {
        let dir = scratch_dir("invalid");
        copy_config_to(&dir);
        let policy = fs::read_to_string(dir.join("policy.yaml")).unwrap();
        fs::write(
            dir.join("policy.yaml"),
            policy.replace("base_salary: \"1521.22\"", "base_salary: \"-5\""),
        )
        .unwrap();

        let result = PolicyLoader::load(&dir);
        assert!(matches!(
            result,
            Err(EngineError::InvalidPolicy { field, .. }) if field == "base_salary"
        ));

        fs::remove_dir_all(dir).unwrap();
    }
}
