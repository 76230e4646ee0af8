use itertools::Itertools;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Number of base58 characters in an encoded 32-byte public key
pub const ADDRESS_LENGTH: usize = 44;

/// Hard failures of an address check, in the order they are checked
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Address cannot be empty")]
    EmptyInput,

    #[error("Address contains invalid base58 characters")]
    InvalidCharacterSet,

    #[error("Address length is {length} characters, expected 44 characters")]
    InvalidLength { length: usize },
}

/// Advisories that do not affect validity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressWarning {
    /// Characters that are easy to mistake for one another, in order of appearance
    ConfusableCharacters(Vec<char>),
}

impl fmt::Display for AddressWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressWarning::ConfusableCharacters(chars) => write!(
                f,
                "Address contains potentially confusing characters: {}",
                chars.iter().join(", ")
            ),
        }
    }
}

/// Outcome of validating one candidate address.
///
/// A result is either valid (no errors, maybe warnings) or invalid with
/// exactly the first failing check recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    #[serde(skip)]
    error: Option<AddressError>,
    #[serde(skip)]
    warning: Option<AddressWarning>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        ValidationResult {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            error: None,
            warning: None,
        }
    }

    /// Build a failed result carrying a single error
    pub fn invalid(error: AddressError) -> Self {
        let mut result = Self::new();
        result.add_error(error);
        result
    }

    pub fn add_error(&mut self, error: AddressError) {
        self.is_valid = false;
        self.errors.push(error.to_string());
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    pub fn add_warning(&mut self, warning: AddressWarning) {
        self.warnings.push(warning.to_string());
        if self.warning.is_none() {
            self.warning = Some(warning);
        }
    }

    /// The check that failed, if any
    pub fn error(&self) -> Option<&AddressError> {
        self.error.as_ref()
    }

    /// The first warning raised, if any
    pub fn warning(&self) -> Option<&AddressWarning> {
        self.warning.as_ref()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Single-line summary, the way the result region shows it
    pub fn summary(&self) -> String {
        if self.is_valid {
            if !self.has_warnings() {
                "Valid Solana address".to_string()
            } else {
                format!("Valid Solana address ({})", self.warnings.join(", "))
            }
        } else {
            self.errors.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AddressError::EmptyInput.to_string(),
            "Address cannot be empty"
        );
        assert_eq!(
            AddressError::InvalidCharacterSet.to_string(),
            "Address contains invalid base58 characters"
        );
        assert_eq!(
            AddressError::InvalidLength { length: 32 }.to_string(),
            "Address length is 32 characters, expected 44 characters"
        );
    }

    #[test]
    fn test_warning_lists_every_match() {
        let warning = AddressWarning::ConfusableCharacters(vec!['0', 'l', '0']);
        assert_eq!(
            warning.to_string(),
            "Address contains potentially confusing characters: 0, l, 0"
        );
    }

    #[test]
    fn test_add_error_marks_invalid() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid);

        result.add_error(AddressError::InvalidCharacterSet);
        assert!(!result.is_valid);
        assert_eq!(result.error(), Some(&AddressError::InvalidCharacterSet));
        assert_eq!(result.summary(), "Address contains invalid base58 characters");
    }

    #[test]
    fn test_warning_keeps_result_valid() {
        let mut result = ValidationResult::new();
        result.add_warning(AddressWarning::ConfusableCharacters(vec!['O']));

        assert!(result.is_valid);
        assert!(result.has_warnings());
        assert_eq!(
            result.warning(),
            Some(&AddressWarning::ConfusableCharacters(vec!['O']))
        );
        assert!(ValidationResult::new().warning().is_none());
        assert_eq!(
            result.summary(),
            "Valid Solana address (Address contains potentially confusing characters: O)"
        );
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let result = ValidationResult::invalid(AddressError::EmptyInput);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["isValid"], false);
        assert_eq!(json["errors"][0], "Address cannot be empty");
        assert!(json["warnings"].as_array().unwrap().is_empty());
        assert!(json.get("error").is_none());
    }
}
