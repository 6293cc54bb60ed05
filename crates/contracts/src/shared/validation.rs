//! Client-side form validation
//!
//! Validation runs before any request is sent. Errors are keyed by field
//! path, including nested paths such as `materials[0].id`.

use std::collections::BTreeMap;

/// Field path -> message. Only the first error per path is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.entry(path.into()).or_insert_with(|| message.into());
    }

    /// Records the error of a rule check, if any.
    pub fn check(&mut self, path: impl Into<String>, result: Result<(), String>) {
        if let Err(message) = result {
            self.insert(path, message);
        }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

}

/// Validation rules for a single field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub min_length: Option<usize>,
}

impl ValidationRules {
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            min_length: None,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if self.required && trimmed.is_empty() {
            return Err(format!("{} is required", field_label));
        }

        // counted in characters, not bytes
        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "{} must be at least {} characters",
                    field_label, min
                ));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against the min rule
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if !value.is_finite() {
            return Err(format!("{} is required", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "Name"),
            Err("Name is required".to_string())
        );
        assert!(rules.validate_string("ok", "Name").is_ok());
    }

    #[test]
    fn test_min_length_counts_chars() {
        let rules = ValidationRules::required().min_length(2);
        assert_eq!(
            rules.validate_string("a", "Name"),
            Err("Name must be at least 2 characters".to_string())
        );
        assert!(rules.validate_string("ая", "Name").is_ok());
    }

    #[test]
    fn test_number_min() {
        let rules = ValidationRules::required().min(0.0);
        assert_eq!(
            rules.validate_number(-1.0, "Amount"),
            Err("Amount must be at least 0".to_string())
        );
        assert!(rules.validate_number(0.0, "Amount").is_ok());
        assert!(rules.validate_number(f64::NAN, "Amount").is_err());
    }

    #[test]
    fn test_first_error_per_path_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "first");
        errors.insert("name", "second");
        errors.check("amount", Ok(()));
        assert_eq!(errors.get("name"), Some("first"));
        assert_eq!(errors.len(), 1);
        assert!(!errors.is_empty());
    }
}
