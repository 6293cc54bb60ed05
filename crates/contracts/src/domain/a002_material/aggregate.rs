use crate::domain::common::HasId;
use crate::shared::validation::{FieldErrors, ValidationRules};
use serde::{Deserialize, Serialize};

/// Сырьё на складе (`GET /materials`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: f64,
}

impl HasId for Material {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Body of `POST /materials` and `PUT /materials/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPayload {
    pub name: String,
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialForm {
    pub name: String,
    pub description: String,
    pub amount: f64,
}

const NAME_RULES: ValidationRules = ValidationRules::required().min_length(2);
const DESCRIPTION_RULES: ValidationRules = ValidationRules::required().min_length(5);
const AMOUNT_RULES: ValidationRules = ValidationRules::required().min(0.0);

impl MaterialForm {
    pub fn from_material(material: Material) -> Self {
        Self {
            name: material.name,
            description: material.description,
            amount: material.amount,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME_RULES.validate_string(&self.name, "Name"));
        errors.check(
            "description",
            DESCRIPTION_RULES.validate_string(&self.description, "Description"),
        );
        errors.check("amount", AMOUNT_RULES.validate_number(self.amount, "Amount"));
        errors
    }

    pub fn to_payload(&self) -> MaterialPayload {
        MaterialPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            amount: self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_material() {
        let form = MaterialForm {
            name: "Steel".to_string(),
            description: "Cold rolled sheet".to_string(),
            amount: 0.0,
        };
        assert!(form.validate().is_empty());
        assert_eq!(form.to_payload().name, "Steel");
    }

    #[test]
    fn test_invalid_material() {
        let form = MaterialForm {
            name: "S".to_string(),
            description: String::new(),
            amount: -3.0,
        };
        let errors = form.validate();
        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
        assert_eq!(errors.get("description"), Some("Description is required"));
        assert_eq!(errors.get("amount"), Some("Amount must be at least 0"));
    }

    #[test]
    fn test_decodes_list_item() {
        let m: Material =
            serde_json::from_str(r#"{"id":7,"name":"Bolt M8","description":"Hex bolt","amount":120}"#)
                .unwrap();
        assert_eq!(m.id(), 7);
        assert_eq!(m.amount, 120.0);
    }
}
