use crate::domain::common::HasId;
use crate::shared::validation::{FieldErrors, ValidationRules};
use serde::{Deserialize, Serialize};

/// Строка списка продуктов (`GET /products`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub active: bool,
}

impl HasId for Product {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Material line of a product recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMaterial {
    /// Material id; `0` means "not selected yet".
    pub id: i64,
    pub required_quantity: f64,
}

impl Default for ProductMaterial {
    fn default() -> Self {
        Self {
            id: 0,
            required_quantity: 1.0,
        }
    }
}

/// Full product as returned by `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub materials: Vec<ProductMaterial>,
}

/// Body of `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub code: String,
    pub active: bool,
    pub price: f64,
    pub materials: Vec<ProductMaterial>,
}

/// Edit buffer of the product form. Price is kept as typed text.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub code: String,
    pub active: bool,
    pub price: String,
    pub materials: Vec<ProductMaterial>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            code: String::new(),
            active: true,
            price: "0.00".to_string(),
            materials: vec![ProductMaterial::default()],
        }
    }
}

const NAME_RULES: ValidationRules = ValidationRules::required().min_length(2);
const DESCRIPTION_RULES: ValidationRules = ValidationRules::required().min_length(5);
const PRICE_RULES: ValidationRules = ValidationRules::required().min(0.0);
const QUANTITY_RULES: ValidationRules = ValidationRules::required().min(1.0);

impl ProductForm {
    pub fn from_details(details: ProductDetails) -> Self {
        Self {
            name: details.name,
            description: details.description,
            code: details.code,
            active: details.active,
            price: format!("{:.2}", details.price),
            materials: details.materials,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME_RULES.validate_string(&self.name, "Name"));
        errors.check(
            "description",
            DESCRIPTION_RULES.validate_string(&self.description, "Description"),
        );

        match parse_price(&self.price) {
            Some(price) => errors.check("price", PRICE_RULES.validate_number(price, "Price")),
            None => errors.insert("price", "Price must be a valid amount"),
        }

        if self.materials.is_empty() {
            errors.insert("materials", "At least one material is required");
        }
        for (i, line) in self.materials.iter().enumerate() {
            if line.id <= 0 {
                errors.insert(format!("materials[{}].id", i), "Material is required");
            }
            errors.check(
                format!("materials[{}].requiredQuantity", i),
                QUANTITY_RULES.validate_number(line.required_quantity, "Quantity"),
            );
        }

        errors
    }

    /// Builds the request body. Call only after [`ProductForm::validate`]
    /// returned no errors; an unparsable price is sent as `0`.
    pub fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            code: self.code.trim().to_string(),
            active: self.active,
            price: parse_price(&self.price).unwrap_or(0.0),
            materials: self.materials.clone(),
        }
    }

    pub fn add_material_line(&mut self) {
        self.materials.push(ProductMaterial::default());
    }

    pub fn remove_material_line(&mut self, index: usize) {
        if index < self.materials.len() {
            self.materials.remove(index);
        }
    }

    pub fn set_material_id(&mut self, index: usize, id: i64) {
        if let Some(line) = self.materials.get_mut(index) {
            line.id = id;
        }
    }

    pub fn set_material_quantity(&mut self, index: usize, quantity: f64) {
        if let Some(line) = self.materials.get_mut(index) {
            line.required_quantity = quantity;
        }
    }
}

/// Digits with at most two fraction digits; `,` counts as `.`.
fn parse_price(text: &str) -> Option<f64> {
    let text = normalize_price_input(text.trim())?;
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Filters a keystroke in the price box: `,` is read as `.`, only digits
/// and at most two fraction digits are allowed. `None` rejects the input.
pub fn normalize_price_input(text: &str) -> Option<String> {
    let formatted = text.replace(',', ".");
    let mut parts = formatted.splitn(2, '.');
    let integer = parts.next().unwrap_or("");
    let fraction = parts.next();

    if !integer.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if let Some(fraction) = fraction {
        if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
    }
    Some(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProductForm {
        ProductForm {
            name: "Table".to_string(),
            description: "Oak dining table".to_string(),
            code: "TB-01".to_string(),
            active: true,
            price: "199.90".to_string(),
            materials: vec![ProductMaterial {
                id: 4,
                required_quantity: 2.0,
            }],
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_default_form_reports_every_missing_field() {
        let errors = ProductForm::default().validate();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("description"), Some("Description is required"));
        assert_eq!(errors.get("materials[0].id"), Some("Material is required"));
        assert_eq!(errors.get("price"), None);
    }

    #[test]
    fn test_short_values() {
        let mut form = valid_form();
        form.name = "T".to_string();
        form.description = "Oak".to_string();
        let errors = form.validate();
        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
        assert_eq!(
            errors.get("description"),
            Some("Description must be at least 5 characters")
        );
    }

    #[test]
    fn test_nested_material_paths() {
        let mut form = valid_form();
        form.add_material_line();
        form.set_material_id(1, 9);
        form.set_material_quantity(1, 0.0);
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("materials[1].requiredQuantity"),
            Some("Quantity must be at least 1")
        );
    }

    #[test]
    fn test_no_material_lines() {
        let mut form = valid_form();
        form.remove_material_line(0);
        form.remove_material_line(3);
        assert_eq!(
            form.validate().get("materials"),
            Some("At least one material is required")
        );
    }

    #[test]
    fn test_bad_price() {
        let mut form = valid_form();
        form.price = String::new();
        assert_eq!(form.validate().get("price"), Some("Price must be a valid amount"));
        form.price = "12.555".to_string();
        assert_eq!(form.validate().get("price"), Some("Price must be a valid amount"));
        form.price = "12,5".to_string();
        assert_eq!(form.validate().get("price"), None);
    }

    #[test]
    fn test_payload_shape() {
        let payload = valid_form().to_payload();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["price"], 199.9);
        assert_eq!(json["materials"][0]["requiredQuantity"], 2.0);
        assert_eq!(json["code"], "TB-01");
    }

    #[test]
    fn test_round_trip_from_details() {
        let details = ProductDetails {
            id: 3,
            name: "Chair".to_string(),
            description: "Plain chair".to_string(),
            code: "CH".to_string(),
            active: false,
            price: 12.5,
            materials: vec![],
        };
        let form = ProductForm::from_details(details);
        assert_eq!(form.price, "12.50");
        assert!(!form.active);
    }

    #[test]
    fn test_price_input_filter() {
        assert_eq!(normalize_price_input("12,5"), Some("12.5".to_string()));
        assert_eq!(normalize_price_input("12.55"), Some("12.55".to_string()));
        assert_eq!(normalize_price_input(""), Some(String::new()));
        assert_eq!(normalize_price_input("."), Some(".".to_string()));
        assert_eq!(normalize_price_input("12.555"), None);
        assert_eq!(normalize_price_input("1a"), None);
        assert_eq!(normalize_price_input("1.2.3"), None);
        assert_eq!(normalize_price_input("-1"), None);
    }
}
