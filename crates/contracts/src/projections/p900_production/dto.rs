use crate::domain::common::HasId;
use serde::{Deserialize, Serialize};

/// Production capacity of one product (`GET /products/production`).
///
/// All values are computed by the server from current stock and recipes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRow {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: String,
    pub unit_value: f64,
    pub production_value: f64,
    pub producible_amount: i64,
}

impl HasId for ProductionRow {
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_report_row() {
        let json = r#"{"id":1,"name":"Table","code":"TB-01","unitValue":199.9,"productionValue":999.5,"producibleAmount":5}"#;
        let row: ProductionRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.producible_amount, 5);
        assert_eq!(row.production_value, 999.5);
    }
}
