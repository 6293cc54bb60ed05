//! Единственный источник правды для заголовков табов.

/// Human readable title of a list or "new" tab. Fallback: the key itself.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "a001_product" => "Products",
        "a001_product_new" => "New Product",
        "a002_material" => "Raw Materials",
        "a002_material_new" => "New Raw Material",
        "p900_production" => "Production",
        _ => key,
    }
}

/// Key of a detail tab: `<aggregate>_detail_<id>`.
pub fn detail_tab_key(aggregate_key: &str, id: i64) -> String {
    format!("{}_detail_{}", aggregate_key, id)
}

/// Заголовок detail-таба: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

/// Parses the id back out of a detail tab key.
pub fn parse_detail_id(key: &str, aggregate_key: &str) -> Option<i64> {
    key.strip_prefix(aggregate_key)?
        .strip_prefix("_detail_")?
        .parse()
        .ok()
}
