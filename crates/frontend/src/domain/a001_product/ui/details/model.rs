use crate::shared::gateway::{item_path, RemoteGateway};
use contracts::domain::a001_product::{ProductDetails, ProductPayload};
use contracts::domain::a002_material::Material;
use contracts::shared::api_response::ApiResponse;
use contracts::shared::page::{ListQuery, PageResult};

const PRODUCTS_PATH: &str = "/products";
const MATERIALS_PATH: &str = "/materials";

/// Loads one product by id
pub async fn fetch_by_id(gateway: &RemoteGateway, id: i64) -> Result<ProductDetails, String> {
    gateway
        .get::<ProductDetails>(&item_path(PRODUCTS_PATH, id))
        .await
        .map_err(|e| e.to_string())?
        .into_result()
        .map_err(|e| format!("Failed to load product: {}", e.summary()))
}

/// Creates (`id = None`) or updates a product. Returns the server message.
pub async fn save_form(
    gateway: &RemoteGateway,
    id: Option<i64>,
    payload: &ProductPayload,
) -> Result<String, String> {
    let envelope: ApiResponse<serde_json::Value> = match id {
        Some(id) => gateway.update(&item_path(PRODUCTS_PATH, id), payload).await,
        None => gateway.create(PRODUCTS_PATH, payload).await,
    }
    .map_err(|e| e.to_string())?;

    if envelope.is_success() {
        Ok(envelope.message)
    } else {
        Err(envelope.error_summary())
    }
}

/// Every material for the picker (`pageSize=0`).
pub async fn fetch_material_options(gateway: &RemoteGateway) -> Result<Vec<Material>, String> {
    gateway
        .list::<Material>(MATERIALS_PATH, &ListQuery::all())
        .await
        .map_err(|e| e.to_string())?
        .into_result()
        .map(|page: PageResult<Material>| page.items)
        .map_err(|e| format!("Failed to load materials: {}", e.summary()))
}
