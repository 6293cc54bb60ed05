use crate::shared::gateway::{item_path, RemoteGateway};
use contracts::domain::a002_material::{Material, MaterialPayload};
use contracts::shared::api_response::ApiResponse;

const MATERIALS_PATH: &str = "/materials";

pub async fn fetch_by_id(gateway: &RemoteGateway, id: i64) -> Result<Material, String> {
    gateway
        .get::<Material>(&item_path(MATERIALS_PATH, id))
        .await
        .map_err(|e| e.to_string())?
        .into_result()
        .map_err(|e| format!("Failed to load material: {}", e.summary()))
}

/// `POST /materials` or `PUT /materials/{id}`; returns the server message.
pub async fn save_form(
    gateway: &RemoteGateway,
    id: Option<i64>,
    payload: &MaterialPayload,
) -> Result<String, String> {
    let envelope: ApiResponse<serde_json::Value> = match id {
        Some(id) => gateway.update(&item_path(MATERIALS_PATH, id), payload).await,
        None => gateway.create(MATERIALS_PATH, payload).await,
    }
    .map_err(|e| e.to_string())?;

    if envelope.is_success() {
        Ok(envelope.message)
    } else {
        Err(envelope.error_summary())
    }
}
