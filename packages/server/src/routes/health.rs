use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::app::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: String,
    content_provider: ProviderHealth,
    image_provider: ProviderHealth,
}

#[derive(Serialize)]
pub struct ProviderHealth {
    configured: bool,
}

/// Health check endpoint
///
/// The generation pipeline has no stateful backends, so the process being
/// up means it is healthy; the payload reports which optional providers
/// are wired.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        content_provider: ProviderHealth {
            configured: state.provider_configured,
        },
        image_provider: ProviderHealth {
            configured: state.images_configured,
        },
    })
}
