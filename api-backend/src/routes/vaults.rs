//! Vault read endpoints

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::info;

use crate::{
    error::Result,
    routes::AppState,
    services::{fetch_vault, list_vaults},
    types::{VaultResponse, VaultsResponse},
};

/// Create vaults router
pub fn vaults_router(state: AppState) -> Router {
    Router::new()
        .route("/api/vault/{slug}", get(get_vault))
        .route("/api/vaults/all", get(get_all_vaults))
        .with_state(state)
}

/// Fetch one vault by slug
///
/// GET /api/vault/{slug}
async fn get_vault(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<VaultResponse>> {
    info!(slug = %slug, "Fetching vault");

    let entry = fetch_vault(state.accounts.as_ref(), &state.config.program_id, &slug).await?;

    Ok(Json(VaultResponse::new(&entry.record, &entry.pda)))
}

/// List every vault, newest first
///
/// GET /api/vaults/all
async fn get_all_vaults(State(state): State<AppState>) -> Result<Json<VaultsResponse>> {
    let vaults: Vec<VaultResponse> = list_vaults(state.accounts.as_ref(), &state.config.program_id)
        .await?
        .iter()
        .map(|entry| VaultResponse::new(&entry.record, &entry.pda))
        .collect();

    info!(count = vaults.len(), "Listed vaults");

    Ok(Json(VaultsResponse {
        count: vaults.len(),
        vaults,
    }))
}
