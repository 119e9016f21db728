//! Public runtime configuration for the UI

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use vault_codec::categories::{category_label, CATEGORIES};

use crate::routes::AppState;
use crate::types::{CategoryOption, Config, RuntimeConfigResponse};

const CACHE_CONTROL: &str = "public, max-age=900, s-maxage=900";

/// Create runtime config router
pub fn runtime_config_router(state: AppState) -> Router {
    Router::new()
        .route("/api/runtime-config", get(runtime_config))
        .with_state(state)
}

fn normalize_slugs(slugs: &[String]) -> Vec<String> {
    slugs
        .iter()
        .map(|slug| slug.trim().to_lowercase())
        .filter(|slug| !slug.is_empty())
        .collect()
}

fn category_options() -> Vec<CategoryOption> {
    CATEGORIES
        .iter()
        .map(|(value, _)| CategoryOption {
            value: value.to_string(),
            label: category_label(value).to_string(),
        })
        .collect()
}

impl From<&Config> for RuntimeConfigResponse {
    fn from(config: &Config) -> Self {
        Self {
            rpc_url: config.rpc_url.clone(),
            app_base_url: config.app_base_url.clone(),
            config_pda: config.config_pda.clone(),
            featured_slugs: normalize_slugs(&config.featured_slugs),
            banned_slugs: config.banned_slugs.entries().to_vec(),
            report_email: config.report_email.clone(),
            google_analytics_measurement_id: config.google_analytics_measurement_id.clone(),
            categories: category_options(),
        }
    }
}

/// GET /api/runtime-config
async fn runtime_config(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, CACHE_CONTROL)],
        Json(RuntimeConfigResponse::from(state.config.as_ref())),
    )
}
