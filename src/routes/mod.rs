pub mod alert_routes;
pub mod company_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Arma el router completo de la aplicación.
pub fn create_app_router(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/company", company_routes::create_company_router())
        .nest(
            "/api/company/:company_id/vehicle",
            vehicle_routes::create_vehicle_router(),
        )
        .nest("/api/alerts", alert_routes::create_alert_router())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de liveness
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-maintenance",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
