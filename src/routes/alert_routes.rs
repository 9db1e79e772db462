use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::alert_controller::AlertController;
use crate::dto::alert_dto::AlertResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_alert_router() -> Router<AppState> {
    Router::new().route("/", get(list_alerts))
}

async fn list_alerts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AlertResponse>>, AppError> {
    let controller = AlertController::new(state.store.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
