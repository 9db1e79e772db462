use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::company_controller::CompanyController;
use crate::dto::company_dto::{ApiResponse, RegisterCompanyRequest};
use crate::models::Company;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_company_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/", get(list_companies))
        .route("/:id", get(get_company))
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterCompanyRequest>,
) -> Result<Json<ApiResponse<Company>>, AppError> {
    let controller = CompanyController::new(state.store.clone());
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Company>>, AppError> {
    let controller = CompanyController::new(state.store.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Company>, AppError> {
    let controller = CompanyController::new(state.store.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}
