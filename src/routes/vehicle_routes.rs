use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::company_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    CloseServiceRequest, DailyReadingRequest, RegisterVehicleRequest, ToggleOperabilityRequest,
    VehicleResponse,
};
use crate::services::report_service::VehicleReport;
use crate::state::AppState;
use crate::utils::errors::AppError;

// Router anidado bajo /api/company/:company_id/vehicle
pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_vehicle))
        .route("/:id/status", get(get_status))
        .route("/:id/reading", post(log_reading))
        .route("/:id/service", post(close_service))
        .route("/:id/toggle", post(toggle_operability))
        .route("/:id/report", get(get_report))
}

async fn register_vehicle(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(request): Json<RegisterVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.register(company_id, request).await?;
    Ok(Json(response))
}

async fn get_status(
    State(state): State<AppState>,
    Path((company_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.status(company_id, id).await?;
    Ok(Json(response))
}

async fn log_reading(
    State(state): State<AppState>,
    Path((company_id, id)): Path<(Uuid, Uuid)>,
    Json(request): Json<DailyReadingRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.log_reading(company_id, id, request).await?;
    Ok(Json(response))
}

async fn close_service(
    State(state): State<AppState>,
    Path((company_id, id)): Path<(Uuid, Uuid)>,
    Json(request): Json<CloseServiceRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.close_service(company_id, id, request).await?;
    Ok(Json(response))
}

async fn toggle_operability(
    State(state): State<AppState>,
    Path((company_id, id)): Path<(Uuid, Uuid)>,
    Json(request): Json<ToggleOperabilityRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.toggle_operability(company_id, id, request).await?;
    Ok(Json(response))
}

async fn get_report(
    State(state): State<AppState>,
    Path((company_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<VehicleReport>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.report(company_id, id).await?;
    Ok(Json(response))
}
