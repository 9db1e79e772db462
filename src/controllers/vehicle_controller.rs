//! Controller de vehículos
//!
//! Orquesta los comandos por vehículo: carga el documento de la
//! empresa, aplica la regla de mutación pura sobre el vehículo
//! referenciado y persiste la lista recomputada como reemplazo
//! completo. El estado siguiente se computa entero antes de escribir,
//! así una falla de persistencia nunca deja un documento a medias.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::dto::company_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    CloseServiceRequest, DailyReadingRequest, RegisterVehicleRequest, ToggleOperabilityRequest,
    VehicleResponse,
};
use crate::models::{Company, Vehicle};
use crate::repositories::FleetStore;
use crate::services::report_service::VehicleReport;
use crate::services::{fleet_service, maintenance_service, report_service};
use crate::utils::errors::{not_found_error, AppResult};

pub struct VehicleController {
    store: Arc<dyn FleetStore>,
}

impl VehicleController {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn register(
        &self,
        company_id: Uuid,
        request: RegisterVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        // La empresa tiene que existir antes de anexar.
        self.find_company(company_id).await?;

        let vehicle =
            fleet_service::new_vehicle(request.nombre, request.horometro_inicial, hoy());
        self.store.append_vehicle(company_id, vehicle.clone()).await?;

        Ok(ApiResponse::success_with_message(
            self.with_health(vehicle),
            "Vehículo dado de alta exitosamente".to_string(),
        ))
    }

    pub async fn status(&self, company_id: Uuid, vehicle_id: Uuid) -> AppResult<VehicleResponse> {
        let company = self.find_company(company_id).await?;
        let vehicle = find_vehicle(&company, vehicle_id)?;
        Ok(self.with_health(vehicle.clone()))
    }

    pub async fn log_reading(
        &self,
        company_id: Uuid,
        vehicle_id: Uuid,
        request: DailyReadingRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        let updated = self
            .mutate_vehicle(company_id, vehicle_id, |v| {
                Ok(fleet_service::apply_daily_reading(
                    v,
                    request.horas,
                    request.litros,
                    hoy(),
                ))
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            self.with_health(updated),
            "Registro diario guardado".to_string(),
        ))
    }

    pub async fn close_service(
        &self,
        company_id: Uuid,
        vehicle_id: Uuid,
        request: CloseServiceRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        let costo = fleet_service::parse_costo(request.costo.as_deref());
        let updated = self
            .mutate_vehicle(company_id, vehicle_id, |v| {
                Ok(fleet_service::apply_close_service(
                    v,
                    request.tecnico.clone(),
                    request.insumos.clone(),
                    costo,
                    hoy(),
                ))
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            self.with_health(updated),
            "Service certificado exitosamente".to_string(),
        ))
    }

    pub async fn toggle_operability(
        &self,
        company_id: Uuid,
        vehicle_id: Uuid,
        request: ToggleOperabilityRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        let updated = self
            .mutate_vehicle(company_id, vehicle_id, |v| {
                Ok(fleet_service::toggle_operability(
                    v,
                    request.motivo.as_deref(),
                    hoy(),
                )?)
            })
            .await?;

        let message = if updated.operativo {
            "Equipo puesto en marcha"
        } else {
            "Parada técnica informada"
        };

        Ok(ApiResponse::success_with_message(
            self.with_health(updated),
            message.to_string(),
        ))
    }

    pub async fn report(&self, company_id: Uuid, vehicle_id: Uuid) -> AppResult<VehicleReport> {
        let company = self.find_company(company_id).await?;
        let vehicle = find_vehicle(&company, vehicle_id)?;
        Ok(report_service::build_vehicle_report(&company, vehicle, hoy()))
    }

    async fn find_company(&self, company_id: Uuid) -> AppResult<Company> {
        self.store
            .find_company(company_id)
            .await?
            .ok_or_else(|| not_found_error("Empresa", &company_id.to_string()))
    }

    /// Aplica una regla de mutación al vehículo referenciado y persiste
    /// la lista completa recomputada.
    async fn mutate_vehicle<F>(
        &self,
        company_id: Uuid,
        vehicle_id: Uuid,
        mutate: F,
    ) -> AppResult<Vehicle>
    where
        F: Fn(&Vehicle) -> AppResult<Vehicle>,
    {
        let company = self.find_company(company_id).await?;
        let current = find_vehicle(&company, vehicle_id)?;
        let updated = mutate(current)?;

        let vehiculos: Vec<Vehicle> = company
            .vehiculos
            .iter()
            .map(|v| {
                if v.id == vehicle_id {
                    updated.clone()
                } else {
                    v.clone()
                }
            })
            .collect();

        self.store.replace_vehicle_list(company_id, vehiculos).await?;
        Ok(updated)
    }

    fn with_health(&self, vehicle: Vehicle) -> VehicleResponse {
        let estado = maintenance_service::project(&vehicle);
        VehicleResponse::new(vehicle, estado)
    }
}

fn find_vehicle(company: &Company, vehicle_id: Uuid) -> AppResult<&Vehicle> {
    company
        .find_vehicle(vehicle_id)
        .ok_or_else(|| not_found_error("Vehículo", &vehicle_id.to_string()))
}

fn hoy() -> NaiveDate {
    Utc::now().date_naive()
}
