//! Controller de empresas
//!
//! Valida los comandos de registro y delega la persistencia en el
//! almacén de documentos.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::company_dto::{ApiResponse, RegisterCompanyRequest};
use crate::models::Company;
use crate::repositories::FleetStore;
use crate::services::fleet_service;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct CompanyController {
    store: Arc<dyn FleetStore>,
}

impl CompanyController {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn register(
        &self,
        request: RegisterCompanyRequest,
    ) -> AppResult<ApiResponse<Company>> {
        request.validate()?;

        if request.nombre.trim().is_empty() {
            return Err(AppError::BadRequest(
                "El nombre de la empresa es requerido".to_string(),
            ));
        }

        let company = fleet_service::new_company(
            request.nombre,
            request.cuit,
            request.mail,
            request.tel,
            request.responsable,
            request.observaciones,
            Utc::now().date_naive(),
        );

        let saved = self.store.create_company(company).await?;

        Ok(ApiResponse::success_with_message(
            saved,
            "Empresa registrada exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> AppResult<Vec<Company>> {
        self.store.list_companies().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Company> {
        self.store
            .find_company(id)
            .await?
            .ok_or_else(|| not_found_error("Empresa", &id.to_string()))
    }
}
