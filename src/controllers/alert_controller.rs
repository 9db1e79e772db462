//! Controller de alertas
//!
//! Vista derivada pura: toma el snapshot actual de empresas y corre el
//! evaluador de alertas. No guarda nada propio.

use std::sync::Arc;

use chrono::Utc;

use crate::dto::alert_dto::AlertResponse;
use crate::repositories::FleetStore;
use crate::services::alert_service;
use crate::utils::errors::AppResult;

pub struct AlertController {
    store: Arc<dyn FleetStore>,
}

impl AlertController {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<AlertResponse>> {
        let companies = self.store.list_companies().await?;
        let alerts = alert_service::calculate_alerts(&companies, Utc::now().date_naive());
        Ok(alerts.into_iter().map(AlertResponse::from).collect())
    }
}
