//! Almacén de flota en memoria
//!
//! Implementación del mismo contrato documental sin base de datos:
//! respalda los tests de integración y el desarrollo local. Mantiene la
//! colección bajo un RwLock y publica el snapshot completo por el canal
//! watch después de cada escritura, igual que el almacén PostgreSQL.

use async_trait::async_trait;
use tokio::sync::{watch, RwLock};
use uuid::Uuid;

use crate::models::{Company, Vehicle};
use crate::repositories::fleet_store::FleetStore;
use crate::utils::errors::{not_found_error, AppResult};

pub struct MemoryFleetStore {
    companies: RwLock<Vec<Company>>,
    snapshot_tx: watch::Sender<Vec<Company>>,
}

impl MemoryFleetStore {
    pub fn new() -> Self {
        let (snapshot_tx, _) = watch::channel(Vec::new());
        Self {
            companies: RwLock::new(Vec::new()),
            snapshot_tx,
        }
    }
}

impl Default for MemoryFleetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FleetStore for MemoryFleetStore {
    fn subscribe(&self) -> watch::Receiver<Vec<Company>> {
        self.snapshot_tx.subscribe()
    }

    async fn create_company(&self, company: Company) -> AppResult<Company> {
        let mut companies = self.companies.write().await;
        companies.push(company.clone());
        self.snapshot_tx.send_replace(companies.clone());
        Ok(company)
    }

    async fn append_vehicle(&self, company_id: Uuid, vehicle: Vehicle) -> AppResult<()> {
        let mut companies = self.companies.write().await;
        let company = companies
            .iter_mut()
            .find(|c| c.id == company_id)
            .ok_or_else(|| not_found_error("Empresa", &company_id.to_string()))?;

        company.vehiculos.push(vehicle);
        self.snapshot_tx.send_replace(companies.clone());
        Ok(())
    }

    async fn replace_vehicle_list(
        &self,
        company_id: Uuid,
        vehiculos: Vec<Vehicle>,
    ) -> AppResult<()> {
        let mut companies = self.companies.write().await;
        let company = companies
            .iter_mut()
            .find(|c| c.id == company_id)
            .ok_or_else(|| not_found_error("Empresa", &company_id.to_string()))?;

        company.vehiculos = vehiculos;
        self.snapshot_tx.send_replace(companies.clone());
        Ok(())
    }

    async fn list_companies(&self) -> AppResult<Vec<Company>> {
        Ok(self.companies.read().await.clone())
    }

    async fn find_company(&self, id: Uuid) -> AppResult<Option<Company>> {
        Ok(self
            .companies
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fleet_service::{apply_daily_reading, new_company, new_vehicle};
    use chrono::NaiveDate;

    fn hoy() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
    }

    fn empresa() -> Company {
        new_company(
            "Constructora Sur".to_string(),
            "30-11222333-4".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            hoy(),
        )
    }

    #[tokio::test]
    async fn round_trip_preserves_documents() {
        let store = MemoryFleetStore::new();
        let company = store.create_company(empresa()).await.unwrap();

        let vehicle = new_vehicle("Excavadora".to_string(), 4630.0, hoy());
        store.append_vehicle(company.id, vehicle.clone()).await.unwrap();

        let loaded = store.find_company(company.id).await.unwrap().unwrap();
        assert_eq!(loaded.vehiculos.len(), 1);
        assert_eq!(loaded.vehiculos[0], vehicle);
    }

    #[tokio::test]
    async fn replace_vehicle_list_overwrites_wholesale() {
        let store = MemoryFleetStore::new();
        let company = store.create_company(empresa()).await.unwrap();
        let vehicle = new_vehicle("Excavadora".to_string(), 4630.0, hoy());
        store.append_vehicle(company.id, vehicle.clone()).await.unwrap();

        let updated = apply_daily_reading(&vehicle, 4690.0, 120.0, hoy());
        store
            .replace_vehicle_list(company.id, vec![updated.clone()])
            .await
            .unwrap();

        let loaded = store.find_company(company.id).await.unwrap().unwrap();
        assert_eq!(loaded.vehiculos, vec![updated]);
    }

    #[tokio::test]
    async fn unknown_company_id_is_not_found() {
        let store = MemoryFleetStore::new();
        let vehicle = new_vehicle("Excavadora".to_string(), 0.0, hoy());
        let err = store.append_vehicle(Uuid::new_v4(), vehicle).await;
        assert!(err.is_err());
    }

    #[tokio::test]
    async fn writes_notify_subscribers_with_full_snapshot() {
        let store = MemoryFleetStore::new();
        let mut rx = store.subscribe();

        let company = store.create_company(empresa()).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().len(), 1);

        let vehicle = new_vehicle("Excavadora".to_string(), 4630.0, hoy());
        store.append_vehicle(company.id, vehicle).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow()[0].vehiculos.len(), 1);
    }
}
