//! Contrato del almacén de documentos de flota
//!
//! El almacén guarda un documento por empresa (con su lista de
//! vehículos adentro) y notifica a los suscriptores con la colección
//! completa cada vez que algo cambia. No ofrece actualización de
//! elementos anidados: las mutaciones por vehículo reemplazan la lista
//! entera, y la concurrencia entre sesiones es last-write-wins.

use async_trait::async_trait;
use tokio::sync::watch;
use uuid::Uuid;

use crate::models::{Company, Vehicle};
use crate::utils::errors::AppResult;

#[async_trait]
pub trait FleetStore: Send + Sync {
    /// Suscripción en tiempo real: el receiver entrega el snapshot
    /// completo de empresas después de cada escritura exitosa.
    fn subscribe(&self) -> watch::Receiver<Vec<Company>>;

    /// Persiste una empresa nueva con flota vacía.
    async fn create_company(&self, company: Company) -> AppResult<Company>;

    /// Anexa un vehículo a la lista de la empresa en forma atómica.
    async fn append_vehicle(&self, company_id: Uuid, vehicle: Vehicle) -> AppResult<()>;

    /// Reemplaza la lista completa de vehículos de la empresa. Todas
    /// las mutaciones por vehículo pasan por acá.
    async fn replace_vehicle_list(&self, company_id: Uuid, vehiculos: Vec<Vehicle>)
        -> AppResult<()>;

    async fn list_companies(&self) -> AppResult<Vec<Company>>;

    async fn find_company(&self, id: Uuid) -> AppResult<Option<Company>>;
}
