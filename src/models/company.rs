//! Modelo de Company
//!
//! Una empresa cliente es el documento raíz de persistencia: posee en
//! exclusiva su lista de vehículos y se guarda/reemplaza como unidad.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::vehicle::Vehicle;

/// Empresa cliente dueña de una flota.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Uuid,
    pub nombre: String,
    pub cuit: String,
    #[serde(default)]
    pub mail: String,
    #[serde(default)]
    pub tel: String,
    #[serde(default)]
    pub responsable: String,
    #[serde(default)]
    pub observaciones: String,
    pub fecha_alta: NaiveDate,
    #[serde(default)]
    pub vehiculos: Vec<Vehicle>,
}

impl Company {
    pub fn find_vehicle(&self, vehicle_id: Uuid) -> Option<&Vehicle> {
        self.vehiculos.iter().find(|v| v.id == vehicle_id)
    }
}
