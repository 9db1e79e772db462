//! Modelo de Vehicle
//!
//! Un vehículo pertenece siempre a una empresa y lleva su propio
//! historial de eventos. Los campos derivados (horas consumidas, vida
//! útil) no se persisten: se recalculan en cada lectura.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::event::Event;

/// Vehículo industrial con horómetro acumulado.
///
/// Invariantes:
/// - `ultimo_service_horas <= horometro_total` bajo uso correcto
///   (cerrar un service copia el horómetro vigente).
/// - `eventos` nunca queda vacío después del alta.
/// - `operativo == false` si y solo si `motivo_baja` no está vacío.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,
    pub nombre: String,
    pub fecha_alta: NaiveDate,
    pub horometro_total: f64,
    pub ultimo_service_horas: f64,
    pub operativo: bool,
    pub motivo_baja: String,
    pub eventos: Vec<Event>,
}
