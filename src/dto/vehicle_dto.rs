use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Vehicle;
use crate::services::maintenance_service::VehicleHealth;

// Request para dar de alta un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterVehicleRequest {
    #[validate(length(min = 1, message = "El nombre del vehículo es requerido"))]
    pub nombre: String,

    #[validate(range(min = 0.0, message = "El horómetro inicial no puede ser negativo"))]
    pub horometro_inicial: f64,
}

// Request de registro diario de horómetro y combustible
#[derive(Debug, Deserialize)]
pub struct DailyReadingRequest {
    pub horas: f64,
    #[serde(default)]
    pub litros: f64,
}

// Request para certificar un service
#[derive(Debug, Deserialize, Validate)]
pub struct CloseServiceRequest {
    #[validate(length(min = 1, message = "El técnico es requerido"))]
    pub tecnico: String,

    #[serde(default)]
    pub insumos: Vec<String>,

    // Entrada de formulario: se interpreta con tolerancia (inválido => 0)
    #[serde(default)]
    pub costo: Option<String>,
}

// Request del toggle de operatividad; `motivo` solo al detener
#[derive(Debug, Default, Deserialize)]
pub struct ToggleOperabilityRequest {
    #[serde(default)]
    pub motivo: Option<String>,
}

// Vehículo junto a sus métricas derivadas
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub estado: VehicleHealth,
}

impl VehicleResponse {
    pub fn new(vehicle: Vehicle, estado: VehicleHealth) -> Self {
        Self { vehicle, estado }
    }
}
