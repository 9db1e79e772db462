use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::services::alert_service::Alert;

/// Marcador para una fecha estimada indefinida.
const SIN_ESTIMACION: &str = "---";

// Alerta lista para mostrar: la fecha indefinida se rinde como "---"
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertResponse {
    pub empresa_id: Uuid,
    pub empresa_nombre: String,
    pub vehiculo_id: Uuid,
    pub vehiculo_nombre: String,
    pub vida_util_percent: f64,
    pub horas_restantes: f64,
    pub operativo: bool,
    pub motivo_baja: String,
    pub fecha_estimada: String,
}

impl From<Alert> for AlertResponse {
    fn from(alert: Alert) -> Self {
        Self {
            empresa_id: alert.empresa_id,
            empresa_nombre: alert.empresa_nombre,
            vehiculo_id: alert.vehiculo_id,
            vehiculo_nombre: alert.vehiculo_nombre,
            vida_util_percent: alert.vida_util_percent,
            horas_restantes: alert.horas_restantes,
            operativo: alert.operativo,
            motivo_baja: alert.motivo_baja,
            fecha_estimada: alert
                .fecha_estimada
                .map(|f: NaiveDate| f.to_string())
                .unwrap_or_else(|| SIN_ESTIMACION.to_string()),
        }
    }
}
