//! Proyección de estado de mantenimiento
//!
//! Este módulo calcula las métricas derivadas de un vehículo (horas
//! consumidas desde el último service, horas restantes y porcentaje de
//! vida útil) contra el intervalo de service global. Es una función
//! pura: nada de esto se persiste ni se cachea.

use serde::Serialize;

use crate::models::Vehicle;

/// Horas de operación entre services programados.
pub const SERVICE_INTERVAL: f64 = 250.0;

/// Porcentaje de vida útil restante a partir del cual se dispara alerta.
pub const ALERT_THRESHOLD_PERCENT: f64 = 10.0;

/// Métricas derivadas de un vehículo. Nunca se almacenan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleHealth {
    pub horas_consumidas: f64,
    pub horas_restantes: f64,
    pub vida_util_percent: f64,
}

/// Proyecta las métricas de mantenimiento de un vehículo.
///
/// Una lectura de horómetro decreciente produce horas consumidas
/// negativas y un porcentaje mayor a 100; el sistema no valida
/// monotonicidad de lecturas y este cálculo lo refleja tal cual.
pub fn project(vehicle: &Vehicle) -> VehicleHealth {
    let horas_consumidas = vehicle.horometro_total - vehicle.ultimo_service_horas;
    let horas_restantes = (SERVICE_INTERVAL - horas_consumidas).max(0.0);
    let vida_util_percent = horas_restantes * 100.0 / SERVICE_INTERVAL;

    VehicleHealth {
        horas_consumidas,
        horas_restantes,
        vida_util_percent,
    }
}
