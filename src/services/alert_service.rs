//! Evaluador de alertas de flota
//!
//! Recorre todas las empresas y marca cada vehículo cuya vida útil
//! restante está en o por debajo del umbral, o que está detenido por
//! avería. Para cada vehículo marcado proyecta además una fecha
//! estimada de agotamiento por regresión lineal simple sobre sus
//! registros diarios. Es una vista derivada pura: se recalcula entera
//! cada vez que cambia la colección de empresas.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Company, EventDetail, Vehicle};
use crate::services::maintenance_service::{self, ALERT_THRESHOLD_PERCENT};

/// Vehículo marcado para atención.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub empresa_id: Uuid,
    pub empresa_nombre: String,
    pub vehiculo_id: Uuid,
    pub vehiculo_nombre: String,
    pub vida_util_percent: f64,
    pub horas_restantes: f64,
    pub operativo: bool,
    pub motivo_baja: String,
    /// `None` cuando no hay datos suficientes o el consumo no avanza.
    pub fecha_estimada: Option<NaiveDate>,
}

/// Calcula las alertas de toda la flota.
///
/// El orden de salida sigue el orden de inserción de empresas y, dentro
/// de cada empresa, el de sus vehículos. No se aplica orden por
/// severidad.
pub fn calculate_alerts(companies: &[Company], hoy: NaiveDate) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for company in companies {
        for vehicle in &company.vehiculos {
            let health = maintenance_service::project(vehicle);

            if health.vida_util_percent <= ALERT_THRESHOLD_PERCENT || !vehicle.operativo {
                alerts.push(Alert {
                    empresa_id: company.id,
                    empresa_nombre: company.nombre.clone(),
                    vehiculo_id: vehicle.id,
                    vehiculo_nombre: vehicle.nombre.clone(),
                    vida_util_percent: health.vida_util_percent,
                    horas_restantes: health.horas_restantes,
                    operativo: vehicle.operativo,
                    motivo_baja: vehicle.motivo_baja.clone(),
                    fecha_estimada: estimate_exhaustion_date(vehicle, health.horas_restantes, hoy),
                });
            }
        }
    }

    alerts
}

/// Estima la fecha en que el vehículo agota su intervalo de service.
///
/// Toma el primer y el último evento `REGISTRO` por fecha, deriva un
/// promedio de horas por día (con piso de 1 día para evitar división
/// por cero) y proyecta desde hoy. Devuelve `None` con menos de dos
/// registros, con promedio no positivo o sin horas restantes.
pub fn estimate_exhaustion_date(
    vehicle: &Vehicle,
    horas_restantes: f64,
    hoy: NaiveDate,
) -> Option<NaiveDate> {
    let mut registros: Vec<(NaiveDate, f64)> = vehicle
        .eventos
        .iter()
        .filter_map(|e| match e.detail {
            EventDetail::Registro { horas, .. } => Some((e.fecha, horas)),
            _ => None,
        })
        .collect();

    if registros.len() < 2 {
        return None;
    }
    registros.sort_by_key(|(fecha, _)| *fecha);

    let (primera_fecha, primeras_horas) = registros[0];
    let (ultima_fecha, ultimas_horas) = registros[registros.len() - 1];

    let diff_horas = ultimas_horas - primeras_horas;
    let diff_dias = (ultima_fecha - primera_fecha).num_days().max(1) as f64;
    let promedio_horas_dia = diff_horas / diff_dias;

    if promedio_horas_dia > 0.0 && horas_restantes > 0.0 {
        let dias = (horas_restantes / promedio_horas_dia).ceil() as i64;
        Some(hoy + Duration::days(dias))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Event;
    use crate::services::fleet_service::{apply_daily_reading, apply_downtime, new_vehicle};

    fn hoy() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
    }

    fn company_with(vehiculos: Vec<Vehicle>) -> Company {
        Company {
            id: Uuid::new_v4(),
            nombre: "Constructora Sur".to_string(),
            cuit: "30-11222333-4".to_string(),
            mail: String::new(),
            tel: String::new(),
            responsable: String::new(),
            observaciones: String::new(),
            fecha_alta: NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(),
            vehiculos,
        }
    }

    fn registro(fecha: NaiveDate, horas: f64) -> Event {
        Event::new(
            fecha,
            EventDetail::Registro {
                horas,
                litros: 100.0,
            },
        )
    }

    #[test]
    fn healthy_vehicle_is_not_alerted() {
        let v = new_vehicle("Excavadora".to_string(), 4630.0, hoy());
        let v = apply_daily_reading(&v, 4640.0, 50.0, hoy());

        let alerts = calculate_alerts(&[company_with(vec![v])], hoy());
        assert!(alerts.is_empty());
    }

    #[test]
    fn low_life_vehicle_is_alerted() {
        let v = new_vehicle("Excavadora".to_string(), 4630.0, hoy());
        let v = apply_daily_reading(&v, 4860.0, 50.0, hoy());

        let alerts = calculate_alerts(&[company_with(vec![v])], hoy());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].vida_util_percent, 8.0);
        assert_eq!(alerts[0].horas_restantes, 20.0);
        assert!(alerts[0].operativo);
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        // 225 horas consumidas: 25 restantes, exactamente 10%.
        let mut v = new_vehicle("Excavadora".to_string(), 4630.0, hoy());
        v.horometro_total = 4855.0;
        let alerts = calculate_alerts(&[company_with(vec![v.clone()])], hoy());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].vida_util_percent, 10.0);

        // Apenas por encima del umbral: sin alerta.
        v.horometro_total = 4854.75;
        let alerts = calculate_alerts(&[company_with(vec![v])], hoy());
        assert!(alerts.is_empty());
    }

    #[test]
    fn stopped_vehicle_is_alerted_regardless_of_life() {
        let v = new_vehicle("Camion".to_string(), 1000.0, hoy());
        let v = apply_downtime(&v, "Fuga hidráulica", hoy()).unwrap();

        let alerts = calculate_alerts(&[company_with(vec![v])], hoy());
        assert_eq!(alerts.len(), 1);
        assert!(!alerts[0].operativo);
        assert_eq!(alerts[0].motivo_baja, "Fuga hidráulica");
        assert_eq!(alerts[0].vida_util_percent, 100.0);
    }

    #[test]
    fn estimate_needs_at_least_two_readings() {
        let mut v = new_vehicle("Excavadora".to_string(), 4600.0, hoy());
        v.eventos
            .push(registro(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 4600.0));
        assert_eq!(estimate_exhaustion_date(&v, 50.0, hoy()), None);
    }

    #[test]
    fn estimate_projects_linearly_from_today() {
        // 50 horas en 10 días: 5 hs/día; 50 restantes => 10 días desde hoy.
        let mut v = new_vehicle("Excavadora".to_string(), 4600.0, hoy());
        v.eventos
            .push(registro(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 4600.0));
        v.eventos
            .push(registro(NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(), 4650.0));

        let estimada = estimate_exhaustion_date(&v, 50.0, hoy()).unwrap();
        assert_eq!(estimada, hoy() + Duration::days(10));
    }

    #[test]
    fn estimate_sorts_readings_by_fecha_not_insertion() {
        let mut v = new_vehicle("Excavadora".to_string(), 4600.0, hoy());
        // Insertados fuera de orden cronológico.
        v.eventos
            .push(registro(NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(), 4650.0));
        v.eventos
            .push(registro(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 4600.0));

        let estimada = estimate_exhaustion_date(&v, 50.0, hoy()).unwrap();
        assert_eq!(estimada, hoy() + Duration::days(10));
    }

    #[test]
    fn same_day_readings_floor_at_one_day() {
        let fecha = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut v = new_vehicle("Excavadora".to_string(), 4600.0, hoy());
        v.eventos.push(registro(fecha, 4600.0));
        v.eventos.push(registro(fecha, 4610.0));

        // 10 horas en "1 día": 10 hs/día, 20 restantes => 2 días.
        let estimada = estimate_exhaustion_date(&v, 20.0, hoy()).unwrap();
        assert_eq!(estimada, hoy() + Duration::days(2));
    }

    #[test]
    fn non_positive_usage_rate_yields_no_estimate() {
        let mut v = new_vehicle("Excavadora".to_string(), 4650.0, hoy());
        v.eventos
            .push(registro(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 4650.0));
        v.eventos
            .push(registro(NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(), 4600.0));

        assert_eq!(estimate_exhaustion_date(&v, 50.0, hoy()), None);
    }

    #[test]
    fn output_follows_company_then_vehicle_insertion_order() {
        let mut a1 = new_vehicle("A1".to_string(), 0.0, hoy());
        a1.horometro_total = 240.0;
        let mut a2 = new_vehicle("A2".to_string(), 0.0, hoy());
        a2.horometro_total = 250.0;
        let mut b1 = new_vehicle("B1".to_string(), 0.0, hoy());
        b1.horometro_total = 230.0;

        let mut empresa_a = company_with(vec![a1, a2]);
        empresa_a.nombre = "A SA".to_string();
        let mut empresa_b = company_with(vec![b1]);
        empresa_b.nombre = "B SA".to_string();

        let alerts = calculate_alerts(&[empresa_a, empresa_b], hoy());
        let nombres: Vec<&str> = alerts.iter().map(|a| a.vehiculo_nombre.as_str()).collect();
        assert_eq!(nombres, vec!["A1", "A2", "B1"]);
    }
}
