//! Expediente técnico de un vehículo
//!
//! Arma el documento de reporte que consume el generador de PDF:
//! identidad de empresa y vehículo, vida útil derivada y una fila
//! formateada por evento en orden cronológico inverso (el más reciente
//! primero). Solo lee el modelo; no toma ninguna decisión de dominio.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Company, EventDetail, Vehicle};
use crate::services::maintenance_service;

/// Celda vacía en la tabla del expediente.
const PLACEHOLDER: &str = "--";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleReport {
    pub empresa_id: Uuid,
    pub empresa_nombre: String,
    pub cuit: String,
    pub vehiculo_id: Uuid,
    pub vehiculo_nombre: String,
    pub generado: NaiveDate,
    pub vida_util_percent: f64,
    pub eventos: Vec<ReportRow>,
}

/// Fila de la tabla de historial, ya formateada para impresión.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub fecha: NaiveDate,
    pub tipo: &'static str,
    pub horas: String,
    pub costo_o_carga: String,
    pub detalles: String,
}

/// Construye el expediente técnico de un vehículo.
pub fn build_vehicle_report(company: &Company, vehicle: &Vehicle, hoy: NaiveDate) -> VehicleReport {
    let health = maintenance_service::project(vehicle);

    let eventos = vehicle
        .eventos
        .iter()
        .rev()
        .map(|ev| {
            let (horas, costo_o_carga, detalles) = match &ev.detail {
                EventDetail::Alta { horas, nota } => (
                    horas.map(format_horas),
                    None,
                    nota.clone(),
                ),
                EventDetail::Registro { horas, litros } => (
                    Some(format_horas(*horas)),
                    Some(format!("{litros} L")),
                    PLACEHOLDER.to_string(),
                ),
                EventDetail::Service {
                    horas,
                    tecnico,
                    insumos,
                    costo,
                } => (
                    Some(format_horas(*horas)),
                    Some(format!("${costo}")),
                    format!("MEC: {} • {}", tecnico, insumos.join(", ")),
                ),
                EventDetail::Baja { motivo } => (None, None, motivo.clone()),
            };

            ReportRow {
                fecha: ev.fecha,
                tipo: ev.tipo(),
                horas: horas.unwrap_or_else(|| PLACEHOLDER.to_string()),
                costo_o_carga: costo_o_carga.unwrap_or_else(|| PLACEHOLDER.to_string()),
                detalles,
            }
        })
        .collect();

    VehicleReport {
        empresa_id: company.id,
        empresa_nombre: company.nombre.clone(),
        cuit: company.cuit.clone(),
        vehiculo_id: vehicle.id,
        vehiculo_nombre: vehicle.nombre.clone(),
        generado: hoy,
        vida_util_percent: health.vida_util_percent,
        eventos,
    }
}

fn format_horas(horas: f64) -> String {
    if horas.fract() == 0.0 {
        format!("{}", horas as i64)
    } else {
        format!("{horas}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fleet_service::{
        apply_close_service, apply_daily_reading, apply_downtime, new_vehicle,
    };
    use rust_decimal::Decimal;

    fn hoy() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
    }

    fn company() -> Company {
        Company {
            id: Uuid::new_v4(),
            nombre: "Constructora Sur".to_string(),
            cuit: "30-11222333-4".to_string(),
            mail: String::new(),
            tel: String::new(),
            responsable: String::new(),
            observaciones: String::new(),
            fecha_alta: hoy(),
            vehiculos: Vec::new(),
        }
    }

    #[test]
    fn report_lists_events_most_recent_first() {
        let v = new_vehicle("Excavadora".to_string(), 4630.0, hoy());
        let v = apply_daily_reading(&v, 4690.0, 120.0, hoy());
        let v = apply_close_service(
            &v,
            "Juan Mecanico".to_string(),
            vec!["Filtro Aceite".to_string(), "Aceite 15W40".to_string()],
            Decimal::new(125_000, 0),
            hoy(),
        );

        let report = build_vehicle_report(&company(), &v, hoy());

        let tipos: Vec<&str> = report.eventos.iter().map(|r| r.tipo).collect();
        assert_eq!(tipos, vec!["SERVICE", "REGISTRO", "ALTA"]);
        assert_eq!(report.vida_util_percent, 100.0);
    }

    #[test]
    fn rows_format_cost_load_and_placeholders() {
        let v = new_vehicle("Excavadora".to_string(), 4630.0, hoy());
        let v = apply_daily_reading(&v, 4690.0, 120.0, hoy());
        let v = apply_close_service(
            &v,
            "Juan Mecanico".to_string(),
            vec!["Filtro Aceite".to_string()],
            Decimal::new(125_000, 0),
            hoy(),
        );
        let v = apply_downtime(&v, "Fuga hidráulica", hoy()).unwrap();

        let report = build_vehicle_report(&company(), &v, hoy());

        let baja = &report.eventos[0];
        assert_eq!(baja.horas, "--");
        assert_eq!(baja.costo_o_carga, "--");
        assert_eq!(baja.detalles, "Fuga hidráulica");

        let service = &report.eventos[1];
        assert_eq!(service.horas, "4690");
        assert_eq!(service.costo_o_carga, "$125000");
        assert_eq!(service.detalles, "MEC: Juan Mecanico • Filtro Aceite");

        let registro = &report.eventos[2];
        assert_eq!(registro.costo_o_carga, "120 L");
        assert_eq!(registro.detalles, "--");

        let alta = &report.eventos[3];
        assert_eq!(alta.horas, "4630");
        assert_eq!(alta.detalles, "Registro Inicial");
    }
}
