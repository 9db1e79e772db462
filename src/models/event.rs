//! Modelo de Event
//!
//! Cada evento registra una acción sobre un vehículo. El historial es
//! append-only: la posición en el array es el orden causal y ningún
//! evento se modifica ni se elimina después de creado.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Evento del historial de un vehículo.
///
/// En el documento persistido el detalle se aplana junto a `id` y
/// `fecha`, discriminado por el campo `tipo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub fecha: NaiveDate,
    #[serde(flatten)]
    pub detail: EventDetail,
}

/// Detalle de evento, discriminado por `tipo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tipo")]
pub enum EventDetail {
    /// Alta inicial o retorno a operación.
    #[serde(rename = "ALTA")]
    Alta {
        #[serde(skip_serializing_if = "Option::is_none")]
        horas: Option<f64>,
        nota: String,
    },

    /// Registro diario de horómetro y carga de combustible.
    #[serde(rename = "REGISTRO")]
    Registro { horas: f64, litros: f64 },

    /// Service de mantenimiento certificado.
    #[serde(rename = "SERVICE")]
    Service {
        horas: f64,
        tecnico: String,
        insumos: Vec<String>,
        costo: Decimal,
    },

    /// Parada técnica por avería.
    #[serde(rename = "BAJA")]
    Baja { motivo: String },
}

impl Event {
    pub fn new(fecha: NaiveDate, detail: EventDetail) -> Self {
        Self {
            id: Uuid::new_v4(),
            fecha,
            detail,
        }
    }

    /// Etiqueta del discriminante, igual a la del documento persistido.
    pub fn tipo(&self) -> &'static str {
        match self.detail {
            EventDetail::Alta { .. } => "ALTA",
            EventDetail::Registro { .. } => "REGISTRO",
            EventDetail::Service { .. } => "SERVICE",
            EventDetail::Baja { .. } => "BAJA",
        }
    }
}
