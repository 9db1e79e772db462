//! Reglas de mutación de la flota
//!
//! Funciones puras que computan el próximo estado de una empresa o un
//! vehículo a partir de un comando. Ninguna muta in-place: cada regla
//! devuelve un estado nuevo completo con exactamente un evento anexado,
//! y el llamador lo persiste como reemplazo del documento. Eso asegura
//! que nunca haya un estado intermedio observable que viole las
//! invariantes del modelo.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Company, Event, EventDetail, Vehicle};

/// Rechazo de un comando antes de cualquier cambio de estado.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("se requiere un motivo para detener el equipo")]
    MissingReason,

    #[error("el equipo ya se encuentra detenido")]
    AlreadyStopped,

    #[error("el equipo ya se encuentra operativo")]
    AlreadyOperative,
}

/// Crea una empresa nueva con flota vacía.
pub fn new_company(
    nombre: String,
    cuit: String,
    mail: String,
    tel: String,
    responsable: String,
    observaciones: String,
    hoy: NaiveDate,
) -> Company {
    Company {
        id: Uuid::new_v4(),
        nombre,
        cuit,
        mail,
        tel,
        responsable,
        observaciones,
        fecha_alta: hoy,
        vehiculos: Vec::new(),
    }
}

/// Da de alta un vehículo con su lectura inicial de horómetro.
///
/// El contador de service arranca en la lectura inicial y el historial
/// nace con su evento `ALTA`, así nunca queda vacío.
pub fn new_vehicle(nombre: String, horometro_inicial: f64, hoy: NaiveDate) -> Vehicle {
    Vehicle {
        id: Uuid::new_v4(),
        nombre,
        fecha_alta: hoy,
        horometro_total: horometro_inicial,
        ultimo_service_horas: horometro_inicial,
        operativo: true,
        motivo_baja: String::new(),
        eventos: vec![Event::new(
            hoy,
            EventDetail::Alta {
                horas: Some(horometro_inicial),
                nota: "Registro Inicial".to_string(),
            },
        )],
    }
}

/// Registra la lectura diaria de horómetro y carga de combustible.
///
/// La lectura reemplaza el horómetro anterior sin validar que sea
/// creciente (comportamiento deliberado, ver DESIGN.md).
pub fn apply_daily_reading(vehicle: &Vehicle, horas: f64, litros: f64, hoy: NaiveDate) -> Vehicle {
    let mut next = vehicle.clone();
    next.horometro_total = horas;
    next.eventos
        .push(Event::new(hoy, EventDetail::Registro { horas, litros }));
    next
}

/// Cierra un service: el contador vuelve a cero copiando el horómetro
/// vigente, y queda certificado quién lo hizo y con qué insumos.
pub fn apply_close_service(
    vehicle: &Vehicle,
    tecnico: String,
    insumos: Vec<String>,
    costo: Decimal,
    hoy: NaiveDate,
) -> Vehicle {
    let mut next = vehicle.clone();
    next.ultimo_service_horas = next.horometro_total;
    next.eventos.push(Event::new(
        hoy,
        EventDetail::Service {
            horas: next.horometro_total,
            tecnico,
            insumos,
            costo,
        },
    ));
    next
}

/// Informa una parada técnica. Detener un equipo siempre exige un
/// motivo documentado.
pub fn apply_downtime(
    vehicle: &Vehicle,
    motivo: &str,
    hoy: NaiveDate,
) -> Result<Vehicle, CommandError> {
    if !vehicle.operativo {
        return Err(CommandError::AlreadyStopped);
    }
    if motivo.trim().is_empty() {
        return Err(CommandError::MissingReason);
    }

    let mut next = vehicle.clone();
    next.operativo = false;
    next.motivo_baja = motivo.to_string();
    next.eventos.push(Event::new(
        hoy,
        EventDetail::Baja {
            motivo: motivo.to_string(),
        },
    ));
    Ok(next)
}

/// Retoma la operación de un equipo detenido. No requiere nota del
/// operador: la puesta en marcha se documenta sola.
pub fn apply_restore(vehicle: &Vehicle, hoy: NaiveDate) -> Result<Vehicle, CommandError> {
    if vehicle.operativo {
        return Err(CommandError::AlreadyOperative);
    }

    let mut next = vehicle.clone();
    next.operativo = true;
    next.motivo_baja = String::new();
    next.eventos.push(Event::new(
        hoy,
        EventDetail::Alta {
            horas: None,
            nota: "Puesta en marcha".to_string(),
        },
    ));
    Ok(next)
}

/// Alterna la operatividad según el estado actual del vehículo.
///
/// Si está operativo exige `motivo` y aplica la baja; si está detenido
/// lo retoma sin más datos. La asimetría es política de negocio:
/// detener una máquina siempre requiere causa documentada.
pub fn toggle_operability(
    vehicle: &Vehicle,
    motivo: Option<&str>,
    hoy: NaiveDate,
) -> Result<Vehicle, CommandError> {
    if vehicle.operativo {
        apply_downtime(vehicle, motivo.unwrap_or_default(), hoy)
    } else {
        apply_restore(vehicle, hoy)
    }
}

/// Interpreta el costo de un service con tolerancia: entrada no
/// numérica o negativa se guarda como cero en lugar de rechazarse.
pub fn parse_costo(raw: Option<&str>) -> Decimal {
    raw.and_then(|s| s.trim().parse::<Decimal>().ok())
        .filter(|c| !c.is_sign_negative())
        .unwrap_or(Decimal::ZERO)
}
