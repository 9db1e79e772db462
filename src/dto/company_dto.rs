use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para registrar una empresa
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterCompanyRequest {
    #[validate(length(min = 1, message = "El nombre de la empresa es requerido"))]
    pub nombre: String,

    #[validate(length(min = 1, message = "El CUIT es requerido"))]
    pub cuit: String,

    #[serde(default)]
    pub mail: String,

    #[serde(default)]
    pub tel: String,

    #[serde(default)]
    pub responsable: String,

    #[serde(default)]
    pub observaciones: String,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
