pub mod alert_dto;
pub mod company_dto;
pub mod vehicle_dto;
