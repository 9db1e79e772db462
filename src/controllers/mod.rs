pub mod alert_controller;
pub mod company_controller;
pub mod vehicle_controller;
