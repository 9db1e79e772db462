pub mod alert_service;
pub mod fleet_service;
pub mod maintenance_service;
pub mod report_service;
