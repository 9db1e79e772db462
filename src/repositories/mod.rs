pub mod fleet_store;
pub mod memory_store;
pub mod postgres_store;

pub use fleet_store::FleetStore;
pub use memory_store::MemoryFleetStore;
pub use postgres_store::PostgresFleetStore;
