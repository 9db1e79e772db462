pub mod connection;

pub use connection::{create_pool, mask_database_url};
