pub mod company;
pub mod event;
pub mod vehicle;

pub use company::Company;
pub use event::{Event, EventDetail};
pub use vehicle::Vehicle;
